//! Success-or-failure composition helpers.
//!
//! The engine models every expected failure as a `Result` and composes
//! validation pipelines with `map`/`and_then`/`?`. This module adds the
//! combinators `std` lacks: side-effecting observation (`tap`/`tap_err`),
//! terminal folding, and a sequential async chain for pipelines that
//! interleave store I/O with pure validation steps.

use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

/// Extension combinators for `Result`.
pub trait ResultExt<T, E>: Sized {
    /// Observe the success value without transforming it.
    ///
    /// The observer receives `&T` and returns nothing, so it cannot affect
    /// the propagated outcome.
    fn tap(self, f: impl FnOnce(&T)) -> Self;

    /// Observe the error value without transforming it.
    fn tap_err(self, f: impl FnOnce(&E)) -> Self;

    /// Terminal pattern match, producing a plain value from either side.
    fn fold<R>(self, on_err: impl FnOnce(E) -> R, on_ok: impl FnOnce(T) -> R) -> R;

    /// Terminal extraction that panics with the error's `Display`.
    ///
    /// Reserved for programmer errors and test scaffolding. Engine code
    /// propagates expected failures with `?` instead.
    fn get_or_throw(self) -> T
    where
        E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn tap(self, f: impl FnOnce(&T)) -> Self {
        if let Ok(value) = &self {
            f(value);
        }
        self
    }

    fn tap_err(self, f: impl FnOnce(&E)) -> Self {
        if let Err(err) = &self {
            f(err);
        }
        self
    }

    fn fold<R>(self, on_err: impl FnOnce(E) -> R, on_ok: impl FnOnce(T) -> R) -> R {
        match self {
            Ok(value) => on_ok(value),
            Err(err) => on_err(err),
        }
    }

    fn get_or_throw(self) -> T
    where
        E: std::fmt::Display,
    {
        match self {
            Ok(value) => value,
            Err(err) => panic!("fatal: {err}"),
        }
    }
}

/// A pending `Result` with the same combinator surface as [`ResultExt`].
///
/// Steps run strictly in order: step n+1 never starts before step n has
/// resolved. This models sequencing of dependent I/O, not parallelism.
pub struct Chain<'a, T, E> {
    fut: BoxFuture<'a, Result<T, E>>,
}

impl<'a, T, E> Chain<'a, T, E>
where
    T: Send + 'a,
    E: Send + 'a,
{
    /// Start a chain from a pending result.
    pub fn start<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'a,
    {
        Self { fut: fut.boxed() }
    }

    /// Start a chain from an immediate success.
    pub fn of(value: T) -> Self {
        Self {
            fut: std::future::ready(Ok(value)).boxed(),
        }
    }

    /// Start a chain from an immediate failure.
    pub fn fail(err: E) -> Self {
        Self {
            fut: std::future::ready(Err(err)).boxed(),
        }
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> Chain<'a, U, E>
    where
        U: Send + 'a,
        F: FnOnce(T) -> U + Send + 'a,
    {
        Chain {
            fut: self.fut.map(|res| res.map(f)).boxed(),
        }
    }

    /// Dependent composition with a synchronous step.
    pub fn and_then<U, F>(self, f: F) -> Chain<'a, U, E>
    where
        U: Send + 'a,
        F: FnOnce(T) -> Result<U, E> + Send + 'a,
    {
        Chain {
            fut: self.fut.map(|res| res.and_then(f)).boxed(),
        }
    }

    /// Dependent composition with an asynchronous step. The step only runs
    /// once the preceding future has resolved successfully.
    pub fn and_then_async<U, F, Fut>(self, f: F) -> Chain<'a, U, E>
    where
        U: Send + 'a,
        F: FnOnce(T) -> Fut + Send + 'a,
        Fut: Future<Output = Result<U, E>> + Send + 'a,
    {
        Chain {
            fut: async move {
                match self.fut.await {
                    Ok(value) => f(value).await,
                    Err(err) => Err(err),
                }
            }
            .boxed(),
        }
    }

    /// Observe the success value without transforming it.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + Send + 'a,
    {
        Chain {
            fut: self.fut.map(|res| res.tap(f)).boxed(),
        }
    }

    /// Observe the error value without transforming it.
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + Send + 'a,
    {
        Chain {
            fut: self.fut.map(|res| res.tap_err(f)).boxed(),
        }
    }

    /// Terminal pattern match.
    pub async fn fold<R>(self, on_err: impl FnOnce(E) -> R, on_ok: impl FnOnce(T) -> R) -> R {
        self.fut.await.fold(on_err, on_ok)
    }

    /// Terminal extraction that panics with the error's `Display`.
    ///
    /// Same caveats as [`ResultExt::get_or_throw`].
    pub async fn get_or_throw(self) -> T
    where
        E: std::fmt::Display,
    {
        self.fut.await.get_or_throw()
    }

    /// Resolve the chain into its underlying `Result`.
    pub async fn run(self) -> Result<T, E> {
        self.fut.await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn tap_observes_without_transforming() {
        let seen = std::cell::Cell::new(0);
        let res: Result<i32, &str> = Ok(41);
        let out = res.tap(|v| seen.set(*v)).map(|v| v + 1);
        assert_eq!(out, Ok(42));
        assert_eq!(seen.get(), 41);
    }

    #[test]
    fn tap_err_skips_success() {
        let res: Result<i32, String> = Ok(1);
        let out = res.tap_err(|_| panic!("observer must not run on success"));
        assert_eq!(out, Ok(1));
    }

    #[test]
    fn fold_selects_the_matching_arm() {
        let ok: Result<i32, String> = Ok(2);
        let err: Result<i32, String> = Err("boom".into());
        assert_eq!(ok.fold(|_| 0, |v| v * 10), 20);
        assert_eq!(err.fold(|e| e.len() as i32, |_| 0), 4);
    }

    #[test]
    #[should_panic(expected = "fatal: boom")]
    fn get_or_throw_panics_on_failure() {
        let res: Result<i32, String> = Err("boom".into());
        res.get_or_throw();
    }

    #[tokio::test]
    async fn chain_runs_steps_in_order() {
        let order = Arc::new(AtomicUsize::new(0));
        let first = order.clone();
        let second = order.clone();

        let result: Result<usize, String> = Chain::of(1usize)
            .and_then_async(move |v| async move {
                assert_eq!(first.fetch_add(1, Ordering::SeqCst), 0);
                Ok(v + 1)
            })
            .and_then_async(move |v| async move {
                assert_eq!(second.fetch_add(1, Ordering::SeqCst), 1);
                Ok(v + 1)
            })
            .run()
            .await;

        assert_eq!(result, Ok(3));
        assert_eq!(order.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn chain_short_circuits_on_failure() {
        let result: Result<i32, String> = Chain::fail("nope".to_string())
            .and_then(|v: i32| Ok(v + 1))
            .tap(|_| panic!("success observer must not run"))
            .run()
            .await;
        assert_eq!(result, Err("nope".to_string()));
    }

    #[tokio::test]
    async fn chain_fold_is_terminal() {
        let msg = Chain::<i32, String>::of(7)
            .map(|v| v * 6)
            .fold(|e| format!("err {e}"), |v| format!("ok {v}"))
            .await;
        assert_eq!(msg, "ok 42");
    }
}
