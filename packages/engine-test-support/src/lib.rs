//! Engine test support utilities
//!
//! This crate provides utilities shared by unit and integration tests:
//! unified logging initialization and unique test data generation.

pub mod logging;
pub mod unique_helpers;
