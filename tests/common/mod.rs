//! Common utilities for integration tests
//!
//! Each test binary uses a different subset of the helpers.

#[allow(dead_code)]
pub mod fixtures;
#[allow(dead_code)]
pub mod test_helpers;
