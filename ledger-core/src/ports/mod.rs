//! Ports - trait definitions for external dependencies
//!
//! These traits define the boundaries of the core. Adapters implement
//! them for concrete sources.

mod account_numbers;

pub use account_numbers::AccountNumberSource;
