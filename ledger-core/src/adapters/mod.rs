//! Adapters - concrete implementations of ports
//!
//! - **random**: uniform random account numbers (production)
//! - **scripted**: replays a fixed list of numbers (tests and the demo run)

pub mod random;
pub mod scripted;

pub use random::RandomAccountNumbers;
pub use scripted::ScriptedAccountNumbers;
