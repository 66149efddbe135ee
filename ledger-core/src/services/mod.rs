//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

pub mod logging;
mod registry;
mod status;

pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use registry::{AccountNumberPolicy, AccountRegistry, MAX_NUMBER_ATTEMPTS};
pub use status::{AccountSummary, StatusService, StatusSummary};
