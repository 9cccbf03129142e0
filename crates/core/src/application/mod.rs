// Application Layer - The queue service and its configuration

pub mod config;
pub mod identified_queue;

// Re-exports
pub use config::{IdStrategy, QueueConfig};
pub use identified_queue::{AddOutcome, IdentifiedQueue};
