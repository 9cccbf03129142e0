// Domain Layer - Items, queued members and snapshots

pub mod error;
pub mod item;
pub mod queue;

// Re-exports
pub use error::DomainError;
pub use item::{Item, ID_FIELD, QUEUE_ID_FIELD};
pub use queue::{QueueId, QueueSnapshot, QueuedItem};
