// Port Layer - Interfaces the queue depends on

pub mod id_provider; // For deterministic testing
pub mod observer;

// Re-exports
pub use id_provider::{IdProvider, SequentialIdProvider, UuidProvider};
pub use observer::{ObserverId, QueueEvent, QueueObserver};
