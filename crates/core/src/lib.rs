// idqueue Core - Domain, Ports & the Identified Queue
// NO infrastructure dependencies: pure in-memory logic

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{AddOutcome, IdStrategy, IdentifiedQueue, QueueConfig};
pub use domain::{Item, QueueId, QueueSnapshot, QueuedItem};
pub use error::{AppError, Result};
pub use port::{IdProvider, ObserverId, QueueEvent, QueueObserver};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
