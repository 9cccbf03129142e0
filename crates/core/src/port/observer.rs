// Queue Observer Port
// Synchronous change notification for non-async consumers

use crate::domain::{QueueId, QueueSnapshot};

/// Handle returned by `IdentifiedQueue::observe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// What changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    /// A member was appended
    Added {
        identifier: String,
        queue_id: QueueId,
    },
    /// A member was removed
    Removed {
        identifier: String,
        queue_id: QueueId,
    },
}

impl QueueEvent {
    pub fn queue_id(&self) -> &str {
        match self {
            QueueEvent::Added { queue_id, .. } | QueueEvent::Removed { queue_id, .. } => queue_id,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            QueueEvent::Added { identifier, .. } | QueueEvent::Removed { identifier, .. } => {
                identifier
            }
        }
    }
}

/// Observer interface
///
/// Called after each successful mutation, with the snapshot that mutation
/// produced. Never called for no-op adds or removals.
#[cfg_attr(test, mockall::automock)]
pub trait QueueObserver: Send {
    fn on_change(&self, event: &QueueEvent, snapshot: &QueueSnapshot);
}

impl<F> QueueObserver for F
where
    F: Fn(&QueueEvent, &QueueSnapshot) + Send,
{
    fn on_change(&self, event: &QueueEvent, snapshot: &QueueSnapshot) {
        self(event, snapshot)
    }
}
