// Identified Queue - ordered, deduplicated, observable

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::domain::{Item, QueueId, QueueSnapshot, QueuedItem};
use crate::error::Result;
use crate::port::{IdProvider, ObserverId, QueueEvent, QueueObserver, UuidProvider};

/// Result of `IdentifiedQueue::insert`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Appended to the end of the queue
    Inserted {
        identifier: String,
        queue_id: QueueId,
    },
    /// A member already carries this user id; nothing changed
    Duplicate { id: String },
}

impl AddOutcome {
    /// Removal key for `Inserted`. For `Duplicate` this is the supplied id,
    /// which names the member that was already there.
    pub fn identifier(&self) -> &str {
        match self {
            AddOutcome::Inserted { identifier, .. } => identifier,
            AddOutcome::Duplicate { id } => id,
        }
    }

    pub fn into_identifier(self) -> String {
        match self {
            AddOutcome::Inserted { identifier, .. } => identifier,
            AddOutcome::Duplicate { id } => id,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, AddOutcome::Inserted { .. })
    }
}

/// Ordered queue of uniquely identified items.
///
/// Every mutation replaces the current [`QueueSnapshot`], publishes it to
/// [`subscribe`](Self::subscribe) receivers and then calls registered
/// observers in registration order. No-op mutations publish nothing.
pub struct IdentifiedQueue {
    snapshot: QueueSnapshot,
    id_provider: Arc<dyn IdProvider>,
    observers: Vec<(ObserverId, Box<dyn QueueObserver>)>,
    next_observer: u64,
    publisher: watch::Sender<QueueSnapshot>,
}

impl IdentifiedQueue {
    /// Empty queue with UUID v4 queue ids
    pub fn new() -> Self {
        Self::with_id_provider(Arc::new(UuidProvider))
    }

    pub fn with_id_provider(id_provider: Arc<dyn IdProvider>) -> Self {
        let snapshot = QueueSnapshot::empty();
        let (publisher, _) = watch::channel(snapshot.clone());
        Self {
            snapshot,
            id_provider,
            observers: Vec::new(),
            next_observer: 0,
            publisher,
        }
    }

    /// Append `item` unless its `id` is already taken; returns the removal key.
    ///
    /// See [`insert`](Self::insert) for the outcome-typed variant.
    pub fn add(&mut self, item: Item) -> String {
        self.insert(item).into_identifier()
    }

    /// `add` for a raw JSON object; fails only if `value` is not a valid item
    pub fn add_value(&mut self, value: Value) -> Result<String> {
        Ok(self.add(Item::from_value(value)?))
    }

    pub fn insert(&mut self, item: Item) -> AddOutcome {
        // Generated unconditionally, even when the add turns out to be a duplicate
        let queue_id = self.id_provider.generate_id();

        if let Some(id) = item.id.as_deref() {
            if self.snapshot.contains_user_id(id) {
                trace!(id = %id, queue_id = %queue_id, "Ignoring add with duplicate id");
                return AddOutcome::Duplicate { id: id.to_string() };
            }
        }

        let identifier = item.id.clone().unwrap_or_else(|| queue_id.clone());
        let mut items = self.snapshot.items().to_vec();
        items.push(QueuedItem::new(queue_id.clone(), item));

        debug!(
            identifier = %identifier,
            queue_id = %queue_id,
            len = items.len(),
            "Item added"
        );

        self.commit(
            items,
            QueueEvent::Added {
                identifier: identifier.clone(),
                queue_id: queue_id.clone(),
            },
        );

        AddOutcome::Inserted {
            identifier,
            queue_id,
        }
    }

    /// Remove the first member whose `id` equals `identifier`, or failing
    /// that the first whose `queueId` does. Unknown identifiers are ignored.
    pub fn remove_by_id(&mut self, identifier: &str) {
        self.take_by_id(identifier);
    }

    /// Like `remove_by_id`, returning the removed member
    pub fn take_by_id(&mut self, identifier: &str) -> Option<QueuedItem> {
        let Some(index) = self.snapshot.position(identifier) else {
            trace!(identifier = %identifier, "Ignoring removal of unknown identifier");
            return None;
        };

        let mut items = self.snapshot.items().to_vec();
        let removed = items.remove(index);

        debug!(
            identifier = %identifier,
            queue_id = %removed.queue_id(),
            len = items.len(),
            "Item removed"
        );

        self.commit(
            items,
            QueueEvent::Removed {
                identifier: removed.identifier().to_string(),
                queue_id: removed.queue_id().to_string(),
            },
        );

        Some(removed)
    }

    /// Current contents
    pub fn queue(&self) -> QueueSnapshot {
        self.snapshot.clone()
    }

    /// First member, `None` when empty
    pub fn head(&self) -> Option<&QueuedItem> {
        self.snapshot.head()
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// True when `remove_by_id(identifier)` would remove something
    pub fn contains(&self, identifier: &str) -> bool {
        self.snapshot.position(identifier).is_some()
    }

    /// Member `remove_by_id(identifier)` would remove
    pub fn get(&self, identifier: &str) -> Option<&QueuedItem> {
        self.snapshot
            .position(identifier)
            .and_then(|index| self.snapshot.get(index))
    }

    /// Reactive binding: the receiver always holds the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<QueueSnapshot> {
        self.publisher.subscribe()
    }

    pub fn observe(&mut self, observer: impl QueueObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(observer = id.0, total = self.observers.len(), "Observer registered");
        id
    }

    /// Returns false if `id` was not registered
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        let removed = self.observers.len() != before;
        if removed {
            debug!(observer = id.0, total = self.observers.len(), "Observer removed");
        }
        removed
    }

    fn commit(&mut self, items: Vec<QueuedItem>, event: QueueEvent) {
        self.snapshot = QueueSnapshot::from(items);
        self.publisher.send_replace(self.snapshot.clone());
        for (_, observer) in &self.observers {
            observer.on_change(&event, &self.snapshot);
        }
    }
}

impl Default for IdentifiedQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdentifiedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifiedQueue")
            .field("items", &self.snapshot.items())
            .field("observers", &self.observers.len())
            .finish()
    }
}
