// Queue Domain Model

use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::item::Item;

/// System-generated member identifier
pub type QueueId = String;

/// Queue member: the user item plus its generated `queueId`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedItem {
    queue_id: QueueId,

    #[serde(flatten)]
    item: Item,
}

impl QueuedItem {
    pub fn new(queue_id: impl Into<QueueId>, item: Item) -> Self {
        Self {
            queue_id: queue_id.into(),
            item,
        }
    }

    pub fn queue_id(&self) -> &str {
        &self.queue_id
    }

    /// User-supplied id, if any
    pub fn id(&self) -> Option<&str> {
        self.item.id.as_deref()
    }

    /// The key `add` handed out for this member: the user id when present,
    /// the generated queue id otherwise.
    pub fn identifier(&self) -> &str {
        self.id().unwrap_or(&self.queue_id)
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.item.get(key)
    }

    pub fn into_item(self) -> Item {
        self.item
    }
}

/// Immutable view of the queue at one point in time.
///
/// Clones share the same backing slice.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueSnapshot {
    items: Arc<[QueuedItem]>,
}

impl QueueSnapshot {
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn items(&self) -> &[QueuedItem] {
        &self.items
    }

    /// First member, `None` when empty
    pub fn head(&self) -> Option<&QueuedItem> {
        self.items.first()
    }

    pub fn get(&self, index: usize) -> Option<&QueuedItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueuedItem> {
        self.items.iter()
    }

    /// Index of the member `remove_by_id` would pick for `identifier`
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|member| member.id() == Some(identifier))
            .or_else(|| {
                self.items
                    .iter()
                    .position(|member| member.queue_id() == identifier)
            })
    }

    /// True when some member carries `id` as its user-supplied id
    pub fn contains_user_id(&self, id: &str) -> bool {
        self.items.iter().any(|member| member.id() == Some(id))
    }

    /// JSON array of the members, in order
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl Default for QueueSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<QueuedItem>> for QueueSnapshot {
    fn from(items: Vec<QueuedItem>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl<'a> IntoIterator for &'a QueueSnapshot {
    type Item = &'a QueuedItem;
    type IntoIter = std::slice::Iter<'a, QueuedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for QueueSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}
