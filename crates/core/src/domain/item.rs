// Item Domain Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{DomainError, Result};

/// Field name of the user-supplied identity
pub const ID_FIELD: &str = "id";

/// Field name of the system-generated identity
pub const QUEUE_ID_FIELD: &str = "queueId";

/// A user-supplied record with arbitrary fields and an optional `id`.
///
/// `id: null` in JSON input is read as an absent id. `fields` never holds
/// `id` or `queueId`: every construction path strips them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Item {
    /// Item without an id and without fields
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: Map::new(),
        }
    }

    /// Builder-style field insertion. Identity keys are owned by the queue
    /// and are ignored here.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if is_reserved(&key) {
            tracing::warn!(key = %key, "Ignoring reserved identity key set as item field");
            return self;
        }
        self.fields.insert(key, value.into());
        self
    }

    /// Build an item from a JSON object.
    ///
    /// A `queueId` key in the input is dropped: the queue always assigns its own.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut fields = match value {
            Value::Object(map) => map,
            other => return Err(DomainError::NotAnObject(json_kind(&other).to_string())),
        };

        let id = match fields.remove(ID_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => return Err(DomainError::InvalidId(other.to_string())),
        };
        fields.remove(QUEUE_ID_FIELD);

        Ok(Self { id, fields })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// User-defined fields, without the identity keys
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn to_value(&self) -> Value {
        let mut map = self.fields.clone();
        if let Some(id) = &self.id {
            map.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        }
        Value::Object(map)
    }
}

impl TryFrom<Value> for Item {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

fn is_reserved(key: &str) -> bool {
    key == ID_FIELD || key == QUEUE_ID_FIELD
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
