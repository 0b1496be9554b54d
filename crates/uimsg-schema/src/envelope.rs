use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::message_type::MessageType;

/// Event name shared by every UI message envelope.
pub const UI_EVENT: &str = "UI_EVENT";

/// Wire envelope carrying a UI message between the core and the UI layer.
///
/// `payload` is kept exactly as received: an explicit JSON `null` stays
/// `Some(Value::Null)` and is distinct from an absent payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreMessage {
    pub event: String,
    #[serde(rename = "type")]
    pub msg_type: String,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub payload: Option<Value>,
    /// Call identifier assigned by the core, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

impl CoreMessage {
    /// Create a UI event envelope.
    pub fn new(message_type: MessageType, payload: Option<Value>) -> Self {
        Self {
            event: UI_EVENT.to_string(),
            msg_type: message_type.as_str().to_string(),
            payload,
            id: None,
        }
    }

    /// Attach a call identifier.
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Resolve the envelope tag against the message catalog.
    pub fn message_type(&self) -> Result<MessageType> {
        self.msg_type.parse()
    }

    /// Encode as JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from JSON bytes, refusing inputs larger than `max_size`.
    pub fn from_slice(bytes: &[u8], max_size: usize) -> Result<Self> {
        if bytes.len() > max_size {
            return Err(SchemaError::EnvelopeTooLarge {
                size: bytes.len(),
                max: max_size,
            });
        }
        Ok(serde_json::from_slice(bytes)?)
    }
}

pub(crate) fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
