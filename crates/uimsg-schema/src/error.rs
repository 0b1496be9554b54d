use crate::message_type::MessageType;

/// Errors that can occur while building or decoding UI messages.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The tag is not a member of the message catalog.
    #[error("unknown message type: {0}")]
    UnknownMessageType(String),

    /// The payload is present, absent, or shaped incorrectly for the tag.
    #[error("payload does not match {message_type}: {message}")]
    PayloadShapeMismatch {
        message_type: MessageType,
        message: String,
    },

    /// A payload schema could not be compiled.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),

    /// A schema was registered for a message type that carries no payload.
    #[error("message type {0} carries no payload")]
    NoPayload(MessageType),

    /// The envelope or payload is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The encoded envelope exceeds the configured maximum size.
    #[error("envelope too large ({size} bytes, max {max})")]
    EnvelopeTooLarge { size: usize, max: usize },

    /// The envelope does not belong to the UI event stream.
    #[error("unexpected envelope event: {0}")]
    UnexpectedEvent(String),
}

impl SchemaError {
    pub(crate) fn mismatch(message_type: MessageType, message: impl Into<String>) -> Self {
        SchemaError::PayloadShapeMismatch {
            message_type,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
