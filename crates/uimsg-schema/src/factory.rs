use serde_json::Value;
use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::envelope::{CoreMessage, UI_EVENT};
use crate::error::{Result, SchemaError};
use crate::message::UiMessage;
use crate::message_type::MessageType;
use crate::registry::SchemaRegistry;

/// Validating constructor for UI message envelopes.
///
/// Every accepted `(tag, payload)` pair passes the registry's payload rule
/// and schema, and decodes into exactly one [`UiMessage`] variant.
pub struct MessageFactory {
    registry: SchemaRegistry,
}

impl MessageFactory {
    /// Create a factory over the built-in schemas.
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(SchemaRegistry::new()?))
    }

    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        Ok(Self::with_registry(SchemaRegistry::with_config(config)?))
    }

    pub fn with_registry(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Build an envelope from a wire tag and optional payload.
    ///
    /// The envelope carries `payload` unmodified.
    pub fn build(&self, tag: &str, payload: Option<Value>) -> Result<CoreMessage> {
        let message_type: MessageType = tag.parse().map_err(rejected)?;
        self.check(message_type, payload.as_ref())?;
        UiMessage::from_parts(message_type, payload.clone()).map_err(rejected)?;

        trace!(%message_type, "built ui message");
        Ok(CoreMessage::new(message_type, payload))
    }

    /// Validate a tag and payload and return the typed message.
    pub fn parse(&self, tag: &str, payload: Option<Value>) -> Result<UiMessage> {
        let message_type: MessageType = tag.parse().map_err(rejected)?;
        self.check(message_type, payload.as_ref())?;
        UiMessage::from_parts(message_type, payload).map_err(rejected)
    }

    /// Encode a typed message, validating it against the registered schema.
    pub fn encode(&self, message: &UiMessage) -> Result<CoreMessage> {
        let envelope = message.to_envelope()?;
        self.check(message.message_type(), envelope.payload.as_ref())?;
        Ok(envelope)
    }

    /// Validate a received envelope and return the typed message.
    pub fn decode(&self, envelope: &CoreMessage) -> Result<UiMessage> {
        if envelope.event != UI_EVENT {
            return Err(rejected(SchemaError::UnexpectedEvent(envelope.event.clone())));
        }
        self.parse(&envelope.msg_type, envelope.payload.clone())
    }

    /// Decode JSON envelope bytes, bounded by `max_envelope_size`.
    pub fn decode_slice(&self, bytes: &[u8]) -> Result<UiMessage> {
        let envelope = CoreMessage::from_slice(bytes, self.registry.config().max_envelope_size)
            .map_err(rejected)?;
        self.decode(&envelope)
    }

    fn check(&self, message_type: MessageType, payload: Option<&Value>) -> Result<()> {
        self.registry
            .validate(message_type, payload)
            .map_err(rejected)
    }
}

fn rejected(err: SchemaError) -> SchemaError {
    debug!(error = %err, "rejected ui message");
    err
}
