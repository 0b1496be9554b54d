//! Closed catalog of hardware-wallet UI messages.
//!
//! Every message exchanged between the wallet core and its UI layer is a
//! [`UiMessage`]: a wire tag plus the one payload shape that tag allows.
//! [`MessageFactory`] turns untyped `(tag, payload)` pairs into validated
//! [`CoreMessage`] envelopes and back, rejecting unknown tags and
//! mismatched payloads at construction time.

pub mod config;
pub mod envelope;
pub mod error;
pub mod factory;
pub mod message;
pub mod message_type;
pub mod payload;
pub mod registry;
pub mod types;

mod shapes;
mod validator;

#[cfg(test)]
mod fixtures;

pub use config::{RegistryConfig, DEFAULT_MAX_ENVELOPE_SIZE};
pub use envelope::{CoreMessage, UI_EVENT};
pub use error::{Result, SchemaError};
pub use factory::MessageFactory;
pub use message::{BrowserIssue, DeviceMode, DeviceRequest, Notice, UiMessage};
pub use message_type::{Direction, Family, MessageType, PayloadRule};
pub use registry::SchemaRegistry;
pub use types::{BrowserState, CoinInfo, Device, DeviceKind, SelectFeeLevel, SimpleAccount};
