//! Validated UI messages for hardware-wallet cores and their user interfaces.
//!
//! # Crate Structure
//!
//! - [`schema`]: message catalog, payload schemas, envelope factory
//!
//! ```
//! use uimsg::schema::{MessageFactory, MessageType};
//!
//! let factory = MessageFactory::new().unwrap();
//! let envelope = factory.build("ui-receive_pin", Some("1234".into())).unwrap();
//! assert_eq!(envelope.message_type().unwrap(), MessageType::ReceivePin);
//! ```

/// Re-export schema types.
pub mod schema {
    pub use uimsg_schema::*;
}
