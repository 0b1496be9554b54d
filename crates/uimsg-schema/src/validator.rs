use jsonschema::Validator;
use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::message_type::MessageType;

pub(crate) fn validate_payload(
    message_type: MessageType,
    payload: &Value,
    validator: &Validator,
) -> Result<()> {
    let mut errors = validator.iter_errors(payload);
    if let Some(first) = errors.next() {
        let mut message = first.to_string();
        for err in errors.take(3) {
            message.push_str("; ");
            message.push_str(&err.to_string());
        }
        return Err(SchemaError::PayloadShapeMismatch {
            message_type,
            message,
        });
    }

    Ok(())
}
