//! Built-in JSON Schemas describing each message type's payload.
//!
//! Collaborator objects declare `additionalProperties: true` so strict mode
//! leaves them open; catalog-owned objects leave it unset.

use serde_json::{json, Value};

use crate::message_type::MessageType;

/// Payload schema for `message_type`, or `None` when it carries no payload.
pub(crate) fn builtin_schema(message_type: MessageType) -> Option<Value> {
    let schema = match message_type {
        MessageType::RequestUiWindow
        | MessageType::CancelPopupRequest
        | MessageType::Transport
        | MessageType::PopupOpened
        | MessageType::ReceiveBrowser
        | MessageType::ChangeAccount
        | MessageType::InsufficientFunds
        | MessageType::CloseUiWindow
        | MessageType::LoginChallengeRequest => return None,
        MessageType::RequestButton
        | MessageType::RequestPin
        | MessageType::InvalidPin
        | MessageType::RequestPassphraseOnDevice
        | MessageType::RequestPassphrase => object(json!({ "device": device() }), &["device"]),
        MessageType::IframeHandshake => object(json!({ "browser": browser() }), &["browser"]),
        MessageType::PopupHandshake => object(json!({ "settings": {}, "method": {} }), &[]),
        MessageType::RequestPermission => object(
            json!({
                "permissions": { "type": "array", "items": { "type": "string" } },
                "device": device()
            }),
            &["permissions", "device"],
        ),
        MessageType::ReceivePermission => object(
            json!({
                "granted": { "type": "boolean" },
                "remember": { "type": "boolean" }
            }),
            &["granted", "remember"],
        ),
        MessageType::RequestConfirmation => object(
            json!({
                "view": { "type": "string" },
                "label": { "type": "string" }
            }),
            &["view", "label"],
        ),
        MessageType::SelectDevice => object(
            json!({
                "devices": { "type": "array", "items": device() },
                "webusb": { "type": "boolean" }
            }),
            &["devices", "webusb"],
        ),
        MessageType::BrowserNotSupported | MessageType::BrowserOutdated => browser(),
        MessageType::Bootloader | MessageType::Initialize | MessageType::Firmware => device(),
        MessageType::SelectAccount => object(
            json!({
                "accounts": { "type": "array", "items": simple_account() },
                "coinInfo": coin_info(),
                "complete": { "type": "boolean" },
                "start": { "type": "boolean" }
            }),
            &["accounts", "coinInfo"],
        ),
        MessageType::SelectFee => object(
            json!({
                "coinInfo": coin_info(),
                "feeLevels": { "type": "array", "items": fee_level() }
            }),
            &["coinInfo", "feeLevels"],
        ),
        MessageType::UpdateCustomFee => object(
            json!({
                "coinInfo": coin_info(),
                "level": fee_level()
            }),
            &["coinInfo", "level"],
        ),
        MessageType::ReceiveConfirmation | MessageType::ReceivePin => json!({ "type": "string" }),
        MessageType::ReceiveDevice => object(
            json!({
                "device": device(),
                "remember": { "type": "boolean" }
            }),
            &["device", "remember"],
        ),
        MessageType::ReceivePassphrase => object(
            json!({
                "save": { "type": "boolean" },
                "value": { "type": "string" }
            }),
            &["save", "value"],
        ),
        MessageType::ReceiveAccount => json!({ "type": ["string", "null"] }),
        MessageType::ReceiveFee => json!({
            "oneOf": [
                object(
                    json!({
                        "type": { "const": "compose-custom" },
                        "value": { "type": "number" }
                    }),
                    &["type", "value"],
                ),
                object(json!({ "type": { "const": "change-account" } }), &["type"]),
                object(
                    json!({
                        "type": { "const": "send" },
                        "value": { "type": "string" }
                    }),
                    &["type", "value"],
                )
            ]
        }),
        MessageType::CustomMessageRequest => object(
            json!({
                "type": { "type": "string" },
                "message": { "type": "object", "additionalProperties": true }
            }),
            &["type", "message"],
        ),
    };
    Some(schema)
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

fn open_object(properties: Value, required: &[&str]) -> Value {
    let mut schema = object(properties, required);
    schema["additionalProperties"] = Value::Bool(true);
    schema
}

fn device() -> Value {
    open_object(
        json!({
            "path": { "type": "string" },
            "label": { "type": "string" },
            "type": { "enum": ["acquired", "unacquired", "unreadable"] }
        }),
        &["path", "label", "type"],
    )
}

fn browser() -> Value {
    open_object(
        json!({
            "name": { "type": "string" },
            "osname": { "type": "string" },
            "supported": { "type": "boolean" },
            "outdated": { "type": "boolean" },
            "mobile": { "type": "boolean" }
        }),
        &["name", "osname", "supported", "outdated", "mobile"],
    )
}

fn coin_info() -> Value {
    open_object(
        json!({
            "name": { "type": "string" },
            "shortcut": { "type": "string" }
        }),
        &["name", "shortcut"],
    )
}

fn simple_account() -> Value {
    open_object(
        json!({
            "index": { "type": "integer", "minimum": 0, "maximum": u32::MAX },
            "label": { "type": "string" },
            "discovered": { "type": "boolean" }
        }),
        &["index", "label", "discovered"],
    )
}

fn fee_level() -> Value {
    open_object(
        json!({
            "name": { "type": "string" },
            "fee": { "type": "string" },
            "disabled": { "type": "boolean" }
        }),
        &["name", "fee"],
    )
}
