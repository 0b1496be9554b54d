//! Conforming sample payloads shared by unit tests.

use serde_json::{json, Value};

use crate::message_type::MessageType;

pub(crate) fn device_value() -> Value {
    json!({ "path": "1", "label": "My Trezor", "type": "acquired" })
}

pub(crate) fn browser_value() -> Value {
    json!({
        "name": "firefox",
        "osname": "linux",
        "supported": true,
        "outdated": false,
        "mobile": false
    })
}

pub(crate) fn coin_info_value() -> Value {
    json!({ "name": "Bitcoin", "shortcut": "BTC", "decimals": 8 })
}

pub(crate) fn fee_level_value() -> Value {
    json!({ "name": "normal", "fee": "2260", "feePerByte": "10" })
}

/// A payload every registry configuration accepts for `message_type`.
pub(crate) fn payload_for(message_type: MessageType) -> Option<Value> {
    match message_type {
        MessageType::RequestUiWindow
        | MessageType::CancelPopupRequest
        | MessageType::Transport
        | MessageType::PopupOpened
        | MessageType::ReceiveBrowser
        | MessageType::ChangeAccount
        | MessageType::InsufficientFunds
        | MessageType::CloseUiWindow
        | MessageType::LoginChallengeRequest => None,
        MessageType::RequestButton
        | MessageType::RequestPin
        | MessageType::InvalidPin
        | MessageType::RequestPassphraseOnDevice
        | MessageType::RequestPassphrase => Some(json!({ "device": device_value() })),
        MessageType::IframeHandshake => Some(json!({ "browser": browser_value() })),
        MessageType::PopupHandshake => Some(json!({
            "settings": { "origin": "https://example.com" },
            "method": "getPublicKey"
        })),
        MessageType::RequestPermission => Some(json!({
            "permissions": ["read", "write"],
            "device": device_value()
        })),
        MessageType::ReceivePermission => Some(json!({ "granted": true, "remember": false })),
        MessageType::RequestConfirmation => Some(json!({
            "view": "export-xpub",
            "label": "Export public key"
        })),
        MessageType::SelectDevice => Some(json!({
            "devices": [device_value()],
            "webusb": true
        })),
        MessageType::BrowserNotSupported | MessageType::BrowserOutdated => Some(browser_value()),
        MessageType::Bootloader | MessageType::Initialize | MessageType::Firmware => {
            Some(device_value())
        }
        MessageType::SelectAccount => Some(json!({
            "accounts": [{ "index": 0, "label": "Account #1", "discovered": true }],
            "coinInfo": coin_info_value()
        })),
        MessageType::SelectFee => Some(json!({
            "coinInfo": coin_info_value(),
            "feeLevels": [fee_level_value()]
        })),
        MessageType::UpdateCustomFee => Some(json!({
            "coinInfo": coin_info_value(),
            "level": fee_level_value()
        })),
        MessageType::ReceiveConfirmation => Some(json!("true")),
        MessageType::ReceiveDevice => Some(json!({ "device": device_value(), "remember": true })),
        MessageType::ReceivePin => Some(json!("1234")),
        MessageType::ReceivePassphrase => Some(json!({ "save": true, "value": "hunter2" })),
        MessageType::ReceiveAccount => Some(json!("1")),
        MessageType::ReceiveFee => Some(json!({ "type": "send", "value": "normal" })),
        MessageType::CustomMessageRequest => Some(json!({
            "type": "sign-message",
            "message": { "path": "m/44'/0'/0'" }
        })),
    }
}
