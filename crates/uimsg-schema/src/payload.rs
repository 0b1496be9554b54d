//! Payload shapes owned by the message catalog.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::envelope::deserialize_present;

use crate::types::{BrowserState, CoinInfo, Device, SelectFeeLevel, SimpleAccount};

/// Payload shared by every device-scoped request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePayload {
    pub device: Device,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IframeHandshake {
    pub browser: BrowserState,
}

/// Popup handshake contents. Both fields are uninterpreted; an explicit
/// `null` stays `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupHandshake {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub settings: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub method: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPermission {
    pub permissions: Vec<String>,
    pub device: Device,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivePermission {
    pub granted: bool,
    pub remember: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfirmation {
    pub view: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectDevice {
    pub devices: Vec<Device>,
    pub webusb: bool,
}

/// `complete` and `start` stay absent on the wire unless set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectAccount {
    pub accounts: Vec<SimpleAccount>,
    pub coin_info: CoinInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectFee {
    pub coin_info: CoinInfo,
    pub fee_levels: Vec<SelectFeeLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomFee {
    pub coin_info: CoinInfo,
    pub level: SelectFeeLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiveDevice {
    pub device: Device,
    pub remember: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivePassphrase {
    pub save: bool,
    pub value: String,
}

/// Fee decision returned by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FeeDecision {
    /// Recompose the transaction with a custom fee per byte.
    ComposeCustom { value: Number },
    ChangeAccount,
    /// Send with the named fee level.
    Send { value: String },
}

/// Account answer from the UI, which may leave the payload out or send `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountChoice {
    Absent,
    Null,
    Selected(String),
}

impl AccountChoice {
    pub fn from_payload(payload: Option<Value>) -> Result<Self, Value> {
        match payload {
            None => Ok(AccountChoice::Absent),
            Some(Value::Null) => Ok(AccountChoice::Null),
            Some(Value::String(account)) => Ok(AccountChoice::Selected(account)),
            Some(other) => Err(other),
        }
    }

    pub fn to_payload(&self) -> Option<Value> {
        match self {
            AccountChoice::Absent => None,
            AccountChoice::Null => Some(Value::Null),
            AccountChoice::Selected(account) => Some(Value::String(account.clone())),
        }
    }

    /// The selected account, if the UI named one.
    pub fn account(&self) -> Option<&str> {
        match self {
            AccountChoice::Selected(account) => Some(account),
            AccountChoice::Absent | AccountChoice::Null => None,
        }
    }
}

/// Request forwarded to a custom message handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMessageRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: Map<String, Value>,
}
