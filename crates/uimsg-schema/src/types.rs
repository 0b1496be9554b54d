//! Collaborator types referenced by the message catalog.
//!
//! These are owned by the device and wallet subsystems. Only the fields the
//! catalog relies on are typed; everything else is carried through `extra`
//! untouched so envelopes survive a decode/encode cycle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Connection state of a hardware device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Acquired,
    Unacquired,
    Unreadable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Transport-level device path.
    pub path: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Device {
    pub fn new(path: impl Into<String>, label: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            kind,
            extra: Map::new(),
        }
    }
}

/// Browser capabilities detected by the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserState {
    pub name: String,
    pub osname: String,
    pub supported: bool,
    pub outdated: bool,
    pub mobile: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinInfo {
    pub name: String,
    pub shortcut: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CoinInfo {
    pub fn new(name: impl Into<String>, shortcut: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shortcut: shortcut.into(),
            extra: Map::new(),
        }
    }
}

/// Account entry offered during account discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleAccount {
    pub index: u32,
    pub label: String,
    pub discovered: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fee level offered for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectFeeLevel {
    pub name: String,
    pub fee: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
