//! Closed set of UI message type tags.
//!
//! Every tag belongs to exactly one payload family, travels in exactly one
//! direction across the core/UI boundary, and has exactly one payload rule.

use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Discriminant of a UI message, as carried in the envelope `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageType {
    RequestUiWindow,
    CancelPopupRequest,
    Transport,
    PopupOpened,
    ReceiveBrowser,
    ChangeAccount,
    InsufficientFunds,
    CloseUiWindow,
    LoginChallengeRequest,
    RequestButton,
    RequestPin,
    InvalidPin,
    RequestPassphraseOnDevice,
    RequestPassphrase,
    IframeHandshake,
    PopupHandshake,
    RequestPermission,
    ReceivePermission,
    RequestConfirmation,
    SelectDevice,
    BrowserNotSupported,
    BrowserOutdated,
    Bootloader,
    Initialize,
    Firmware,
    SelectAccount,
    SelectFee,
    UpdateCustomFee,
    ReceiveConfirmation,
    ReceiveDevice,
    ReceivePin,
    ReceivePassphrase,
    ReceiveAccount,
    ReceiveFee,
    CustomMessageRequest,
}

/// Payload family a message type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Tag only.
    WithoutPayload,
    /// Payload is `{ device }`.
    Device,
    /// Payload shape unique to the message type.
    Custom,
}

/// Which side of the boundary produces the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Produced by the core, consumed by the UI.
    ToUi,
    /// Produced by the UI, consumed by the core.
    FromUi,
}

/// Whether a payload must, may, or must not accompany the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadRule {
    None,
    Required,
    Optional,
}

impl MessageType {
    /// Every message type, in catalog order.
    pub const ALL: [MessageType; 35] = [
        MessageType::RequestUiWindow,
        MessageType::CancelPopupRequest,
        MessageType::Transport,
        MessageType::PopupOpened,
        MessageType::ReceiveBrowser,
        MessageType::ChangeAccount,
        MessageType::InsufficientFunds,
        MessageType::CloseUiWindow,
        MessageType::LoginChallengeRequest,
        MessageType::RequestButton,
        MessageType::RequestPin,
        MessageType::InvalidPin,
        MessageType::RequestPassphraseOnDevice,
        MessageType::RequestPassphrase,
        MessageType::IframeHandshake,
        MessageType::PopupHandshake,
        MessageType::RequestPermission,
        MessageType::ReceivePermission,
        MessageType::RequestConfirmation,
        MessageType::SelectDevice,
        MessageType::BrowserNotSupported,
        MessageType::BrowserOutdated,
        MessageType::Bootloader,
        MessageType::Initialize,
        MessageType::Firmware,
        MessageType::SelectAccount,
        MessageType::SelectFee,
        MessageType::UpdateCustomFee,
        MessageType::ReceiveConfirmation,
        MessageType::ReceiveDevice,
        MessageType::ReceivePin,
        MessageType::ReceivePassphrase,
        MessageType::ReceiveAccount,
        MessageType::ReceiveFee,
        MessageType::CustomMessageRequest,
    ];

    /// Wire tag carried in the envelope `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::RequestUiWindow => "ui-request_window",
            MessageType::CancelPopupRequest => "ui-cancel-popup-request",
            MessageType::Transport => "ui-no_transport",
            MessageType::PopupOpened => "popup-opened",
            MessageType::ReceiveBrowser => "ui-receive_browser",
            MessageType::ChangeAccount => "ui-change_account",
            MessageType::InsufficientFunds => "ui-insufficient_funds",
            MessageType::CloseUiWindow => "ui-close_window",
            MessageType::LoginChallengeRequest => "ui-login_challenge_request",
            MessageType::RequestButton => "ui-button",
            MessageType::RequestPin => "ui-request_pin",
            MessageType::InvalidPin => "ui-invalid_pin",
            MessageType::RequestPassphraseOnDevice => "ui-request_passphrase_on_device",
            MessageType::RequestPassphrase => "ui-request_passphrase",
            MessageType::IframeHandshake => "iframe-handshake",
            MessageType::PopupHandshake => "popup-handshake",
            MessageType::RequestPermission => "ui-request_permission",
            MessageType::ReceivePermission => "ui-receive_permission",
            MessageType::RequestConfirmation => "ui-request_confirmation",
            MessageType::SelectDevice => "ui-select_device",
            MessageType::BrowserNotSupported => "ui-browser_not_supported",
            MessageType::BrowserOutdated => "ui-browser_outdated",
            MessageType::Bootloader => "ui-device_bootloader_mode",
            MessageType::Initialize => "ui-device_not_initialized",
            MessageType::Firmware => "ui-device_firmware_old",
            MessageType::SelectAccount => "ui-select_account",
            MessageType::SelectFee => "ui-select_fee",
            MessageType::UpdateCustomFee => "ui-update_custom_fee",
            MessageType::ReceiveConfirmation => "ui-receive_confirmation",
            MessageType::ReceiveDevice => "ui-receive_device",
            MessageType::ReceivePin => "ui-receive_pin",
            MessageType::ReceivePassphrase => "ui-receive_passphrase",
            MessageType::ReceiveAccount => "ui-receive_account",
            MessageType::ReceiveFee => "ui-receive_fee",
            MessageType::CustomMessageRequest => "ui-custom_request",
        }
    }

    pub fn family(self) -> Family {
        match self {
            MessageType::RequestUiWindow
            | MessageType::CancelPopupRequest
            | MessageType::Transport
            | MessageType::PopupOpened
            | MessageType::ReceiveBrowser
            | MessageType::ChangeAccount
            | MessageType::InsufficientFunds
            | MessageType::CloseUiWindow
            | MessageType::LoginChallengeRequest => Family::WithoutPayload,
            MessageType::RequestButton
            | MessageType::RequestPin
            | MessageType::InvalidPin
            | MessageType::RequestPassphraseOnDevice
            | MessageType::RequestPassphrase => Family::Device,
            _ => Family::Custom,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            MessageType::ReceiveBrowser
            | MessageType::ReceivePermission
            | MessageType::ReceiveConfirmation
            | MessageType::ReceiveDevice
            | MessageType::ReceivePin
            | MessageType::ReceivePassphrase
            | MessageType::ReceiveAccount
            | MessageType::ReceiveFee
            | MessageType::CustomMessageRequest => Direction::FromUi,
            _ => Direction::ToUi,
        }
    }

    pub fn payload_rule(self) -> PayloadRule {
        match self.family() {
            Family::WithoutPayload => PayloadRule::None,
            Family::Device => PayloadRule::Required,
            Family::Custom => match self {
                MessageType::PopupHandshake | MessageType::ReceiveAccount => PayloadRule::Optional,
                _ => PayloadRule::Required,
            },
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = SchemaError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        MessageType::ALL
            .into_iter()
            .find(|message_type| message_type.as_str() == tag)
            .ok_or_else(|| SchemaError::UnknownMessageType(tag.to_string()))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::WithoutPayload => "no-payload",
            Family::Device => "device",
            Family::Custom => "custom",
        })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::ToUi => "to-ui",
            Direction::FromUi => "from-ui",
        })
    }
}

impl fmt::Display for PayloadRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PayloadRule::None => "none",
            PayloadRule::Required => "required",
            PayloadRule::Optional => "optional",
        })
    }
}
