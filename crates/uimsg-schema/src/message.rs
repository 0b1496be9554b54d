//! The `UiMessage` union and its tag-based dispatch.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::envelope::CoreMessage;
use crate::error::{Result, SchemaError};
use crate::message_type::MessageType;
use crate::payload::{
    AccountChoice, CustomMessageRequest, DevicePayload, FeeDecision, IframeHandshake, PopupHandshake,
    ReceiveDevice, ReceivePassphrase, ReceivePermission, RequestConfirmation, RequestPermission,
    SelectAccount, SelectDevice, SelectFee, UpdateCustomFee,
};
use crate::types::{BrowserState, Device};

/// Messages that carry no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    RequestUiWindow,
    CancelPopupRequest,
    Transport,
    PopupOpened,
    ReceiveBrowser,
    ChangeAccount,
    InsufficientFunds,
    CloseUiWindow,
    LoginChallengeRequest,
}

impl Notice {
    pub fn message_type(self) -> MessageType {
        match self {
            Notice::RequestUiWindow => MessageType::RequestUiWindow,
            Notice::CancelPopupRequest => MessageType::CancelPopupRequest,
            Notice::Transport => MessageType::Transport,
            Notice::PopupOpened => MessageType::PopupOpened,
            Notice::ReceiveBrowser => MessageType::ReceiveBrowser,
            Notice::ChangeAccount => MessageType::ChangeAccount,
            Notice::InsufficientFunds => MessageType::InsufficientFunds,
            Notice::CloseUiWindow => MessageType::CloseUiWindow,
            Notice::LoginChallengeRequest => MessageType::LoginChallengeRequest,
        }
    }
}

/// Requests scoped to a single device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceRequest {
    Button,
    Pin,
    InvalidPin,
    PassphraseOnDevice,
    Passphrase,
}

impl DeviceRequest {
    pub fn message_type(self) -> MessageType {
        match self {
            DeviceRequest::Button => MessageType::RequestButton,
            DeviceRequest::Pin => MessageType::RequestPin,
            DeviceRequest::InvalidPin => MessageType::InvalidPin,
            DeviceRequest::PassphraseOnDevice => MessageType::RequestPassphraseOnDevice,
            DeviceRequest::Passphrase => MessageType::RequestPassphrase,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserIssue {
    NotSupported,
    Outdated,
}

impl BrowserIssue {
    pub fn message_type(self) -> MessageType {
        match self {
            BrowserIssue::NotSupported => MessageType::BrowserNotSupported,
            BrowserIssue::Outdated => MessageType::BrowserOutdated,
        }
    }
}

/// Device modes the core cannot proceed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMode {
    Bootloader,
    Initialize,
    Firmware,
}

impl DeviceMode {
    pub fn message_type(self) -> MessageType {
        match self {
            DeviceMode::Bootloader => MessageType::Bootloader,
            DeviceMode::Initialize => MessageType::Initialize,
            DeviceMode::Firmware => MessageType::Firmware,
        }
    }
}

/// A message exchanged between the core and the UI layer.
///
/// Each variant fixes the payload shape for the tags it covers, so a value
/// of this type is always well-formed.
#[derive(Debug, Clone, PartialEq)]
pub enum UiMessage {
    Notice(Notice),
    DeviceRequest {
        request: DeviceRequest,
        payload: DevicePayload,
    },
    IframeHandshake(IframeHandshake),
    PopupHandshake(Option<PopupHandshake>),
    RequestPermission(RequestPermission),
    ReceivePermission(ReceivePermission),
    RequestConfirmation(RequestConfirmation),
    SelectDevice(SelectDevice),
    BrowserIssue {
        issue: BrowserIssue,
        browser: BrowserState,
    },
    UnexpectedDeviceMode {
        mode: DeviceMode,
        device: Device,
    },
    SelectAccount(SelectAccount),
    SelectFee(SelectFee),
    UpdateCustomFee(UpdateCustomFee),
    /// Carried as a string until the core settles on a boolean.
    ReceiveConfirmation(String),
    ReceiveDevice(ReceiveDevice),
    ReceivePin(String),
    ReceivePassphrase(ReceivePassphrase),
    ReceiveAccount(AccountChoice),
    ReceiveFee(FeeDecision),
    CustomMessageRequest(CustomMessageRequest),
}

impl UiMessage {
    pub fn message_type(&self) -> MessageType {
        match self {
            UiMessage::Notice(notice) => notice.message_type(),
            UiMessage::DeviceRequest { request, .. } => request.message_type(),
            UiMessage::IframeHandshake(_) => MessageType::IframeHandshake,
            UiMessage::PopupHandshake(_) => MessageType::PopupHandshake,
            UiMessage::RequestPermission(_) => MessageType::RequestPermission,
            UiMessage::ReceivePermission(_) => MessageType::ReceivePermission,
            UiMessage::RequestConfirmation(_) => MessageType::RequestConfirmation,
            UiMessage::SelectDevice(_) => MessageType::SelectDevice,
            UiMessage::BrowserIssue { issue, .. } => issue.message_type(),
            UiMessage::UnexpectedDeviceMode { mode, .. } => mode.message_type(),
            UiMessage::SelectAccount(_) => MessageType::SelectAccount,
            UiMessage::SelectFee(_) => MessageType::SelectFee,
            UiMessage::UpdateCustomFee(_) => MessageType::UpdateCustomFee,
            UiMessage::ReceiveConfirmation(_) => MessageType::ReceiveConfirmation,
            UiMessage::ReceiveDevice(_) => MessageType::ReceiveDevice,
            UiMessage::ReceivePin(_) => MessageType::ReceivePin,
            UiMessage::ReceivePassphrase(_) => MessageType::ReceivePassphrase,
            UiMessage::ReceiveAccount(_) => MessageType::ReceiveAccount,
            UiMessage::ReceiveFee(_) => MessageType::ReceiveFee,
            UiMessage::CustomMessageRequest(_) => MessageType::CustomMessageRequest,
        }
    }

    /// Wire payload, or `None` when the message carries none.
    pub fn payload(&self) -> serde_json::Result<Option<Value>> {
        match self {
            UiMessage::Notice(_) => Ok(None),
            UiMessage::DeviceRequest { payload, .. } => present(payload),
            UiMessage::IframeHandshake(payload) => present(payload),
            UiMessage::PopupHandshake(payload) => payload.as_ref().map(serde_json::to_value).transpose(),
            UiMessage::RequestPermission(payload) => present(payload),
            UiMessage::ReceivePermission(payload) => present(payload),
            UiMessage::RequestConfirmation(payload) => present(payload),
            UiMessage::SelectDevice(payload) => present(payload),
            UiMessage::BrowserIssue { browser, .. } => present(browser),
            UiMessage::UnexpectedDeviceMode { device, .. } => present(device),
            UiMessage::SelectAccount(payload) => present(payload),
            UiMessage::SelectFee(payload) => present(payload),
            UiMessage::UpdateCustomFee(payload) => present(payload),
            UiMessage::ReceiveConfirmation(payload) => present(payload),
            UiMessage::ReceiveDevice(payload) => present(payload),
            UiMessage::ReceivePin(payload) => present(payload),
            UiMessage::ReceivePassphrase(payload) => present(payload),
            UiMessage::ReceiveAccount(choice) => Ok(choice.to_payload()),
            UiMessage::ReceiveFee(payload) => present(payload),
            UiMessage::CustomMessageRequest(payload) => present(payload),
        }
    }

    /// Wrap the message in a UI event envelope.
    pub fn to_envelope(&self) -> Result<CoreMessage> {
        Ok(CoreMessage::new(self.message_type(), self.payload()?))
    }

    /// Decode a typed message from a tag and its raw payload.
    ///
    /// Only presence and serde shape are checked here; JSON Schema
    /// validation belongs to [`crate::SchemaRegistry`].
    pub fn from_parts(message_type: MessageType, payload: Option<Value>) -> Result<Self> {
        match message_type {
            MessageType::RequestUiWindow => notice(Notice::RequestUiWindow, payload),
            MessageType::CancelPopupRequest => notice(Notice::CancelPopupRequest, payload),
            MessageType::Transport => notice(Notice::Transport, payload),
            MessageType::PopupOpened => notice(Notice::PopupOpened, payload),
            MessageType::ReceiveBrowser => notice(Notice::ReceiveBrowser, payload),
            MessageType::ChangeAccount => notice(Notice::ChangeAccount, payload),
            MessageType::InsufficientFunds => notice(Notice::InsufficientFunds, payload),
            MessageType::CloseUiWindow => notice(Notice::CloseUiWindow, payload),
            MessageType::LoginChallengeRequest => notice(Notice::LoginChallengeRequest, payload),
            MessageType::RequestButton => device_request(DeviceRequest::Button, payload),
            MessageType::RequestPin => device_request(DeviceRequest::Pin, payload),
            MessageType::InvalidPin => device_request(DeviceRequest::InvalidPin, payload),
            MessageType::RequestPassphraseOnDevice => {
                device_request(DeviceRequest::PassphraseOnDevice, payload)
            }
            MessageType::RequestPassphrase => device_request(DeviceRequest::Passphrase, payload),
            MessageType::IframeHandshake => {
                required(message_type, payload).map(UiMessage::IframeHandshake)
            }
            MessageType::PopupHandshake => {
                optional(message_type, payload).map(UiMessage::PopupHandshake)
            }
            MessageType::RequestPermission => {
                required(message_type, payload).map(UiMessage::RequestPermission)
            }
            MessageType::ReceivePermission => {
                required(message_type, payload).map(UiMessage::ReceivePermission)
            }
            MessageType::RequestConfirmation => {
                required(message_type, payload).map(UiMessage::RequestConfirmation)
            }
            MessageType::SelectDevice => {
                required(message_type, payload).map(UiMessage::SelectDevice)
            }
            MessageType::BrowserNotSupported => browser_issue(BrowserIssue::NotSupported, payload),
            MessageType::BrowserOutdated => browser_issue(BrowserIssue::Outdated, payload),
            MessageType::Bootloader => device_mode(DeviceMode::Bootloader, payload),
            MessageType::Initialize => device_mode(DeviceMode::Initialize, payload),
            MessageType::Firmware => device_mode(DeviceMode::Firmware, payload),
            MessageType::SelectAccount => {
                required(message_type, payload).map(UiMessage::SelectAccount)
            }
            MessageType::SelectFee => required(message_type, payload).map(UiMessage::SelectFee),
            MessageType::UpdateCustomFee => {
                required(message_type, payload).map(UiMessage::UpdateCustomFee)
            }
            MessageType::ReceiveConfirmation => {
                required(message_type, payload).map(UiMessage::ReceiveConfirmation)
            }
            MessageType::ReceiveDevice => {
                required(message_type, payload).map(UiMessage::ReceiveDevice)
            }
            MessageType::ReceivePin => required(message_type, payload).map(UiMessage::ReceivePin),
            MessageType::ReceivePassphrase => {
                required(message_type, payload).map(UiMessage::ReceivePassphrase)
            }
            MessageType::ReceiveAccount => AccountChoice::from_payload(payload)
                .map(UiMessage::ReceiveAccount)
                .map_err(|found| {
                    SchemaError::mismatch(
                        message_type,
                        format!("expected string or null, got {found}"),
                    )
                }),
            MessageType::ReceiveFee => required(message_type, payload).map(UiMessage::ReceiveFee),
            MessageType::CustomMessageRequest => {
                required(message_type, payload).map(UiMessage::CustomMessageRequest)
            }
        }
    }
}

fn present<T: Serialize>(payload: &T) -> serde_json::Result<Option<Value>> {
    serde_json::to_value(payload).map(Some)
}

fn notice(notice: Notice, payload: Option<Value>) -> Result<UiMessage> {
    match payload {
        None => Ok(UiMessage::Notice(notice)),
        Some(_) => Err(SchemaError::mismatch(
            notice.message_type(),
            "payload is not accepted",
        )),
    }
}

fn device_request(request: DeviceRequest, payload: Option<Value>) -> Result<UiMessage> {
    let payload = required(request.message_type(), payload)?;
    Ok(UiMessage::DeviceRequest { request, payload })
}

fn browser_issue(issue: BrowserIssue, payload: Option<Value>) -> Result<UiMessage> {
    let browser = required(issue.message_type(), payload)?;
    Ok(UiMessage::BrowserIssue { issue, browser })
}

fn device_mode(mode: DeviceMode, payload: Option<Value>) -> Result<UiMessage> {
    let device = required(mode.message_type(), payload)?;
    Ok(UiMessage::UnexpectedDeviceMode { mode, device })
}

fn required<T: DeserializeOwned>(message_type: MessageType, payload: Option<Value>) -> Result<T> {
    let value = payload.ok_or_else(|| SchemaError::mismatch(message_type, "payload is required"))?;
    decode(message_type, value)
}

fn optional<T: DeserializeOwned>(
    message_type: MessageType,
    payload: Option<Value>,
) -> Result<Option<T>> {
    payload.map(|value| decode(message_type, value)).transpose()
}

fn decode<T: DeserializeOwned>(message_type: MessageType, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| SchemaError::mismatch(message_type, err.to_string()))
}
