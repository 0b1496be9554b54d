use std::collections::HashMap;

use jsonschema::Validator;
use serde_json::{Map, Value};

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::message_type::{MessageType, PayloadRule};
use crate::shapes::builtin_schema;
use crate::validator::validate_payload;

struct Entry {
    schema: Value,
    validator: Validator,
}

/// Payload schemas for every message type, keyed by tag.
pub struct SchemaRegistry {
    entries: HashMap<MessageType, Entry>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create a registry with the built-in schemas and default config.
    pub fn new() -> Result<Self> {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry with the built-in schemas and explicit config.
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        let mut registry = Self {
            entries: HashMap::new(),
            config,
        };
        for message_type in MessageType::ALL {
            if let Some(schema) = builtin_schema(message_type) {
                registry.register_value(message_type, &schema)?;
            }
        }
        Ok(registry)
    }

    /// Replace the payload schema of a message type from a JSON string.
    pub fn register(&mut self, message_type: MessageType, schema_json: &str) -> Result<()> {
        let schema: Value = serde_json::from_str(schema_json)?;
        self.register_value(message_type, &schema)
    }

    /// Replace the payload schema of a message type.
    pub fn register_value(&mut self, message_type: MessageType, schema: &Value) -> Result<()> {
        if message_type.payload_rule() == PayloadRule::None {
            return Err(SchemaError::NoPayload(message_type));
        }

        let mut schema_to_compile = schema.clone();
        if self.config.strict_mode {
            close_objects(&mut schema_to_compile);
        }

        let validator = jsonschema::validator_for(&schema_to_compile)
            .map_err(|err| SchemaError::CompileFailed(format!("{message_type}: {err}")))?;

        self.entries.insert(
            message_type,
            Entry {
                schema: schema_to_compile,
                validator,
            },
        );
        Ok(())
    }

    /// Check payload presence against the tag's payload rule, then its shape.
    pub fn validate(&self, message_type: MessageType, payload: Option<&Value>) -> Result<()> {
        let payload = match (message_type.payload_rule(), payload) {
            (PayloadRule::None, None) | (PayloadRule::Optional, None) => return Ok(()),
            (PayloadRule::None, Some(_)) => {
                return Err(SchemaError::mismatch(message_type, "payload is not accepted"))
            }
            (PayloadRule::Required, None) => {
                return Err(SchemaError::mismatch(message_type, "payload is required"))
            }
            (_, Some(payload)) => payload,
        };

        // Construction registers every payload-carrying type.
        self.entries.get(&message_type).map_or(Ok(()), |entry| {
            validate_payload(message_type, payload, &entry.validator)
        })
    }

    /// The schema in effect for a message type, after strict mode is applied.
    pub fn payload_schema(&self, message_type: MessageType) -> Option<&Value> {
        self.entries.get(&message_type).map(|entry| &entry.schema)
    }

    /// Check if a message type has a registered schema.
    pub fn has_schema(&self, message_type: MessageType) -> bool {
        self.entries.contains_key(&message_type)
    }

    /// Message types with registered schemas, in catalog order.
    pub fn message_types(&self) -> Vec<MessageType> {
        MessageType::ALL
            .into_iter()
            .filter(|message_type| self.has_schema(*message_type))
            .collect()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

/// Close every object schema that leaves `additionalProperties` unset.
fn close_objects(schema: &mut Value) {
    let Value::Object(map) = schema else {
        return;
    };
    if declares_object(map) {
        map.entry("additionalProperties").or_insert(Value::Bool(false));
    }

    for keyword in ["properties", "$defs"] {
        if let Some(Value::Object(children)) = map.get_mut(keyword) {
            children.values_mut().for_each(close_objects);
        }
    }
    if let Some(items) = map.get_mut("items") {
        close_objects(items);
    }
    for keyword in ["oneOf", "anyOf", "allOf"] {
        if let Some(Value::Array(branches)) = map.get_mut(keyword) {
            branches.iter_mut().for_each(close_objects);
        }
    }
}

fn declares_object(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(kind)) => kind == "object",
        _ => map.contains_key("properties"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fixtures;

    fn strict() -> SchemaRegistry {
        SchemaRegistry::with_config(RegistryConfig {
            strict_mode: true,
            ..RegistryConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn builtin_schemas_accept_fixtures() {
        let permissive = SchemaRegistry::new().unwrap();
        let strict = strict();
        for message_type in MessageType::ALL {
            let payload = fixtures::payload_for(message_type);
            permissive
                .validate(message_type, payload.as_ref())
                .unwrap_or_else(|err| panic!("{message_type}: {err}"));
            strict
                .validate(message_type, payload.as_ref())
                .unwrap_or_else(|err| panic!("strict {message_type}: {err}"));
        }
    }

    #[test]
    fn no_payload_types_have_no_schema() {
        let registry = SchemaRegistry::new().unwrap();
        assert!(!registry.has_schema(MessageType::Transport));
        assert!(registry.has_schema(MessageType::ReceiveFee));
        assert_eq!(registry.message_types().len(), 26);
    }

    #[test]
    fn every_payload_type_has_a_schema() {
        for config in [RegistryConfig::default(), *strict().config()] {
            let registry = SchemaRegistry::with_config(config).unwrap();
            for message_type in MessageType::ALL {
                assert_eq!(
                    registry.has_schema(message_type),
                    message_type.payload_rule() != PayloadRule::None,
                    "{message_type}"
                );
            }
        }
    }

    #[test]
    fn strict_mode_closes_nested_and_branch_objects() {
        let mut schema = json!({
            "type": "object",
            "properties": {
                "inner": { "properties": { "x": { "type": "number" } } },
                "open": { "type": "object", "additionalProperties": true },
                "list": { "type": "array", "items": { "type": "object" } }
            },
            "oneOf": [{ "properties": { "kind": { "const": "a" } } }]
        });
        close_objects(&mut schema);

        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(schema["properties"]["inner"]["additionalProperties"], json!(false));
        assert_eq!(schema["properties"]["open"]["additionalProperties"], json!(true));
        assert_eq!(
            schema["properties"]["list"]["items"]["additionalProperties"],
            json!(false)
        );
        assert_eq!(schema["oneOf"][0]["additionalProperties"], json!(false));
        assert!(schema["properties"]["inner"]["properties"]["x"]
            .get("additionalProperties")
            .is_none());
        assert!(schema["properties"]["list"].get("additionalProperties").is_none());
    }

    #[test]
    fn presence_rules_are_enforced() {
        let registry = SchemaRegistry::new().unwrap();

        assert!(registry.validate(MessageType::PopupOpened, None).is_ok());
        assert!(matches!(
            registry.validate(MessageType::PopupOpened, Some(&json!(null))),
            Err(SchemaError::PayloadShapeMismatch { .. })
        ));
        assert!(matches!(
            registry.validate(MessageType::SelectDevice, None),
            Err(SchemaError::PayloadShapeMismatch { .. })
        ));
        assert!(registry.validate(MessageType::PopupHandshake, None).is_ok());
        assert!(registry.validate(MessageType::ReceiveAccount, None).is_ok());
        assert!(registry
            .validate(MessageType::ReceiveAccount, Some(&json!(null)))
            .is_ok());
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        let registry = SchemaRegistry::new().unwrap();
        let cases = [
            (MessageType::ReceivePin, json!(1234)),
            (MessageType::ReceivePermission, json!({ "granted": "yes", "remember": false })),
            (MessageType::RequestPin, json!({ "device": { "path": "1" } })),
            (MessageType::SelectDevice, json!({ "devices": {}, "webusb": true })),
            (MessageType::ReceiveFee, json!({ "type": "compose-custom", "value": "42" })),
            (MessageType::ReceiveFee, json!({ "type": "send" })),
            (MessageType::CustomMessageRequest, json!({ "type": "x", "message": [] })),
            (MessageType::ReceiveAccount, json!(7)),
        ];
        for (message_type, payload) in cases {
            assert!(
                matches!(
                    registry.validate(message_type, Some(&payload)),
                    Err(SchemaError::PayloadShapeMismatch { .. })
                ),
                "{message_type} accepted {payload}"
            );
        }
    }

    #[test]
    fn strict_mode_rejects_unknown_catalog_fields_only() {
        let permissive = SchemaRegistry::new().unwrap();
        let strict = strict();

        let extra = json!({ "granted": true, "remember": true, "extra": 1 });
        assert!(permissive
            .validate(MessageType::ReceivePermission, Some(&extra))
            .is_ok());
        assert!(matches!(
            strict.validate(MessageType::ReceivePermission, Some(&extra)),
            Err(SchemaError::PayloadShapeMismatch { .. })
        ));

        let mut device = fixtures::device_value();
        device["firmware"] = json!("outdated");
        assert!(strict
            .validate(MessageType::RequestButton, Some(&json!({ "device": device })))
            .is_ok());
    }

    #[test]
    fn strict_mode_closes_fee_decision_branches() {
        let strict = strict();
        let payload = json!({ "type": "change-account", "value": 1 });
        assert!(strict.validate(MessageType::ReceiveFee, Some(&payload)).is_err());
        assert!(SchemaRegistry::new()
            .unwrap()
            .validate(MessageType::ReceiveFee, Some(&payload))
            .is_ok());
    }

    #[test]
    fn register_replaces_payload_schema() {
        let mut registry = SchemaRegistry::new().unwrap();
        registry
            .register(
                MessageType::CustomMessageRequest,
                r#"{
                    "type": "object",
                    "properties": {
                        "type": { "const": "sign-message" },
                        "message": {
                            "type": "object",
                            "properties": { "path": { "type": "string" } },
                            "required": ["path"]
                        }
                    },
                    "required": ["type", "message"]
                }"#,
            )
            .unwrap();

        let ok = fixtures::payload_for(MessageType::CustomMessageRequest);
        assert!(registry
            .validate(MessageType::CustomMessageRequest, ok.as_ref())
            .is_ok());
        let missing_path = json!({ "type": "sign-message", "message": {} });
        assert!(registry
            .validate(MessageType::CustomMessageRequest, Some(&missing_path))
            .is_err());
    }

    #[test]
    fn register_rejects_no_payload_type_and_bad_schema() {
        let mut registry = SchemaRegistry::new().unwrap();
        assert!(matches!(
            registry.register(MessageType::CloseUiWindow, r#"{"type":"string"}"#),
            Err(SchemaError::NoPayload(MessageType::CloseUiWindow))
        ));
        assert!(matches!(
            registry.register(MessageType::ReceivePin, r#"{"type":"definitely-not-a-type"}"#),
            Err(SchemaError::CompileFailed(_))
        ));
        assert!(matches!(
            registry.register(MessageType::ReceivePin, "not-json"),
            Err(SchemaError::InvalidJson(_))
        ));
    }

    #[test]
    fn strict_mode_is_visible_in_payload_schema() {
        let strict = strict();
        let schema = strict.payload_schema(MessageType::ReceivePassphrase).unwrap();
        assert_eq!(schema["additionalProperties"], json!(false));
        assert!(strict.config().strict_mode);

        let permissive = SchemaRegistry::new().unwrap();
        let schema = permissive
            .payload_schema(MessageType::ReceivePassphrase)
            .unwrap();
        assert!(schema.get("additionalProperties").is_none());
    }
}
