use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use uimsg_schema::{CoreMessage, MessageType, UiMessage};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct TypeRow {
    #[serde(rename = "type")]
    tag: &'static str,
    family: String,
    direction: String,
    payload: String,
}

impl TypeRow {
    fn new(message_type: MessageType) -> Self {
        Self {
            tag: message_type.as_str(),
            family: message_type.family().to_string(),
            direction: message_type.direction().to_string(),
            payload: message_type.payload_rule().to_string(),
        }
    }
}

#[derive(Serialize)]
struct TypesOutput {
    schema_id: &'static str,
    count: usize,
    types: Vec<TypeRow>,
}

#[derive(Serialize)]
struct CheckOutput {
    schema_id: &'static str,
    valid: bool,
    #[serde(rename = "type")]
    tag: &'static str,
    family: String,
    direction: String,
    has_payload: bool,
}

pub fn print_types(types: &[MessageType], format: OutputFormat) {
    let rows: Vec<TypeRow> = types.iter().copied().map(TypeRow::new).collect();
    match format {
        OutputFormat::Json => {
            let out = TypesOutput {
                schema_id: "https://schemas.3leaps.dev/uimsg/cli/v1/message-types.schema.json",
                count: rows.len(),
                types: rows,
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TYPE", "FAMILY", "DIRECTION", "PAYLOAD"]);
            for row in rows {
                table.add_row(vec![
                    row.tag.to_string(),
                    row.family,
                    row.direction,
                    row.payload,
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in rows {
                println!(
                    "{} family={} direction={} payload={}",
                    row.tag, row.family, row.direction, row.payload
                );
            }
        }
    }
}

pub fn print_envelope(envelope: &CoreMessage, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(envelope),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["EVENT", "TYPE", "ID", "PAYLOAD"])
                .add_row(vec![
                    envelope.event.clone(),
                    envelope.msg_type.clone(),
                    envelope.id.map(|id| id.to_string()).unwrap_or_default(),
                    payload_preview(envelope),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{}",
                serde_json::to_string_pretty(envelope).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}

pub fn print_check(message: &UiMessage, format: OutputFormat) {
    let message_type = message.message_type();
    let out = CheckOutput {
        schema_id: "https://schemas.3leaps.dev/uimsg/cli/v1/check-report.schema.json",
        valid: true,
        tag: message_type.as_str(),
        family: message_type.family().to_string(),
        direction: message_type.direction().to_string(),
        has_payload: !matches!(message, UiMessage::Notice(_)),
    };
    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TYPE", "FAMILY", "DIRECTION", "VALID"])
                .add_row(vec![
                    out.tag.to_string(),
                    out.family,
                    out.direction,
                    out.valid.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "valid type={} family={} direction={}",
                out.tag, out.family, out.direction
            );
        }
    }
}

pub fn print_schema(schema: &serde_json::Value, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(schema),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!(
                "{}",
                serde_json::to_string_pretty(schema).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn payload_preview(envelope: &CoreMessage) -> String {
    match &envelope.payload {
        Some(payload) => payload.to_string(),
        None => "-".to_string(),
    }
}
