use uimsg_schema::{MessageType, RegistryConfig, SchemaRegistry};

use crate::cmd::SchemaArgs;
use crate::exit::{schema_error, CliError, CliResult, SUCCESS};
use crate::output::{print_schema, OutputFormat};

pub fn run(args: SchemaArgs, format: OutputFormat, config: RegistryConfig) -> CliResult<i32> {
    let message_type: MessageType = args
        .message_type
        .parse()
        .map_err(|err| schema_error("schema failed", err))?;
    let registry =
        SchemaRegistry::with_config(config).map_err(|err| schema_error("registry failed", err))?;

    let schema = registry
        .payload_schema(message_type)
        .ok_or_else(|| CliError::usage(format!("message type {message_type} carries no payload")))?;

    print_schema(schema, format);
    Ok(SUCCESS)
}
