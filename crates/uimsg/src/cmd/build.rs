use tracing::debug;
use uimsg_schema::{MessageFactory, RegistryConfig};

use crate::cmd::{read_payload, BuildArgs};
use crate::exit::{schema_error, CliResult, SUCCESS};
use crate::output::{print_envelope, OutputFormat};

pub fn run(args: BuildArgs, format: OutputFormat, config: RegistryConfig) -> CliResult<i32> {
    let payload = read_payload(args.json.as_deref(), args.file.as_deref())?;
    let factory =
        MessageFactory::with_config(config).map_err(|err| schema_error("registry failed", err))?;

    let mut envelope = factory
        .build(&args.message_type, payload)
        .map_err(|err| schema_error("build failed", err))?;
    if let Some(id) = args.id {
        envelope = envelope.with_id(id);
    }
    debug!(message_type = %envelope.msg_type, "envelope built");

    print_envelope(&envelope, format);
    Ok(SUCCESS)
}
