use uimsg_schema::{MessageFactory, RegistryConfig};

use crate::cmd::{read_envelope, CheckArgs};
use crate::exit::{schema_error, CliResult, SUCCESS};
use crate::output::{print_check, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat, config: RegistryConfig) -> CliResult<i32> {
    let bytes = read_envelope(args.json.as_deref(), args.file.as_deref())?;
    let factory =
        MessageFactory::with_config(config).map_err(|err| schema_error("registry failed", err))?;

    let message = factory
        .decode_slice(&bytes)
        .map_err(|err| schema_error("check failed", err))?;

    print_check(&message, format);
    Ok(SUCCESS)
}
