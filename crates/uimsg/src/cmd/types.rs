use uimsg_schema::MessageType;

use crate::cmd::TypesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_types, OutputFormat};

pub fn run(args: TypesArgs, format: OutputFormat) -> CliResult<i32> {
    let types: Vec<MessageType> = MessageType::ALL
        .into_iter()
        .filter(|message_type| {
            args.direction
                .is_none_or(|filter| filter.matches(message_type.direction()))
        })
        .collect();
    print_types(&types, format);
    Ok(SUCCESS)
}
