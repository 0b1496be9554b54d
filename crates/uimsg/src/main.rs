mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use uimsg_schema::RegistryConfig;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "uimsg", version, about = "Hardware-wallet UI message CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "UIMSG_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// Reject payload fields the catalog does not define.
    #[arg(long, env = "UIMSG_STRICT", global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let config = RegistryConfig {
        strict_mode: cli.strict,
        ..RegistryConfig::default()
    };
    let result = cmd::run(cli.command, format, config);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
