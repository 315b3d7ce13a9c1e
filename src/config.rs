//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tui_dispatch_debug::DebugCliArgs;

use crate::api::DEFAULT_API_BASE;
use crate::state::CardVariant;

/// Look up current weather for a city
#[derive(Parser, Debug)]
#[command(name = "cityweather")]
#[command(about = "Type a city, press enter, get the current weather")]
pub struct Args {
    /// Pre-fill the city field and search immediately
    #[arg(long, short)]
    pub city: Option<String>,

    /// OpenWeatherMap API key
    #[arg(
        long,
        env = "OPENWEATHER_API_KEY",
        hide_env_values = true,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub api_key: String,

    /// Provider base URL
    #[arg(long, env = "OPENWEATHER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Per-request timeout in seconds (minimum 1)
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Card style
    #[arg(long, value_enum, default_value_t = CardVariant::Glass)]
    pub variant: CardVariant,

    /// Write tracing output to this file (RUST_LOG filters, default "info")
    #[arg(long, env = "CITYWEATHER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}

impl Args {
    /// Parse the process arguments. Usage errors exit with status 1,
    /// `--help` and `--version` with 0.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(e) => {
                let code = exit_code(&e);
                // Printing to a closed stderr is not worth reporting
                let _ = e.print();
                std::process::exit(code);
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}
