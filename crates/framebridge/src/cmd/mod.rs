use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod pump;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pump host messages from stdin through a mounted widget.
    Pump(PumpArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Pump(args) => pump::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct PumpArgs {
    /// Height reported by the widget's probe.
    #[arg(long, default_value = "600")]
    pub height: u64,

    /// JSON value to publish upward after the input stream ends.
    #[arg(long, value_name = "JSON")]
    pub publish: Option<String>,

    /// Data type tag for --publish.
    #[arg(long, default_value = "json", requires = "publish")]
    pub data_type: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
