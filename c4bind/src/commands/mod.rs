mod check;
mod completions;
mod generate;
mod list;

use std::path::PathBuf;

use c4bind_descriptor::Workspace;
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on descriptor errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for c4bind_descriptor::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(e),
        }
    }
}

/// Print a descriptor error as a miette report and exit with status 1.
pub(crate) fn exit_with(error: Box<c4bind_descriptor::Error>) -> ! {
    eprintln!("{:?}", miette::Report::new(*error));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "c4bind")]
#[command(version)]
#[command(about = "Generate LiteCore C# bindings from descriptor files")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate *_native.cs files from descriptor files
    Generate(GenerateCommand),

    /// Parse and lint descriptor files without generating code
    Check(CheckCommand),

    /// List the functions each descriptor file declares
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where to find descriptor files and configuration.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// Directory containing descriptor files and literal catalogs
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Path to c4bind.toml (defaults to <DIR>/c4bind.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Open the workspace, exiting with a report if configuration or a
    /// catalog cannot be read.
    pub fn open(&self) -> Workspace {
        Workspace::open(&self.dir, self.config.as_deref()).unwrap_or_exit()
    }
}
