use clap::Args;
use eyre::Result;

use super::{InputArgs, exit_with};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Year stamped into the copyright header (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let workspace = self.input.open();
        let mut report = ops::generate(
            &workspace,
            GenerateOptions {
                year: self.year,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());

        if let Some(error) = report.aborted.take() {
            exit_with(error);
        }
        Ok(())
    }
}
