use clap::Args;
use eyre::Result;

use super::{InputArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let workspace = self.input.open();
        let report = ops::list(&workspace).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
