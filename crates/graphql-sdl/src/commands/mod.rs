mod input_files;
mod print;
mod validate;

use crate::Cli;
use crate::CommandResult;
use print::PrintCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-sdl")]
pub(crate) enum CommandEnum {
    /// Analyze SDL files and print the merged schema back out as SDL.
    Print(Box<PrintCmd>),

    /// Analyze SDL files and report every problem found.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
