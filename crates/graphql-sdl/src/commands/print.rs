use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::input_files::InputFileArgs;
use crate::output_utils;
use libgraphql_sdl::SchemaBuilder;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[command(flatten)]
    inputs: InputFileArgs,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = self.inputs.collect();
        if !found.errors.is_empty() {
            return CommandResult::failure(format_args!(
                "{} Failed to scan input paths:\n{}",
                output_utils::RED_X,
                output_utils::bulleted(&found.errors),
            ));
        }

        let schema = SchemaBuilder::new()
            .load_files(found.file_paths)
            .and_then(SchemaBuilder::build);

        match schema {
            Ok(schema) => CommandResult::success(format_args!("{}", schema.to_sdl())),
            Err(err) => CommandResult::failure(format_args!(
                "{} {err}",
                output_utils::RED_X,
            )),
        }
    }
}
