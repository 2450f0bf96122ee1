use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::input_files::InputFileArgs;
use crate::output_utils;
use libgraphql_sdl::SchemaBuilder;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    inputs: InputFileArgs,

    #[arg(
        help="Fail unless the schema declares or implies a query root \
             operation type.",
        long,
    )]
    require_root: bool,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = self.inputs.collect();
        if !found.errors.is_empty() {
            return CommandResult::failure(format_args!(
                "{} Failed to scan input paths:\n{}",
                output_utils::RED_X,
                output_utils::bulleted(&found.errors),
            ));
        }

        let builder = match SchemaBuilder::new().load_files(found.file_paths.clone()) {
            Ok(builder) => builder,
            Err(err) => return CommandResult::failure(format_args!(
                "{} {err}",
                output_utils::RED_X,
            )),
        };

        let result =
            if self.require_root {
                builder.build()
            } else {
                let mut builder = builder;
                builder.validate().cloned()
            };

        match result {
            Ok(schema) => {
                let root_summary = match schema.query_type() {
                    Some(query_type) => format!("query root `{}`", query_type.name()),
                    None => "no root operation types".to_string(),
                };
                CommandResult::success(format_args!(
                    concat!(
                        "{} All GraphQL validated successfully:\n",
                        "  * Analyzed {} files.\n",
                        "  * Skipped {} non-graphql files.\n",
                        "  * Validated {} type definitions.\n",
                        "  * Validated {} directive definitions.\n",
                        "  * Resolved {}.",
                    ),
                    output_utils::GREEN_CHECK,
                    found.file_paths.len(),
                    found.num_skipped,
                    schema.all_types().values().filter(|t| !t.is_builtin()).count(),
                    schema.all_directives().values().filter(|d| !d.is_builtin()).count(),
                    root_summary,
                ))
            },

            Err(err) => {
                let errors = err.validation_errors();
                if errors.is_empty() {
                    return CommandResult::failure(format_args!(
                        "{} {err}",
                        output_utils::RED_X,
                    ));
                }
                let described = errors.iter()
                    .map(|error| match error.location() {
                        Some(location) => format!("{location}: {error}"),
                        None => error.to_string(),
                    })
                    .collect::<Vec<_>>();
                CommandResult::failure(format_args!(
                    "{} Found {} schema errors:\n{}",
                    output_utils::RED_X,
                    errors.len(),
                    output_utils::bulleted(&described),
                ))
            },
        }
    }
}
