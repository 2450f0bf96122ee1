use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments shared by every command that reads SDL from disk.
#[derive(Debug, clap::Args)]
pub(crate) struct InputFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub(crate) struct InputFiles {
    pub errors: Vec<String>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

impl InputFileArgs {
    /// Finds every GraphQL file at or under each path argument. Files come
    /// back sorted so that repeated runs load declarations in the same order.
    pub(crate) fn collect(&self) -> InputFiles {
        let mut found = InputFiles::default();

        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        for path in &self.file_or_dir_paths {
            let mut entries = vec![];
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => {
                        let entry_path = entry.path();
                        let ext_matches = entry_path.extension()
                            .map(|ext| ext.to_string_lossy())
                            .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                        if ext_matches {
                            log::trace!("Found GraphQL file at {entry_path:#?}.");
                            entries.push(entry_path.to_path_buf());
                        } else {
                            log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                            found.num_skipped += 1;
                        }
                    },

                    Ok(_) => (),

                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        found.errors.push(err.to_string());
                    },
                }
            }
            found.file_paths.extend(entries);
        }

        // A single file named explicitly is presumed to be GraphQL even if its
        // extension isn't one of `graphql_file_exts`.
        if found.file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to load {first_arg_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            found.num_skipped = found.num_skipped.saturating_sub(1);
            found.file_paths.push(first_arg_path.clone());
        }

        log::debug!("Found {} GraphQL files.", found.file_paths.len());
        found
    }
}
