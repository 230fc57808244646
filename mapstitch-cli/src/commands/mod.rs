//! CLI subcommands.

pub mod inspect;
pub mod render;

use std::path::PathBuf;

use mapstitch::loader::collect_map_files;

use crate::error::CliError;

/// Expand every command-line path into map files, preserving argument order.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for path in paths {
        let found = collect_map_files(path).map_err(|source| CliError::Input {
            path: path.clone(),
            source,
        })?;
        files.extend(found);
    }
    Ok(files)
}
