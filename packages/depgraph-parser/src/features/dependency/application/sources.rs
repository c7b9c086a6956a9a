//! Source discovery
//!
//! Reading files is outside the parse itself; this is the glue the CLI uses to
//! turn paths into `SourceFile`s.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::features::parsing::infrastructure::tree_sitter::languages::javascript::{
    JAVASCRIPT_EXTENSIONS, JSX_EXTENSIONS,
};
use crate::shared::models::{DepgraphError, Result};

use super::batch::SourceFile;

/// Whether `path` has a JavaScript extension
pub fn is_javascript(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| JAVASCRIPT_EXTENSIONS.contains(&ext) || JSX_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Expand files and directories into JavaScript files
///
/// Files named explicitly are kept whatever their extension. Directories are
/// walked recursively, skipping hidden entries and `node_modules`; the walk is
/// sorted by file name so output is stable.
pub fn discover_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for path in paths {
        if path.is_file() {
            found.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            return Err(DepgraphError::io("No such file or directory")
                .with_file(path.display().to_string()));
        }

        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry.file_name()));
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() && is_javascript(entry.path()) {
                found.push(entry.into_path());
            }
        }
    }

    tracing::debug!(files = found.len(), "discovered sources");
    Ok(found)
}

fn is_skipped_dir(name: &std::ffi::OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || name == "node_modules"
}

/// Read one source file
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|err| {
        DepgraphError::io(format!("Failed to read source: {}", err))
            .with_file(display.clone())
            .with_source(err)
    })?;
    Ok(SourceFile::new(display, content))
}

/// Discover and read every source under `paths`
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    discover_sources(paths)?
        .iter()
        .map(|path| read_source(path))
        .collect()
}
