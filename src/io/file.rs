//! Loading and saving map files
//!
//! Maps are saved with the `.map` extension; `.txt` is also accepted on load.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{decode, encode};
use crate::io::configuration::{IMPORT_EXTENSIONS, MAP_EXTENSION};
use crate::io::error::{MapError, Result, file_system_error};
use crate::map::grid::GridModel;

/// Whether a path carries one of the accepted map extensions
pub fn is_map_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMPORT_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

/// Read and decode a map file
///
/// # Errors
///
/// Returns an error if:
/// - The extension is not `.map` or `.txt`
/// - The file cannot be read
/// - The contents fail to decode
pub fn load_map(path: &Path) -> Result<GridModel> {
    if !is_map_file(path) {
        return Err(MapError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(|e| file_system_error(path, "read", e))?;
    decode(&text)
}

/// Encode a model and write it to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn save_map(path: &Path, model: &GridModel) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    fs::write(path, encode(model)).map_err(|e| file_system_error(path, "write", e))
}

/// Default save location for a model inside `dir`
pub fn export_path(dir: &Path, model: &GridModel) -> PathBuf {
    dir.join(format!("{}.{MAP_EXTENSION}", model.export_name()))
}

/// Map files in a directory, sorted by path
///
/// # Errors
///
/// Returns an error if the directory cannot be listed
pub fn collect_map_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| file_system_error(dir, "list directory", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(dir, "list directory", e))?
            .path();
        if path.is_file() && is_map_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
