use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::utils::error::ThemeError;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> Result<(), ThemeError> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a UTF-8 file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, ThemeError> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ThemeError> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}

/// Rewrite a file in place with the output of `transform`
pub fn rewrite_file<P, F>(path: P, transform: F) -> Result<(), ThemeError>
where
    P: AsRef<Path>,
    F: FnOnce(&str) -> Result<String, ThemeError>,
{
    let content = read_file(path.as_ref())?;
    let rewritten = transform(&content)?;
    write_file(path, &rewritten)
}

/// List all files under `dir` with the given extension, sorted by path
pub fn list_files_with_extension<P: AsRef<Path>>(dir: P, ext: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir.as_ref())
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map_or(false, |e| e == ext))
        .collect();

    files.sort();
    files
}
