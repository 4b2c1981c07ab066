use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde_json::Value;

/// File name of the element data document, expected next to the executable.
pub const ELEMENT_DATA_FILE: &str = "polyglot_element_data.json";

/// Returns the default location of the element data file: the directory
/// containing the current executable, joined with [`ELEMENT_DATA_FILE`].
///
/// # Errors
///
/// Returns an error if the current executable cannot be located.
pub fn default_data_path() -> Result<PathBuf> {
    let exe = env::current_exe().context("Error locating the current executable")?;
    let dir = exe
        .parent()
        .with_context(|| format!("Executable {} has no parent directory", exe.display()))?;
    Ok(dir.join(ELEMENT_DATA_FILE))
}

/// Reads the element data file at `path` and parses it as JSON.
///
/// The file handle is scoped to this call; it is closed on every exit
/// path, including parse failure.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if its
/// contents are not valid JSON.
pub fn load_element_data<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Error opening element data file {}", path.display()))?;
    let reader = BufReader::new(file);
    let data = serde_json::from_reader(reader)
        .with_context(|| format!("Error parsing element data file {}", path.display()))?;
    Ok(data)
}
