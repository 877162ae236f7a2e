pub mod currency;
pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Resolve a typed input document: `--input` file first, then piped stdin.
/// Returns None when neither is present so the caller can fall back to flags.
pub fn read_document<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(file::read_json(path)?));
    }
    match stdin::read_stdin()? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}
