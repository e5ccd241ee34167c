use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a word-list file.
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("failed to read word list '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read words from a UTF-8 file, one per line.
///
/// Surrounding whitespace is trimmed; blank lines and `#` comment lines
/// are skipped.
pub fn read_words(path: &Path) -> Result<Vec<String>, WordlistError> {
    let content = std::fs::read_to_string(path).map_err(|source| WordlistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
