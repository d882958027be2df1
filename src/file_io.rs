use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileIoError {
    #[error("read file failed: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("decode utf-8 failed: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("write file failed: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a whole file as lines, stripping line terminators. CR/LF endings
/// are normalized away and not round-tripped.
pub fn load_lines(path: &Path) -> Result<Vec<String>, FileIoError> {
    let bytes = std::fs::read(path).map_err(|source| FileIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| FileIoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    if text.ends_with('\n') {
        lines.pop();
    }
    Ok(lines)
}

/// Writes the full document bytes (create or truncate) and returns the
/// number of bytes written.
pub fn save(path: &Path, bytes: &[u8]) -> Result<usize, FileIoError> {
    std::fs::write(path, bytes).map_err(|source| FileIoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.len())
}
