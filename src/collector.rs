use crate::key::{Key, KeyError};
use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: cannot parse {text:?} as a number")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: {source}")]
    Key {
        line: usize,
        #[source]
        source: KeyError,
    },
}

/// Reads one key per line, in input order.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. Nothing is
/// returned unless every line parses.
pub fn collect_keys<R: BufRead>(reader: R) -> Result<Vec<Key>, CollectError> {
    let mut keys = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            trace!("line {line_number}: blank, skipped");
            continue;
        }

        let value: f64 = text.parse().map_err(|source| CollectError::Parse {
            line: line_number,
            text: text.to_string(),
            source,
        })?;
        let key = Key::new(value).map_err(|source| CollectError::Key {
            line: line_number,
            source,
        })?;
        keys.push(key);
    }
    debug!("collected {} keys", keys.len());
    Ok(keys)
}

/// Opens `path` and collects its keys with [`collect_keys`].
pub fn collect_keys_from_path(path: &Path) -> Result<Vec<Key>, CollectError> {
    let file = File::open(path).map_err(|source| CollectError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("reading keys from {}", path.display());
    collect_keys(BufReader::new(file))
}
