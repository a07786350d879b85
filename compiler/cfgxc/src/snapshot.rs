//! JSON snapshots of extracted values.

use std::fs;
use std::path::Path;

use crate::errors::Error;

/// Write `value` to `path` as pretty-printed JSON with a trailing newline.
pub fn write_snapshot(path: impl AsRef<Path>, value: &serde_json::Value) -> Result<(), Error> {
    let path = path.as_ref();
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "snapshot written");
    Ok(())
}
