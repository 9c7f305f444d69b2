//! JSON file output.
//!
//! Files are written with 4-space indentation and overwritten in place.
//! Writes are not atomic: an interrupted write leaves a partial file.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::Result;

/// Serialize `value` to a pretty JSON string (4-space indent).
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `value` to `path` as pretty JSON, replacing any existing file.
///
/// # Errors
///
/// Returns error if serialization or the file write fails.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut body = to_pretty_string(value)?;
    body.push('\n');
    std::fs::write(path, body)?;
    debug!(path = %path.display(), "wrote json");
    Ok(())
}

/// Read a JSON file back into `T`.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
