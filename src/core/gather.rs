//! Local credential gathering.
//!
//! Reads the shared credentials file, the config file, the CLI role cache
//! and the process environment. Functions here return data; printing is
//! left to the CLI layer.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::core::constants::{AWS_ENV_PREFIX, CLI_CACHE_DIR, CONFIG_FILE, CREDENTIALS_FILE};
use crate::core::credentials::{self, CredentialRecord};
use crate::core::json;
use crate::core::paths::aws_path;
use crate::error::{GatherError, Result};

/// Result of reading the shared credentials file.
#[derive(Debug)]
pub struct CredentialsFile {
    pub path: PathBuf,
    pub content: String,
    pub records: Vec<CredentialRecord>,
}

/// Read and parse `~/.aws/credentials`, then write the records to `output`.
///
/// Nothing is written when the file cannot be read.
///
/// # Errors
///
/// `GatherError::NotFound` if the file is missing, `GatherError::Read` on
/// other I/O failures, or an I/O error if `output` cannot be written.
pub fn credentials(home: &Path, output: &Path) -> Result<CredentialsFile> {
    let path = aws_path(home, CREDENTIALS_FILE);
    info!(path = %path.display(), "gathering credentials file");

    let content = read(&path)?;
    let records = credentials::parse(&content);
    debug!(records = records.len(), "parsed credentials");

    json::write_json(&records, output)?;

    Ok(CredentialsFile {
        path,
        content,
        records,
    })
}

/// Read `~/.aws/config`.
pub fn config(home: &Path) -> Result<String> {
    let path = aws_path(home, CONFIG_FILE);
    debug!(path = %path.display(), "reading config");
    read(&path)
}

/// One processed entry from the CLI role cache.
#[derive(Debug)]
pub struct CachedRole {
    /// Cache file name; also the output file name.
    pub name: String,
    pub result: Result<Value>,
}

/// Walk `~/.aws/cli/cache` and export each file's `Credentials` object.
///
/// Each cache file `<name>` is written to `<out_dir>/<name>`. Entries are
/// processed in file-name order; a failing entry does not stop the walk.
///
/// # Errors
///
/// Returns error only if the cache directory itself cannot be listed.
pub fn role_cache(home: &Path, out_dir: &Path) -> Result<Vec<CachedRole>> {
    let dir = aws_path(home, CLI_CACHE_DIR);
    info!(path = %dir.display(), "walking role cache");

    let entries = fs::read_dir(&dir).map_err(|e| GatherError::from_io(&dir, e))?;
    let mut files: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
        .collect();
    files.sort();

    let roles = files
        .into_iter()
        .map(|(name, path)| {
            let result = export_cached(&path, &out_dir.join(&name));
            CachedRole { name, result }
        })
        .collect();

    Ok(roles)
}

fn export_cached(path: &Path, output: &Path) -> Result<Value> {
    let content = read(path)?;
    let mut doc: Value = serde_json::from_str(&content)?;
    let creds = doc
        .get_mut("Credentials")
        .map(Value::take)
        .ok_or_else(|| GatherError::MissingCredentials(path.to_path_buf()))?;

    json::write_json(&creds, output)?;
    debug!(path = %path.display(), "exported cached role credentials");
    Ok(creds)
}

/// Filter environment variables down to `AWS_*` entries.
///
/// Values are returned unmasked.
pub fn aws_env<I, K, V>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    vars.into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .filter(|(k, _)| k.starts_with(AWS_ENV_PREFIX))
        .collect()
}

/// Format an environment entry as `NAME: VALUE`.
pub fn env_line(name: &str, value: &str) -> String {
    format!("{}: {}", name, value)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GatherError::from_io(path, e).into())
}
