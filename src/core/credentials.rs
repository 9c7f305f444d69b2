//! Parser for AWS shared credentials files.
//!
//! The format is INI-like: `[profile]` headers followed by `key=value`
//! lines. Parsing is lenient: lines before the first header and lines
//! without `=` are skipped, never rejected.

use serde::{Deserialize, Serialize};

/// One `key=value` entry found under a profile section.
///
/// Field names mirror the JSON the tool emits: `access_key` carries the
/// entry's key name and `secret_access_key` carries its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub profile: String,
    pub access_key: String,
    pub secret_access_key: String,
}

/// Parse credentials text into records, in file order.
///
/// Duplicate sections are not merged; each occurrence yields its own
/// records. An empty `[]` header closes the current section, so the lines
/// after it are skipped until the next named header.
///
/// # Example
///
/// ```
/// use burn::core::credentials::parse;
///
/// let records = parse("[default]\naws_access_key_id=AKIA123\n");
/// assert_eq!(records[0].profile, "default");
/// assert_eq!(records[0].access_key, "aws_access_key_id");
/// assert_eq!(records[0].secret_access_key, "AKIA123");
/// ```
pub fn parse(content: &str) -> Vec<CredentialRecord> {
    let mut records = Vec::new();
    let mut section: Option<&str> = None;

    for line in content.lines() {
        let line = line.trim();

        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            section = Some(&line[1..line.len() - 1]).filter(|name| !name.is_empty());
            continue;
        }

        let Some(profile) = section else {
            continue;
        };

        if let Some((key, value)) = line.split_once('=') {
            records.push(CredentialRecord {
                profile: profile.to_string(),
                access_key: key.trim().to_string(),
                secret_access_key: value.trim().to_string(),
            });
        }
    }

    records
}
