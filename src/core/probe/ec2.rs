//! EC2 instance user-data via the `aws` CLI.
//!
//! ## Requirements
//!
//! - `aws` CLI must be installed and on `PATH`
//! - The caller needs `ec2:DescribeInstanceAttribute`
//!
//! Equivalent to:
//! ```bash
//! aws ec2 describe-instance-attribute --instance-id i-0123 --attribute userData \
//!     --region sa-east-1 --profile demo
//! ```

use std::process::{Command, Stdio};

use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, trace};

use super::AwsTarget;
use crate::error::{ProbeError, Result};

/// Decoded user-data of one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceUserData {
    pub instance_id: String,
    pub user_data: String,
}

/// Fetch and decode the user-data of `instance_id`.
///
/// # Errors
///
/// Any failure is returned: a missing CLI, a non-zero exit, malformed JSON,
/// a missing `UserData.Value`, invalid base64 or non-UTF-8 content.
pub fn user_data(instance_id: &str, target: &AwsTarget) -> Result<InstanceUserData> {
    info!(instance = instance_id, region = ?target.region, "retrieving instance user-data");
    let stdout = describe_user_data(instance_id, target)?;
    Ok(InstanceUserData {
        instance_id: instance_id.to_string(),
        user_data: decode_response(&stdout)?,
    })
}

/// Arguments passed to the `aws` CLI.
pub fn cli_args(instance_id: &str, target: &AwsTarget) -> Vec<String> {
    let mut args: Vec<String> = [
        "ec2",
        "describe-instance-attribute",
        "--instance-id",
        instance_id,
        "--attribute",
        "userData",
        "--output",
        "json",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    if let Some(region) = &target.region {
        args.push("--region".into());
        args.push(region.clone());
    }
    if let Some(profile) = &target.profile {
        args.push("--profile".into());
        args.push(profile.clone());
    }
    args
}

/// Run the CLI and return its stdout.
fn describe_user_data(instance_id: &str, target: &AwsTarget) -> Result<String> {
    let aws = which::which("aws").map_err(|_| ProbeError::CliNotFound)?;
    let args = cli_args(instance_id, target);
    trace!(cli = %aws.display(), ?args, "running aws cli");

    let output = Command::new(aws)
        .args(&args)
        .stdin(Stdio::null())
        .output()?;

    if !output.status.success() {
        return Err(ProbeError::CliFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    debug!(bytes = output.stdout.len(), "aws cli returned");
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Extract `UserData.Value` from a DescribeInstanceAttribute response and decode it.
pub fn decode_response(json: &str) -> Result<String> {
    let doc: Value = serde_json::from_str(json)?;
    let encoded = doc
        .pointer("/UserData/Value")
        .and_then(Value::as_str)
        .ok_or(ProbeError::MissingField("UserData.Value"))?;
    decode_user_data(encoded)
}

/// Base64-decode user-data into UTF-8 text.
pub fn decode_user_data(encoded: &str) -> Result<String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| ProbeError::Decode(format!("invalid base64: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| ProbeError::Decode(format!("invalid UTF-8: {}", e)).into())
}
