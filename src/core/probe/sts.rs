//! Caller identity via STS GetCallerIdentity.

use serde::{Deserialize, Serialize};

use super::AwsTarget;
use crate::error::Result;

/// Identity behind a set of credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityInfo {
    #[serde(rename = "Account ID")]
    pub account_id: String,
    #[serde(rename = "User ARN")]
    pub user_arn: String,
    #[serde(rename = "User ID")]
    pub user_id: String,
}

/// Ask STS who `target` is.
///
/// # Errors
///
/// Returns `ProbeError::Sdk` if the call fails (unknown profile, no
/// network, denied), or `ProbeError::Unsupported` without the `aws` feature.
#[cfg(feature = "aws")]
pub fn who(target: &AwsTarget) -> Result<IdentityInfo> {
    use aws_sdk_sts::error::DisplayErrorContext;
    use tracing::{info, trace};

    use crate::error::ProbeError;

    info!(profile = ?target.profile, "querying caller identity");

    super::block_on(async {
        let config = super::load_config(target).await;
        let client = aws_sdk_sts::Client::new(&config);

        trace!("calling sts:GetCallerIdentity");
        let out = client
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| ProbeError::sdk("sts:GetCallerIdentity", DisplayErrorContext(&e)))?;

        Ok(IdentityInfo {
            account_id: out
                .account()
                .ok_or(ProbeError::MissingField("Account"))?
                .to_string(),
            user_arn: out.arn().ok_or(ProbeError::MissingField("Arn"))?.to_string(),
            user_id: out
                .user_id()
                .ok_or(ProbeError::MissingField("UserId"))?
                .to_string(),
        })
    })
}

#[cfg(not(feature = "aws"))]
pub fn who(_target: &AwsTarget) -> Result<IdentityInfo> {
    Err(crate::error::ProbeError::Unsupported("who").into())
}
