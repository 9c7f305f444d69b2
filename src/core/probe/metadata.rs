//! Instance metadata service (IMDSv2).
//!
//! Only useful when running on an EC2 instance. Off-instance the client
//! gives up after the SDK's connect timeout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Temporary credentials of the instance profile role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataCredentials {
    pub role: String,
    pub credentials: Value,
}

/// What IMDS exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceMetadata {
    /// `None` when no role is attached.
    pub credentials: Option<MetadataCredentials>,
    /// `None` when the instance has no user-data.
    pub user_data: Option<String>,
}

/// First non-empty line of the role listing.
pub fn role_name(listing: &str) -> Option<&str> {
    listing.lines().map(str::trim).find(|l| !l.is_empty())
}

/// Whether a value of `AWS_EC2_METADATA_DISABLED` turns IMDS off.
pub fn disabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

/// Query IMDS for role credentials and user-data.
///
/// # Errors
///
/// Returns `ProbeError::MetadataDisabled` when `AWS_EC2_METADATA_DISABLED`
/// is `true`, `ProbeError::Sdk` if IMDS is unreachable, or
/// `ProbeError::Unsupported` without the `aws` feature.
#[cfg(feature = "aws")]
pub fn fetch() -> Result<InstanceMetadata> {
    use aws_config::imds::client::error::ImdsError;
    use aws_config::imds::Client;
    use tracing::{debug, info};

    use crate::core::constants::{IMDS_DISABLED_ENV, IMDS_ROLE_PATH, IMDS_USER_DATA_PATH};
    use crate::error::ProbeError;

    // the raw client ignores this variable, only the credential providers read it
    if disabled(std::env::var(IMDS_DISABLED_ENV).ok().as_deref()) {
        return Err(ProbeError::MetadataDisabled(IMDS_DISABLED_ENV).into());
    }

    info!("querying instance metadata");

    fn missing(err: &ImdsError) -> bool {
        matches!(err, ImdsError::ErrorResponse(r) if r.response().status().as_u16() == 404)
    }

    fn sdk(err: ImdsError) -> ProbeError {
        ProbeError::sdk("imds", err)
    }

    super::block_on(async {
        let client = Client::builder().build();

        let credentials = match client.get(IMDS_ROLE_PATH).await {
            Ok(listing) => match role_name(listing.as_ref()) {
                Some(role) => {
                    debug!(role, "instance profile role");
                    let body = client
                        .get(format!("{}{}", IMDS_ROLE_PATH, role))
                        .await
                        .map_err(sdk)?;
                    Some(MetadataCredentials {
                        role: role.to_string(),
                        credentials: serde_json::from_str(body.as_ref())?,
                    })
                }
                None => None,
            },
            Err(e) if missing(&e) => None,
            Err(e) => return Err(sdk(e).into()),
        };

        let user_data = match client.get(IMDS_USER_DATA_PATH).await {
            Ok(data) => Some(data.as_ref().to_string()),
            Err(e) if missing(&e) => None,
            Err(e) => return Err(sdk(e).into()),
        };

        Ok(InstanceMetadata {
            credentials,
            user_data,
        })
    })
}

#[cfg(not(feature = "aws"))]
pub fn fetch() -> Result<InstanceMetadata> {
    Err(crate::error::ProbeError::Unsupported("gather --aws metadata").into())
}
