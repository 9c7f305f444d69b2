//! Remote probes against AWS.
//!
//! ## Probes
//!
//! - **sts**: caller identity for a profile
//! - **lambda**: function configuration including environment variables
//! - **ec2**: instance user-data via the `aws` CLI
//! - **metadata**: role credentials and user-data from the instance metadata service
//!
//! SDK-backed probes are feature-gated (`aws`). Each call builds its own
//! [`SdkConfig`](aws_config::SdkConfig) from an explicit [`AwsTarget`]; there
//! is no shared session.

pub mod ec2;
pub mod lambda;
pub mod metadata;
pub mod sts;

/// Which profile and region a probe runs against.
///
/// `None` falls back to the SDK's default resolution
/// (`AWS_PROFILE`, `AWS_REGION`, `~/.aws/config`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsTarget {
    pub profile: Option<String>,
    pub region: Option<String>,
}

impl AwsTarget {
    pub fn new(profile: Option<String>, region: Option<String>) -> Self {
        Self { profile, region }
    }

    /// Target only a profile, leaving region resolution to the SDK.
    pub fn profile(name: impl Into<String>) -> Self {
        Self {
            profile: Some(name.into()),
            region: None,
        }
    }
}

#[cfg(feature = "aws")]
pub(crate) use sdk::{block_on, load_config};

#[cfg(feature = "aws")]
mod sdk {
    use std::future::Future;

    use aws_config::{BehaviorVersion, Region, SdkConfig};
    use tracing::trace;

    use super::AwsTarget;
    use crate::error::{ProbeError, Result};

    /// Run an SDK future to completion on a current-thread runtime.
    pub(crate) fn block_on<F, T>(fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ProbeError::Runtime(e.to_string()))?;
        rt.block_on(fut)
    }

    /// Load SDK configuration scoped to `target`.
    pub(crate) async fn load_config(target: &AwsTarget) -> SdkConfig {
        trace!(profile = ?target.profile, region = ?target.region, "loading aws config");

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = &target.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &target.region {
            loader = loader.region(Region::new(region.clone()));
        }
        loader.load().await
    }
}
