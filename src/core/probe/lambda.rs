//! Lambda function configuration via GetFunction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AwsTarget;
use crate::error::Result;

/// The parts of a function's configuration worth looting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambdaFunctionDetails {
    pub function_name: String,
    pub runtime: String,
    pub environment_variables: BTreeMap<String, String>,
}

/// Fetch `function_name`'s configuration.
///
/// Functions without an environment block yield an empty map. Container
/// image functions have no runtime and report an empty string.
///
/// # Errors
///
/// Returns `ProbeError::Sdk` if GetFunction fails, or
/// `ProbeError::Unsupported` without the `aws` feature.
#[cfg(feature = "aws")]
pub fn retrieve(function_name: &str, target: &AwsTarget) -> Result<LambdaFunctionDetails> {
    use aws_sdk_lambda::error::DisplayErrorContext;
    use tracing::{debug, info, trace};

    use crate::error::ProbeError;

    info!(function = function_name, region = ?target.region, "retrieving lambda configuration");

    super::block_on(async {
        let config = super::load_config(target).await;
        let client = aws_sdk_lambda::Client::new(&config);

        trace!("calling lambda:GetFunction");
        let out = client
            .get_function()
            .function_name(function_name)
            .send()
            .await
            .map_err(|e| ProbeError::sdk("lambda:GetFunction", DisplayErrorContext(&e)))?;

        let conf = out
            .configuration()
            .ok_or(ProbeError::MissingField("Configuration"))?;

        let environment_variables: BTreeMap<String, String> = conf
            .environment()
            .and_then(|env| env.variables())
            .map(|vars| vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();
        debug!(vars = environment_variables.len(), "lambda environment");

        Ok(LambdaFunctionDetails {
            function_name: conf.function_name().unwrap_or(function_name).to_string(),
            runtime: conf
                .runtime()
                .map(|r| r.as_str().to_string())
                .unwrap_or_default(),
            environment_variables,
        })
    })
}

#[cfg(not(feature = "aws"))]
pub fn retrieve(_function_name: &str, _target: &AwsTarget) -> Result<LambdaFunctionDetails> {
    Err(crate::error::ProbeError::Unsupported("--lambda-envs").into())
}
