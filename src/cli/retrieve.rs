//! Retrieve command - pull secrets out of Lambda and EC2.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::{output, report};
use crate::core::json;
use crate::core::probe::{ec2, lambda, AwsTarget};
use crate::error::Result;

/// Run `retrieve`.
///
/// `--lambda-envs` wins over `--ec2-data` when both are given. Lambda
/// failures are reported; any EC2 user-data failure is returned and ends
/// the process.
pub fn execute(
    lambda_envs: Option<String>,
    ec2_data: Option<String>,
    profile: Option<String>,
    region: Option<String>,
    dest: Option<PathBuf>,
) -> Result<()> {
    let target = AwsTarget::new(profile, region);

    if let Some(function) = lambda_envs {
        lambda_function(&function, &target, dest);
        Ok(())
    } else if let Some(instance) = ec2_data {
        user_data(&instance, &target, dest)
    } else {
        debug!("retrieve: neither --lambda-envs nor --ec2-data given");
        Ok(())
    }
}

fn lambda_function(function: &str, target: &AwsTarget, dest: Option<PathBuf>) {
    let details = match lambda::retrieve(function, target) {
        Ok(details) => details,
        Err(e) => {
            report(&e);
            return;
        }
    };

    output::header("Lambda Function Details:");
    output::kv("Function Name:", &details.function_name);
    output::kv("Runtime:      ", &details.runtime);
    output::kv("Env Vars:     ", details.environment_variables.len());
    for (name, value) in &details.environment_variables {
        output::list_item(&format!("{}={}", name, value));
    }

    if let Some(dest) = dest {
        match json::write_json(&details, &dest) {
            Ok(()) => output::success(&format!(
                "wrote function details to {}",
                output::path(dest.display())
            )),
            Err(e) => report(&e),
        }
    }
}

fn user_data(instance: &str, target: &AwsTarget, dest: Option<PathBuf>) -> Result<()> {
    let data = ec2::user_data(instance, target)?;
    output::data(&data.user_data);

    if let Some(dest) = dest {
        json::write_json(&data, &dest)?;
        output::success(&format!("wrote user-data to {}", output::path(dest.display())));
    }
    Ok(())
}
