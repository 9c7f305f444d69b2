//! Who command - print the caller identity behind a profile.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::{output, report};
use crate::core::json;
use crate::core::probe::{sts, AwsTarget};
use crate::error::Result;

/// Run `who --profile <name>`.
///
/// STS failures are reported, never returned.
pub fn execute(profile: Option<String>, dest: Option<PathBuf>) -> Result<()> {
    let Some(profile) = profile else {
        debug!("who: no --profile given");
        return Ok(());
    };

    let info = match sts::who(&AwsTarget::profile(profile)) {
        Ok(info) => info,
        Err(e) => {
            report(&e);
            return Ok(());
        }
    };

    output::kv("Account ID:", &info.account_id);
    output::kv("User ARN:  ", &info.user_arn);
    output::kv("User ID:   ", &info.user_id);

    if let Some(dest) = dest {
        match json::write_json(&info, &dest) {
            Ok(()) => output::success(&format!(
                "wrote identity to {}",
                output::path(dest.display())
            )),
            Err(e) => report(&e),
        }
    }

    Ok(())
}
