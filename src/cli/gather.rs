//! Gather command - dump locally reachable credentials.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::{output, report, Source};
use crate::core::constants::{CONFIG_FILE, DEFAULT_METADATA_OUTPUT, DEFAULT_OUTPUT};
use crate::core::{gather, json, paths, probe};
use crate::error::{Error, Result};

/// Run `gather --aws <source>`.
///
/// Read failures are reported and skipped. Only an unresolvable home
/// directory is returned as an error.
pub fn execute(source: Option<Source>, output: Option<PathBuf>) -> Result<()> {
    let Some(source) = source else {
        debug!("gather: no --aws source given");
        return Ok(());
    };
    info!(?source, "gather");

    match source {
        Source::Credentials => credentials(&paths::home()?, output_or(output, DEFAULT_OUTPUT)),
        Source::Role => role(&paths::home()?),
        Source::Env => env(),
        Source::Metadata => metadata(output_or(output, DEFAULT_METADATA_OUTPUT)),
        Source::All => {
            let home = paths::home()?;
            credentials(&home, output_or(output, DEFAULT_OUTPUT))?;
            role(&home)?;
            env()
        }
    }
}

fn output_or(output: Option<PathBuf>, default: &str) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(default))
}

/// Parse ~/.aws/credentials, write records to `dest`, print the raw file.
fn credentials(home: &Path, dest: PathBuf) -> Result<()> {
    match gather::credentials(home, &dest) {
        Ok(file) => {
            output::data(&file.content);
            output::success(&format!(
                "wrote {} records to {}",
                file.records.len(),
                output::path(dest.display())
            ));
        }
        Err(e) => report(&e),
    }
    Ok(())
}

/// Export cached role credentials and copy ~/.aws/config to ./config.
///
/// Each cache file is written under its own name in the current directory;
/// `--output` does not apply here.
fn role(home: &Path) -> Result<()> {
    let config = match gather::config(home) {
        Ok(config) => Some(config),
        Err(e) => {
            report(&e);
            None
        }
    };

    match gather::role_cache(home, Path::new(".")) {
        Ok(roles) => {
            for role in roles {
                match role.result {
                    Ok(creds) => {
                        output::header(&role.name);
                        output::data(&json::to_pretty_string(&creds)?);
                        println!();
                    }
                    Err(e) => output::error(&format!("{}: {}", role.name, e)),
                }
            }
        }
        Err(e) => report(&e),
    }

    if let Some(config) = config {
        match std::fs::write(CONFIG_FILE, &config) {
            Ok(()) => {
                debug!(bytes = config.len(), "copied config");
                output::data(&config);
            }
            Err(e) => report(&Error::from(e)),
        }
    }

    Ok(())
}

/// Print every `AWS_*` variable as `NAME: VALUE`.
fn env() -> Result<()> {
    let vars = std::env::vars_os().map(|(k, v)| {
        (
            k.to_string_lossy().into_owned(),
            v.to_string_lossy().into_owned(),
        )
    });

    let mut found = gather::aws_env(vars);
    found.sort();
    debug!(count = found.len(), "aws environment variables");

    for (name, value) in &found {
        output::data(&gather::env_line(name, value));
    }
    Ok(())
}

/// Pull role credentials and user-data from IMDS.
fn metadata(dest: PathBuf) -> Result<()> {
    let meta = match probe::metadata::fetch() {
        Ok(meta) => meta,
        Err(e) => {
            report(&e);
            return Ok(());
        }
    };

    match &meta.credentials {
        Some(creds) => {
            output::header(&format!("Instance role: {}", creds.role));
            output::data(&json::to_pretty_string(&creds.credentials)?);
            match json::write_json(creds, &dest) {
                Ok(()) => output::success(&format!(
                    "wrote role credentials to {}",
                    output::path(dest.display())
                )),
                Err(e) => report(&e),
            }
        }
        None => output::warn("no instance profile role attached"),
    }

    if let Some(user_data) = &meta.user_data {
        output::header("User data:");
        output::data(user_data);
    }

    Ok(())
}
