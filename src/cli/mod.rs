//! Command-line interface.
//!
//! Nothing is required at the parser level: a missing subcommand, or a
//! subcommand without the flag it needs, does nothing and exits 0.

pub mod completions;
pub mod gather;
pub mod output;
pub mod retrieve;
pub mod who;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::error::{Error, GatherError, ProbeError, Result};

/// Burn - AWS credential reconnaissance.
#[derive(Parser)]
#[command(
    name = "burn",
    about = "Enumerate reachable AWS credentials during authorized engagements",
    version,
    after_help = "Only run against systems you are authorized to test."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Gather AWS credentials from local sources
    Gather {
        /// What to gather
        #[arg(long, value_enum)]
        aws: Option<Source>,
        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the caller identity behind a profile
    Who {
        /// Named profile from ~/.aws
        #[arg(long)]
        profile: Option<String>,
        /// Also write the identity to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Retrieve secrets from Lambda or EC2
    Retrieve {
        /// Lambda function whose environment variables to dump
        #[arg(long)]
        lambda_envs: Option<String>,
        /// EC2 instance id whose user-data to decode
        #[arg(long)]
        ec2_data: Option<String>,
        /// Named profile from ~/.aws
        #[arg(long)]
        profile: Option<String>,
        /// AWS region
        #[arg(long)]
        region: Option<String>,
        /// Also write the result to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Local sources for `gather --aws`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// ~/.aws/credentials
    Credentials,
    /// ~/.aws/config and the CLI role cache
    Role,
    /// Instance metadata service
    Metadata,
    /// AWS_* environment variables
    Env,
    /// credentials, role and env
    All,
}

/// Shells `completions` can target.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
///
/// Recoverable failures are reported inside each handler; only fatal
/// errors reach the caller.
pub fn execute(command: Option<Command>) -> Result<()> {
    use Command::*;

    let Some(command) = command else {
        debug!("no command given");
        return Ok(());
    };

    match command {
        Gather { aws, output } => gather::execute(aws, output),
        Who { profile, output } => who::execute(profile, output),
        Retrieve {
            lambda_envs,
            ec2_data,
            profile,
            region,
            output,
        } => retrieve::execute(lambda_envs, ec2_data, profile, region, output),
        Completions { shell } => completions::execute(shell),
    }
}

/// Suggestion shown under an error, if one applies.
pub fn hint_for(err: &Error) -> Option<&'static str> {
    match err {
        Error::Gather(GatherError::HomeNotFound) => Some("set HOME"),
        Error::Probe(ProbeError::CliNotFound) => Some("install the AWS CLI or add it to PATH"),
        Error::Probe(ProbeError::Unsupported(_)) => Some("rebuild with --features aws"),
        Error::Probe(ProbeError::MetadataDisabled(_)) => {
            Some("unset AWS_EC2_METADATA_DISABLED to query IMDS")
        }
        _ => None,
    }
}

/// Print a recovered error and its hint.
pub(crate) fn report(err: &Error) {
    output::error(&err.to_string());
    if let Some(hint) = hint_for(err) {
        output::hint(hint);
    }
}
