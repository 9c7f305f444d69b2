//! Burn - AWS credential reconnaissance for authorized engagements.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── gather        # Local credentials, role cache, env, IMDS
//! │   ├── who           # STS caller identity
//! │   ├── retrieve      # Lambda env vars and EC2 user-data
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── credentials   # Shared credentials file parser
//!     ├── paths         # ~/.aws path resolution
//!     ├── gather        # Local artifact readers
//!     ├── json          # Pretty JSON output
//!     └── probe/        # Remote probes
//!         ├── sts       # GetCallerIdentity
//!         ├── lambda    # GetFunction
//!         ├── ec2       # describe-instance-attribute via aws CLI
//!         └── metadata  # IMDSv2
//! ```
//!
//! # Features
//!
//! - `aws` (default): SDK-backed probes (STS, Lambda, IMDS)

pub mod cli;
pub mod core;
pub mod error;
