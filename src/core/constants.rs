//! Constants used throughout burn.
//!
//! Centralizes magic strings and default file names.

/// AWS configuration directory relative to HOME (~/.aws).
pub const AWS_DIR: &str = ".aws";

/// Shared credentials file name (~/.aws/credentials).
pub const CREDENTIALS_FILE: &str = "credentials";

/// Shared config file name (~/.aws/config).
pub const CONFIG_FILE: &str = "config";

/// AWS CLI role cache directory relative to ~/.aws.
pub const CLI_CACHE_DIR: &str = "cli/cache";

/// Default output for `gather --aws credentials`.
pub const DEFAULT_OUTPUT: &str = "burn_output_credentials_file.json";

/// Default output for `gather --aws metadata`.
pub const DEFAULT_METADATA_OUTPUT: &str = "burn_output_metadata_credentials.json";

/// Prefix that marks an environment variable as AWS-related.
pub const AWS_ENV_PREFIX: &str = "AWS_";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "BURN_LOG";

/// IMDS path listing the role attached to the instance profile.
pub const IMDS_ROLE_PATH: &str = "/latest/meta-data/iam/security-credentials/";

/// IMDS path holding instance user-data.
pub const IMDS_USER_DATA_PATH: &str = "/latest/user-data";

/// Environment variable that turns off IMDS lookups when set to `true`.
pub const IMDS_DISABLED_ENV: &str = "AWS_EC2_METADATA_DISABLED";
