//! Test fixtures and constants.

/// Two profiles with two keys each.
pub const TWO_PROFILES: &str = "[default]\naws_access_key_id=AKIA123\naws_secret_access_key=secret1\n\
[dev]\naws_access_key_id=AKIA456\naws_secret_access_key=secret2\n";

/// Default output name of `gather --aws credentials`.
pub const DEFAULT_OUTPUT: &str = "burn_output_credentials_file.json";

/// A CLI role cache entry as written by `aws sts assume-role`.
pub const CACHED_ROLE: &str = r#"{
  "Credentials": {
    "AccessKeyId": "ASIAEXAMPLE",
    "SecretAccessKey": "wJalrXUtnFEMI/K7MDENG",
    "SessionToken": "FwoGZXIvYXdzEXAMPLE",
    "Expiration": "2026-10-17T12:00:00+00:00"
  },
  "AssumedRoleUser": {
    "AssumedRoleId": "AROAEXAMPLE:botocore-session",
    "Arn": "arn:aws:sts::123456789012:assumed-role/admin/botocore-session"
  },
  "ResponseMetadata": {}
}"#;

/// ~/.aws/config with one role profile.
pub const CONFIG: &str = "[default]\nregion = us-east-1\n\n[profile admin]\nrole_arn = arn:aws:iam::123456789012:role/admin\nsource_profile = default\n";

/// DescribeInstanceAttribute response whose user-data decodes to `hello`.
pub const USER_DATA_HELLO: &str = r#"{"InstanceId":"i-0abc","UserData":{"Value":"aGVsbG8="}}"#;

/// Default output name of `gather --aws metadata`.
pub const METADATA_OUTPUT: &str = "burn_output_metadata_credentials.json";
