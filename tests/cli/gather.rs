//! Tests for `burn gather --aws credentials` and `--aws all`.

use crate::support::*;
use serde_json::{json, Value};

#[test]
fn test_credentials_writes_default_output() {
    let t = Test::with_credentials(TWO_PROFILES);

    let output = t.gather("credentials");
    assert_success(&output);

    let written: Value = serde_json::from_str(&t.read_out(DEFAULT_OUTPUT)).unwrap();
    assert_eq!(
        written,
        json!([
            {"profile": "default", "access_key": "aws_access_key_id", "secret_access_key": "AKIA123"},
            {"profile": "default", "access_key": "aws_secret_access_key", "secret_access_key": "secret1"},
            {"profile": "dev", "access_key": "aws_access_key_id", "secret_access_key": "AKIA456"},
            {"profile": "dev", "access_key": "aws_secret_access_key", "secret_access_key": "secret2"},
        ])
    );
}

#[test]
fn test_credentials_prints_raw_file() {
    let t = Test::with_credentials(TWO_PROFILES);

    let output = t.gather("credentials");
    assert_success(&output);
    assert_eq!(stdout(&output), TWO_PROFILES);
    assert_stderr_contains(&output, "wrote 4 records");
}

#[test]
fn test_credentials_custom_output() {
    let t = Test::with_credentials(TWO_PROFILES);

    let output = t.gather_to("credentials", "loot.json");
    assert_success(&output);
    assert!(t.out("loot.json").exists());
    assert!(!t.out(DEFAULT_OUTPUT).exists());
}

#[test]
fn test_credentials_output_uses_four_space_indent() {
    let t = Test::with_credentials("[default]\nregion=us-east-1\n");

    assert_success(&t.gather("credentials"));
    let text = t.read_out(DEFAULT_OUTPUT);
    assert!(text.starts_with("[\n    {\n        \"profile\": \"default\""));
}

#[test]
fn test_credentials_missing_file_is_reported() {
    let t = Test::new();

    let output = t.gather("credentials");
    assert_success(&output);
    assert_stderr_contains(&output, "not found");
    assert!(!t.out(DEFAULT_OUTPUT).exists());
}

#[test]
fn test_credentials_without_sections_writes_empty_list() {
    let t = Test::with_credentials("aws_access_key_id=AKIA\n");

    assert_success(&t.gather("credentials"));
    let written: Value = serde_json::from_str(&t.read_out(DEFAULT_OUTPUT)).unwrap();
    assert_eq!(written, json!([]));
}

#[test]
fn test_credentials_unwritable_output_is_reported() {
    let t = Test::with_credentials(TWO_PROFILES);

    let output = t.gather_to("credentials", "missing-dir/out.json");
    assert_success(&output);
    assert_stderr_contains(&output, "io error");
}

#[test]
fn test_all_runs_every_local_gatherer() {
    let t = Test::with_credentials(TWO_PROFILES);
    t.write_aws("config", CONFIG);
    t.write_cache("role.json", CACHED_ROLE);

    let output = t
        .cmd()
        .args(["gather", "--aws", "all"])
        .env("AWS_REGION", "eu-west-1")
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t.out(DEFAULT_OUTPUT).exists());
    assert!(t.out("role.json").exists());
    assert_eq!(t.read_out("config"), CONFIG);
    assert_stdout_contains(&output, "AWS_REGION: eu-west-1");
}

#[test]
fn test_all_continues_past_missing_credentials() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["gather", "--aws", "all"])
        .env("AWS_DEFAULT_REGION", "ap-south-1")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "not found");
    assert_stdout_contains(&output, "AWS_DEFAULT_REGION: ap-south-1");
}
