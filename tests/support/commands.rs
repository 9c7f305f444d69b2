//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a burn command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("burn").expect("failed to find burn binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("BURN_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// A burn command that cannot find AWS credentials or reach IMDS.
    ///
    /// Strips every AWS_* variable the SDK reads for credentials, region or
    /// config location and disables instance metadata, so SDK calls fail
    /// fast without touching the network.
    pub fn offline_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        for var in [
            "AWS_PROFILE",
            "AWS_DEFAULT_PROFILE",
            "AWS_ACCESS_KEY_ID",
            "AWS_SECRET_ACCESS_KEY",
            "AWS_SESSION_TOKEN",
            "AWS_REGION",
            "AWS_DEFAULT_REGION",
            "AWS_CONFIG_FILE",
            "AWS_SHARED_CREDENTIALS_FILE",
            "AWS_WEB_IDENTITY_TOKEN_FILE",
            "AWS_ROLE_ARN",
            "AWS_CONTAINER_CREDENTIALS_RELATIVE_URI",
            "AWS_CONTAINER_CREDENTIALS_FULL_URI",
            "AWS_ENDPOINT_URL",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd
    }

    /// Run burn offline with arbitrary arguments.
    pub fn run_offline(&self, args: &[&str]) -> Output {
        self.offline_cmd()
            .args(args)
            .output()
            .expect("failed to run burn offline")
    }

    /// Shortcut for `burn gather --aws <source>`.
    pub fn gather(&self, source: &str) -> Output {
        self.cmd()
            .args(["gather", "--aws", source])
            .output()
            .expect("failed to run burn gather")
    }

    /// Shortcut for `burn gather --aws <source> -o <file>`.
    pub fn gather_to(&self, source: &str, file: &str) -> Output {
        self.cmd()
            .args(["gather", "--aws", source, "-o", file])
            .output()
            .expect("failed to run burn gather -o")
    }

    /// Run burn with arbitrary arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run burn")
    }
}
