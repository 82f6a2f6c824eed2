use std::{collections::HashMap, process::Command};

pub struct CvTest {
    pub env: HashMap<String, String>,
}

impl CvTest {
    pub fn new() -> Self {
        Self {
            env: HashMap::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn cv(&self, args: &[&str]) -> CvOutput {
        let mut cmd = self.cv_command();
        cmd.args(args);

        let output = cmd.output().expect("Failed to execute cv command");
        CvOutput { output }
    }

    pub fn cv_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cv"));
        cmd.env_clear().envs(&self.env);
        cmd
    }
}

pub struct CvOutput {
    pub output: std::process::Output,
}

impl CvOutput {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Expected command to fail, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    #[track_caller]
    pub fn assert_stderr_contains(&self, needle: &str) -> &Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(needle),
            "Expected stderr to contain {needle:?}, got:\n{stderr}"
        );
        self
    }
}
