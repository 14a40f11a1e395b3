//! Shared helpers for the integration tests.
//!
//! - `CliRunner` drives `eights_cli::run_with_input` in-process with scripted
//!   stdin and optional environment overrides, capturing both streams.
//! - `jsonl_lines` splits a JSONL file into parsed values.

use serde_json::Value;
use std::io::Cursor;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    #[allow(dead_code)]
    pub duration: Duration,
}

/// Restores every overridden variable on drop.
struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            unsafe {
                std::env::set_var(key, value);
            }
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

/// Every `EIGHTS_*` variable the configuration layer reads.
pub const CONFIG_VARS: [&str; 5] = [
    "EIGHTS_CONFIG",
    "EIGHTS_SEED",
    "EIGHTS_ROUNDS",
    "EIGHTS_AI",
    "EIGHTS_GAMBLE",
];

#[derive(Debug, Default)]
pub struct CliRunner;

impl CliRunner {
    pub fn new() -> Self {
        CliRunner
    }

    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], "")
    }

    #[allow(dead_code)]
    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], input)
    }

    /// Callers that set variables must hold a `#[serial]` guard.
    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, "")
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: &str) -> CliResult {
        let _guard = EnvGuard::apply(env);
        let argv: Vec<String> = std::iter::once("eights".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let start = Instant::now();
        let exit_code = eights_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
        CliResult {
            exit_code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
            duration: start.elapsed(),
        }
    }
}

/// Clears every configuration variable for the lifetime of the guard.
#[allow(dead_code)]
pub fn clean_config_env() -> impl Drop {
    let pairs: Vec<(String, Option<String>)> = CONFIG_VARS
        .iter()
        .map(|k| (k.to_string(), std::env::var(k).ok()))
        .collect();
    for key in CONFIG_VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
    EnvGuard { restores: pairs }
}

#[allow(dead_code)]
pub fn jsonl_lines(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .expect("read jsonl")
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("valid json line"))
        .collect()
}
