//! Smoke-test shell-out.
//!
//! Failures never propagate as errors: every run produces a tagged
//! [`SmokeOutcome`] so callers can tell a failing suite from a passing
//! one, and a report file is written either way.

use std::path::{Path, PathBuf};
use std::process::Command;

use stagehand_core::types::TaskId;

/// Command used when nothing else is configured.
pub const DEFAULT_SMOKE_CMD: &str = "npx playwright test --reporter=line";

/// Result of one smoke run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeOutcome {
    pub ok: bool,
    /// Where the captured output (or failure description) landed.
    pub report_path: PathBuf,
    pub error: Option<String>,
}

/// Shell-out runner for the configured smoke-test command.
#[derive(Debug, Clone)]
pub struct SmokeRunner {
    command: String,
    report_dir: PathBuf,
}

impl SmokeRunner {
    /// Runner writing reports under `<root>/smoke-reports/`.
    pub fn new(root: &Path, command: impl Into<String>) -> Self {
        SmokeRunner {
            command: command.into(),
            report_dir: root.join("smoke-reports"),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run the smoke command for `task`, capturing combined output into a
    /// per-task report file. No timeout is imposed beyond whatever the
    /// invoked tool enforces itself.
    pub fn run(&self, task: &TaskId) -> SmokeOutcome {
        let report_path = self.report_path(task);

        let spawned = Command::new("sh").arg("-c").arg(&self.command).output();
        let (ok, report, error) = match spawned {
            Ok(output) => {
                let mut report = output.stdout;
                report.extend_from_slice(&output.stderr);
                let error = if output.status.success() {
                    None
                } else {
                    Some(format!("smoke command exited with {}", output.status))
                };
                (output.status.success(), report, error)
            }
            Err(err) => {
                let message = format!("failed to spawn smoke command: {err}");
                (false, message.clone().into_bytes(), Some(message))
            }
        };

        if let Err(err) = self.write_report(&report_path, &report) {
            return SmokeOutcome {
                ok: false,
                report_path,
                error: Some(match error {
                    Some(prior) => format!("{prior}; report write failed: {err}"),
                    None => format!("report write failed: {err}"),
                }),
            };
        }

        SmokeOutcome {
            ok,
            report_path,
            error,
        }
    }

    fn write_report(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.report_dir)?;
        std::fs::write(path, contents)
    }

    fn report_path(&self, task: &TaskId) -> PathBuf {
        // "#T-102" → "T-102"; keep only filename-safe characters.
        let slug: String = task
            .0
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        self.report_dir.join(format!("smoke-{slug}.log"))
    }
}
