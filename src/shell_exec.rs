//! External command execution with logging and timing.
//!
//! Every git query goes through [`Cmd`], so `-v` shows the exact command
//! line and how long it took:
//!
//! ```text
//! $ git status --porcelain=2 -z [/path/to/repo]
//! [git-trace] cmd="git status --porcelain=2 -z" dur_us=1834 ok=true
//! ```

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::Instant;

/// Builder for executing commands with logging and tracing.
///
/// ```ignore
/// let output = Cmd::new("git")
///     .args(["status", "--porcelain=2"])
///     .current_dir(&repo_path)
///     .run()?;
/// ```
pub struct Cmd {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl Cmd {
    /// Create a new command builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            envs: Vec::new(),
        }
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory for the command.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Set an environment variable.
    pub fn env(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
        self.envs.push((key.into(), val.into()));
        self
    }

    /// The command line as it is logged, e.g. `git rev-parse --git-dir`.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    /// Execute the command, capturing stdout and stderr.
    ///
    /// Stdin is closed; none of the queries we run are interactive.
    pub fn run(self) -> std::io::Result<Output> {
        let cmd_str = self.display();

        match &self.current_dir {
            Some(dir) => log::debug!("$ {} [{}]", cmd_str, dir.display()),
            None => log::debug!("$ {}", cmd_str),
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).stdin(Stdio::null());
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        for (key, val) in &self.envs {
            cmd.env(key, val);
        }

        let t0 = Instant::now();
        let result = cmd.output();
        let dur_us = t0.elapsed().as_micros() as u64;

        match &result {
            Ok(output) => {
                log::debug!(
                    "[git-trace] cmd=\"{}\" dur_us={} ok={}",
                    cmd_str,
                    dur_us,
                    output.status.success()
                );
                if !output.status.success() {
                    for line in String::from_utf8_lossy(&output.stderr).lines() {
                        log::debug!("  ! {}", line);
                    }
                }
            }
            Err(e) => {
                log::debug!(
                    "[git-trace] cmd=\"{}\" dur_us={} err=\"{}\"",
                    cmd_str,
                    dur_us,
                    e
                );
            }
        }

        result
    }
}
