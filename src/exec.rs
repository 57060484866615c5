//! Synchronous run-and-wait primitives for external commands.
//!
//! Every command the scaffolder issues goes through [`run`]; the installer's
//! pipeline commands go through [`run_shell`]. Children inherit stdio, so
//! prompts and progress from the spawned tools reach the terminal directly.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Description of a single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: None }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Directory the command runs in; the current directory when unset.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs a command to completion, waiting on it before returning.
///
/// A non-zero exit aborts the caller with [`Error::CommandFailed`] carrying
/// the rendered command line and the child's exit status.
pub fn run(spec: &CommandSpec) -> Result<()> {
    log::debug!("Running command: {spec}");

    let mut command = Command::new(&spec.program);
    command.args(&spec.args);
    if let Some(cwd) = &spec.cwd {
        command.current_dir(cwd);
    }

    let status = command.status()?;
    if !status.success() {
        return Err(Error::CommandFailed { command: spec.to_string(), status });
    }
    Ok(())
}

/// Runs a command line through the platform shell.
///
/// The install commands are pipelines (`curl ... | sh`), which need a shell
/// to interpret them.
pub fn run_shell(command_line: &str) -> Result<()> {
    log::debug!("Running shell command: {command_line}");

    let mut command = if cfg!(windows) {
        let mut command = Command::new("cmd");
        command.args(["/C", command_line]);
        command
    } else {
        let mut command = Command::new("sh");
        command.args(["-c", command_line]);
        command
    };

    let status = command.status()?;
    if !status.success() {
        return Err(Error::CommandFailed { command: command_line.to_string(), status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_full_command_line() {
        let spec = CommandSpec::new("uv")
            .args(["init", "demo", "--python", "3.12"])
            .current_dir("somewhere");
        assert_eq!(spec.to_string(), "uv init demo --python 3.12");
        assert_eq!(spec.cwd(), Some(std::path::Path::new("somewhere")));
    }

    #[test]
    fn renders_bare_program() {
        assert_eq!(CommandSpec::new("uv").to_string(), "uv");
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_carries_its_status() {
        let spec = CommandSpec::new("false");
        let err = run(&spec).unwrap_err();
        match err {
            Error::CommandFailed { command, status } => {
                assert_eq!(command, "false");
                assert_eq!(status.code(), Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn shell_failure_propagates_exit_code() {
        let err = run_shell("exit 3").unwrap_err();
        match err {
            Error::CommandFailed { status, .. } => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected error: {other}"),
        }
        assert!(run_shell("exit 0").is_ok());
    }
}
