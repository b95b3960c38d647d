//! Child process execution
//!
//! Spawns the configured command through the platform shell and blocks
//! until it exits. The blocking wait reaps the child, so no zombie is ever
//! left behind, and because the caller waits on the same thread that
//! receives change notifications, at most one child exists at a time.

use std::process::{Command, ExitStatus};

use crate::command::CommandLine;
use crate::error::{WatchrunError, WatchrunResult};

/// Runs the configured command, once per trigger.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    command: CommandLine,
}

impl CommandRunner {
    pub fn new(command: CommandLine) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &CommandLine {
        &self.command
    }

    /// Spawn the command through the shell and wait for it to exit.
    ///
    /// A spawn failure is fatal to the watcher. A non-zero exit status is
    /// not: build and test commands fail routinely, so the status is
    /// returned for reporting and the watch loop carries on.
    pub fn run(&self) -> WatchrunResult<ExitStatus> {
        self.shell_command()
            .status()
            .map_err(|source| WatchrunError::Spawn {
                command: self.command.to_string(),
                source,
            })
    }

    #[cfg(not(windows))]
    fn shell_command(&self) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(self.command.as_str());
        cmd
    }

    #[cfg(windows)]
    fn shell_command(&self) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(self.command.as_str());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner(tokens: &[&str]) -> CommandRunner {
        CommandRunner::new(CommandLine::from_args(tokens.iter().copied()).unwrap())
    }

    #[test]
    fn test_run_success_status() {
        let status = runner(&["true"]).run().unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_run_nonzero_is_not_an_error() {
        let status = runner(&["false"]).run().unwrap();
        assert!(!status.success());
    }

    #[test]
    fn test_run_reports_exit_code() {
        let status = runner(&["exit", "7"]).run().unwrap();
        assert_eq!(status.code(), Some(7));
    }

    #[test]
    fn test_run_command_may_contain_shell_syntax() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran.txt");
        let status = runner(&["echo", "hi", ">", &marker.display().to_string()])
            .run()
            .unwrap();
        assert!(status.success());
        assert_eq!(std::fs::read_to_string(&marker).unwrap().trim(), "hi");
    }
}
