//! Running the external build tool.
//!
//! Every invocation blocks until the process exits. No timeout is applied, so
//! a hung build hangs the session. Only one invocation is ever in flight.

use std::process::{Command, Stdio};

use log::{debug, info, warn};

use crate::command_line::CommandLine;

/// How an invocation ended.
///
/// A process that could not be started, or was killed by a signal, is a
/// `Failure(None)`; callers do not tell it apart from a non-zero exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure(Option<i32>),
}

impl ExitStatus {
    #[must_use]
    pub fn success(&self) -> bool {
        matches!(self, ExitStatus::Success)
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        if status.success() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure(status.code())
        }
    }
}

/// Fully buffered result of an invocation whose output is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
}

pub trait ProcessRunner {
    /// Runs the command with the terminal attached and waits for it.
    fn run(&mut self, command: &CommandLine) -> ExitStatus;

    /// Runs the command, buffering its standard output until it exits.
    fn capture(&mut self, command: &CommandLine) -> CapturedOutput;
}

/// Runs commands as real child processes.
///
/// Arguments are passed as a vector and never go through a shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(command_line: &CommandLine) -> Command {
        let mut command = Command::new(&command_line.program);
        command
            .args(&command_line.args)
            .current_dir(&command_line.working_directory);
        command
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, command_line: &CommandLine) -> ExitStatus {
        info!(
            "Executing `{}` in `{}`",
            command_line,
            command_line.working_directory.display()
        );

        let mut command = Self::command(command_line);
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = match command.spawn().and_then(|mut child| child.wait()) {
            Ok(status) => ExitStatus::from(status),
            Err(e) => {
                warn!("Could not run `{}`: {}", command_line.program, e);
                ExitStatus::Failure(None)
            }
        };

        debug!("`{}` finished with {:?}", command_line, status);
        status
    }

    fn capture(&mut self, command_line: &CommandLine) -> CapturedOutput {
        info!(
            "Capturing output of `{}` in `{}`",
            command_line,
            command_line.working_directory.display()
        );

        let mut command = Self::command(command_line);
        command.stdin(Stdio::null()).stderr(Stdio::inherit());

        match command.output() {
            Ok(output) => {
                let status = ExitStatus::from(output.status);
                debug!("`{}` finished with {:?}", command_line, status);
                CapturedOutput {
                    status,
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                }
            }
            Err(e) => {
                warn!("Could not run `{}`: {}", command_line.program, e);
                CapturedOutput {
                    status: ExitStatus::Failure(None),
                    stdout: String::new(),
                }
            }
        }
    }
}
