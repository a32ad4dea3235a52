//! Menu loop and per-task dispatch.
//!
//! Each task runs the same linear sequence: make sure the build directory is
//! there, build the command line (asking the user where the task needs
//! input), invoke it and report the result. A failed invocation is reported
//! and the menu comes back; only a failure to create the build directory or
//! to talk to the terminal ends the session.

use std::io::Write;

use log::{debug, info};

use cmake_pilot_core::command_line::CommandLine;
use cmake_pilot_core::defines::{BuildType, ConfigOption};
use cmake_pilot_core::error::Result;
use cmake_pilot_core::execution::ProcessRunner;
use cmake_pilot_core::targets::extract_targets;
use cmake_pilot_core::tasks::Task;

use crate::console::Tone;
use crate::prompt::{Choice, Prompter};
use crate::session::Session;

pub const WELCOME_MESSAGE: &str = "Welcome to the CMake Project CLI Tool!";
pub const FAREWELL_MESSAGE: &str = "Exiting. Goodbye!";
pub const MENU_PROMPT: &str = "Choose a task to perform:";
pub const DECLINED_MESSAGE: &str = "Cancelled. Returning to menu.";
pub const COMMAND_FAILED_MESSAGE: &str = "Command failed.";
pub const NOTHING_TO_CLEAN_MESSAGE: &str = "Build directory doesn't exist. Nothing to clean.";

/// How a single task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    /// The user cancelled a prompt; nothing was invoked.
    Aborted,
    /// There was nothing to act on; nothing was invoked.
    NothingToDo,
    Exit,
}

/// Runs the interactive menu until the user exits.
///
/// Cancelling the menu itself (e.g. end of input) is treated like `exit`.
///
/// # Errors
///
/// Returns an error only when the build directory cannot be created or the
/// terminal cannot be read or written.
pub fn run_menu<R, P, W>(session: &mut Session<R, P, W>) -> Result<()>
where
    R: ProcessRunner,
    P: Prompter,
    W: Write,
{
    session.console.message(Tone::Banner, WELCOME_MESSAGE)?;

    let choices: Vec<Choice<Task>> = Task::ALL
        .into_iter()
        .map(|task| Choice::new(task.to_string(), task))
        .collect();

    loop {
        let task = match session.prompter.select(MENU_PROMPT, &choices)? {
            Some(task) => task,
            None => {
                debug!("Menu selection cancelled, leaving");
                Task::Exit
            }
        };

        if task == Task::Exit {
            session.console.message(Tone::Farewell, FAREWELL_MESSAGE)?;
            return Ok(());
        }

        if !session
            .prompter
            .confirm(&format!("Proceed with `{}`?", task.name()))?
        {
            session.console.message(Tone::Warning, DECLINED_MESSAGE)?;
            continue;
        }

        let outcome = perform(session, task)?;
        info!("Task `{}` ended with {:?}", task.name(), outcome);
    }
}

/// Runs one task to completion.
///
/// # Errors
///
/// See [`run_menu`].
pub fn perform<R, P, W>(session: &mut Session<R, P, W>, task: Task) -> Result<Outcome>
where
    R: ProcessRunner,
    P: Prompter,
    W: Write,
{
    debug!("Performing `{}`", task.name());

    match task {
        Task::InitBuildDir => init_build_dir(session),
        Task::BuildAll => build_all(session),
        Task::BuildTarget => build_target(session),
        Task::CleanAll => clean_all(session),
        Task::CleanTarget => clean_target(session),
        Task::RunTests => run_tests(session),
        Task::Configure => configure(session),
        Task::Exit => Ok(Outcome::Exit),
    }
}

/// Shows the command, runs it and reports a failure. Returns whether it succeeded.
fn invoke<R, P, W>(session: &mut Session<R, P, W>, command: &CommandLine) -> Result<bool>
where
    R: ProcessRunner,
    W: Write,
{
    debug!("Built `{}`", command);
    session.console.panel(&format!("Running: {command}"))?;

    let status = session.runner.run(command);
    if status.success() {
        return Ok(true);
    }

    info!("`{}` failed with {:?}", command, status);
    session.console.message(Tone::Failure, COMMAND_FAILED_MESSAGE)?;
    Ok(false)
}

/// Reports `success_message` and maps the invocation result onto an outcome.
fn report<R, P, W>(
    session: &mut Session<R, P, W>,
    succeeded: bool,
    success_message: &str,
    failure_message: Option<&str>,
) -> Result<Outcome>
where
    W: Write,
{
    if succeeded {
        session.console.message(Tone::Success, success_message)?;
        return Ok(Outcome::Succeeded);
    }

    if let Some(failure_message) = failure_message {
        session.console.message(Tone::Failure, failure_message)?;
    }
    Ok(Outcome::Failed)
}

fn init_build_dir<R, P, W>(session: &mut Session<R, P, W>) -> Result<Outcome>
where
    R: ProcessRunner,
    W: Write,
{
    if session.build_directory.ensure()? {
        let message = format!(
            "Created build directory: {}",
            session.build_directory.path().display()
        );
        session.console.message(Tone::Success, &message)?;
    }

    let command = session.toolchain.init(session.build_directory.path());
    let succeeded = invoke(session, &command)?;
    report(
        session,
        succeeded,
        "CMake configuration completed successfully.",
        Some("CMake configuration failed."),
    )
}

fn build_all<R, P, W>(session: &mut Session<R, P, W>) -> Result<Outcome>
where
    R: ProcessRunner,
    W: Write,
{
    session.build_directory.ensure()?;

    let command = session.toolchain.build_all(session.build_directory.path());
    let succeeded = invoke(session, &command)?;
    report(session, succeeded, "Build completed successfully.", None)
}

fn build_target<R, P, W>(session: &mut Session<R, P, W>) -> Result<Outcome>
where
    R: ProcessRunner,
    P: Prompter,
    W: Write,
{
    session.build_directory.ensure()?;

    let listing = session
        .toolchain
        .list_targets(session.build_directory.path());
    let captured = session.runner.capture(&listing);
    if !captured.status.success() {
        info!("`{}` failed with {:?}", listing, captured.status);
        session
            .console
            .message(Tone::Failure, "Failed to get available targets.")?;
        return Ok(Outcome::Failed);
    }

    let targets = extract_targets(&captured.stdout);
    debug!("Discovered {} targets", targets.len());
    if targets.is_empty() {
        session
            .console
            .message(Tone::Warning, "No specific targets found.")?;
        return Ok(Outcome::NothingToDo);
    }

    let choices: Vec<Choice<String>> = targets.into_iter().map(Choice::from_value).collect();
    let Some(target) = session
        .prompter
        .select("Choose a target to build:", &choices)?
    else {
        return Ok(Outcome::Aborted);
    };

    let command = session
        .toolchain
        .build_target(session.build_directory.path(), &target);
    let succeeded = invoke(session, &command)?;
    report(
        session,
        succeeded,
        &format!("Target '{target}' built successfully."),
        None,
    )
}

fn clean_all<R, P, W>(session: &mut Session<R, P, W>) -> Result<Outcome>
where
    R: ProcessRunner,
    W: Write,
{
    if !session.build_directory.exists() {
        session
            .console
            .message(Tone::Warning, NOTHING_TO_CLEAN_MESSAGE)?;
        return Ok(Outcome::NothingToDo);
    }

    let command = session.toolchain.clean_all(session.build_directory.path());
    let succeeded = invoke(session, &command)?;
    report(session, succeeded, "All targets cleaned successfully.", None)
}

fn clean_target<R, P, W>(session: &mut Session<R, P, W>) -> Result<Outcome>
where
    R: ProcessRunner,
    P: Prompter,
    W: Write,
{
    if !session.build_directory.exists() {
        session
            .console
            .message(Tone::Warning, NOTHING_TO_CLEAN_MESSAGE)?;
        return Ok(Outcome::NothingToDo);
    }

    // Per-target clean targets do not show up in the help listing, so the name is typed
    let Some(target) = session.prompter.text("Enter the target name to clean:")? else {
        return Ok(Outcome::Aborted);
    };

    let command = session
        .toolchain
        .clean_target(session.build_directory.path(), &target);
    let succeeded = invoke(session, &command)?;
    report(
        session,
        succeeded,
        &format!("Target '{target}' cleaned successfully."),
        Some(&format!(
            "Failed to clean target '{target}'. Make sure the target exists."
        )),
    )
}

fn run_tests<R, P, W>(session: &mut Session<R, P, W>) -> Result<Outcome>
where
    R: ProcessRunner,
    W: Write,
{
    session.build_directory.ensure()?;

    let command = session.toolchain.run_tests(session.build_directory.path());
    let succeeded = invoke(session, &command)?;
    report(
        session,
        succeeded,
        "Tests completed successfully.",
        Some("Some tests failed."),
    )
}

fn configure<R, P, W>(session: &mut Session<R, P, W>) -> Result<Outcome>
where
    R: ProcessRunner,
    P: Prompter,
    W: Write,
{
    session.build_directory.ensure()?;

    let build_types: Vec<Choice<BuildType>> =
        BuildType::ALL.into_iter().map(Choice::from_value).collect();
    let Some(build_type) = session
        .prompter
        .select("Select build type:", &build_types)?
    else {
        return Ok(Outcome::Aborted);
    };

    let Some(options) = collect_options(&mut session.prompter)? else {
        return Ok(Outcome::Aborted);
    };

    let command = session
        .toolchain
        .configure(session.build_directory.path(), build_type, &options);
    let succeeded = invoke(session, &command)?;
    report(
        session,
        succeeded,
        "CMake configuration updated successfully.",
        None,
    )
}

/// Asks for `name`/`value` pairs while the user wants to add more.
///
/// A value may be empty, which clears the cache entry. Returns `None` if a
/// name or value prompt is cancelled.
fn collect_options<P: Prompter>(prompter: &mut P) -> Result<Option<Vec<ConfigOption>>> {
    let mut options = Vec::new();

    while prompter.confirm("Add another CMake option?")? {
        let Some(name) = prompter.text("Option name:")? else {
            return Ok(None);
        };
        let Some(value) = prompter.value("Option value:")? else {
            return Ok(None);
        };

        debug!("Collected option `{}`", name);
        options.push(ConfigOption::new(name, value));
    }

    Ok(Some(options))
}
