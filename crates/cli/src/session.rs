use std::io::{Stdout, Write};

use cmake_pilot_core::build_directory::BuildDirectory;
use cmake_pilot_core::command_line::Toolchain;
use cmake_pilot_core::config;
use cmake_pilot_core::execution::SystemRunner;

use crate::cli_args::Args;
use crate::console::Console;
use crate::prompt::TerminalPrompter;

/// Everything an action needs, constructed once per run.
///
/// The session is driven from a single thread, so at most one external
/// invocation is ever in flight against the build directory.
pub struct Session<R, P, W: Write> {
    pub build_directory: BuildDirectory,
    pub toolchain: Toolchain,
    pub runner: R,
    pub prompter: P,
    pub console: Console<W>,
}

impl<R, P, W: Write> Session<R, P, W> {
    pub fn new(
        build_directory: BuildDirectory,
        toolchain: Toolchain,
        runner: R,
        prompter: P,
        console: Console<W>,
    ) -> Self {
        Self {
            build_directory,
            toolchain,
            runner,
            prompter,
            console,
        }
    }
}

/// Session wired to the real terminal and real processes.
pub type TerminalSession = Session<SystemRunner, TerminalPrompter, Stdout>;

impl TerminalSession {
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        let toolchain = Toolchain::new(
            config::get_cmake_program(&args.cmake),
            config::get_ctest_program(&args.ctest),
        );

        Session::new(
            BuildDirectory::default(),
            toolchain,
            SystemRunner,
            TerminalPrompter,
            Console::stdout(!args.no_color),
        )
    }
}
