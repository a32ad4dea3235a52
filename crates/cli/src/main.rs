use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cmake_pilot_cli::cli_args::Args;
use cmake_pilot_cli::dispatcher;
use cmake_pilot_cli::session::TerminalSession;
use cmake_pilot_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let mut session = TerminalSession::from_args(&args);
    debug!(
        "Using `{}` and `{}` in `{}`",
        session.toolchain.cmake,
        session.toolchain.ctest,
        session.build_directory.path().display()
    );

    dispatcher::run_menu(&mut session)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
