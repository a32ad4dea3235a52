//! CMake Pilot CLI Library
//!
//! This crate provides the interactive front-end: a menu of tasks that each
//! drive `cmake` or `ctest` in the `build` directory, so the flags do not have
//! to be remembered.
//!
//! # Key Features
//!
//! - **Task Menu**: Pick init, build, clean, test or configure from a list
//! - **Target Selection**: Build a single target chosen from the discovered targets
//! - **Configure Options**: Choose a build type and add `-D` cache definitions interactively
//! - **Confirmation**: Every task is confirmed before anything runs
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`console`]: Colored messages and panels
//! - [`prompt`]: Selection list, confirmation and text prompts
//! - [`session`]: Build directory, programs, runner, prompter and console for one run
//! - [`dispatcher`]: The menu loop and what each task does
//!
//! # Examples
//!
//! ```bash
//! # Start the menu in the project root
//! cpilot
//!
//! # Use a specific CMake installation
//! cpilot --cmake ~/tools/cmake/bin/cmake --ctest ~/tools/cmake/bin/ctest
//! ```

pub mod cli_args;
pub mod console;
pub mod dispatcher;
pub mod prompt;
pub mod session;
