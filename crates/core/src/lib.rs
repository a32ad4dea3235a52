//! CMake Pilot Core Library
//!
//! This crate holds everything the interactive front-end needs that does not
//! touch the terminal: the menu tasks, the build directory, discovery of
//! targets from the build tool's help listing, assembly of configure/build/
//! clean/test command lines and the process runner that executes them.
//!
//! # Key Features
//!
//! - **Target Discovery**: Turn `cmake --build . --target help` output into a selectable list
//! - **Command Construction**: One builder per action, arguments kept as a vector
//! - **Cache Definitions**: Render user options as `-D<name>=<value>` tokens
//! - **Process Execution**: Blocking, shell-free invocation with uniform failure reporting
//!
//! # Examples
//!
//! Building the command line that cleans a single target:
//!
//! ```
//! use cmake_pilot_core::build_directory::BuildDirectory;
//! use cmake_pilot_core::command_line::Toolchain;
//!
//! let build_directory = BuildDirectory::default();
//! let command = Toolchain::default().clean_target(build_directory.path(), "mylib");
//! assert_eq!(command.argv(), vec!["cmake", "--build", ".", "--target", "clean_mylib"]);
//! ```

pub mod build_directory;
pub mod command_line;
pub mod config;
pub mod defines;
pub mod error;
pub mod execution;
pub mod targets;
pub mod tasks;
