//! Construction of the external command lines, one per action.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::config::{DEFAULT_CMAKE_PROGRAM, DEFAULT_CTEST_PROGRAM};
use crate::defines::{build_define_args, BuildType, ConfigOption};

/// Target whose output lists the available targets.
pub const HELP_TARGET: &str = "help";

/// Target that removes all build artifacts.
pub const CLEAN_TARGET: &str = "clean";

/// Per-target clean targets are assumed to be named `clean_<target>`.
pub const CLEAN_TARGET_PREFIX: &str = "clean_";

/// Source directory as seen from the build directory.
const SOURCE_DIRECTORY: &str = "..";

/// Arguments plus working directory, built per invocation and executed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    pub working_directory: PathBuf,
}

impl CommandLine {
    pub fn new<I, S>(program: &str, args: I, working_directory: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            working_directory: working_directory.to_path_buf(),
        }
    }

    /// Program followed by its arguments.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl Display for CommandLine {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.argv().iter().join(" ").as_str())
    }
}

/// The external programs, resolved once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub cmake: String,
    pub ctest: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::new(DEFAULT_CMAKE_PROGRAM, DEFAULT_CTEST_PROGRAM)
    }
}

impl Toolchain {
    pub fn new(cmake: impl Into<String>, ctest: impl Into<String>) -> Self {
        Self {
            cmake: cmake.into(),
            ctest: ctest.into(),
        }
    }

    /// `cmake ..`
    #[must_use]
    pub fn init(&self, build_directory: &Path) -> CommandLine {
        CommandLine::new(&self.cmake, [SOURCE_DIRECTORY], build_directory)
    }

    /// `cmake --build .`
    #[must_use]
    pub fn build_all(&self, build_directory: &Path) -> CommandLine {
        CommandLine::new(&self.cmake, ["--build", "."], build_directory)
    }

    /// `cmake --build . --target help`
    #[must_use]
    pub fn list_targets(&self, build_directory: &Path) -> CommandLine {
        self.build_target(build_directory, HELP_TARGET)
    }

    /// `cmake --build . --target <target>`
    #[must_use]
    pub fn build_target(&self, build_directory: &Path, target: &str) -> CommandLine {
        CommandLine::new(
            &self.cmake,
            ["--build", ".", "--target", target],
            build_directory,
        )
    }

    /// `cmake --build . --target clean`
    #[must_use]
    pub fn clean_all(&self, build_directory: &Path) -> CommandLine {
        self.build_target(build_directory, CLEAN_TARGET)
    }

    /// `cmake --build . --target clean_<target>`
    ///
    /// Whether such a target exists is left to the build tool to report.
    #[must_use]
    pub fn clean_target(&self, build_directory: &Path, target: &str) -> CommandLine {
        self.build_target(build_directory, &format!("{CLEAN_TARGET_PREFIX}{target}"))
    }

    /// `ctest -V`
    #[must_use]
    pub fn run_tests(&self, build_directory: &Path) -> CommandLine {
        CommandLine::new(&self.ctest, ["-V"], build_directory)
    }

    /// `cmake -DCMAKE_BUILD_TYPE=<type> [-D<name>=<value> ...] ..`
    #[must_use]
    pub fn configure(
        &self,
        build_directory: &Path,
        build_type: BuildType,
        options: &[ConfigOption],
    ) -> CommandLine {
        let args = std::iter::once(build_type.to_option().to_define_arg())
            .chain(build_define_args(options))
            .chain(std::iter::once(SOURCE_DIRECTORY.to_string()));

        CommandLine::new(&self.cmake, args, build_directory)
    }
}
