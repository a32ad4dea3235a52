use std::fmt::{Display, Formatter};

/// An action offered by the top-level menu.
///
/// The menu shows [`Task::ALL`] in order; `Exit` is the only task that ends
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    InitBuildDir,
    BuildAll,
    BuildTarget,
    CleanAll,
    CleanTarget,
    RunTests,
    Configure,
    Exit,
}

impl Task {
    pub const ALL: [Task; 8] = [
        Task::InitBuildDir,
        Task::BuildAll,
        Task::BuildTarget,
        Task::CleanAll,
        Task::CleanTarget,
        Task::RunTests,
        Task::Configure,
        Task::Exit,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Task::InitBuildDir => "init-build-dir",
            Task::BuildAll => "build-all",
            Task::BuildTarget => "build-target",
            Task::CleanAll => "clean-all",
            Task::CleanTarget => "clean-target",
            Task::RunTests => "run-tests",
            Task::Configure => "configure",
            Task::Exit => "exit",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Task::InitBuildDir => "Create build directory and initialize CMake configuration.",
            Task::BuildAll => "Build all targets using CMake.",
            Task::BuildTarget => "Build a specific target using CMake.",
            Task::CleanAll => "Clean all build artifacts.",
            Task::CleanTarget => "Clean a specific target.",
            Task::RunTests => "Run all tests using CTest.",
            Task::Configure => "Configure CMake project with specific options.",
            Task::Exit => "Exit the CLI tool.",
        }
    }
}

impl Display for Task {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} - {}", self.name(), self.description())
    }
}
