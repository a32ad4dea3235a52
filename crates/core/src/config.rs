//! Configuration defaults and program resolution.
//!
//! The build directory is fixed; only the external programs can be
//! overridden, and shell expansions like `~` are resolved for them.

/// Build directory, relative to the current working directory.
pub const DEFAULT_BUILD_DIRECTORY: &str = "build";

/// Program used to configure, build and clean.
pub const DEFAULT_CMAKE_PROGRAM: &str = "cmake";

/// Program used to run the tests.
pub const DEFAULT_CTEST_PROGRAM: &str = "ctest";

/// Resolves the configure/build program.
///
/// # Examples
///
/// ```
/// use cmake_pilot_core::config::get_cmake_program;
///
/// assert_eq!(get_cmake_program(&None), "cmake");
/// let custom = Some("/opt/cmake/bin/cmake".to_string());
/// assert_eq!(get_cmake_program(&custom), "/opt/cmake/bin/cmake");
/// ```
pub fn get_cmake_program(cmake_program_arg: &Option<String>) -> String {
    resolve_program(cmake_program_arg, DEFAULT_CMAKE_PROGRAM)
}

/// Resolves the test runner program.
pub fn get_ctest_program(ctest_program_arg: &Option<String>) -> String {
    resolve_program(ctest_program_arg, DEFAULT_CTEST_PROGRAM)
}

fn resolve_program(program_arg: &Option<String>, default: &str) -> String {
    let program = match program_arg {
        Some(program) => program,
        None => default,
    };

    shellexpand::tilde(program).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cmake_program_default() {
        assert_eq!(get_cmake_program(&None), DEFAULT_CMAKE_PROGRAM);
    }

    #[test]
    fn test_get_ctest_program_default() {
        assert_eq!(get_ctest_program(&None), DEFAULT_CTEST_PROGRAM);
    }

    #[test]
    fn test_get_cmake_program_with_custom_path() {
        let custom = Some("/usr/local/bin/cmake".to_string());
        assert_eq!(get_cmake_program(&custom), "/usr/local/bin/cmake");
    }

    #[test]
    fn test_get_ctest_program_with_tilde() {
        let tilde_path = Some("~/tools/ctest".to_string());
        let result = get_ctest_program(&tilde_path);
        // Should expand the tilde
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("tools/ctest"));
    }

    #[test]
    fn test_default_build_directory_constant() {
        assert_eq!(DEFAULT_BUILD_DIRECTORY, "build");
    }
}
