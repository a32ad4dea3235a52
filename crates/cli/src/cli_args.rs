//! Command-line argument parsing.
//!
//! The tool is interactive; the arguments only choose which external programs
//! to drive and how to print.

use clap::Parser;

/// Interactive front-end for configuring, building, cleaning and testing a
/// CMake project in `./build`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmake_pilot_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cpilot", "--cmake", "/opt/cmake/bin/cmake"]);
/// assert_eq!(args.cmake.as_deref(), Some("/opt/cmake/bin/cmake"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(version, term_width = 0)]
pub struct Args {
    /// Program used to configure, build and clean.
    ///
    /// If not provided, `cmake` is looked up on the `PATH`.
    #[arg(long)]
    pub cmake: Option<String>,

    /// Program used to run the tests.
    ///
    /// If not provided, `ctest` is looked up on the `PATH`.
    #[arg(long)]
    pub ctest: Option<String>,

    /// Print messages without colors.
    #[arg(long, action)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["cpilot"]);

        assert!(args.cmake.is_none());
        assert!(args.ctest.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "cpilot",
            "--cmake",
            "~/bin/cmake",
            "--ctest",
            "/usr/bin/ctest",
            "--no-color",
        ]);

        assert_eq!(args.cmake, Some("~/bin/cmake".to_string()));
        assert_eq!(args.ctest, Some("/usr/bin/ctest".to_string()));
        assert!(args.no_color);
    }

    #[test]
    fn test_args_reject_positional() {
        assert!(Args::try_parse_from(["cpilot", "build-all"]).is_err());
    }
}
