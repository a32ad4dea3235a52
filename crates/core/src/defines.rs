//! Cache definitions passed to the configure step.

use std::fmt::{Display, Formatter};

/// Cache variable holding the build type.
pub const BUILD_TYPE_VARIABLE: &str = "CMAKE_BUILD_TYPE";

/// A `(name, value)` pair entered by the user, rendered as `-Dname=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    pub name: String,
    pub value: String,
}

impl ConfigOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// No escaping is applied; arguments are handed to the process as a vector.
    #[must_use]
    pub fn to_define_arg(&self) -> String {
        format!("-D{}={}", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for ConfigOption {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// Renders each option as a single `-D<name>=<value>` token, preserving order.
///
/// ```
/// use cmake_pilot_core::defines::{build_define_args, ConfigOption};
///
/// let options: Vec<ConfigOption> = vec![("A", "1").into(), ("B", "2").into()];
/// assert_eq!(build_define_args(&options), vec!["-DA=1", "-DB=2"]);
/// ```
pub fn build_define_args(options: &[ConfigOption]) -> Vec<String> {
    options.iter().map(ConfigOption::to_define_arg).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    pub const ALL: [BuildType; 4] = [
        BuildType::Debug,
        BuildType::Release,
        BuildType::RelWithDebInfo,
        BuildType::MinSizeRel,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }

    #[must_use]
    pub fn to_option(&self) -> ConfigOption {
        ConfigOption::new(BUILD_TYPE_VARIABLE, self.as_str())
    }
}

impl Display for BuildType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_define_args_preserves_order() {
        let options: Vec<ConfigOption> = vec![("A", "1").into(), ("B", "2").into()];
        assert_eq!(build_define_args(&options), vec!["-DA=1", "-DB=2"]);
    }

    #[test]
    fn test_build_define_args_empty() {
        assert!(build_define_args(&[]).is_empty());
    }

    #[test]
    fn test_define_arg_is_not_escaped() {
        let option = ConfigOption::new("FLAGS", "-O2 -g; rm -rf /");
        assert_eq!(option.to_define_arg(), "-DFLAGS=-O2 -g; rm -rf /");
    }

    #[test]
    fn test_define_arg_empty_value() {
        let option = ConfigOption::new("EMPTY", "");
        assert_eq!(option.to_define_arg(), "-DEMPTY=");
    }

    #[test]
    fn test_build_type_option() {
        assert_eq!(
            BuildType::RelWithDebInfo.to_option().to_define_arg(),
            "-DCMAKE_BUILD_TYPE=RelWithDebInfo"
        );
    }

    #[test]
    fn test_build_type_display_matches_listing_order() {
        let names: Vec<String> = BuildType::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["Debug", "Release", "RelWithDebInfo", "MinSizeRel"]);
    }
}
