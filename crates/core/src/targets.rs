//! Target discovery from the build tool's help listing.
//!
//! `cmake --build . --target help` prints one target per line in the form
//! `... name` or `name ... description` depending on the generator, preceded by
//! a header sentence. Only the part before the first separator is kept.
//!
//! A target whose own name contains the separator is cut at its first
//! occurrence. This is a known limitation and is not corrected.

/// Token between a target name and its description.
pub const TARGET_SEPARATOR: &str = "...";

/// Umbrella target that builds everything; never offered for selection.
pub const UMBRELLA_TARGET: &str = "all";

/// Prefix of the descriptive header line of the help listing.
pub const HEADER_PREFIX: &str = "The following";

/// Extracts the selectable target names from raw help output.
///
/// Names are returned in the order first seen. Duplicates emitted by the tool
/// are kept. An empty result means no targets are available.
///
/// # Examples
///
/// ```
/// use cmake_pilot_core::targets::extract_targets;
///
/// let output = "all ... Build all\nfoo ... Build foo\nThe following are...\n";
/// assert_eq!(extract_targets(output), vec!["foo".to_string()]);
/// ```
pub fn extract_targets(raw_output: &str) -> Vec<String> {
    raw_output
        .lines()
        .filter_map(|line| line.split_once(TARGET_SEPARATOR))
        .map(|(name, _)| name.trim())
        .filter(|name| is_selectable(name))
        .map(ToString::to_string)
        .collect()
}

fn is_selectable(name: &str) -> bool {
    !name.is_empty() && name != UMBRELLA_TARGET && !name.starts_with(HEADER_PREFIX)
}
