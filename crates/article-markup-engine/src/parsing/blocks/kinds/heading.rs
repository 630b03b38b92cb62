use crate::parsing::blocks::types::HeadingLevel;

/// Heading block type with owned prefix constants.
pub struct Heading;

impl Heading {
    pub const H2_PREFIX: &'static str = "## ";
    pub const H3_PREFIX: &'static str = "### ";

    /// Matches a trimmed line against the heading prefixes.
    ///
    /// Returns the level and the text after the prefix, with its internal
    /// spacing untouched.
    pub fn strip(line: &str) -> Option<(HeadingLevel, &str)> {
        if let Some(rest) = line.strip_prefix(Self::H3_PREFIX) {
            return Some((HeadingLevel::H3, rest));
        }
        line.strip_prefix(Self::H2_PREFIX)
            .map(|rest| (HeadingLevel::H2, rest))
    }
}
