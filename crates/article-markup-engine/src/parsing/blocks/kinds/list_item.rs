/// List item block type with owned marker constant.
pub struct ListItem;

impl ListItem {
    pub const MARKER: &'static str = "- ";

    /// Returns the item text after the marker, if `line` is a list item.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}
