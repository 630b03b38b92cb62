/// Raw line block type (table-like lines passed through verbatim).
///
/// Tables are opaque: no cell splitting and no inline parsing happens here.
pub struct RawLine;

impl RawLine {
    pub const PREFIX: char = '|';

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }
}
