/// Byte offsets `start..end` of a token inside one line of article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Moves both offsets right by `by` bytes, turning a span relative to a
    /// suffix into one relative to the whole line.
    #[must_use]
    pub fn shifted(self, by: usize) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }
}
