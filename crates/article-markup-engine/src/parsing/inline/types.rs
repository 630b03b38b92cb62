use serde::Serialize;

/// A resolved unit of formatted text within a block.
///
/// Nodes own their text: they are built fresh on every render and hold no
/// references back into the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InlineNode {
    /// Literal text, including any markup that failed to match.
    Text(String),
    /// The inner text of a `**bold**` span.
    Bold(String),
    /// A `[text](target)` link. `href` is always the sanitized target.
    Link { text: String, href: String },
}

impl InlineNode {
    /// Returns the text a reader sees for this node.
    pub fn display_text(&self) -> &str {
        match self {
            InlineNode::Text(s) | InlineNode::Bold(s) => s,
            InlineNode::Link { text, .. } => text,
        }
    }
}

/// Concatenates the display text of `nodes` in order.
///
/// For the output of [`parse_inline`](super::parse_inline) this equals the
/// source line with the markup delimiters (and link targets) removed.
pub fn inline_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::display_text).collect()
}
