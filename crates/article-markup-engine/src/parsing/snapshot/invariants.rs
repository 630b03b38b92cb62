use crate::parsing::{blocks::Block, inline::InlineNode, sanitize::is_safe_href};

/// Validates rendered block invariants.
///
/// Asserts that:
/// - Every link `href` is root-relative or the placeholder
/// - No `Text` node is empty and no two `Text` nodes are adjacent
/// - `List` blocks have at least one item and no item is empty
/// - Headings and paragraphs carry inline content
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[Block]) {
    for (i, b) in blocks.iter().enumerate() {
        match b {
            Block::Heading { inline, .. } | Block::Paragraph { inline } => {
                assert!(!inline.is_empty(), "block {i} has no inline content: {b:?}");
                check_inline(i, inline);
            }
            Block::List { items } => {
                assert!(!items.is_empty(), "block {i} is an empty list");
                for item in items {
                    assert!(!item.is_empty(), "block {i} has an empty list item");
                    check_inline(i, item);
                }
            }
            Block::RawLine { text } => {
                assert!(text.starts_with('|'), "block {i} raw line lost its prefix: {text:?}");
            }
        }
    }
}

fn check_inline(block: usize, nodes: &[InlineNode]) {
    for n in nodes {
        match n {
            InlineNode::Text(s) => {
                assert!(!s.is_empty(), "block {block} has an empty text node");
            }
            InlineNode::Bold(s) => {
                assert!(!s.is_empty(), "block {block} has an empty bold node");
            }
            InlineNode::Link { text, href } => {
                assert!(!text.is_empty(), "block {block} has a link without text");
                assert!(
                    is_safe_href(href),
                    "block {block} has an unsafe link href: {href:?}"
                );
            }
        }
    }
    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [InlineNode::Text(_), InlineNode::Text(_)]),
            "block {block} has adjacent text nodes: {pair:?}"
        );
    }
}
