use super::{
    kinds::{Bold, Link},
    pattern::{InlinePattern, MatchCache},
    types::InlineNode,
};

/// Candidate inline patterns, in tie-break order.
pub static PATTERNS: &[&dyn InlinePattern] = &[&Link, &Bold];

/// Resolves a single line of text into a sequence of [`InlineNode`]s.
///
/// Each step finds the earliest-starting token among [`PATTERNS`] in the
/// unconsumed suffix (see [`MatchCache`]), emits any literal text before it, emits the token's node
/// and resumes after the token. Tokens never nest and consumed text is never
/// rescanned. Unterminated or malformed markup simply fails to match and ends
/// up inside a `Text` node.
///
/// Empty text runs are never emitted, so an empty line yields no nodes.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut out = vec![];
    let mut pos = 0;
    let mut matches = MatchCache::new(PATTERNS);

    // Helper to flush literal text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
        if !text.is_empty() {
            out.push(InlineNode::Text(text.to_string()));
        }
    }

    while let Some(m) = matches.next_match(s, pos) {
        flush_text(&mut out, &s[pos..m.full.start]);
        out.push(m.node);
        pos = m.full.end;
    }

    flush_text(&mut out, &s[pos..]);
    out
}
