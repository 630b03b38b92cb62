use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    inline::{
        pattern::{InlineMatch, InlinePattern},
        types::InlineNode,
    },
    span::Span,
};

/// Bold inline type with owned delimiter.
///
/// `**text**` with non-empty text; the shortest closing delimiter wins.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";

    pub(crate) fn regex() -> &'static Regex {
        static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
        BOLD_REGEX.get_or_init(|| {
            let d = regex::escape(Self::DELIM);
            Regex::new(&format!("{d}(.+?){d}")).expect("Invalid bold regex")
        })
    }
}

impl InlinePattern for Bold {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn find(&self, s: &str) -> Option<InlineMatch> {
        let caps = Self::regex().captures(s)?;
        let full = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(InlineMatch {
            full: Span {
                start: full.start(),
                end: full.end(),
            },
            node: InlineNode::Bold(inner.as_str().to_string()),
        })
    }
}
