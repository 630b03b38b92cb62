use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    inline::{
        pattern::{InlineMatch, InlinePattern},
        types::InlineNode,
    },
    sanitize::sanitize_href,
    span::Span,
};

/// Link inline type with owned delimiters.
///
/// `[text](target)`: text may not contain `]`, target may not contain `)`,
/// both non-empty. The captured target is always sanitized before it
/// becomes an `href`.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const TEXT_CLOSE: &'static str = "]";
    pub const TARGET_OPEN: &'static str = "(";
    pub const CLOSE: &'static str = ")";

    pub(crate) fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            let open = regex::escape(Self::OPEN);
            let text_close = regex::escape(Self::TEXT_CLOSE);
            let target_open = regex::escape(Self::TARGET_OPEN);
            let close = regex::escape(Self::CLOSE);
            Regex::new(&format!(
                "{open}([^{text_close}]+){text_close}{target_open}([^{close}]+){close}"
            ))
            .expect("Invalid link regex")
        })
    }
}

impl InlinePattern for Link {
    fn name(&self) -> &'static str {
        "link"
    }

    fn find(&self, s: &str) -> Option<InlineMatch> {
        let caps = Self::regex().captures(s)?;
        let full = caps.get(0)?;
        let text = caps.get(1)?;
        let target = caps.get(2)?;
        Some(InlineMatch {
            full: Span {
                start: full.start(),
                end: full.end(),
            },
            node: InlineNode::Link {
                text: text.as_str().to_string(),
                href: sanitize_href(target.as_str()),
            },
        })
    }
}
