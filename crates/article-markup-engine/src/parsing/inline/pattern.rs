use crate::parsing::span::Span;

use super::types::InlineNode;

/// A successful match of one inline pattern against a line suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Span of the whole token, delimiters included, relative to the
    /// searched string.
    pub full: Span,
    /// The node the token resolves to.
    pub node: InlineNode,
}

/// A candidate inline pattern taking part in the earliest-match selection.
///
/// Implementations report the leftmost occurrence of their token in `s`.
/// Adding a new inline construct means adding one implementation to
/// [`PATTERNS`](super::parser::PATTERNS); the selection step is unchanged.
pub trait InlinePattern: Sync {
    /// Short name used in log records.
    fn name(&self) -> &'static str;

    /// Finds the leftmost occurrence of this pattern in `s`.
    fn find(&self, s: &str) -> Option<InlineMatch>;
}

/// Earliest-match selection over a fixed pattern list, remembering each
/// pattern's last answer between steps.
///
/// A cached match that starts at or after the resume position is still that
/// pattern's leftmost match in the new suffix, and a pattern that found
/// nothing will find nothing later in the line, so each pattern rescans only
/// when its cached match was overtaken. All spans are relative to the whole
/// line.
pub struct MatchCache<'p> {
    patterns: &'p [&'p dyn InlinePattern],
    slots: Vec<Slot>,
}

enum Slot {
    Unsearched,
    Exhausted,
    Found(InlineMatch),
}

impl<'p> MatchCache<'p> {
    pub fn new(patterns: &'p [&'p dyn InlinePattern]) -> Self {
        Self {
            patterns,
            slots: patterns.iter().map(|_| Slot::Unsearched).collect(),
        }
    }

    /// Returns the match with the strictly smallest start in `line[pos..]`.
    ///
    /// Ties cannot occur between patterns with disjoint opening delimiters; if
    /// one ever does, the pattern listed first wins.
    pub fn next_match(&mut self, line: &str, pos: usize) -> Option<InlineMatch> {
        for (slot, pattern) in self.slots.iter_mut().zip(self.patterns) {
            let stale = match slot {
                Slot::Unsearched => true,
                Slot::Exhausted => false,
                Slot::Found(m) => m.full.start < pos,
            };
            if stale {
                *slot = match pattern.find(&line[pos..]) {
                    Some(m) => Slot::Found(InlineMatch {
                        full: m.full.shifted(pos),
                        node: m.node,
                    }),
                    None => Slot::Exhausted,
                };
            }
        }

        let winner = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Slot::Found(m) => Some((i, m.full.start)),
                _ => None,
            })
            .min_by_key(|&(_, start)| start)
            .map(|(i, _)| i)?;

        match std::mem::replace(&mut self.slots[winner], Slot::Unsearched) {
            Slot::Found(m) => {
                log::trace!(
                    "{} token at {}..{}",
                    self.patterns[winner].name(),
                    m.full.start,
                    m.full.end
                );
                Some(m)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        at: usize,
        label: &'static str,
    }

    impl InlinePattern for Fixed {
        fn name(&self) -> &'static str {
            self.label
        }

        fn find(&self, s: &str) -> Option<InlineMatch> {
            (self.at < s.len()).then(|| InlineMatch {
                full: Span {
                    start: self.at,
                    end: self.at + 1,
                },
                node: InlineNode::Text(self.label.to_string()),
            })
        }
    }

    struct Never {
        calls: AtomicUsize,
    }

    impl InlinePattern for Never {
        fn name(&self) -> &'static str {
            "never"
        }

        fn find(&self, _s: &str) -> Option<InlineMatch> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    fn earliest(patterns: &[&dyn InlinePattern], s: &str) -> Option<InlineMatch> {
        MatchCache::new(patterns).next_match(s, 0)
    }

    #[test]
    fn smallest_start_wins() {
        let late = Fixed { at: 5, label: "late" };
        let early = Fixed { at: 2, label: "early" };
        let m = earliest(&[&late, &early], "0123456789").unwrap();
        assert_eq!(m.node, InlineNode::Text("early".into()));
    }

    #[test]
    fn tie_goes_to_first_listed() {
        let a = Fixed { at: 3, label: "a" };
        let b = Fixed { at: 3, label: "b" };
        let m = earliest(&[&a, &b], "0123456789").unwrap();
        assert_eq!(m.node, InlineNode::Text("a".into()));
    }

    #[test]
    fn no_candidates_no_match() {
        let far = Fixed { at: 50, label: "far" };
        assert!(earliest(&[&far], "short").is_none());
        assert!(earliest(&[], "anything").is_none());
    }

    #[test]
    fn spans_are_relative_to_whole_line() {
        let p = Fixed { at: 1, label: "p" };
        let patterns: [&dyn InlinePattern; 1] = [&p];
        let mut cache = MatchCache::new(&patterns);
        let m = cache.next_match("0123456789", 4).unwrap();
        assert_eq!(m.full, Span { start: 5, end: 6 });
    }

    #[test]
    fn exhausted_pattern_is_searched_once_per_line() {
        let never = Never {
            calls: AtomicUsize::new(0),
        };
        let every = Fixed { at: 0, label: "x" };
        let patterns: [&dyn InlinePattern; 2] = [&never, &every];
        let mut cache = MatchCache::new(&patterns);
        let line = "abcdefgh";
        let mut pos = 0;
        let mut found = 0;
        while let Some(m) = cache.next_match(line, pos) {
            pos = m.full.end;
            found += 1;
        }
        assert_eq!(found, line.len());
        assert_eq!(never.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn overtaken_match_is_searched_again() {
        let late = Fixed { at: 3, label: "late" };
        let early = Fixed { at: 0, label: "early" };
        let patterns: [&dyn InlinePattern; 2] = [&late, &early];
        let mut cache = MatchCache::new(&patterns);
        // "late" cached at 3, "early" wins at 0..1
        assert_eq!(cache.next_match("0123456789", 0).unwrap().full.start, 0);
        // resume at 5: "late" at 3 is stale, "early" finds 5
        let m = cache.next_match("0123456789", 5).unwrap();
        assert_eq!(m.node, InlineNode::Text("early".into()));
        assert_eq!(m.full.start, 5);
    }
}
