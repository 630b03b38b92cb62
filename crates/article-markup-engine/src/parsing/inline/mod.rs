//! # Inline Resolver
//!
//! Resolves one line of text into `Text`, `Bold` and `Link` nodes.
//!
//! ## Architecture
//!
//! Each inline construct is a kind (see `kinds`) that implements
//! [`InlinePattern`] and reports its leftmost match. The parser asks every
//! pattern for its match in the unconsumed suffix and consumes whichever
//! starts first, so precedence comes from position rather than from a grammar.
//! Answers that are still valid after a step are reused, not rescanned.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Bold, Link)
//! - **`kinds`**: `Bold` and `Link`, owning their delimiters and regexes
//! - **`pattern`**: `InlinePattern` trait and `MatchCache`, the min-start selection step
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Non-nesting
//!
//! `**[a](/b)**` is a single Bold whose text still contains the link syntax.
//! Scanning always resumes after the consumed token.

pub mod kinds;
pub mod parser;
pub mod pattern;
pub mod types;

pub use parser::{PATTERNS, parse_inline};
pub use pattern::{InlineMatch, InlinePattern, MatchCache};
pub use types::{InlineNode, inline_text};
