//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = "**"`
//! - **`Link`**: `OPEN = "["`, `TEXT_CLOSE = "]"`, `TARGET_OPEN = "("`,
//!   `CLOSE = ")"`; applies the link sanitizer to every captured target
//!
//! Each kind's regex is built from its delimiter constants. The parser never
//! hardcodes `**` or `[`; it only asks each kind for its leftmost match.

pub mod bold;
pub mod link;

pub use bold::Bold;
pub use link::Link;
