//! # Block Assembly
//!
//! Two-phase block assembly over the lines of a trimmed article body.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a
//!    `LineClass` (blank, heading, list item, raw line, paragraph)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the pending
//!    list run and emits `Block`s in source order
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `HeadingLevel`
//! - **`kinds`**: block prefixes (`## `, `### `, `- `, `|`) and their matchers
//! - **`classify`**: `ArticleLineClassifier` produces a `LineClass` per line
//! - **`list_run`**: `ListRun` accumulator (`NotInList` / `InList`)
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Consecutive list lines form exactly one `List`; any other line closes it
//! - A `List` block is never empty
//! - Raw lines never go through inline resolution

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod list_run;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{ArticleLineClassifier, LineClass};
pub use list_run::ListRun;
pub use types::{Block, HeadingLevel};
