use serde::{Serialize, Serializer};

use crate::parsing::inline::{InlineNode, inline_text};

/// Heading levels the article dialect supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    /// `## ` headings.
    H2,
    /// `### ` headings.
    H3,
}

impl HeadingLevel {
    /// Returns the numeric level (2 or 3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// A top-level structural unit of a rendered article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A `## ` or `### ` heading line.
    Heading {
        level: HeadingLevel,
        inline: Vec<InlineNode>,
    },
    /// Any other non-empty line.
    Paragraph { inline: Vec<InlineNode> },
    /// A run of consecutive `- ` lines. Always holds at least one item.
    List { items: Vec<Vec<InlineNode>> },
    /// A `|` line passed through verbatim (tables are opaque).
    RawLine { text: String },
}

impl Block {
    /// Returns the visible text of the block with markup removed.
    ///
    /// List items are joined with `\n`; raw lines are returned as-is.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { inline, .. } | Block::Paragraph { inline } => inline_text(inline),
            Block::List { items } => items
                .iter()
                .map(|item| inline_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::RawLine { text } => text.clone(),
        }
    }
}
