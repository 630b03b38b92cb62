pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use io::*;
pub use models::Article;
pub use parsing::{
    ParsedDoc,
    blocks::{Block, HeadingLevel},
    inline::{InlineNode, inline_text, parse_inline},
    parse_document,
    plain_text::{extract_plain_text, summarize},
    render_blocks,
    sanitize::sanitize_href,
};
