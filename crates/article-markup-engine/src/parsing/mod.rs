pub mod blocks;
pub mod inline;
pub mod plain_text;
pub mod sanitize;
pub mod snapshot;
pub mod span;

use blocks::{ArticleLineClassifier, Block, BlockBuilder};

/// The rendered form of one article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// Renders a raw article body into its ordered blocks.
///
/// The body is trimmed and split on `\n`; every line is classified and fed to
/// a fresh [`BlockBuilder`]. Nothing is shared between calls.
pub fn parse_document(raw: &str) -> ParsedDoc {
    let classifier = ArticleLineClassifier;
    let mut builder = BlockBuilder::new();

    let body = raw.trim();
    if !body.is_empty() {
        for line in body.split('\n') {
            builder.push(&classifier.classify(line));
        }
    }

    let blocks = builder.finish();
    log::trace!("rendered {} blocks from {} bytes", blocks.len(), raw.len());
    ParsedDoc { blocks }
}

/// Convenience: the block list of [`parse_document`].
pub fn render_blocks(raw: &str) -> Vec<Block> {
    parse_document(raw).blocks
}
