use crate::parsing::inline::parse_inline;

use super::{
    classify::LineClass,
    list_run::ListRun,
    types::Block,
};

/// Phase 2 of block assembly: turns classified lines into [`Block`]s.
///
/// The only state carried between lines is the pending list run. Every
/// non-list line closes it, so list items never merge across other blocks.
pub struct BlockBuilder {
    list: ListRun,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list: ListRun::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if let LineClass::ListItem(item) = c {
            self.list.push(item);
            return;
        }

        self.flush_list();

        match *c {
            LineClass::Blank | LineClass::ListItem(_) => {}
            LineClass::Heading { level, text } => self.out.push(Block::Heading {
                level,
                inline: parse_inline(text),
            }),
            LineClass::RawLine(text) => self.out.push(Block::RawLine {
                text: text.to_string(),
            }),
            LineClass::Paragraph(text) => self.out.push(Block::Paragraph {
                inline: parse_inline(text),
            }),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn flush_list(&mut self) {
        let Some(items) = self.list.flush() else {
            return;
        };
        log::trace!("closing list with {} items", items.len());
        self.out.push(Block::List {
            items: items.iter().map(|item| parse_inline(item)).collect(),
        });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
