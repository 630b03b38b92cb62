use super::{
    kinds::{Heading, ListItem, RawLine},
    types::HeadingLevel,
};

/// Classification of a single line, borrowing the relevant text from it.
///
/// This is phase 1 of block assembly: each line is classified on its own,
/// without reference to surrounding lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// `## ` / `### ` line; `text` follows the prefix.
    Heading { level: HeadingLevel, text: &'a str },
    /// `- ` line; the item text follows the marker.
    ListItem(&'a str),
    /// `|` line; the full trimmed line.
    RawLine(&'a str),
    /// Anything else; the full trimmed line.
    Paragraph(&'a str),
}

/// Classifies individual lines for block assembly.
pub struct ArticleLineClassifier;

impl ArticleLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Classification uses the trimmed line. Text captured after a prefix
    /// keeps its internal spacing.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::strip(trimmed) {
            return LineClass::Heading { level, text };
        }
        if let Some(item) = ListItem::strip(trimmed) {
            return LineClass::ListItem(item);
        }
        if RawLine::matches(trimmed) {
            return LineClass::RawLine(trimmed);
        }
        LineClass::Paragraph(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(line: &str) -> LineClass<'_> {
        ArticleLineClassifier.classify(line)
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\r")]
    fn blank_lines(#[case] line: &str) {
        assert_eq!(classify(line), LineClass::Blank);
    }

    #[test]
    fn headings_after_trim() {
        assert_eq!(
            classify("  ## Titlu  "),
            LineClass::Heading {
                level: HeadingLevel::H2,
                text: "Titlu"
            }
        );
        assert_eq!(
            classify("### Sub"),
            LineClass::Heading {
                level: HeadingLevel::H3,
                text: "Sub"
            }
        );
    }

    #[test]
    fn bare_heading_marker_is_paragraph() {
        // "## " trims to "##", which no longer carries the prefix.
        assert_eq!(classify("## "), LineClass::Paragraph("##"));
    }

    #[test]
    fn list_item() {
        assert_eq!(classify("- unu"), LineClass::ListItem("unu"));
        assert_eq!(classify("   - indentat"), LineClass::ListItem("indentat"));
    }

    #[test]
    fn raw_line_keeps_full_trimmed_line() {
        assert_eq!(
            classify(" | a | b |\r"),
            LineClass::RawLine("| a | b |")
        );
    }

    #[test]
    fn paragraph_is_the_default() {
        assert_eq!(classify("Text simplu."), LineClass::Paragraph("Text simplu."));
        assert_eq!(classify("# Unu"), LineClass::Paragraph("# Unu"));
        assert_eq!(classify("-fara spatiu"), LineClass::Paragraph("-fara spatiu"));
    }
}
