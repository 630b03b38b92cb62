use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "article-markup")]
#[command(author, version)]
#[command(about = "Render article markup into structured blocks or plain-text summaries")]
#[command(after_help = "\
EXAMPLES:

    # Show the blocks of an article
    article-markup render articles/cabluri.md

    # Same, as JSON for a frontend
    article-markup render --format json articles/cabluri.md

    # Summary for a meta description, 155 characters at most
    article-markup summary --max-len 155 articles/cabluri.md

    # Summaries for every article in the configured directory
    article-markup scan

CONFIGURATION:

    ~/.config/article-markup/config.toml

    articles_path = \"~/site/articles\"
    summary_max_len = 160")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an article into blocks
    Render {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Debug)]
        format: OutputFormat,
    },

    /// Print the plain-text summary of an article
    Summary {
        /// Input file (stdin if not provided)
        file: Option<PathBuf>,

        /// Maximum length in characters; 0 disables truncation
        #[arg(long)]
        max_len: Option<usize>,
    },

    /// Print slug and summary for every article in a directory
    Scan {
        /// Articles directory (defaults to the configured articles_path)
        dir: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty Rust debug output
    Debug,
    /// Pretty JSON
    Json,
}
