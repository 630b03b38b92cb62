use anyhow::{Context, Result, bail};
use article_markup_config::{Config, DEFAULT_SUMMARY_MAX_LEN};
use article_markup_engine::{Article, io, parse_document, summarize};
use clap::Parser;
use relative_path::RelativePathBuf;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

mod cli;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Only commands that fall back to configured values read the config file.
    match cli.command {
        Commands::Render { file, format } => {
            let raw = read_input(file.as_deref())?;
            let doc = parse_document(&raw);
            log::debug!("rendered {} blocks", doc.blocks.len());
            match format {
                OutputFormat::Debug => println!("{:#?}", doc.blocks),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&doc.blocks)?),
            }
        }
        Commands::Summary { file, max_len } => {
            let config = match max_len {
                Some(_) => None,
                None => load_config(cli.config.as_deref())?,
            };
            let raw = read_input(file.as_deref())?;
            println!("{}", summarize(&raw, summary_limit(max_len, config.as_ref())));
        }
        Commands::Scan { dir } => {
            let config = load_config(cli.config.as_deref())?;
            let root = match (dir, config.as_ref()) {
                (Some(dir), _) => dir,
                (None, Some(config)) => config.articles_path.clone(),
                (None, None) => bail!(
                    "No articles directory given and no config file at {}",
                    Config::config_path().display()
                ),
            };
            scan(&root, summary_limit(None, config.as_ref()))?;
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    let config_path = explicit.map_or_else(Config::config_path, Path::to_path_buf);
    log::debug!("Config path: {}", config_path.display());

    let config = Config::load_from_path(&config_path)?;
    if explicit.is_some() && config.is_none() {
        bail!("Config file not found: {}", config_path.display());
    }
    Ok(config)
}

/// `--max-len` wins over the config; 0 from either source means unlimited.
fn summary_limit(max_len: Option<usize>, config: Option<&Config>) -> Option<usize> {
    let limit = max_len
        .or_else(|| config.map(|c| c.summary_max_len))
        .unwrap_or(DEFAULT_SUMMARY_MAX_LEN);
    (limit > 0).then_some(limit)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            log::info!("Reading {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn scan(root: &Path, limit: Option<usize>) -> Result<()> {
    io::validate_articles_dir(root)
        .with_context(|| format!("Cannot scan {}", root.display()))?;

    for path in io::scan_articles(root)? {
        let relative = relative_to(&path, root)?;
        let article = Article::load(&relative, root)?;
        println!("{}\t{}", article.slug(), article.summary(limit));
    }
    Ok(())
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf> {
    let stripped: PathBuf = path
        .strip_prefix(root)
        .with_context(|| format!("{} is outside {}", path.display(), root.display()))?
        .to_path_buf();
    RelativePathBuf::from_path(&stripped)
        .with_context(|| format!("Not a relative path: {}", stripped.display()))
}
