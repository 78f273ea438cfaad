//! Main entry point for the Ashbal Karate site.
//!
//! Prints the page model for the selected language as JSON.

use anyhow::{anyhow, Context, Result};
use ashbal_common::{init_logging, Language};
use ashbal_config::{Config, ConfigLoader};
use ashbal_i18n::DocumentRoot;
use ashbal_site::{Page, PageOptions, Site};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ashbal-site", version, about = "Ashbal Karate club site")]
struct Args {
    /// Configuration file (YAML or TOML); defaults to `ASHBAL_CONFIG_PATH`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language to render: en, fr or ar
    #[arg(short, long, value_parser = parse_language)]
    lang: Option<Language>,

    /// Render every language instead of one
    #[arg(long, conflicts_with = "lang")]
    all: bool,
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| format!("unsupported language '{code}' (expected en, fr or ar)"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args)?;
    init_logging((&config.logging).into()).map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    info!("Starting Ashbal site");

    let site = Site::new(config, args.lang, DocumentRoot::new()).context("Failed to build site")?;

    let output = if args.all {
        let options = PageOptions::current(site.config().site.social_url.clone());
        let pages = Language::ALL
            .into_iter()
            .map(|language| {
                site.provider().set_language(language);
                site.page_with(&options)
            })
            .collect::<Vec<Page>>();
        serde_json::to_string_pretty(&pages)?
    } else {
        serde_json::to_string_pretty(&site.page())?
    };

    println!("{output}");
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };
    Ok(config)
}
