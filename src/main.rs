//! Postlist command-line host.
//!
//! Mounts the list engine over a JSON content file, an address-bar query
//! string and a file-backed storage slot, applies the requested mutations and
//! prints the resulting page. Because the slot persists between runs, the CLI
//! behaves like a returning reader: a run without `--url` picks up where the
//! previous one left off.
//!
//! # Usage
//!
//! ```bash
//! # Open a shared link
//! postlist --content posts.json --url '?tags=react,css&page=2'
//!
//! # Search, then select a tag
//! postlist --content posts.json --query 'hoks' --toggle-tag react
//!
//! # Clear everything, machine-readable output
//! postlist --content posts.json --reset --json
//! ```
//!
//! # Mutation Order
//!
//! `--reset`, then `--query`, then each `--toggle-tag`, then `--page`,
//! exactly as a user clicking through the page would.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use postlist::infrastructure::{default_slot_path, expand_tilde};
use postlist::location::{Location, MemoryLocation};
use postlist::observability::init_tracing;
use postlist::storage::JsonFileSlot;
use postlist::ui::{render, TextStyle};
use postlist::{mount, parse_collection, Config, PostlistError};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, PostlistError>;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "postlist")]
#[command(about = "Browse a post collection with shareable, persistent list state", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON array of content records
    #[arg(short = 'c', long = "content", value_name = "FILE")]
    content: String,

    /// TOML configuration file
    #[arg(long = "config", value_name = "FILE")]
    config: Option<String>,

    /// Address-bar query string to mount with (e.g. '?q=docker&page=2')
    #[arg(short = 'u', long = "url", value_name = "QUERY", default_value = "")]
    url: String,

    /// Storage slot file (defaults to the platform data directory)
    #[arg(long = "slot", value_name = "FILE")]
    slot: Option<String>,

    /// Clear query, tags and page
    #[arg(long = "reset")]
    reset: bool,

    /// Set the search query
    #[arg(short = 'q', long = "query", value_name = "TEXT")]
    query: Option<String>,

    /// Toggle a tag (repeatable)
    #[arg(short = 't', long = "toggle-tag", value_name = "ID")]
    toggle_tags: Vec<String>,

    /// Go to a page
    #[arg(short = 'p', long = "page", value_name = "N")]
    page: Option<u32>,

    /// Print the state and view as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(&expand_tilde(path))?,
        None => Config::default(),
    };
    init_tracing(&config);

    let content_path = expand_tilde(&cli.content);
    let json = std::fs::read_to_string(&content_path)
        .map_err(|e| PostlistError::Content(format!("cannot read {}: {e}", content_path.display())))?;
    let collection = parse_collection(&json, config.content_order)?;
    tracing::info!(items = collection.len(), path = ?content_path, "content loaded");

    let slot_path: PathBuf = cli.slot.as_deref().map_or_else(default_slot_path, expand_tilde);
    let slot = JsonFileSlot::open(slot_path)?;

    let mut list = mount(collection, MemoryLocation::new(&cli.url), slot, &config);

    if cli.reset {
        list.reset();
    }
    if let Some(query) = &cli.query {
        list.set_query(query.clone());
    }
    for tag in &cli.toggle_tags {
        if !list.toggle_tag(tag) {
            tracing::warn!(tag = %tag, "unknown tag, ignored");
        }
    }
    if let Some(page) = cli.page {
        list.set_page(page);
    }

    let view = list.view();
    let query = list.location().query();

    if cli.json {
        let output = serde_json::json!({
            "url": if query.is_empty() { String::new() } else { format!("?{query}") },
            "state": list.state(),
            "view": view,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let style = if std::io::stdout().is_terminal() {
            TextStyle::Ansi
        } else {
            TextStyle::Plain
        };
        print!("{}", render(&view, style));
        if !query.is_empty() {
            println!("\n?{query}");
        }
    }

    Ok(())
}
