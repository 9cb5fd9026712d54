//! Command-line front end for the bundled institution directory.
//!
//! Subcommands cover one-shot listing and search, opening a website, linting
//! a catalog file, and an interactive session that re-filters on every line.
//! Logs go to stderr; results go to stdout.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use edufinder::logging::init_logging;
use edufinder::presentation::{
    AppState, CategoryLabels, SystemLinkOpener, open_website, render_categories, render_records,
    run_shell,
};
use edufinder::{CatalogSchema, CatalogSource, Institution, LinkOpenError, Settings, load_catalog};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

#[derive(Parser)]
#[command(
    name = "edufinder",
    version,
    about = "Search the bundled directory of South African universities and colleges"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Read the catalog from this file instead of the bundled copy
    /// (default: $EDUFINDER_CATALOG).
    #[arg(long, value_name = "PATH", global = true)]
    catalog: Option<PathBuf>,

    /// Log level for edufinder events (default: $EDUFINDER_LOG or warn).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// List categories with their record counts.
    Categories,

    /// Print the institutions in one category that match a query.
    Search {
        /// Category key or label.
        #[arg(long, short, default_value = "public_universities")]
        category: String,

        /// Emit matches as a JSON array.
        #[arg(long)]
        json: bool,

        /// Text to look for in name, type, or website. Omit to list everything.
        query: Option<String>,
    },

    /// Open an institution's website.
    Open {
        /// Category key or label.
        #[arg(long, short)]
        category: String,

        /// Institution name (case-insensitive exact match).
        name: String,

        /// Print the website instead of launching a handler.
        #[arg(long)]
        print: bool,
    },

    /// Check the catalog against the loader and the JSON schema.
    Validate {
        /// Validate against this schema instead of the bundled one.
        #[arg(long, value_name = "PATH")]
        schema: Option<PathBuf>,
    },

    /// Interactive search: each input line becomes the new query.
    Shell,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.catalog, cli.log_level);
    init_logging(&settings.log_level)?;
    debug!(?settings, "resolved settings");

    let labels = CategoryLabels::default();
    match cli.command {
        Command::Categories => run_categories(&settings.catalog, &labels),
        Command::Search {
            category,
            json,
            query,
        } => run_search(
            &settings.catalog,
            &labels,
            &category,
            query.as_deref().unwrap_or_default(),
            json,
        ),
        Command::Open {
            category,
            name,
            print,
        } => run_open(&settings.catalog, &labels, &category, &name, print),
        Command::Validate { schema } => run_validate(&settings.catalog, schema),
        Command::Shell => run_interactive(&settings.catalog, &labels),
    }
}

fn run_categories(source: &CatalogSource, labels: &CategoryLabels) -> Result<()> {
    let catalog = load_catalog(source)?;
    let mut output = String::new();
    render_categories(&catalog, labels, &mut output)?;
    print!("{output}");
    Ok(())
}

fn run_search(
    source: &CatalogSource,
    labels: &CategoryLabels,
    category: &str,
    query: &str,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(source)?;
    let key = labels.resolve(category);
    let matches = catalog.search(&key, query);
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }
    let mut output = String::new();
    render_records(&matches, &mut output)?;
    print!("{output}");
    Ok(())
}

fn run_open(
    source: &CatalogSource,
    labels: &CategoryLabels,
    category: &str,
    name: &str,
    print: bool,
) -> Result<()> {
    let catalog = load_catalog(source)?;
    let key = labels.resolve(category);
    let record = find_by_name(catalog.category(&key), name).with_context(|| {
        format!(
            "no institution named '{name}' in {}",
            labels.label_for(&key)
        )
    })?;

    if print {
        let website = record.website().ok_or_else(|| LinkOpenError::NoWebsite {
            name: record.name.clone(),
        })?;
        println!("{website}");
        return Ok(());
    }
    open_website(&SystemLinkOpener, record)?;
    Ok(())
}

fn find_by_name<'a>(records: &'a [Institution], name: &str) -> Option<&'a Institution> {
    let wanted = name.trim().to_lowercase();
    records
        .iter()
        .find(|record| record.name.to_lowercase() == wanted)
}

fn run_validate(source: &CatalogSource, schema_path: Option<PathBuf>) -> Result<()> {
    let schema = match schema_path {
        Some(path) => CatalogSchema::load(&path)?,
        None => CatalogSchema::bundled()?,
    };
    let text = source.read()?;
    schema
        .validate_text(&text)
        .with_context(|| format!("validating {}", source.describe()))?;
    let catalog = load_catalog(source)?;
    println!(
        "ok: {} ({} categories, {} institutions)",
        source.describe(),
        catalog.categories().len(),
        catalog.institution_count()
    );
    Ok(())
}

fn run_interactive(source: &CatalogSource, labels: &CategoryLabels) -> Result<()> {
    let state = AppState::new(labels.first_key());
    let state = match load_catalog(source) {
        Ok(catalog) => state.load_succeeded(Arc::new(catalog)),
        Err(err) => state.load_failed(err.to_string()),
    };
    if let Some(error) = state.error() {
        bail!("cannot start session: {error}");
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("edufinder shell (Ctrl-D to exit)");
    }
    let mut stdout = io::stdout().lock();
    run_shell(state, stdin.lock(), &mut stdout, labels, &SystemLinkOpener)?;
    Ok(())
}
