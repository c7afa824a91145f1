use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardfilter::{Catalog, DisplayItem, FilterEngine, FilterOutcome};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "card-filter")]
#[command(about = "Filter project cards by tag or text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or hide cards according to a search query
    Filter(FilterArgs),

    /// Validate a catalog file and report how many cards it holds
    Check(CheckArgs),
}

#[derive(Args)]
struct FilterArgs {
    /// Catalog file (JSON or TOML)
    #[arg(long)]
    catalog: PathBuf,

    /// Search text; omitted means every card is shown
    #[arg(short, long, env = "CARD_FILTER_QUERY")]
    query: Option<String>,

    /// Output JSON (stdout is reserved for the report)
    #[arg(long)]
    json: bool,

    /// Print only the cards left visible
    #[arg(long)]
    only_visible: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Catalog file (JSON or TOML)
    #[arg(long)]
    catalog: PathBuf,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FilterReport<'a> {
    query: &'a str,
    visible: &'a [bool],
    shown: usize,
    hidden: usize,
    cards: &'a [DisplayItem],
}

#[derive(Serialize)]
struct CheckReport<'a> {
    catalog: &'a Path,
    cards: usize,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Filter(args) => args.json,
        Commands::Check(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Filter(args) => run_filter(args),
        Commands::Check(args) => run_check(args),
    }
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(path).with_context(|| format!("Failed to load catalog {}", path.display()))
}

fn run_filter(args: FilterArgs) -> Result<()> {
    let mut catalog = load_catalog(&args.catalog)?;
    let engine = FilterEngine::new(args.query.as_deref());
    let outcome = engine.apply(&mut catalog.cards);

    log::info!(
        "query {:?}: {} shown, {} hidden",
        outcome.query,
        outcome.shown(),
        outcome.hidden()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_filter_json(&mut out, &outcome, &catalog.cards)?;
    } else {
        write_filter_text(&mut out, &outcome, &catalog.cards, args.only_visible)?;
    }
    out.flush().context("Failed to flush stdout")
}

fn write_filter_json(
    out: &mut impl Write,
    outcome: &FilterOutcome,
    cards: &[DisplayItem],
) -> Result<()> {
    let report = FilterReport {
        query: &outcome.query,
        visible: &outcome.visible,
        shown: outcome.shown(),
        hidden: outcome.hidden(),
        cards,
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

fn write_filter_text(
    out: &mut impl Write,
    outcome: &FilterOutcome,
    cards: &[DisplayItem],
    only_visible: bool,
) -> Result<()> {
    for (idx, (card, visible)) in cards.iter().zip(&outcome.visible).enumerate() {
        if only_visible && !visible {
            continue;
        }
        let state = if *visible { "shown" } else { "hidden" };
        writeln!(out, "{state}\t{idx}\t{}", card.headline())?;
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    if catalog.is_empty() {
        log::warn!("{} holds no cards", args.catalog.display());
    }

    if args.json {
        let report = CheckReport {
            catalog: &args.catalog,
            cards: catalog.len(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!("{}: {} cards", args.catalog.display(), catalog.len());
    }
    Ok(())
}
