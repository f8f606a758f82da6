//! Command-line front end for auditing and rebalancing card data.
//!
//! Reports go to stdout; logs go to stderr (filter with `RUST_LOG`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use ccg_balance::{
    audit, AuditConfig, BalanceReporter, CardCatalog, EditList, EditOutcome, Rebalancer,
};

/// Power-budget auditing and rebalancing for collectible cards
#[derive(Parser)]
#[command(name = "ccg-balance")]
#[command(about = "Audit card power by rarity tier and patch card data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score every card and report per-tier statistics and outliers
    Audit(AuditArgs),

    /// Apply before/after edits to the canonical card source
    ///
    /// Not safe to run concurrently against the same source file.
    Rebalance(RebalanceArgs),
}

#[derive(Args)]
struct AuditArgs {
    /// Card catalog (JSON, or TOML by extension)
    #[arg(short, long, value_name = "FILE")]
    catalog: PathBuf,

    /// Audit configuration (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Outlier tolerance as a fraction of the tier mean (overrides config)
    #[arg(short, long, value_name = "FRACTION")]
    tolerance: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Args)]
struct RebalanceArgs {
    /// Canonical card source to patch
    #[arg(short, long, value_name = "FILE")]
    source: PathBuf,

    /// Edit list (JSON, or TOML by extension)
    #[arg(short, long, value_name = "FILE")]
    edits: PathBuf,

    /// Report what would change without writing
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Fixed-width tables
    Text,
    /// Full audit as JSON
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Audit(args) => run_audit(args),
        Command::Rebalance(args) => run_rebalance(args),
    }
}

fn run_audit(args: AuditArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => AuditConfig::load(path)?,
        None => AuditConfig::default(),
    };
    if let Some(tolerance) = args.tolerance {
        config = config.with_tolerance(tolerance);
    }
    config.validate()?;

    let catalog = CardCatalog::load(&args.catalog)?;
    let report = audit(&catalog, &config);

    match args.format {
        OutputFormat::Text => print!("{}", BalanceReporter::render(&report, config.show_profiles)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to encode audit")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn run_rebalance(args: RebalanceArgs) -> Result<()> {
    let list = EditList::load(&args.edits)?;
    let summary = Rebalancer::new()
        .dry_run(args.dry_run)
        .run(&args.source, &list.edits)
        .with_context(|| format!("Rebalance of {} aborted", args.source.display()))?;

    for report in &summary.reports {
        match &report.outcome {
            EditOutcome::Applied => println!("applied  {} {}", report.card, report.field),
            EditOutcome::Skipped(failure) => println!("skipped  {failure}"),
        }
    }
    println!(
        "{} applied, {} skipped{}",
        summary.applied(),
        summary.skipped(),
        if args.dry_run { " (dry run)" } else { "" }
    );
    Ok(())
}
