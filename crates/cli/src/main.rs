use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use vendor_model::{is_known_category, VendorRecord};
use vendor_search::{
    blacklist_suggestions, directory_stats, top_rated, DirectoryStats, RankingWeights,
    VendorFilter, VendorRanker, TOP_RATED_LIMIT,
};

#[derive(Parser)]
#[command(name = "vendordir")]
#[command(about = "Filter and rank vendor directory listings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file holding the vendor collection (an array of records)
    #[arg(short, long, global = true, default_value = "vendors.json")]
    input: PathBuf,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and rank listings the way the directory's search page does
    Search(SearchArgs),

    /// The landing page's top-rated listing
    Top(TopArgs),

    /// Moderation view: blacklist suggestions and collection stats
    Audit,
}

#[derive(Args)]
struct SearchArgs {
    /// Exact category label to filter by
    #[arg(short, long)]
    category: Option<String>,

    /// Keyword matched against name, description and address
    #[arg(short, long)]
    keyword: Option<String>,

    /// Maximum number of results to print
    #[arg(short, long)]
    limit: Option<usize>,

    /// JSON file overriding the default ranking weights
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Rank as of this RFC 3339 instant instead of the current time
    #[arg(long, value_name = "TIMESTAMP")]
    as_of: Option<String>,
}

#[derive(Args)]
struct TopArgs {
    /// Number of entries to show
    #[arg(short, long, default_value_t = TOP_RATED_LIMIT)]
    limit: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let vendors = load_vendors(&cli.input)?;
    log::debug!("loaded {} vendor record(s) from {}", vendors.len(), cli.input.display());

    match cli.command {
        Commands::Search(args) => run_search(&vendors, &args, cli.json),
        Commands::Top(args) => run_top(&vendors, args.limit, cli.json),
        Commands::Audit => run_audit(&vendors, cli.json),
    }
}

fn load_vendors(path: &Path) -> Result<Vec<VendorRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read vendor collection {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of vendor records", path.display()))
}

fn run_search(vendors: &[VendorRecord], args: &SearchArgs, json: bool) -> Result<()> {
    if let Some(category) = args.category.as_deref() {
        if !category.is_empty() && !is_known_category(category) {
            log::warn!("category {category:?} is not a known label; nothing will match");
        }
    }

    let weights = match &args.weights {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read weights file {}", path.display()))?;
            RankingWeights::from_json(&raw)
                .with_context(|| format!("invalid weights in {}", path.display()))?
        }
        None => RankingWeights::default(),
    };

    let as_of = match args.as_of.as_deref() {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("--as-of {raw:?} is not an RFC 3339 timestamp"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    // Blacklist exclusion happens here, before the filter/rank core sees
    // the collection.
    let active: Vec<VendorRecord> = vendors.iter().filter(|v| !v.blacklisted).cloned().collect();

    let filter = VendorFilter::new(args.category.as_deref(), args.keyword.as_deref());
    let candidates = filter.apply(&active);

    let ranker = VendorRanker::new(weights);
    let mut ranked = ranker.rank(&candidates, filter.keyword(), as_of);
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else if ranked.is_empty() {
        println!("no vendors match");
    } else {
        let keyword = filter.keyword().unwrap_or("");
        for (pos, vendor) in ranked.iter().enumerate() {
            let score = ranker.score(vendor, keyword, as_of);
            println!("{:>2}. {}  score {:.3}", pos + 1, describe(vendor), score);
        }
    }
    Ok(())
}

fn run_top(vendors: &[VendorRecord], limit: usize, json: bool) -> Result<()> {
    let active: Vec<VendorRecord> = vendors.iter().filter(|v| !v.blacklisted).cloned().collect();
    let top = top_rated(&active, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&top)?);
    } else if top.is_empty() {
        println!("no rated vendors yet");
    } else {
        for (pos, vendor) in top.iter().enumerate() {
            let stars = vendor.rating.unwrap_or(0.0);
            println!("{:>2}. {}  {:.1} stars", pos + 1, describe(vendor), stars);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct AuditReport {
    stats: DirectoryStats,
    suggestions: Vec<VendorRecord>,
}

fn run_audit(vendors: &[VendorRecord], json: bool) -> Result<()> {
    // Audit sees the full collection, blacklisted records included
    let report = AuditReport {
        stats: directory_stats(vendors),
        suggestions: blacklist_suggestions(vendors),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let stats = &report.stats;
        println!(
            "{} vendor(s): {} blacklisted, {} highly rated, {} low rated",
            stats.total, stats.blacklisted, stats.highly_rated, stats.low_rated
        );
        if report.suggestions.is_empty() {
            println!("no blacklist suggestions");
        } else {
            println!("blacklist suggestions:");
            for vendor in &report.suggestions {
                println!(
                    "  {}  {:.1} stars over {} review(s)",
                    describe(vendor),
                    vendor.rating.unwrap_or(0.0),
                    vendor.review_count.unwrap_or(0)
                );
            }
        }
    }
    Ok(())
}

fn describe(vendor: &VendorRecord) -> String {
    let name = vendor.business_name.as_deref().unwrap_or("(unnamed)");
    match vendor.category.as_deref() {
        Some(category) => format!("{name} [{category}] ({})", vendor.id),
        None => format!("{name} ({})", vendor.id),
    }
}
