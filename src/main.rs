mod config;
mod core;
mod models;
mod services;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::config::Settings;
use crate::core::Matcher;
use crate::models::ScoringWeights;

/// Batch property match recommender
///
/// Reads a users CSV and a properties CSV, scores the full cross product,
/// and writes each user's top-K recommendations with explanations.
#[derive(Debug, Parser)]
#[command(name = "homematch", version, about)]
struct Cli {
    /// Path to the users CSV (overrides config)
    #[arg(long)]
    users: Option<PathBuf>,

    /// Path to the properties CSV (overrides config)
    #[arg(long)]
    properties: Option<PathBuf>,

    /// Path to the output CSV (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recommendations per user (overrides config)
    #[arg(long)]
    top_k: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Settings::load().context("Failed to load configuration")?,
    };

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting homematch recommendation run...");

    let users_path = cli
        .users
        .unwrap_or_else(|| PathBuf::from(&settings.data.users_path));
    let properties_path = cli
        .properties
        .unwrap_or_else(|| PathBuf::from(&settings.data.properties_path));
    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.data.output_path));
    let top_k = cli.top_k.unwrap_or(settings.matching.top_k);

    // Initialize matcher with configured weights
    let weights: ScoringWeights = settings.scoring.weights.into();
    let matcher = Matcher::new(weights).with_min_score(settings.matching.min_score);

    info!("Matcher initialized with weights: {:?}", matcher.weights());

    // Load datasets
    let users = services::load_users(&users_path)
        .with_context(|| format!("Failed to load users from {}", users_path.display()))?;
    let properties = services::load_properties(&properties_path)
        .with_context(|| format!("Failed to load properties from {}", properties_path.display()))?;

    // Score, rank, explain
    let result = matcher.rank_all(&users, &properties, top_k);

    info!(
        "Scored {} user-property pairs, kept {} recommendations (top {} per user)",
        result.total_pairs,
        result.matches.len(),
        top_k
    );

    // Write output table
    services::write_matches(&output_path, &result.matches)
        .with_context(|| format!("Failed to write output to {}", output_path.display()))?;

    info!("Done. Output written to {}", output_path.display());

    Ok(())
}
