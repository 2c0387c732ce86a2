//! Command-line front end for the recommendation pipeline.
//!
//! Reads a shopping question, runs the pipeline against the real Tavily
//! and OpenAI backends, and prints the result as pretty JSON.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopwise::{Analyst, OpenAiModel, ShopWise, ShopWiseConfig, TavilySearcher};

#[derive(Parser)]
#[command(
    name = "shopwise",
    about = "Ask a shopping question, get a ranked recommendation"
)]
struct Cli {
    /// The question, e.g. "best headphones under $500" or "Sony XM5 vs Bose QC Ultra"
    question: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    // Load .env if present (development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = ShopWiseConfig::from_env().context("failed to load configuration")?;
    tracing::info!(model = %config.openai_model, "starting pipeline");

    let searcher = Arc::new(TavilySearcher::new(config.tavily_api_key.expose()));
    let model = OpenAiModel::new(config.openai_api_key.expose(), config.openai_model.clone());
    let pipeline = ShopWise::new(searcher, Analyst::new(Arc::new(model)));

    let result = pipeline.run(&cli.question).await;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
