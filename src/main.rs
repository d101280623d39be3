use crate::app_config::AppConfig;
use crate::patterns::Patterns;
use reqwest::Client;
use std::path::Path;
use tracing::info;

mod app_config;
mod domain;
mod extensions;
mod patterns;
mod prtg;
mod reconciler;
mod report;
mod snow;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let patterns = Patterns::compile(config.regex())?;
    let client = Client::new();

    let prtg_clovers = prtg::extractor::fetch_clovers(&client, &config, &patterns).await?;
    info!("✅  Extracted {} Clovers from PRTG", prtg_clovers.len());

    let mismatches = reconciler::find_mismatches(&client, &config, &patterns, &prtg_clovers).await?;
    info!("✅  Reconciled against ServiceNow, {} mismatched", mismatches.len());

    report::write_report(&mismatches, Path::new(report::REPORT_FILE_NAME))?;
    info!("✅  Wrote {}", report::REPORT_FILE_NAME);

    Ok(())
}
