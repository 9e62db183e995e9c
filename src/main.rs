/// FormTable — Form Table Generator
///
/// What it does:
///   1. Fetches the standings table for the configured league
///   2. Decodes the last-6-matches form column and scores it (W=3, D=1)
///   3. Re-sorts the standings on form points, tie-broken on team name
///   4. Writes a mobile-responsive HTML report to disk
///
/// One-shot batch run: one fetch, one output file, no retries.
///
/// Configuration (env / .env):
///   FORMTABLE_LEAGUE  - league display name (default "English Premier League")
///   FORMTABLE_OUTPUT  - output path (default "index.html")

mod leagues;

use anyhow::{Context, Result};
use chrono::Local;
use dotenv::dotenv;
use std::env;
use std::fs;
use table_scraper::TableScraper;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::leagues::{LeagueEntry, TableFormat};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let league_name =
        env::var("FORMTABLE_LEAGUE").unwrap_or_else(|_| "English Premier League".to_string());
    let output_path = env::var("FORMTABLE_OUTPUT").unwrap_or_else(|_| "index.html".to_string());

    let league = leagues::find(&league_name).with_context(|| {
        format!(
            "unknown league {league_name:?}; known leagues: {}",
            leagues::known_names().join(", ")
        )
    })?;

    info!("=== FormTable — {} ===", league.name);
    info!("Source: {}", league.url);
    info!("Output: {output_path}");

    run(league, &output_path).await
}

async fn run(league: &LeagueEntry, output_path: &str) -> Result<()> {
    let scraper = TableScraper::new();
    let table = scraper.fetch_first_table(league.url).await?;
    info!(
        "Scraped standings: {} columns, {} teams",
        table.headers.len(),
        table.rows.len()
    );

    let rows = match league.format {
        TableFormat::New => form_engine::build_form_table(&table)?,
    };
    info!("Built form table: {} teams", rows.len());

    let date_string = Local::now().format("%d-%m-%Y %H:%M:%S").to_string();
    let html = html_report::render_report(&rows, league.name, &date_string);

    fs::write(output_path, html).with_context(|| format!("failed to write {output_path}"))?;
    info!("Wrote form table to {output_path}");

    Ok(())
}
