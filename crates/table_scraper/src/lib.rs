/// FormTable — Table Scraper
///
/// Fetches a standings page and extracts the first HTML <table> on it into
/// a plain headers + rows structure. One GET per call, no retries.

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// First <table> on a page: header labels plus the text of every data cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub struct TableScraper {
    client: reqwest::Client,
}

impl TableScraper {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                // Imitate a browser; the source site serves a stripped page to unknown agents
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// GET the page and return the first parseable table on it.
    pub async fn fetch_first_table(&self, url: &str) -> Result<ScrapedTable> {
        info!("Fetching standings page: {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("standings request failed")?;

        if !resp.status().is_success() {
            return Err(anyhow::anyhow!("standings HTTP {} for {url}", resp.status()));
        }

        let html = resp.text().await?;
        debug!("Got {} bytes from {url}", html.len());

        parse_first_table(&html).with_context(|| format!("no usable table at {url}"))
    }
}

/// Extract the first <table> from raw HTML. Pure, so it runs offline in tests.
///
/// Header labels come from <thead> cells, falling back to <th> cells in the
/// first row for tables without one. Data rows come from <tbody>, falling
/// back to every row after the first.
pub fn parse_first_table(html: &str) -> Result<ScrapedTable> {
    let table_selector = Selector::parse("table").unwrap();
    let thead_th_selector = Selector::parse("thead th").unwrap();
    let tbody_tr_selector = Selector::parse("tbody tr").unwrap();
    let tr_selector = Selector::parse("tr").unwrap();
    let th_selector = Selector::parse("th").unwrap();
    let td_selector = Selector::parse("td").unwrap();

    let document = Html::parse_document(html);
    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| anyhow::anyhow!("page contains no <table>"))?;

    let mut headers: Vec<String> = table.select(&thead_th_selector).map(cell_text).collect();
    if headers.is_empty() {
        if let Some(first_row) = table.select(&tr_selector).next() {
            headers = first_row.select(&th_selector).map(cell_text).collect();
        }
    }
    if headers.is_empty() {
        return Err(anyhow::anyhow!("table has no header row"));
    }

    let mut rows: Vec<Vec<String>> = table
        .select(&tbody_tr_selector)
        .map(|tr| tr.select(&td_selector).map(cell_text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();
    if rows.is_empty() {
        rows = table
            .select(&tr_selector)
            .skip(1)
            .map(|tr| tr.select(&td_selector).map(cell_text).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();
    }
    if rows.is_empty() {
        return Err(anyhow::anyhow!("table has no data rows"));
    }

    debug!("Parsed table: {} columns x {} rows", headers.len(), rows.len());
    Ok(ScrapedTable { headers, rows })
}

fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
