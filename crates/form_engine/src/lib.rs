/// FormTable — Form Engine
///
/// Turns the scraped standings table into the form table: decodes the
/// verbose recent-results phrases into compact W/D/L/- codes, scores them
/// (win 3, draw 1), and sorts on form points with an alphabetical tie-break
/// on team name.

use anyhow::{bail, Context, Result};
use table_scraper::ScrapedTable;
use tracing::debug;

/// One scraped standings row bound to named fields. The positional
/// scrape-to-struct binding happens exactly once, in [`bind_rows`].
#[derive(Debug, Clone)]
pub struct RawStandingsRow {
    pub position: u32,
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub form_phrase: String,
}

/// Standings row with the verbose phrase replaced by the decoded form.
#[derive(Debug, Clone)]
pub struct FormRow {
    pub team: String,
    pub position: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub form: String,
    pub form_points: u32,
}

// Verbose descriptor → single-letter code, longest match first so the
// site's redundant letter-plus-label encoding wins over the bare letter.
// Bare letters are accepted too, which makes decoding idempotent.
const FORM_TOKENS: &[(&str, char)] = &[
    ("WResult Win", 'W'),
    ("DResult Draw", 'D'),
    ("LResult Loss", 'L'),
    ("No Result", '-'),
    ("W", 'W'),
    ("D", 'D'),
    ("L", 'L'),
    ("-", '-'),
];

/// Decode a verbose form phrase, e.g. "WResult WinNo ResultDResult Draw"
/// → "W-D", oldest match first.
///
/// Unknown text is a hard error rather than silently leaking into the
/// score and colour computation.
pub fn decode_form(phrase: &str) -> Result<String> {
    let mut rest = phrase.trim();
    let mut code = String::new();

    'next: while !rest.is_empty() {
        for (token, letter) in FORM_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                code.push(*letter);
                rest = tail.trim_start();
                continue 'next;
            }
        }
        bail!(
            "unrecognised form descriptor at {:?}",
            rest.chars().take(40).collect::<String>()
        );
    }

    Ok(code)
}

/// Win 3, draw 1, loss and no-result 0.
pub fn form_points(code: &str) -> u32 {
    code.chars()
        .map(|c| match c {
            'W' => 3,
            'D' => 1,
            _ => 0,
        })
        .sum()
}

// Scraped standings shape: Position, Team, P, W, D, L, F, A, GD, Pts, form history
const STANDINGS_COLUMNS: usize = 11;

/// Bind scraped cells to named fields, failing loudly if the page shape
/// has drifted from the expected eleven standings columns.
pub fn bind_rows(table: &ScrapedTable) -> Result<Vec<RawStandingsRow>> {
    if table.headers.len() != STANDINGS_COLUMNS {
        bail!(
            "expected {STANDINGS_COLUMNS} standings columns, got {}: {:?}",
            table.headers.len(),
            table.headers
        );
    }
    let form_header = &table.headers[STANDINGS_COLUMNS - 1];
    if !form_header.starts_with("Form") {
        bail!("last standings column is {form_header:?}, expected the form history");
    }

    let mut rows = Vec::with_capacity(table.rows.len());
    for cells in &table.rows {
        if cells.len() != STANDINGS_COLUMNS {
            bail!(
                "standings row has {} cells, expected {STANDINGS_COLUMNS}: {cells:?}",
                cells.len()
            );
        }
        let team = cells[1].clone();
        rows.push(RawStandingsRow {
            position: number(&cells[0], "position", &team)?,
            played: number(&cells[2], "played", &team)?,
            won: number(&cells[3], "won", &team)?,
            drawn: number(&cells[4], "drawn", &team)?,
            lost: number(&cells[5], "lost", &team)?,
            goals_for: number(&cells[6], "goals for", &team)?,
            goals_against: number(&cells[7], "goals against", &team)?,
            goal_difference: number(&cells[8], "goal difference", &team)?,
            points: number(&cells[9], "points", &team)?,
            form_phrase: cells[10].clone(),
            team,
        });
    }
    Ok(rows)
}

fn number<T: std::str::FromStr>(cell: &str, column: &str, team: &str) -> Result<T> {
    cell.trim()
        .parse::<T>()
        .map_err(|_| anyhow::anyhow!("bad {column} value {cell:?} for {team}"))
}

/// Scraped standings → form table, sorted on form points descending with
/// equal-points teams ordered alphabetically.
pub fn build_form_table(table: &ScrapedTable) -> Result<Vec<FormRow>> {
    let raw = bind_rows(table)?;

    let mut rows = Vec::with_capacity(raw.len());
    for r in raw {
        let form = decode_form(&r.form_phrase)
            .with_context(|| format!("bad form history for {}", r.team))?;
        let form_points = form_points(&form);
        debug!("{}: {} -> {} pts", r.team, form, form_points);
        rows.push(FormRow {
            team: r.team,
            position: r.position,
            played: r.played,
            won: r.won,
            drawn: r.drawn,
            lost: r.lost,
            goals_for: r.goals_for,
            goals_against: r.goals_against,
            goal_difference: r.goal_difference,
            points: r.points,
            form,
            form_points,
        });
    }

    rows.sort_by(|a, b| {
        b.form_points
            .cmp(&a.form_points)
            .then_with(|| a.team.cmp(&b.team))
    });

    Ok(rows)
}
