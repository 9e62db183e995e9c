/// FormTable — League Registry
///
/// Static map of supported leagues to their standings-page URLs.
///
/// Note: the source site historically served two table markups ("legacy"
/// and "new"). Every league now uses the new one, so that is the only
/// variant with a parsing path.

/// Markup variant of the source standings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    New,
}

pub struct LeagueEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub format: TableFormat,
}

pub const LEAGUES: &[LeagueEntry] = &[
    LeagueEntry {
        name: "English Premier League",
        url: "https://www.bbc.co.uk/sport/football/premier-league/table",
        format: TableFormat::New,
    },
    LeagueEntry {
        name: "EFL Championship",
        url: "https://www.bbc.co.uk/sport/football/championship/table",
        format: TableFormat::New,
    },
    LeagueEntry {
        name: "EFL League 1",
        url: "https://www.bbc.co.uk/sport/football/league-one/table",
        format: TableFormat::New,
    },
    LeagueEntry {
        name: "EFL League 2",
        url: "https://www.bbc.co.uk/sport/football/league-two/table",
        format: TableFormat::New,
    },
    LeagueEntry {
        name: "Spanish La Liga",
        url: "https://www.bbc.co.uk/sport/football/spanish-la-liga/table",
        format: TableFormat::New,
    },
    LeagueEntry {
        name: "Italian Serie A",
        url: "https://www.bbc.co.uk/sport/football/italian-serie-a/table",
        format: TableFormat::New,
    },
    LeagueEntry {
        name: "German Bundesliga",
        url: "https://www.bbc.co.uk/sport/football/german-bundesliga/table",
        format: TableFormat::New,
    },
];

pub fn find(name: &str) -> Option<&'static LeagueEntry> {
    LEAGUES.iter().find(|league| league.name == name)
}

pub fn known_names() -> Vec<&'static str> {
    LEAGUES.iter().map(|league| league.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_by_exact_display_name() {
        let league = find("English Premier League").unwrap();
        assert!(league.url.ends_with("/premier-league/table"));
        assert_eq!(league.format, TableFormat::New);

        assert!(find("premier league").is_none());
    }

    #[test]
    fn every_entry_points_at_a_table_page() {
        for league in LEAGUES {
            assert!(league.url.starts_with("https://"), "{}", league.name);
            assert!(league.url.ends_with("/table"), "{}", league.name);
        }
    }
}
