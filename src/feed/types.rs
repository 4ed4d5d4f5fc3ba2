use serde::Serialize;
use std::fmt;

/// The sportsbooks we know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sportsbook {
    DraftKings,
    BallyBet,
    BetMGM,
}

impl Sportsbook {
    /// Order the session aggregates books in.
    pub const ALL: [Sportsbook; 3] = [Sportsbook::BetMGM, Sportsbook::BallyBet, Sportsbook::DraftKings];

    pub fn name(&self) -> &'static str {
        match self {
            Sportsbook::DraftKings => "DraftKings",
            Sportsbook::BallyBet => "BallyBet",
            Sportsbook::BetMGM => "BetMGM",
        }
    }

    /// File stem used by the page store.
    pub fn key(&self) -> &'static str {
        match self {
            Sportsbook::DraftKings => "draftkings",
            Sportsbook::BallyBet => "ballybet",
            Sportsbook::BetMGM => "betmgm",
        }
    }
}

impl fmt::Display for Sportsbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Leagues offered in the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    Nfl,
    Mlb,
    Nba,
    Ncaaf,
}

impl League {
    pub const ALL: [League; 4] = [League::Nfl, League::Mlb, League::Nba, League::Ncaaf];

    /// 1-based menu number -> league.
    pub fn from_menu_choice(choice: u32) -> Option<League> {
        match choice {
            1 => Some(League::Nfl),
            2 => Some(League::Mlb),
            3 => Some(League::Nba),
            4 => Some(League::Ncaaf),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            League::Nfl => "NFL",
            League::Mlb => "MLB",
            League::Nba => "NBA",
            League::Ncaaf => "NCAA Football",
        }
    }
}

/// Normalized line for one team at one book (provider-agnostic).
///
/// Build records with [`OddsRecord::new`] or [`OddsRecord::empty`]; `new`
/// drops zero prices. Code that assigns a price field afterwards must pass it
/// through `normalize::parse_american_price`, which never yields zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsRecord {
    pub sportsbook: Sportsbook,
    pub team_name: String,
    pub spread: Option<f64>,
    pub spread_price: Option<i64>, // American odds
    pub moneyline: Option<i64>,    // American odds
}

impl OddsRecord {
    /// Build a record. A zero price is not a valid American price and is
    /// stored as absent.
    pub fn new(
        sportsbook: Sportsbook,
        team_name: impl Into<String>,
        spread: Option<f64>,
        spread_price: Option<i64>,
        moneyline: Option<i64>,
    ) -> Self {
        Self {
            sportsbook,
            team_name: team_name.into(),
            spread,
            spread_price: spread_price.filter(|p| *p != 0),
            moneyline: moneyline.filter(|p| *p != 0),
        }
    }

    /// A record with only the team filled in.
    pub fn empty(sportsbook: Sportsbook, team_name: impl Into<String>) -> Self {
        Self::new(sportsbook, team_name, None, None, None)
    }
}

/// Final whitespace token of a displayed team name ("Kansas City Chiefs" -> "Chiefs").
///
/// This collapses teams that share a nickname onto one key; callers that
/// match on it inherit that ambiguity.
pub fn team_token(display_name: &str) -> Option<&str> {
    display_name.split_whitespace().next_back()
}
