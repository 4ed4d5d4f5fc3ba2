//! Queries over a session's aggregated lines.

use crate::feed::types::{OddsRecord, Sportsbook};

/// Outcome of a best-moneyline lookup. The two misses are kept apart so the
/// caller can tell "unknown team" from "team listed, no moneyline posted".
#[derive(Debug, Clone, PartialEq)]
pub enum MoneylineLookup<'a> {
    Best(&'a OddsRecord),
    TeamNotFound,
    NoMoneyline,
}

impl<'a> MoneylineLookup<'a> {
    pub fn best(&self) -> Option<&'a OddsRecord> {
        match self {
            MoneylineLookup::Best(r) => Some(*r),
            _ => None,
        }
    }
}

fn same_team(record: &OddsRecord, team: &str) -> bool {
    record.team_name.to_lowercase() == team.trim().to_lowercase()
}

/// Most favourable moneyline for `team` across every book.
///
/// American odds are ordered the same way as the bettor's payout: +130 beats
/// -110, and -110 beats -150. A plain numeric maximum is therefore the best
/// price regardless of sign. Ties keep the first record seen.
pub fn best_moneyline<'a>(records: &'a [OddsRecord], team: &str) -> MoneylineLookup<'a> {
    let mut seen_team = false;
    let mut best: Option<(&OddsRecord, i64)> = None;

    for record in records.iter().filter(|r| same_team(r, team)) {
        seen_team = true;
        let Some(ml) = record.moneyline else { continue };
        if best.map_or(true, |(_, current)| ml > current) {
            best = Some((record, ml));
        }
    }

    match (best, seen_team) {
        (Some((record, _)), _) => MoneylineLookup::Best(record),
        (None, true) => MoneylineLookup::NoMoneyline,
        (None, false) => MoneylineLookup::TeamNotFound,
    }
}

/// First line for `team` from each book, in the order books appear.
pub fn lines_for_team<'a>(records: &'a [OddsRecord], team: &str) -> Vec<&'a OddsRecord> {
    let mut books: Vec<Sportsbook> = Vec::new();
    let mut out = Vec::new();
    for record in records.iter().filter(|r| same_team(r, team)) {
        if !books.contains(&record.sportsbook) {
            books.push(record.sportsbook);
            out.push(record);
        }
    }
    out
}
