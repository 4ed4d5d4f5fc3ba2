//! DraftKings league page ("parlay card" tables).
//!
//! Each `.parlay-card-10-a` block holds a table; each `tbody tr` is one team
//! in one game, with four `.sportsbook-table__column-row` cells:
//! name, spread, total, moneyline.

use super::dom::{Document, Node};
use super::normalize::{parse_american_price, parse_signed_decimal};
use super::types::*;
use super::BookExtractor;

const CARD: &str = ".parlay-card-10-a";
const ROW: &str = "tbody tr";
const COLUMN: &str = ".sportsbook-table__column-row";
const TEAM_NAME: &str = ".event-cell__name-text";
const SPREAD_LINE: &str = ".sportsbook-outcome-cell__line";
const OUTCOME_PRICE: &str = ".sportsbook-outcome-cell__element span";

pub struct DraftKingsExtractor;

impl BookExtractor for DraftKingsExtractor {
    fn sportsbook(&self) -> Sportsbook {
        Sportsbook::DraftKings
    }

    fn extract(&self, html: &str) -> Vec<OddsRecord> {
        let doc = Document::parse(html);
        extract_lines(&doc.root())
    }
}

/// Walk every parlay card and emit one record per team row.
/// Public for unit testing with fixtures.
pub fn extract_lines<N: Node>(root: &N) -> Vec<OddsRecord> {
    let mut records = Vec::new();

    for card in root.select_all(CARD) {
        for row in card.select_all(ROW) {
            if let Some(record) = parse_row(&row) {
                records.push(record);
            }
        }
    }

    records
}

fn parse_row<N: Node>(row: &N) -> Option<OddsRecord> {
    let columns = row.select_all(COLUMN);
    let [name_col, spread_col, _total_col, moneyline_col, ..] = columns.as_slice() else {
        tracing::debug!(columns = columns.len(), "DraftKings row has fewer than 4 columns, skipping");
        return None;
    };

    // Header and separator rows have no name cell.
    let display_name = name_col.text_of(TEAM_NAME)?;
    let team = team_token(&display_name)?;

    let spread = parse_signed_decimal(spread_col.text_of(SPREAD_LINE).as_deref());
    let spread_price = parse_american_price(spread_col.text_of(OUTCOME_PRICE).as_deref());
    let moneyline = parse_american_price(moneyline_col.text_of(OUTCOME_PRICE).as_deref());

    Some(OddsRecord::new(
        Sportsbook::DraftKings,
        team,
        spread,
        spread_price,
        moneyline,
    ))
}
