//! BallyBet (Kambi) sport-hub listing.
//!
//! Games are `li` items with two participant names (away first) plus two
//! bet-offer blocks. Prices are only exposed through the buttons'
//! `aria-label`, e.g.
//! `"Run Line - New York Yankees @ Boston Red Sox - Yankees -1.5 at +135"`.

use super::dom::{Document, Node};
use super::normalize::{parse_american_price, parse_signed_decimal};
use super::types::*;
use super::BookExtractor;

const EVENT: &str = "li.KambiBC-sandwich-filter__event-list-item";
const PARTICIPANT: &str = "div.KambiBC-event-participants__name-participant-name";
const MONEYLINE_OFFER: &str = "div.KambiBC-bet-offer--onecrosstwo";
const HANDICAP_OFFER: &str = "div.KambiBC-bet-offer--handicap";
const BUTTON: &str = "button";
const LABEL: &str = "aria-label";

const AWAY_MARKER: &str = "@ ";
const PRICE_DELIMITER: &str = " at ";
const SEGMENT_DELIMITER: &str = " - ";
const SPREAD_MARKET: &str = "Run Line";

pub struct BallyBetExtractor;

impl BookExtractor for BallyBetExtractor {
    fn sportsbook(&self) -> Sportsbook {
        Sportsbook::BallyBet
    }

    fn extract(&self, html: &str) -> Vec<OddsRecord> {
        let doc = Document::parse(html);
        extract_lines(&doc.root())
    }
}

/// Spread leg decoded from a handicap button label.
#[derive(Debug, PartialEq)]
struct SpreadLeg {
    team: String,
    spread: f64,
    price: i64,
}

/// Emit an (away, home) pair for every well-formed game item.
pub fn extract_lines<N: Node>(root: &N) -> Vec<OddsRecord> {
    let mut records = Vec::new();

    for event in root.select_all(EVENT) {
        let participants = event.select_all(PARTICIPANT);
        let [away_node, home_node] = participants.as_slice() else {
            tracing::debug!(participants = participants.len(), "BallyBet event without exactly two teams, skipping");
            continue;
        };
        let (Some(away_team), Some(home_team)) = (participant_team(away_node), participant_team(home_node)) else {
            tracing::debug!("BallyBet event with a blank participant name, skipping");
            continue;
        };

        let mut away = OddsRecord::empty(Sportsbook::BallyBet, away_team);
        let mut home = OddsRecord::empty(Sportsbook::BallyBet, home_team);

        let moneyline_buttons = event
            .select_one(MONEYLINE_OFFER)
            .map(|offer| offer.select_all(BUTTON))
            .unwrap_or_default();
        if let [away_btn, home_btn] = moneyline_buttons.as_slice() {
            away.moneyline = price_from_label(away_btn.attribute(LABEL).as_deref());
            home.moneyline = price_from_label(home_btn.attribute(LABEL).as_deref());
        }

        let spread_buttons = event
            .select_one(HANDICAP_OFFER)
            .map(|offer| offer.select_all(BUTTON))
            .unwrap_or_default();
        for button in &spread_buttons {
            let Some(leg) = button.attribute(LABEL).as_deref().and_then(parse_spread_label) else {
                continue;
            };
            let side = if leg.team == away.team_name {
                &mut away
            } else if leg.team == home.team_name {
                &mut home
            } else {
                tracing::debug!(team = %leg.team, "BallyBet spread label matches neither side");
                continue;
            };
            side.spread = Some(leg.spread);
            side.spread_price = Some(leg.price);
        }

        records.push(away);
        records.push(home);
    }

    records
}

/// Final token of a participant name, with the away marker removed.
fn participant_team<N: Node>(participant: &N) -> Option<String> {
    let name = participant.inner_text();
    let name = name.strip_prefix(AWAY_MARKER).unwrap_or(&name);
    team_token(name).map(str::to_string)
}

/// Price after the last `" at "` of a button label.
fn price_from_label(label: Option<&str>) -> Option<i64> {
    let (_, price) = label?.rsplit_once(PRICE_DELIMITER)?;
    parse_american_price(Some(price))
}

/// Decode `"<market> - <matchup> - <Team tokens> <spread> at <price>"`.
/// Labels for other markets, with fewer than three segments, or whose spread
/// or price does not parse yield `None`.
fn parse_spread_label(label: &str) -> Option<SpreadLeg> {
    if !label.contains(SPREAD_MARKET) {
        return None;
    }
    let segment = label.split(SEGMENT_DELIMITER).nth(2)?;
    let (team_and_spread, price) = segment.rsplit_once(PRICE_DELIMITER)?;

    let mut tokens: Vec<&str> = team_and_spread.split_whitespace().collect();
    let spread = tokens.pop()?;

    Some(SpreadLeg {
        spread: parse_signed_decimal(Some(spread))?,
        price: parse_american_price(Some(price))?,
        team: tokens.join(" "),
    })
}
