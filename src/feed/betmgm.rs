//! BetMGM six-pack grid.
//!
//! Each `ms-six-pack-event` widget carries two participants and three
//! `ms-option-group`s in fixed order: spread, total, moneyline. That order is
//! what the page renders today, not a contract; a widget missing groups or
//! options just yields absent fields.

use super::dom::{Document, Node};
use super::normalize::{parse_american_price, parse_signed_decimal};
use super::types::*;
use super::BookExtractor;

const EVENT: &str = "ms-six-pack-event";
const PARTICIPANTS: &str = ".participants-pair-game .participant-wrapper";
const PARTICIPANT_NAME: &str = ".participant";
const OPTION_GROUPS: &str = ".grid-six-pack-wrapper ms-option-group";
const OPTION: &str = "ms-option";
const SPREAD_VALUE: &str = ".option-attribute";
const SPREAD_PRICE: &str = "ms-font-resizer span";
const MONEYLINE_PRICE: &str = "ms-font-resizer";

const SPREAD_GROUP: usize = 0;
const MONEYLINE_GROUP: usize = 2;

#[derive(Default)]
pub struct BetMgmExtractor {
    /// Reduce "Kansas City Chiefs" to "Chiefs" like the other books do.
    /// Off by default: BetMGM names are reported as displayed.
    last_token_names: bool,
}

impl BetMgmExtractor {
    pub fn new(config: &crate::config::ExtractConfig) -> Self {
        Self {
            last_token_names: config.betmgm_last_token_names,
        }
    }
}

impl BookExtractor for BetMgmExtractor {
    fn sportsbook(&self) -> Sportsbook {
        Sportsbook::BetMGM
    }

    fn extract(&self, html: &str) -> Vec<OddsRecord> {
        let doc = Document::parse(html);
        extract_lines(&doc.root(), self.last_token_names)
    }
}

pub fn extract_lines<N: Node>(root: &N, last_token_names: bool) -> Vec<OddsRecord> {
    let mut records = Vec::new();

    for widget in root.select_all(EVENT) {
        let wrappers = widget.select_all(PARTICIPANTS);
        let [first, second] = wrappers.as_slice() else {
            tracing::debug!(participants = wrappers.len(), "BetMGM widget without exactly two participants, skipping");
            continue;
        };
        let name_of = |wrapper: &N| wrapper.text_of(PARTICIPANT_NAME).filter(|n| !n.is_empty());
        let (Some(team_1), Some(team_2)) = (name_of(first), name_of(second)) else {
            tracing::debug!("BetMGM participant without a name, skipping widget");
            continue;
        };

        let groups = widget.select_all(OPTION_GROUPS);
        let options_of = |index: usize| -> Vec<N> {
            groups.get(index).map(|g| g.select_all(OPTION)).unwrap_or_default()
        };
        let spread_opts = options_of(SPREAD_GROUP);
        let moneyline_opts = options_of(MONEYLINE_GROUP);

        for (position, name) in [&team_1, &team_2].into_iter().enumerate() {
            let team = if last_token_names {
                team_token(name).unwrap_or(name)
            } else {
                name.as_str()
            };

            let spread_opt = spread_opts.get(position);
            let spread = spread_opt.and_then(|o| parse_signed_decimal(o.text_of(SPREAD_VALUE).as_deref()));
            let spread_price = spread_opt.and_then(|o| parse_american_price(o.text_of(SPREAD_PRICE).as_deref()));
            let moneyline = moneyline_opts
                .get(position)
                .and_then(|o| parse_american_price(o.text_of(MONEYLINE_PRICE).as_deref()));

            records.push(OddsRecord::new(
                Sportsbook::BetMGM,
                team,
                spread,
                spread_price,
                moneyline,
            ));
        }
    }

    records
}
