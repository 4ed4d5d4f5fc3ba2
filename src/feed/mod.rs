pub mod ballybet;
pub mod betmgm;
pub mod dom;
pub mod draftkings;
pub mod normalize;
pub mod pages;
pub mod types;

use crate::config::ExtractConfig;
use types::{OddsRecord, Sportsbook};

/// Reads one book's saved page into normalized records.
///
/// Extraction never fails: rows that don't fit the expected layout are
/// skipped or come back with absent fields, and an unrecognised page is
/// simply empty.
pub trait BookExtractor: Send + Sync {
    fn sportsbook(&self) -> Sportsbook;
    fn extract(&self, html: &str) -> Vec<OddsRecord>;
}

pub fn extractor_for(book: Sportsbook, config: &ExtractConfig) -> Box<dyn BookExtractor> {
    match book {
        Sportsbook::DraftKings => Box::new(draftkings::DraftKingsExtractor),
        Sportsbook::BallyBet => Box::new(ballybet::BallyBetExtractor),
        Sportsbook::BetMGM => Box::new(betmgm::BetMgmExtractor::new(config)),
    }
}
