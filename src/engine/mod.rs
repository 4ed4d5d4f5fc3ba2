pub mod aggregate;
pub mod selector;

pub use aggregate::aggregate;
pub use selector::{best_moneyline, lines_for_team, MoneylineLookup};
