// Display rows and messages for the CLI. Nothing here prints.

use crate::engine::MoneylineLookup;
use crate::feed::pages::PageSnapshot;
use crate::feed::types::OddsRecord;

const ABSENT: &str = "—";

/// One printable line of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRow {
    pub sportsbook: String,
    pub team: String,
    pub spread: String,
    pub spread_price: String,
    pub moneyline: String,
}

/// American price with explicit sign: "+130", "-110".
pub fn format_price(price: Option<i64>) -> String {
    match price {
        Some(p) if p > 0 => format!("+{}", p),
        Some(p) => p.to_string(),
        None => ABSENT.to_string(),
    }
}

/// Spread with explicit sign; a zero spread is "PK".
pub fn format_spread(spread: Option<f64>) -> String {
    match spread {
        Some(s) if s == 0.0 => "PK".to_string(),
        Some(s) if s > 0.0 => format!("+{}", s),
        Some(s) => s.to_string(),
        None => ABSENT.to_string(),
    }
}

pub fn build_line_rows(records: &[OddsRecord]) -> Vec<LineRow> {
    records
        .iter()
        .map(|r| LineRow {
            sportsbook: r.sportsbook.to_string(),
            team: r.team_name.clone(),
            spread: format_spread(r.spread),
            spread_price: format_price(r.spread_price),
            moneyline: format_price(r.moneyline),
        })
        .collect()
}

/// Fixed-width table of every line, grouped as the records arrive.
pub fn render_lines(records: &[OddsRecord]) -> String {
    let rows = build_line_rows(records);
    let team_width = rows
        .iter()
        .map(|r| r.team.chars().count())
        .max()
        .unwrap_or(0)
        .max("Team".len());

    let mut out = format!(
        "  {:<10} {:<tw$} {:>7} {:>7} {:>9}\n",
        "Book", "Team", "Spread", "Price", "Moneyline",
        tw = team_width
    );
    let mut last_book: Option<&str> = None;
    for row in &rows {
        if last_book.is_some_and(|b| b != row.sportsbook) {
            out.push('\n');
        }
        last_book = Some(row.sportsbook.as_str());
        out.push_str(&format!(
            "  {:<10} {:<tw$} {:>7} {:>7} {:>9}\n",
            row.sportsbook, row.team, row.spread, row.spread_price, row.moneyline,
            tw = team_width
        ));
    }
    out
}

/// One-line summary of a record.
pub fn describe_record(record: &OddsRecord) -> String {
    format!(
        "{} {}: moneyline {}, spread {} ({})",
        record.sportsbook,
        record.team_name,
        format_price(record.moneyline),
        format_spread(record.spread),
        format_price(record.spread_price),
    )
}

pub fn describe_lookup(lookup: &MoneylineLookup<'_>, team: &str) -> String {
    match lookup {
        MoneylineLookup::Best(record) => format!("Best moneyline: {}", describe_record(record)),
        MoneylineLookup::TeamNotFound => format!("No team named '{}' on any book.", team),
        MoneylineLookup::NoMoneyline => format!("'{}' is listed, but no book is offering a moneyline.", team),
    }
}

/// "DraftKings: Oct 19 14:05 UTC" per page, in page order.
pub fn describe_captures(pages: &[PageSnapshot]) -> Vec<String> {
    pages
        .iter()
        .map(|p| format!("{}: {}", p.sportsbook, p.captured_at.format("%b %d %H:%M UTC")))
        .collect()
}
