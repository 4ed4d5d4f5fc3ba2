//! Turning odds text ("+150", "−110", "-3.5") into numbers.
//!
//! Pages render minus as either ASCII `-` or U+2212 `−`, and favourites'
//! opposite side as `+N`. Nothing here fails loudly: bad or missing input is `None`.

const UNICODE_MINUS: char = '\u{2212}';

fn normalize_sign(text: &str) -> String {
    let t = text.trim();
    let t = t.strip_prefix('+').unwrap_or(t);
    t.replace(UNICODE_MINUS, "-")
}

pub fn parse_signed_integer(text: Option<&str>) -> Option<i64> {
    normalize_sign(text?).parse::<i64>().ok()
}

pub fn parse_signed_decimal(text: Option<&str>) -> Option<f64> {
    normalize_sign(text?)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// American price: a signed integer that is never zero.
pub fn parse_american_price(text: Option<&str>) -> Option<i64> {
    parse_signed_integer(text).filter(|p| *p != 0)
}
