use crate::feed::types::OddsRecord;

/// Concatenate per-book record lists into one session collection.
///
/// Order is preserved and nothing is deduplicated: the same team showing up
/// once per book is exactly what the selector compares.
pub fn aggregate<I>(per_book: I) -> Vec<OddsRecord>
where
    I: IntoIterator<Item = Vec<OddsRecord>>,
{
    per_book.into_iter().flatten().collect()
}
