//! Minimal document-tree capability used by the extractors.
//!
//! Extractors only need "select descendants by CSS selector", "read text" and
//! "read an attribute". The `scraper` crate backs the real implementation;
//! anything else that can answer those three questions can stand in.

use scraper::{ElementRef, Html, Selector};

pub trait Node: Sized {
    /// All descendants matching `selector`, in document order.
    /// An invalid selector matches nothing.
    fn select_all(&self, selector: &str) -> Vec<Self>;

    /// Concatenated descendant text, trimmed.
    fn inner_text(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn select_one(&self, selector: &str) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    /// Trimmed text of the first match, if any.
    fn text_of(&self, selector: &str) -> Option<String> {
        self.select_one(selector).map(|n| n.inner_text())
    }
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!(selector, error = ?e, "invalid CSS selector");
            None
        }
    }
}

impl<'a> Node for ElementRef<'a> {
    fn select_all(&self, selector: &str) -> Vec<Self> {
        let Some(sel) = compile(selector) else {
            return Vec::new();
        };
        self.select(&sel).collect()
    }

    fn inner_text(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(|v| v.to_string())
    }
}

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="card"><span class="name"> Kansas City  Chiefs </span><button aria-label="Chiefs at -150">x</button></div>
        <div class="card"><span class="name">Las Vegas Raiders</span></div>
    </body></html>"#;

    #[test]
    fn test_select_in_document_order() {
        let doc = Document::parse(PAGE);
        let cards = doc.root().select_all(".card");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].text_of(".name").as_deref(), Some("Las Vegas Raiders"));
    }

    #[test]
    fn test_text_is_trimmed() {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.root().text_of(".name").as_deref(), Some("Kansas City  Chiefs"));
    }

    #[test]
    fn test_attr() {
        let doc = Document::parse(PAGE);
        let btn = doc.root().select_one("button").unwrap();
        assert_eq!(btn.attribute("aria-label").as_deref(), Some("Chiefs at -150"));
        assert!(btn.attribute("title").is_none());
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = Document::parse(PAGE);
        assert!(doc.root().select_all("div[[").is_empty());
        assert!(doc.root().select_one(".missing").is_none());
    }
}
