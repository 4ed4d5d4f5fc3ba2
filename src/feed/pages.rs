//! Raw page snapshots: where each book's league page lives, how it is saved
//! to and read back from disk, and how it is fetched.
//!
//! The books render odds client-side, so a plain HTTP GET may come back
//! without any games in it. Pages saved from a real browser session can be
//! dropped into the store directory under the same file names and are read
//! exactly the same way.

use super::types::{League, Sportsbook};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One book's page, as text, plus when it was captured.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub sportsbook: Sportsbook,
    pub html: String,
    pub captured_at: DateTime<Utc>,
}

/// League page URL for a book.
pub fn page_url(book: Sportsbook, league: League) -> &'static str {
    match (book, league) {
        (Sportsbook::DraftKings, League::Nfl) => "https://sportsbook.draftkings.com/leagues/football/nfl",
        (Sportsbook::DraftKings, League::Mlb) => "https://sportsbook.draftkings.com/leagues/baseball/mlb",
        (Sportsbook::DraftKings, League::Nba) => "https://sportsbook.draftkings.com/leagues/basketball/nba",
        (Sportsbook::DraftKings, League::Ncaaf) => "https://sportsbook.draftkings.com/leagues/football/ncaaf",
        (Sportsbook::BetMGM, League::Nfl) => "https://sports.az.betmgm.com/en/sports/football-11/betting/usa-9/nfl-35",
        (Sportsbook::BetMGM, League::Mlb) => "https://sports.az.betmgm.com/en/sports/baseball-23/betting/usa-9/mlb-75",
        (Sportsbook::BetMGM, League::Nba) => "https://sports.az.betmgm.com/en/sports/basketball-7/betting/usa-9/nba-6004",
        (Sportsbook::BetMGM, League::Ncaaf) => "https://sports.az.betmgm.com/en/sports/football-11/betting/usa-9/college-football-211",
        (Sportsbook::BallyBet, League::Nfl) => "https://play.ballybet.com/sports#sports-hub/american_football/nfl",
        (Sportsbook::BallyBet, League::Mlb) => "https://play.ballybet.com/sports#sports-hub/baseball/mlb",
        (Sportsbook::BallyBet, League::Nba) => "https://play.ballybet.com/sports#sports-hub/basketball/nba",
        (Sportsbook::BallyBet, League::Ncaaf) => "https://play.ballybet.com/sports#sports-hub/american_football/ncaaf",
    }
}

// ── Store ─────────────────────────────────────────────────────────────

/// Directory of `<book>_page.txt` files, one per sportsbook.
#[derive(Debug, Clone)]
pub struct PageStore {
    dir: PathBuf,
}

impl PageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, book: Sportsbook) -> PathBuf {
        self.dir.join(format!("{}_page.txt", book.key()))
    }

    pub fn save(&self, snapshot: &PageSnapshot) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create page directory: {}", self.dir.display()))?;
        let path = self.path_for(snapshot.sportsbook);
        std::fs::write(&path, &snapshot.html)
            .with_context(|| format!("Failed to write page: {}", path.display()))?;
        Ok(path)
    }

    /// Read a saved page. A missing file is an error: the caller decides
    /// whether to abort or fetch again.
    pub fn open(&self, book: Sportsbook) -> Result<PageSnapshot> {
        let path = self.path_for(book);
        let html = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {} page: {}", book, path.display()))?;
        Ok(PageSnapshot {
            sportsbook: book,
            html,
            captured_at: modified_at(&path).unwrap_or_else(Utc::now),
        })
    }
}

fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}

// ── Sources ───────────────────────────────────────────────────────────

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&mut self, book: Sportsbook, league: League) -> Result<PageSnapshot>;
}

/// Pages already on disk. The league is whatever was saved last.
pub struct SavedPages {
    store: PageStore,
}

impl SavedPages {
    pub fn new(store: PageStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PageSource for SavedPages {
    async fn fetch_page(&mut self, book: Sportsbook, _league: League) -> Result<PageSnapshot> {
        self.store.open(book)
    }
}

/// Plain HTTP GET of each book's league page.
pub struct HttpPages {
    client: Client,
    max_retries: u32,
}

impl HttpPages {
    pub fn new(config: &crate::config::FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
        })
    }
}

#[async_trait]
impl PageSource for HttpPages {
    async fn fetch_page(&mut self, book: Sportsbook, league: League) -> Result<PageSnapshot> {
        let url = page_url(book, league);

        let mut last_err = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tokio::time::sleep(Duration::from_millis(500 * attempt as u64)).await;
            }

            match self.client.get(url).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if !status.is_success() {
                        tracing::warn!(%book, attempt, %status, "page request rejected");
                        last_err = Some(anyhow::anyhow!("{} HTTP {} for {}", book, status, url));
                        continue;
                    }
                    let html = resp
                        .text()
                        .await
                        .with_context(|| format!("{} response read failed", book))?;
                    tracing::info!(%book, bytes = html.len(), "fetched page");
                    return Ok(PageSnapshot {
                        sportsbook: book,
                        html,
                        captured_at: Utc::now(),
                    });
                }
                Err(e) => {
                    tracing::warn!(%book, attempt, error = %e, "page request failed");
                    last_err = Some(e.into());
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("{} fetch failed", book)))
    }
}

/// Fetch every book's page for `league`, in `Sportsbook::ALL` order.
pub async fn fetch_all(source: &mut dyn PageSource, league: League) -> Result<Vec<PageSnapshot>> {
    let mut pages = Vec::with_capacity(Sportsbook::ALL.len());
    for book in Sportsbook::ALL {
        pages.push(source.fetch_page(book, league).await?);
    }
    Ok(pages)
}
