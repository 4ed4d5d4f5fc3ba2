// Integration tests: saved pages -> extraction -> aggregation -> best price

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use odds_shop::config::ExtractConfig;
    use odds_shop::engine::{best_moneyline, lines_for_team, MoneylineLookup};
    use odds_shop::feed::pages::{fetch_all, PageSnapshot, PageStore, SavedPages};
    use odds_shop::feed::types::{League, Sportsbook};
    use odds_shop::pipeline::extract_all;

    fn fixture(book: Sportsbook) -> &'static str {
        match book {
            Sportsbook::DraftKings => include_str!("fixtures/draftkings_page.txt"),
            Sportsbook::BallyBet => include_str!("fixtures/ballybet_page.txt"),
            Sportsbook::BetMGM => include_str!("fixtures/betmgm_page.txt"),
        }
    }

    fn seeded_store(name: &str) -> PageStore {
        let dir = std::env::temp_dir().join(format!("odds-shop-it-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let store = PageStore::new(dir);
        for book in Sportsbook::ALL {
            store
                .save(&PageSnapshot {
                    sportsbook: book,
                    html: fixture(book).to_string(),
                    captured_at: Utc::now(),
                })
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_full_session_best_moneyline() {
        let mut source = SavedPages::new(seeded_store("session"));
        let pages = fetch_all(&mut source, League::Nfl).await.unwrap();
        let records = extract_all(&pages, &ExtractConfig::default()).await.unwrap();

        // BetMGM (2) + BallyBet (2) + DraftKings (2), in that order.
        assert_eq!(records.len(), 6);
        let books: Vec<Sportsbook> = records.iter().map(|r| r.sportsbook).collect();
        assert_eq!(
            books,
            vec![
                Sportsbook::BetMGM,
                Sportsbook::BetMGM,
                Sportsbook::BallyBet,
                Sportsbook::BallyBet,
                Sportsbook::DraftKings,
                Sportsbook::DraftKings,
            ]
        );

        // Chiefs: BallyBet -180, DraftKings -170 (BetMGM is "Kansas City Chiefs").
        let chiefs = best_moneyline(&records, "chiefs").best().unwrap();
        assert_eq!(chiefs.sportsbook, Sportsbook::DraftKings);
        assert_eq!(chiefs.moneyline, Some(-170));

        // Raiders: BallyBet +150 beats DraftKings +142.
        let raiders = best_moneyline(&records, "Raiders").best().unwrap();
        assert_eq!(raiders.sportsbook, Sportsbook::BallyBet);

        // Full BetMGM names only match BetMGM.
        let full = best_moneyline(&records, "Kansas City Chiefs").best().unwrap();
        assert_eq!(full.sportsbook, Sportsbook::BetMGM);
        assert_eq!(full.moneyline, Some(-175));

        assert_eq!(best_moneyline(&records, "Broncos"), MoneylineLookup::TeamNotFound);
    }

    #[tokio::test]
    async fn test_last_token_betmgm_names_join_the_comparison() {
        let mut source = SavedPages::new(seeded_store("last-token"));
        let pages = fetch_all(&mut source, League::Nfl).await.unwrap();
        let config = ExtractConfig { betmgm_last_token_names: true };
        let records = extract_all(&pages, &config).await.unwrap();

        let lines = lines_for_team(&records, "Raiders");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].sportsbook, Sportsbook::BetMGM);
        assert_eq!(lines[0].moneyline, Some(145));

        let best = best_moneyline(&records, "Raiders").best().unwrap();
        assert_eq!(best.moneyline, Some(150));
    }

    #[tokio::test]
    async fn test_missing_page_is_an_error() {
        let store = seeded_store("missing");
        std::fs::remove_file(store.path_for(Sportsbook::BallyBet)).unwrap();
        let mut source = SavedPages::new(store);
        let err = fetch_all(&mut source, League::Mlb).await.unwrap_err();
        assert!(format!("{:#}", err).contains("BallyBet"));
    }
}
