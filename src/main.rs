use anyhow::Result;
use odds_shop::config::{prompt, Config};
use odds_shop::engine::{best_moneyline, lines_for_team};
use odds_shop::feed::pages::{fetch_all, HttpPages, PageSnapshot, PageSource, PageStore, SavedPages};
use odds_shop::feed::types::League;
use odds_shop::{pipeline, report};
use std::path::Path;
use tracing_subscriber::EnvFilter;

enum Market {
    Moneyline,
    Spread,
}

fn prompt_league() -> Result<League> {
    println!("  What sport do you want to bet on?");
    for (i, league) in League::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, league.label());
    }
    loop {
        let input = prompt("  Type your choice here: ")?;
        match input.parse::<u32>() {
            Ok(n) => match League::from_menu_choice(n) {
                Some(league) => return Ok(league),
                None => println!("  Please enter a number between 1 and {}.", League::ALL.len()),
            },
            Err(_) => println!("  Invalid input. Please enter a number."),
        }
    }
}

fn prompt_market() -> Result<Market> {
    println!("  What betting line do you want to optimize?");
    println!("  1. Moneyline");
    println!("  2. Spread");
    loop {
        let input = prompt("  Type your choice here: ")?;
        match input.parse::<u32>() {
            Ok(1) => return Ok(Market::Moneyline),
            Ok(2) => return Ok(Market::Spread),
            Ok(_) => println!("  Please enter 1 or 2."),
            Err(_) => println!("  Invalid input. Please enter a number."),
        }
    }
}

async fn load_pages(config: &Config, league: League, fetch: bool) -> Result<Vec<PageSnapshot>> {
    let store = PageStore::new(&config.pages.dir);
    if !fetch {
        let mut source = SavedPages::new(store);
        return fetch_all(&mut source, league).await;
    }

    let mut source = HttpPages::new(&config.fetch)?;
    let mut pages = Vec::new();
    for book in odds_shop::feed::types::Sportsbook::ALL {
        let page = source.fetch_page(book, league).await?;
        let path = store.save(&page)?;
        tracing::info!(%book, path = %path.display(), "saved page");
        pages.push(page);
    }
    Ok(pages)
}

/// One league pick, one team query. Returns false when the user asks to quit.
async fn run_cycle(config: &Config, fetch: bool, json: bool) -> Result<bool> {
    let league = prompt_league()?;
    println!();

    let pages = match load_pages(config, league, fetch).await {
        Ok(pages) => pages,
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "could not load pages");
            println!("  Could not load sportsbook pages: {:#}", e);
            if !fetch {
                println!("  Run with --fetch, or save pages into {}", config.pages.dir.display());
            }
            return ask_continue();
        }
    };

    for line in report::describe_captures(&pages) {
        println!("  {}", line);
    }
    println!();

    let records = pipeline::extract_all(&pages, &config.extract).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print!("{}", report::render_lines(&records));
    }
    println!();

    let team = prompt("  Enter the team's name: ")?;
    println!();

    match prompt_market()? {
        Market::Moneyline => {
            for record in lines_for_team(&records, &team) {
                println!("  {}", report::describe_record(record));
            }
            let lookup = best_moneyline(&records, &team);
            println!("  {}", report::describe_lookup(&lookup, &team));
        }
        Market::Spread => {
            println!("  Best spread option not yet implemented.");
        }
    }
    println!();

    ask_continue()
}

fn ask_continue() -> Result<bool> {
    let input = prompt("  Enter 'q' to quit or any other key to continue: ")?;
    println!();
    Ok(!input.eq_ignore_ascii_case("q"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let log_file = std::fs::File::create("odds-shop.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("odds_shop=info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let fetch = std::env::args().any(|arg| arg == "--fetch");
    let json = std::env::args().any(|arg| arg == "--json");

    let config = Config::load_or_default(Path::new("config.toml"))?;

    println!();
    println!("  Odds Shop v0.1.0");
    println!("  ================");
    println!();
    if fetch {
        println!("  ** FETCH MODE ** (pages are downloaded and saved to {})", config.pages.dir.display());
        println!();
    }

    while run_cycle(&config, fetch, json).await? {}

    Ok(())
}
