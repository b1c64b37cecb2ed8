use std::time::Duration;

use marketdash::{MdClientBuilder, NewsFeed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Configure from MARKETDASH_API_URL / NEWS_API_KEY, with a short timeout.
    let client = MdClientBuilder::from_env()?
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Market trend card. This resource has no fallback, so it may fail.
    match marketdash::market_overview(&client).await {
        Ok(overview) => {
            for (title, section) in [
                ("Stock Market", &overview.stock_market),
                ("Crypto Market", &overview.crypto_market),
            ] {
                println!("--- {title} ---");
                for item in &section.instruments {
                    println!("{:<12} {:>12} {}", item.name, item.price(), item.change_display());
                }
                println!("{title} Trend: {}", section.reported());
                println!();
            }
        }
        Err(e) => println!("Market overview unavailable: {e}\n"),
    }

    // 3. News sentiment for both feeds. These never fail.
    for feed in [NewsFeed::Business, NewsFeed::Crypto] {
        let overview = marketdash::sentiment_overview(&client, feed).await;
        let d = overview.summary.distribution;
        println!(
            "--- {feed:?} sentiment on {} ---\nPositive: {}  Neutral: {}  Negative: {}  => {}",
            overview.date, d.positive, d.neutral, d.negative, overview.summary.overall
        );
    }
    println!();

    // 4. Recommendation tables.
    println!("--- Top Stocks ---");
    for row in marketdash::top_stocks(&client).await {
        print_row(&row);
    }
    println!();

    println!("--- Top Cryptos ---");
    for row in marketdash::top_cryptos(&client).await {
        print_row(&row);
    }

    Ok(())
}

fn print_row(row: &marketdash::SignalRecommendation) {
    let price = row.price.map_or_else(|| "N/A".to_string(), |p| format!("${p:.2}"));
    let change = row
        .change
        .map_or_else(|| "N/A".to_string(), |c| format!("{c:+.2}%"));
    println!(
        "{:<6} {:<24} {:>12} {:>8} {}",
        row.symbol, row.name, price, change, row.final_signal
    );
}
