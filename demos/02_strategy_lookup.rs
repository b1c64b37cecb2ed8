use marketdash::{AssetClass, MdClientBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=marketdash=warn shows each fallback transition.
    marketdash::init_tracing();

    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "AAPL".to_string());
    let class = match args.next().as_deref() {
        Some("crypto") => AssetClass::Crypto,
        _ => AssetClass::Stock,
    };

    let client = MdClientBuilder::from_env()?.build()?;

    match marketdash::strategy(&client, &symbol, class).await {
        Ok(report) => {
            println!("--- Strategy for {} ---", report.symbol);
            let ti = &report.technical_indicators;
            let show = |v: Option<&marketdash::IndicatorValue>| {
                v.map_or_else(|| "N/A".to_string(), ToString::to_string)
            };
            println!("RSI: {}", show(ti.rsi.as_ref()));
            println!("Moving average: {}", show(ti.moving_average()));
            println!("Volume: {}", show(ti.volume.as_ref()));
            for article in &report.articles {
                println!(
                    "- {} ({})",
                    article.title,
                    article.analysis.as_deref().unwrap_or("no analysis")
                );
            }
            println!(
                "Positive Sentiment: {:.1}% | Negative Sentiment: {:.1}%",
                report.positive_sentiment * 100.0,
                report.negative_sentiment * 100.0
            );
            println!("Final Signal: {}", report.final_signal);
        }
        Err(e) => println!("Error: {}", e.user_message()),
    }

    Ok(())
}
