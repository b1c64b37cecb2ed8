use httpmock::Method::GET;
use marketdash::{AssetClass, IndicatorValue, Signal};
use serde_json::json;

use crate::common;

#[tokio::test]
async fn query_style_lookup_sends_symbol_and_flag() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/backend/strategy")
            .query_param("symbol", "AAPL")
            .query_param("is_crypto", "false");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "technical_indicators": { "RSI": 28.4, "MA_50": 182.12, "Volume": "N/A" },
                "articles": [
                    { "title": "Apple beats", "gpt_analysis": "Positive" },
                    { "title": "Supply worries" }
                ],
                "positive_sentiment": 0.75,
                "negative_sentiment": 0.25,
                "final_signal": "Buy"
            }));
    });

    let client = common::client_for(&server);
    let report = marketdash::strategy(&client, "AAPL", AssetClass::Stock)
        .await
        .unwrap();
    mock.assert();

    assert_eq!(report.symbol, "AAPL");
    assert_eq!(report.final_signal, Signal::Buy);
    assert_eq!(report.positive_sentiment, 0.75);
    assert_eq!(report.negative_sentiment, 0.25);
    assert_eq!(report.articles.len(), 2);
    assert_eq!(report.articles[0].analysis.as_deref(), Some("Positive"));
    assert_eq!(report.articles[1].analysis, None);

    let ti = &report.technical_indicators;
    assert_eq!(ti.rsi.as_ref().and_then(IndicatorValue::as_f64), Some(28.4));
    assert_eq!(ti.moving_average().map(ToString::to_string).as_deref(), Some("182.12"));
    assert_eq!(ti.volume, Some(IndicatorValue::Text("N/A".into())));
}

#[tokio::test]
async fn crypto_flag_and_nested_articles() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/backend/strategy")
            .query_param("symbol", "BTC")
            .query_param("is_crypto", "true");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "technical_indicators": { "RSI": "71.2", "MA_20": 64000, "Volume": 123456789 },
                "sentiment_data": { "articles": [ { "title": "ETF inflows slow", "gpt_analysis": "Negative" } ] },
                "positive_sentiment": 0.0,
                "negative_sentiment": 1.0,
                "final_signal": "Sell"
            }));
    });

    let client = common::client_for(&server);
    let report = marketdash::strategy(&client, " BTC ", AssetClass::Crypto)
        .await
        .unwrap();
    mock.assert();

    assert_eq!(report.symbol, "BTC");
    assert_eq!(report.final_signal, Signal::Sell);
    assert_eq!(report.articles.len(), 1);
    assert_eq!(report.articles[0].title, "ETF inflows slow");
    let ti = &report.technical_indicators;
    assert_eq!(ti.rsi.as_ref().and_then(IndicatorValue::as_f64), Some(71.2));
    assert!(ti.ma_50.is_none());
    assert_eq!(ti.moving_average().and_then(IndicatorValue::as_f64), Some(64000.0));
}

#[tokio::test]
async fn path_style_endpoints() {
    let server = common::setup_server();
    let stock = common::mock_json(
        &server,
        "/backend/strategy/stock/MSFT",
        200,
        json!({ "final_signal": "Hold", "positive_sentiment": 0.5, "negative_sentiment": 0.5 }),
    );
    let crypto = common::mock_json(
        &server,
        "/backend/strategy/crypto/ETH",
        200,
        json!({ "final_signal": "buy", "technical_indicators": {} }),
    );

    let client = common::client_for(&server);
    let s = marketdash::stock_strategy(&client, "MSFT").await.unwrap();
    let c = marketdash::crypto_strategy(&client, "ETH").await.unwrap();
    stock.assert();
    crypto.assert();

    assert_eq!(s.final_signal, Signal::Hold);
    assert!(s.articles.is_empty());
    assert_eq!(c.final_signal, Signal::Buy);
    assert_eq!(c.positive_sentiment, 0.0);
}

#[tokio::test]
async fn untitled_headlines_do_not_sink_the_report() {
    let server = common::setup_server();
    let _mock = common::mock_json(
        &server,
        "/backend/strategy/stock/AAPL",
        200,
        json!({
            "sentiment_data": { "articles": [
                { "title": "Good", "gpt_analysis": "Positive" },
                { "title": null, "gpt_analysis": "Negative" },
                { "gpt_analysis": "Neutral" },
                { "title": "   " }
            ] },
            "positive_sentiment": 1.0,
            "negative_sentiment": 0.0,
            "final_signal": "Buy"
        }),
    );

    let client = common::client_for(&server);
    let report = marketdash::stock_strategy(&client, "AAPL").await.unwrap();

    assert_eq!(report.final_signal, Signal::Buy);
    assert_eq!(report.articles.len(), 1);
    assert_eq!(report.articles[0].title, "Good");
    assert_eq!(report.articles[0].analysis.as_deref(), Some("Positive"));
}
