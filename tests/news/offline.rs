use marketdash::{NewsBuilder, NewsFeed, SentimentLabel};
use serde_json::json;

use crate::common;

#[tokio::test]
async fn backend_business_news_is_decoded() {
    let server = common::setup_server();
    let mock = common::mock_json(
        &server,
        "/backend/news",
        200,
        json!({
            "articles": [
                common::backend_article("Stocks rally on earnings", Some("positive")),
                common::backend_article("Oil slips", Some("negative")),
            ]
        }),
    );

    let client = common::client_for(&server);
    let articles = marketdash::business_news(&client).await;
    mock.assert();

    assert_eq!(articles.len(), 2);
    let first = &articles[0];
    assert_eq!(first.title, "Stocks rally on earnings");
    assert_eq!(first.source.as_deref(), Some("Reuters"));
    assert_eq!(first.url.as_deref(), Some("https://example.com/a"));
    assert_eq!(first.analysis.as_deref(), Some("Steady."));
    assert_eq!(first.sentiment_label(), Some(SentimentLabel::Positive));
    assert_eq!(
        first.published_at.map(|t| t.to_rfc3339()),
        Some("2024-05-01T12:00:00+00:00".to_string())
    );
    let scores = first.sentiment.as_ref().and_then(|s| s.confidence).unwrap();
    assert!((scores.positive + scores.neutral + scores.negative - 1.0).abs() < 1e-9);
    assert_eq!(articles[1].sentiment_label(), Some(SentimentLabel::Negative));
}

#[tokio::test]
async fn crypto_feed_uses_nested_path() {
    let server = common::setup_server();
    let mock = common::mock_json(
        &server,
        "/backend/news/crypto",
        200,
        json!({ "articles": [ common::backend_article("ETH upgrade ships", Some("neutral")) ] }),
    );

    let client = common::client_for(&server);
    let articles = marketdash::crypto_news(&client).await;
    mock.assert();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "ETH upgrade ships");
}

#[tokio::test]
async fn bare_list_and_legacy_sentiment_key_are_accepted() {
    let server = common::setup_server();
    let mock = common::mock_json(
        &server,
        "/backend/news",
        200,
        json!([
            { "title": "Fed holds", "sentiment": { "label": "Neutral", "score": 0.5 } },
            { "title": "" },
            { "source": { "name": "no title" } }
        ]),
    );

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, NewsFeed::Business)
        .fetch_primary()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(articles.len(), 1, "untitled items are dropped");
    assert_eq!(articles[0].sentiment_label(), Some(SentimentLabel::Neutral));
    assert_eq!(articles[0].sentiment.as_ref().and_then(|s| s.score), Some(0.5));
    assert!(articles[0].published_at.is_none());
}

#[tokio::test]
async fn item_with_both_sentiment_keys_prefers_azure() {
    let server = common::setup_server();
    let _mock = common::mock_json(
        &server,
        "/backend/news",
        200,
        json!({
            "articles": [
                {
                    "title": "Banks beat estimates",
                    "azure_sentiment": { "label": "positive", "score": 0.9 },
                    "sentiment": { "label": "negative", "score": 0.2 }
                },
                { "title": "Yields climb" }
            ]
        }),
    );

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, NewsFeed::Business).fetch().await;

    assert_eq!(articles.len(), 2, "live feed kept, not the snapshot");
    assert_eq!(articles[0].title, "Banks beat estimates");
    assert_eq!(articles[0].sentiment_label(), Some(SentimentLabel::Positive));
    assert_eq!(articles[0].sentiment.as_ref().and_then(|s| s.score), Some(0.9));
    assert_eq!(articles[1].sentiment_label(), None);
}

#[tokio::test]
async fn fetch_primary_propagates_status_errors() {
    let server = common::setup_server();
    let mock = common::mock_status(&server, "/backend/news", 502);

    let client = common::client_for(&server);
    let err = NewsBuilder::new(&client, NewsFeed::Business)
        .fetch_primary()
        .await
        .unwrap_err();
    mock.assert();

    match err {
        marketdash::MdError::Status { status, .. } => assert_eq!(status, 502),
        other => panic!("expected Status, got {other:?}"),
    }
}
