use marketdash::{AssetClass, GENERIC_FETCH_MESSAGE, MdClient, MdError};
use serde_json::json;

use crate::common;

#[tokio::test]
async fn backend_error_field_is_surfaced_verbatim() {
    let server = common::setup_server();
    let mock = common::mock_json(
        &server,
        "/backend/strategy",
        200,
        json!({ "error": "No data found for symbol ZZZZ", "final_signal": "Hold" }),
    );

    let client = common::client_for(&server);
    let err = marketdash::strategy(&client, "ZZZZ", AssetClass::Stock)
        .await
        .unwrap_err();
    mock.assert();

    assert!(err.is_backend());
    assert_eq!(err.user_message(), "No data found for symbol ZZZZ");
    assert_eq!(err.to_string(), "No data found for symbol ZZZZ");
}

#[tokio::test]
async fn transport_failure_is_an_error_with_generic_message() {
    let client = MdClient::builder()
        .api_base(common::unreachable())
        .build()
        .unwrap();

    let err = marketdash::strategy(&client, "AAPL", AssetClass::Stock)
        .await
        .unwrap_err();

    assert!(matches!(err, MdError::Http(_)));
    assert_eq!(err.user_message(), GENERIC_FETCH_MESSAGE);
}

#[tokio::test]
async fn missing_signal_is_not_reported_as_hold() {
    let server = common::setup_server();
    let _mock = common::mock_json(
        &server,
        "/backend/strategy/stock/AAPL",
        200,
        json!({ "technical_indicators": { "RSI": 50 }, "positive_sentiment": 0.5 }),
    );

    let client = common::client_for(&server);
    let err = marketdash::stock_strategy(&client, "AAPL").await.unwrap_err();
    assert!(matches!(err, MdError::Data(_)));
    assert_eq!(err.user_message(), "Failed to fetch strategy data.");
}

#[tokio::test]
async fn server_error_status_propagates() {
    let server = common::setup_server();
    let _mock = common::mock_status(&server, "/backend/strategy/crypto/BTC", 500);

    let client = common::client_for(&server);
    match marketdash::crypto_strategy(&client, "BTC").await {
        Err(MdError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/backend/strategy/crypto/BTC"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_symbol_is_rejected_before_any_request() {
    let client = MdClient::builder()
        .api_base(common::unreachable())
        .build()
        .unwrap();

    let err = marketdash::strategy(&client, "   ", AssetClass::Crypto)
        .await
        .unwrap_err();
    assert!(matches!(err, MdError::InvalidParams(_)));
}
