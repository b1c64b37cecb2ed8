#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use marketdash::MdClient;
use serde_json::{Value, json};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

fn base(server: &MockServer, path: &str) -> Url {
    Url::parse(&server.url(path)).unwrap()
}

/// A client whose backend and public providers all live on `server`.
pub fn client_for(server: &MockServer) -> MdClient {
    builder_for(server).build().unwrap()
}

pub fn builder_for(server: &MockServer) -> marketdash::MdClientBuilder {
    MdClient::builder()
        .api_base(base(server, "/backend/"))
        .yahoo_chart_base(base(server, "/v8/finance/chart/"))
        .coingecko_base(base(server, "/api/v3/"))
        .newsapi_base(base(server, "/v2/"))
}

/// Nothing listens on port 1, so every request fails at the transport level.
pub fn unreachable() -> Url {
    Url::parse("http://127.0.0.1:1/").unwrap()
}

pub fn mock_json<'a>(server: &'a MockServer, path: &str, status: u16, body: Value) -> Mock<'a> {
    let path = path.to_string();
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status)
            .header("content-type", "application/json")
            .json_body(body);
    })
}

/// Serves `body` verbatim, for fixtures whose key order matters.
pub fn mock_raw<'a>(server: &'a MockServer, path: &str, body: &str) -> Mock<'a> {
    let path = path.to_string();
    let body = body.to_string();
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_status<'a>(server: &'a MockServer, path: &str, status: u16) -> Mock<'a> {
    let path = path.to_string();
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status).body("upstream unavailable");
    })
}

/// A minimal Yahoo chart v8 body.
pub fn chart_body(symbol: &str, price: f64, previous_close: f64, name: Option<&str>) -> Value {
    let mut meta = json!({
        "symbol": symbol,
        "currency": "USD",
        "regularMarketPrice": price,
        "previousClose": previous_close,
    });
    if let Some(n) = name {
        meta["instrumentName"] = json!(n);
    }
    json!({ "chart": { "result": [ { "meta": meta } ], "error": null } })
}

pub fn mock_chart<'a>(server: &'a MockServer, symbol: &str, body: Value) -> Mock<'a> {
    let path = format!("/v8/finance/chart/{symbol}");
    server.mock(|when, then| {
        when.method(GET).path(path).query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(body);
    })
}

pub fn backend_article(title: &str, label: Option<&str>) -> Value {
    let mut a = json!({
        "title": title,
        "source": { "name": "Reuters" },
        "publishedAt": "2024-05-01T12:00:00Z",
        "url": "https://example.com/a",
        "gpt_analysis": "Steady."
    });
    if let Some(l) = label {
        a["azure_sentiment"] = json!({
            "label": l,
            "confidence_scores": { "positive": 0.7, "neutral": 0.2, "negative": 0.1 }
        });
    }
    a
}
