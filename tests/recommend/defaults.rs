use marketdash::recommend::defaults::{self, COIN_SYMBOLS, DEFAULT_STOCK_SYMBOLS};
use marketdash::{Signal, default_crypto_recommendations, default_stock_recommendations};

#[test]
fn coin_table_covers_the_default_universe() {
    assert_eq!(COIN_SYMBOLS.len(), 10);
    assert_eq!(defaults::default_coin_ids().len(), 10);
    assert_eq!(defaults::display_symbol("binancecoin", Some("bnb")), "BNB");
    assert_eq!(defaults::display_symbol("matic-network", Some("pol")), "MATIC");
    assert_eq!(defaults::display_symbol("pepe", Some("pepe")), "PEPE");
    assert_eq!(defaults::display_symbol("pepe", None), "PEPE");
}

#[test]
fn stock_universe_is_the_ten_majors() {
    assert_eq!(DEFAULT_STOCK_SYMBOLS.len(), 10);
    assert_eq!(DEFAULT_STOCK_SYMBOLS[0], "AAPL");
    assert_eq!(DEFAULT_STOCK_SYMBOLS[9], "WMT");
}

#[test]
fn placeholder_tables_have_five_rows() {
    let stocks = default_stock_recommendations();
    assert_eq!(stocks.len(), 5);
    assert_eq!(stocks[4].symbol, "TSLA");
    assert_eq!(stocks[4].final_signal, Signal::Sell);

    let cryptos = default_crypto_recommendations();
    assert_eq!(cryptos.len(), 5);
    assert_eq!(cryptos[0].symbol, "BTC");
    assert_eq!(cryptos[0].price, Some(65340.75));
}
