/*
[INPUT]:  Symbol / currency identifiers and optional query filters
[OUTPUT]: Normalized market data (books, funding, stats, trades, symbols, ticker)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{BitfinexClient, Result};
use crate::types::{NormalizedResponse, ParameterSet};

impl BitfinexClient {
    /// Order book for a symbol
    ///
    /// GET /v1/book/{symbol}?limit_bids=&limit_asks=&group=
    pub async fn order_book(
        &self,
        symbol: &str,
        filters: ParameterSet,
    ) -> Result<NormalizedResponse> {
        self.call_public("book", symbol, filters).await
    }

    /// Margin funding book for a currency
    ///
    /// GET /v1/lendbook/{currency}?limit_bids=&limit_asks=
    pub async fn lend_book(
        &self,
        currency: &str,
        filters: ParameterSet,
    ) -> Result<NormalizedResponse> {
        self.call_public("lendbook", currency, filters).await
    }

    /// Most recent funding data for a currency
    ///
    /// GET /v1/lends/{currency}?timestamp=&limit_lends=
    pub async fn lends(&self, currency: &str, filters: ParameterSet) -> Result<NormalizedResponse> {
        self.call_public("lends", currency, filters).await
    }

    /// Volume stats over several periods
    ///
    /// GET /v1/stats/{symbol}
    pub async fn stats(&self, symbol: &str) -> Result<NormalizedResponse> {
        self.call_public("stats", symbol, ParameterSet::new()).await
    }

    /// Public trade history
    ///
    /// GET /v1/trades/{symbol}?timestamp=&limit_trades=
    pub async fn trades(&self, symbol: &str, filters: ParameterSet) -> Result<NormalizedResponse> {
        self.call_public("trades", symbol, filters).await
    }

    /// GET /v1/symbols
    pub async fn symbols(&self) -> Result<NormalizedResponse> {
        self.call_public("symbols", (), ParameterSet::new()).await
    }

    /// GET /v1/symbols_details
    pub async fn symbols_details(&self) -> Result<NormalizedResponse> {
        self.call_public("symbols_details", (), ParameterSet::new()).await
    }

    /// Last 24h ticker for a symbol
    ///
    /// GET /v1/pubticket/{symbol}
    pub async fn ticker(&self, symbol: &str) -> Result<NormalizedResponse> {
        self.call_public("pubticket", symbol, ParameterSet::new()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BitfinexClient, ClientConfig};
    use crate::types::{OrderBook, ParameterSet, Stat, SymbolDetail, Ticker};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BitfinexClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        BitfinexClient::build(config, None).expect("client init")
    }

    #[tokio::test]
    async fn test_order_book() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "bids": [{"price": "574.61", "amount": "0.1439327", "timestamp": "1472506127.0"}],
            "asks": [{"price": "574.62", "amount": "19.1334", "timestamp": "1472506126.0"}]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/book/BTCUSD"))
            .and(query_param("limit_asks", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .order_book("BTCUSD", ParameterSet::new().with("limit_asks", 1))
            .await
            .expect("order_book failed");

        assert!(!response.error);
        let book: OrderBook = response.parse().expect("order book");
        assert_eq!(book.bids[0].price, "574.61".parse().expect("bid price"));
        assert_eq!(book.asks[0].amount, "19.1334".parse().expect("ask amount"));
    }

    #[tokio::test]
    async fn test_lend_book_and_lends_paths() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/lendbook/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bids": [], "asks": []})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/lends/USD"))
            .and(query_param("limit_lends", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let book = client
            .lend_book("USD", ParameterSet::new())
            .await
            .expect("lend_book failed");
        assert!(!book.error);

        let lends = client
            .lends("USD", ParameterSet::new().with("limit_lends", 2))
            .await
            .expect("lends failed");
        assert_eq!(lends.into_value(), json!({"data": [], "error": false}));
    }

    #[tokio::test]
    async fn test_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/stats/BTCUSD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"period": 1, "volume": "7967.96766158"},
                {"period": 7, "volume": "55938.67260266"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let stats: Vec<Stat> = client_for(&server)
            .stats("BTCUSD")
            .await
            .expect("stats failed")
            .parse()
            .expect("stats body");
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[1].period, 7);
    }

    #[tokio::test]
    async fn test_trades() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/trades/ETHUSD"))
            .and(query_param("limit_trades", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "timestamp": 1444266681,
                "tid": 11988919,
                "price": "244.8",
                "amount": "0.03297384",
                "exchange": "bitfinex",
                "type": "sell"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .trades("ETHUSD", ParameterSet::new().with("limit_trades", 1))
            .await
            .expect("trades failed");
        let trades: Vec<crate::types::Trade> = response.parse().expect("trades body");
        assert_eq!(trades[0].tid, 11_988_919);
    }

    #[tokio::test]
    async fn test_symbols_and_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/symbols"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["btcusd", "ltcusd"])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/symbols_details"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "pair": "btcusd",
                "price_precision": 5,
                "initial_margin": "30.0",
                "minimum_margin": "15.0",
                "maximum_order_size": "2000.0",
                "minimum_order_size": "0.01",
                "expiration": "NA"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let symbols: Vec<String> = client
            .symbols()
            .await
            .expect("symbols failed")
            .parse()
            .expect("symbols body");
        assert_eq!(symbols, ["btcusd", "ltcusd"]);

        let details: Vec<SymbolDetail> = client
            .symbols_details()
            .await
            .expect("symbols_details failed")
            .parse()
            .expect("details body");
        assert_eq!(details[0].price_precision, 5);
        assert!(!details[0].margin);
    }

    #[tokio::test]
    async fn test_ticker() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/pubticket/BTCUSD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "mid": "244.755",
                "bid": "244.75",
                "ask": "244.76",
                "last_price": "244.82",
                "low": "244.2",
                "high": "248.19",
                "volume": "7842.11542563",
                "timestamp": "1444253422.348340958"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ticker: Ticker = client_for(&server)
            .ticker("BTCUSD")
            .await
            .expect("ticker failed")
            .parse()
            .expect("ticker body");
        assert_eq!(ticker.last_price, "244.82".parse().expect("last_price"));
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_flagged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/pubticket/NOPE"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"message": "Unknown symbol"})),
            )
            .mount(&server)
            .await;

        let response = client_for(&server).ticker("NOPE").await.expect("http response");
        assert!(response.error);
        assert_eq!(
            response.into_value(),
            json!({"message": "Unknown symbol", "error": true})
        );
    }
}
