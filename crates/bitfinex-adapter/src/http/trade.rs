/*
[INPUT]:  Order requests and order ids
[OUTPUT]: Normalized order confirmations and cancellation results
[POS]:    HTTP layer - signed trading endpoints
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;

use crate::http::{BitfinexClient, Result};
use crate::types::{NewOrderRequest, NormalizedResponse, ParameterSet};

impl BitfinexClient {
    /// Submit a new order
    ///
    /// POST /v1/order/new
    pub async fn new_order(&self, req: NewOrderRequest) -> Result<NormalizedResponse> {
        let params = req.into_params()?;
        self.call_private("order", "new", params).await
    }

    /// POST /v1/order/new/multi
    pub async fn new_multi_order(&self, req: NewOrderRequest) -> Result<NormalizedResponse> {
        self.call_private("order", "new/multi", req.into_multi_params()).await
    }

    /// POST /v1/order/cancel
    pub async fn cancel_order(&self, order_id: u64) -> Result<NormalizedResponse> {
        let params = ParameterSet::new().with("order_id", order_id);
        self.call_private("order", "cancel", params).await
    }

    /// Cancel several orders at once
    ///
    /// POST /v1/order/cancel/multi
    pub async fn cancel_multiple_orders(&self, order_ids: &[u64]) -> Result<NormalizedResponse> {
        let ids: Vec<Value> = order_ids.iter().copied().map(Value::from).collect();
        let params = ParameterSet::new().with("order_id", ids);
        self.call_private("order", "cancel/multi", params).await
    }

    /// Cancel every active order on the account
    ///
    /// POST /v1/order/cancel/all
    pub async fn cancel_all_orders(&self) -> Result<NormalizedResponse> {
        self.call_private("order", "cancel/all", ParameterSet::new()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::http::{BitfinexClient, BitfinexError, ClientConfig};
    use crate::types::{NewOrderRequest, OrderStatus, OrderType, Side};
    use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BitfinexClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        BitfinexClient::with_config(config, Credentials::new("key", "secret")).expect("client init")
    }

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    async fn payloads(server: &MockServer) -> Vec<Value> {
        server
            .received_requests()
            .await
            .expect("recorded requests")
            .iter()
            .map(|request| {
                let payload = request.headers.get("x-bfx-payload").expect("payload header");
                serde_json::from_slice(&BASE64.decode(payload.as_bytes()).expect("base64"))
                    .expect("json")
            })
            .collect()
    }

    #[tokio::test]
    async fn test_new_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/order/new"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 448364249,
                "symbol": "btcusd",
                "exchange": "bitfinex",
                "price": "0.01",
                "avg_execution_price": "0.0",
                "side": "buy",
                "type": "exchange limit",
                "timestamp": "1444272165.252370982",
                "is_live": true,
                "is_cancelled": false,
                "is_hidden": false,
                "was_forced": false,
                "original_amount": "0.01",
                "remaining_amount": "0.01",
                "executed_amount": "0.0",
                "order_id": 448364249
            })))
            .expect(1)
            .mount(&server)
            .await;

        let req = NewOrderRequest::new(
            "BTCUSD",
            dec("0.01"),
            dec("0.01"),
            Side::Buy,
            OrderType::ExchangeLimit,
        );
        let status: OrderStatus = client_for(&server)
            .new_order(req)
            .await
            .expect("new_order failed")
            .parse()
            .expect("order status");
        assert_eq!(status.id, 448_364_249);

        let payload = &payloads(&server).await[0];
        let keys: Vec<_> = payload.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            [
                "request",
                "symbol",
                "amount",
                "price",
                "exchange",
                "side",
                "type",
                "is_hidden",
                "is_postonly",
                "ocoorder",
                "nonce"
            ]
        );
        assert_eq!(payload["request"], json!("/v1/order/new"));
        assert_eq!(payload["amount"], json!("0.01"));
        assert_eq!(payload["side"], json!("buy"));
    }

    #[tokio::test]
    async fn test_oco_order_without_price_never_sent() {
        let server = MockServer::start().await;
        let mut req =
            NewOrderRequest::new("BTCUSD", dec("1"), dec("1"), Side::Sell, OrderType::Limit);
        req.ocoorder = true;

        let err = client_for(&server).new_order(req).await.unwrap_err();
        assert!(matches!(err, BitfinexError::InvalidRequest(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_multi_order_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/order/new/multi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let req =
            NewOrderRequest::new("ETHUSD", dec("2"), dec("300"), Side::Sell, OrderType::Market);
        client_for(&server)
            .new_multi_order(req)
            .await
            .expect("new_multi_order failed");

        let payload = &payloads(&server).await[0];
        assert_eq!(payload["request"], json!("/v1/order/new/multi"));
        assert_eq!(payload["type"], json!("market"));
        assert!(payload.get("ocoorder").is_none());
    }

    #[tokio::test]
    async fn test_cancel_endpoints() {
        let server = MockServer::start().await;
        for endpoint in ["/v1/order/cancel", "/v1/order/cancel/multi", "/v1/order/cancel/all"] {
            Mock::given(method("POST"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"})))
                .expect(1)
                .mount(&server)
                .await;
        }

        let client = client_for(&server);
        client.cancel_order(446_915_287).await.expect("cancel_order failed");
        client
            .cancel_multiple_orders(&[446_915_287, 446_918_349])
            .await
            .expect("cancel_multiple_orders failed");
        let all = client.cancel_all_orders().await.expect("cancel_all_orders failed");
        assert_eq!(all.into_value(), json!({"result": "ok", "error": false}));

        let payloads = payloads(&server).await;
        assert_eq!(payloads[0]["request"], json!("/v1/order/cancel"));
        assert_eq!(payloads[0]["order_id"], json!(446_915_287));
        assert_eq!(payloads[1]["request"], json!("/v1/order/cancel/multi"));
        assert_eq!(payloads[1]["order_id"], json!([446_915_287, 446_918_349]));
        assert_eq!(payloads[2]["request"], json!("/v1/order/cancel/all"));
        assert_eq!(payloads[2].as_object().unwrap().len(), 2);
    }
}
