/*
[INPUT]:  Caller-supplied arguments for private endpoints
[OUTPUT]: Request structs with exchange defaults and ordered parameter sets
[POS]:    Data layer - request definitions for signed endpoints
[UPDATE]: When endpoint parameters or their defaults change
*/

use rust_decimal::Decimal;

use super::enums::{OrderType, Side};
use super::params::ParameterSet;
use crate::http::{BitfinexError, Result};

/// POST /v1/mytrades
#[derive(Debug, Clone, PartialEq)]
pub struct MyTradesRequest {
    pub symbol: String,
    pub limit_trades: u32,
    /// Oldest first when set
    pub reverse: bool,
    pub timestamp: Option<String>,
    pub until: Option<String>,
}

impl MyTradesRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit_trades: 50,
            reverse: false,
            timestamp: None,
            until: None,
        }
    }

    pub fn into_params(self) -> ParameterSet {
        let mut params = ParameterSet::new()
            .with("symbol", self.symbol)
            .with("limit_trades", self.limit_trades)
            .with("reverse", u8::from(self.reverse));
        params.insert_opt("timestamp", self.timestamp);
        params.insert_opt("until", self.until);
        params
    }
}

impl Default for MyTradesRequest {
    fn default() -> Self {
        Self::new("BTCUSD")
    }
}

/// POST /v1/history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRequest {
    pub currency: String,
    /// "trading", "exchange" or "deposit"
    pub wallet: String,
    pub limit: u32,
    pub since: Option<String>,
    pub until: Option<String>,
}

impl HistoryRequest {
    pub fn new(currency: impl Into<String>, wallet: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            wallet: wallet.into(),
            limit: 500,
            since: None,
            until: None,
        }
    }

    pub fn into_params(self) -> ParameterSet {
        let mut params = ParameterSet::new()
            .with("currency", self.currency)
            .with("wallet", self.wallet)
            .with("limit", self.limit);
        params.insert_opt("since", self.since);
        params.insert_opt("until", self.until);
        params
    }
}

/// POST /v1/history/movements
#[derive(Debug, Clone, PartialEq)]
pub struct MovementsRequest {
    pub currency: String,
    pub method: String,
    pub limit: u32,
    pub since: Option<String>,
    pub until: Option<String>,
}

impl MovementsRequest {
    pub fn into_params(self) -> ParameterSet {
        let mut params = ParameterSet::new()
            .with("currency", self.currency)
            .with("method", self.method)
            .with("limit", self.limit);
        params.insert_opt("since", self.since);
        params.insert_opt("until", self.until);
        params
    }
}

impl Default for MovementsRequest {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            method: "bitcoin".to_string(),
            limit: 50,
            since: None,
            until: None,
        }
    }
}

/// POST /v1/deposit/new
#[derive(Debug, Clone, PartialEq)]
pub struct DepositRequest {
    pub method: String,
    pub wallet_name: String,
    /// Request a fresh address instead of the last one issued
    pub renew: bool,
}

impl DepositRequest {
    pub fn new(method: impl Into<String>, wallet_name: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            wallet_name: wallet_name.into(),
            renew: false,
        }
    }

    pub fn into_params(self) -> ParameterSet {
        ParameterSet::new()
            .with("method", self.method)
            .with("wallet_name", self.wallet_name)
            .with("renew", u8::from(self.renew))
    }
}

/// POST /v1/order/new and /v1/order/new/multi
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderRequest {
    pub symbol: String,
    pub amount: Decimal,
    pub price: Decimal,
    pub exchange: String,
    pub side: Side,
    pub order_type: OrderType,
    pub is_hidden: bool,
    pub is_postonly: bool,
    pub ocoorder: bool,
    pub buy_price_oco: Option<Decimal>,
}

impl NewOrderRequest {
    pub fn new(
        symbol: impl Into<String>,
        amount: Decimal,
        price: Decimal,
        side: Side,
        order_type: OrderType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            price,
            exchange: "bitfinex".to_string(),
            side,
            order_type,
            is_hidden: false,
            is_postonly: false,
            ocoorder: false,
            buy_price_oco: None,
        }
    }

    /// Attach a stop leg, turning this into an OCO order
    #[must_use]
    pub fn with_oco(mut self, buy_price_oco: Decimal) -> Self {
        self.ocoorder = true;
        self.buy_price_oco = Some(buy_price_oco);
        self
    }

    /// Parameters for `order/new`
    pub fn into_params(self) -> Result<ParameterSet> {
        let oco_price = match (self.ocoorder, self.buy_price_oco) {
            (true, None) => {
                return Err(BitfinexError::InvalidRequest(
                    "buy_price_oco is required when ocoorder is set".to_string(),
                ));
            }
            (true, Some(price)) => Some(price.to_string()),
            (false, _) => None,
        };

        let mut params = self.base_params();
        params.insert("is_hidden", self.is_hidden);
        params.insert("is_postonly", self.is_postonly);
        params.insert("ocoorder", self.ocoorder);
        params.insert_opt("buy_price_oco", oco_price);
        Ok(params)
    }

    /// Parameters for `order/new/multi`; flags and OCO leg are not sent
    pub fn into_multi_params(self) -> ParameterSet {
        self.base_params()
    }

    fn base_params(&self) -> ParameterSet {
        ParameterSet::new()
            .with("symbol", self.symbol.as_str())
            .with("amount", self.amount.to_string())
            .with("price", self.price.to_string())
            .with("exchange", self.exchange.as_str())
            .with("side", self.side.as_str())
            .with("type", self.order_type.as_str())
    }
}
