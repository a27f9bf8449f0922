/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Transport shape of a call: unsigned GET or signed POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    Public,
    Private,
}

impl RequestMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMode::Public => "public",
            RequestMode::Private => "private",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

/// Order types accepted by `order/new`.
///
/// Margin types have no prefix; the `exchange ...` variants trade the
/// exchange wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "market")]
    Market,
    #[serde(rename = "limit")]
    Limit,
    #[serde(rename = "stop")]
    Stop,
    #[serde(rename = "trailing-stop")]
    TrailingStop,
    #[serde(rename = "fill-or-kill")]
    FillOrKill,
    #[serde(rename = "exchange market")]
    ExchangeMarket,
    #[serde(rename = "exchange limit")]
    ExchangeLimit,
    #[serde(rename = "exchange stop")]
    ExchangeStop,
    #[serde(rename = "exchange trailing-stop")]
    ExchangeTrailingStop,
    #[serde(rename = "exchange fill-or-kill")]
    ExchangeFillOrKill,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "market",
            OrderType::Limit => "limit",
            OrderType::Stop => "stop",
            OrderType::TrailingStop => "trailing-stop",
            OrderType::FillOrKill => "fill-or-kill",
            OrderType::ExchangeMarket => "exchange market",
            OrderType::ExchangeLimit => "exchange limit",
            OrderType::ExchangeStop => "exchange stop",
            OrderType::ExchangeTrailingStop => "exchange trailing-stop",
            OrderType::ExchangeFillOrKill => "exchange fill-or-kill",
        }
    }
}
