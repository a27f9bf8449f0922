/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for the v1 response bodies
[POS]:    Data layer - optional typed views over normalized responses
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(with = "rust_decimal::serde::str")]
    pub mid: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bid: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ask: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub last_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

/// One entry of `stats/{symbol}`; `period` is in days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub period: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub timestamp: i64,
    pub tid: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub exchange: String,
    #[serde(rename = "type")]
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolDetail {
    pub pair: String,
    pub price_precision: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub initial_margin: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub minimum_margin: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub maximum_order_size: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub minimum_order_size: Decimal,
    pub expiration: String,
    #[serde(default)]
    pub margin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Wallet name: "trading", "exchange" or "deposit"
    #[serde(rename = "type")]
    pub wallet: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available: Decimal,
}

/// Order state as returned by `order/new` and `order/cancel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatus {
    /// Same id space as `cancel_order`
    pub id: u64,
    pub symbol: String,
    pub exchange: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub avg_execution_price: Decimal,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub timestamp: String,
    pub is_live: bool,
    pub is_cancelled: bool,
    pub is_hidden: bool,
    #[serde(default)]
    pub was_forced: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub original_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub remaining_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub executed_amount: Decimal,
}
