/*
[INPUT]:  API key/secret from the environment and order parameters
[OUTPUT]: Balances and order confirmations
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use bitfinex_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Signed account and order calls
///
/// Reads BFX_API_KEY / BFX_API_SECRET. Nothing is submitted unless
/// BFX_PLACE_ORDER=1 is also set.
#[tokio::main]
async fn main() {
    println!("=== Bitfinex Trading Example ===\n");

    let (key, secret) = match (std::env::var("BFX_API_KEY"), std::env::var("BFX_API_SECRET")) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            eprintln!("Set BFX_API_KEY and BFX_API_SECRET to run this example");
            return;
        }
    };

    let credentials = match Credentials::try_new(key, secret) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid credentials: {}", e);
            return;
        }
    };
    let client = match BitfinexClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    println!("\nQuerying balances...");
    match client.balances().await {
        Ok(response) => match response.parse::<Vec<Balance>>() {
            Ok(balances) => {
                for balance in balances {
                    println!(
                        "  {} {}: {} available",
                        balance.wallet, balance.currency, balance.available
                    );
                }
            }
            Err(_) => println!("✗ {}", response.into_value()),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    let order_req = NewOrderRequest::new(
        "BTCUSD",
        Decimal::from_str("0.001").unwrap_or_default(),
        Decimal::from_str("1000").unwrap_or_default(),
        Side::Buy,
        OrderType::ExchangeLimit,
    );
    println!("\nExample order request:\n  {:?}", order_req);

    if std::env::var("BFX_PLACE_ORDER").as_deref() != Ok("1") {
        println!("\n✓ Trading example complete (order not submitted)");
        return;
    }

    match client.new_order(order_req).await {
        Ok(response) => match response.parse::<OrderStatus>() {
            Ok(order) => {
                println!("✓ Order {} placed", order.id);
                match client.cancel_order(order.id).await {
                    Ok(cancel) => println!("✓ Cancelled: {}", cancel.into_value()),
                    Err(e) => println!("✗ Cancel failed: {}", e),
                }
            }
            Err(_) => println!("✗ Rejected: {}", response.into_value()),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
