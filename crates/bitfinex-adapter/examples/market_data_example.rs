/*
[INPUT]:  Symbol identifier (e.g., "BTCUSD")
[OUTPUT]: Market data (ticker, book, stats, symbols)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use bitfinex_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== Bitfinex Market Data Example ===\n");

    let client = match BitfinexClient::public() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let symbol = "BTCUSD";

    println!("Querying ticker for {}...", symbol);
    match client.ticker(symbol).await {
        Ok(response) => match response.parse::<Ticker>() {
            Ok(ticker) => println!(
                "✓ Last price: {} (bid {} / ask {})",
                ticker.last_price, ticker.bid, ticker.ask
            ),
            Err(_) => println!("✗ Unexpected body: {}", response.into_value()),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying top of book for {}...", symbol);
    let filters = ParameterSet::new().with("limit_bids", 5).with("limit_asks", 5);
    match client.order_book(symbol, filters).await {
        Ok(response) => println!("✓ Book: {}", response.into_value()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying volume stats for {}...", symbol);
    match client.stats(symbol).await {
        Ok(response) => println!("✓ Stats: {}", response.into_value()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying symbol list...");
    match client.symbols().await {
        Ok(response) => println!("✓ Symbols: {}", response.into_value()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
