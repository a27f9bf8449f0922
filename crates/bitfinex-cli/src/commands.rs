/*
[INPUT]:  Parsed subcommand and a configured client
[OUTPUT]: Normalized API response for printing
[POS]:    Command dispatch - maps CLI subcommands to adapter calls
[UPDATE]: When adding new subcommands or endpoint arguments
*/

use bitfinex_adapter::{
    BitfinexClient, HistoryRequest, MovementsRequest, MyTradesRequest, NormalizedResponse,
    ParameterSet, Result,
};
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Last 24h ticker
    Ticker { symbol: String },
    /// Order book
    Book {
        symbol: String,
        #[arg(long)]
        limit_bids: Option<u32>,
        #[arg(long)]
        limit_asks: Option<u32>,
        /// Aggregate levels by price
        #[arg(long)]
        group: Option<bool>,
    },
    /// Volume statistics
    Stats { symbol: String },
    /// Public trades
    Trades {
        symbol: String,
        #[arg(long)]
        timestamp: Option<String>,
        #[arg(long)]
        limit_trades: Option<u32>,
    },
    Symbols,
    SymbolsDetails,
    /// Margin funding book
    LendBook {
        currency: String,
        #[arg(long)]
        limit_bids: Option<u32>,
        #[arg(long)]
        limit_asks: Option<u32>,
    },
    /// Funding history
    Lends {
        currency: String,
        #[arg(long)]
        timestamp: Option<String>,
        #[arg(long)]
        limit_lends: Option<u32>,
    },
    AccountInfo,
    Balances,
    Summary,
    /// Own trades for a symbol
    MyTrades {
        #[arg(default_value = "BTCUSD")]
        symbol: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
        #[arg(long)]
        reverse: bool,
    },
    /// Balance ledger
    History {
        currency: String,
        #[arg(long, default_value = "trading")]
        wallet: String,
        #[arg(long, default_value_t = 500)]
        limit: u32,
    },
    /// Deposits and withdrawals
    Movements {
        #[arg(default_value = "USD")]
        currency: String,
        #[arg(long, default_value = "bitcoin")]
        method: String,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    CancelOrder { order_id: u64 },
    CancelAll,
}

impl Command {
    /// Endpoint needs credentials
    pub fn is_private(&self) -> bool {
        matches!(
            self,
            Command::AccountInfo
                | Command::Balances
                | Command::Summary
                | Command::MyTrades { .. }
                | Command::History { .. }
                | Command::Movements { .. }
                | Command::CancelOrder { .. }
                | Command::CancelAll
        )
    }

    pub async fn run(self, client: &BitfinexClient) -> Result<NormalizedResponse> {
        match self {
            Command::Ticker { symbol } => client.ticker(&symbol).await,
            Command::Book {
                symbol,
                limit_bids,
                limit_asks,
                group,
            } => {
                let mut filters = ParameterSet::new();
                filters.insert_opt("limit_bids", limit_bids);
                filters.insert_opt("limit_asks", limit_asks);
                filters.insert_opt("group", group);
                client.order_book(&symbol, filters).await
            }
            Command::Stats { symbol } => client.stats(&symbol).await,
            Command::Trades {
                symbol,
                timestamp,
                limit_trades,
            } => {
                let mut filters = ParameterSet::new();
                filters.insert_opt("timestamp", timestamp);
                filters.insert_opt("limit_trades", limit_trades);
                client.trades(&symbol, filters).await
            }
            Command::Symbols => client.symbols().await,
            Command::SymbolsDetails => client.symbols_details().await,
            Command::LendBook {
                currency,
                limit_bids,
                limit_asks,
            } => {
                let mut filters = ParameterSet::new();
                filters.insert_opt("limit_bids", limit_bids);
                filters.insert_opt("limit_asks", limit_asks);
                client.lend_book(&currency, filters).await
            }
            Command::Lends {
                currency,
                timestamp,
                limit_lends,
            } => {
                let mut filters = ParameterSet::new();
                filters.insert_opt("timestamp", timestamp);
                filters.insert_opt("limit_lends", limit_lends);
                client.lends(&currency, filters).await
            }
            Command::AccountInfo => client.account_info().await,
            Command::Balances => client.balances().await,
            Command::Summary => client.summary().await,
            Command::MyTrades {
                symbol,
                limit,
                reverse,
            } => {
                let mut req = MyTradesRequest::new(symbol);
                req.limit_trades = limit;
                req.reverse = reverse;
                client.my_trades(req).await
            }
            Command::History {
                currency,
                wallet,
                limit,
            } => {
                let mut req = HistoryRequest::new(currency, wallet);
                req.limit = limit;
                client.history(req).await
            }
            Command::Movements {
                currency,
                method,
                limit,
            } => {
                let req = MovementsRequest {
                    currency,
                    method,
                    limit,
                    ..MovementsRequest::default()
                };
                client.history_movements(req).await
            }
            Command::CancelOrder { order_id } => client.cancel_order(order_id).await,
            Command::CancelAll => client.cancel_all_orders().await,
        }
    }
}
