/*
[INPUT]:  Account query parameters and API credentials
[OUTPUT]: Normalized account data (info, trades, history, balances, deposits)
[POS]:    HTTP layer - signed account endpoints
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::{BitfinexClient, Result};
use crate::types::{
    DepositRequest, HistoryRequest, MovementsRequest, MyTradesRequest, NormalizedResponse,
    ParameterSet,
};

impl BitfinexClient {
    /// Fee tiers and account flags
    ///
    /// POST /v1/account_infos
    pub async fn account_info(&self) -> Result<NormalizedResponse> {
        self.call_private("account_infos", (), ParameterSet::new()).await
    }

    /// Own past trades for a symbol
    ///
    /// POST /v1/mytrades
    pub async fn my_trades(&self, req: MyTradesRequest) -> Result<NormalizedResponse> {
        self.call_private("mytrades", (), req.into_params()).await
    }

    /// Balance ledger for one currency and wallet
    ///
    /// POST /v1/history
    pub async fn history(&self, req: HistoryRequest) -> Result<NormalizedResponse> {
        self.call_private("history", (), req.into_params()).await
    }

    /// Deposits and withdrawals
    ///
    /// POST /v1/history/movements
    pub async fn history_movements(&self, req: MovementsRequest) -> Result<NormalizedResponse> {
        self.call_private("history", "movements", req.into_params()).await
    }

    /// 30-day volume and fee summary
    ///
    /// POST /v1/summary
    pub async fn summary(&self) -> Result<NormalizedResponse> {
        self.call_private("summary", (), ParameterSet::new()).await
    }

    /// Wallet balances
    ///
    /// POST /v1/balances
    pub async fn balances(&self) -> Result<NormalizedResponse> {
        self.call_private("balances", (), ParameterSet::new()).await
    }

    /// Deposit address for a method and wallet
    ///
    /// POST /v1/deposit/new
    pub async fn new_deposit(&self, req: DepositRequest) -> Result<NormalizedResponse> {
        self.call_private("deposit", "new", req.into_params()).await
    }
}
