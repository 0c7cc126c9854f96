use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Timestamp};

#[cw_serde]
pub struct InstantiateMsg {
    /// Funds stay locked until this time. Must be later than the current block time
    pub unlock_time: Timestamp,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Send the whole balance to the owner once the unlock time is reached
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerResponse)]
    Owner {},
    #[returns(UnlockTimeResponse)]
    UnlockTime {},
    /// Native coins currently held by the contract
    #[returns(BalanceResponse)]
    Balance {},
    /// Owner, unlock time and balance in one response
    #[returns(LockResponse)]
    Lock {},
    /// Successful withdrawals, oldest first
    #[returns(WithdrawalsResponse)]
    Withdrawals {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct UnlockTimeResponse {
    pub unlock_time: Timestamp,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Vec<Coin>,
}

#[cw_serde]
pub struct LockResponse {
    pub owner: Addr,
    pub unlock_time: Timestamp,
    pub balance: Vec<Coin>,
    /// true once the current block time has reached the unlock time
    pub unlocked: bool,
}

#[cw_serde]
pub struct WithdrawalInfo {
    pub id: u64,
    pub amount: Vec<Coin>,
    pub timestamp: Timestamp,
}

#[cw_serde]
pub struct WithdrawalsResponse {
    pub withdrawals: Vec<WithdrawalInfo>,
}
