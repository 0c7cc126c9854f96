use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Coin, StdResult, Storage, Timestamp};
use cw_storage_plus::{Item, Map};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Lock {
    pub owner: Addr,
    pub unlock_time: Timestamp,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Withdrawal {
    pub amount: Vec<Coin>,
    pub timestamp: Timestamp,
}

pub const LOCK: Item<Lock> = Item::new("lock");
pub const WITHDRAWAL_COUNT: Item<u64> = Item::new("withdrawal_count");
pub const WITHDRAWALS: Map<u64, Withdrawal> = Map::new("withdrawals");

/// Appends a withdrawal to the audit log and returns its sequence number.
pub fn record_withdrawal(storage: &mut dyn Storage, withdrawal: &Withdrawal) -> StdResult<u64> {
    let seq = WITHDRAWAL_COUNT.may_load(storage)?.unwrap_or_default();
    WITHDRAWALS.save(storage, seq, withdrawal)?;
    WITHDRAWAL_COUNT.save(storage, &(seq + 1))?;
    Ok(seq)
}
