use cosmwasm_std::{
    entry_point, to_binary, BankMsg, Binary, Coin, Deps, DepsMut, Env, Event, MessageInfo,
    Order, Reply, Response, StdResult, SubMsg, SubMsgResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    BalanceResponse, ExecuteMsg, InstantiateMsg, LockResponse, OwnerResponse, QueryMsg,
    UnlockTimeResponse, WithdrawalInfo, WithdrawalsResponse,
};
use crate::state::{record_withdrawal, Lock, Withdrawal, LOCK, WITHDRAWALS};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-timelock";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PAYOUT_REPLY_ID: u64 = 1;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if env.block.time.ge(&msg.unlock_time) {
        return Err(ContractError::InvalidSchedule {});
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let lock = Lock {
        owner: info.sender.clone(),
        unlock_time: msg.unlock_time,
    };
    LOCK.save(deps.storage, &lock)?;

    let res = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("unlock_time", msg.unlock_time.seconds().to_string())
        .add_attribute("deposit", coins_to_string(&info.funds));
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Withdraw {} => try_withdraw(deps, env, info),
    }
}

pub fn try_withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::FundsNotAllowed {});
    }

    let lock = LOCK.load(deps.storage)?;

    // time is checked before the caller
    if env.block.time.lt(&lock.unlock_time) {
        return Err(ContractError::TooEarly {});
    }
    if info.sender != lock.owner {
        return Err(ContractError::NotOwner {});
    }

    // drain everything the contract holds, not only the initial deposit
    let balance = deps
        .querier
        .query_all_balances(env.contract.address.to_string())?;

    let withdrawal = Withdrawal {
        amount: balance.clone(),
        timestamp: env.block.time,
    };
    record_withdrawal(deps.storage, &withdrawal)?;

    let event = Event::new("withdrawal")
        .add_attribute("amount", coins_to_string(&balance))
        .add_attribute("when", env.block.time.seconds().to_string());

    let mut res = Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("to", lock.owner.clone())
        .add_event(event);

    // a drained lock has nothing to send, and the bank rejects empty transfers
    if !balance.is_empty() {
        let bank_send = BankMsg::Send {
            to_address: lock.owner.into(),
            amount: balance,
        };
        res = res.add_submessage(SubMsg::reply_on_error(bank_send, PAYOUT_REPLY_ID));
    }

    Ok(res)
}

/// Turns a rejected payout into a contract error so the whole withdrawal,
/// audit log entry included, is reverted.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        PAYOUT_REPLY_ID => match msg.result {
            SubMsgResult::Err(reason) => Err(ContractError::TransferFailure { reason }),
            SubMsgResult::Ok(_) => Ok(Response::default()),
        },
        id => Err(ContractError::UnknownReply { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_binary(&query_owner(deps)?),
        QueryMsg::UnlockTime {} => to_binary(&query_unlock_time(deps)?),
        QueryMsg::Balance {} => to_binary(&query_balance(deps, &env)?),
        QueryMsg::Lock {} => to_binary(&query_lock(deps, &env)?),
        QueryMsg::Withdrawals { start_after, limit } => {
            to_binary(&query_withdrawals(deps, start_after, limit)?)
        }
    }
}

fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let lock = LOCK.load(deps.storage)?;
    Ok(OwnerResponse { owner: lock.owner })
}

fn query_unlock_time(deps: Deps) -> StdResult<UnlockTimeResponse> {
    let lock = LOCK.load(deps.storage)?;
    Ok(UnlockTimeResponse {
        unlock_time: lock.unlock_time,
    })
}

fn query_balance(deps: Deps, env: &Env) -> StdResult<BalanceResponse> {
    let balance = deps
        .querier
        .query_all_balances(env.contract.address.to_string())?;
    Ok(BalanceResponse { balance })
}

fn query_lock(deps: Deps, env: &Env) -> StdResult<LockResponse> {
    let lock = LOCK.load(deps.storage)?;
    let BalanceResponse { balance } = query_balance(deps, env)?;

    Ok(LockResponse {
        owner: lock.owner,
        unlock_time: lock.unlock_time,
        balance,
        unlocked: env.block.time.ge(&lock.unlock_time),
    })
}

fn query_withdrawals(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<WithdrawalsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let withdrawals: StdResult<Vec<_>> = WITHDRAWALS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (id, withdrawal) = item?;
            Ok(WithdrawalInfo {
                id,
                amount: withdrawal.amount,
                timestamp: withdrawal.timestamp,
            })
        })
        .collect();

    Ok(WithdrawalsResponse {
        withdrawals: withdrawals?,
    })
}

fn coins_to_string(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "0".to_string();
    }
    coins
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
