use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unlock time should be in the future")]
    InvalidSchedule {},

    #[error("You can't withdraw yet")]
    TooEarly {},

    #[error("You aren't the owner")]
    NotOwner {},

    #[error("Funds are only accepted when the lock is created")]
    FundsNotAllowed {},

    #[error("Transfer to owner failed: {reason}")]
    TransferFailure { reason: String },

    #[error("Unknown reply id {id}")]
    UnknownReply { id: u64 },
}
