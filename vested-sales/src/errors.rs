use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Wrong Sale Phase: expected {expected}, found {actual}")]
    WrongPhase {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Sale Not Yet Ended")]
    SaleNotYetEnded,

    #[error("Insufficient Amount")]
    InsufficientAmount,

    #[error("Too Many Requested")]
    TooManyRequested,

    #[error("Not Enough Unlocked")]
    NotEnoughUnlocked,

    #[error("Still Locked")]
    StillLocked,

    #[error("No Vesting Schedule")]
    NoSchedule,

    #[error("Multiple Funds")]
    MultipleFunds,

    #[error("Wrong Fund Denom")]
    WrongFund,

    #[error("Invalid Sale Param: {0}")]
    InvalidSaleParam(String),
}
