use cosmwasm_std::{Uint128, Uint64};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{SalePhase, VestingSchedule};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct InstantiateMsg {
    pub sale: CreateSale,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub struct CreateSale {
    pub price_per_unit: Uint128, // stable base units per whole sold unit
    pub sale_amount: Uint128,    // sold base units offered
    pub sale_length: Uint64,     // duration in seconds
    pub lock_period: Uint64,     // duration in seconds
    pub vesting_period: Uint64,  // duration in seconds
    pub stable_denom: String,
    pub token_address: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    StartSale {},
    FinishSale {},
    BuyTokens {},
    WithdrawTokens { amount: Uint128 },
    WithdrawRemaining { to: String },
    WithdrawProceeds { to: String },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Phase {},
    Schedule { address: String },
    UnlockedAmount { address: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryResp {
    Phase(SalePhase),
    Schedule(Option<VestingSchedule>),
    UnlockedAmount(Uint128),
}
