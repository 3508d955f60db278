use cosmwasm_std::{Addr, StdError, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ContractError;

/// Base-unit scale of the sold asset (18 decimals).
pub const UNIT_SCALE: u128 = 1_000_000_000_000_000_000;
/// Smallest accepted purchase: one whole stable unit.
pub const MIN_PURCHASE: u128 = 1_000_000_000_000_000_000;

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct SaleConfig {
    pub price_per_unit: Uint128, // stable base units per whole sold unit
    pub sale_amount: Uint128,    // sold base units offered
    pub sale_length: u64,        // seconds
    pub lock_period: u64,        // seconds
    pub vesting_period: u64,     // seconds
    pub stable_denom: String,
    pub token_address: Addr,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SalePhase {
    Pending,
    Started { sale_end: Timestamp },
    Finished,
}

impl SalePhase {
    pub fn label(&self) -> &'static str {
        match self {
            SalePhase::Pending => "pending",
            SalePhase::Started { .. } => "started",
            SalePhase::Finished => "finished",
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct SaleState {
    pub phase: SalePhase,
    pub units_remaining: Uint128, // sold base units still unsold
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct VestingSchedule {
    pub total_allocated: Uint128,
    pub units_remaining: Uint128,
    pub unlock_start: Timestamp,
    pub unlock_end: Timestamp,
}

impl VestingSchedule {
    /// Raw linear unlock at `now`. Deliberately uncapped past `unlock_end`;
    /// callers clamp against `units_remaining`.
    pub fn unlocked_amount(&self, now: Timestamp) -> Result<Uint128, ContractError> {
        if now < self.unlock_start {
            return Err(ContractError::StillLocked);
        }
        let vesting = self.unlock_end.seconds() - self.unlock_start.seconds();
        let rate = self
            .total_allocated
            .checked_div(Uint128::from(vesting))
            .map_err(StdError::divide_by_zero)?;
        let elapsed = now.seconds() - self.unlock_start.seconds();
        Ok(rate
            .checked_mul(Uint128::from(elapsed))
            .map_err(StdError::overflow)?)
    }
}

pub const SALE_CONFIG: Item<SaleConfig> = Item::new("sale_config");
pub const SALE_STATE: Item<SaleState> = Item::new("sale_state");
pub const SCHEDULES: Map<&Addr, VestingSchedule> = Map::new("schedules");
