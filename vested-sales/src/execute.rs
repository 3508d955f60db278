use std::{cell::RefCell, rc::Rc};

use administrable::Administrable;
use burnt_glue::response::Response;
use cosmwasm_std::{
    to_binary, Addr, BankMsg, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo, StdError, Uint128,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::{Item, Map};

use crate::{
    errors::ContractError,
    msg::CreateSale,
    state::{SaleConfig, SalePhase, SaleState, VestingSchedule, MIN_PURCHASE, UNIT_SCALE},
    Sales,
};

impl<'a> Sales<'a> {
    pub fn new(
        administrable: Rc<RefCell<Administrable<'a>>>,
        config: Item<'a, SaleConfig>,
        sale: Item<'a, SaleState>,
        schedules: Map<'a, &'a Addr, VestingSchedule>,
    ) -> Self {
        Self {
            administrable,
            config,
            sale,
            schedules,
        }
    }

    pub fn create_sale(
        &mut self,
        msg: CreateSale,
        deps: &mut DepsMut,
        env: &Env,
        info: &MessageInfo,
    ) -> Result<Response, ContractError> {
        // basic validation on CreateSale struct
        if msg.sale_amount.is_zero() {
            return Err(ContractError::InvalidSaleParam("sale amount".to_string()));
        }
        if msg.price_per_unit.is_zero() {
            return Err(ContractError::InvalidSaleParam("price per unit".to_string()));
        }
        if msg.vesting_period.is_zero() {
            return Err(ContractError::InvalidSaleParam(
                "vesting period".to_string(),
            ));
        }
        let config = SaleConfig {
            price_per_unit: msg.price_per_unit,
            sale_amount: msg.sale_amount,
            sale_length: msg.sale_length.u64(),
            lock_period: msg.lock_period.u64(),
            vesting_period: msg.vesting_period.u64(),
            stable_denom: msg.stable_denom,
            token_address: deps.api.addr_validate(&msg.token_address)?,
        };
        self.config.save(deps.storage, &config)?;
        self.sale.save(
            deps.storage,
            &SaleState {
                phase: SalePhase::Pending,
                units_remaining: config.sale_amount,
            },
        )?;
        Ok(Response::new().add_event(
            Event::new("sales-created").add_attributes(vec![
                ("by", info.sender.to_string()),
                ("contract_address", env.contract.address.to_string()),
                ("sale_amount", config.sale_amount.to_string()),
                ("price_per_unit", config.price_per_unit.to_string()),
            ]),
        ))
    }

    pub fn start_sale(
        &mut self,
        deps: &mut DepsMut,
        env: Env,
        info: &MessageInfo,
    ) -> Result<Response, ContractError> {
        assert_admin(&deps.as_ref(), info, &self.administrable.borrow())?;
        let mut sale = self.sale.load(deps.storage)?;
        match &sale.phase {
            SalePhase::Pending => {}
            phase => {
                return Err(ContractError::WrongPhase {
                    expected: "pending",
                    actual: phase.label(),
                })
            }
        }
        let config = self.config.load(deps.storage)?;
        let sale_end = env.block.time.plus_seconds(config.sale_length);
        sale.phase = SalePhase::Started { sale_end };
        self.sale.save(deps.storage, &sale)?;
        Ok(Response::new().add_event(
            Event::new("sales-started").add_attributes(vec![
                ("by", info.sender.to_string()),
                ("contract_address", env.contract.address.to_string()),
                ("sale_end", sale_end.seconds().to_string()),
            ]),
        ))
    }

    pub fn finish_sale(
        &mut self,
        deps: &mut DepsMut,
        env: Env,
        info: &MessageInfo,
    ) -> Result<Response, ContractError> {
        assert_admin(&deps.as_ref(), info, &self.administrable.borrow())?;
        let mut sale = self.sale.load(deps.storage)?;
        let sale_end = match &sale.phase {
            SalePhase::Started { sale_end } => *sale_end,
            phase => {
                return Err(ContractError::WrongPhase {
                    expected: "started",
                    actual: phase.label(),
                })
            }
        };
        if env.block.time < sale_end {
            return Err(ContractError::SaleNotYetEnded);
        }
        sale.phase = SalePhase::Finished;
        self.sale.save(deps.storage, &sale)?;
        Ok(Response::new().add_event(
            Event::new("sales-finished").add_attributes(vec![
                ("by", info.sender.to_string()),
                ("contract_address", env.contract.address.to_string()),
                ("units_remaining", sale.units_remaining.to_string()),
            ]),
        ))
    }

    pub fn buy_tokens(
        &mut self,
        deps: &mut DepsMut,
        env: Env,
        info: MessageInfo,
    ) -> Result<Response, ContractError> {
        let mut sale = self.sale.load(deps.storage)?;
        match &sale.phase {
            SalePhase::Started { .. } => {}
            phase => {
                return Err(ContractError::WrongPhase {
                    expected: "started",
                    actual: phase.label(),
                })
            }
        }
        let config = self.config.load(deps.storage)?;
        if info.funds.len() != 1 {
            return Err(ContractError::MultipleFunds);
        }
        let tendered = &info.funds[0];
        if tendered.denom != config.stable_denom {
            return Err(ContractError::WrongFund);
        }
        if tendered.amount.u128() < MIN_PURCHASE {
            return Err(ContractError::InsufficientAmount);
        }
        // floor(tendered / price) whole units, scaled back to base units
        let whole_units = tendered
            .amount
            .checked_div(config.price_per_unit)
            .map_err(StdError::divide_by_zero)?;
        let allocated = whole_units
            .checked_mul(Uint128::from(UNIT_SCALE))
            .map_err(StdError::overflow)?;
        let unlock_start = env.block.time.plus_seconds(config.lock_period);
        let unlock_end = unlock_start.plus_seconds(config.vesting_period);
        // a repeat purchase replaces the previous schedule outright
        let schedule = VestingSchedule {
            total_allocated: allocated,
            units_remaining: allocated,
            unlock_start,
            unlock_end,
        };
        self.schedules.save(deps.storage, &info.sender, &schedule)?;
        sale.units_remaining = sale
            .units_remaining
            .checked_sub(allocated)
            .map_err(StdError::overflow)?;
        self.sale.save(deps.storage, &sale)?;
        Ok(Response::new().add_event(
            Event::new("sales-tokens_bought").add_attributes(vec![
                ("contract_address", env.contract.address.to_string()),
                ("by", info.sender.to_string()),
                ("tendered", tendered.amount.to_string()),
                ("allocated", allocated.to_string()),
                ("units_remaining", sale.units_remaining.to_string()),
            ]),
        ))
    }

    pub fn withdraw_tokens(
        &mut self,
        deps: &mut DepsMut,
        env: Env,
        info: MessageInfo,
        amount: Uint128,
    ) -> Result<Response, ContractError> {
        let mut schedule = self
            .schedules
            .may_load(deps.storage, &info.sender)?
            .ok_or(ContractError::NoSchedule)?;
        if amount > schedule.units_remaining {
            return Err(ContractError::TooManyRequested);
        }
        let unlocked = schedule.unlocked_amount(env.block.time)?;
        // the entire remaining balance must have unlocked, not just `amount`
        if unlocked < schedule.units_remaining {
            return Err(ContractError::NotEnoughUnlocked);
        }
        // the decrement quantity is the remaining balance, which zeroes it
        let withdrawn = schedule.units_remaining;
        schedule.units_remaining -= withdrawn;
        self.schedules.save(deps.storage, &info.sender, &schedule)?;
        let config = self.config.load(deps.storage)?;
        let transfer = WasmMsg::Execute {
            contract_addr: config.token_address.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Transfer {
                recipient: info.sender.to_string(),
                amount,
            })?,
            funds: vec![],
        };
        Ok(Response::new()
            .add_message(CosmosMsg::Wasm(transfer))
            .add_event(Event::new("sales-tokens_withdrawn").add_attributes(vec![
                ("contract_address", env.contract.address.to_string()),
                ("to", info.sender.to_string()),
                ("amount", amount.to_string()),
            ])))
    }

    pub fn withdraw_remaining(
        &mut self,
        deps: &mut DepsMut,
        env: Env,
        info: &MessageInfo,
        to: String,
    ) -> Result<Response, ContractError> {
        assert_admin(&deps.as_ref(), info, &self.administrable.borrow())?;
        let sale = self.sale.load(deps.storage)?;
        match &sale.phase {
            SalePhase::Finished => {}
            phase => {
                return Err(ContractError::WrongPhase {
                    expected: "finished",
                    actual: phase.label(),
                })
            }
        }
        let config = self.config.load(deps.storage)?;
        let recipient = deps.api.addr_validate(&to)?;
        // units_remaining is left untouched; custody at the token contract
        // bounds what a repeated sweep can actually move
        let transfer = WasmMsg::Execute {
            contract_addr: config.token_address.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: sale.units_remaining,
            })?,
            funds: vec![],
        };
        Ok(Response::new()
            .add_message(CosmosMsg::Wasm(transfer))
            .add_event(Event::new("sales-remaining_withdrawn").add_attributes(vec![
                ("contract_address", env.contract.address.to_string()),
                ("to", recipient.to_string()),
                ("amount", sale.units_remaining.to_string()),
            ])))
    }

    pub fn withdraw_proceeds(
        &mut self,
        deps: &mut DepsMut,
        env: Env,
        info: &MessageInfo,
        to: String,
    ) -> Result<Response, ContractError> {
        assert_admin(&deps.as_ref(), info, &self.administrable.borrow())?;
        let sale = self.sale.load(deps.storage)?;
        match &sale.phase {
            SalePhase::Finished => {}
            phase => {
                return Err(ContractError::WrongPhase {
                    expected: "finished",
                    actual: phase.label(),
                })
            }
        }
        let config = self.config.load(deps.storage)?;
        let recipient = deps.api.addr_validate(&to)?;
        let collected = deps
            .querier
            .query_balance(env.contract.address.clone(), config.stable_denom)?;
        let message = BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![collected.clone()],
        };
        Ok(Response::new()
            .add_message(CosmosMsg::Bank(message))
            .add_event(Event::new("sales-proceeds_withdrawn").add_attributes(vec![
                ("contract_address", env.contract.address.to_string()),
                ("to", recipient.to_string()),
                ("amount", collected.amount.to_string()),
                ("denom", collected.denom),
            ])))
    }
}

fn assert_admin(
    deps: &Deps,
    info: &MessageInfo,
    administrable: &Administrable,
) -> Result<(), ContractError> {
    if administrable.is_admin(deps, &info.sender)? {
        return Ok(());
    }
    Err(ContractError::Unauthorized)
}
