pub mod errors;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

use std::{cell::RefCell, rc::Rc};

use administrable::Administrable;
use cw_storage_plus::{Item, Map};

use cosmwasm_std::{Addr, Deps, DepsMut, Env, MessageInfo};
use errors::ContractError;
use msg::{ExecuteMsg, InstantiateMsg, QueryMsg, QueryResp};

use burnt_glue::module::Module;
use burnt_glue::response::Response;
use state::{SaleConfig, SaleState, VestingSchedule, SALE_CONFIG, SALE_STATE, SCHEDULES};

pub struct Sales<'a> {
    pub administrable: Rc<RefCell<Administrable<'a>>>,
    pub config: Item<'a, SaleConfig>,
    pub sale: Item<'a, SaleState>,
    pub schedules: Map<'a, &'a Addr, VestingSchedule>,
}

impl<'a> Default for Sales<'a> {
    fn default() -> Self {
        Self {
            administrable: Rc::new(RefCell::new(Administrable::default())),
            config: SALE_CONFIG,
            sale: SALE_STATE,
            schedules: SCHEDULES,
        }
    }
}

impl<'a> Module for Sales<'a> {
    type InstantiateMsg = InstantiateMsg;
    type ExecuteMsg = ExecuteMsg;
    type QueryMsg = QueryMsg;
    type QueryResp = QueryResp;
    type Error = ContractError;

    fn instantiate(
        &mut self,
        deps: &mut DepsMut,
        env: &Env,
        info: &MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, Self::Error> {
        self.create_sale(msg.sale, deps, env, info)
    }

    fn execute(
        &mut self,
        deps: &mut DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, Self::Error> {
        match msg {
            ExecuteMsg::StartSale {} => self.start_sale(deps, env, &info),

            ExecuteMsg::FinishSale {} => self.finish_sale(deps, env, &info),

            ExecuteMsg::BuyTokens {} => self.buy_tokens(deps, env, info),

            ExecuteMsg::WithdrawTokens { amount } => self.withdraw_tokens(deps, env, info, amount),

            ExecuteMsg::WithdrawRemaining { to } => self.withdraw_remaining(deps, env, &info, to),

            ExecuteMsg::WithdrawProceeds { to } => self.withdraw_proceeds(deps, env, &info, to),
        }
    }

    fn query(&self, deps: &Deps, env: Env, msg: QueryMsg) -> Result<Self::QueryResp, Self::Error> {
        match msg {
            QueryMsg::Phase {} => self.phase(deps),
            QueryMsg::Schedule { address } => self.schedule(deps, address),
            QueryMsg::UnlockedAmount { address } => self.unlocked_amount(deps, env, address),
        }
    }
}
