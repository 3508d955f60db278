use cosmwasm_std::{Deps, Env};

use crate::{errors::ContractError, msg::QueryResp, Sales};

impl<'a> Sales<'a> {
    pub fn phase(&self, deps: &Deps) -> Result<QueryResp, ContractError> {
        let sale = self.sale.load(deps.storage)?;
        Ok(QueryResp::Phase(sale.phase))
    }

    pub fn schedule(&self, deps: &Deps, address: String) -> Result<QueryResp, ContractError> {
        let addr = deps.api.addr_validate(&address)?;
        let schedule = self.schedules.may_load(deps.storage, &addr)?;
        Ok(QueryResp::Schedule(schedule))
    }

    pub fn unlocked_amount(
        &self,
        deps: &Deps,
        env: Env,
        address: String,
    ) -> Result<QueryResp, ContractError> {
        let addr = deps.api.addr_validate(&address)?;
        let schedule = self
            .schedules
            .may_load(deps.storage, &addr)?
            .ok_or(ContractError::NoSchedule)?;
        let unlocked = schedule.unlocked_amount(env.block.time)?;
        Ok(QueryResp::UnlockedAmount(unlocked))
    }
}
