use cosmwasm_std::{Addr, Deps, DepsMut, Env, MessageInfo, StdResult};
use cosmwasm_std::{Event, StdError};
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AdministrableError::Unauthorized;
use burnt_glue::module::Module;
use burnt_glue::response::Response;

pub const ADMIN_STATE: Item<Addr> = Item::new("admin");

pub struct Administrable<'a> {
    pub admin: Item<'a, Addr>,
}

impl<'a> Default for Administrable<'a> {
    fn default() -> Self {
        Self { admin: ADMIN_STATE }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct InstantiateMsg {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetAdmin(Addr),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    // IsAdmin returns true if the address matches the administrator
    IsAdmin(Addr),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryResp {
    IsAdmin(bool),
}

#[derive(Error, Debug)]
pub enum AdministrableError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},
}

impl<'a> Administrable<'a> {
    pub fn get_admin(&self, deps: &Deps) -> StdResult<Addr> {
        self.admin.load(deps.storage)
    }

    pub fn is_admin(&self, deps: &Deps, addr: &Addr) -> StdResult<bool> {
        self.admin.load(deps.storage).map(|admin| admin.eq(addr))
    }

    pub fn set_admin(&self, deps: &mut DepsMut, addr: &Addr) -> StdResult<()> {
        // validate Addr before saving
        deps.api.addr_validate(addr.as_str())?;
        self.admin.save(deps.storage, addr)
    }
}

impl<'a> Module for Administrable<'a> {
    type InstantiateMsg = InstantiateMsg;
    type ExecuteMsg = ExecuteMsg;
    type QueryMsg = QueryMsg;
    type QueryResp = QueryResp;
    type Error = AdministrableError;

    fn instantiate(
        &mut self,
        deps: &mut DepsMut,
        env: &Env,
        info: &MessageInfo,
        _: Self::InstantiateMsg,
    ) -> Result<Response, Self::Error> {
        self.admin.save(deps.storage, &info.sender)?;
        let resp = Response::new()
            .add_event(Event::new("administrable-instantiate"))
            .add_attributes(vec![
                ("contract_address", env.contract.address.to_string()),
                ("admin", info.sender.to_string()),
            ]);
        Ok(resp)
    }

    fn execute(
        &mut self,
        deps: &mut DepsMut,
        env: Env,
        info: MessageInfo,
        msg: Self::ExecuteMsg,
    ) -> Result<Response, Self::Error> {
        match msg {
            ExecuteMsg::SetAdmin(admin) => {
                // validate Addr before saving
                deps.api.addr_validate(admin.as_str())?;

                let loaded_admin = self.admin.load(deps.storage)?;
                if info.sender != loaded_admin {
                    Err(Unauthorized {})
                } else {
                    self.set_admin(deps, &admin)?;
                    let resp = Response::new().add_event(
                        Event::new("administrable-set_admin").add_attributes(vec![
                            ("contract_address", env.contract.address.to_string()),
                            ("admin", admin.to_string()),
                        ]),
                    );
                    Ok(resp)
                }
            }
        }
    }

    fn query(
        &self,
        deps: &Deps,
        _: Env,
        msg: Self::QueryMsg,
    ) -> Result<Self::QueryResp, Self::Error> {
        match msg {
            QueryMsg::IsAdmin(address) => {
                let loaded_admin = self.admin.load(deps.storage)?;
                let resp = QueryResp::IsAdmin(loaded_admin == address);
                Ok(resp)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};

    const ADMIN: &str = "cosmos188rjfzzrdxlus60zgnrvs4rg0l73hct3azv93z";
    const OTHER: &str = "burnt188rjfzzrdxlus60zgnrvs4rg0l73hct3mlvdpe";

    #[test]
    fn instantiate_sets_sender_as_admin() {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let info = mock_info(ADMIN, &[]);

        let mut administrable = Administrable::default();
        administrable
            .instantiate(&mut deps.as_mut(), &env, &info, InstantiateMsg {})
            .expect("administrable module instantiated");

        let resp = administrable
            .query(
                &deps.as_ref(),
                env.clone(),
                QueryMsg::IsAdmin(Addr::unchecked(ADMIN)),
            )
            .unwrap();
        assert_eq!(resp, QueryResp::IsAdmin(true));
        let resp = administrable
            .query(&deps.as_ref(), env, QueryMsg::IsAdmin(Addr::unchecked(OTHER)))
            .unwrap();
        assert_eq!(resp, QueryResp::IsAdmin(false));
    }

    #[test]
    fn only_admin_can_set_admin() {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let info = mock_info(ADMIN, &[]);

        let mut administrable = Administrable::default();
        administrable
            .instantiate(&mut deps.as_mut(), &env, &info, InstantiateMsg {})
            .unwrap();

        let other_info = mock_info(OTHER, &[]);
        administrable
            .execute(
                &mut deps.as_mut(),
                env.clone(),
                other_info,
                ExecuteMsg::SetAdmin(Addr::unchecked(OTHER)),
            )
            .expect_err("non-admin must not change the administrator");

        administrable
            .execute(
                &mut deps.as_mut(),
                env,
                info,
                ExecuteMsg::SetAdmin(Addr::unchecked(OTHER)),
            )
            .expect("admin handover");
        assert_eq!(
            administrable.get_admin(&deps.as_ref()).unwrap(),
            Addr::unchecked(OTHER)
        );
    }
}
