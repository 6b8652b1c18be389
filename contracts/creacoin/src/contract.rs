//! CREACoin Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_approve, execute_mint, execute_set_mint_amount, execute_set_mint_delay,
    execute_transfer, execute_transfer_from,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allowance, query_balance, query_decimals, query_faucet_config, query_mint_status,
    query_name, query_owner, query_symbol, query_token_info, query_total_supply,
};
use crate::state::{
    FaucetConfig, BALANCES, CONTRACT_NAME, CONTRACT_VERSION, FAUCET_CONFIG, INITIAL_SUPPLY, OWNER,
    TOTAL_SUPPLY,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = info.sender;
    let initial_supply = Uint128::new(INITIAL_SUPPLY);

    OWNER.save(deps.storage, &owner)?;
    BALANCES.save(deps.storage, &owner, &initial_supply)?;
    TOTAL_SUPPLY.save(deps.storage, &initial_supply)?;

    // Faucet starts disabled
    FAUCET_CONFIG.save(deps.storage, &FaucetConfig::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("total_supply", initial_supply))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Token
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),

        // Faucet
        ExecuteMsg::SetMintAmount { amount } => execute_set_mint_amount(deps, info, amount),
        ExecuteMsg::SetMintDelay { seconds } => execute_set_mint_delay(deps, info, seconds),
        ExecuteMsg::Mint { recipient } => execute_mint(deps, env, info, recipient),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Token queries
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Name {} => to_json_binary(&query_name()),
        QueryMsg::Symbol {} => to_json_binary(&query_symbol()),
        QueryMsg::Decimals {} => to_json_binary(&query_decimals()),
        QueryMsg::TotalSupply {} => to_json_binary(&query_total_supply(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }

        // Faucet queries
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::FaucetConfig {} => to_json_binary(&query_faucet_config(deps)?),
        QueryMsg::MintStatus { address } => {
            to_json_binary(&query_mint_status(deps, env, address)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if FAUCET_CONFIG.may_load(deps.storage)?.is_none() {
        FAUCET_CONFIG.save(deps.storage, &FaucetConfig::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{from_json, Addr, Order, OwnedDeps};
    use cw20::BalanceResponse;

    use crate::cooldown::MintState;
    use crate::msg::{FaucetConfigResponse, MintStatusResponse};
    use crate::state::{TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};

    const OWNER_ADDR: &str = "terra1owner";
    const USER_ADDR: &str = "terra1user";

    fn setup() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info(OWNER_ADDR, &[]),
            InstantiateMsg {},
        )
        .unwrap();
        deps
    }

    fn sum_of_balances(deps: Deps) -> Uint128 {
        BALANCES
            .range(deps.storage, None, None, Order::Ascending)
            .map(|item| item.unwrap().1)
            .fold(Uint128::zero(), |acc, balance| acc + balance)
    }

    #[test]
    fn test_instantiate() {
        let deps = setup();

        let owner = OWNER.load(&deps.storage).unwrap();
        assert_eq!(owner, Addr::unchecked(OWNER_ADDR));

        let total = TOTAL_SUPPLY.load(&deps.storage).unwrap();
        assert_eq!(total, Uint128::new(1_000 * 10u128.pow(18)));
        assert_eq!(sum_of_balances(deps.as_ref()), total);

        let config = FAUCET_CONFIG.load(&deps.storage).unwrap();
        assert_eq!(config, FaucetConfig::default());
        assert!(!config.is_enabled());

        let version = cw2::get_contract_version(&deps.storage).unwrap();
        assert_eq!(version.contract, CONTRACT_NAME);
    }

    #[test]
    fn test_query_metadata() {
        let deps = setup();

        let info: cw20::TokenInfoResponse = from_json(
            query(deps.as_ref(), mock_env(), QueryMsg::TokenInfo {}).unwrap(),
        )
        .unwrap();
        assert_eq!(info.name, TOKEN_NAME);
        assert_eq!(info.symbol, TOKEN_SYMBOL);
        assert_eq!(info.decimals, TOKEN_DECIMALS);
        assert_eq!(info.total_supply, Uint128::new(INITIAL_SUPPLY));
    }

    #[test]
    fn test_mint_updates_supply_and_status() {
        let mut deps = setup();
        let env = mock_env();

        execute(
            deps.as_mut(),
            env.clone(),
            mock_info(OWNER_ADDR, &[]),
            ExecuteMsg::SetMintAmount {
                amount: Uint128::new(1000),
            },
        )
        .unwrap();
        execute(
            deps.as_mut(),
            env.clone(),
            mock_info(OWNER_ADDR, &[]),
            ExecuteMsg::SetMintDelay { seconds: 60 },
        )
        .unwrap();

        // A third party triggers the mint for the user
        let res = execute(
            deps.as_mut(),
            env.clone(),
            mock_info("terra1anyone", &[]),
            ExecuteMsg::Mint {
                recipient: USER_ADDR.to_string(),
            },
        )
        .unwrap();
        assert!(res
            .attributes
            .iter()
            .any(|a| a.key == "method" && a.value == "mint"));

        let balance: BalanceResponse = from_json(
            query(
                deps.as_ref(),
                env.clone(),
                QueryMsg::Balance {
                    address: USER_ADDR.to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(balance.balance, Uint128::new(1000));
        assert_eq!(
            sum_of_balances(deps.as_ref()),
            TOTAL_SUPPLY.load(&deps.storage).unwrap()
        );

        let status: MintStatusResponse = from_json(
            query(
                deps.as_ref(),
                env.clone(),
                QueryMsg::MintStatus {
                    address: USER_ADDR.to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        let now = env.block.time.seconds();
        assert_eq!(status.state, MintState::Cooldown);
        assert_eq!(status.last_mint, Some(now));
        assert_eq!(status.mintable_at, Some(now + 60));

        let config: FaucetConfigResponse =
            from_json(query(deps.as_ref(), env, QueryMsg::FaucetConfig {}).unwrap()).unwrap();
        assert!(config.enabled);
        assert_eq!(config.mint_delay, 60);
    }

    #[test]
    fn test_failed_mint_does_not_mutate() {
        let mut deps = setup();
        let env = mock_env();

        let err = execute(
            deps.as_mut(),
            env,
            mock_info(OWNER_ADDR, &[]),
            ExecuteMsg::Mint {
                recipient: USER_ADDR.to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::MintingDisabled);

        let user = Addr::unchecked(USER_ADDR);
        assert!(BALANCES.may_load(&deps.storage, &user).unwrap().is_none());
        assert!(crate::state::LAST_MINT
            .may_load(&deps.storage, &user)
            .unwrap()
            .is_none());
        assert_eq!(
            TOTAL_SUPPLY.load(&deps.storage).unwrap(),
            Uint128::new(INITIAL_SUPPLY)
        );
    }

    #[test]
    fn test_migrate_backfills_faucet_config() {
        let mut deps = setup();
        FAUCET_CONFIG.remove(deps.as_mut().storage);

        migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap();

        assert_eq!(
            FAUCET_CONFIG.load(&deps.storage).unwrap(),
            FaucetConfig::default()
        );
    }
}
