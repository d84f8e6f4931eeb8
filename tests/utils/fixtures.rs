/// Deployment fixture wiring every contract of the sale together
use contribution_oracle::{ContributionOracleContract, ContributionOracleContractClient};
use sale_token::{SaleToken, SaleTokenClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{token, vec, Address, Env, String};
use token_sale::{PricingTier, SaleParams, TokenSaleContract, TokenSaleContractClient};

use super::constants::*;

pub struct SaleDeployment<'a> {
    pub env: Env,
    pub owner: Address,
    pub treasury: Address,
    pub sale: TokenSaleContractClient<'a>,
    pub token: SaleTokenClient<'a>,
    pub oracle: ContributionOracleContractClient<'a>,
    pub payment_id: Address,
    pub payment: token::Client<'a>,
}

impl<'a> SaleDeployment<'a> {
    /// Deploy with the reference schedule: one bonus tier, then the base rate
    pub fn new() -> Self {
        Self::with_start(0)
    }

    pub fn with_start(start_time: u64) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let owner = Address::generate(&env);
        let treasury = Address::generate(&env);

        let sale_id = env.register_contract(None, TokenSaleContract);
        let sale = TokenSaleContractClient::new(&env, &sale_id);

        // The sale owns the ledger for as long as it is open
        let token_id = env.register_contract(None, SaleToken);
        let token = SaleTokenClient::new(&env, &token_id);
        token.initialize(
            &sale_id,
            &7u32,
            &String::from_str(&env, "Sale Token"),
            &String::from_str(&env, "SALE"),
        );

        let oracle_id = env.register_contract(None, ContributionOracleContract);
        let oracle = ContributionOracleContractClient::new(&env, &oracle_id);
        oracle.initialize(&owner, &MAX_CONTRIBUTION);

        let payment_id = env
            .register_stellar_asset_contract_v2(owner.clone())
            .address();

        let params = SaleParams {
            token: token_id,
            payment_token: payment_id.clone(),
            funds_recipient: treasury.clone(),
            oracle: oracle_id,
            rate: BASE_RATE,
            cap: CAP,
            start_time,
            min_contribution: 1,
        };
        let tiers = vec![
            &env,
            PricingTier {
                threshold: FIRST_TIER_THRESHOLD,
                rate: FIRST_TIER_RATE,
            },
        ];
        sale.initialize(&owner, &params, &tiers);

        Self {
            payment: token::Client::new(&env, &payment_id),
            env,
            owner,
            treasury,
            sale,
            token,
            oracle,
            payment_id,
        }
    }

    /// A fresh purchaser funded with the payment asset and whitelisted
    pub fn whitelisted_buyer(&self) -> Address {
        let buyer = self.funded_buyer();
        self.sale.add_to_whitelist(&self.owner, &buyer);
        buyer
    }

    pub fn funded_buyer(&self) -> Address {
        let buyer = Address::generate(&self.env);
        token::StellarAssetClient::new(&self.env, &self.payment_id).mint(&buyer, &BUYER_FUNDS);
        buyer
    }
}

impl<'a> Default for SaleDeployment<'a> {
    fn default() -> Self {
        Self::new()
    }
}
