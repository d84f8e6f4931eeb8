#![no_std]

mod cap;
mod contract;
mod events;
mod ledger;
mod lifecycle;
mod limits;
mod ownable;
mod pipeline;
mod pricing;
mod storage;
mod types;
mod whitelist;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use ledger::{MaxContributionOracle, TokenLedger};
pub use types::{Error, PricingTier, SaleConfig, SaleParams};
