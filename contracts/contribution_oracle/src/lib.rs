#![no_std]

pub mod contract;
mod storage;
mod types;


pub use contract::{ContributionOracleContract, ContributionOracleContractClient};
pub use types::{Error, OracleConfig};
