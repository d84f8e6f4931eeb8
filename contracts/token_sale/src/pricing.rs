//! Tiered bonus pricing.
//!
//! The tier table is an ascending list of cumulative thresholds. The rate for a
//! purchase is picked from the total raised *before* that purchase: the first
//! tier whose threshold is strictly greater than the total wins, and once the
//! total reaches the last threshold the base rate applies. A total exactly on
//! a threshold therefore already belongs to the next bracket.

use crate::storage::{get_tiers, get_total_raised};
use crate::types::{get_ledger_timestamp, Error, PricingTier, SaleConfig};
use soroban_sdk::{Env, Vec};

/// Pure rate lookup for a given cumulative total.
pub fn rate_for(tiers: &Vec<PricingTier>, base_rate: u128, total_raised: u128) -> u128 {
    for tier in tiers.iter() {
        if tier.threshold > total_raised {
            return tier.rate;
        }
    }
    base_rate
}

pub fn current_rate(
    tiers: &Vec<PricingTier>,
    base_rate: u128,
    total_raised: u128,
    now: u64,
    start_time: u64,
) -> Result<u128, Error> {
    if now < start_time {
        return Err(Error::SaleNotStarted);
    }
    Ok(rate_for(tiers, base_rate, total_raised))
}

/// Rate the next purchase would get, read from contract state.
pub fn rate_now(env: &Env, config: &SaleConfig) -> Result<u128, Error> {
    current_rate(
        &get_tiers(env),
        config.rate,
        get_total_raised(env),
        get_ledger_timestamp(env),
        config.start_time,
    )
}

pub fn token_amount(env: &Env, config: &SaleConfig, amount: u128) -> Result<u128, Error> {
    let rate = rate_now(env, config)?;
    Ok(fp_math::mul(amount, rate)?)
}

pub fn validate_tiers(tiers: &Vec<PricingTier>) -> Result<(), Error> {
    let mut previous: Option<u128> = None;
    for tier in tiers.iter() {
        if tier.rate == 0 || tier.threshold == 0 {
            return Err(Error::InvalidConfig);
        }
        if let Some(prev) = previous {
            if tier.threshold <= prev {
                return Err(Error::InvalidConfig);
            }
        }
        previous = Some(tier.threshold);
    }
    Ok(())
}
