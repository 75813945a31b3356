// Calculation and validation helpers shared by the executor and the
// submission instructions

use anchor_lang::prelude::*;

use crate::{constants::PPM, errors::SchemeError};

// The default pubkey stands in for the native currency in token fields
pub fn is_native(token: &Pubkey) -> bool {
    *token == Pubkey::default()
}

// Minimum acceptable amount after applying a slippage tolerance
// Formula: amount * (PPM - slippage) / PPM, floor division
// Widened to u128 so the product cannot overflow
pub fn minimum_after_slippage(amount: u64, slippage: u64) -> Result<u64> {
    require!(slippage <= PPM, SchemeError::InvalidSlippage);

    let kept = (PPM - slippage) as u128;
    let minimum = (amount as u128)
        .checked_mul(kept)
        .ok_or(SchemeError::Overflow)?
        / PPM as u128;

    Ok(minimum as u64)
}

// Monetary invariant shared by all execution kinds: what came back must
// cover what was promised
pub fn require_returned(returned: u64, expected: u64, err: SchemeError) -> Result<()> {
    if returned < expected {
        return Err(err.into());
    }
    Ok(())
}
