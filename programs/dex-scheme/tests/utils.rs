// Shared fixtures and helpers for the dex-scheme test suite

use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;

use dex_scheme::state::{ExecutionMode, ProposalKind, Scheme};
use dex_scheme::SchemeError;

// Amounts mirroring the canonical scenarios: swap 1000 expecting at least
// 500, router returns 996; pool 1000/1000 with 5% tolerance (50_000 ppm)
pub const SWAP_AMOUNT: u64 = 1000;
pub const SWAP_EXPECTED: u64 = 500;
pub const SWAP_RETURNED: u64 = 996;
pub const POOL_AMOUNT: u64 = 1000;
pub const POOL_SLIPPAGE: u64 = 50_000;
pub const POOL_MIN: u64 = 950;

// The native-currency sentinel
pub const NATIVE: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// Deterministic token identifier for fixtures
pub fn token(tag: u8) -> Pubkey {
    Pubkey::new_from_array([tag; 32])
}

/// A scheme record with distinct, recognizable collaborator identities
pub fn scheme_record(execution_mode: ExecutionMode) -> Scheme {
    Scheme {
        avatar: token(0xA1),
        voting_machine: token(0xB2),
        router: token(0xC3),
        execution_mode,
        treasury: token(0xD4),
        proposal_count: 0,
        bump: 254,
        treasury_bump: 253,
    }
}

pub fn swap_kind(from: Pubkey, to: Pubkey, amount: u64, expected: u64) -> ProposalKind {
    ProposalKind::Swap {
        from,
        to,
        amount,
        expected,
    }
}

pub fn pool_kind(
    token1: Pubkey,
    token2: Pubkey,
    amount1: u64,
    amount2: u64,
    slippage: u64,
) -> ProposalKind {
    ProposalKind::Pool {
        token1,
        token2,
        amount1,
        amount2,
        slippage,
    }
}

pub fn unpool_kind(
    token1: Pubkey,
    token2: Pubkey,
    amount: u64,
    expected1: u64,
    expected2: u64,
) -> ProposalKind {
    ProposalKind::Unpool {
        token1,
        token2,
        amount,
        expected1,
        expected2,
    }
}

/// Derive the scheme PDA using seeds: ["scheme", avatar]
pub fn derive_scheme_pda(avatar: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[dex_scheme::constants::SCHEME, avatar.as_ref()],
        &dex_scheme::ID,
    )
}

/// Derive the proposal PDA using seeds: ["proposal", scheme, proposal_id]
pub fn derive_proposal_pda(scheme: &Pubkey, proposal_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            dex_scheme::constants::PROPOSAL,
            scheme.as_ref(),
            &proposal_id.to_le_bytes(),
        ],
        &dex_scheme::ID,
    )
}

/// Derive the treasury PDA using seeds: ["treasury", scheme]
pub fn derive_treasury_pda(scheme: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[dex_scheme::constants::TREASURY, scheme.as_ref()],
        &dex_scheme::ID,
    )
}

/// Extract the numeric error code from an anchor error
pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => match e.program_error {
            ProgramError::Custom(code) => code,
            other => panic!("unexpected program error: {other}"),
        },
    }
}

pub fn scheme_error_code(err: SchemeError) -> u32 {
    err as u32 + ERROR_CODE_OFFSET
}

/// Assert that a result failed with the given scheme error
pub fn assert_scheme_error<T: std::fmt::Debug>(
    result: anchor_lang::Result<T>,
    expected: SchemeError,
) {
    let err = result.expect_err("expected the operation to fail");
    assert_eq!(error_code(err), scheme_error_code(expected));
}
