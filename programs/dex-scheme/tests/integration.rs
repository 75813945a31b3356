// Integration tests for the dex-scheme program
//
// Test Coverage:
//
// === Submission Validation ===
// 1. test_swap_proposal_accepts_valid_payload
// 2. test_swap_proposal_rejects_identical_pair
// 3. test_swap_proposal_rejects_zero_amount
// 4. test_pool_proposal_rejects_identical_pair
// 5. test_pool_proposal_rejects_zero_amounts
// 6. test_pool_proposal_rejects_excessive_slippage
// 7. test_unpool_proposal_validation
// 8. test_router_upgrade_rejects_null_router
//
// === Slippage Arithmetic ===
// 9. test_pool_minimum_five_percent
// 10. test_pool_minimum_rounds_down
// 11. test_pool_minimum_bounds
// 12. test_pool_minimum_handles_large_amounts
//
// === Execution Invariants ===
// 13. test_swap_requires_expected_return
// 14. test_pool_requires_minimums
// 15. test_unpool_requires_expectations
//
// === Proposal Lifecycle ===
// 16. test_submitted_proposal_starts_pending
// 17. test_passed_flag_gates_execution
// 18. test_proposal_ids_are_unique_and_deterministic
// 19. test_scheme_pda_is_unique_per_avatar
// 20. test_scheme_identity_guards
// 21. test_execution_mode_configuration
//
// === Router Client ===
// 22. test_router_discriminator_matches_sighash
// 23. test_swap_method_routing
// 24. test_liquidity_method_routing
// 25. test_router_args_encode_roundtrip

mod utils;

use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

use dex_scheme::constants::PPM;
use dex_scheme::helpers::{minimum_after_slippage, require_returned};
use dex_scheme::router;
use dex_scheme::state::{ExecutionMode, Proposal, ProposalKind, ProposalTag};
use dex_scheme::SchemeError;
use utils::*;

// ======================== SUBMISSION VALIDATION ========================

#[test]
fn test_swap_proposal_accepts_valid_payload() {
    let kind = swap_kind(token(1), token(2), SWAP_AMOUNT, SWAP_EXPECTED);
    assert!(kind.validate().is_ok());
    assert_eq!(kind.tag(), ProposalTag::Swap);

    // Native legs are valid on either side
    assert!(swap_kind(NATIVE, token(2), SWAP_AMOUNT, SWAP_EXPECTED)
        .validate()
        .is_ok());
    assert!(swap_kind(token(1), NATIVE, SWAP_AMOUNT, SWAP_EXPECTED)
        .validate()
        .is_ok());

    // A zero minimum-return expectation is allowed
    assert!(swap_kind(token(1), token(2), SWAP_AMOUNT, 0)
        .validate()
        .is_ok());
}

#[test]
fn test_swap_proposal_rejects_identical_pair() {
    assert_scheme_error(
        swap_kind(token(1), token(1), SWAP_AMOUNT, SWAP_EXPECTED).validate(),
        SchemeError::InvalidPair,
    );

    // Native on both sides is the same degenerate pair
    assert_scheme_error(
        swap_kind(NATIVE, NATIVE, SWAP_AMOUNT, SWAP_EXPECTED).validate(),
        SchemeError::InvalidPair,
    );
}

#[test]
fn test_swap_proposal_rejects_zero_amount() {
    assert_scheme_error(
        swap_kind(token(1), token(2), 0, SWAP_EXPECTED).validate(),
        SchemeError::InvalidAmount,
    );
}

#[test]
fn test_pool_proposal_rejects_identical_pair() {
    assert_scheme_error(
        pool_kind(token(1), token(1), POOL_AMOUNT, POOL_AMOUNT, POOL_SLIPPAGE).validate(),
        SchemeError::InvalidPair,
    );
}

#[test]
fn test_pool_proposal_rejects_zero_amounts() {
    assert_scheme_error(
        pool_kind(token(1), token(2), 0, POOL_AMOUNT, POOL_SLIPPAGE).validate(),
        SchemeError::InvalidAmount,
    );
    assert_scheme_error(
        pool_kind(token(1), token(2), POOL_AMOUNT, 0, POOL_SLIPPAGE).validate(),
        SchemeError::InvalidAmount,
    );
}

#[test]
fn test_pool_proposal_rejects_excessive_slippage() {
    assert_scheme_error(
        pool_kind(token(1), token(2), POOL_AMOUNT, POOL_AMOUNT, PPM + 1).validate(),
        SchemeError::InvalidSlippage,
    );

    // Full tolerance is the inclusive maximum
    assert!(
        pool_kind(token(1), token(2), POOL_AMOUNT, POOL_AMOUNT, PPM)
            .validate()
            .is_ok()
    );
}

#[test]
fn test_unpool_proposal_validation() {
    assert!(unpool_kind(token(1), token(2), 100, 40, 40).validate().is_ok());

    assert_scheme_error(
        unpool_kind(token(1), token(1), 100, 40, 40).validate(),
        SchemeError::InvalidPair,
    );
    assert_scheme_error(
        unpool_kind(token(1), token(2), 0, 40, 40).validate(),
        SchemeError::InvalidAmount,
    );
}

#[test]
fn test_router_upgrade_rejects_null_router() {
    assert_scheme_error(
        ProposalKind::UpgradeRouter { router: NATIVE }.validate(),
        SchemeError::InvalidRouter,
    );

    assert!(ProposalKind::UpgradeRouter { router: token(9) }
        .validate()
        .is_ok());
}

// ======================== SLIPPAGE ARITHMETIC ========================

#[test]
fn test_pool_minimum_five_percent() {
    // 5% tolerance on a 1000 deposit leaves a 950 floor
    assert_eq!(
        minimum_after_slippage(POOL_AMOUNT, POOL_SLIPPAGE).unwrap(),
        POOL_MIN
    );
}

#[test]
fn test_pool_minimum_rounds_down() {
    // 333 * 900_000 / 1_000_000 = 299.7, floored to 299
    assert_eq!(minimum_after_slippage(333, 100_000).unwrap(), 299);
}

#[test]
fn test_pool_minimum_bounds() {
    // Zero tolerance demands the full amount
    assert_eq!(minimum_after_slippage(POOL_AMOUNT, 0).unwrap(), POOL_AMOUNT);

    // Full tolerance accepts anything
    assert_eq!(minimum_after_slippage(POOL_AMOUNT, PPM).unwrap(), 0);

    assert_scheme_error(
        minimum_after_slippage(POOL_AMOUNT, PPM + 1),
        SchemeError::InvalidSlippage,
    );
}

#[test]
fn test_pool_minimum_handles_large_amounts() {
    // The product is widened to u128, so the largest balances survive
    assert_eq!(
        minimum_after_slippage(u64::MAX, 500_000).unwrap(),
        u64::MAX / 2
    );
    assert_eq!(minimum_after_slippage(u64::MAX, 0).unwrap(), u64::MAX);
}

// ======================== EXECUTION INVARIANTS ========================

#[test]
fn test_swap_requires_expected_return() {
    // Router returned 996 against an expectation of 500: commits
    assert!(require_returned(SWAP_RETURNED, SWAP_EXPECTED, SchemeError::SwapFailed).is_ok());

    // Exactly the expectation is acceptable
    assert!(require_returned(SWAP_EXPECTED, SWAP_EXPECTED, SchemeError::SwapFailed).is_ok());

    // One unit short aborts the operation
    assert_scheme_error(
        require_returned(SWAP_EXPECTED - 1, SWAP_EXPECTED, SchemeError::SwapFailed),
        SchemeError::SwapFailed,
    );
}

#[test]
fn test_pool_requires_minimums() {
    let min = minimum_after_slippage(POOL_AMOUNT, POOL_SLIPPAGE).unwrap();

    assert!(require_returned(POOL_AMOUNT, min, SchemeError::PoolFailed).is_ok());
    assert!(require_returned(min, min, SchemeError::PoolFailed).is_ok());
    assert_scheme_error(
        require_returned(min - 1, min, SchemeError::PoolFailed),
        SchemeError::PoolFailed,
    );
}

#[test]
fn test_unpool_requires_expectations() {
    assert_scheme_error(
        require_returned(39, 40, SchemeError::UnpoolFailed),
        SchemeError::UnpoolFailed,
    );
}

// ======================== PROPOSAL LIFECYCLE ========================

#[test]
fn test_submitted_proposal_starts_pending() {
    let scheme = scheme_record(ExecutionMode::Deferred);
    let (scheme_pda, _) = derive_scheme_pda(&scheme.avatar);
    let kind = swap_kind(token(1), token(2), SWAP_AMOUNT, SWAP_EXPECTED);

    let proposal = Proposal {
        scheme: scheme_pda,
        proposal_id: 0,
        kind,
        passed: false,
        created_at: 1_700_000_000,
        bump: 255,
    };

    // The stored payload is exactly what was submitted, and nothing has
    // passed yet
    assert_eq!(proposal.kind, kind);
    assert!(!proposal.passed);
    assert!(!proposal.is_executable());
}

#[test]
fn test_passed_flag_gates_execution() {
    let scheme = scheme_record(ExecutionMode::Deferred);
    let (scheme_pda, _) = derive_scheme_pda(&scheme.avatar);

    let mut proposal = Proposal {
        scheme: scheme_pda,
        proposal_id: 3,
        kind: ProposalKind::UpgradeRouter { router: token(9) },
        passed: false,
        created_at: 1_700_000_000,
        bump: 255,
    };
    assert!(!proposal.is_executable());

    proposal.mark_passed();
    assert!(proposal.is_executable());
}

#[test]
fn test_proposal_ids_are_unique_and_deterministic() {
    let (scheme_pda, _) = derive_scheme_pda(&token(0xA1));

    let (first, _) = derive_proposal_pda(&scheme_pda, 0);
    let (second, _) = derive_proposal_pda(&scheme_pda, 1);
    let (third, _) = derive_proposal_pda(&scheme_pda, 2);

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_ne!(first, third);

    // Same scheme and counter always derive the same id
    assert_eq!(first, derive_proposal_pda(&scheme_pda, 0).0);

    // A different scheme derives a disjoint id space
    let (other_scheme, _) = derive_scheme_pda(&token(0xA2));
    assert_ne!(first, derive_proposal_pda(&other_scheme, 0).0);
}

#[test]
fn test_scheme_pda_is_unique_per_avatar() {
    let (first, _) = derive_scheme_pda(&token(0xA1));
    let (second, _) = derive_scheme_pda(&token(0xA2));
    assert_ne!(first, second);

    // Each scheme also gets its own treasury
    assert_ne!(
        derive_treasury_pda(&first).0,
        derive_treasury_pda(&second).0
    );
}

#[test]
fn test_scheme_identity_guards() {
    let scheme = scheme_record(ExecutionMode::Inline);

    assert!(scheme.is_avatar(&scheme.avatar));
    assert!(!scheme.is_avatar(&scheme.voting_machine));

    assert!(scheme.is_voting_machine(&scheme.voting_machine));
    assert!(!scheme.is_voting_machine(&scheme.avatar));
}

#[test]
fn test_execution_mode_configuration() {
    assert!(scheme_record(ExecutionMode::Inline).is_inline());
    assert!(!scheme_record(ExecutionMode::Deferred).is_inline());
}

// ======================== ROUTER CLIENT ========================

#[test]
fn test_router_discriminator_matches_sighash() {
    let mut hasher = Sha256::new();
    hasher.update(b"global:swap_exact_tokens_for_tokens");
    let digest = hasher.finalize();

    assert_eq!(
        router::discriminator("swap_exact_tokens_for_tokens"),
        digest[..8]
    );
}

#[test]
fn test_swap_method_routing() {
    assert_eq!(
        router::swap_method(&token(1), &token(2)),
        "swap_exact_tokens_for_tokens"
    );
    assert_eq!(
        router::swap_method(&NATIVE, &token(2)),
        "swap_exact_native_for_tokens"
    );
    assert_eq!(
        router::swap_method(&token(1), &NATIVE),
        "swap_exact_tokens_for_native"
    );
}

#[test]
fn test_liquidity_method_routing() {
    assert_eq!(
        router::add_liquidity_method(&token(1), &token(2)),
        "add_liquidity"
    );
    assert_eq!(
        router::add_liquidity_method(&NATIVE, &token(2)),
        "add_liquidity_native"
    );
    assert_eq!(
        router::remove_liquidity_method(&token(1), &token(2)),
        "remove_liquidity"
    );
    assert_eq!(
        router::remove_liquidity_method(&token(1), &NATIVE),
        "remove_liquidity_native"
    );
}

#[test]
fn test_router_args_encode_roundtrip() {
    let args = router::SwapArgs {
        token_in: token(1),
        token_out: token(2),
        amount_in: SWAP_AMOUNT,
        amount_out_min: SWAP_EXPECTED,
        deadline: 1_700_000_000,
    };

    let data = router::encode("swap_exact_tokens_for_tokens", &args).unwrap();

    // Discriminator prefix, then the borsh-encoded arguments
    assert_eq!(
        data[..8],
        router::discriminator("swap_exact_tokens_for_tokens")
    );
    let decoded = router::SwapArgs::try_from_slice(&data[8..]).unwrap();
    assert_eq!(decoded, args);

    let args = router::AddLiquidityArgs {
        token1: token(1),
        token2: token(2),
        amount1_desired: POOL_AMOUNT,
        amount2_desired: POOL_AMOUNT,
        amount1_min: POOL_MIN,
        amount2_min: POOL_MIN,
        deadline: 1_700_000_000,
    };
    let data = router::encode("add_liquidity", &args).unwrap();
    assert_eq!(
        router::AddLiquidityArgs::try_from_slice(&data[8..]).unwrap(),
        args
    );
}
