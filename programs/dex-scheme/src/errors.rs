use anchor_lang::prelude::*;

#[error_code]
pub enum SchemeError {
    // Identity guards
    #[msg("Protected operation - caller is not the avatar")]
    ProtectedOperation,

    #[msg("Caller is not the registered voting machine")]
    Unauthorized,

    // Initialization parameters
    #[msg("Avatar cannot be null")]
    InvalidAvatar,

    #[msg("Voting machine cannot be null")]
    InvalidVotingMachine,

    #[msg("Router cannot be null")]
    InvalidRouter,

    // Payload validation
    #[msg("Invalid pair - both legs refer to the same token")]
    InvalidPair,

    #[msg("Invalid amount - required amount is zero")]
    InvalidAmount,

    #[msg("Invalid slippage - tolerance exceeds one million ppm")]
    InvalidSlippage,

    // Proposal lifecycle
    #[msg("Proposal does not belong to this scheme")]
    UnknownProposal,

    #[msg("Proposal has not been approved by the voting machine")]
    NotVotingMachineApproved,

    // Execution
    #[msg("Swap returned less than the expected amount")]
    SwapFailed,

    #[msg("Pooled amounts fell below the slippage minimums")]
    PoolFailed,

    #[msg("Unpooled amounts fell below the expected minimums")]
    UnpoolFailed,

    #[msg("Insufficient funds in the treasury")]
    InsufficientFunds,

    #[msg("Missing treasury token account for a non-native leg")]
    MissingTreasuryAccount,

    #[msg("Treasury token account does not match the proposal payload")]
    InvalidTreasuryAccount,

    #[msg("Router returned no usable data")]
    InvalidRouterResponse,

    // Arithmetic
    #[msg("Arithmetic overflow")]
    Overflow,
}
