use anchor_lang::prelude::*;

use crate::state::ProposalTag;

// Every state change is surfaced as an event carrying enough payload to
// reconstruct the scheme's state off-chain

#[event]
pub struct SchemeInitialized {
    pub scheme: Pubkey,
    pub avatar: Pubkey,
    pub voting_machine: Pubkey,
    pub router: Pubkey,
}

// Proposal lifecycle

#[event]
pub struct NewProposal {
    pub id: Pubkey,
    pub kind: ProposalTag,
}

#[event]
pub struct NewSwapProposal {
    pub id: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub expected: u64,
}

#[event]
pub struct NewPoolProposal {
    pub id: Pubkey,
    pub token1: Pubkey,
    pub token2: Pubkey,
    pub amount1: u64,
    pub amount2: u64,
    pub slippage: u64,
}

#[event]
pub struct NewUnpoolProposal {
    pub id: Pubkey,
    pub token1: Pubkey,
    pub token2: Pubkey,
    pub amount: u64,
    pub expected1: u64,
    pub expected2: u64,
}

#[event]
pub struct NewRouterUpgradeProposal {
    pub id: Pubkey,
    pub router: Pubkey,
}

// Deferred-mode bookkeeping: the proposal passed and awaits execution
#[event]
pub struct ProposalPassed {
    pub id: Pubkey,
}

#[event]
pub struct ProposalExecuted {
    pub id: Pubkey,
}

#[event]
pub struct ProposalDeleted {
    pub id: Pubkey,
}

#[event]
pub struct SwapProposalExecuted {
    pub id: Pubkey,
    pub returned: u64,
}

#[event]
pub struct PoolProposalExecuted {
    pub id: Pubkey,
    pub pooled1: u64,
    pub pooled2: u64,
    pub returned: u64,
}

#[event]
pub struct UnpoolProposalExecuted {
    pub id: Pubkey,
    pub returned1: u64,
    pub returned2: u64,
}

#[event]
pub struct RouterUpgraded {
    pub router: Pubkey,
}

// Treasury operations, emitted on both the proposal and the direct path

#[event]
pub struct Swap {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub expected: u64,
    pub returned: u64,
}

#[event]
pub struct Pool {
    pub token1: Pubkey,
    pub token2: Pubkey,
    pub amount1: u64,
    pub amount2: u64,
    pub min1: u64,
    pub min2: u64,
    pub pooled1: u64,
    pub pooled2: u64,
    pub returned: u64,
}

#[event]
pub struct Unpool {
    pub token1: Pubkey,
    pub token2: Pubkey,
    pub amount: u64,
    pub expected1: u64,
    pub expected2: u64,
    pub returned1: u64,
    pub returned2: u64,
}
