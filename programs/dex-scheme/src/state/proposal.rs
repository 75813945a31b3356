use anchor_lang::prelude::*;

use crate::{constants::PPM, errors::SchemeError, helpers::is_native};

// Kind tag carried by the NewProposal event
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ProposalTag {
    Swap,
    Pool,
    Unpool,
    UpgradeRouter,
}

// Treasury operation requested by a proposal
// The executable command set is this closed enumeration; there is no
// free-form call dispatch
//
// The default pubkey is the native-currency sentinel for token fields
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ProposalKind {
    // Swap `amount` of `from` for at least `expected` of `to`
    Swap {
        from: Pubkey,
        to: Pubkey,
        amount: u64,
        expected: u64,
    },

    // Deposit up to `amount1`/`amount2` of the pair, tolerating `slippage`
    // parts per million of deviation on each leg
    Pool {
        token1: Pubkey,
        token2: Pubkey,
        amount1: u64,
        amount2: u64,
        slippage: u64,
    },

    // Burn `amount` liquidity tokens for at least `expected1`/`expected2`
    // of the underlying pair
    Unpool {
        token1: Pubkey,
        token2: Pubkey,
        amount: u64,
        expected1: u64,
        expected2: u64,
    },

    // Replace the exchange router the treasury trades through
    UpgradeRouter { router: Pubkey },
}

impl ProposalKind {
    // Payload validation, checked at submission time
    pub fn validate(&self) -> Result<()> {
        match *self {
            ProposalKind::Swap { from, to, amount, .. } => {
                require!(from != to, SchemeError::InvalidPair);
                require!(amount > 0, SchemeError::InvalidAmount);
            }
            ProposalKind::Pool {
                token1,
                token2,
                amount1,
                amount2,
                slippage,
            } => {
                require!(token1 != token2, SchemeError::InvalidPair);
                require!(amount1 > 0 && amount2 > 0, SchemeError::InvalidAmount);
                require!(slippage <= PPM, SchemeError::InvalidSlippage);
            }
            ProposalKind::Unpool {
                token1,
                token2,
                amount,
                ..
            } => {
                require!(token1 != token2, SchemeError::InvalidPair);
                require!(amount > 0, SchemeError::InvalidAmount);
            }
            ProposalKind::UpgradeRouter { router } => {
                require!(!is_native(&router), SchemeError::InvalidRouter);
            }
        }
        Ok(())
    }

    pub fn tag(&self) -> ProposalTag {
        match self {
            ProposalKind::Swap { .. } => ProposalTag::Swap,
            ProposalKind::Pool { .. } => ProposalTag::Pool,
            ProposalKind::Unpool { .. } => ProposalTag::Unpool,
            ProposalKind::UpgradeRouter { .. } => ProposalTag::UpgradeRouter,
        }
    }
}

// Proposal account
// Exists from submission until finalization; deletion closes the account,
// so a finalized proposal reads back as absent
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    // The scheme this proposal belongs to
    pub scheme: Pubkey,

    // Counter value used in the id derivation, unique within the scheme
    pub proposal_id: u64,

    // Requested treasury operation
    pub kind: ProposalKind,

    // Set once the voting machine reports acceptance
    pub passed: bool,

    // Timestamp when the proposal was submitted
    pub created_at: i64,

    // PDA bump seed
    pub bump: u8,
}

impl Proposal {
    pub fn mark_passed(&mut self) {
        self.passed = true;
    }

    // An accepted proposal is the only thing the executor will touch
    pub fn is_executable(&self) -> bool {
        self.passed
    }
}
