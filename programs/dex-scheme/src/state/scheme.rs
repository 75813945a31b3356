use anchor_lang::prelude::*;

// Execution semantics for accepted proposals
//
// Inline: the voting-machine callback executes the operation within the
// same call; an execution failure rolls the whole callback back, so the
// proposal is left pending and re-votable.
//
// Deferred: the callback only flags the proposal as passed; a separate
// `execute` call, open to anyone and retriable, performs the operation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ExecutionMode {
    Inline,
    Deferred,
}

// Scheme configuration account
// Bound once at initialization; the router is the only field that can
// change afterwards, and only through an approved RouterUpgrade proposal
#[account]
#[derive(InitSpace)]
pub struct Scheme {
    // The organization's asset-holding account; sole authorized submitter
    pub avatar: Pubkey,

    // Sole account trusted to report proposal outcomes
    pub voting_machine: Pubkey,

    // Exchange router program the treasury trades through
    pub router: Pubkey,

    // Inline or deferred execution of accepted proposals
    pub execution_mode: ExecutionMode,

    // Treasury PDA address
    // Authority over the treasury token accounts; holds native funds
    pub treasury: Pubkey,

    // Total proposals ever created (used for proposal id derivation)
    pub proposal_count: u64,

    // PDA bump seed for the scheme account
    pub bump: u8,

    // PDA bump seed for the treasury account
    // Used for treasury signing during execution
    pub treasury_bump: u8,
}

impl Scheme {
    pub fn is_avatar(&self, key: &Pubkey) -> bool {
        key == &self.avatar
    }

    pub fn is_voting_machine(&self, key: &Pubkey) -> bool {
        key == &self.voting_machine
    }

    pub fn is_inline(&self) -> bool {
        self.execution_mode == ExecutionMode::Inline
    }
}
