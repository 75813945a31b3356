use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::*, events::*, executor, state::*};

// Execute Instruction (deferred mode)
//
// Performs the treasury operation of a proposal the voting machine has
// already accepted. Callable by anyone, any number of times: a failed
// attempt reverts only this call and leaves the proposal passed and
// retriable; a successful one deletes it.

#[derive(Accounts)]
pub struct Execute<'info> {
    pub executor: Signer<'info>,

    #[account(
        mut,
        seeds = [SCHEME, scheme.avatar.as_ref()],
        bump = scheme.bump,
    )]
    pub scheme: Account<'info, Scheme>,

    #[account(
        mut,
        seeds = [
            PROPOSAL,
            scheme.key().as_ref(),
            &proposal.proposal_id.to_le_bytes(),
        ],
        bump = proposal.bump,
        constraint = proposal.scheme == scheme.key() @ SchemeError::UnknownProposal,
    )]
    pub proposal: Account<'info, Proposal>,

    // Receives the rent refund when the proposal is deleted
    /// CHECK: Validated against the scheme record
    #[account(mut, address = scheme.avatar)]
    pub avatar: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [TREASURY, scheme.key().as_ref()],
        bump = scheme.treasury_bump,
    )]
    pub treasury: SystemAccount<'info>,

    /// CHECK: Must be the router bound on the scheme
    #[account(address = scheme.router @ SchemeError::InvalidRouter)]
    pub router_program: UncheckedAccount<'info>,

    #[account(mut)]
    pub treasury_token_a: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub treasury_token_b: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub treasury_liquidity: Option<Account<'info, TokenAccount>>,
}

impl<'info> Execute<'info> {
    pub fn execute(&mut self, remaining: &[AccountInfo<'info>]) -> Result<()> {
        require!(
            self.proposal.is_executable(),
            SchemeError::NotVotingMachineApproved
        );

        let id = self.proposal.key();
        let kind = self.proposal.kind;

        let mut cx = executor::TreasuryContext {
            scheme: &mut self.scheme,
            treasury: &self.treasury,
            token_a: self.treasury_token_a.as_ref(),
            token_b: self.treasury_token_b.as_ref(),
            liquidity: self.treasury_liquidity.as_ref(),
            router_program: &self.router_program,
            remaining,
        };
        let settlement = executor::settle(kind, &mut cx)?;

        executor::emit_proposal_settlement(id, &settlement);
        emit!(ProposalExecuted { id });
        emit!(ProposalDeleted { id });

        self.proposal.close(self.avatar.to_account_info())
    }
}
