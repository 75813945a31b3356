use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::*, events::*, executor, state::*};

// Report Outcome Instruction
//
// Callback surface for the voting machine, the only account trusted to
// report a proposal's final outcome.
//
// Rejection deletes the proposal and refunds its rent to the avatar.
// Acceptance depends on the scheme's execution mode:
// - Inline: the operation runs inside this call; a failure aborts the
//   whole call, leaving the proposal pending and re-votable
// - Deferred: the proposal is flagged as passed and left for `execute`
//
// The execution accounts are unused on rejection and in deferred mode;
// pool and pair accounts for the router ride in as remaining accounts.

#[derive(Accounts)]
pub struct ReportOutcome<'info> {
    #[account(address = scheme.voting_machine @ SchemeError::Unauthorized)]
    pub voting_machine: Signer<'info>,

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

impl<'info> ReportOutcome<'info> {
    pub fn report_outcome(
        &mut self,
        accepted: bool,
        remaining: &[AccountInfo<'info>],
    ) -> Result<()> {
        let id = self.proposal.key();

        if !accepted {
            emit!(ProposalDeleted { id });
            return self.proposal.close(self.avatar.to_account_info());
        }

        self.proposal.mark_passed();

        if !self.scheme.is_inline() {
            emit!(ProposalPassed { id });
            return Ok(());
        }

        // Inline mode: execute within the callback; any failure below
        // unwinds the whole call, including the passed flag
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
