use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::*, executor, state::*};

// Direct Swap Instruction
//
// Swaps treasury tokens without a proposal. Protected: only the avatar
// can trigger it. Validation and execution are identical to the proposal
// path; a failed swap aborts the transaction and leaves balances intact.

#[derive(Accounts)]
pub struct DirectSwap<'info> {
    #[account(address = scheme.avatar @ SchemeError::ProtectedOperation)]
    pub avatar: Signer<'info>,

    #[account(
        mut,
        seeds = [SCHEME, scheme.avatar.as_ref()],
        bump = scheme.bump,
    )]
    pub scheme: Account<'info, Scheme>,

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
}

impl<'info> DirectSwap<'info> {
    pub fn swap(
        &mut self,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
        expected: u64,
        remaining: &[AccountInfo<'info>],
    ) -> Result<()> {
        let kind = ProposalKind::Swap {
            from,
            to,
            amount,
            expected,
        };
        kind.validate()?;

        let mut cx = executor::TreasuryContext {
            scheme: &mut self.scheme,
            treasury: &self.treasury,
            token_a: self.treasury_token_a.as_ref(),
            token_b: self.treasury_token_b.as_ref(),
            liquidity: None,
            router_program: &self.router_program,
            remaining,
        };
        executor::settle(kind, &mut cx)?;

        Ok(())
    }
}
