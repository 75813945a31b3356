use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::*, executor, state::*};

// Direct Unpool Instruction
//
// Burns treasury liquidity tokens for the underlying pair without a
// proposal. Protected: only the avatar can trigger it.

#[derive(Accounts)]
pub struct DirectUnpool<'info> {
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

    #[account(mut)]
    pub treasury_liquidity: Option<Account<'info, TokenAccount>>,
}

impl<'info> DirectUnpool<'info> {
    pub fn unpool(
        &mut self,
        token1: Pubkey,
        token2: Pubkey,
        amount: u64,
        expected1: u64,
        expected2: u64,
        remaining: &[AccountInfo<'info>],
    ) -> Result<()> {
        let kind = ProposalKind::Unpool {
            token1,
            token2,
            amount,
            expected1,
            expected2,
        };
        kind.validate()?;

        let mut cx = executor::TreasuryContext {
            scheme: &mut self.scheme,
            treasury: &self.treasury,
            token_a: self.treasury_token_a.as_ref(),
            token_b: self.treasury_token_b.as_ref(),
            liquidity: self.treasury_liquidity.as_ref(),
            router_program: &self.router_program,
            remaining,
        };
        executor::settle(kind, &mut cx)?;

        Ok(())
    }
}
