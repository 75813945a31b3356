use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::*, executor, state::*};

// Direct Pool Instruction
//
// Deposits a treasury token pair into the router's pool without a
// proposal. Protected: only the avatar can trigger it.

#[derive(Accounts)]
pub struct DirectPool<'info> {
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

impl<'info> DirectPool<'info> {
    pub fn pool(
        &mut self,
        token1: Pubkey,
        token2: Pubkey,
        amount1: u64,
        amount2: u64,
        slippage: u64,
        remaining: &[AccountInfo<'info>],
    ) -> Result<()> {
        let kind = ProposalKind::Pool {
            token1,
            token2,
            amount1,
            amount2,
            slippage,
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
