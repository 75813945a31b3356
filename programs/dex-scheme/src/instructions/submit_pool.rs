use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Submit Pool Proposal Instruction
//
// Proposes depositing a token pair into the router's pool. The slippage
// tolerance bounds how far below the desired amounts the deposit may land.

#[derive(Accounts)]
pub struct SubmitPool<'info> {
    #[account(mut, address = scheme.avatar @ SchemeError::ProtectedOperation)]
    pub avatar: Signer<'info>,

    #[account(
        mut,
        seeds = [SCHEME, scheme.avatar.as_ref()],
        bump = scheme.bump,
    )]
    pub scheme: Account<'info, Scheme>,

    #[account(
        init,
        payer = avatar,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [
            PROPOSAL,
            scheme.key().as_ref(),
            &scheme.proposal_count.to_le_bytes(),
        ],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> SubmitPool<'info> {
    pub fn submit_pool(
        &mut self,
        token1: Pubkey,
        token2: Pubkey,
        amount1: u64,
        amount2: u64,
        slippage: u64,
        bumps: &SubmitPoolBumps,
    ) -> Result<()> {
        let kind = ProposalKind::Pool {
            token1,
            token2,
            amount1,
            amount2,
            slippage,
        };
        kind.validate()?;

        let proposal_id = self.scheme.proposal_count;
        self.scheme.proposal_count = proposal_id
            .checked_add(1)
            .ok_or(SchemeError::Overflow)?;

        let clock = Clock::get()?;
        self.proposal.set_inner(Proposal {
            scheme: self.scheme.key(),
            proposal_id,
            kind,
            passed: false,
            created_at: clock.unix_timestamp,
            bump: bumps.proposal,
        });

        let id = self.proposal.key();
        emit!(NewProposal {
            id,
            kind: kind.tag(),
        });
        emit!(NewPoolProposal {
            id,
            token1,
            token2,
            amount1,
            amount2,
            slippage,
        });

        Ok(())
    }
}
