use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Submit Unpool Proposal Instruction
//
// Proposes burning liquidity tokens for the underlying pair, with a
// minimum expectation on each returned leg.

#[derive(Accounts)]
pub struct SubmitUnpool<'info> {
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

impl<'info> SubmitUnpool<'info> {
    pub fn submit_unpool(
        &mut self,
        token1: Pubkey,
        token2: Pubkey,
        amount: u64,
        expected1: u64,
        expected2: u64,
        bumps: &SubmitUnpoolBumps,
    ) -> Result<()> {
        let kind = ProposalKind::Unpool {
            token1,
            token2,
            amount,
            expected1,
            expected2,
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
        emit!(NewUnpoolProposal {
            id,
            token1,
            token2,
            amount,
            expected1,
            expected2,
        });

        Ok(())
    }
}
