use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Submit Swap Proposal Instruction
//
// Only the avatar can submit. The proposal id is the PDA derived from the
// scheme and its monotonic counter, which makes ids content-derived and
// collision-free.

#[derive(Accounts)]
pub struct SubmitSwap<'info> {
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

impl<'info> SubmitSwap<'info> {
    pub fn submit_swap(
        &mut self,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
        expected: u64,
        bumps: &SubmitSwapBumps,
    ) -> Result<()> {
        let kind = ProposalKind::Swap {
            from,
            to,
            amount,
            expected,
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
        emit!(NewSwapProposal {
            id,
            from,
            to,
            amount,
            expected,
        });

        Ok(())
    }
}
