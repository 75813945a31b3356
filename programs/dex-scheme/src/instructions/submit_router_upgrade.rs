use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

// Submit Router Upgrade Proposal Instruction
//
// Proposes replacing the exchange router the treasury trades through.
// Router upgrades are single-shot: once executed the proposal is gone.

#[derive(Accounts)]
pub struct SubmitRouterUpgrade<'info> {
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

impl<'info> SubmitRouterUpgrade<'info> {
    pub fn submit_router_upgrade(
        &mut self,
        new_router: Pubkey,
        bumps: &SubmitRouterUpgradeBumps,
    ) -> Result<()> {
        let kind = ProposalKind::UpgradeRouter { router: new_router };
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
        emit!(NewRouterUpgradeProposal {
            id,
            router: new_router,
        });

        Ok(())
    }
}
