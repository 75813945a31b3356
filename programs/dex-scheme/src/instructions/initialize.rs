use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, helpers::is_native, state::*};

// Initialize Instruction
//
// Binds the scheme to its avatar, voting machine and exchange router and
// fixes the execution mode. The scheme PDA is derived from the avatar, so
// a second initialization for the same avatar fails at account creation.

#[derive(Accounts)]
#[instruction(avatar: Pubkey)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub deployer: Signer<'info>,

    #[account(
        init,
        payer = deployer,
        space = ANCHOR_DISCRIMINATOR + Scheme::INIT_SPACE,
        seeds = [SCHEME, avatar.as_ref()],
        bump,
    )]
    pub scheme: Account<'info, Scheme>,

    // Treasury PDA (holds native funds, authority over token accounts)
    #[account(
        seeds = [TREASURY, scheme.key().as_ref()],
        bump,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        avatar: Pubkey,
        voting_machine: Pubkey,
        router: Pubkey,
        execution_mode: ExecutionMode,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        require!(!is_native(&avatar), SchemeError::InvalidAvatar);
        require!(!is_native(&voting_machine), SchemeError::InvalidVotingMachine);
        require!(!is_native(&router), SchemeError::InvalidRouter);

        self.scheme.set_inner(Scheme {
            avatar,
            voting_machine,
            router,
            execution_mode,
            treasury: self.treasury.key(),
            proposal_count: 0,
            bump: bumps.scheme,
            treasury_bump: bumps.treasury,
        });

        emit!(SchemeInitialized {
            scheme: self.scheme.key(),
            avatar,
            voting_machine,
            router,
        });

        Ok(())
    }
}
