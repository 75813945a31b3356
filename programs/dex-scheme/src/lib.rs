use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod executor;
pub mod helpers;
pub mod instructions;
pub mod router;
pub mod state;

pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("GParhLYkEjG7Zet9wdWvBZpBqcS5fVB7tWYUEM9RJPXd");

#[program]
pub mod dex_scheme {
    use super::*;

    // Bind the scheme to its avatar, voting machine and exchange router
    // Creates the scheme account and treasury PDA
    // Runs exactly once per avatar - the scheme PDA cannot be re-created
    pub fn initialize(
        ctx: Context<Initialize>,
        avatar: Pubkey,
        voting_machine: Pubkey,
        router: Pubkey,
        execution_mode: ExecutionMode,
    ) -> Result<()> {
        ctx.accounts
            .initialize(avatar, voting_machine, router, execution_mode, &ctx.bumps)
    }

    // Submit a swap proposal
    // Only the avatar can submit
    // The proposal is pending until the voting machine reports an outcome
    pub fn submit_swap(
        ctx: Context<SubmitSwap>,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
        expected: u64,
    ) -> Result<()> {
        ctx.accounts.submit_swap(from, to, amount, expected, &ctx.bumps)
    }

    // Submit a liquidity-provision proposal
    // Slippage tolerance is expressed in parts per million (1_000_000 = 100%)
    pub fn submit_pool(
        ctx: Context<SubmitPool>,
        token1: Pubkey,
        token2: Pubkey,
        amount1: u64,
        amount2: u64,
        slippage: u64,
    ) -> Result<()> {
        ctx.accounts
            .submit_pool(token1, token2, amount1, amount2, slippage, &ctx.bumps)
    }

    // Submit a liquidity-withdrawal proposal
    // `amount` is the quantity of liquidity tokens to burn
    pub fn submit_unpool(
        ctx: Context<SubmitUnpool>,
        token1: Pubkey,
        token2: Pubkey,
        amount: u64,
        expected1: u64,
        expected2: u64,
    ) -> Result<()> {
        ctx.accounts
            .submit_unpool(token1, token2, amount, expected1, expected2, &ctx.bumps)
    }

    // Submit a router-upgrade proposal
    pub fn submit_router_upgrade(ctx: Context<SubmitRouterUpgrade>, new_router: Pubkey) -> Result<()> {
        ctx.accounts.submit_router_upgrade(new_router, &ctx.bumps)
    }

    // Voting-machine callback reporting the final outcome of a proposal
    // Rejection deletes the proposal; acceptance either executes it in
    // place (inline mode) or flags it for a later `execute` call
    // (deferred mode)
    pub fn report_outcome<'info>(
        ctx: Context<'_, '_, 'info, 'info, ReportOutcome<'info>>,
        accepted: bool,
    ) -> Result<()> {
        ctx.accounts.report_outcome(accepted, ctx.remaining_accounts)
    }

    // Execute an approved proposal (deferred mode)
    // Callable by anyone, any number of times, until it succeeds
    pub fn execute<'info>(ctx: Context<'_, '_, 'info, 'info, Execute<'info>>) -> Result<()> {
        ctx.accounts.execute(ctx.remaining_accounts)
    }

    // Swap treasury tokens immediately, without a proposal
    // Protected: only the avatar can call
    pub fn swap<'info>(
        ctx: Context<'_, '_, 'info, 'info, DirectSwap<'info>>,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
        expected: u64,
    ) -> Result<()> {
        ctx.accounts
            .swap(from, to, amount, expected, ctx.remaining_accounts)
    }

    // Pool treasury tokens immediately, without a proposal
    // Protected: only the avatar can call
    pub fn pool<'info>(
        ctx: Context<'_, '_, 'info, 'info, DirectPool<'info>>,
        token1: Pubkey,
        token2: Pubkey,
        amount1: u64,
        amount2: u64,
        slippage: u64,
    ) -> Result<()> {
        ctx.accounts
            .pool(token1, token2, amount1, amount2, slippage, ctx.remaining_accounts)
    }

    // Unpool treasury liquidity immediately, without a proposal
    // Protected: only the avatar can call
    pub fn unpool<'info>(
        ctx: Context<'_, '_, 'info, 'info, DirectUnpool<'info>>,
        token1: Pubkey,
        token2: Pubkey,
        amount: u64,
        expected1: u64,
        expected2: u64,
    ) -> Result<()> {
        ctx.accounts
            .unpool(token1, token2, amount, expected1, expected2, ctx.remaining_accounts)
    }
}
