// Treasury operation executor
//
// Performs the concrete treasury action for a swap, pool, unpool or
// router-upgrade command against the exchange router, enforcing the
// minimum-return and slippage invariants. Shared by the proposal execution
// path and the avatar-direct path; any failure aborts the enclosing
// transaction, so effects are all-or-nothing.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    constants::{ROUTER_DEADLINE_WINDOW, TREASURY},
    errors::SchemeError,
    events,
    helpers::{is_native, minimum_after_slippage, require_returned},
    router,
    state::{ProposalKind, Scheme},
};

// Amounts actually transacted, as reported by the router
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Swapped {
        returned: u64,
    },
    Pooled {
        pooled1: u64,
        pooled2: u64,
        returned: u64,
    },
    Unpooled {
        returned1: u64,
        returned2: u64,
    },
    RouterUpgraded {
        router: Pubkey,
    },
}

// Treasury-side accounts for one execution
// Token accounts are optional: a native leg has none, and a router upgrade
// touches no funds at all
pub struct TreasuryContext<'a, 'info> {
    pub scheme: &'a mut Account<'info, Scheme>,
    pub treasury: &'a SystemAccount<'info>,
    pub token_a: Option<&'a Account<'info, TokenAccount>>,
    pub token_b: Option<&'a Account<'info, TokenAccount>>,
    pub liquidity: Option<&'a Account<'info, TokenAccount>>,
    pub router_program: &'a AccountInfo<'info>,
    pub remaining: &'a [AccountInfo<'info>],
}

pub fn settle(kind: ProposalKind, cx: &mut TreasuryContext) -> Result<Settlement> {
    let scheme_key = cx.scheme.key();
    let treasury_bump = [cx.scheme.treasury_bump];
    let seeds: [&[u8]; 3] = [TREASURY, scheme_key.as_ref(), &treasury_bump];
    let signer_seeds: [&[&[u8]]; 1] = [&seeds];

    match kind {
        ProposalKind::Swap {
            from,
            to,
            amount,
            expected,
        } => settle_swap(cx, &signer_seeds, from, to, amount, expected),
        ProposalKind::Pool {
            token1,
            token2,
            amount1,
            amount2,
            slippage,
        } => settle_pool(cx, &signer_seeds, token1, token2, amount1, amount2, slippage),
        ProposalKind::Unpool {
            token1,
            token2,
            amount,
            expected1,
            expected2,
        } => settle_unpool(cx, &signer_seeds, token1, token2, amount, expected1, expected2),
        ProposalKind::UpgradeRouter { router } => settle_router_upgrade(cx, router),
    }
}

// Emit the proposal-level settlement event matching what was executed
pub fn emit_proposal_settlement(id: Pubkey, settlement: &Settlement) {
    match *settlement {
        Settlement::Swapped { returned } => {
            emit!(events::SwapProposalExecuted { id, returned });
        }
        Settlement::Pooled {
            pooled1,
            pooled2,
            returned,
        } => {
            emit!(events::PoolProposalExecuted {
                id,
                pooled1,
                pooled2,
                returned,
            });
        }
        Settlement::Unpooled {
            returned1,
            returned2,
        } => {
            emit!(events::UnpoolProposalExecuted {
                id,
                returned1,
                returned2,
            });
        }
        Settlement::RouterUpgraded { router } => {
            emit!(events::RouterUpgraded { router });
        }
    }
}

fn settle_swap(
    cx: &mut TreasuryContext,
    signer_seeds: &[&[&[u8]]],
    from: Pubkey,
    to: Pubkey,
    amount: u64,
    expected: u64,
) -> Result<Settlement> {
    let source = funded_leg(&from, amount, cx.token_a, cx.treasury)?;
    let destination = receiving_leg(&to, cx.token_b, cx.treasury)?;

    let returned = router::swap(
        cx.router_program,
        &cx.treasury.to_account_info(),
        &pass_through(&[source, destination], cx.remaining),
        router::SwapArgs {
            token_in: from,
            token_out: to,
            amount_in: amount,
            amount_out_min: expected,
            deadline: deadline()?,
        },
        signer_seeds,
    )?;

    require_returned(returned, expected, SchemeError::SwapFailed)?;

    emit!(events::Swap {
        from,
        to,
        amount,
        expected,
        returned,
    });

    Ok(Settlement::Swapped { returned })
}

fn settle_pool(
    cx: &mut TreasuryContext,
    signer_seeds: &[&[&[u8]]],
    token1: Pubkey,
    token2: Pubkey,
    amount1: u64,
    amount2: u64,
    slippage: u64,
) -> Result<Settlement> {
    let min1 = minimum_after_slippage(amount1, slippage)?;
    let min2 = minimum_after_slippage(amount2, slippage)?;

    let leg1 = funded_leg(&token1, amount1, cx.token_a, cx.treasury)?;
    let leg2 = funded_leg(&token2, amount2, cx.token_b, cx.treasury)?;
    let liquidity = receiving_liquidity(cx.liquidity, cx.treasury)?;

    let (pooled1, pooled2, returned) = router::add_liquidity(
        cx.router_program,
        &cx.treasury.to_account_info(),
        &pass_through(&[leg1, leg2, Some(liquidity)], cx.remaining),
        router::AddLiquidityArgs {
            token1,
            token2,
            amount1_desired: amount1,
            amount2_desired: amount2,
            amount1_min: min1,
            amount2_min: min2,
            deadline: deadline()?,
        },
        signer_seeds,
    )?;

    require_returned(pooled1, min1, SchemeError::PoolFailed)?;
    require_returned(pooled2, min2, SchemeError::PoolFailed)?;

    emit!(events::Pool {
        token1,
        token2,
        amount1,
        amount2,
        min1,
        min2,
        pooled1,
        pooled2,
        returned,
    });

    Ok(Settlement::Pooled {
        pooled1,
        pooled2,
        returned,
    })
}

fn settle_unpool(
    cx: &mut TreasuryContext,
    signer_seeds: &[&[&[u8]]],
    token1: Pubkey,
    token2: Pubkey,
    amount: u64,
    expected1: u64,
    expected2: u64,
) -> Result<Settlement> {
    let liquidity = receiving_liquidity(cx.liquidity, cx.treasury)?;
    require!(liquidity.amount >= amount, SchemeError::InsufficientFunds);

    let leg1 = receiving_leg(&token1, cx.token_a, cx.treasury)?;
    let leg2 = receiving_leg(&token2, cx.token_b, cx.treasury)?;

    let (returned1, returned2) = router::remove_liquidity(
        cx.router_program,
        &cx.treasury.to_account_info(),
        &pass_through(&[Some(liquidity), leg1, leg2], cx.remaining),
        router::RemoveLiquidityArgs {
            token1,
            token2,
            liquidity: amount,
            amount1_min: expected1,
            amount2_min: expected2,
            deadline: deadline()?,
        },
        signer_seeds,
    )?;

    require_returned(returned1, expected1, SchemeError::UnpoolFailed)?;
    require_returned(returned2, expected2, SchemeError::UnpoolFailed)?;

    emit!(events::Unpool {
        token1,
        token2,
        amount,
        expected1,
        expected2,
        returned1,
        returned2,
    });

    Ok(Settlement::Unpooled {
        returned1,
        returned2,
    })
}

fn settle_router_upgrade(cx: &mut TreasuryContext, router: Pubkey) -> Result<Settlement> {
    require!(!is_native(&router), SchemeError::InvalidRouter);

    cx.scheme.router = router;

    Ok(Settlement::RouterUpgraded { router })
}

// A leg the treasury pays from: native legs are funded by the treasury's
// lamports, token legs by a treasury-owned token account of that mint
fn funded_leg<'a, 'info>(
    token: &Pubkey,
    amount: u64,
    account: Option<&'a Account<'info, TokenAccount>>,
    treasury: &SystemAccount<'info>,
) -> Result<Option<&'a Account<'info, TokenAccount>>> {
    if is_native(token) {
        require!(
            treasury.lamports() >= amount,
            SchemeError::InsufficientFunds
        );
        return Ok(None);
    }

    let account = validated_token_account(token, account, treasury)?;
    require!(account.amount >= amount, SchemeError::InsufficientFunds);

    Ok(Some(account))
}

// A leg the treasury receives into; no balance requirement
fn receiving_leg<'a, 'info>(
    token: &Pubkey,
    account: Option<&'a Account<'info, TokenAccount>>,
    treasury: &SystemAccount<'info>,
) -> Result<Option<&'a Account<'info, TokenAccount>>> {
    if is_native(token) {
        return Ok(None);
    }

    Ok(Some(validated_token_account(token, account, treasury)?))
}

// The liquidity-token account is always a real token account
fn receiving_liquidity<'a, 'info>(
    account: Option<&'a Account<'info, TokenAccount>>,
    treasury: &SystemAccount<'info>,
) -> Result<&'a Account<'info, TokenAccount>> {
    let account = account.ok_or(SchemeError::MissingTreasuryAccount)?;
    require_keys_eq!(
        account.owner,
        treasury.key(),
        SchemeError::InvalidTreasuryAccount
    );

    Ok(account)
}

fn validated_token_account<'a, 'info>(
    token: &Pubkey,
    account: Option<&'a Account<'info, TokenAccount>>,
    treasury: &SystemAccount<'info>,
) -> Result<&'a Account<'info, TokenAccount>> {
    let account = account.ok_or(SchemeError::MissingTreasuryAccount)?;
    require_keys_eq!(account.mint, *token, SchemeError::InvalidTreasuryAccount);
    require_keys_eq!(
        account.owner,
        treasury.key(),
        SchemeError::InvalidTreasuryAccount
    );

    Ok(account)
}

// Treasury-side accounts first, then the router's own accounts verbatim
fn pass_through<'info>(
    treasury_side: &[Option<&Account<'info, TokenAccount>>],
    remaining: &[AccountInfo<'info>],
) -> Vec<AccountInfo<'info>> {
    let mut infos = Vec::with_capacity(treasury_side.len() + remaining.len());
    for account in treasury_side.iter().flatten() {
        infos.push(account.to_account_info());
    }
    infos.extend_from_slice(remaining);
    infos
}

fn deadline() -> Result<i64> {
    let now = Clock::get()?.unix_timestamp;
    now.checked_add(ROUTER_DEADLINE_WINDOW)
        .ok_or_else(|| error!(SchemeError::Overflow))
}
