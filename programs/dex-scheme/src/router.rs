// Exchange-router CPI client
//
// The router is an external program bound on the scheme at initialization
// and treated as a black box: this module only builds its instructions,
// invokes them with the treasury PDA as signing authority, and decodes the
// amounts it reports through return data. Pool and pair accounts the
// router needs are passed through verbatim by the caller.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke_signed};

use crate::{errors::SchemeError, helpers::is_native};

// 8-byte instruction discriminator: sighash of "global:<method>"
pub fn discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    out
}

// Discriminator followed by the borsh-serialized arguments
pub fn encode<T: AnchorSerialize>(method: &str, args: &T) -> Result<Vec<u8>> {
    let mut data = discriminator(method).to_vec();
    args.serialize(&mut data)
        .map_err(|_| error!(SchemeError::InvalidRouterResponse))?;
    Ok(data)
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct SwapArgs {
    pub token_in: Pubkey,
    pub token_out: Pubkey,
    pub amount_in: u64,
    pub amount_out_min: u64,
    pub deadline: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct AddLiquidityArgs {
    pub token1: Pubkey,
    pub token2: Pubkey,
    pub amount1_desired: u64,
    pub amount2_desired: u64,
    pub amount1_min: u64,
    pub amount2_min: u64,
    pub deadline: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RemoveLiquidityArgs {
    pub token1: Pubkey,
    pub token2: Pubkey,
    pub liquidity: u64,
    pub amount1_min: u64,
    pub amount2_min: u64,
    pub deadline: i64,
}

// Method routing: the native-currency sentinel selects the native variant
pub fn swap_method(token_in: &Pubkey, token_out: &Pubkey) -> &'static str {
    match (is_native(token_in), is_native(token_out)) {
        (true, _) => "swap_exact_native_for_tokens",
        (_, true) => "swap_exact_tokens_for_native",
        _ => "swap_exact_tokens_for_tokens",
    }
}

pub fn add_liquidity_method(token1: &Pubkey, token2: &Pubkey) -> &'static str {
    if is_native(token1) || is_native(token2) {
        "add_liquidity_native"
    } else {
        "add_liquidity"
    }
}

pub fn remove_liquidity_method(token1: &Pubkey, token2: &Pubkey) -> &'static str {
    if is_native(token1) || is_native(token2) {
        "remove_liquidity_native"
    } else {
        "remove_liquidity"
    }
}

// Swap `amount_in`; returns the amount actually received
// The router reports the per-hop amounts; the last entry is the output
pub fn swap<'info>(
    program: &AccountInfo<'info>,
    treasury: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    args: SwapArgs,
    signer_seeds: &[&[&[u8]]],
) -> Result<u64> {
    let method = swap_method(&args.token_in, &args.token_out);
    invoke_router(program, treasury, accounts, method, &args, signer_seeds)?;

    let amounts: Vec<u64> = read_return(program.key)?;
    amounts
        .last()
        .copied()
        .ok_or_else(|| error!(SchemeError::InvalidRouterResponse))
}

// Deposit liquidity; returns (pooled1, pooled2, liquidity minted)
pub fn add_liquidity<'info>(
    program: &AccountInfo<'info>,
    treasury: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    args: AddLiquidityArgs,
    signer_seeds: &[&[&[u8]]],
) -> Result<(u64, u64, u64)> {
    let method = add_liquidity_method(&args.token1, &args.token2);
    invoke_router(program, treasury, accounts, method, &args, signer_seeds)?;

    read_return(program.key)
}

// Burn liquidity; returns (returned1, returned2)
pub fn remove_liquidity<'info>(
    program: &AccountInfo<'info>,
    treasury: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    args: RemoveLiquidityArgs,
    signer_seeds: &[&[&[u8]]],
) -> Result<(u64, u64)> {
    let method = remove_liquidity_method(&args.token1, &args.token2);
    invoke_router(program, treasury, accounts, method, &args, signer_seeds)?;

    read_return(program.key)
}

// The treasury PDA leads the account list as the signing authority; every
// other account is forwarded with its incoming writability
fn invoke_router<'info, T: AnchorSerialize>(
    program: &AccountInfo<'info>,
    treasury: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    method: &str,
    args: &T,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let mut metas = Vec::with_capacity(accounts.len() + 1);
    metas.push(AccountMeta::new(*treasury.key, true));
    for info in accounts {
        metas.push(if info.is_writable {
            AccountMeta::new(*info.key, false)
        } else {
            AccountMeta::new_readonly(*info.key, false)
        });
    }

    let instruction = Instruction {
        program_id: *program.key,
        accounts: metas,
        data: encode(method, args)?,
    };

    let mut infos = Vec::with_capacity(accounts.len() + 2);
    infos.push(treasury.clone());
    infos.extend_from_slice(accounts);
    infos.push(program.clone());

    invoke_signed(&instruction, &infos, signer_seeds).map_err(Into::into)
}

fn read_return<T: AnchorDeserialize>(router: &Pubkey) -> Result<T> {
    let (program_id, data) =
        get_return_data().ok_or(SchemeError::InvalidRouterResponse)?;
    require_keys_eq!(program_id, *router, SchemeError::InvalidRouterResponse);

    T::try_from_slice(&data).map_err(|_| error!(SchemeError::InvalidRouterResponse))
}
