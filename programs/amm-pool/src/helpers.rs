// AMM Helper Functions
//
// Token CPIs used by the instructions. Anything leaving a vault or minting LP
// is signed by the pool's config PDA; deposits into a vault and LP burns are
// signed by the user.

use anchor_lang::{
    prelude::*,
    system_program::{
        allocate, assign, create_account, transfer as system_transfer, Allocate, Assign,
        CreateAccount, Transfer as SystemTransfer,
    },
};
use anchor_spl::token::{burn, mint_to, transfer, Burn, MintTo, Transfer};

use crate::state::Config;

// User -> vault, signed by the user
pub fn pay_into_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    source: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    user: &AccountInfo<'info>,
) -> Result<()> {
    let accounts = Transfer {
        from: source.clone(),
        to: vault.clone(),
        authority: user.clone(),
    };
    transfer(CpiContext::new(token_program.clone(), accounts), amount)
}

// Vault -> user, signed by the config PDA
pub fn pay_out_of_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    config: &Account<'info, Config>,
) -> Result<()> {
    let accounts = Transfer {
        from: vault.clone(),
        to: destination.clone(),
        authority: config.to_account_info(),
    };
    config.with_signer_seeds(|signer_seeds| {
        transfer(
            CpiContext::new_with_signer(token_program.clone(), accounts, signer_seeds),
            amount,
        )
    })
}

// LP mint is owned by the config PDA
pub fn mint_lp_to<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint_lp: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
    config: &Account<'info, Config>,
) -> Result<()> {
    let accounts = MintTo {
        mint: mint_lp.clone(),
        to: destination.clone(),
        authority: config.to_account_info(),
    };
    config.with_signer_seeds(|signer_seeds| {
        mint_to(
            CpiContext::new_with_signer(token_program.clone(), accounts, signer_seeds),
            amount,
        )
    })
}

pub fn burn_lp<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint_lp: &AccountInfo<'info>,
    holder_lp: &AccountInfo<'info>,
    holder: &AccountInfo<'info>,
) -> Result<()> {
    let accounts = Burn {
        mint: mint_lp.clone(),
        from: holder_lp.clone(),
        authority: holder.clone(),
    };
    burn(CpiContext::new(token_program.clone(), accounts), amount)
}

// Create a program-owned PDA account of `space` bytes.
// An address that was pre-funded with lamports can't go through
// create_account, so it is topped up, allocated and assigned instead.
pub fn create_pda_account<'info>(
    space: usize,
    payer: &AccountInfo<'info>,
    account: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    account_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[account_seeds];
    let rent_exempt = Rent::get()?.minimum_balance(space);
    let current_lamports = account.lamports();

    if current_lamports == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: account.clone(),
                },
                signer_seeds,
            ),
            rent_exempt,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = rent_exempt.saturating_sub(current_lamports);
    if top_up > 0 {
        system_transfer(
            CpiContext::new(
                system_program.clone(),
                SystemTransfer {
                    from: payer.clone(),
                    to: account.clone(),
                },
            ),
            top_up,
        )?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: account.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: account.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}
