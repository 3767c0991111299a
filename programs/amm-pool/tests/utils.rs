// Test utilities for the AMM pool program

#![cfg(feature = "test-sbf")]
#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, AnchorDeserialize};
use litesvm::{types::TransactionMetadata, LiteSVM};
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

use amm_pool::state::{Config, PoolBalances, SwapResult};

// Program ID matching declare_id! (amm_pool)
pub const AMM_PROGRAM_ID: Pubkey = Pubkey::new_from_array(amm_pool::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const LP_MINT_SEED: &[u8] = b"lp";

pub const DECIMALS: u8 = 6;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the AMM program built by `cargo build-sbf`
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/amm_pool.so");
    let _ = svm.add_program(AMM_PROGRAM_ID, program_bytes);
    svm
}

pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn derive_config_pda(seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED, &seed.to_le_bytes()], &AMM_PROGRAM_ID)
}

pub fn derive_lp_mint_pda(config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LP_MINT_SEED, config.as_ref()], &AMM_PROGRAM_ID)
}

// Every address a pool instruction touches, derived from the seed and mints
pub struct PoolAddresses {
    pub config: Pubkey,
    pub mint_lp: Pubkey,
    pub vault_x: Pubkey,
    pub vault_y: Pubkey,
}

impl PoolAddresses {
    pub fn new(seed: u64, mint_x: &Pubkey, mint_y: &Pubkey) -> Self {
        let (config, _) = derive_config_pda(seed);
        let (mint_lp, _) = derive_lp_mint_pda(&config);
        Self {
            config,
            mint_lp,
            vault_x: get_associated_token_address(&config, mint_x),
            vault_y: get_associated_token_address(&config, mint_y),
        }
    }
}

pub fn build_initialize_ix(
    admin: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    fee_bps: u16,
    authority: Option<Pubkey>,
) -> Instruction {
    let pool = PoolAddresses::new(seed, mint_x, mint_y);

    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(&seed.to_le_bytes());
    data.extend_from_slice(&fee_bps.to_le_bytes());
    match authority {
        Some(authority) => {
            data.push(1);
            data.extend_from_slice(authority.as_ref());
        }
        None => data.push(0),
    }

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(*mint_x, false),
            AccountMeta::new_readonly(*mint_y, false),
            AccountMeta::new(pool.config, false),
            AccountMeta::new(pool.mint_lp, false),
            AccountMeta::new(pool.vault_x, false),
            AccountMeta::new(pool.vault_y, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Deposit and withdraw share one account layout
fn liquidity_accounts(
    user: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
) -> Vec<AccountMeta> {
    let pool = PoolAddresses::new(seed, mint_x, mint_y);

    vec![
        AccountMeta::new(*user, true),
        AccountMeta::new_readonly(pool.config, false),
        AccountMeta::new_readonly(*mint_x, false),
        AccountMeta::new_readonly(*mint_y, false),
        AccountMeta::new(pool.mint_lp, false),
        AccountMeta::new(pool.vault_x, false),
        AccountMeta::new(pool.vault_y, false),
        AccountMeta::new(get_associated_token_address(user, mint_x), false),
        AccountMeta::new(get_associated_token_address(user, mint_y), false),
        AccountMeta::new(get_associated_token_address(user, &pool.mint_lp), false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program, false),
    ]
}

// Positions in the deposit/withdraw account list
pub const LIQUIDITY_MINT_X_INDEX: usize = 2;
pub const LIQUIDITY_MINT_Y_INDEX: usize = 3;
pub const LIQUIDITY_MINT_LP_INDEX: usize = 4;
pub const LIQUIDITY_VAULT_X_INDEX: usize = 5;

// Position of vault_x in the swap account list
pub const SWAP_VAULT_X_INDEX: usize = 4;

pub fn build_deposit_ix(
    user: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    lp_amount: u64,
    max_x: u64,
    max_y: u64,
) -> Instruction {
    let mut data = anchor_discriminator("deposit").to_vec();
    data.extend_from_slice(&lp_amount.to_le_bytes());
    data.extend_from_slice(&max_x.to_le_bytes());
    data.extend_from_slice(&max_y.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: liquidity_accounts(user, mint_x, mint_y, seed),
        data,
    }
}

pub fn build_withdraw_ix(
    user: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    lp_amount: u64,
    min_x: u64,
    min_y: u64,
) -> Instruction {
    let mut data = anchor_discriminator("withdraw").to_vec();
    data.extend_from_slice(&lp_amount.to_le_bytes());
    data.extend_from_slice(&min_x.to_le_bytes());
    data.extend_from_slice(&min_y.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: liquidity_accounts(user, mint_x, mint_y, seed),
        data,
    }
}

pub fn build_swap_ix(
    user: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    x_to_y: bool,
    amount_in: u64,
    min_amount_out: u64,
) -> Instruction {
    let pool = PoolAddresses::new(seed, mint_x, mint_y);

    let mut data = anchor_discriminator("swap").to_vec();
    data.push(x_to_y as u8);
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&min_amount_out.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(pool.config, false),
            AccountMeta::new_readonly(*mint_x, false),
            AccountMeta::new_readonly(*mint_y, false),
            AccountMeta::new(pool.vault_x, false),
            AccountMeta::new(pool.vault_y, false),
            AccountMeta::new(get_associated_token_address(user, mint_x), false),
            AccountMeta::new(get_associated_token_address(user, mint_y), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

fn build_toggle_ix(method: &str, authority: &Pubkey, seed: u64) -> Instruction {
    let (config, _) = derive_config_pda(seed);

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(config, false),
        ],
        data: anchor_discriminator(method).to_vec(),
    }
}

pub fn build_lock_ix(authority: &Pubkey, seed: u64) -> Instruction {
    build_toggle_ix("lock", authority, seed)
}

pub fn build_unlock_ix(authority: &Pubkey, seed: u64) -> Instruction {
    build_toggle_ix("unlock", authority, seed)
}

pub fn send_tx(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> TransactionMetadata {
    // Fresh blockhash so repeated identical instructions are not deduplicated
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_ok(), "Transaction failed: {:?}", result.as_ref().err());
    result.unwrap()
}

pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap())
}

pub fn pool_balances(meta: &TransactionMetadata) -> PoolBalances {
    PoolBalances::try_from_slice(&meta.return_data.data).expect("deposit/withdraw return data")
}

pub fn swap_result(meta: &TransactionMetadata) -> SwapResult {
    SwapResult::try_from_slice(&meta.return_data.data).expect("swap return data")
}

pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, account).expect("token account should exist");
    account.amount
}

pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let mint: spl_token::state::Mint = get_spl_account(svm, mint).expect("mint should exist");
    mint.supply
}

pub fn read_config(svm: &LiteSVM, seed: u64) -> Config {
    let (config, _) = derive_config_pda(seed);
    let account = svm.get_account(&config).expect("config should exist");
    Config::try_deserialize(&mut account.data.as_slice()).expect("config should decode")
}

// A pool with an admin who owns both mints and is the lock authority,
// plus a user funded with `user_funds` of each token.
pub struct TestPool {
    pub svm: LiteSVM,
    pub admin: Keypair,
    pub user: Keypair,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub seed: u64,
    pub addresses: PoolAddresses,
}

impl TestPool {
    pub fn new(seed: u64, fee_bps: u16, user_funds: u64) -> Self {
        Self::with_authority(seed, fee_bps, user_funds, true)
    }

    pub fn with_authority(
        seed: u64,
        fee_bps: u16,
        user_funds: u64,
        admin_is_authority: bool,
    ) -> Self {
        let mut svm = setup_svm();
        let admin = create_funded_account(&mut svm, 10 * LAMPORTS_PER_SOL);
        let user = create_funded_account(&mut svm, 10 * LAMPORTS_PER_SOL);

        let mint_x = create_mint(&mut svm, &admin);
        let mint_y = create_mint(&mut svm, &admin);

        let authority = admin_is_authority.then(|| admin.pubkey());
        let init_ix =
            build_initialize_ix(&admin.pubkey(), &mint_x, &mint_y, seed, fee_bps, authority);
        send_tx(&mut svm, init_ix, &admin, &[&admin]);

        for mint in [&mint_x, &mint_y] {
            let ata = CreateAssociatedTokenAccount::new(&mut svm, &user, mint)
                .owner(&user.pubkey())
                .send()
                .expect("Failed to create user ATA");
            MintTo::new(&mut svm, &admin, mint, &ata, user_funds)
                .owner(&admin)
                .send()
                .expect("Failed to mint to user");
        }

        let addresses = PoolAddresses::new(seed, &mint_x, &mint_y);

        Self {
            svm,
            admin,
            user,
            mint_x,
            mint_y,
            seed,
            addresses,
        }
    }

    pub fn user_x(&self) -> Pubkey {
        get_associated_token_address(&self.user.pubkey(), &self.mint_x)
    }

    pub fn user_y(&self) -> Pubkey {
        get_associated_token_address(&self.user.pubkey(), &self.mint_y)
    }

    pub fn user_lp(&self) -> Pubkey {
        get_associated_token_address(&self.user.pubkey(), &self.addresses.mint_lp)
    }

    pub fn reserves(&self) -> (u64, u64) {
        (
            token_balance(&self.svm, &self.addresses.vault_x),
            token_balance(&self.svm, &self.addresses.vault_y),
        )
    }

    pub fn lp_supply(&self) -> u64 {
        mint_supply(&self.svm, &self.addresses.mint_lp)
    }

    pub fn deposit_ix(&self, lp_amount: u64, max_x: u64, max_y: u64) -> Instruction {
        build_deposit_ix(
            &self.user.pubkey(),
            &self.mint_x,
            &self.mint_y,
            self.seed,
            lp_amount,
            max_x,
            max_y,
        )
    }

    pub fn withdraw_ix(&self, lp_amount: u64, min_x: u64, min_y: u64) -> Instruction {
        build_withdraw_ix(
            &self.user.pubkey(),
            &self.mint_x,
            &self.mint_y,
            self.seed,
            lp_amount,
            min_x,
            min_y,
        )
    }

    pub fn swap_ix(&self, x_to_y: bool, amount_in: u64, min_amount_out: u64) -> Instruction {
        build_swap_ix(
            &self.user.pubkey(),
            &self.mint_x,
            &self.mint_y,
            self.seed,
            x_to_y,
            amount_in,
            min_amount_out,
        )
    }

    pub fn send_as_user(&mut self, ix: Instruction) -> TransactionMetadata {
        send_tx(&mut self.svm, ix, &self.user, &[&self.user])
    }

    pub fn fail_as_user(&mut self, ix: Instruction) -> String {
        send_tx_expect_failure(&mut self.svm, ix, &self.user, &[&self.user])
    }

    pub fn send_as_admin(&mut self, ix: Instruction) -> TransactionMetadata {
        send_tx(&mut self.svm, ix, &self.admin, &[&self.admin])
    }

    pub fn fail_as_admin(&mut self, ix: Instruction) -> String {
        send_tx_expect_failure(&mut self.svm, ix, &self.admin, &[&self.admin])
    }
}

pub fn create_mint(svm: &mut LiteSVM, authority: &Keypair) -> Pubkey {
    CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint")
}
