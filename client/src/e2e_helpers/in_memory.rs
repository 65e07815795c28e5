//! An in-memory stand-in for a cluster running the `solbank` program.
//!
//! Accounts live in a `RefCell<HashMap>` account store. `send_instructions` executes `create`,
//! `deposit` and `withdraw` the way the program does (PDA check, one bank per wallet, lamport
//! transfers, rent exemption, owner check) and commits a transaction's effects only if every
//! instruction in it succeeds. Failures can be injected per account fetch and per submission.

use std::{
    cell::{
        Cell,
        RefCell,
    },
    collections::{
        HashMap,
        HashSet,
        VecDeque,
    },
};

use solana_account::Account;
use solana_address::Address;
use solana_instruction::Instruction;
use solana_keypair::{
    Keypair,
    Signer,
};
use solana_sdk::signature::Signature;
use solbank_interface::{
    error::SolbankError,
    instructions::{
        AmountInstructionData,
        CreateInstructionData,
        SolbankInstruction,
    },
    program,
    seeds::find_bank_address,
    state::{
        Bank,
        BANK_ACCOUNT_SPACE,
    },
    SYSTEM_PROGRAM_ID,
};

use crate::{
    cluster::Cluster,
    error::{
        BankError,
        BankErrorKind,
    },
};

const ACCOUNT_STORAGE_OVERHEAD: u64 = 128;
const LAMPORTS_PER_BYTE_YEAR: u64 = 3480;
const EXEMPTION_THRESHOLD_YEARS: u64 = 2;

/// The default rent-exempt minimum for an account holding `data_len` bytes.
pub fn rent_exempt_minimum(data_len: usize) -> u64 {
    (ACCOUNT_STORAGE_OVERHEAD + data_len as u64) * LAMPORTS_PER_BYTE_YEAR * EXEMPTION_THRESHOLD_YEARS
}

type AccountStore = HashMap<Address, Account>;

#[derive(Default)]
pub struct InMemoryCluster {
    pub account_store: RefCell<AccountStore>,
    failing_fetches: RefCell<HashSet<Address>>,
    rejections: RefCell<VecDeque<String>>,
    sent_transactions: Cell<u64>,
}

impl InMemoryCluster {
    pub fn new() -> Self {
        Default::default()
    }

    /// Like [`InMemoryCluster::new`], with an executable account at the program id holding
    /// `lamports` and `data_len` bytes of program data.
    pub fn with_program_account(lamports: u64, data_len: usize) -> Self {
        let cluster = Self::new();
        cluster.set_account(
            program::ID,
            Account {
                lamports,
                data: vec![0; data_len],
                owner: Address::new_unique(),
                executable: true,
                rent_epoch: 0,
            },
        );

        cluster
    }

    pub fn set_account(&self, address: Address, account: Account) {
        self.account_store.borrow_mut().insert(address, account);
    }

    pub fn get_account(&self, address: &Address) -> Option<Account> {
        self.account_store.borrow().get(address).cloned()
    }

    pub fn lamports(&self, address: &Address) -> u64 {
        self.get_account(address).map_or(0, |account| account.lamports)
    }

    /// Credits `lamports` to a system-owned account, creating it if needed.
    pub fn fund(&self, address: &Address, lamports: u64) {
        self.account_store
            .borrow_mut()
            .entry(*address)
            .or_insert_with(|| Account::new(0, 0, &SYSTEM_PROGRAM_ID))
            .lamports += lamports;
    }

    /// Makes every subsequent [`Cluster::account`] call for `address` fail with an RPC error.
    pub fn fail_account_fetch(&self, address: Address) {
        self.failing_fetches.borrow_mut().insert(address);
    }

    pub fn clear_fetch_failures(&self) {
        self.failing_fetches.borrow_mut().clear();
    }

    /// Rejects the next submitted transaction with `reason` before executing it.
    pub fn reject_next_send(&self, reason: impl Into<String>) {
        self.rejections.borrow_mut().push_back(reason.into());
    }

    /// Number of transactions that landed.
    pub fn sent_transactions(&self) -> u64 {
        self.sent_transactions.get()
    }

    fn next_signature(&self) -> Signature {
        let count = self.sent_transactions.get() + 1;
        self.sent_transactions.set(count);
        let mut bytes = [0u8; 64];
        bytes[..8].copy_from_slice(&count.to_le_bytes());

        Signature::from(bytes)
    }
}

impl Cluster for InMemoryCluster {
    async fn program_accounts(&self, program_id: &Address) -> Result<Vec<Address>, BankError> {
        Ok(self
            .account_store
            .borrow()
            .iter()
            .filter(|(_, account)| &account.owner == program_id)
            .map(|(address, _)| *address)
            .collect())
    }

    async fn account(&self, address: &Address) -> Result<Option<Account>, BankError> {
        if self.failing_fetches.borrow().contains(address) {
            return Err(BankError::msg(
                BankErrorKind::Rpc,
                format!("Injected fetch failure for {address}"),
            ));
        }

        Ok(self.get_account(address))
    }

    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, BankError> {
        Ok(rent_exempt_minimum(data_len))
    }

    async fn balance(&self, address: &Address) -> Result<u64, BankError> {
        Ok(self.lamports(address))
    }

    async fn send_instructions(
        &self,
        payer: &Keypair,
        instructions: &[Instruction],
    ) -> Result<Signature, BankError> {
        if let Some(reason) = self.rejections.borrow_mut().pop_front() {
            return Err(BankError::msg(BankErrorKind::Rejected, reason));
        }

        // Execute against a copy so a failing instruction leaves the store untouched.
        let mut staged = self.account_store.borrow().clone();
        for ixn in instructions {
            process_instruction(&mut staged, &payer.pubkey(), ixn)
                .map_err(|e| BankError::new(BankErrorKind::Rejected, e))?;
        }
        *self.account_store.borrow_mut() = staged;

        Ok(self.next_signature())
    }
}

fn process_instruction(
    store: &mut AccountStore,
    signer: &Address,
    ixn: &Instruction,
) -> Result<(), SolbankError> {
    if ixn.program_id != program::ID {
        return Err(SolbankError::IncorrectProgramId);
    }
    if ixn
        .accounts
        .iter()
        .any(|meta| meta.is_signer && &meta.pubkey != signer)
    {
        return Err(SolbankError::MissingRequiredSigner);
    }

    let (tag, args) = SolbankInstruction::split_data(&ixn.data)?;
    let account_at = |index: usize| {
        ixn.accounts
            .get(index)
            .map(|meta| meta.pubkey)
            .ok_or(SolbankError::InsufficientByteLength)
    };
    let bank = account_at(0)?;
    let user = account_at(1)?;
    if !ixn.accounts[1].is_signer {
        return Err(SolbankError::MissingRequiredSigner);
    }

    match tag {
        SolbankInstruction::Create => {
            let CreateInstructionData { name } = CreateInstructionData::unpack(args)?;
            create(store, bank, user, name)
        }
        SolbankInstruction::Deposit => {
            let AmountInstructionData { amount } = AmountInstructionData::unpack(args)?;
            deposit(store, bank, user, amount)
        }
        SolbankInstruction::Withdraw => {
            let AmountInstructionData { amount } = AmountInstructionData::unpack(args)?;
            withdraw(store, bank, user, amount)
        }
    }
}

fn create(
    store: &mut AccountStore,
    bank: Address,
    user: Address,
    name: String,
) -> Result<(), SolbankError> {
    let (expected, _bump) = find_bank_address(&user);
    if bank != expected {
        return Err(SolbankError::AddressDerivationFailed);
    }
    if store.get(&bank).is_some_and(|account| account.lamports > 0) {
        return Err(SolbankError::AccountAlreadyInUse);
    }

    let rent = rent_exempt_minimum(BANK_ACCOUNT_SPACE);
    debit(store, &user, rent)?;
    store.insert(
        bank,
        Account {
            lamports: rent,
            data: Bank::new(name, 0, user).pack_account_data(BANK_ACCOUNT_SPACE)?,
            owner: program::ID,
            executable: false,
            rent_epoch: 0,
        },
    );

    Ok(())
}

fn deposit(
    store: &mut AccountStore,
    bank: Address,
    user: Address,
    amount: u64,
) -> Result<(), SolbankError> {
    let mut state = load_bank(store, &bank)?;
    debit(store, &user, amount)?;
    state.balance = state
        .balance
        .checked_add(amount)
        .ok_or(SolbankError::InvalidInstructionData)?;
    store_bank(store, &bank, &state, amount as i128)
}

fn withdraw(
    store: &mut AccountStore,
    bank: Address,
    user: Address,
    amount: u64,
) -> Result<(), SolbankError> {
    let mut state = load_bank(store, &bank)?;
    if state.owner() != user {
        return Err(SolbankError::BankOwnerMismatch);
    }

    let account = store.get(&bank).ok_or(SolbankError::InvalidAccountData)?;
    let available = account
        .lamports
        .checked_sub(rent_exempt_minimum(account.data.len()))
        .ok_or(SolbankError::InsufficientFunds)?;
    if available < amount {
        return Err(SolbankError::InsufficientFunds);
    }

    state.balance = state.balance.saturating_sub(amount);
    store_bank(store, &bank, &state, -(amount as i128))?;
    store
        .entry(user)
        .or_insert_with(|| Account::new(0, 0, &SYSTEM_PROGRAM_ID))
        .lamports += amount;

    Ok(())
}

fn load_bank(store: &AccountStore, bank: &Address) -> Result<Bank, SolbankError> {
    let account = store.get(bank).ok_or(SolbankError::AccountNotInitialized)?;
    if account.owner != program::ID {
        return Err(SolbankError::IncorrectProgramId);
    }

    Bank::try_from_account_data(&account.data)
}

fn store_bank(
    store: &mut AccountStore,
    address: &Address,
    bank: &Bank,
    lamport_delta: i128,
) -> Result<(), SolbankError> {
    let account = store
        .get_mut(address)
        .ok_or(SolbankError::AccountNotInitialized)?;
    account.data = bank.pack_account_data(account.data.len())?;
    account.lamports = u64::try_from(account.lamports as i128 + lamport_delta)
        .map_err(|_| SolbankError::InsufficientFunds)?;

    Ok(())
}

fn debit(store: &mut AccountStore, address: &Address, lamports: u64) -> Result<(), SolbankError> {
    let account = store
        .get_mut(address)
        .ok_or(SolbankError::InsufficientFunds)?;
    account.lamports = account
        .lamports
        .checked_sub(lamports)
        .ok_or(SolbankError::InsufficientFunds)?;

    Ok(())
}
