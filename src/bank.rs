// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::account::Account;
use crate::error::BankError;
use crate::ledger::TxKind;
use crate::transaction::Transaction;

/// An account holder. Owns its accounts; accounts refer back to the holder
/// by tax id and display name only.
#[derive(Debug, Clone)]
pub struct Client {
    tax_id: String,
    name: String,
    born: NaiveDate,
    address: String,
    accounts: Vec<Account>,
}

impl Client {
    pub fn new(
        tax_id: impl Into<String>,
        name: impl Into<String>,
        born: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            tax_id: tax_id.into(),
            name: name.into(),
            born,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn born(&self) -> NaiveDate {
        self.born
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Appends to the owned collection. Number uniqueness is the caller's
    /// concern; [`Bank::open_account`] is the checked path.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }

    /// Executes a transaction against one of this client's accounts. Pure
    /// pass-through: legality is entirely the account's and transaction's
    /// business. Transfers go through [`Bank::transfer`], which can reach
    /// the destination account.
    pub fn execute(&mut self, number: &str, transaction: &Transaction) -> Result<(), BankError> {
        let account = self
            .account_mut(number)
            .ok_or_else(|| BankError::AccountNotFound(number.to_string()))?;
        transaction.apply(account, None)
    }
}

/// Process-scoped registry of clients and, through them, every account.
/// Owned by the application entry point and handed to the shell by `&mut`.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    clients: Vec<Client>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a client. Tax ids are unique across the run.
    pub fn register(&mut self, client: Client) -> Result<(), BankError> {
        if self.find(client.tax_id()).is_some() {
            return Err(BankError::DuplicateClient(client.tax_id().to_string()));
        }
        self.clients.push(client);
        Ok(())
    }

    pub fn find(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.tax_id == tax_id)
    }

    pub fn find_mut(&mut self, tax_id: &str) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.tax_id == tax_id)
    }

    /// Clients in registration order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Adds an opened account to the holder's collection, refusing a number
    /// already in use anywhere in the bank.
    pub fn open_account(&mut self, tax_id: &str, account: Account) -> Result<(), BankError> {
        if self.account(account.number()).is_some() {
            return Err(BankError::DuplicateAccount(account.number().to_string()));
        }
        let client = self
            .find_mut(tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.to_string()))?;
        client.add_account(account);
        Ok(())
    }

    /// Looks an account up across all clients, first match in registration
    /// order.
    pub fn account(&self, number: &str) -> Option<&Account> {
        self.clients.iter().find_map(|c| c.account(number))
    }

    pub fn account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.clients.iter_mut().find_map(|c| c.account_mut(number))
    }

    fn locate(&self, number: &str) -> Option<(usize, usize)> {
        for (ci, client) in self.clients.iter().enumerate() {
            if let Some(ai) = client.accounts.iter().position(|a| a.number() == number) {
                return Some((ci, ai));
            }
        }
        None
    }

    /// Moves `amount` between two accounts, which may belong to different
    /// clients or be the same account. Runs the transfer protocol: full
    /// withdrawal checks on the source, deposit's own rule on the
    /// destination, one `Transfer` entry on the source ledger only.
    pub fn transfer(
        &mut self,
        from_number: &str,
        to_number: &str,
        amount: Decimal,
    ) -> Result<(), BankError> {
        let (sci, sai) = self
            .locate(from_number)
            .ok_or_else(|| BankError::AccountNotFound(from_number.to_string()))?;
        let (dci, dai) = self
            .locate(to_number)
            .ok_or_else(|| BankError::AccountNotFound(to_number.to_string()))?;

        if (sci, sai) == (dci, dai) {
            // Transfer to self: withdraw then redeposit on the one account.
            let account = &mut self.clients[sci].accounts[sai];
            account.withdraw(amount)?;
            account.deposit(amount)?;
            account.ledger_mut().append(TxKind::Transfer, amount);
            return Ok(());
        }

        let transaction = Transaction::Transfer { amount };
        if sci == dci {
            let accounts = &mut self.clients[sci].accounts;
            let (source, target) = two_mut(accounts, sai, dai);
            transaction.apply(source, Some(target))
        } else {
            let (source_client, target_client) = two_mut(&mut self.clients, sci, dci);
            transaction.apply(
                &mut source_client.accounts[sai],
                Some(&mut target_client.accounts[dai]),
            )
        }
    }
}

// Disjoint mutable borrows of two slice elements, i != j.
fn two_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = slice.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = slice.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
