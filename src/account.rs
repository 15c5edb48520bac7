// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use rust_decimal::Decimal;

use crate::bank::Client;
use crate::error::BankError;
use crate::ledger::{Ledger, TxKind};

/// Every account belongs to the single hardcoded branch.
pub const BRANCH: &str = "0001";

/// Checking defaults: largest single withdrawal and lifetime withdrawal count.
pub const DEFAULT_OVERDRAFT_LIMIT: i64 = 500;
pub const DEFAULT_WITHDRAWAL_CAP: u32 = 3;

/// Savings default interest rate, in percent.
pub const DEFAULT_INTEREST_RATE: i64 = 5;

/// Variant-specific account parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    Checking {
        overdraft_limit: Decimal,
        withdrawal_cap: u32,
    },
    Savings {
        interest_rate: Decimal,
    },
}

impl AccountKind {
    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Checking { .. } => "Checking",
            AccountKind::Savings { .. } => "Savings",
        }
    }
}

/// A single checking or savings account. The balance is only ever mutated
/// through [`Account::deposit`], [`Account::withdraw`] and
/// [`Account::apply_interest`].
#[derive(Debug, Clone)]
pub struct Account {
    number: String,
    holder_id: String,
    holder_name: String,
    balance: Decimal,
    kind: AccountKind,
    ledger: Ledger,
}

impl Account {
    fn open(holder: &Client, number: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            number: number.into(),
            holder_id: holder.tax_id().to_string(),
            holder_name: holder.name().to_string(),
            balance: Decimal::ZERO,
            kind,
            ledger: Ledger::new(),
        }
    }

    /// Opens a checking account with the default overdraft limit and
    /// withdrawal cap. The account is not registered with the client; the
    /// caller adds it to the holder's collection.
    pub fn open_checking(holder: &Client, number: impl Into<String>) -> Self {
        Self::open_checking_with(
            holder,
            number,
            Decimal::from(DEFAULT_OVERDRAFT_LIMIT),
            DEFAULT_WITHDRAWAL_CAP,
        )
    }

    pub fn open_checking_with(
        holder: &Client,
        number: impl Into<String>,
        overdraft_limit: Decimal,
        withdrawal_cap: u32,
    ) -> Self {
        Self::open(
            holder,
            number,
            AccountKind::Checking {
                overdraft_limit,
                withdrawal_cap,
            },
        )
    }

    /// Opens a savings account with the default stored interest rate.
    pub fn open_savings(holder: &Client, number: impl Into<String>) -> Self {
        Self::open_savings_with(holder, number, Decimal::from(DEFAULT_INTEREST_RATE))
    }

    pub fn open_savings_with(
        holder: &Client,
        number: impl Into<String>,
        interest_rate: Decimal,
    ) -> Self {
        Self::open(holder, number, AccountKind::Savings { interest_rate })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH
    }

    pub fn holder_id(&self) -> &str {
        &self.holder_id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Stored interest rate, present only on savings accounts.
    pub fn interest_rate(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(interest_rate),
            AccountKind::Checking { .. } => None,
        }
    }

    /// Credits `amount` to the balance. Rejects non-positive amounts.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    /// Debits `amount` from the balance.
    ///
    /// Checking accounts check the overdraft limit first, then the lifetime
    /// withdrawal cap (counting only `Withdrawal` ledger entries, so
    /// transfers never consume the cap), and only then the shared rule:
    /// the amount must be positive and covered by the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if let AccountKind::Checking {
            overdraft_limit,
            withdrawal_cap,
        } = self.kind
        {
            if amount > overdraft_limit {
                return Err(BankError::OverdraftLimitExceeded);
            }
            let withdrawals = self.ledger.entries(Some(TxKind::Withdrawal)).count();
            if withdrawals >= withdrawal_cap as usize {
                return Err(BankError::WithdrawalCapExceeded);
            }
        }
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(BankError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Credits `balance * rate / 100` and returns the interest amount.
    /// Refused on a non-positive balance. Defined for every variant; only
    /// savings accounts carry a stored rate of their own.
    pub fn apply_interest(&mut self, rate_percent: Decimal) -> Result<Decimal, BankError> {
        if self.balance <= Decimal::ZERO {
            return Err(BankError::NoPositiveBalance);
        }
        let interest = self.balance * rate_percent / Decimal::ONE_HUNDRED;
        self.balance += interest;
        Ok(interest)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch:\t\t{}", self.branch())?;
        writeln!(f, "Number:\t\t{}", self.number)?;
        writeln!(f, "Holder:\t\t{}", self.holder_name)?;
        write!(f, "Balance:\tR$ {}", self.balance.round_dp(2))
    }
}
