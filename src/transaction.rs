// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::account::Account;
use crate::error::BankError;
use crate::ledger::TxKind;

/// A single user action against an account. Transient: constructed per
/// action, applied once, then discarded — its only lasting trace is the
/// ledger entry it causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Decimal },
    Withdrawal { amount: Decimal },
    Transfer { amount: Decimal },
}

impl Transaction {
    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit { amount }
            | Transaction::Withdrawal { amount }
            | Transaction::Transfer { amount } => *amount,
        }
    }

    pub fn kind(&self) -> TxKind {
        match self {
            Transaction::Deposit { .. } => TxKind::Deposit,
            Transaction::Withdrawal { .. } => TxKind::Withdrawal,
            Transaction::Transfer { .. } => TxKind::Transfer,
        }
    }

    /// Applies this transaction to `account`, appending one ledger entry on
    /// success. A transfer additionally needs its destination as
    /// `counterparty`; the destination leg runs under deposit's own rule
    /// only, and the single ledger entry lands on the source account. If the
    /// withdraw leg fails the whole transfer is abandoned: no deposit, no
    /// entry anywhere.
    pub fn apply(
        &self,
        account: &mut Account,
        counterparty: Option<&mut Account>,
    ) -> Result<(), BankError> {
        match self {
            Transaction::Deposit { amount } => {
                account.deposit(*amount)?;
                account.ledger_mut().append(TxKind::Deposit, *amount);
                Ok(())
            }
            Transaction::Withdrawal { amount } => {
                account.withdraw(*amount)?;
                account.ledger_mut().append(TxKind::Withdrawal, *amount);
                Ok(())
            }
            Transaction::Transfer { amount } => {
                let target = counterparty.ok_or(BankError::MissingDestination)?;
                account.withdraw(*amount)?;
                target.deposit(*amount)?;
                account.ledger_mut().append(TxKind::Transfer, *amount);
                Ok(())
            }
        }
    }
}
