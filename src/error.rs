// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Expected-outcome failures of the banking core. None of these are fatal:
/// a failed operation leaves every balance and ledger untouched, and the
/// caller may simply re-issue with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("withdrawal amount exceeds the overdraft limit")]
    OverdraftLimitExceeded,

    #[error("maximum number of withdrawals reached")]
    WithdrawalCapExceeded,

    #[error("no positive balance to apply interest on")]
    NoPositiveBalance,

    #[error("transfer requires a destination account")]
    MissingDestination,

    #[error("no client registered under '{0}'")]
    ClientNotFound(String),

    #[error("no account numbered '{0}'")]
    AccountNotFound(String),

    #[error("a client is already registered under '{0}'")]
    DuplicateClient(String),

    #[error("account number '{0}' is already taken")]
    DuplicateAccount(String),
}
