// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;

/// Kind tag recorded with every ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TxKind {
    Deposit,
    Withdrawal,
    Transfer,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Deposit => "Deposit",
            TxKind::Withdrawal => "Withdrawal",
            TxKind::Transfer => "Transfer",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = String;

    // Statement filters arrive as free text; matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(TxKind::Deposit),
            "withdrawal" => Ok(TxKind::Withdrawal),
            "transfer" => Ok(TxKind::Transfer),
            other => Err(format!(
                "unknown transaction kind '{}' (use deposit|withdrawal|transfer)",
                other
            )),
        }
    }
}

/// One committed line of an account's history.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntry {
    pub kind: TxKind,
    pub amount: Decimal,
    pub at: DateTime<Local>,
}

/// Append-only transaction history of a single account. Entries are never
/// edited or removed.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the wall clock at the moment the
    /// mutation committed.
    pub fn append(&mut self, kind: TxKind, amount: Decimal) {
        self.entries.push(LedgerEntry {
            kind,
            amount,
            at: Local::now(),
        });
    }

    /// Lazy traversal in insertion order, optionally restricted to one kind.
    /// Each call yields a fresh iterator, so the report is restartable.
    pub fn entries(&self, kind: Option<TxKind>) -> impl Iterator<Item = &LedgerEntry> + '_ {
        self.entries
            .iter()
            .filter(move |e| kind.is_none_or(|k| e.kind == k))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
