// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::bank::Bank;
use crate::error::BankError;
use crate::ledger::TxKind;
use crate::utils::{fmt_timestamp, maybe_print_json, pretty_table};

#[derive(Serialize)]
pub struct StatementRow {
    pub date: String,
    pub kind: String,
    pub amount: String,
}

pub fn handle(bank: &Bank, sub: &clap::ArgMatches) -> Result<()> {
    let number = sub.get_one::<String>("account").unwrap().trim();
    let kind = match sub.get_one::<String>("kind") {
        Some(s) => match s.parse::<TxKind>() {
            Ok(k) => Some(k),
            Err(msg) => {
                println!("{}", msg);
                return Ok(());
            }
        },
        None => None,
    };

    let Some(account) = bank.account(number) else {
        println!(
            "Operation failed: {}",
            BankError::AccountNotFound(number.to_string())
        );
        return Ok(());
    };

    let data: Vec<StatementRow> = account
        .ledger()
        .entries(kind)
        .map(|e| StatementRow {
            date: fmt_timestamp(&e.at),
            kind: e.kind.to_string(),
            amount: e.amount.round_dp(2).to_string(),
        })
        .collect();

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!(
            "Statement for account {} (balance {})",
            account.number(),
            crate::utils::fmt_money(&account.balance())
        );
        let rows = data
            .iter()
            .map(|r| vec![r.date.clone(), r.kind.clone(), r.amount.clone()])
            .collect();
        println!("{}", pretty_table(&["Date", "Kind", "Amount"], rows));
    }
    Ok(())
}
