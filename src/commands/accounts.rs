// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::account::{Account, DEFAULT_INTEREST_RATE, DEFAULT_OVERDRAFT_LIMIT, DEFAULT_WITHDRAWAL_CAP};
use crate::bank::Bank;
use crate::error::BankError;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};

pub fn handle(bank: &mut Bank, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("open", sub)) => open(bank, sub)?,
        Some(("list", sub)) => list(bank, sub)?,
        _ => {}
    }
    Ok(())
}

fn open(bank: &mut Bank, sub: &clap::ArgMatches) -> Result<()> {
    let tax_id = sub.get_one::<String>("client").unwrap().trim().to_string();
    let number = sub.get_one::<String>("number").unwrap().trim().to_string();
    let kind = sub.get_one::<String>("type").unwrap().as_str();

    let Some(holder) = bank.find(&tax_id) else {
        println!("Operation failed: {}", BankError::ClientNotFound(tax_id));
        return Ok(());
    };

    let account = match kind {
        "checking" => {
            let limit = match sub.get_one::<String>("limit") {
                Some(s) => parse_decimal(s)?,
                None => Decimal::from(DEFAULT_OVERDRAFT_LIMIT),
            };
            let cap = match sub.get_one::<String>("cap") {
                Some(s) => s.trim().parse::<u32>()?,
                None => DEFAULT_WITHDRAWAL_CAP,
            };
            Account::open_checking_with(holder, &number, limit, cap)
        }
        _ => {
            let rate = match sub.get_one::<String>("rate") {
                Some(s) => parse_decimal(s)?,
                None => Decimal::from(DEFAULT_INTEREST_RATE),
            };
            Account::open_savings_with(holder, &number, rate)
        }
    };

    match bank.open_account(&tax_id, account) {
        Ok(()) => {
            info!(action = "open_account", account = %number, client = %tax_id);
            println!("Opened {} account {} for client {}", kind, number, tax_id);
        }
        Err(e) => println!("Operation failed: {}", e),
    }
    Ok(())
}

#[derive(Serialize)]
struct AccountRow {
    number: String,
    branch: String,
    r#type: String,
    holder: String,
    balance: String,
}

fn list(bank: &Bank, sub: &clap::ArgMatches) -> Result<()> {
    let only = sub.get_one::<String>("client").map(|s| s.trim().to_string());
    let data: Vec<AccountRow> = bank
        .clients()
        .iter()
        .filter(|c| only.as_deref().is_none_or(|id| c.tax_id() == id))
        .flat_map(|c| c.accounts())
        .map(|a| AccountRow {
            number: a.number().to_string(),
            branch: a.branch().to_string(),
            r#type: a.kind_name().to_string(),
            holder: a.holder_name().to_string(),
            balance: a.balance().round_dp(2).to_string(),
        })
        .collect();

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.number.clone(),
                    r.branch.clone(),
                    r.r#type.clone(),
                    r.holder.clone(),
                    r.balance.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Number", "Branch", "Type", "Holder", "Balance"], rows)
        );
    }
    Ok(())
}
