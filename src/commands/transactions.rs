// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::info;

use crate::bank::Bank;
use crate::error::BankError;
use crate::transaction::Transaction;
use crate::utils::{fmt_money, parse_decimal};

pub fn deposit(bank: &mut Bank, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    execute(bank, sub, Transaction::Deposit { amount })
}

pub fn withdraw(bank: &mut Bank, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    execute(bank, sub, Transaction::Withdrawal { amount })
}

// Deposit and withdrawal share one flow: resolve the client, resolve one of
// their accounts, hand the transaction to the client.
fn execute(bank: &mut Bank, sub: &clap::ArgMatches, transaction: Transaction) -> Result<()> {
    let tax_id = sub.get_one::<String>("client").unwrap().trim();
    let number = sub.get_one::<String>("account").unwrap().trim();

    let Some(client) = bank.find_mut(tax_id) else {
        println!(
            "Operation failed: {}",
            BankError::ClientNotFound(tax_id.to_string())
        );
        return Ok(());
    };
    match client.execute(number, &transaction) {
        Ok(()) => {
            let kind = transaction.kind();
            info!(action = %kind, account = %number, amount = %transaction.amount());
            println!(
                "{} of {} on account {} completed",
                kind,
                fmt_money(&transaction.amount()),
                number
            );
        }
        Err(e) => println!("Operation failed: {}", e),
    }
    Ok(())
}

pub fn transfer(bank: &mut Bank, sub: &clap::ArgMatches) -> Result<()> {
    let from = sub.get_one::<String>("from").unwrap().trim();
    let to = sub.get_one::<String>("to").unwrap().trim();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;

    match bank.transfer(from, to, amount) {
        Ok(()) => {
            info!(action = "transfer", from = %from, to = %to, amount = %amount);
            println!(
                "Transferred {} from account {} to account {}",
                fmt_money(&amount),
                from,
                to
            );
        }
        Err(e) => println!("Operation failed: {}", e),
    }
    Ok(())
}

pub fn interest(bank: &mut Bank, sub: &clap::ArgMatches) -> Result<()> {
    let number = sub.get_one::<String>("account").unwrap().trim();

    let Some(account) = bank.account_mut(number) else {
        println!(
            "Operation failed: {}",
            BankError::AccountNotFound(number.to_string())
        );
        return Ok(());
    };

    let rate = match sub.get_one::<String>("rate") {
        Some(s) => parse_decimal(s)?,
        None => match account.interest_rate() {
            Some(r) => r,
            None => {
                println!("Checking accounts have no stored rate; pass --rate explicitly");
                return Ok(());
            }
        },
    };

    match account.apply_interest(rate) {
        Ok(credited) => {
            let balance = account.balance();
            info!(action = "interest", account = %number, rate = %rate);
            println!(
                "Applied {}% interest: {} credited, balance now {}",
                rate,
                fmt_money(&credited),
                fmt_money(&balance)
            );
        }
        Err(e) => println!("Operation failed: {}", e),
    }
    Ok(())
}
