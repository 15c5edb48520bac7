// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::bank::Bank;
use crate::error::BankError;
use crate::utils::fmt_timestamp;

pub fn handle(bank: &Bank, sub: &clap::ArgMatches) -> Result<()> {
    let number = sub.get_one::<String>("account").unwrap().trim();
    let out = sub.get_one::<String>("out").unwrap();
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();

    let Some(account) = bank.account(number) else {
        println!(
            "Operation failed: {}",
            BankError::AccountNotFound(number.to_string())
        );
        return Ok(());
    };

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "kind", "amount"])?;
            for e in account.ledger().entries(None) {
                wtr.write_record([
                    fmt_timestamp(&e.at),
                    e.kind.to_string(),
                    e.amount.round_dp(2).to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = account
                .ledger()
                .entries(None)
                .map(|e| {
                    json!({
                        "date": fmt_timestamp(&e.at),
                        "kind": e.kind,
                        "amount": e.amount.round_dp(2).to_string(),
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported statement of account {} to {}", number, out);
    Ok(())
}
