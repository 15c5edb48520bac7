// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::bank::{Bank, Client};
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle(bank: &mut Bank, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(bank, sub)?,
        Some(("list", sub)) => list(bank, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(bank: &mut Bank, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let born = parse_date(sub.get_one::<String>("born").unwrap())?;
    let address = sub.get_one::<String>("address").unwrap().trim().to_string();

    match bank.register(Client::new(id.clone(), name.clone(), born, address)) {
        Ok(()) => {
            info!(action = "register", client = %id);
            println!("Registered client '{}' ({})", name, id);
        }
        Err(e) => println!("Operation failed: {}", e),
    }
    Ok(())
}

#[derive(Serialize)]
struct ClientRow {
    id: String,
    name: String,
    born: String,
    address: String,
    accounts: usize,
}

fn list(bank: &Bank, sub: &clap::ArgMatches) -> Result<()> {
    let data: Vec<ClientRow> = bank
        .clients()
        .iter()
        .map(|c| ClientRow {
            id: c.tax_id().to_string(),
            name: c.name().to_string(),
            born: c.born().to_string(),
            address: c.address().to_string(),
            accounts: c.accounts().len(),
        })
        .collect();

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.born.clone(),
                    r.address.clone(),
                    r.accounts.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Born", "Address", "Accounts"], rows)
        );
    }
    Ok(())
}
