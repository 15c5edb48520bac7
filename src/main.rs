// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, Write};

use anyhow::Result;

use caixa::{bank::Bank, cli, commands, utils};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    // All state lives here for the lifetime of the run; nothing persists.
    let mut bank = Bank::new();

    println!("caixa — type a command, 'help' for the menu, 'quit' to leave");
    let stdin = io::stdin();
    loop {
        print!("=> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let tokens = utils::tokenize(&line);
        if tokens.is_empty() {
            continue;
        }
        if matches!(tokens[0].as_str(), "quit" | "exit") {
            println!("Leaving the simulator");
            break;
        }
        if let Err(e) = dispatch(&mut bank, &tokens) {
            println!("{}", e);
        }
    }
    Ok(())
}

fn dispatch(bank: &mut Bank, tokens: &[String]) -> Result<()> {
    let matches = match cli::build_cli()
        .no_binary_name(true)
        .try_get_matches_from(tokens)
    {
        Ok(m) => m,
        Err(e) => {
            // clap renders its own usage/help text
            e.print()?;
            return Ok(());
        }
    };

    match matches.subcommand() {
        Some(("client", sub)) => commands::clients::handle(bank, sub)?,
        Some(("account", sub)) => commands::accounts::handle(bank, sub)?,
        Some(("deposit", sub)) => commands::transactions::deposit(bank, sub)?,
        Some(("withdraw", sub)) => commands::transactions::withdraw(bank, sub)?,
        Some(("transfer", sub)) => commands::transactions::transfer(bank, sub)?,
        Some(("interest", sub)) => commands::transactions::interest(bank, sub)?,
        Some(("statement", sub)) => commands::statement::handle(bank, sub)?,
        Some(("export", sub)) => commands::exporter::handle(bank, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
