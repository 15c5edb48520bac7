// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use caixa::bank::Bank;
use caixa::{cli, commands, utils};
use rust_decimal::Decimal;

fn run(bank: &mut Bank, argv: &[&str]) {
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("client", sub)) => commands::clients::handle(bank, sub).unwrap(),
        Some(("account", sub)) => commands::accounts::handle(bank, sub).unwrap(),
        Some(("deposit", sub)) => commands::transactions::deposit(bank, sub).unwrap(),
        Some(("withdraw", sub)) => commands::transactions::withdraw(bank, sub).unwrap(),
        Some(("transfer", sub)) => commands::transactions::transfer(bank, sub).unwrap(),
        Some(("interest", sub)) => commands::transactions::interest(bank, sub).unwrap(),
        Some(("statement", sub)) => commands::statement::handle(bank, sub).unwrap(),
        other => panic!("command not parsed: {:?}", other),
    }
}

fn seeded_bank() -> Bank {
    let mut bank = Bank::new();
    run(
        &mut bank,
        &[
            "caixa", "client", "add", "--id", "111", "--name", "Ana Souza", "--born", "1990-03-14",
            "--address", "Rua A, 1",
        ],
    );
    run(
        &mut bank,
        &[
            "caixa", "account", "open", "--client", "111", "--number", "ck-1", "--type", "checking",
        ],
    );
    run(
        &mut bank,
        &[
            "caixa", "account", "open", "--client", "111", "--number", "sv-1", "--type", "savings",
        ],
    );
    bank
}

#[test]
fn client_add_registers_with_parsed_birth_date() {
    let bank = seeded_bank();
    let c = bank.find("111").unwrap();
    assert_eq!(c.name(), "Ana Souza");
    assert_eq!(c.born().to_string(), "1990-03-14");
    assert_eq!(c.accounts().len(), 2);
}

#[test]
fn deposit_and_withdraw_round_trip_through_the_cli() {
    let mut bank = seeded_bank();
    run(
        &mut bank,
        &[
            "caixa", "deposit", "--client", "111", "--account", "ck-1", "--amount", "250.50",
        ],
    );
    run(
        &mut bank,
        &[
            "caixa", "withdraw", "--client", "111", "--account", "ck-1", "--amount", "50.50",
        ],
    );

    let acct = bank.account("ck-1").unwrap();
    assert_eq!(acct.balance(), Decimal::from(200));
    assert_eq!(acct.ledger().len(), 2);
}

#[test]
fn failed_operations_leave_state_untouched_and_do_not_panic() {
    let mut bank = seeded_bank();
    // Unknown client, unknown account, invalid amount: all reported, none fatal.
    run(
        &mut bank,
        &[
            "caixa", "deposit", "--client", "999", "--account", "ck-1", "--amount", "10",
        ],
    );
    run(
        &mut bank,
        &[
            "caixa", "deposit", "--client", "111", "--account", "nope", "--amount", "10",
        ],
    );
    run(
        &mut bank,
        &[
            "caixa", "withdraw", "--client", "111", "--account", "ck-1", "--amount", "10",
        ],
    );
    assert_eq!(bank.account("ck-1").unwrap().balance(), Decimal::ZERO);
    assert!(bank.account("ck-1").unwrap().ledger().is_empty());
}

#[test]
fn transfer_and_interest_through_the_cli() {
    let mut bank = seeded_bank();
    run(
        &mut bank,
        &[
            "caixa", "deposit", "--client", "111", "--account", "sv-1", "--amount", "200",
        ],
    );
    run(
        &mut bank,
        &["caixa", "interest", "--account", "sv-1"],
    );
    assert_eq!(bank.account("sv-1").unwrap().balance(), Decimal::from(210));

    run(
        &mut bank,
        &[
            "caixa", "transfer", "--from", "sv-1", "--to", "ck-1", "--amount", "10",
        ],
    );
    assert_eq!(bank.account("sv-1").unwrap().balance(), Decimal::from(200));
    assert_eq!(bank.account("ck-1").unwrap().balance(), Decimal::from(10));
}

#[test]
fn custom_account_parameters_parse_from_flags() {
    let mut bank = seeded_bank();
    run(
        &mut bank,
        &[
            "caixa", "account", "open", "--client", "111", "--number", "ck-2", "--type",
            "checking", "--limit", "50", "--cap", "1",
        ],
    );
    run(
        &mut bank,
        &[
            "caixa", "deposit", "--client", "111", "--account", "ck-2", "--amount", "100",
        ],
    );
    // 60 > custom limit 50: refused, balance stays.
    run(
        &mut bank,
        &[
            "caixa", "withdraw", "--client", "111", "--account", "ck-2", "--amount", "60",
        ],
    );
    assert_eq!(bank.account("ck-2").unwrap().balance(), Decimal::from(100));
}

#[test]
fn tokenize_splits_words_and_honors_quotes() {
    assert_eq!(
        utils::tokenize("client add --name \"Ana Souza\" --id 111"),
        vec!["client", "add", "--name", "Ana Souza", "--id", "111"]
    );
    assert_eq!(utils::tokenize("   "), Vec::<String>::new());
    assert_eq!(utils::tokenize("quit"), vec!["quit"]);
}
