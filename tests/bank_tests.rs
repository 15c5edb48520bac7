// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use caixa::account::Account;
use caixa::bank::{Bank, Client};
use caixa::error::BankError;
use caixa::ledger::TxKind;
use caixa::transaction::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn client(tax_id: &str, name: &str) -> Client {
    Client::new(
        tax_id,
        name,
        NaiveDate::from_ymd_opt(1978, 11, 30).unwrap(),
        "Rua C, 7 - Centro",
    )
}

fn bank_with_two_clients() -> Bank {
    let mut bank = Bank::new();
    bank.register(client("111", "Bruno Lima")).unwrap();
    bank.register(client("222", "Carla Dias")).unwrap();

    let a = Account::open_checking(bank.find("111").unwrap(), "ck-1");
    bank.open_account("111", a).unwrap();
    let b = Account::open_savings(bank.find("222").unwrap(), "sv-1");
    bank.open_account("222", b).unwrap();
    bank
}

#[test]
fn lookup_misses_are_values_not_faults() {
    let bank = bank_with_two_clients();
    assert!(bank.find("999").is_none());
    assert!(bank.account("nope").is_none());
}

#[test]
fn register_rejects_duplicate_tax_ids() {
    let mut bank = Bank::new();
    bank.register(client("111", "Bruno Lima")).unwrap();
    let result = bank.register(client("111", "Impostor"));
    assert_eq!(result, Err(BankError::DuplicateClient("111".to_string())));
    assert_eq!(bank.clients().len(), 1);
    assert_eq!(bank.find("111").unwrap().name(), "Bruno Lima");
}

#[test]
fn open_account_rejects_duplicate_numbers_bank_wide() {
    let mut bank = bank_with_two_clients();
    let dup = Account::open_savings(bank.find("222").unwrap(), "ck-1");
    let result = bank.open_account("222", dup);
    assert_eq!(result, Err(BankError::DuplicateAccount("ck-1".to_string())));
    assert_eq!(bank.find("222").unwrap().accounts().len(), 1);
}

#[test]
fn open_account_requires_a_registered_client() {
    let mut bank = bank_with_two_clients();
    let orphan = Account::open_savings(bank.find("111").unwrap(), "sv-9");
    let result = bank.open_account("999", orphan);
    assert_eq!(result, Err(BankError::ClientNotFound("999".to_string())));
}

#[test]
fn clients_may_hold_several_accounts() {
    let mut bank = bank_with_two_clients();
    let second = Account::open_savings(bank.find("111").unwrap(), "sv-2");
    bank.open_account("111", second).unwrap();

    let c = bank.find("111").unwrap();
    assert_eq!(c.accounts().len(), 2);
    assert!(c.account("ck-1").is_some());
    assert!(c.account("sv-2").is_some());
}

#[test]
fn client_execute_is_a_pass_through() {
    let mut bank = bank_with_two_clients();
    let c = bank.find_mut("111").unwrap();

    c.execute(
        "ck-1",
        &Transaction::Deposit {
            amount: Decimal::from(300),
        },
    )
    .unwrap();
    assert_eq!(c.account("ck-1").unwrap().balance(), Decimal::from(300));

    let missing = c.execute(
        "nope",
        &Transaction::Deposit {
            amount: Decimal::from(1),
        },
    );
    assert_eq!(missing, Err(BankError::AccountNotFound("nope".to_string())));
}

#[test]
fn transfer_across_clients() {
    let mut bank = bank_with_two_clients();
    bank.find_mut("111")
        .unwrap()
        .execute(
            "ck-1",
            &Transaction::Deposit {
                amount: Decimal::from(500),
            },
        )
        .unwrap();

    bank.transfer("ck-1", "sv-1", Decimal::from(200)).unwrap();

    let src = bank.account("ck-1").unwrap();
    let dst = bank.account("sv-1").unwrap();
    assert_eq!(src.balance(), Decimal::from(300));
    assert_eq!(dst.balance(), Decimal::from(200));
    assert_eq!(src.ledger().entries(Some(TxKind::Transfer)).count(), 1);
    assert!(dst.ledger().entries(Some(TxKind::Transfer)).next().is_none());
}

#[test]
fn transfer_between_a_clients_own_accounts() {
    let mut bank = bank_with_two_clients();
    let second = Account::open_savings(bank.find("111").unwrap(), "sv-2");
    bank.open_account("111", second).unwrap();
    bank.find_mut("111")
        .unwrap()
        .execute(
            "ck-1",
            &Transaction::Deposit {
                amount: Decimal::from(100),
            },
        )
        .unwrap();

    bank.transfer("ck-1", "sv-2", Decimal::from(40)).unwrap();
    assert_eq!(bank.account("ck-1").unwrap().balance(), Decimal::from(60));
    assert_eq!(bank.account("sv-2").unwrap().balance(), Decimal::from(40));
}

#[test]
fn transfer_to_self_nets_to_zero_with_one_entry() {
    let mut bank = bank_with_two_clients();
    bank.find_mut("222")
        .unwrap()
        .execute(
            "sv-1",
            &Transaction::Deposit {
                amount: Decimal::from(100),
            },
        )
        .unwrap();

    bank.transfer("sv-1", "sv-1", Decimal::from(30)).unwrap();

    let acct = bank.account("sv-1").unwrap();
    assert_eq!(acct.balance(), Decimal::from(100));
    assert_eq!(acct.ledger().entries(Some(TxKind::Transfer)).count(), 1);
}

#[test]
fn transfer_with_unknown_endpoints_changes_nothing() {
    let mut bank = bank_with_two_clients();
    bank.find_mut("111")
        .unwrap()
        .execute(
            "ck-1",
            &Transaction::Deposit {
                amount: Decimal::from(100),
            },
        )
        .unwrap();

    assert_eq!(
        bank.transfer("nope", "sv-1", Decimal::from(10)),
        Err(BankError::AccountNotFound("nope".to_string()))
    );
    assert_eq!(
        bank.transfer("ck-1", "nope", Decimal::from(10)),
        Err(BankError::AccountNotFound("nope".to_string()))
    );
    assert_eq!(bank.account("ck-1").unwrap().balance(), Decimal::from(100));
    assert_eq!(bank.account("sv-1").unwrap().balance(), Decimal::ZERO);
}

#[test]
fn insufficient_transfer_is_atomic_through_the_bank() {
    let mut bank = bank_with_two_clients();
    assert_eq!(
        bank.transfer("ck-1", "sv-1", Decimal::from(10)),
        Err(BankError::InsufficientFunds)
    );
    assert_eq!(bank.account("ck-1").unwrap().balance(), Decimal::ZERO);
    assert_eq!(bank.account("sv-1").unwrap().balance(), Decimal::ZERO);
    assert!(bank.account("ck-1").unwrap().ledger().is_empty());
    assert!(bank.account("sv-1").unwrap().ledger().is_empty());
}
