// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("caixa")
        .version(crate_version!())
        .about("Educational in-memory banking simulator")
        .subcommand(
            Command::new("client")
                .about("Register and list clients")
                .subcommand(
                    Command::new("add")
                        .about("Register a new client")
                        .arg(Arg::new("id").long("id").required(true).help("Tax id (CPF)"))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("born")
                                .long("born")
                                .required(true)
                                .help("Date of birth, YYYY-MM-DD"),
                        )
                        .arg(Arg::new("address").long("address").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List clients"))),
        )
        .subcommand(
            Command::new("account")
                .about("Open and list accounts")
                .subcommand(
                    Command::new("open")
                        .about("Open a checking or savings account")
                        .arg(
                            Arg::new("client")
                                .long("client")
                                .required(true)
                                .help("Holder's tax id"),
                        )
                        .arg(Arg::new("number").long("number").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["checking", "savings"]),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .help("Checking: max single withdrawal (default 500)"),
                        )
                        .arg(
                            Arg::new("cap")
                                .long("cap")
                                .help("Checking: max number of withdrawals (default 3)"),
                        )
                        .arg(
                            Arg::new("rate")
                                .long("rate")
                                .help("Savings: interest rate percent (default 5)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List accounts")
                        .arg(Arg::new("client").long("client").help("Only this holder")),
                )),
        )
        .subcommand(
            Command::new("deposit")
                .about("Deposit into an account")
                .arg(Arg::new("client").long("client").required(true))
                .arg(Arg::new("account").long("account").required(true))
                .arg(Arg::new("amount").long("amount").required(true)),
        )
        .subcommand(
            Command::new("withdraw")
                .about("Withdraw from an account")
                .arg(Arg::new("client").long("client").required(true))
                .arg(Arg::new("account").long("account").required(true))
                .arg(Arg::new("amount").long("amount").required(true)),
        )
        .subcommand(
            Command::new("transfer")
                .about("Transfer between two accounts")
                .arg(Arg::new("from").long("from").required(true))
                .arg(Arg::new("to").long("to").required(true))
                .arg(Arg::new("amount").long("amount").required(true)),
        )
        .subcommand(
            Command::new("interest")
                .about("Apply interest to an account")
                .arg(Arg::new("account").long("account").required(true))
                .arg(
                    Arg::new("rate")
                        .long("rate")
                        .help("Rate percent; defaults to the savings account's stored rate"),
                ),
        )
        .subcommand(json_flags(
            Command::new("statement")
                .about("Show an account's ledger")
                .arg(Arg::new("account").long("account").required(true))
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .help("Only deposit|withdrawal|transfer entries"),
                ),
        ))
        .subcommand(
            Command::new("export")
                .about("Write an account's ledger to a file")
                .arg(Arg::new("account").long("account").required(true))
                .arg(Arg::new("out").long("out").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .value_parser(["csv", "json"]),
                ),
        )
        .subcommand(Command::new("quit").about("Leave the simulator"))
}
