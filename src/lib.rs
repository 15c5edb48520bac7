// Copyright (c) 2025 Caixa contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod account;
pub mod bank;
pub mod cli;
pub mod commands;
pub mod error;
pub mod ledger;
pub mod transaction;
pub mod utils;
