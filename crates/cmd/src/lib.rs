// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod config;
mod help;
pub mod shell;

pub use help::HELP_TEXT;
pub use shell::{Arity, CommandError, Reply, Shell};
