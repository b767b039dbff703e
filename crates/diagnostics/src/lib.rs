// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Structured logging shared by the memfs crates.
//!
//! Logging is off unless `MEMFS_LOG` selects a level:
//! - `MEMFS_LOG=off` (default) - no logs
//! - `MEMFS_LOG=error` / `warn` - problems only
//! - `MEMFS_LOG=info` - shell startup and configuration
//! - `MEMFS_LOG=debug` - every tree mutation

use std::sync::Once;

// Re-export emit so the macros resolve for downstream crates
pub use emit;

/// Environment variable consulted by [`init_diagnostics`].
pub const LOG_ENV: &str = "MEMFS_LOG";

static INIT: Once = Once::new();

/// Parsed value of [`LOG_ENV`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Off,
    Level(emit::Level),
    /// Unrecognized value; logging falls back to info.
    Unknown,
}

impl Verbosity {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "off" => Verbosity::Off,
            "error" => Verbosity::Level(emit::Level::Error),
            "warn" => Verbosity::Level(emit::Level::Warn),
            "info" => Verbosity::Level(emit::Level::Info),
            "debug" => Verbosity::Level(emit::Level::Debug),
            _ => Verbosity::Unknown,
        }
    }

    fn min_level(self) -> Option<emit::Level> {
        match self {
            Verbosity::Off => None,
            Verbosity::Level(level) => Some(level),
            Verbosity::Unknown => Some(emit::Level::Info),
        }
    }
}

/// Initialize diagnostics from the `MEMFS_LOG` environment variable.
///
/// Call once at startup. Later calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV).unwrap_or_default();
        let verbosity = Verbosity::parse(&raw);

        let Some(level) = verbosity.min_level() else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        if verbosity == Verbosity::Unknown {
            emit::warn!("unknown {env} value {raw}, using info", env: LOG_ENV, raw: raw.as_str());
        }

        // The runtime lives for the rest of the process
        std::mem::forget(rt);
    });
}

/// Log user-visible operations (startup, configuration, commands).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (tree mutations, resolution steps).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable oddities (fallback configuration, ignored input).
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that stop an operation.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;
