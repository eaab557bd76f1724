//! # Local Connect Common
//!
//! Types shared by every layer of the directory:
//!
//! * **[`models`]**: businesses, reviews and ratings.
//! * **[`config`]**: the explicit runtime configuration.
//! * **[`error`]**: the error type returned by the directory operations.

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

#[doc(hidden)]
pub use tracing;

/// Target of every event meant for the operator rather than for diagnostics.
///
/// The CLI always lets these through, whatever the log filter says.
pub const PRINT_TARGET: &str = "localconnect::print";

/// Status line for an operation that went through.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: $crate::PRINT_TARGET, status = "success", $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: $crate::PRINT_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::tracing::warn!(target: $crate::PRINT_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::tracing::error!(target: $crate::PRINT_TARGET, $($arg)+)
    };
}
