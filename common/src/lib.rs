//! # domus-common
//!
//! Value types and glue shared by every crate in the workspace:
//!
//! * [`billing`]: the service enumeration, the tariff table, and the
//!   resident identifier.
//! * [`config`]: runtime configuration handed into the command layer.
//! * [`error`]: the billing error type.
//!
//! Also home of the status-line macros ([`info!`], [`success!`],
//! [`warn!`]) that every crate uses to talk to the operator. They route
//! through `tracing`; the CLI installs a formatter that renders them as
//! colored status symbols.

pub mod billing;
pub mod config;
pub mod error;

// The macros below expand inside dependent crates.
pub use tracing;

/// Progress note for the operator, rendered as `[+]`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Confirmation of a completed action, rendered as `[+]`.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Recoverable problem, rendered as `[*]`. The command loop continues.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
