use thiserror::Error;

use crate::billing::ResidentId;

/// Everything that can go wrong inside the billing domain.
///
/// None of these are fatal: the front end reports them and keeps the
/// command loop running.
#[derive(Debug, Error)]
pub enum BillingError {
    /// The given id matches no registered resident. State is unchanged.
    #[error("resident with id {0} not found")]
    ResidentNotFound(ResidentId),

    /// No resident's name contains the searched fragment.
    ///
    /// A distinct error rather than a numeric sentinel, so a valid cost
    /// of 0.0 can never be mistaken for "no match".
    #[error("no resident name contains \"{0}\"")]
    NoNameMatch(String),

    /// A consumption amount was negative or not finite.
    #[error("consumption amount must be a finite number >= 0, got {0}")]
    InvalidAmount(f64),

    /// A tariff rate was negative or not finite.
    #[error("tariff rate must be a finite number >= 0, got {0}")]
    InvalidRate(f64),
}
