use thiserror::Error;

use rodcut_core::{LengthError, PriceError};

/// Errors that can occur during a rod-cutting solve.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid rod length: {0}")]
    InvalidLength(#[from] LengthError),

    #[error("invalid price table: {0}")]
    InvalidPrices(#[from] PriceError),

    #[error("prices cover segments up to length {covered}, but a rod of length {length} needs all of 1..={length}")]
    PriceCoverageGap { length: usize, covered: usize },

    #[error("rod length {length} exceeds the top-down depth limit of {max_depth}")]
    DepthLimit { length: usize, max_depth: usize },

    #[error("cannot allocate a table for rod length {length}")]
    TableTooLarge { length: usize },

    #[error("stopped by observer while solving length {length}")]
    StoppedByObserver { length: usize },
}

impl Error {
    /// Returns true if the error is due to malformed caller input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidLength(_) | Self::InvalidPrices(_))
    }
}
