//! Core traits and types for rod-cutting optimization.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`RodLength`] — a validated, non-negative stock length
//! - [`PriceTable`] — validated prices, where entry `i` prices a segment of
//!   length `i + 1`
//! - [`Observer`] — receives solver events and optionally returns control actions

mod length;
mod observer;
mod prices;

pub use length::{LengthError, RodLength};
pub use observer::Observer;
pub use prices::{PriceError, PriceTable};
