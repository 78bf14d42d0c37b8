//! Reusable observers for the rod-cutting solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both rod-cutting strategies.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasSubproblem`], [`CanStopEarly`])
//! - [`budget`] — [`Budget`], which stops a solve after a number of events
//!
//! # Features
//!
//! - `trace` — Enables [`TraceObserver`], which forwards solver events to
//!   [`tracing`](https://docs.rs/tracing). This feature adds a dependency on
//!   `tracing`.
//!
//! [`Observer`]: rodcut_core::Observer
//! [`HasSubproblem`]: traits::HasSubproblem
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`Budget`]: budget::Budget

pub mod budget;
pub mod traits;

#[cfg(feature = "trace")]
mod trace;

#[cfg(feature = "trace")]
pub use trace::TraceObserver;
