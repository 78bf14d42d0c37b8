//! Dynamic-programming solvers for rod-cutting problems.
//!
//! # Modules
//!
//! - [`rod_cutting`] — top-down (memoized) and bottom-up (tabulated) solvers
//!   that find the most profitable way to cut a rod

pub mod rod_cutting;
