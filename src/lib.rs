//! # Wellbore Closures
//!
//! Closure relations for multiphase flow inside a wellbore, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`support`]: The closure library (PVT, relative permeability, interfacial
//!   tension and drift-flux slip), the well contract, and shared utilities.
//! - [`models`]: Well implementations that drive the closures node by node.
//!
//! ## Evaluation model
//!
//! Every closure is a plain value selected when a well is configured and then
//! evaluated many times per solve. Evaluation takes `&self` and an explicit
//! input, so a configured closure can be shared across nodes, iterations and
//! threads without synchronization.
//!
//! Constructors validate their parameters and return a
//! [`ParameterError`](support::closure::ParameterError) instead of producing
//! `inf` or `NaN` later. Evaluation inputs are not range checked; use
//! [`ensure_finite`](support::closure::ensure_finite) where a non-finite result
//! must stop the caller.

pub mod models;
pub mod support;
