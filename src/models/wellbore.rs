//! Hydrostatic multiphase wellbore.
//!
//! [`HydrostaticWell`] implements the [`Well`](crate::support::well::Well)
//! contract with a static pressure balance: the pressure change across each
//! segment is the weight of the local drift-flux mixture. At each node it
//! drives the full closure chain in the order a wellbore solver uses:
//!
//! 1. phase densities and viscosities at the node pressure,
//! 2. gas solubility, then the live-oil density that depends on it,
//! 3. interfacial tension, characteristic and flooding velocities,
//! 4. the profile parameter, then the drift velocity that consumes it,
//! 5. the dispersed holdup and the mixture density.
//!
//! Segment pressures are solved with bisection from [`twine_solvers`].

mod closures;
mod config;
mod error;
mod holdup;
mod hydrostatic;
mod properties;
mod segment;

#[cfg(test)]
mod test_support;

pub use closures::{ClosureSet, PhaseClosures, SlipClosures};
pub use config::HydrostaticConfig;
pub use error::SolveError;
pub use holdup::{Holdup, HoldupState, dispersed_fraction};
pub use hydrostatic::HydrostaticWell;
pub use properties::NodeProperties;
