//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all dimensional quantities (pressure, density,
//! viscosity, velocity). This module provides the pieces the closures need that
//! aren't included in [`uom`].
//!
//! ## Surface tension
//!
//! [`SurfaceTension`] is force per unit length (N/m in SI). Values in the
//! oilfield unit dyn/cm are built from [`uom`] force and length:
//!
//! ```
//! use uom::si::{f64::{Force, Length}, force::dyne, length::centimeter};
//! use wellbore_closures::support::units::SurfaceTension;
//!
//! let sigma: SurfaceTension = Force::new::<dyne>(30.0) / Length::new::<centimeter>(1.0);
//! assert!((sigma.value - 0.030).abs() < 1e-15);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_fahrenheit;
//! use wellbore_closures::support::units::TemperatureDifference;
//!
//! let t1 = ThermodynamicTemperature::new::<degree_fahrenheit>(100.0);
//! let t2 = ThermodynamicTemperature::new::<degree_fahrenheit>(68.0);
//! let delta_t = t1.minus(t2);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::SurfaceTension;
pub use temperature_difference::TemperatureDifference;
