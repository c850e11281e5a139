//! Drift-flux slip closures.
//!
//! The drift-flux model writes the in-situ velocity of a dispersed phase as
//!
//! ```text
//! v_d = C0 · j + Vd
//! ```
//!
//! where `j` is the mixture volumetric flux, `C0` the profile parameter and
//! `Vd` the drift velocity. The two closures are evaluated in that order: the
//! profile parameter is an input to the Shi gas–liquid drift velocity.
//!
//! The Shi correlations also need a characteristic bubble-rise velocity and a
//! flooding velocity, which [`characteristic_velocity`] and
//! [`flooding_velocity`] provide from the local phase properties.

mod drift_velocity;
mod profile_parameter;

use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, MassDensity, Velocity},
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use crate::support::units::SurfaceTension;

pub use drift_velocity::{
    DriftAnomaly, DriftVelocity, DriftVelocityInput, DriftVelocityOutput, GasVolumeFractionDrift,
    ShiGasLiquidDrift, ShiSlipState,
};
pub use profile_parameter::{
    ProfileParameter, ProfileParameterInput, ShiGasLiquidProfile, ShiOilWaterProfile,
};

/// Returns the characteristic velocity `Vc = (σ·g·(ρc − ρd) / ρc²)^¼`.
///
/// `ρc` is the continuous (heavier) phase and `ρd` the dispersed phase. The
/// result is `NaN` if the dispersed phase is the heavier one.
///
/// # Example
///
/// ```
/// use uom::si::{
///     acceleration::meter_per_second_squared,
///     f64::{Acceleration, Force, Length, MassDensity},
///     force::newton,
///     length::meter,
///     mass_density::kilogram_per_cubic_meter,
///     velocity::meter_per_second,
/// };
/// use wellbore_closures::support::closure::drift_flux::characteristic_velocity;
///
/// let vc = characteristic_velocity(
///     Force::new::<newton>(0.07) / Length::new::<meter>(1.0),
///     Acceleration::new::<meter_per_second_squared>(9.81),
///     MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(0.0),
/// );
/// let expected = (0.07_f64 * 9.81 / 1000.0).powf(0.25);
/// assert!((vc.get::<meter_per_second>() - expected).abs() < 1e-12);
/// ```
#[must_use]
pub fn characteristic_velocity(
    surface_tension: SurfaceTension,
    gravity: Acceleration,
    continuous_density: MassDensity,
    dispersed_density: MassDensity,
) -> Velocity {
    let rho_c = continuous_density.get::<kilogram_per_cubic_meter>();
    let rho_d = dispersed_density.get::<kilogram_per_cubic_meter>();
    let g = gravity.get::<meter_per_second_squared>();

    let vc = (surface_tension.value * g * (rho_c - rho_d) / (rho_c * rho_c)).powf(0.25);
    Velocity::new::<meter_per_second>(vc)
}

/// Returns the flooding velocity `Ku · sqrt(ρc/ρd) · Vc`.
///
/// This is the mixture flux at which the continuous phase can no longer hold
/// the dispersed phase back, used to normalise the Shi gas–liquid profile
/// parameter.
#[must_use]
pub fn flooding_velocity(
    ku_critical: f64,
    continuous_density: MassDensity,
    dispersed_density: MassDensity,
    characteristic_velocity: Velocity,
) -> Velocity {
    let ratio = continuous_density.get::<kilogram_per_cubic_meter>()
        / dispersed_density.get::<kilogram_per_cubic_meter>();
    characteristic_velocity * (ku_critical * ratio.sqrt())
}
