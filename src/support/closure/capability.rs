//! Capability traits, one per closure category.
//!
//! Each trait has a single evaluation method with a fixed signature. Methods
//! take `&self`, so a configured closure can be shared read-only across nodes,
//! iterations and threads.

use uom::si::f64::{DynamicViscosity, MassDensity, Pressure};

use crate::support::units::SurfaceTension;

use super::density::DensityInput;
use super::drift_flux::{DriftVelocityInput, DriftVelocityOutput, ProfileParameterInput};

pub trait DensityModel {
    /// Returns the phase density at the given pressure and dissolved-gas state.
    fn density(&self, input: DensityInput) -> MassDensity;
}

pub trait ViscosityModel {
    /// Returns the phase dynamic viscosity at the given pressure.
    fn viscosity(&self, pressure: Pressure) -> DynamicViscosity;
}

pub trait SolubilityModel {
    /// Returns the gas solubility `Rs` in oil.
    ///
    /// The mass fractions describe the local composition and bound how much
    /// gas is available to dissolve.
    fn solubility(&self, pressure: Pressure, oil_mass_fraction: f64, gas_mass_fraction: f64)
    -> f64;
}

pub trait FormationVolumeFactorModel {
    /// Returns the formation-volume factor `B` at the given pressure.
    fn formation_volume_factor(&self, pressure: Pressure) -> f64;
}

pub trait RelativePermeabilityModel {
    /// Returns the relative permeability at the given phase saturation.
    ///
    /// Implementations are monotone non-decreasing in saturation.
    fn relative_permeability(&self, saturation: f64) -> f64;
}

pub trait InterfacialTensionModel {
    /// Returns the interfacial tension at the given pressure.
    fn interfacial_tension(&self, pressure: Pressure) -> SurfaceTension;
}

pub trait ProfileParameterModel {
    /// Returns the drift-flux profile parameter `C0`.
    fn profile_parameter(&self, input: &ProfileParameterInput) -> f64;
}

pub trait DriftVelocityModel {
    /// Returns the drift velocity, along with any anomaly detected while computing it.
    fn drift_velocity(&self, input: &DriftVelocityInput) -> DriftVelocityOutput;
}
