use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, Pressure, Velocity},
    velocity::meter_per_second,
};

use crate::support::closure::{
    Density, DensityInput, DensityModel, DriftVelocity, InterfacialTension, ProfileParameter,
    PowerRelativePermeability, RelativePermeabilityModel, Solubility, Viscosity, ViscosityModel,
};

/// Property closures for one phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseClosures {
    pub density: Density,
    pub viscosity: Viscosity,
    pub relative_permeability: PowerRelativePermeability,
}

impl PhaseClosures {
    /// Returns the phase density at `pressure` with no dissolved gas.
    #[must_use]
    pub fn density_at(&self, pressure: Pressure) -> MassDensity {
        self.density.density(DensityInput::at(pressure))
    }

    #[must_use]
    pub fn viscosity_at(&self, pressure: Pressure) -> DynamicViscosity {
        self.viscosity.viscosity(pressure)
    }

    /// Returns the phase mobility `kr(S) / μ(P)` in 1/(Pa·s).
    ///
    /// This is the coefficient the reservoir coupling uses to turn a
    /// pressure difference into a phase rate at a well node.
    #[must_use]
    pub fn mobility(&self, saturation: f64, pressure: Pressure) -> f64 {
        let kr = self.relative_permeability.relative_permeability(saturation);
        kr / self.viscosity_at(pressure).get::<pascal_second>()
    }
}

/// The drift-flux pair and interfacial tension for one dispersed/continuous
/// phase pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlipClosures {
    pub profile_parameter: ProfileParameter,
    pub drift_velocity: DriftVelocity,
    pub interfacial_tension: InterfacialTension,
}

impl SlipClosures {
    /// Homogeneous flow: `C0 = 1`, no drift.
    #[must_use]
    pub fn no_slip(interfacial_tension: InterfacialTension) -> Self {
        Self {
            profile_parameter: ProfileParameter::Constant(1.0),
            drift_velocity: DriftVelocity::Constant(Velocity::new::<meter_per_second>(0.0)),
            interfacial_tension,
        }
    }
}

/// Every closure a well needs, selected when the well is configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosureSet {
    pub oil: PhaseClosures,
    pub water: PhaseClosures,
    pub gas: PhaseClosures,

    /// Gas dissolved in oil.
    pub solubility: Solubility,

    /// Gas dispersed in the liquid.
    pub gas_liquid: SlipClosures,

    /// Oil dispersed in water. `None` splits the liquid without slip.
    pub oil_water: Option<SlipClosures>,
}
