//! Closure sets shared by wellbore tests.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Force, Length, MassDensity, Pressure, Velocity},
    force::dyne,
    length::centimeter,
    mass_density::kilogram_per_cubic_meter,
    pressure::atmosphere,
    velocity::meter_per_second,
};

use crate::support::closure::{
    ConstantDensity, DriftVelocity, InterfacialTension, LiquidFormationVolumeFactor, OilDensity,
    PowerRelativePermeability, PowerSolubility, PowerViscosity, Solubility, Viscosity,
    WeaklyCompressibleDensity,
    drift_flux::{ShiGasLiquidDrift, ShiGasLiquidProfile, ShiOilWaterProfile},
};

use super::{ClosureSet, PhaseClosures, SlipClosures};

pub(super) fn kg_m3(value: f64) -> MassDensity {
    MassDensity::new::<kilogram_per_cubic_meter>(value)
}

fn dyn_per_cm(value: f64) -> InterfacialTension {
    InterfacialTension::Constant(Force::new::<dyne>(value) / Length::new::<centimeter>(1.0))
}

fn relative_permeability() -> PowerRelativePermeability {
    PowerRelativePermeability::new(0.1, 0.9, 1.0, 2.0).unwrap()
}

/// Ideal gas at 1.2 kg/m³ and 1 atm: `ρ = ρ_ref · P / P_ref`.
fn gas() -> PhaseClosures {
    let p_ref = Pressure::new::<atmosphere>(1.0);
    let rho_ref = kg_m3(1.2);
    let sound_speed = (p_ref.value / rho_ref.value).sqrt();

    PhaseClosures {
        density: WeaklyCompressibleDensity::new(
            rho_ref,
            p_ref,
            Velocity::new::<meter_per_second>(sound_speed),
        )
        .unwrap()
        .into(),
        viscosity: Viscosity::Constant(DynamicViscosity::new::<pascal_second>(1.8e-5)),
        relative_permeability: relative_permeability(),
    }
}

fn water() -> PhaseClosures {
    PhaseClosures {
        density: ConstantDensity::new(kg_m3(1000.0)).unwrap().into(),
        viscosity: PowerViscosity::new(1e-3, 0.0).unwrap().into(),
        relative_permeability: relative_permeability(),
    }
}

fn oil() -> PhaseClosures {
    let fvf =
        LiquidFormationVolumeFactor::new(1e-9, Pressure::new::<atmosphere>(1.0), 1.15).unwrap();
    PhaseClosures {
        density: OilDensity::new(kg_m3(850.0), kg_m3(0.9), fvf).unwrap().into(),
        viscosity: PowerViscosity::new(5e-3, 0.0).unwrap().into(),
        relative_permeability: relative_permeability(),
    }
}

/// Water, live oil and an ideal gas with Shi slip in both pairings.
pub(super) fn closures() -> ClosureSet {
    ClosureSet {
        oil: oil(),
        water: water(),
        gas: gas(),
        solubility: PowerSolubility::new(1e-5, 1.0, kg_m3(850.0), kg_m3(0.9))
            .unwrap()
            .into(),
        gas_liquid: SlipClosures {
            profile_parameter: ShiGasLiquidProfile::new(1.2, 0.3, 1.0).unwrap().into(),
            drift_velocity: ShiGasLiquidDrift::new(0.06, 0.21).unwrap().into(),
            interfacial_tension: dyn_per_cm(60.0),
        },
        oil_water: Some(SlipClosures {
            profile_parameter: ShiOilWaterProfile::new(1.2, 0.4, 0.7).unwrap().into(),
            drift_velocity: DriftVelocity::ShiOilWater,
            interfacial_tension: dyn_per_cm(30.0),
        }),
    }
}

/// Dead oil, water and an ideal gas without slip.
pub(super) fn water_closures() -> ClosureSet {
    ClosureSet {
        oil: PhaseClosures {
            density: ConstantDensity::new(kg_m3(800.0)).unwrap().into(),
            ..water()
        },
        water: water(),
        gas: gas(),
        solubility: Solubility::DeadOil,
        gas_liquid: SlipClosures::no_slip(dyn_per_cm(72.0)),
        oil_water: None,
    }
}
