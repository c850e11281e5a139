use std::f64::consts::PI;

use tracing::warn;
use uom::si::{
    area::square_meter,
    f64::{Area, DynamicViscosity, Length, MassDensity, Pressure, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{
    closure::{
        DensityInput, DensityModel, DriftAnomaly, InterfacialTensionModel, SolubilityModel,
        drift_flux::{characteristic_velocity, flooding_velocity},
        ensure_finite,
    },
    units::SurfaceTension,
    well::PhaseFlows,
};

use super::{
    ClosureSet, HydrostaticConfig, SlipClosures, SolveError,
    holdup::{Holdup, HoldupState, dispersed_fraction},
};

/// Closure values evaluated at one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeProperties {
    pub pressure: Pressure,

    pub oil_density: MassDensity,
    pub water_density: MassDensity,
    pub gas_density: MassDensity,

    pub oil_viscosity: DynamicViscosity,
    pub water_viscosity: DynamicViscosity,
    pub gas_viscosity: DynamicViscosity,

    /// Gas dissolved in oil, `Rs`.
    pub solubility: f64,

    /// Gas–liquid interfacial tension.
    pub interfacial_tension: SurfaceTension,

    pub gas_fraction: f64,
    pub oil_fraction: f64,
    pub water_fraction: f64,

    /// Gas–liquid profile parameter `C0`.
    pub profile_parameter: f64,

    /// Gas–liquid drift velocity.
    pub drift_velocity: Velocity,

    pub mixture_density: MassDensity,

    /// Anomaly reported by the gas–liquid drift-velocity closure, if any.
    pub drift_anomaly: Option<DriftAnomaly>,

    /// Anomaly reported by the oil–water drift-velocity closure, if any.
    pub oil_water_drift_anomaly: Option<DriftAnomaly>,
}

/// Returns the flow area of a circular wellbore.
pub(super) fn flow_area(radius: Length) -> Area {
    let r = radius.get::<meter>();
    Area::new::<square_meter>(PI * r * r)
}

impl ClosureSet {
    /// Evaluates every closure at `pressure` for the given phase rates.
    ///
    /// Solubility is evaluated first, from the mass fractions of the flowing
    /// phases, and then fed to the oil density. A stagnant liquid (no oil or
    /// water flux) is taken to be water.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError`] if a closure produces a non-finite value or a
    /// holdup solve fails.
    pub fn node_properties(
        &self,
        pressure: Pressure,
        flows: &PhaseFlows,
        area: Area,
        config: &HydrostaticConfig,
    ) -> Result<NodeProperties, SolveError> {
        let water_density = finite_density("water density", self.water.density_at(pressure))?;
        let gas_density = finite_density("gas density", self.gas.density_at(pressure))?;
        let dead_oil_density = finite_density("oil density", self.oil.density_at(pressure))?;

        let q_oil = flows.oil.get::<cubic_meter_per_second>();
        let q_water = flows.water.get::<cubic_meter_per_second>();
        let q_gas = flows.gas.get::<cubic_meter_per_second>();

        let solubility = {
            let m_oil = dead_oil_density.get::<kilogram_per_cubic_meter>() * q_oil.abs();
            let m_water = water_density.get::<kilogram_per_cubic_meter>() * q_water.abs();
            let m_gas = gas_density.get::<kilogram_per_cubic_meter>() * q_gas.abs();
            let total = m_oil + m_water + m_gas;
            if m_oil > 0.0 {
                let rs = self.solubility.solubility(pressure, m_oil / total, m_gas / total);
                ensure_finite("solubility", rs)?
            } else {
                0.0
            }
        };
        let oil_density = finite_density(
            "oil density",
            self.oil
                .density
                .density(DensityInput::at(pressure).with_solubility(solubility)),
        )?;

        let a = area.get::<square_meter>();
        let (j_oil, j_water, j_gas) = (q_oil / a, q_water / a, q_gas / a);
        let j_liquid = j_oil + j_water;

        let (oil_in_liquid, oil_water_drift_anomaly) = match &self.oil_water {
            Some(slip) if j_oil != 0.0 => {
                let state = pairing_state(
                    slip,
                    pressure,
                    (j_oil, j_liquid),
                    (oil_density, water_density),
                    config,
                );
                let oil = holdup_or_no_slip(slip, &state, config, "oil-water")?;
                (oil.volume_fraction, oil.anomaly)
            }
            _ => (no_slip_fraction(j_oil, j_liquid), None),
        };

        let liquid_density = water_density * (1.0 - oil_in_liquid) + oil_density * oil_in_liquid;

        let gas_state = pairing_state(
            &self.gas_liquid,
            pressure,
            (j_gas, j_liquid + j_gas),
            (gas_density, liquid_density),
            config,
        );
        let gas = holdup_or_no_slip(&self.gas_liquid, &gas_state, config, "gas-liquid")?;
        let gas_fraction = gas.volume_fraction;

        let mixture_density = finite_density(
            "mixture density",
            gas_density * gas_fraction + liquid_density * (1.0 - gas_fraction),
        )?;

        Ok(NodeProperties {
            pressure,
            oil_density,
            water_density,
            gas_density,
            oil_viscosity: self.oil.viscosity_at(pressure),
            water_viscosity: self.water.viscosity_at(pressure),
            gas_viscosity: self.gas.viscosity_at(pressure),
            solubility,
            interfacial_tension: self.gas_liquid.interfacial_tension.interfacial_tension(pressure),
            gas_fraction,
            oil_fraction: (1.0 - gas_fraction) * oil_in_liquid,
            water_fraction: (1.0 - gas_fraction) * (1.0 - oil_in_liquid),
            profile_parameter: gas.profile_parameter,
            drift_velocity: gas.drift_velocity,
            mixture_density,
            drift_anomaly: gas.anomaly,
            oil_water_drift_anomaly,
        })
    }
}

fn finite_density(quantity: &'static str, density: MassDensity) -> Result<MassDensity, SolveError> {
    ensure_finite(quantity, density.get::<kilogram_per_cubic_meter>())?;
    Ok(density)
}

fn no_slip_fraction(dispersed_flux: f64, mixture_flux: f64) -> f64 {
    if mixture_flux == 0.0 {
        0.0
    } else {
        (dispersed_flux / mixture_flux).clamp(0.0, 1.0)
    }
}

/// Builds the holdup state for one pairing from superficial velocities in
/// m/s and `(dispersed, continuous)` densities.
fn pairing_state(
    slip: &SlipClosures,
    pressure: Pressure,
    (dispersed_flux, mixture_flux): (f64, f64),
    (dispersed_density, continuous_density): (MassDensity, MassDensity),
    config: &HydrostaticConfig,
) -> HoldupState {
    let sigma = slip.interfacial_tension.interfacial_tension(pressure);
    let vc = characteristic_velocity(sigma, config.gravity, continuous_density, dispersed_density);
    let flood = flooding_velocity(config.ku_critical, continuous_density, dispersed_density, vc);

    HoldupState {
        dispersed_flux: Velocity::new::<meter_per_second>(dispersed_flux),
        mixture_flux: Velocity::new::<meter_per_second>(mixture_flux),
        dispersed_density,
        continuous_density,
        characteristic_velocity: vc,
        flooding_velocity: flood,
    }
}

fn holdup_or_no_slip(
    slip: &SlipClosures,
    state: &HoldupState,
    config: &HydrostaticConfig,
    pairing: &'static str,
) -> Result<Holdup, SolveError> {
    match dispersed_fraction(slip, state, config) {
        Err(SolveError::HoldupNotConverged {
            volume_fraction,
            iters,
        }) if config.no_slip_fallback => {
            let fraction = no_slip_fraction(
                state.dispersed_flux.get::<meter_per_second>(),
                state.mixture_flux.get::<meter_per_second>(),
            );
            warn!(
                pairing,
                iters,
                last_volume_fraction = volume_fraction,
                no_slip_fraction = fraction,
                "holdup did not converge, using no-slip fraction"
            );
            Ok(Holdup {
                volume_fraction: fraction,
                profile_parameter: 1.0,
                drift_velocity: Velocity::new::<meter_per_second>(0.0),
                anomaly: None,
                iters,
            })
        }
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Force, VolumeRate},
        force::newton,
        pressure::pascal,
    };

    use crate::{
        models::wellbore::{
            PhaseClosures,
            test_support::{closures, kg_m3, water_closures},
        },
        support::closure::{
            ConstantDensity, InterfacialTension, ProfileParameter, drift_flux::ShiGasLiquidDrift,
        },
    };

    fn rates(oil: f64, water: f64, gas: f64) -> PhaseFlows {
        PhaseFlows {
            oil: VolumeRate::new::<cubic_meter_per_second>(oil),
            water: VolumeRate::new::<cubic_meter_per_second>(water),
            gas: VolumeRate::new::<cubic_meter_per_second>(gas),
        }
    }

    fn area() -> Area {
        flow_area(Length::new::<meter>(0.1))
    }

    #[test]
    fn stagnant_column_is_water() {
        let props = closures()
            .node_properties(
                Pressure::new::<pascal>(1e6),
                &rates(0.0, 0.0, 0.0),
                area(),
                &HydrostaticConfig::default(),
            )
            .unwrap();

        assert_eq!(props.water_fraction, 1.0);
        assert_eq!(props.gas_fraction, 0.0);
        assert_eq!(props.solubility, 0.0);
        assert_eq!(props.mixture_density, props.water_density);
    }

    #[test]
    fn flowing_gas_lightens_the_mixture() {
        let props = closures()
            .node_properties(
                Pressure::new::<pascal>(5e6),
                &rates(0.0, 0.01, 0.005),
                area(),
                &HydrostaticConfig::default(),
            )
            .unwrap();

        assert!(props.gas_fraction > 0.0);
        // Gas rises faster than the mixture, so its holdup is below the flux fraction.
        assert!(props.gas_fraction < 0.005 / 0.015);
        assert_relative_eq!(
            props.gas_fraction + props.oil_fraction + props.water_fraction,
            1.0,
            epsilon = 1e-12
        );
        assert!(props.mixture_density < props.water_density);
        assert!(props.mixture_density > props.gas_density);
        assert!(props.drift_anomaly.is_none());
    }

    #[test]
    fn oil_dissolves_gas_and_splits_the_liquid() {
        let props = closures()
            .node_properties(
                Pressure::new::<pascal>(1e7),
                &rates(0.01, 0.01, 0.002),
                area(),
                &HydrostaticConfig::default(),
            )
            .unwrap();

        assert!(props.solubility > 0.0);
        assert!(props.oil_fraction > 0.0 && props.water_fraction > 0.0);
        assert!(props.oil_density > kg_m3(0.0));
    }

    #[test]
    fn oil_water_anomaly_is_reported() {
        // Oil heavier than water with zero tension keeps `Vc` at zero, so the
        // holdup converges while the density ratio is out of range.
        let mut set = water_closures();
        set.oil = PhaseClosures {
            density: ConstantDensity::new(kg_m3(1100.0)).unwrap().into(),
            ..set.oil
        };
        set.oil_water = Some(SlipClosures {
            profile_parameter: ProfileParameter::Constant(1.0),
            drift_velocity: ShiGasLiquidDrift::new(0.06, 0.21).unwrap().into(),
            interfacial_tension: InterfacialTension::Constant(
                Force::new::<newton>(0.0) / Length::new::<meter>(1.0),
            ),
        });

        let props = set
            .node_properties(
                Pressure::new::<pascal>(1e6),
                &rates(0.01, 0.01, 0.0),
                area(),
                &HydrostaticConfig::default(),
            )
            .unwrap();

        assert_relative_eq!(props.oil_fraction, 0.5, epsilon = 1e-9);
        assert!(props.drift_anomaly.is_none());
        assert!(matches!(
            props.oil_water_drift_anomaly,
            Some(DriftAnomaly::DensityRatioOutOfRange { .. })
        ));
    }

    #[test]
    fn area_of_circle() {
        assert_relative_eq!(
            flow_area(Length::new::<meter>(0.5)).get::<square_meter>(),
            PI * 0.25
        );
    }
}
