//! Phase density closures.
//!
//! - [`ConstantDensity`]: fixed density, independent of pressure.
//! - [`WeaklyCompressibleDensity`]: acoustic approximation
//!   `ρ = ρ_ref + (P − P_ref)/a²`, linear in pressure.
//! - [`FormationVolumeFactorDensity`]: `ρ = ρ_std / B(P)`.
//! - [`OilDensity`]: live oil, `ρ = (1 + (ρ_gas,std/ρ_oil,std)·Rs) · ρ_oil,std / B_o(P)`.
//!
//! # Dissolved gas
//!
//! [`OilDensity`] reads the solubility `Rs` from [`DensityInput`]. The closure
//! does not recompute it, so callers evaluate their
//! [`SolubilityModel`](super::SolubilityModel) first and pass the result in.
//! Every other variant ignores the solubility.

use uom::si::{
    f64::{MassDensity, Pressure, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{DensityModel, FormationVolumeFactor, FormationVolumeFactorModel, ParameterError};

/// Local conditions a density closure is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityInput {
    pub pressure: Pressure,
    /// Dissolved-gas solubility `Rs`, standard volume of gas per standard volume of oil.
    pub solubility: f64,
}

impl DensityInput {
    /// Conditions at `pressure` with no dissolved gas.
    #[must_use]
    pub fn at(pressure: Pressure) -> Self {
        Self {
            pressure,
            solubility: 0.0,
        }
    }

    /// Returns a copy with the given dissolved-gas solubility.
    #[must_use]
    pub fn with_solubility(self, solubility: f64) -> Self {
        Self { solubility, ..self }
    }
}

/// Constant density.
///
/// # Example
///
/// ```
/// use uom::si::{
///     f64::{MassDensity, Pressure},
///     mass_density::kilogram_per_cubic_meter,
///     pressure::bar,
/// };
/// use wellbore_closures::support::closure::{ConstantDensity, DensityInput, DensityModel};
///
/// let oil = ConstantDensity::new(MassDensity::new::<kilogram_per_cubic_meter>(850.0)).unwrap();
/// let rho = oil.density(DensityInput::at(Pressure::new::<bar>(200.0)));
/// assert_eq!(rho.get::<kilogram_per_cubic_meter>(), 850.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantDensity {
    density: MassDensity,
}

impl ConstantDensity {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if the density is not strictly positive.
    pub fn new(density: MassDensity) -> Result<Self, ParameterError> {
        ParameterError::check::<StrictlyPositive>(
            "density",
            density.get::<kilogram_per_cubic_meter>(),
        )?;
        Ok(Self { density })
    }
}

impl DensityModel for ConstantDensity {
    fn density(&self, _input: DensityInput) -> MassDensity {
        self.density
    }
}

/// Weakly compressible density from a reference sound speed.
///
/// For a gas the same form applies with `ρ_ref = 0`, `P_ref = 0` and
/// `a² = R·T_ref`, which is why a zero reference density is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaklyCompressibleDensity {
    reference_density: f64,
    reference_pressure: f64,
    inverse_sound_speed_squared: f64,
}

impl WeaklyCompressibleDensity {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if the reference density is negative or the
    /// sound speed is not strictly positive.
    pub fn new(
        reference_density: MassDensity,
        reference_pressure: Pressure,
        sound_speed: Velocity,
    ) -> Result<Self, ParameterError> {
        let reference_density = ParameterError::check::<NonNegative>(
            "reference density",
            reference_density.get::<kilogram_per_cubic_meter>(),
        )?;
        let a = ParameterError::check::<StrictlyPositive>(
            "sound speed",
            sound_speed.get::<meter_per_second>(),
        )?;

        Ok(Self {
            reference_density,
            reference_pressure: reference_pressure.get::<pascal>(),
            inverse_sound_speed_squared: 1.0 / (a * a),
        })
    }
}

impl DensityModel for WeaklyCompressibleDensity {
    fn density(&self, input: DensityInput) -> MassDensity {
        let dp = input.pressure.get::<pascal>() - self.reference_pressure;
        MassDensity::new::<kilogram_per_cubic_meter>(
            self.reference_density + dp * self.inverse_sound_speed_squared,
        )
    }
}

/// Density of a phase whose volume follows a formation-volume factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationVolumeFactorDensity {
    standard_density: MassDensity,
    formation_volume_factor: FormationVolumeFactor,
}

impl FormationVolumeFactorDensity {
    /// Creates the closure from the standard-condition density and the phase's
    /// formation-volume factor closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if the standard density is not strictly positive.
    pub fn new(
        standard_density: MassDensity,
        formation_volume_factor: impl Into<FormationVolumeFactor>,
    ) -> Result<Self, ParameterError> {
        ParameterError::check::<StrictlyPositive>(
            "standard density",
            standard_density.get::<kilogram_per_cubic_meter>(),
        )?;
        Ok(Self {
            standard_density,
            formation_volume_factor: formation_volume_factor.into(),
        })
    }

    /// Returns `ρ_std / B` for an already evaluated formation-volume factor.
    #[must_use]
    pub fn density_at(&self, formation_volume_factor: f64) -> MassDensity {
        self.standard_density / formation_volume_factor
    }
}

impl DensityModel for FormationVolumeFactorDensity {
    fn density(&self, input: DensityInput) -> MassDensity {
        self.density_at(
            self.formation_volume_factor
                .formation_volume_factor(input.pressure),
        )
    }
}

/// Live-oil density including the mass of dissolved gas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OilDensity {
    oil_standard_density: MassDensity,
    gas_over_oil_standard_density: f64,
    formation_volume_factor: FormationVolumeFactor,
}

impl OilDensity {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if either standard density is not strictly positive.
    pub fn new(
        oil_standard_density: MassDensity,
        gas_standard_density: MassDensity,
        formation_volume_factor: impl Into<FormationVolumeFactor>,
    ) -> Result<Self, ParameterError> {
        let rho_oil = ParameterError::check::<StrictlyPositive>(
            "oil standard density",
            oil_standard_density.get::<kilogram_per_cubic_meter>(),
        )?;
        let rho_gas = ParameterError::check::<StrictlyPositive>(
            "gas standard density",
            gas_standard_density.get::<kilogram_per_cubic_meter>(),
        )?;

        Ok(Self {
            oil_standard_density,
            gas_over_oil_standard_density: rho_gas / rho_oil,
            formation_volume_factor: formation_volume_factor.into(),
        })
    }

    /// Returns the oil density for an evaluated `B_o` and solubility `Rs`.
    #[must_use]
    pub fn density_at(&self, formation_volume_factor: f64, solubility: f64) -> MassDensity {
        (self.oil_standard_density / formation_volume_factor)
            * (1.0 + self.gas_over_oil_standard_density * solubility)
    }
}

impl DensityModel for OilDensity {
    fn density(&self, input: DensityInput) -> MassDensity {
        self.density_at(
            self.formation_volume_factor
                .formation_volume_factor(input.pressure),
            input.solubility,
        )
    }
}

/// Density closure selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Density {
    Constant(ConstantDensity),
    WeaklyCompressible(WeaklyCompressibleDensity),
    FormationVolumeFactor(FormationVolumeFactorDensity),
    Oil(OilDensity),
}

impl DensityModel for Density {
    fn density(&self, input: DensityInput) -> MassDensity {
        match self {
            Self::Constant(model) => model.density(input),
            Self::WeaklyCompressible(model) => model.density(input),
            Self::FormationVolumeFactor(model) => model.density(input),
            Self::Oil(model) => model.density(input),
        }
    }
}

impl From<ConstantDensity> for Density {
    fn from(model: ConstantDensity) -> Self {
        Self::Constant(model)
    }
}

impl From<WeaklyCompressibleDensity> for Density {
    fn from(model: WeaklyCompressibleDensity) -> Self {
        Self::WeaklyCompressible(model)
    }
}

impl From<FormationVolumeFactorDensity> for Density {
    fn from(model: FormationVolumeFactorDensity) -> Self {
        Self::FormationVolumeFactor(model)
    }
}

impl From<OilDensity> for Density {
    fn from(model: OilDensity) -> Self {
        Self::Oil(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::closure::{GasFormationVolumeFactor, LiquidFormationVolumeFactor};

    fn pa(value: f64) -> Pressure {
        Pressure::new::<pascal>(value)
    }

    fn kg_m3(value: f64) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(value)
    }

    #[test]
    fn constant_ignores_pressure_and_solubility() {
        let model = ConstantDensity::new(kg_m3(850.0)).unwrap();
        for p in [0.0, 1e5, 3e7, -1.0] {
            let input = DensityInput::at(pa(p)).with_solubility(50.0);
            assert_eq!(model.density(input).get::<kilogram_per_cubic_meter>(), 850.0);
        }
    }

    #[test]
    fn weakly_compressible_is_linear_in_pressure() {
        let water = WeaklyCompressibleDensity::new(
            kg_m3(1000.0),
            pa(1e5),
            Velocity::new::<meter_per_second>(1500.0),
        )
        .unwrap();

        let at_ref = water.density(DensityInput::at(pa(1e5)));
        assert_relative_eq!(at_ref.get::<kilogram_per_cubic_meter>(), 1000.0);

        let dp = 2.25e7;
        let rho = water.density(DensityInput::at(pa(1e5 + dp)));
        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            1000.0 + dp / (1500.0 * 1500.0)
        );
    }

    #[test]
    fn weakly_compressible_ideal_gas_form() {
        // ρ = P / (R·T) with ρ_ref = 0 and P_ref = 0.
        let rt: f64 = 287.0 * 300.0;
        let gas = WeaklyCompressibleDensity::new(
            kg_m3(0.0),
            pa(0.0),
            Velocity::new::<meter_per_second>(rt.sqrt()),
        )
        .unwrap();
        let rho = gas.density(DensityInput::at(pa(101_325.0)));
        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            101_325.0 / rt,
            epsilon = 1e-12
        );
    }

    #[test]
    fn formation_volume_factor_density_divides_standard_density() {
        let bg = GasFormationVolumeFactor::new(pa(1e5), 1.0).unwrap();
        let gas = FormationVolumeFactorDensity::new(kg_m3(0.8), bg).unwrap();

        assert_relative_eq!(gas.density_at(0.004).get::<kilogram_per_cubic_meter>(), 200.0);
        assert_relative_eq!(
            gas.density(DensityInput::at(pa(1e5))).get::<kilogram_per_cubic_meter>(),
            0.8
        );
    }

    #[test]
    fn oil_density_adds_dissolved_gas_mass() {
        let bo = LiquidFormationVolumeFactor::new(0.0, pa(1e5), 1.25).unwrap();
        let oil = OilDensity::new(kg_m3(850.0), kg_m3(0.85), bo).unwrap();

        let dead = oil.density(DensityInput::at(pa(2e7)));
        assert_relative_eq!(dead.get::<kilogram_per_cubic_meter>(), 850.0 / 1.25);

        let live = oil.density(DensityInput::at(pa(2e7)).with_solubility(100.0));
        assert_relative_eq!(
            live.get::<kilogram_per_cubic_meter>(),
            (1.0 + 0.001 * 100.0) * 850.0 / 1.25
        );
    }

    #[test]
    fn oil_density_uses_the_solubility_it_is_given() {
        // Same pressure, different Rs: the closure does not derive Rs itself.
        let bo = LiquidFormationVolumeFactor::new(0.0, pa(1e5), 1.0).unwrap();
        let oil = OilDensity::new(kg_m3(800.0), kg_m3(1.0), bo).unwrap();
        let input = DensityInput::at(pa(1e7));
        assert!(oil.density(input.with_solubility(10.0)) > oil.density(input));
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(ConstantDensity::new(kg_m3(0.0)).is_err());
        assert!(
            WeaklyCompressibleDensity::new(
                kg_m3(1000.0),
                pa(0.0),
                Velocity::new::<meter_per_second>(0.0)
            )
            .is_err()
        );
        let bo = LiquidFormationVolumeFactor::new(0.0, pa(1e5), 1.0).unwrap();
        assert!(OilDensity::new(kg_m3(850.0), kg_m3(-1.0), bo).is_err());
        assert!(FormationVolumeFactorDensity::new(kg_m3(f64::NAN), bo).is_err());
    }

    #[test]
    fn enum_dispatches_to_variant() {
        let constant = ConstantDensity::new(kg_m3(1000.0)).unwrap();
        let selected: Density = constant.into();
        assert_eq!(
            selected.density(DensityInput::at(pa(1e6))),
            constant.density(DensityInput::at(pa(1e6)))
        );
    }
}
