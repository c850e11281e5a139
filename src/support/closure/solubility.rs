//! Gas solubility (`Rs`) closures.
//!
//! [`PowerSolubility`] proposes `α · P^power` and caps it by the gas actually
//! available to dissolve. With oil and gas mass fractions `x_o`, `x_g`, that cap
//! is `(ρ_oil,std / ρ_gas,std) · x_g / x_o` in standard volumes.

use uom::si::{
    f64::{MassDensity, Pressure},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{ParameterError, PowerLaw, SolubilityModel};

/// Power-law solubility limited by the mass balance.
///
/// # Example
///
/// ```
/// use uom::si::{
///     f64::{MassDensity, Pressure},
///     mass_density::kilogram_per_cubic_meter,
///     pressure::pascal,
/// };
/// use wellbore_closures::support::closure::{PowerSolubility, SolubilityModel};
///
/// let rs = PowerSolubility::new(
///     1e-5,
///     1.0,
///     MassDensity::new::<kilogram_per_cubic_meter>(850.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(0.85),
/// )
/// .unwrap();
///
/// // Plenty of gas: the pressure law governs.
/// assert!((rs.solubility(Pressure::new::<pascal>(1e7), 0.5, 0.5) - 100.0).abs() < 1e-9);
///
/// // Little gas: everything available dissolves.
/// let value = rs.solubility(Pressure::new::<pascal>(1e7), 0.99, 0.01);
/// assert!((value - 1000.0 * 0.01 / 0.99).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSolubility {
    law: PowerLaw,
    oil_over_gas_standard_density: f64,
}

impl PowerSolubility {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `α` is negative or a standard density is
    /// not strictly positive.
    pub fn new(
        alpha: f64,
        power: f64,
        oil_standard_density: MassDensity,
        gas_standard_density: MassDensity,
    ) -> Result<Self, ParameterError> {
        let alpha = ParameterError::check::<NonNegative>("solubility coefficient", alpha)?;
        let rho_oil = ParameterError::check::<StrictlyPositive>(
            "oil standard density",
            oil_standard_density.get::<kilogram_per_cubic_meter>(),
        )?;
        let rho_gas = ParameterError::check::<StrictlyPositive>(
            "gas standard density",
            gas_standard_density.get::<kilogram_per_cubic_meter>(),
        )?;

        Ok(Self {
            law: PowerLaw::new(alpha, power),
            oil_over_gas_standard_density: rho_oil / rho_gas,
        })
    }

    /// Returns the largest `Rs` the local composition can supply.
    #[must_use]
    pub fn maximum_solubility(&self, oil_mass_fraction: f64, gas_mass_fraction: f64) -> f64 {
        self.oil_over_gas_standard_density * gas_mass_fraction / oil_mass_fraction
    }
}

impl SolubilityModel for PowerSolubility {
    fn solubility(
        &self,
        pressure: Pressure,
        oil_mass_fraction: f64,
        gas_mass_fraction: f64,
    ) -> f64 {
        let maximum = self.maximum_solubility(oil_mass_fraction, gas_mass_fraction);
        let model = self.law.evaluate(pressure.get::<pascal>());
        if maximum >= model { model } else { maximum }
    }
}

/// Solubility closure selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solubility {
    /// No gas dissolves in the oil (`Rs = 0`).
    DeadOil,
    Power(PowerSolubility),
}

impl SolubilityModel for Solubility {
    fn solubility(
        &self,
        pressure: Pressure,
        oil_mass_fraction: f64,
        gas_mass_fraction: f64,
    ) -> f64 {
        match self {
            Self::DeadOil => 0.0,
            Self::Power(model) => model.solubility(pressure, oil_mass_fraction, gas_mass_fraction),
        }
    }
}

impl From<PowerSolubility> for Solubility {
    fn from(model: PowerSolubility) -> Self {
        Self::Power(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn model() -> PowerSolubility {
        PowerSolubility::new(
            2e-4,
            0.8,
            MassDensity::new::<kilogram_per_cubic_meter>(850.0),
            MassDensity::new::<kilogram_per_cubic_meter>(0.9),
        )
        .unwrap()
    }

    #[test]
    fn pressure_law_below_cap() {
        let rs = model();
        let p = 1e6;
        assert_relative_eq!(
            rs.solubility(Pressure::new::<pascal>(p), 0.5, 0.5),
            2e-4 * p.powf(0.8)
        );
    }

    #[test]
    fn tie_returns_common_value() {
        let rs = model();
        let p: f64 = 1e6;
        let law = 2e-4 * p.powf(0.8);
        // Choose x_g so that the cap equals the pressure law exactly.
        let x_o = 0.9;
        let x_g = law * x_o / (850.0 / 0.9);
        let value = rs.solubility(Pressure::new::<pascal>(p), x_o, x_g);
        assert_relative_eq!(value, law, max_relative = 1e-12);
        assert_relative_eq!(value, rs.maximum_solubility(x_o, x_g), max_relative = 1e-12);
    }

    #[test]
    fn no_oil_leaves_pressure_law() {
        let rs = model();
        let p: f64 = 4e6;
        assert_relative_eq!(
            rs.solubility(Pressure::new::<pascal>(p), 0.0, 0.3),
            2e-4 * p.powf(0.8)
        );
    }

    #[test]
    fn dead_oil_has_no_dissolved_gas() {
        assert_eq!(
            Solubility::DeadOil.solubility(Pressure::new::<pascal>(3e7), 0.5, 0.5),
            0.0
        );
    }

    #[test]
    fn rejects_invalid_parameters() {
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(1.0);
        let zero = MassDensity::new::<kilogram_per_cubic_meter>(0.0);
        assert!(PowerSolubility::new(-1.0, 1.0, rho, rho).is_err());
        assert!(PowerSolubility::new(1.0, 1.0, rho, zero).is_err());
    }

    proptest! {
        #[test]
        fn never_exceeds_mass_balance_cap(
            p in 1.0e3_f64..1.0e8,
            x_oil in 1.0e-6_f64..1.0,
            x_gas in 1.0e-6_f64..1.0,
        ) {
            let rs = model();
            let value = rs.solubility(Pressure::new::<pascal>(p), x_oil, x_gas);
            prop_assert!(value <= (850.0 / 0.9) * x_gas / x_oil);
        }
    }
}
