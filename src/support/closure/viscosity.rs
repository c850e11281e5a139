//! Phase viscosity closures.

use uom::si::{
    dynamic_viscosity::pascal_second, f64::DynamicViscosity, f64::Pressure, pressure::pascal,
};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

use super::{ParameterError, PowerLaw, ViscosityModel};

/// Power-law viscosity `μ = α · P^exponent`, with `P` in Pa and `μ` in Pa·s.
///
/// # Example
///
/// ```
/// use uom::si::{dynamic_viscosity::pascal_second, f64::Pressure, pressure::pascal};
/// use wellbore_closures::support::closure::{PowerViscosity, ViscosityModel};
///
/// let gas = PowerViscosity::new(1e-6, 0.25).unwrap();
/// let mu = gas.viscosity(Pressure::new::<pascal>(1e8));
/// assert!((mu.get::<pascal_second>() - 1e-4).abs() < 1e-18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerViscosity {
    law: PowerLaw,
}

impl PowerViscosity {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `α` is not strictly positive or the
    /// exponent is not a number.
    pub fn new(alpha: f64, exponent: f64) -> Result<Self, ParameterError> {
        let alpha = ParameterError::check::<StrictlyPositive>("viscosity coefficient", alpha)?;
        if exponent.is_nan() {
            return Err(ParameterError::Invalid {
                parameter: "viscosity exponent",
                value: exponent,
                source: ConstraintError::NotANumber,
            });
        }
        Ok(Self {
            law: PowerLaw::new(alpha, exponent),
        })
    }
}

impl ViscosityModel for PowerViscosity {
    fn viscosity(&self, pressure: Pressure) -> DynamicViscosity {
        DynamicViscosity::new::<pascal_second>(self.law.evaluate(pressure.get::<pascal>()))
    }
}

/// Viscosity closure selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viscosity {
    /// Pressure-independent viscosity.
    Constant(DynamicViscosity),
    Power(PowerViscosity),
}

impl ViscosityModel for Viscosity {
    fn viscosity(&self, pressure: Pressure) -> DynamicViscosity {
        match self {
            Self::Constant(mu) => *mu,
            Self::Power(model) => model.viscosity(pressure),
        }
    }
}

impl From<PowerViscosity> for Viscosity {
    fn from(model: PowerViscosity) -> Self {
        Self::Power(model)
    }
}
