//! Formation-volume factor closures.
//!
//! The formation-volume factor `B` is the ratio of a phase's volume at local
//! pressure to its volume at standard conditions.
//!
//! - [`LiquidFormationVolumeFactor`]: `B = B_ref / (1 + c·(P − P_ref))`
//! - [`GasFormationVolumeFactor`]: `B = B_ref·P / (2P − P_ref)`, obtained from
//!   the liquid form by taking the gas isothermal compressibility as `c = 1/P`.

use uom::si::{f64::Pressure, pressure::pascal};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{FormationVolumeFactorModel, ParameterError};

/// Slightly compressible liquid formation-volume factor.
///
/// # Example
///
/// ```
/// use uom::si::{f64::Pressure, pressure::pascal};
/// use wellbore_closures::support::closure::{
///     FormationVolumeFactorModel, LiquidFormationVolumeFactor,
/// };
///
/// let bo = LiquidFormationVolumeFactor::new(1e-5, Pressure::new::<pascal>(2e7), 1.2).unwrap();
/// assert_eq!(bo.formation_volume_factor(Pressure::new::<pascal>(2e7)), 1.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidFormationVolumeFactor {
    compressibility: f64,
    reference_pressure: Pressure,
    reference_factor: f64,
}

impl LiquidFormationVolumeFactor {
    /// Creates the closure.
    ///
    /// `compressibility` is the isothermal compressibility `c` in 1/Pa.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `c` or `P_ref` is negative or `B_ref` is
    /// not strictly positive.
    pub fn new(
        compressibility: f64,
        reference_pressure: Pressure,
        reference_factor: f64,
    ) -> Result<Self, ParameterError> {
        let compressibility =
            ParameterError::check::<NonNegative>("compressibility", compressibility)?;
        ParameterError::check::<NonNegative>(
            "reference pressure",
            reference_pressure.get::<pascal>(),
        )?;
        let reference_factor = ParameterError::check::<StrictlyPositive>(
            "reference formation-volume factor",
            reference_factor,
        )?;

        Ok(Self {
            compressibility,
            reference_pressure,
            reference_factor,
        })
    }
}

impl FormationVolumeFactorModel for LiquidFormationVolumeFactor {
    fn formation_volume_factor(&self, pressure: Pressure) -> f64 {
        let dp = (pressure - self.reference_pressure).get::<pascal>();
        self.reference_factor / (1.0 + self.compressibility * dp)
    }
}

/// Gas formation-volume factor with compressibility `1/P`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasFormationVolumeFactor {
    reference_pressure: Pressure,
    reference_factor: f64,
}

impl GasFormationVolumeFactor {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `P_ref` or `B_ref` is not strictly positive.
    pub fn new(
        reference_pressure: Pressure,
        reference_factor: f64,
    ) -> Result<Self, ParameterError> {
        ParameterError::check::<StrictlyPositive>(
            "reference pressure",
            reference_pressure.get::<pascal>(),
        )?;
        let reference_factor = ParameterError::check::<StrictlyPositive>(
            "reference formation-volume factor",
            reference_factor,
        )?;

        Ok(Self {
            reference_pressure,
            reference_factor,
        })
    }
}

impl FormationVolumeFactorModel for GasFormationVolumeFactor {
    fn formation_volume_factor(&self, pressure: Pressure) -> f64 {
        let p = pressure.get::<pascal>();
        let p_ref = self.reference_pressure.get::<pascal>();
        self.reference_factor * p / (2.0 * p - p_ref)
    }
}

/// Formation-volume factor closure selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormationVolumeFactor {
    Liquid(LiquidFormationVolumeFactor),
    Gas(GasFormationVolumeFactor),
}

impl FormationVolumeFactorModel for FormationVolumeFactor {
    fn formation_volume_factor(&self, pressure: Pressure) -> f64 {
        match self {
            Self::Liquid(model) => model.formation_volume_factor(pressure),
            Self::Gas(model) => model.formation_volume_factor(pressure),
        }
    }
}

impl From<LiquidFormationVolumeFactor> for FormationVolumeFactor {
    fn from(model: LiquidFormationVolumeFactor) -> Self {
        Self::Liquid(model)
    }
}

impl From<GasFormationVolumeFactor> for FormationVolumeFactor {
    fn from(model: GasFormationVolumeFactor) -> Self {
        Self::Gas(model)
    }
}
