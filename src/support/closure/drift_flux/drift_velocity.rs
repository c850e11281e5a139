use thiserror::Error;
use tracing::warn;
use uom::si::{
    f64::{MassDensity, Velocity},
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use crate::support::{
    closure::{DriftVelocityModel, ParameterError, PowerLaw},
    constraint::{ConstraintError, UnitInterval},
};

/// Local flow state read by the drift-velocity closures.
///
/// Variants read the fields they need and ignore the rest. The profile
/// parameter is normally the value just returned by the paired
/// profile-parameter closure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftVelocityInput {
    /// Volume fraction of the dispersed phase.
    pub volume_fraction: f64,
    /// Profile parameter `C0`.
    pub profile_parameter: f64,
    /// Characteristic bubble-rise velocity `Vc`.
    pub characteristic_velocity: Velocity,
    /// Density of the dispersed (lighter) phase.
    pub dispersed_density: MassDensity,
    /// Density of the continuous (heavier) phase.
    pub continuous_density: MassDensity,
    /// Slip constant reached at high dispersed fractions.
    pub ku_critical: f64,
}

/// Snapshot of the Shi gas–liquid evaluation, reported with an anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiSlipState {
    pub volume_fraction: f64,
    pub profile_parameter: f64,
    /// Interpolated slip constant `k`.
    pub slip_constant: f64,
    pub characteristic_velocity: Velocity,
    pub dispersed_density: MassDensity,
    pub continuous_density: MassDensity,
    pub drift_velocity: Velocity,
}

/// A physically anomalous drift-velocity evaluation.
///
/// The velocity is still returned so the caller can decide whether to carry
/// on, retry with a damped state, or stop.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DriftAnomaly {
    #[error("dispersed/continuous density ratio {ratio} is outside [0, 1]")]
    DensityRatioOutOfRange { ratio: f64, state: ShiSlipState },

    #[error("drift velocity is not finite at volume fraction {}", .state.volume_fraction)]
    NonFinite { state: ShiSlipState },
}

impl DriftAnomaly {
    /// Returns the evaluation state captured with the anomaly.
    #[must_use]
    pub fn state(&self) -> &ShiSlipState {
        match self {
            Self::DensityRatioOutOfRange { state, .. } | Self::NonFinite { state } => state,
        }
    }
}

/// Result of a drift-velocity evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftVelocityOutput {
    pub velocity: Velocity,
    /// Set when the evaluation hit an anomalous physical state.
    pub anomaly: Option<DriftAnomaly>,
}

impl DriftVelocityOutput {
    /// Wraps a velocity computed without anomaly.
    #[must_use]
    pub fn clean(velocity: Velocity) -> Self {
        Self {
            velocity,
            anomaly: None,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.velocity.value.is_finite()
    }

    /// Treats an anomaly as an error.
    ///
    /// # Errors
    ///
    /// Returns the [`DriftAnomaly`] if one was recorded.
    pub fn into_result(self) -> Result<Velocity, DriftAnomaly> {
        match self.anomaly {
            Some(anomaly) => Err(anomaly),
            None => Ok(self.velocity),
        }
    }
}

/// Power law in the liquid fraction, `Vd = α · (1 − f_gas)^power` in m/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasVolumeFractionDrift {
    law: PowerLaw,
}

impl GasVolumeFractionDrift {
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `α` or the power is `NaN` or infinite.
    pub fn new(alpha: f64, power: f64) -> Result<Self, ParameterError> {
        let alpha = finite("drift coefficient", alpha)?;
        let power = finite("drift exponent", power)?;
        Ok(Self {
            law: PowerLaw::new(alpha, power),
        })
    }
}

fn finite(parameter: &'static str, value: f64) -> Result<f64, ParameterError> {
    let source = if value.is_nan() {
        ConstraintError::NotANumber
    } else if value == f64::INFINITY {
        ConstraintError::AboveMaximum
    } else if value == f64::NEG_INFINITY {
        ConstraintError::BelowMinimum
    } else {
        return Ok(value);
    };
    Err(ParameterError::Invalid {
        parameter,
        value,
        source,
    })
}

impl DriftVelocityModel for GasVolumeFractionDrift {
    fn drift_velocity(&self, input: &DriftVelocityInput) -> DriftVelocityOutput {
        let law = self.law.with_reference(1.0 - input.volume_fraction);
        DriftVelocityOutput::clean(Velocity::new::<meter_per_second>(law.value()))
    }
}

/// Shi gas–liquid drift velocity.
///
/// The slip constant `k` moves linearly from `1.53 / C0` at `f ≤ a1` to
/// `Ku` at `f ≥ a2`, then
///
/// ```text
/// Vd = (1 − f·C0)·C0·k·Vc / (f·C0·sqrt(ρd/ρc) + 1 − f·C0)
/// ```
///
/// # Example
///
/// ```
/// use uom::si::{
///     f64::{MassDensity, Velocity},
///     mass_density::kilogram_per_cubic_meter,
///     velocity::meter_per_second,
/// };
/// use wellbore_closures::support::closure::{DriftVelocityInput, DriftVelocityModel};
/// use wellbore_closures::support::closure::drift_flux::ShiGasLiquidDrift;
///
/// let vd = ShiGasLiquidDrift::new(0.2, 0.4).unwrap();
/// let output = vd.drift_velocity(&DriftVelocityInput {
///     volume_fraction: 0.1,
///     profile_parameter: 1.0,
///     characteristic_velocity: Velocity::new::<meter_per_second>(0.2),
///     dispersed_density: MassDensity::new::<kilogram_per_cubic_meter>(0.0),
///     continuous_density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
///     ku_critical: 3.2,
/// });
///
/// // With a zero density ratio, Vd reduces to C0·k·Vc.
/// assert!(output.anomaly.is_none());
/// assert!((output.velocity.get::<meter_per_second>() - 1.53 * 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiGasLiquidDrift {
    a1: f64,
    a2: f64,
}

impl ShiGasLiquidDrift {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if a threshold lies outside `[0, 1]` or
    /// `a2 ≤ a1`.
    pub fn new(a1: f64, a2: f64) -> Result<Self, ParameterError> {
        let a1 = ParameterError::check::<UnitInterval>("a1", a1)?;
        let a2 = ParameterError::check::<UnitInterval>("a2", a2)?;
        ParameterError::ordered(("a1", a1), ("a2", a2))?;
        Ok(Self { a1, a2 })
    }

    fn slip_constant(&self, volume_fraction: f64, profile_parameter: f64, ku: f64) -> f64 {
        let k_low = 1.53 / profile_parameter;
        if volume_fraction <= self.a1 {
            k_low
        } else if volume_fraction >= self.a2 {
            ku
        } else {
            ku - ((self.a2 - volume_fraction) / (self.a2 - self.a1)) * (ku - k_low)
        }
    }
}

impl DriftVelocityModel for ShiGasLiquidDrift {
    fn drift_velocity(&self, input: &DriftVelocityInput) -> DriftVelocityOutput {
        let f = input.volume_fraction;
        let c0 = input.profile_parameter;
        let k = self.slip_constant(f, c0, input.ku_critical);
        let vc = input.characteristic_velocity.get::<meter_per_second>();
        let ratio = input.dispersed_density.get::<kilogram_per_cubic_meter>()
            / input.continuous_density.get::<kilogram_per_cubic_meter>();

        let fc0 = f * c0;
        let vd = (1.0 - fc0) * c0 * k * vc / (fc0 * ratio.sqrt() + 1.0 - fc0);
        let velocity = Velocity::new::<meter_per_second>(vd);

        let state = ShiSlipState {
            volume_fraction: f,
            profile_parameter: c0,
            slip_constant: k,
            characteristic_velocity: input.characteristic_velocity,
            dispersed_density: input.dispersed_density,
            continuous_density: input.continuous_density,
            drift_velocity: velocity,
        };

        let anomaly = if !(0.0..=1.0).contains(&ratio) {
            Some(DriftAnomaly::DensityRatioOutOfRange { ratio, state })
        } else if !vd.is_finite() {
            Some(DriftAnomaly::NonFinite { state })
        } else {
            None
        };

        if let Some(anomaly) = &anomaly {
            warn!(
                volume_fraction = f,
                profile_parameter = c0,
                slip_constant = k,
                characteristic_velocity = vc,
                density_ratio = ratio,
                drift_velocity = vd,
                "shi gas-liquid drift velocity: {anomaly}"
            );
        }

        DriftVelocityOutput { velocity, anomaly }
    }
}

/// Drift-velocity closure selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriftVelocity {
    /// Fixed drift velocity.
    Constant(Velocity),
    GasVolumeFraction(GasVolumeFractionDrift),
    ShiGasLiquid(ShiGasLiquidDrift),
    /// Shi oil–water drift, `Vd = 1.53 · Vc · (1 − f)²`.
    ShiOilWater,
}

impl DriftVelocityModel for DriftVelocity {
    fn drift_velocity(&self, input: &DriftVelocityInput) -> DriftVelocityOutput {
        match self {
            Self::Constant(vd) => DriftVelocityOutput::clean(*vd),
            Self::GasVolumeFraction(model) => model.drift_velocity(input),
            Self::ShiGasLiquid(model) => model.drift_velocity(input),
            Self::ShiOilWater => {
                let liquid = 1.0 - input.volume_fraction;
                DriftVelocityOutput::clean(input.characteristic_velocity * (1.53 * liquid * liquid))
            }
        }
    }
}

impl From<GasVolumeFractionDrift> for DriftVelocity {
    fn from(model: GasVolumeFractionDrift) -> Self {
        Self::GasVolumeFraction(model)
    }
}

impl From<ShiGasLiquidDrift> for DriftVelocity {
    fn from(model: ShiGasLiquidDrift) -> Self {
        Self::ShiGasLiquid(model)
    }
}
