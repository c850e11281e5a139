use uom::si::{f64::Velocity, velocity::meter_per_second};

use crate::support::{
    closure::{ParameterError, ProfileParameterModel},
    constraint::{NonNegative, StrictlyPositive, UnitInterval, UnitIntervalUpperOpen},
};

/// Local flow state read by the profile-parameter closures.
///
/// Variants read the fields they need and ignore the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileParameterInput {
    /// Volume fraction of the dispersed phase.
    pub volume_fraction: f64,
    /// Mixture volumetric flux `j`.
    pub mixture_velocity: Velocity,
    /// Flooding velocity used to normalise `|j|`.
    pub flooding_velocity: Velocity,
}

impl ProfileParameterInput {
    /// Creates an input with zero mixture and flooding velocities.
    #[must_use]
    pub fn at(volume_fraction: f64) -> Self {
        Self {
            volume_fraction,
            mixture_velocity: Velocity::new::<meter_per_second>(0.0),
            flooding_velocity: Velocity::new::<meter_per_second>(0.0),
        }
    }

    #[must_use]
    pub fn with_velocities(self, mixture_velocity: Velocity, flooding_velocity: Velocity) -> Self {
        Self {
            mixture_velocity,
            flooding_velocity,
            ..self
        }
    }
}

/// Shi oil–water profile parameter.
///
/// ```text
/// f ≤ B1       → A
/// f ≥ B2       → 1
/// otherwise    → A − (A − 1)·(f − B1)/(B2 − B1)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiOilWaterProfile {
    a: f64,
    b1: f64,
    b2: f64,
}

impl ShiOilWaterProfile {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `A` is not strictly positive, a threshold
    /// lies outside `[0, 1]`, or `B2 ≤ B1`.
    pub fn new(a: f64, b1: f64, b2: f64) -> Result<Self, ParameterError> {
        let a = ParameterError::check::<StrictlyPositive>("A", a)?;
        let b1 = ParameterError::check::<UnitInterval>("B1", b1)?;
        let b2 = ParameterError::check::<UnitInterval>("B2", b2)?;
        ParameterError::ordered(("B1", b1), ("B2", b2))?;
        Ok(Self { a, b1, b2 })
    }
}

impl ProfileParameterModel for ShiOilWaterProfile {
    fn profile_parameter(&self, input: &ProfileParameterInput) -> f64 {
        let f = input.volume_fraction;
        if f <= self.b1 {
            self.a
        } else if f >= self.b2 {
            1.0
        } else {
            self.a - (self.a - 1.0) * (f - self.b1) / (self.b2 - self.b1)
        }
    }
}

/// Shi gas–liquid profile parameter.
///
/// ```text
/// β  = max(f, Fv·f·|j| / v_flood)
/// γ  = clamp((β − B)/(1 − B), 0, 1)
/// C0 = A / (1 + (A − 1)·γ²)
/// ```
///
/// # Example
///
/// ```
/// use wellbore_closures::support::closure::{ProfileParameterInput, ProfileParameterModel};
/// use wellbore_closures::support::closure::drift_flux::ShiGasLiquidProfile;
///
/// let c0 = ShiGasLiquidProfile::new(1.2, 0.3, 1.0).unwrap();
///
/// // Below B the profile parameter is A; fully developed flow gives 1.
/// assert_eq!(c0.profile_parameter(&ProfileParameterInput::at(0.1)), 1.2);
/// assert!((c0.profile_parameter(&ProfileParameterInput::at(1.0)) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiGasLiquidProfile {
    a: f64,
    b: f64,
    fv: f64,
}

impl ShiGasLiquidProfile {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if `A` is not strictly positive, `B` lies
    /// outside `[0, 1)`, or `Fv` is negative.
    pub fn new(a: f64, b: f64, fv: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            a: ParameterError::check::<StrictlyPositive>("A", a)?,
            b: ParameterError::check::<UnitIntervalUpperOpen>("B", b)?,
            fv: ParameterError::check::<NonNegative>("Fv", fv)?,
        })
    }
}

impl ProfileParameterModel for ShiGasLiquidProfile {
    fn profile_parameter(&self, input: &ProfileParameterInput) -> f64 {
        let f = input.volume_fraction;
        let j = input.mixture_velocity.get::<meter_per_second>().abs();
        let flood = input.flooding_velocity.get::<meter_per_second>();

        // A zero flooding velocity with no flow gives NaN, which `max` discards.
        let beta = f.max(self.fv * f * j / flood);
        let gamma = ((beta - self.b) / (1.0 - self.b)).clamp(0.0, 1.0);

        self.a / (1.0 + (self.a - 1.0) * gamma * gamma)
    }
}

/// Profile-parameter closure selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileParameter {
    /// Fixed `C0`, typically 1 for homogeneous flow.
    Constant(f64),
    ShiOilWater(ShiOilWaterProfile),
    ShiGasLiquid(ShiGasLiquidProfile),
}

impl ProfileParameterModel for ProfileParameter {
    fn profile_parameter(&self, input: &ProfileParameterInput) -> f64 {
        match self {
            Self::Constant(c0) => *c0,
            Self::ShiOilWater(model) => model.profile_parameter(input),
            Self::ShiGasLiquid(model) => model.profile_parameter(input),
        }
    }
}

impl From<ShiOilWaterProfile> for ProfileParameter {
    fn from(model: ShiOilWaterProfile) -> Self {
        Self::ShiOilWater(model)
    }
}

impl From<ShiGasLiquidProfile> for ProfileParameter {
    fn from(model: ShiGasLiquidProfile) -> Self {
        Self::ShiGasLiquid(model)
    }
}
