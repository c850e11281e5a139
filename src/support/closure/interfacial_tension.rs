//! Interfacial-tension closures.
//!
//! The Beggs correlations are stated in oilfield units: temperature in °F,
//! pressure in psi and tension in dyn/cm. Conversions go through [`uom`] so
//! the closures take and return SI quantities.
//!
//! # Gas–oil
//!
//! ```text
//! σ68  = 39.0 − 0.2571·API
//! σ100 = 37.5 − 0.2571·API
//! C    = 1 − 0.024·P^0.45                 (P in psi)
//! σ    = C·(σ68 − (T − 68)·(σ68 − σ100)/32)
//! ```
//!
//! with `T` clamped to `[68 °F, 100 °F]`. See [`TensionCorrection`] for where
//! the pressure correction `C` is applied.
//!
//! # Gas–water
//!
//! ```text
//! σ74  = 75.0 − 1.108·P^0.349
//! σ280 = 53.0 − 0.1048·P^0.637
//! σ    = σ74 − (T − 74)·(σ74 − σ280)/206
//! ```
//!
//! with `T` clamped to `[74 °F, 280 °F]`.
//!
//! The working temperature is fixed per fluid, so it is clamped once at
//! construction and the interpolation weight is cached.

use uom::si::{
    f64::{Force, Length, Pressure, ThermodynamicTemperature},
    force::dyne,
    length::centimeter,
    pressure::pound_force_per_square_inch,
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::support::constraint::StrictlyPositive;
use crate::support::units::{SurfaceTension, TemperatureDifference};

use super::{InterfacialTensionModel, ParameterError};

/// Where the gas–oil pressure correction `C` is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TensionCorrection {
    /// `C` scales the temperature-interpolated tension (the published form).
    #[default]
    Interpolated,
    /// `C` scales only the 68 °F end point before interpolating.
    LowerEndpoint,
}

/// Beggs gas–oil interfacial tension.
///
/// # Example
///
/// ```
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::pascal,
///     thermodynamic_temperature::degree_fahrenheit,
/// };
/// use wellbore_closures::support::closure::{
///     BeggsGasOilTension, InterfacialTensionModel, TensionCorrection,
/// };
///
/// let sigma = BeggsGasOilTension::new(
///     ThermodynamicTemperature::new::<degree_fahrenheit>(68.0),
///     0.85,
///     TensionCorrection::default(),
/// )
/// .unwrap();
///
/// // At zero pressure C = 1 and the result is σ68 in N/m.
/// let api = 141.5 / 0.85 - 131.5;
/// let expected = (39.0 - 0.2571 * api) * 1e-3;
/// let value = sigma.interfacial_tension(Pressure::new::<pascal>(0.0)).value;
/// assert!((value - expected).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeggsGasOilTension {
    api_gravity: f64,
    /// `(T − 68)/32` with `T` clamped to `[68, 100]` °F.
    weight: f64,
    correction: TensionCorrection,
}

impl BeggsGasOilTension {
    /// Creates the closure from the fluid temperature and the oil relative
    /// density at standard conditions (water = 1).
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if the relative density is not strictly
    /// positive or the temperature is not a number.
    pub fn new(
        temperature: ThermodynamicTemperature,
        relative_density: f64,
        correction: TensionCorrection,
    ) -> Result<Self, ParameterError> {
        let relative_density =
            ParameterError::check::<StrictlyPositive>("oil relative density", relative_density)?;

        Ok(Self {
            api_gravity: 141.5 / relative_density - 131.5,
            weight: interpolation_weight(temperature, 68.0, 100.0)?,
            correction,
        })
    }

    /// Returns the API gravity derived from the relative density.
    #[must_use]
    pub fn api_gravity(&self) -> f64 {
        self.api_gravity
    }
}

impl InterfacialTensionModel for BeggsGasOilTension {
    fn interfacial_tension(&self, pressure: Pressure) -> SurfaceTension {
        let sigma_68 = 39.0 - 0.2571 * self.api_gravity;
        let sigma_100 = 37.5 - 0.2571 * self.api_gravity;
        let c = 1.0 - 0.024 * pressure.get::<pound_force_per_square_inch>().powf(0.45);

        let sigma = match self.correction {
            TensionCorrection::Interpolated => {
                c * (sigma_68 - self.weight * (sigma_68 - sigma_100))
            }
            TensionCorrection::LowerEndpoint => {
                let corrected = c * sigma_68;
                corrected - self.weight * (corrected - sigma_100)
            }
        };

        dyne_per_centimeter(sigma)
    }
}

/// Beggs gas–water interfacial tension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeggsGasWaterTension {
    /// `(T − 74)/206` with `T` clamped to `[74, 280]` °F.
    weight: f64,
}

impl BeggsGasWaterTension {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if the temperature is not a number.
    pub fn new(temperature: ThermodynamicTemperature) -> Result<Self, ParameterError> {
        Ok(Self {
            weight: interpolation_weight(temperature, 74.0, 280.0)?,
        })
    }
}

impl InterfacialTensionModel for BeggsGasWaterTension {
    fn interfacial_tension(&self, pressure: Pressure) -> SurfaceTension {
        let p = pressure.get::<pound_force_per_square_inch>();
        let sigma_74 = 75.0 - 1.108 * p.powf(0.349);
        let sigma_280 = 53.0 - 0.1048 * p.powf(0.637);

        dyne_per_centimeter(sigma_74 - self.weight * (sigma_74 - sigma_280))
    }
}

/// Interfacial-tension closure selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterfacialTension {
    /// Pressure-independent tension.
    Constant(SurfaceTension),
    GasOil(BeggsGasOilTension),
    GasWater(BeggsGasWaterTension),
}

impl InterfacialTensionModel for InterfacialTension {
    fn interfacial_tension(&self, pressure: Pressure) -> SurfaceTension {
        match self {
            Self::Constant(sigma) => *sigma,
            Self::GasOil(model) => model.interfacial_tension(pressure),
            Self::GasWater(model) => model.interfacial_tension(pressure),
        }
    }
}

impl From<BeggsGasOilTension> for InterfacialTension {
    fn from(model: BeggsGasOilTension) -> Self {
        Self::GasOil(model)
    }
}

impl From<BeggsGasWaterTension> for InterfacialTension {
    fn from(model: BeggsGasWaterTension) -> Self {
        Self::GasWater(model)
    }
}

/// Converts a tension in dyn/cm to SI.
fn dyne_per_centimeter(value: f64) -> SurfaceTension {
    Force::new::<dyne>(value) / Length::new::<centimeter>(1.0)
}

/// Clamps `temperature` to `[low, high]` °F and returns `(T − low)/(high − low)`.
fn interpolation_weight(
    temperature: ThermodynamicTemperature,
    low: f64,
    high: f64,
) -> Result<f64, ParameterError> {
    let fahrenheit = temperature.get::<degree_fahrenheit>();
    if fahrenheit.is_nan() {
        return Err(ParameterError::Invalid {
            parameter: "temperature",
            value: fahrenheit,
            source: crate::support::constraint::ConstraintError::NotANumber,
        });
    }

    let clamped = ThermodynamicTemperature::new::<degree_fahrenheit>(fahrenheit.clamp(low, high));
    let lower = ThermodynamicTemperature::new::<degree_fahrenheit>(low);
    Ok(clamped.minus(lower).get::<delta_fahrenheit>() / (high - low))
}
