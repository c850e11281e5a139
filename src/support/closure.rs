//! Closure relations for multiphase wellbore flow.
//!
//! Each closure category computes exactly one quantity and is expressed as a
//! capability trait in [`capability`]. Concrete correlations live in the
//! category modules, and each category also provides an enum of its variants
//! so a well can select a correlation when it is configured.
//!
//! | Category                | Trait                          | Selection enum                |
//! |-------------------------|--------------------------------|-------------------------------|
//! | Density                 | [`DensityModel`]               | [`Density`]                   |
//! | Viscosity               | [`ViscosityModel`]             | [`Viscosity`]                 |
//! | Solubility              | [`SolubilityModel`]            | [`Solubility`]                |
//! | Formation-volume factor | [`FormationVolumeFactorModel`] | [`FormationVolumeFactor`]     |
//! | Relative permeability   | [`RelativePermeabilityModel`]  | [`PowerRelativePermeability`] |
//! | Interfacial tension     | [`InterfacialTensionModel`]    | [`InterfacialTension`]        |
//! | Profile parameter       | [`ProfileParameterModel`]      | [`ProfileParameter`]          |
//! | Drift velocity          | [`DriftVelocityModel`]         | [`DriftVelocity`]             |
//!
//! Closures hold no mutable state. Inputs that depend on the local flow state
//! (dissolved gas, volume fraction, slip terms) are passed explicitly with
//! every evaluation.

mod error;

pub mod capability;
pub mod density;
pub mod drift_flux;
pub mod formation_volume_factor;
pub mod interfacial_tension;
pub mod power_law;
pub mod relative_permeability;
pub mod solubility;
pub mod viscosity;

pub use capability::*;
pub use density::{
    ConstantDensity, Density, DensityInput, FormationVolumeFactorDensity, OilDensity,
    WeaklyCompressibleDensity,
};
pub use drift_flux::{
    DriftAnomaly, DriftVelocity, DriftVelocityInput, DriftVelocityOutput, ProfileParameter,
    ProfileParameterInput, ShiSlipState,
};
pub use error::{EvaluationError, ParameterError, ensure_finite};
pub use formation_volume_factor::{
    FormationVolumeFactor, GasFormationVolumeFactor, LiquidFormationVolumeFactor,
};
pub use interfacial_tension::{
    BeggsGasOilTension, BeggsGasWaterTension, InterfacialTension, TensionCorrection,
};
pub use power_law::PowerLaw;
pub use relative_permeability::PowerRelativePermeability;
pub use solubility::{PowerSolubility, Solubility};
pub use viscosity::{PowerViscosity, Viscosity};
