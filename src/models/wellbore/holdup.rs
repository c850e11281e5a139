//! Drift-flux holdup.
//!
//! With dispersed superficial velocity `j_d` and mixture flux `j`, the
//! dispersed phase moves at `C0·j + Vd`, so its volume fraction satisfies
//!
//! ```text
//! α = j_d / (C0(α)·j + Vd(α, C0))
//! ```
//!
//! Both closures depend on `α`, so the fraction is found by an
//! under-relaxed fixed-point iteration, clamped to `[0, 1]`.

use uom::si::{
    f64::{MassDensity, Velocity},
    velocity::meter_per_second,
};

use crate::support::closure::{
    DriftAnomaly, DriftVelocityInput, DriftVelocityModel, DriftVelocityOutput,
    ProfileParameterInput, ProfileParameterModel, ensure_finite,
};

use super::{HydrostaticConfig, SlipClosures, SolveError};

/// Flow state of one dispersed/continuous pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldupState {
    /// Superficial velocity of the dispersed phase.
    pub dispersed_flux: Velocity,
    /// Superficial velocity of the dispersed and continuous phases together.
    pub mixture_flux: Velocity,
    pub dispersed_density: MassDensity,
    pub continuous_density: MassDensity,
    pub characteristic_velocity: Velocity,
    pub flooding_velocity: Velocity,
}

/// Converged holdup and the slip terms evaluated at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Holdup {
    pub volume_fraction: f64,
    pub profile_parameter: f64,
    pub drift_velocity: Velocity,
    /// Last anomaly reported by the drift-velocity closure, if any.
    pub anomaly: Option<DriftAnomaly>,
    pub iters: usize,
}

/// Solves for the dispersed volume fraction.
///
/// A zero dispersed flux gives `α = 0` without iterating.
///
/// # Errors
///
/// Returns [`SolveError::Evaluation`] if the slip closures produce a
/// non-finite dispersed-phase velocity, [`SolveError::NegativeDenominator`]
/// if the dispersed phase cannot move with the given flux, or
/// [`SolveError::HoldupNotConverged`] if the iteration limit is reached.
pub fn dispersed_fraction(
    slip: &SlipClosures,
    state: &HoldupState,
    config: &HydrostaticConfig,
) -> Result<Holdup, SolveError> {
    let j_d = state.dispersed_flux.get::<meter_per_second>();
    let j = state.mixture_flux.get::<meter_per_second>();

    if j_d == 0.0 {
        let (profile_parameter, drift) = slip_terms(slip, state, config, 0.0);
        return Ok(Holdup {
            volume_fraction: 0.0,
            profile_parameter,
            drift_velocity: drift.velocity,
            anomaly: drift.anomaly,
            iters: 0,
        });
    }

    // Start from the no-slip fraction.
    let mut alpha = if j == 0.0 { 0.0 } else { (j_d / j).clamp(0.0, 1.0) };
    let mut anomaly = None;

    for iter in 1..=config.holdup_max_iters {
        let (profile_parameter, drift) = slip_terms(slip, state, config, alpha);
        anomaly = drift.anomaly.or(anomaly);

        let denominator = ensure_finite(
            "drift-flux denominator",
            profile_parameter * j + drift.velocity.get::<meter_per_second>(),
        )?;
        if denominator <= 0.0 {
            return Err(SolveError::NegativeDenominator {
                denominator,
                volume_fraction: alpha,
            });
        }

        let target = (j_d / denominator).clamp(0.0, 1.0);
        let next = alpha + config.holdup_relaxation * (target - alpha);

        if (next - alpha).abs() <= config.holdup_tol {
            let (profile_parameter, drift) = slip_terms(slip, state, config, next);
            return Ok(Holdup {
                volume_fraction: next,
                profile_parameter,
                drift_velocity: drift.velocity,
                anomaly: drift.anomaly.or(anomaly),
                iters: iter,
            });
        }
        alpha = next;
    }

    Err(SolveError::HoldupNotConverged {
        volume_fraction: alpha,
        iters: config.holdup_max_iters,
    })
}

fn slip_terms(
    slip: &SlipClosures,
    state: &HoldupState,
    config: &HydrostaticConfig,
    volume_fraction: f64,
) -> (f64, DriftVelocityOutput) {
    let profile_parameter = slip.profile_parameter.profile_parameter(&ProfileParameterInput {
        volume_fraction,
        mixture_velocity: state.mixture_flux,
        flooding_velocity: state.flooding_velocity,
    });

    let drift = slip.drift_velocity.drift_velocity(&DriftVelocityInput {
        volume_fraction,
        profile_parameter,
        characteristic_velocity: state.characteristic_velocity,
        dispersed_density: state.dispersed_density,
        continuous_density: state.continuous_density,
        ku_critical: config.ku_critical,
    });

    (profile_parameter, drift)
}
