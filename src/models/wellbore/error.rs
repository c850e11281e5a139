use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Pressure;

use crate::support::closure::{EvaluationError, ParameterError};

/// Errors that can occur while solving a hydrostatic well.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The configuration is invalid.
    #[error("invalid configuration")]
    Config(#[from] ParameterError),

    /// A closure produced a non-finite value.
    #[error("closure evaluation failed")]
    Evaluation(#[from] EvaluationError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The segment solve reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best pressure residual achieved.
        residual: Pressure,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The drift-flux holdup fixed point did not converge.
    #[error("holdup did not converge after {iters} iterations (volume fraction {volume_fraction})")]
    HoldupNotConverged { volume_fraction: f64, iters: usize },

    /// `C0·j + Vd` is not positive, so the dispersed phase cannot move with
    /// the given flux.
    #[error("non-positive drift-flux denominator {denominator} (fraction {volume_fraction})")]
    NegativeDenominator {
        denominator: f64,
        volume_fraction: f64,
    },
}
