use twine_solvers::equation::bisection;
use uom::si::{
    acceleration::standard_gravity,
    f64::{Acceleration, MassDensity, Pressure},
    mass_density::kilogram_per_cubic_meter,
    pressure::{atmosphere, pascal},
};

/// Solver configuration for [`HydrostaticWell`](super::HydrostaticWell).
#[derive(Debug, Clone, Copy)]
pub struct HydrostaticConfig {
    /// Pressure held at node 0.
    pub reference_pressure: Pressure,

    /// Gravitational acceleration.
    pub gravity: Acceleration,

    /// Maximum iteration count for each segment's bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the node pressure.
    pub pressure_tol: Pressure,

    /// Upper bound on the mixture density, used to bracket each segment.
    pub max_mixture_density: MassDensity,

    /// Lowest pressure a node may take.
    pub min_pressure: Pressure,

    /// Iteration limit for the drift-flux holdup fixed point.
    pub holdup_max_iters: usize,

    /// Convergence tolerance on the dispersed volume fraction.
    pub holdup_tol: f64,

    /// Under-relaxation factor in `(0, 1]` for the holdup fixed point.
    pub holdup_relaxation: f64,

    /// Slip constant reached at high dispersed fractions.
    pub ku_critical: f64,

    /// Falls back to no-slip fractions when the holdup does not converge.
    pub no_slip_fallback: bool,
}

impl Default for HydrostaticConfig {
    fn default() -> Self {
        Self {
            reference_pressure: Pressure::new::<atmosphere>(1.0),
            gravity: Acceleration::new::<standard_gravity>(1.0),
            max_iters: 100,
            pressure_tol: Pressure::new::<pascal>(1e-6),
            max_mixture_density: MassDensity::new::<kilogram_per_cubic_meter>(3000.0),
            min_pressure: Pressure::new::<pascal>(1.0),
            holdup_max_iters: 200,
            holdup_tol: 1e-10,
            holdup_relaxation: 0.5,
            ku_critical: 3.2,
            no_slip_fallback: true,
        }
    }
}

impl HydrostaticConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.pressure_tol.get::<pascal>(),
            x_rel_tol: 0.0,
            residual_tol: self.pressure_tol.get::<pascal>(),
        }
    }
}
