//! Problem formulation for one well segment.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Area, Length, Pressure},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
};

use crate::support::well::PhaseFlows;

use super::{ClosureSet, HydrostaticConfig, NodeProperties, SolveError};

/// Model adapter for a segment between an upstream node and the next node.
///
/// Takes the downstream node pressure and evaluates the closures at the
/// segment-average pressure.
pub(super) struct SegmentModel<'a> {
    closures: &'a ClosureSet,
    config: &'a HydrostaticConfig,
    upstream_pressure: Pressure,
    flows: PhaseFlows,
    area: Area,
}

/// Closure state for a trial downstream pressure.
#[derive(Debug, Clone, Copy)]
pub(super) struct SegmentOutput {
    pub(super) pressure: Pressure,
    pub(super) average: NodeProperties,
}

impl<'a> SegmentModel<'a> {
    pub(super) fn new(
        closures: &'a ClosureSet,
        config: &'a HydrostaticConfig,
        upstream_pressure: Pressure,
        flows: PhaseFlows,
        area: Area,
    ) -> Self {
        Self {
            closures,
            config,
            upstream_pressure,
            flows,
            area,
        }
    }
}

impl Model for SegmentModel<'_> {
    type Input = Pressure;
    type Output = SegmentOutput;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let average_pressure = (self.upstream_pressure + *input) * 0.5;
        let average =
            self.closures
                .node_properties(average_pressure, &self.flows, self.area, self.config)?;
        Ok(SegmentOutput {
            pressure: *input,
            average,
        })
    }
}

/// Hydrostatic balance over a segment.
///
/// Computes the residual `P_i − P_{i−1} − ρ_m·g·(z_{i−1} − z_i)`.
pub(super) struct SegmentProblem {
    upstream_pressure: Pressure,
    /// `g·(z_{i−1} − z_i)` in m²/s².
    head: f64,
}

impl SegmentProblem {
    pub(super) fn new(
        upstream_pressure: Pressure,
        drop: Length,
        config: &HydrostaticConfig,
    ) -> Self {
        Self {
            upstream_pressure,
            head: config.gravity.get::<meter_per_second_squared>() * drop.get::<meter>(),
        }
    }
}

impl EquationProblem<1> for SegmentProblem {
    type Input = Pressure;
    type Output = SegmentOutput;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Pressure::new::<pascal>(x[0]))
    }

    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let dp = (*input - self.upstream_pressure).get::<pascal>();
        let rho = output.average.mixture_density.get::<kilogram_per_cubic_meter>();
        Ok([dp - rho * self.head])
    }
}

/// Solves for the pressure at the downstream node of a segment.
///
/// The bracket spans the pressure change of a column at
/// [`HydrostaticConfig::max_mixture_density`], so the residual changes sign
/// across it for any mixture density between zero and that bound.
///
/// # Errors
///
/// Returns [`SolveError`] if the closures fail inside the bracket or the
/// bisection does not converge.
pub(super) fn solve_segment(
    closures: &ClosureSet,
    config: &HydrostaticConfig,
    upstream_pressure: Pressure,
    drop: Length,
    flows: PhaseFlows,
    area: Area,
) -> Result<SegmentOutput, SolveError> {
    let model = SegmentModel::new(closures, config, upstream_pressure, flows, area);
    let problem = SegmentProblem::new(upstream_pressure, drop, config);

    let p = upstream_pressure.get::<pascal>();
    // One extra pascal keeps the bracket open for horizontal segments.
    let span = config.max_mixture_density.get::<kilogram_per_cubic_meter>()
        * config.gravity.get::<meter_per_second_squared>()
        * drop.get::<meter>().abs()
        + 1.0;
    let lower = (p - span).max(config.min_pressure.get::<pascal>());

    let solution = bisection::solve(
        &model,
        &problem,
        [lower, p + span],
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SolveError::MaxIters {
            residual: Pressure::new::<pascal>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

/// Returns the mean of two nodes' rates.
pub(super) fn segment_flows(upstream: &PhaseFlows, downstream: &PhaseFlows) -> PhaseFlows {
    PhaseFlows {
        oil: (upstream.oil + downstream.oil) * 0.5,
        water: (upstream.water + downstream.water) * 0.5,
        gas: (upstream.gas + downstream.gas) * 0.5,
    }
}
