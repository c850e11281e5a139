//! The contract a wellbore solver exposes to the reservoir coupling loop.
//!
//! A coupling loop drives every well the same way:
//!
//! 1. [`Well::set_size`] fixes the number of nodes.
//! 2. [`Well::initialize_flow`] binds the shared oil, water and gas flow
//!    vectors, and [`Well::set_radius`] and [`Well::read_coordinates`] supply
//!    the geometry.
//! 3. Each outer iteration calls [`Well::solve`], then reads back
//!    [`Well::coordinates`] and [`Well::pressure`] node by node to build the
//!    reservoir source terms. It may update the flow vectors in place through
//!    [`FlowVectors`] between iterations.
//!
//! [`WellNodes`] implements the bookkeeping and state checks shared by every
//! implementation, so a concrete well only adds its `solve`.

mod coordinates;
mod error;
mod flow;
mod nodes;
mod status;

use std::io::BufRead;

use uom::si::f64::{Length, Pressure};

pub use coordinates::{NodeCoordinates, parse_coordinates};
pub use error::WellError;
pub use flow::{FlowVectors, PhaseFlows, SharedFlow};
pub use nodes::{SolveInputs, WellNodes};
pub use status::WellStatus;

/// A discretized wellbore as seen by the coupling loop.
///
/// The trait is object safe so a loop can hold heterogeneous wells as
/// `Box<dyn Well>`.
pub trait Well {
    /// Fixes the number of nodes.
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the size is invalid or the well is already sized.
    fn set_size(&mut self, number_of_nodes: usize) -> Result<(), WellError>;

    /// Binds the per-node flow vectors.
    ///
    /// Any previous solution is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the well is unsized or a vector length differs
    /// from the number of nodes.
    fn initialize_flow(&mut self, flows: FlowVectors) -> Result<(), WellError>;

    /// Sets the wellbore radius.
    ///
    /// On a solved well this discards the solution.
    ///
    /// # Errors
    ///
    /// Returns [`WellError::Radius`] unless the radius is strictly positive.
    fn set_radius(&mut self, radius: Length) -> Result<(), WellError>;

    /// Reads one `x y z` line per node, in metres.
    ///
    /// On a solved well a successful read discards the solution.
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the well is unsized, the stream cannot be read,
    /// a line does not parse, or the line count differs from the node count.
    fn read_coordinates(&mut self, reader: &mut dyn BufRead) -> Result<(), WellError>;

    /// Returns the coordinates of node `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the index is out of range or coordinates were
    /// never read.
    fn coordinates(&self, index: usize) -> Result<NodeCoordinates, WellError>;

    /// Returns the solved pressure at node `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the index is out of range or the well has not
    /// been solved.
    fn pressure(&self, index: usize) -> Result<Pressure, WellError>;

    /// Returns the radius, if set.
    fn radius(&self) -> Option<Length>;

    fn number_of_nodes(&self) -> usize;

    fn status(&self) -> WellStatus;

    /// Solves the well for the current flows.
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if inputs are missing or the solve fails.
    fn solve(&mut self) -> Result<(), WellError>;
}
