use std::io::BufRead;

use uom::si::{
    f64::{Length, Pressure},
    length::meter,
};

use super::{FlowVectors, NodeCoordinates, WellError, WellStatus, parse_coordinates};

/// Per-node storage and lifecycle checks shared by well implementations.
///
/// A concrete well owns a `WellNodes`, forwards the contract's bookkeeping
/// operations to it, and calls [`WellNodes::begin_solve`] and
/// [`WellNodes::finish_solve`] around its own computation.
#[derive(Debug, Clone, Default)]
pub struct WellNodes {
    status: WellStatus,
    len: usize,
    radius: Option<Length>,
    flows: Option<FlowVectors>,
    coordinates: Vec<NodeCoordinates>,
    pressures: Vec<Pressure>,
}

/// Inputs available to a solve, borrowed from [`WellNodes`].
#[derive(Debug, Clone, Copy)]
pub struct SolveInputs<'a> {
    pub flows: &'a FlowVectors,
    pub radius: Length,
    pub coordinates: &'a [NodeCoordinates],
}

impl WellNodes {
    /// Smallest node count accepted by [`WellNodes::set_size`].
    pub const MIN_NODES: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> WellStatus {
        self.status
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn radius(&self) -> Option<Length> {
        self.radius
    }

    /// See [`Well::set_size`](super::Well::set_size).
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the well is already sized or `len` is too small.
    pub fn set_size(&mut self, len: usize) -> Result<(), WellError> {
        self.require("set the size", |status| status == WellStatus::Unsized)?;
        if len < Self::MIN_NODES {
            return Err(WellError::InvalidSize {
                requested: len,
                minimum: Self::MIN_NODES,
            });
        }

        self.len = len;
        self.status = WellStatus::Sized;
        Ok(())
    }

    /// See [`Well::initialize_flow`](super::Well::initialize_flow).
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the well is unsized or a vector has the wrong length.
    pub fn initialize_flow(&mut self, flows: FlowVectors) -> Result<(), WellError> {
        self.require("initialize flow", |status| status != WellStatus::Unsized)?;
        flows.check_len(self.len)?;

        self.flows = Some(flows);
        self.pressures.clear();
        self.status = WellStatus::FlowInitialized;
        Ok(())
    }

    /// See [`Well::set_radius`](super::Well::set_radius).
    ///
    /// # Errors
    ///
    /// Returns [`WellError::Radius`] unless the radius is strictly positive.
    pub fn set_radius(&mut self, radius: Length) -> Result<(), WellError> {
        let meters = radius.get::<meter>();
        if !(meters > 0.0 && meters.is_finite()) {
            return Err(WellError::Radius(meters));
        }
        self.radius = Some(radius);
        self.discard_solution();
        Ok(())
    }

    /// See [`Well::read_coordinates`](super::Well::read_coordinates).
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the well is unsized or parsing fails. Existing
    /// coordinates and any solution are kept on failure.
    pub fn read_coordinates(&mut self, reader: &mut dyn BufRead) -> Result<(), WellError> {
        self.require("read coordinates", |status| status != WellStatus::Unsized)?;
        self.coordinates = parse_coordinates(reader, self.len)?;
        self.discard_solution();
        Ok(())
    }

    /// See [`Well::coordinates`](super::Well::coordinates).
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the index is out of range or no coordinates were read.
    pub fn coordinates(&self, index: usize) -> Result<NodeCoordinates, WellError> {
        self.check_index(index)?;
        self.coordinates
            .get(index)
            .copied()
            .ok_or(WellError::InvalidState {
                operation: "read node coordinates before reading a coordinate stream",
                status: self.status,
            })
    }

    /// See [`Well::pressure`](super::Well::pressure).
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the index is out of range or the well is not solved.
    pub fn pressure(&self, index: usize) -> Result<Pressure, WellError> {
        self.check_index(index)?;
        self.require("read node pressure", |status| status == WellStatus::Solved)?;
        self.pressures
            .get(index)
            .copied()
            .ok_or(WellError::IndexOutOfRange {
                index,
                len: self.pressures.len(),
            })
    }

    /// Returns everything a solve needs.
    ///
    /// # Errors
    ///
    /// Returns [`WellError::InvalidState`] if flows, radius or coordinates are
    /// missing.
    pub fn begin_solve(&self) -> Result<SolveInputs<'_>, WellError> {
        let missing = |operation| WellError::InvalidState {
            operation,
            status: self.status,
        };

        let flows = self
            .flows
            .as_ref()
            .ok_or_else(|| missing("solve before initializing flow"))?;
        let radius = self
            .radius
            .ok_or_else(|| missing("solve before setting the radius"))?;
        if self.coordinates.len() != self.len {
            return Err(missing("solve before reading coordinates"));
        }

        Ok(SolveInputs {
            flows,
            radius,
            coordinates: &self.coordinates,
        })
    }

    /// Stores solved pressures and marks the well as solved.
    ///
    /// # Errors
    ///
    /// Returns [`WellError::IndexOutOfRange`] if `pressures` does not have one
    /// entry per node.
    pub fn finish_solve(&mut self, pressures: Vec<Pressure>) -> Result<(), WellError> {
        if pressures.len() != self.len {
            return Err(WellError::IndexOutOfRange {
                index: pressures.len(),
                len: self.len,
            });
        }
        self.pressures = pressures;
        self.status = WellStatus::Solved;
        Ok(())
    }

    /// Drops solved pressures after the geometry changes.
    fn discard_solution(&mut self) {
        if self.status == WellStatus::Solved {
            self.pressures.clear();
            self.status = WellStatus::FlowInitialized;
        }
    }

    fn check_index(&self, index: usize) -> Result<(), WellError> {
        self.require("index a node", |status| status != WellStatus::Unsized)?;
        if index >= self.len {
            return Err(WellError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn require(
        &self,
        operation: &'static str,
        allowed: impl Fn(WellStatus) -> bool,
    ) -> Result<(), WellError> {
        if allowed(self.status) {
            Ok(())
        } else {
            Err(WellError::InvalidState {
                operation,
                status: self.status,
            })
        }
    }
}
