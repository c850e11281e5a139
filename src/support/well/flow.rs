use std::sync::{Arc, PoisonError, RwLock};

use uom::si::{f64::VolumeRate, volume_rate::cubic_meter_per_second};

use super::WellError;

/// A per-node flow vector shared between a well and the coupling loop.
pub type SharedFlow = Arc<RwLock<Vec<f64>>>;

/// Oil, water and gas flow vectors, one entry per node.
///
/// Entries are in-situ volumetric rates in m³/s, positive upward. The
/// vectors are shared, so the coupling loop can update rates in place
/// between solves without rebinding them.
#[derive(Debug, Clone, Default)]
pub struct FlowVectors {
    pub oil: SharedFlow,
    pub water: SharedFlow,
    pub gas: SharedFlow,
}

/// Volumetric rates of each phase at one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseFlows {
    pub oil: VolumeRate,
    pub water: VolumeRate,
    pub gas: VolumeRate,
}

impl PhaseFlows {
    /// Returns the summed volumetric rate.
    #[must_use]
    pub fn total(&self) -> VolumeRate {
        self.oil + self.water + self.gas
    }
}

impl FlowVectors {
    /// Wraps owned vectors for sharing.
    #[must_use]
    pub fn new(oil: Vec<f64>, water: Vec<f64>, gas: Vec<f64>) -> Self {
        Self {
            oil: Arc::new(RwLock::new(oil)),
            water: Arc::new(RwLock::new(water)),
            gas: Arc::new(RwLock::new(gas)),
        }
    }

    /// Checks that every vector has `expected` entries.
    ///
    /// # Errors
    ///
    /// Returns [`WellError::FlowLength`] naming the first mismatched phase.
    pub fn check_len(&self, expected: usize) -> Result<(), WellError> {
        for (phase, flow) in self.phases() {
            let actual = read(flow).len();
            if actual != expected {
                return Err(WellError::FlowLength {
                    phase,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Returns the rates at node `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WellError::IndexOutOfRange`] if a vector is shorter than
    /// `index + 1`, which happens only if the loop resized it after binding.
    pub fn at(&self, index: usize) -> Result<PhaseFlows, WellError> {
        let rate = |flow: &SharedFlow| {
            let values = read(flow);
            values
                .get(index)
                .map(|&q| VolumeRate::new::<cubic_meter_per_second>(q))
                .ok_or(WellError::IndexOutOfRange {
                    index,
                    len: values.len(),
                })
        };

        Ok(PhaseFlows {
            oil: rate(&self.oil)?,
            water: rate(&self.water)?,
            gas: rate(&self.gas)?,
        })
    }

    fn phases(&self) -> [(&'static str, &SharedFlow); 3] {
        [("oil", &self.oil), ("water", &self.water), ("gas", &self.gas)]
    }
}

/// Reads a flow vector, recovering the data if a writer panicked.
fn read(flow: &SharedFlow) -> std::sync::RwLockReadGuard<'_, Vec<f64>> {
    flow.read().unwrap_or_else(PoisonError::into_inner)
}
