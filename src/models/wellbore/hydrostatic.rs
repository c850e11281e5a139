use std::io::BufRead;

use tracing::debug;
use uom::si::{
    f64::{Length, Pressure},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
};

use crate::support::{
    closure::ParameterError,
    constraint::{NonNegative, StrictlyPositive, UnitInterval},
    well::{FlowVectors, NodeCoordinates, Well, WellError, WellNodes, WellStatus},
};

use super::{
    ClosureSet, HydrostaticConfig, NodeProperties, SolveError,
    properties::flow_area,
    segment::{segment_flows, solve_segment},
};

/// A well whose node pressures follow the hydrostatic head of the local
/// multiphase mixture.
///
/// Node 0 is held at [`HydrostaticConfig::reference_pressure`]. Each later
/// node is solved from its upstream neighbour so that
///
/// ```text
/// P_i − P_{i−1} = ρ_m(P̄)·g·(z_{i−1} − z_i)
/// ```
///
/// where `ρ_m` is the drift-flux mixture density at the segment-average
/// pressure `P̄` and segment-average rates. Friction and acceleration are
/// neglected.
#[derive(Debug, Clone)]
pub struct HydrostaticWell {
    closures: ClosureSet,
    config: HydrostaticConfig,
    nodes: WellNodes,
    properties: Vec<NodeProperties>,
}

impl HydrostaticWell {
    /// Creates an unsized well.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Config`] if a tolerance, bound or the Ku critical
    /// constant is out of range.
    pub fn new(closures: ClosureSet, config: HydrostaticConfig) -> Result<Self, SolveError> {
        ParameterError::check::<StrictlyPositive>(
            "reference pressure",
            config.reference_pressure.get::<pascal>(),
        )?;
        ParameterError::check::<StrictlyPositive>(
            "pressure tolerance",
            config.pressure_tol.get::<pascal>(),
        )?;
        ParameterError::check::<StrictlyPositive>(
            "maximum mixture density",
            config.max_mixture_density.get::<kilogram_per_cubic_meter>(),
        )?;
        ParameterError::check::<NonNegative>(
            "minimum pressure",
            config.min_pressure.get::<pascal>(),
        )?;
        ParameterError::check::<StrictlyPositive>("holdup tolerance", config.holdup_tol)?;
        ParameterError::check::<StrictlyPositive>("holdup relaxation", config.holdup_relaxation)?;
        ParameterError::check::<UnitInterval>("holdup relaxation", config.holdup_relaxation)?;
        ParameterError::check::<NonNegative>("Ku critical", config.ku_critical)?;

        Ok(Self {
            closures,
            config,
            nodes: WellNodes::new(),
            properties: Vec::new(),
        })
    }

    /// Creates an unsized well with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`HydrostaticWell::new`].
    pub fn with_closures(closures: ClosureSet) -> Result<Self, SolveError> {
        Self::new(closures, HydrostaticConfig::default())
    }

    #[must_use]
    pub fn closures(&self) -> &ClosureSet {
        &self.closures
    }

    #[must_use]
    pub fn config(&self) -> &HydrostaticConfig {
        &self.config
    }

    /// Returns the closure values at node `index` from the last solve.
    ///
    /// # Errors
    ///
    /// Returns [`WellError`] if the index is out of range or the well has not
    /// been solved.
    pub fn node_properties(&self, index: usize) -> Result<&NodeProperties, WellError> {
        self.nodes.pressure(index)?;
        self.properties.get(index).ok_or(WellError::IndexOutOfRange {
            index,
            len: self.properties.len(),
        })
    }

    fn solve_nodes(&self) -> Result<(Vec<Pressure>, Vec<NodeProperties>), WellError> {
        let inputs = self.nodes.begin_solve()?;
        let area = flow_area(inputs.radius);
        let config = &self.config;

        let mut upstream_flows = inputs.flows.at(0)?;
        let mut upstream_pressure = config.reference_pressure;
        let mut upstream_z = inputs.coordinates[0].z;

        let head = self
            .closures
            .node_properties(upstream_pressure, &upstream_flows, area, config)
            .map_err(|err| WellError::solve_failed("reference node 0", err))?;

        let mut pressures = vec![upstream_pressure];
        let mut properties = vec![head];

        for (index, coordinates) in inputs.coordinates.iter().enumerate().skip(1) {
            let flows = inputs.flows.at(index)?;
            let drop = upstream_z - coordinates.z;

            let segment = solve_segment(
                &self.closures,
                config,
                upstream_pressure,
                drop,
                segment_flows(&upstream_flows, &flows),
                area,
            )
            .map_err(|err| {
                WellError::solve_failed(format!("segment {} to {index}", index - 1), err)
            })?;

            let node = self
                .closures
                .node_properties(segment.pressure, &flows, area, config)
                .map_err(|err| WellError::solve_failed(format!("node {index}"), err))?;

            debug!(
                node = index,
                pressure_pa = segment.pressure.get::<pascal>(),
                mixture_density = segment.average.mixture_density.get::<kilogram_per_cubic_meter>(),
                gas_fraction = node.gas_fraction,
                "solved well node"
            );

            pressures.push(segment.pressure);
            properties.push(node);

            upstream_pressure = segment.pressure;
            upstream_flows = flows;
            upstream_z = coordinates.z;
        }

        Ok((pressures, properties))
    }
}

impl Well for HydrostaticWell {
    fn set_size(&mut self, number_of_nodes: usize) -> Result<(), WellError> {
        self.nodes.set_size(number_of_nodes)
    }

    fn initialize_flow(&mut self, flows: FlowVectors) -> Result<(), WellError> {
        self.nodes.initialize_flow(flows)?;
        self.properties.clear();
        Ok(())
    }

    fn set_radius(&mut self, radius: Length) -> Result<(), WellError> {
        self.nodes.set_radius(radius)?;
        self.properties.clear();
        Ok(())
    }

    fn read_coordinates(&mut self, reader: &mut dyn BufRead) -> Result<(), WellError> {
        self.nodes.read_coordinates(reader)?;
        self.properties.clear();
        Ok(())
    }

    fn coordinates(&self, index: usize) -> Result<NodeCoordinates, WellError> {
        self.nodes.coordinates(index)
    }

    fn pressure(&self, index: usize) -> Result<Pressure, WellError> {
        self.nodes.pressure(index)
    }

    fn radius(&self) -> Option<Length> {
        self.nodes.radius()
    }

    fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn status(&self) -> WellStatus {
        self.nodes.status()
    }

    fn solve(&mut self) -> Result<(), WellError> {
        let (pressures, properties) = self.solve_nodes()?;
        self.nodes.finish_solve(pressures)?;
        self.properties = properties;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{acceleration::meter_per_second_squared, length::meter};

    use crate::models::wellbore::test_support::{closures, water_closures};

    const COLUMN: &str = "# vertical well, wellhead first\n0 0 0\n0 0 -100\n0 0 -250\n";

    fn ready(closures: ClosureSet, flows: FlowVectors) -> HydrostaticWell {
        let mut well = HydrostaticWell::with_closures(closures).unwrap();
        well.set_size(3).unwrap();
        well.initialize_flow(flows).unwrap();
        well.set_radius(Length::new::<meter>(0.1)).unwrap();
        well.read_coordinates(&mut COLUMN.as_bytes()).unwrap();
        well
    }

    #[test]
    fn water_column_follows_rho_g_h() {
        let flows = FlowVectors::new(vec![0.0; 3], vec![0.002; 3], vec![0.0; 3]);
        let mut well = ready(water_closures(), flows);
        well.solve().unwrap();

        let g = well.config().gravity.get::<meter_per_second_squared>();
        let p0 = well.config().reference_pressure.get::<pascal>();

        assert_eq!(well.status(), WellStatus::Solved);
        assert_eq!(well.pressure(0).unwrap().get::<pascal>(), p0);
        assert_relative_eq!(
            well.pressure(1).unwrap().get::<pascal>(),
            p0 + 1000.0 * g * 100.0,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            well.pressure(2).unwrap().get::<pascal>(),
            p0 + 1000.0 * g * 250.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn gas_reduces_the_pressure_gradient() {
        let water_only = FlowVectors::new(vec![0.0; 3], vec![0.01; 3], vec![0.0; 3]);
        let gassy = FlowVectors::new(vec![0.0; 3], vec![0.01; 3], vec![0.005; 3]);

        let mut reference = ready(closures(), water_only);
        reference.solve().unwrap();
        let mut well = ready(closures(), gassy);
        well.solve().unwrap();

        let bottom = well.pressure(2).unwrap();
        assert!(bottom < reference.pressure(2).unwrap());
        assert!(bottom > well.pressure(1).unwrap());

        let props = well.node_properties(2).unwrap();
        assert!(props.gas_fraction > 0.0);
        assert_eq!(props.pressure, bottom);
    }

    #[test]
    fn segment_balance_holds_for_live_oil() {
        let flows = FlowVectors::new(vec![0.004; 3], vec![0.002; 3], vec![0.001; 3]);
        let mut well = ready(closures(), flows);
        well.solve().unwrap();

        for index in 1..well.number_of_nodes() {
            let upper = well.pressure(index - 1).unwrap();
            let lower = well.pressure(index).unwrap();
            assert!(lower > upper);
            assert!(well.node_properties(index).unwrap().solubility > 0.0);
        }
    }

    #[test]
    fn resolves_after_flow_update() {
        let flows = FlowVectors::new(vec![0.0; 3], vec![0.002; 3], vec![0.0; 3]);
        let gas = std::sync::Arc::clone(&flows.gas);
        let mut well = ready(closures(), flows.clone());
        well.solve().unwrap();
        let before = well.pressure(2).unwrap();

        gas.write().unwrap().iter_mut().for_each(|q| *q = 0.004);
        well.initialize_flow(flows).unwrap();
        assert!(matches!(
            well.pressure(2),
            Err(WellError::InvalidState { .. })
        ));

        well.solve().unwrap();
        assert!(well.pressure(2).unwrap() < before);
    }

    #[test]
    fn new_geometry_requires_a_new_solve() {
        let flows = FlowVectors::new(vec![0.0; 3], vec![0.002; 3], vec![0.0; 3]);
        let mut well = ready(water_closures(), flows);
        well.solve().unwrap();
        let shallow = well.pressure(2).unwrap();

        well.read_coordinates(&mut "0 0 0\n0 0 -1000\n0 0 -2500\n".as_bytes())
            .unwrap();
        assert_eq!(well.status(), WellStatus::FlowInitialized);
        assert!(matches!(
            well.pressure(2),
            Err(WellError::InvalidState { .. })
        ));
        assert!(well.node_properties(2).is_err());

        well.solve().unwrap();
        let deep = well.pressure(2).unwrap();
        assert!(deep > shallow);

        well.set_radius(Length::new::<meter>(0.2)).unwrap();
        assert_eq!(well.status(), WellStatus::FlowInitialized);
        assert!(well.node_properties(0).is_err());

        well.solve().unwrap();
        assert_relative_eq!(
            well.pressure(2).unwrap().get::<pascal>(),
            deep.get::<pascal>(),
            epsilon = 1e-3
        );
    }

    #[test]
    fn lifecycle_errors() {
        let mut well = HydrostaticWell::with_closures(water_closures()).unwrap();
        assert!(matches!(well.solve(), Err(WellError::InvalidState { .. })));

        well.set_size(3).unwrap();
        assert!(matches!(well.solve(), Err(WellError::InvalidState { .. })));
        assert!(matches!(
            well.pressure(3),
            Err(WellError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            well.node_properties(0),
            Err(WellError::InvalidState { .. })
        ));
        assert_eq!(well.radius(), None);
    }

    #[test]
    fn usable_as_trait_object() {
        let flows = FlowVectors::new(vec![0.0; 3], vec![0.002; 3], vec![0.0; 3]);
        let mut wells: Vec<Box<dyn Well>> = vec![Box::new(ready(water_closures(), flows))];

        for well in &mut wells {
            well.solve().unwrap();
            let radius = well.radius().unwrap();
            assert_eq!(radius.get::<meter>(), 0.1);
            for index in 0..well.number_of_nodes() {
                let node = well.coordinates(index).unwrap();
                let pressure = well.pressure(index).unwrap();
                assert!(pressure.get::<pascal>() > 0.0);
                assert!(node.z.get::<meter>() <= 0.0);
            }
        }
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let config = HydrostaticConfig {
            holdup_relaxation: 1.5,
            ..HydrostaticConfig::default()
        };
        assert!(matches!(
            HydrostaticWell::new(water_closures(), config),
            Err(SolveError::Config(_))
        ));

        let config = HydrostaticConfig {
            ku_critical: -1.0,
            ..HydrostaticConfig::default()
        };
        assert!(HydrostaticWell::new(water_closures(), config).is_err());
    }
}
