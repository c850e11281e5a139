use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// This trait provides a [`minus`](Self::minus) method that subtracts two
/// [`ThermodynamicTemperature`] values (absolute temperatures) and returns a
/// [`TemperatureInterval`] (temperature difference).
///
/// The tension correlations interpolate between two fixed temperatures, so they
/// need `T - T_low` as an interval that can be read back in °F.
/// Subtracting two [`ThermodynamicTemperature`] values directly is not
/// supported by [`uom`]; see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature,
        temperature_interval::{degree_fahrenheit as delta_fahrenheit, kelvin as delta_kelvin},
        thermodynamic_temperature::{degree_fahrenheit, kelvin as abs_kelvin},
    };

    #[test]
    fn subtract_temperatures() {
        let t1 = ThermodynamicTemperature::new::<abs_kelvin>(300.0);
        let t2 = ThermodynamicTemperature::new::<abs_kelvin>(310.0);

        assert_relative_eq!(t2.minus(t1).get::<delta_kelvin>(), 10.0);
        assert_relative_eq!(t1.minus(t2).get::<delta_kelvin>(), -10.0);
    }

    #[test]
    fn correlation_span_in_fahrenheit() {
        // The gas-oil tension correlation interpolates across 68 °F to 100 °F.
        let low = ThermodynamicTemperature::new::<degree_fahrenheit>(68.0);
        let high = ThermodynamicTemperature::new::<degree_fahrenheit>(100.0);

        assert_relative_eq!(
            high.minus(low).get::<delta_fahrenheit>(),
            32.0,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            high.minus(low).get::<delta_kelvin>(),
            32.0 * 5.0 / 9.0,
            epsilon = 1e-10
        );
    }
}
