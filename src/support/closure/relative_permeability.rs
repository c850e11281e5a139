//! Relative-permeability closures.

use crate::support::constraint::{NonNegative, StrictlyPositive, UnitInterval};

use super::{ParameterError, RelativePermeabilityModel};

/// Power-law (Corey-type) relative permeability.
///
/// ```text
/// S < S_min            → 0
/// S > S_max            → kr_max
/// otherwise            → kr_max · ((S − S_min)/(S_max − S_min))^exponent
/// ```
///
/// For water `S_min` is the irreducible saturation; for oil it is the
/// residual saturation. `kr_max` is the value reached at `S_max`.
///
/// # Example
///
/// ```
/// use wellbore_closures::support::closure::{PowerRelativePermeability, RelativePermeabilityModel};
///
/// let krw = PowerRelativePermeability::new(0.2, 0.8, 0.9, 2.0).unwrap();
/// assert!((krw.relative_permeability(0.5) - 0.225).abs() < 1e-12);
/// assert_eq!(krw.relative_permeability(0.1), 0.0);
/// assert_eq!(krw.relative_permeability(0.95), 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerRelativePermeability {
    minimum_saturation: f64,
    maximum_saturation: f64,
    maximum_relative_permeability: f64,
    exponent: f64,
    /// `1 / (S_max − S_min)`.
    alpha: f64,
}

impl PowerRelativePermeability {
    /// Creates the closure.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if a saturation lies outside `[0, 1]`,
    /// `S_max ≤ S_min`, `kr_max` is negative, or the exponent is not strictly positive.
    pub fn new(
        minimum_saturation: f64,
        maximum_saturation: f64,
        maximum_relative_permeability: f64,
        exponent: f64,
    ) -> Result<Self, ParameterError> {
        let s_min =
            ParameterError::check::<UnitInterval>("minimum saturation", minimum_saturation)?;
        let s_max =
            ParameterError::check::<UnitInterval>("maximum saturation", maximum_saturation)?;
        ParameterError::ordered(("minimum saturation", s_min), ("maximum saturation", s_max))?;
        let kr_max = ParameterError::check::<NonNegative>(
            "maximum relative permeability",
            maximum_relative_permeability,
        )?;
        let exponent = ParameterError::check::<StrictlyPositive>("exponent", exponent)?;

        Ok(Self {
            minimum_saturation: s_min,
            maximum_saturation: s_max,
            maximum_relative_permeability: kr_max,
            exponent,
            alpha: 1.0 / (s_max - s_min),
        })
    }

    /// Creates a linear closure (exponent 1).
    ///
    /// # Errors
    ///
    /// See [`PowerRelativePermeability::new`].
    pub fn with_default_exponent(
        minimum_saturation: f64,
        maximum_saturation: f64,
        maximum_relative_permeability: f64,
    ) -> Result<Self, ParameterError> {
        Self::new(
            minimum_saturation,
            maximum_saturation,
            maximum_relative_permeability,
            1.0,
        )
    }

    #[must_use]
    pub fn minimum_saturation(&self) -> f64 {
        self.minimum_saturation
    }

    #[must_use]
    pub fn maximum_saturation(&self) -> f64 {
        self.maximum_saturation
    }
}

impl RelativePermeabilityModel for PowerRelativePermeability {
    fn relative_permeability(&self, saturation: f64) -> f64 {
        if saturation < self.minimum_saturation {
            return 0.0;
        }
        if saturation > self.maximum_saturation {
            return self.maximum_relative_permeability;
        }

        let t = (saturation - self.minimum_saturation) * self.alpha;
        t.powf(self.exponent) * self.maximum_relative_permeability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::support::closure::ParameterError;

    #[test]
    fn quadratic_midpoint() {
        let kr = PowerRelativePermeability::new(0.2, 0.8, 0.9, 2.0).unwrap();
        assert_relative_eq!(kr.relative_permeability(0.5), 0.9 * 0.25, epsilon = 1e-15);
    }

    #[test]
    fn end_points_are_continuous() {
        let kr = PowerRelativePermeability::new(0.1, 0.7, 0.6, 3.0).unwrap();
        assert_eq!(kr.relative_permeability(0.1), 0.0);
        assert_relative_eq!(kr.relative_permeability(0.7), 0.6);
    }

    #[test]
    fn default_exponent_is_linear() {
        let kr = PowerRelativePermeability::with_default_exponent(0.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(kr.relative_permeability(0.3), 0.3);
    }

    #[test]
    fn empty_saturation_range_is_rejected() {
        assert!(matches!(
            PowerRelativePermeability::new(0.4, 0.4, 1.0, 2.0),
            Err(ParameterError::Ordering { .. })
        ));
        assert!(PowerRelativePermeability::new(0.6, 0.4, 1.0, 2.0).is_err());
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(PowerRelativePermeability::new(-0.1, 0.8, 1.0, 2.0).is_err());
        assert!(PowerRelativePermeability::new(0.1, 1.2, 1.0, 2.0).is_err());
        assert!(PowerRelativePermeability::new(0.1, 0.8, -1.0, 2.0).is_err());
        assert!(PowerRelativePermeability::new(0.1, 0.8, 1.0, 0.0).is_err());
    }

    proptest! {
        #[test]
        fn clamped_above_maximum_saturation(s in 0.8_f64..10.0) {
            let kr = PowerRelativePermeability::new(0.2, 0.8, 0.9, 2.0).unwrap();
            prop_assert!((kr.relative_permeability(s) - 0.9).abs() <= 1e-15);
        }

        #[test]
        fn zero_below_minimum_saturation(s in -10.0_f64..0.2) {
            let kr = PowerRelativePermeability::new(0.2, 0.8, 0.9, 2.0).unwrap();
            prop_assert_eq!(kr.relative_permeability(s), 0.0);
        }

        #[test]
        fn monotone_between_end_points(
            a in 0.2_f64..0.8,
            b in 0.2_f64..0.8,
            exponent in 1.0_f64..4.0,
        ) {
            let kr = PowerRelativePermeability::new(0.2, 0.8, 0.9, exponent).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(kr.relative_permeability(lo) <= kr.relative_permeability(hi));
        }
    }
}
