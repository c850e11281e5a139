use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Used for parameters where zero is physically meaningful, such as a
/// maximum relative permeability of a phase that never flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Velocity, velocity::meter_per_second};

    #[test]
    fn floats() {
        assert_eq!(NonNegative::check(&2.0), Ok(()));
        assert_eq!(NonNegative::check(&0.0), Ok(()));
        assert_eq!(NonNegative::check(&-2.0), Err(ConstraintError::Negative));
        assert_eq!(
            NonNegative::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn velocities() {
        assert!(NonNegative::check(&Velocity::new::<meter_per_second>(0.0)).is_ok());
        assert!(NonNegative::check(&Velocity::new::<meter_per_second>(-0.5)).is_err());
    }
}
