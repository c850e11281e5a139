use std::cmp::Ordering;

use crate::support::constraint::{Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in the right-open unit interval: `0 ≤ x < 1`.
///
/// The gas–liquid profile-parameter threshold `B` is normalized by `1 − B`,
/// so it must stay strictly below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalUpperOpen;

impl<T: UnitBounds> Constraint<T> for UnitIntervalUpperOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::*;

    #[test]
    fn one_is_excluded() {
        assert!(UnitIntervalUpperOpen::check(&0.0).is_ok());
        assert!(UnitIntervalUpperOpen::check(&0.999).is_ok());
        assert_eq!(
            UnitIntervalUpperOpen::check(&1.0),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitIntervalUpperOpen::check(&-0.1),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalUpperOpen::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
