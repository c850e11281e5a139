//! Numeric constraints checked once, at construction time.
//!
//! Closure parameters such as reference densities, saturation end points and
//! drift-flux thresholds carry physical invariants. Each invariant is a
//! zero-sized marker implementing [`Constraint<T>`], checked when a closure is
//! configured so the per-node evaluation path stays free of validation.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//! - [`UnitIntervalUpperOpen`]: Upper-open unit interval `0 ≤ x < 1`
//!
//! # Example
//!
//! ```
//! use wellbore_closures::support::constraint::{Constraint, ConstraintError, StrictlyPositive};
//!
//! assert_eq!(StrictlyPositive::check(&1480.0), Ok(()));
//! assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
//! ```
//!
//! # Extending
//!
//! Custom invariants implement [`Constraint<T>`] for a zero-sized marker type.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval, UnitIntervalUpperOpen};

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}
