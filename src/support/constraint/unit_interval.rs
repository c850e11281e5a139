mod closed;
mod upper_open;

pub use closed::UnitInterval;
pub use upper_open::UnitIntervalUpperOpen;

/// Supplies 0 and 1 for types used with the unit-interval constraints.
///
/// Saturations, volume fractions and drift-flux thresholds are all plain
/// `f64` fractions in this crate.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}
