//! Supporting code for wellbore models.
//!
//! - [`closure`]: The closure library, one capability trait per quantity.
//! - [`well`]: The contract a well exposes to the reservoir coupling loop.
//! - [`constraint`]: Numeric invariants checked at construction time.
//! - [`units`]: Extensions to [`uom`].

pub mod closure;
pub mod constraint;
pub mod units;
pub mod well;
