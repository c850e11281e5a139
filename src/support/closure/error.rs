use thiserror::Error;

use crate::support::constraint::{Constraint, ConstraintError};

/// Errors raised while configuring a closure.
///
/// Invalid parameters are rejected when the closure is constructed so that
/// evaluation never silently produces `inf` or `NaN` from a bad configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// A single parameter violates its numeric constraint.
    #[error("invalid {parameter} = {value}: {source}")]
    Invalid {
        parameter: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// Two parameters that bound a range are not strictly ordered.
    #[error("{lower} = {lower_value} must be less than {upper} = {upper_value}")]
    Ordering {
        lower: &'static str,
        lower_value: f64,
        upper: &'static str,
        upper_value: f64,
    },
}

impl ParameterError {
    /// Checks `value` against constraint `C`, naming the parameter on failure.
    pub(crate) fn check<C: Constraint<f64>>(
        parameter: &'static str,
        value: f64,
    ) -> Result<f64, Self> {
        C::check(&value).map_err(|source| Self::Invalid {
            parameter,
            value,
            source,
        })?;
        Ok(value)
    }

    /// Requires `lower < upper`.
    pub(crate) fn ordered(
        (lower, lower_value): (&'static str, f64),
        (upper, upper_value): (&'static str, f64),
    ) -> Result<(), Self> {
        if lower_value < upper_value {
            Ok(())
        } else {
            Err(Self::Ordering {
                lower,
                lower_value,
                upper,
                upper_value,
            })
        }
    }
}

/// Errors raised when a closure result cannot be used by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluationError {
    /// The closure produced `NaN` or an infinity.
    ///
    /// Evaluation inputs are not range checked, so an out-of-domain pressure or
    /// saturation surfaces here rather than inside the closure.
    #[error("{quantity} is not finite: {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

/// Returns `value` if it is finite.
///
/// # Errors
///
/// Returns [`EvaluationError::NonFinite`] for `NaN` or infinite values.
///
/// # Example
///
/// ```
/// use wellbore_closures::support::closure::ensure_finite;
///
/// assert_eq!(ensure_finite("density", 850.0), Ok(850.0));
/// assert!(ensure_finite("density", f64::NAN).is_err());
/// ```
pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, EvaluationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluationError::NonFinite { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::StrictlyPositive;

    #[test]
    fn check_names_the_parameter() {
        let err = ParameterError::check::<StrictlyPositive>("sound speed", 0.0).unwrap_err();
        assert_eq!(
            err,
            ParameterError::Invalid {
                parameter: "sound speed",
                value: 0.0,
                source: ConstraintError::Zero,
            }
        );
        assert_eq!(err.to_string(), "invalid sound speed = 0: value must not be zero");
    }

    #[test]
    fn equal_bounds_are_not_ordered() {
        assert!(ParameterError::ordered(("B1", 0.2), ("B2", 0.4)).is_ok());
        assert!(matches!(
            ParameterError::ordered(("B1", 0.4), ("B2", 0.4)),
            Err(ParameterError::Ordering { .. })
        ));
        assert!(ParameterError::ordered(("B1", f64::NAN), ("B2", 0.4)).is_err());
    }

    #[test]
    fn infinities_are_not_finite() {
        assert!(ensure_finite("viscosity", f64::INFINITY).is_err());
        assert!(ensure_finite("viscosity", f64::NEG_INFINITY).is_err());
        assert_eq!(ensure_finite("viscosity", -1.0), Ok(-1.0));
    }
}
