//! Power-law building block shared by several closures.
//!
//! [`PowerLaw`] evaluates `α · x^power`. It also carries a reference value and
//! the cached result at that reference, recomputed eagerly whenever any of the
//! three fields changes. Every `with_*` method returns a new snapshot, so the
//! cached value is always consistent with the fields it was built from.

/// An `α · x^power` law with an eagerly cached value at a reference point.
///
/// # Example
///
/// ```
/// use wellbore_closures::support::closure::PowerLaw;
///
/// let law = PowerLaw::new(2.0, 3.0).with_reference(0.5);
/// assert_eq!(law.value(), 0.25);
///
/// let law = law.with_alpha(4.0);
/// assert_eq!(law.value(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    alpha: f64,
    power: f64,
    reference: f64,
    value: f64,
}

impl PowerLaw {
    /// Creates a law with a zero reference value.
    #[must_use]
    pub fn new(alpha: f64, power: f64) -> Self {
        Self::snapshot(alpha, power, 0.0)
    }

    /// Returns a copy with a new scale `α`.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::snapshot(alpha, self.power, self.reference)
    }

    /// Returns a copy with a new exponent.
    #[must_use]
    pub fn with_power(self, power: f64) -> Self {
        Self::snapshot(self.alpha, power, self.reference)
    }

    /// Returns a copy evaluated at a new reference value.
    #[must_use]
    pub fn with_reference(self, reference: f64) -> Self {
        Self::snapshot(self.alpha, self.power, reference)
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn power(&self) -> f64 {
        self.power
    }

    #[must_use]
    pub fn reference(&self) -> f64 {
        self.reference
    }

    /// Returns `α · reference^power`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Evaluates the law at `x` without changing the cached reference.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.alpha * x.powf(self.power)
    }

    fn snapshot(alpha: f64, power: f64, reference: f64) -> Self {
        Self {
            alpha,
            power,
            reference,
            value: alpha * reference.powf(power),
        }
    }
}
