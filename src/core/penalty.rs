//! Penalty functions combining objectives and constraints into one fitness.

use getset::CopyGetters;
use nalgebra::DVector;

use super::base::Error;

/// Coefficient of the default penalty. Any nonzero violation dominates the
/// objective term.
pub const DEFAULT_PENALTY_COEFFICIENT: f64 = 1e5;

/// Combinator turning objective and constraint values into a single scalar
/// fitness to be minimized.
///
/// The constraint values follow the convention of
/// [`aggregate_constraints`](super::aggregate_constraints): a value `> 0`
/// means violation. Any closure with the right signature is a penalty:
///
/// ```rust
/// use enopt::nalgebra::{dvector, DVector};
/// use enopt::Penalty;
///
/// let death = |objs: &DVector<f64>, cons: &DVector<f64>| {
///     if cons.iter().all(|&g| g <= 0.0) {
///         objs.sum()
///     } else {
///         f64::MAX
///     }
/// };
///
/// assert_eq!(death.combine(&dvector![1.0], &dvector![-1.0]), 1.0);
/// assert_eq!(death.combine(&dvector![1.0], &dvector![0.5]), f64::MAX);
/// ```
pub trait Penalty {
    /// Combines objective values and constraint values into the fitness.
    fn combine(&self, objs: &DVector<f64>, cons: &DVector<f64>) -> f64;
}

impl<F> Penalty for F
where
    F: Fn(&DVector<f64>, &DVector<f64>) -> f64,
{
    fn combine(&self, objs: &DVector<f64>, cons: &DVector<f64>) -> f64 {
        self(objs, cons)
    }
}

/// Static quadratic penalty.
///
/// Negative constraint values are clipped to zero so that only violations
/// count, and the fitness is `sum(objs) + coefficient * sum(violation^2)`.
#[derive(Debug, Clone, Copy, CopyGetters)]
pub struct QuadraticPenalty {
    /// Weight of the squared violations. Default: `1e5`.
    #[getset(get_copy = "pub")]
    coefficient: f64,
}

impl QuadraticPenalty {
    /// Creates the penalty with given coefficient, which must be positive and
    /// finite.
    pub fn new(coefficient: f64) -> Result<Self, Error> {
        if coefficient.is_finite() && coefficient > 0.0 {
            Ok(Self { coefficient })
        } else {
            Err(Error::Configuration(format!(
                "penalty coefficient must be positive and finite, got {}",
                coefficient
            )))
        }
    }
}

impl Default for QuadraticPenalty {
    fn default() -> Self {
        Self {
            coefficient: DEFAULT_PENALTY_COEFFICIENT,
        }
    }
}

impl Penalty for QuadraticPenalty {
    fn combine(&self, objs: &DVector<f64>, cons: &DVector<f64>) -> f64 {
        // NaN is not clipped and propagates into the fitness.
        let violation: f64 = cons
            .iter()
            .map(|&g| if g < 0.0 { 0.0 } else { g * g })
            .sum();

        objs.sum() + self.coefficient * violation
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use nalgebra::dvector;

    use super::*;

    #[test]
    fn default_penalty() {
        let penalty = QuadraticPenalty::default();

        assert_eq!(penalty.coefficient(), 1e5);
        assert_eq!(
            penalty.combine(&dvector![10.0], &dvector![-1.0, 2.0]),
            400010.0
        );
    }

    #[test]
    fn no_violation_no_penalty() {
        let penalty = QuadraticPenalty::default();

        assert_eq!(penalty.combine(&dvector![3.0], &dvector![-1.0, 0.0]), 3.0);
        assert_eq!(penalty.combine(&dvector![3.0], &DVector::zeros(0)), 3.0);
    }

    #[test]
    fn sums_objectives() {
        let penalty = QuadraticPenalty::default();
        assert_eq!(penalty.combine(&dvector![1.0, 2.0], &dvector![-5.0]), 3.0);
    }

    #[test]
    fn nan_propagates() {
        let penalty = QuadraticPenalty::default();
        assert!(penalty
            .combine(&dvector![1.0], &dvector![f64::NAN])
            .is_nan());
    }

    #[test]
    fn custom_coefficient() {
        let penalty = QuadraticPenalty::new(10.0).unwrap();
        assert_eq!(penalty.combine(&dvector![1.0], &dvector![3.0]), 91.0);
    }

    #[test]
    fn invalid_coefficient() {
        assert!(matches!(
            QuadraticPenalty::new(0.0),
            Err(Error::Configuration(_))
        ));
        assert!(QuadraticPenalty::new(-1.0).is_err());
        assert!(QuadraticPenalty::new(f64::NAN).is_err());
        assert!(QuadraticPenalty::new(f64::INFINITY).is_err());
    }

    #[test]
    fn closure_penalty() {
        let linear = |objs: &DVector<f64>, cons: &DVector<f64>| {
            objs.sum() + cons.iter().map(|g| g.max(0.0)).sum::<f64>()
        };

        assert_eq!(linear.combine(&dvector![10.0], &dvector![-1.0, 2.0]), 12.0);
    }
}
