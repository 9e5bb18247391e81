use std::fmt;

use nalgebra::DVector;
use thiserror::Error;

use super::{
    domain::Domain,
    paras::{Param, Paras},
};

/// Default tolerance used to relax equality constraints into the inequality
/// form `|h(x)| - epsilon <= 0`.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Kind of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Equality constraint `h(x) = 0`.
    Equality,
    /// Inequality constraint `g(x) <= 0`.
    Inequality,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintKind::Equality => f.write_str("equality"),
            ConstraintKind::Inequality => f.write_str("inequality"),
        }
    }
}

/// Error encountered while configuring or evaluating a problem.
#[derive(Debug, Error)]
pub enum Error {
    /// The number of variables does not match the dimensionality
    /// ([`ProblemExt::n_dims`]) of the problem.
    #[error("invalid dimensionality: expected {expected} variables, got {actual}")]
    DimensionMismatch {
        /// Dimensionality of the problem.
        expected: usize,
        /// Length of the decision vector.
        actual: usize,
    },
    /// A variable lies outside of its bounds. Only reported when strict bound
    /// checking is enabled.
    #[error("variable {index} = {value} is outside of bounds [{lower}, {upper}]")]
    OutOfBounds {
        /// Index of the variable.
        index: usize,
        /// Value of the variable.
        value: f64,
        /// Lower bound of the variable.
        lower: f64,
        /// Upper bound of the variable.
        upper: f64,
    },
    /// Invalid configuration of a problem, domain or penalty function.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A constraint getter returned a different number of values than the
    /// problem declares.
    #[error("{kind} constraints returned {actual} values, but {expected} are declared")]
    ConstraintCount {
        /// Kind of the offending constraints.
        kind: ConstraintKind,
        /// Declared number of constraints.
        expected: usize,
        /// Number of returned values.
        actual: usize,
    },
    /// The objectives getter returned a different number of values than the
    /// problem declares.
    #[error("objectives returned {actual} values, but {expected} are declared")]
    ObjectiveCount {
        /// Declared number of objectives.
        expected: usize,
        /// Number of returned values.
        actual: usize,
    },
    /// An invalid value (NaN, positive or negative infinity) of an objective
    /// or a constraint occurred.
    #[error("invalid value encountered")]
    InvalidValue,
    /// No problem with given name exists in the catalog.
    #[error("unknown problem `{0}`")]
    UnknownProblem(String),
}

/// Definition of a constrained optimization problem.
///
/// The trait describes the immutable part of a problem: its domain, its
/// objectives and which kinds of constraints it has. The constraints are
/// optional capabilities; a problem exposes them by returning itself from
/// [`equality`](Problem::equality) or [`inequality`](Problem::inequality).
///
/// ```rust
/// use enopt::nalgebra::{dvector, DVector};
/// use enopt::{Domain, EqualityConstraints, Problem, ProblemExt};
///
/// struct Circle {
///     domain: Domain,
/// }
///
/// impl Problem for Circle {
///     fn name(&self) -> &'static str {
///         "Circle"
///     }
///
///     fn domain(&self) -> &Domain {
///         &self.domain
///     }
///
///     fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
///         dvector![x[0] - x[1]]
///     }
///
///     fn equality(&self) -> Option<&dyn EqualityConstraints> {
///         Some(self)
///     }
/// }
///
/// impl EqualityConstraints for Circle {
///     fn n_equalities(&self) -> usize {
///         1
///     }
///
///     fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
///         dvector![x[0].powi(2) + x[1].powi(2) - 1.0]
///     }
/// }
///
/// let circle = Circle {
///     domain: [(-1.0, 1.0), (-1.0, 1.0)].into_iter().collect(),
/// };
///
/// assert_eq!(circle.n_dims(), 2);
/// assert_eq!(circle.n_cons(), 1);
/// ```
pub trait Problem {
    /// Human-readable name of the problem.
    fn name(&self) -> &'static str;

    /// Bound constraints of the decision variables.
    fn domain(&self) -> &Domain;

    /// Number of objectives.
    fn n_objs(&self) -> usize {
        1
    }

    /// Tolerance used to relax the equality constraints.
    fn epsilon(&self) -> f64 {
        DEFAULT_EPSILON
    }

    /// Calculates the objective values in given point.
    ///
    /// The point is passed as supplied, after amendment if the problem has
    /// integer dimensions. No bound clamping takes place.
    fn objectives(&self, x: &DVector<f64>) -> DVector<f64>;

    /// Equality constraints of the problem, if any.
    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        None
    }

    /// Inequality constraints of the problem, if any.
    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        None
    }

    /// Indices of the variables that encode integer or categorical choices.
    /// Their values are truncated toward zero before evaluation.
    fn integer_dims(&self) -> &[usize] {
        &[]
    }

    /// Problem-specific named constants, for diagnostic display.
    fn paras(&self) -> Paras {
        Paras::new()
    }
}

/// Equality constraints `h(x) = 0` of a problem.
pub trait EqualityConstraints {
    /// Number of equality constraints.
    fn n_equalities(&self) -> usize;

    /// Calculates the raw signed residuals `h(x)`, zero at exact feasibility.
    fn equalities(&self, x: &DVector<f64>) -> DVector<f64>;
}

/// Inequality constraints `g(x) <= 0` of a problem.
pub trait InequalityConstraints {
    /// Number of inequality constraints.
    fn n_inequalities(&self) -> usize;

    /// Calculates the raw signed residuals `g(x)`, positive when violated.
    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64>;
}

/// Extension methods derived from the [`Problem`] definition.
pub trait ProblemExt: Problem {
    /// Number of decision variables.
    fn n_dims(&self) -> usize {
        self.domain().dim()
    }

    /// Number of equality constraints.
    fn n_eq_cons(&self) -> usize {
        self.equality().map_or(0, |eq| eq.n_equalities())
    }

    /// Number of inequality constraints.
    fn n_ineq_cons(&self) -> usize {
        self.inequality().map_or(0, |ineq| ineq.n_inequalities())
    }

    /// Total number of constraints.
    fn n_cons(&self) -> usize {
        self.n_eq_cons() + self.n_ineq_cons()
    }

    /// Bounds of the decision variables as `(lower, upper)` pairs.
    fn bounds(&self) -> Vec<(f64, f64)> {
        self.domain().bounds()
    }

    /// Lower bounds of the decision variables.
    fn lb(&self) -> &DVector<f64> {
        self.domain().lower()
    }

    /// Upper bounds of the decision variables.
    fn ub(&self) -> &DVector<f64> {
        self.domain().upper()
    }

    /// Raw equality residuals, empty if the problem has none.
    fn eq_cons(&self, x: &DVector<f64>) -> DVector<f64> {
        self.equality()
            .map_or_else(|| DVector::zeros(0), |eq| eq.equalities(x))
    }

    /// Raw inequality residuals, empty if the problem has none.
    fn ineq_cons(&self, x: &DVector<f64>) -> DVector<f64> {
        self.inequality()
            .map_or_else(|| DVector::zeros(0), |ineq| ineq.inequalities(x))
    }

    /// Aggregates all constraints into a single vector of inequality-style
    /// values, see [`aggregate_constraints`].
    fn cons(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        aggregate_constraints(self.equality(), self.inequality(), self.epsilon(), x)
    }

    /// Checks that the length of `x` matches the dimensionality. The values
    /// themselves are not checked.
    fn check_solution(&self, x: &DVector<f64>) -> Result<(), Error> {
        let expected = self.n_dims();

        if x.len() == expected {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected,
                actual: x.len(),
            })
        }
    }

    /// Determines whether some integer dimension of `x` holds a fractional
    /// value.
    fn needs_amendment(&self, x: &DVector<f64>) -> bool {
        self.integer_dims()
            .iter()
            .filter_map(|&i| x.get(i))
            .any(|xi| xi.fract() != 0.0)
    }

    /// Returns a copy of `x` with the integer dimensions truncated toward zero.
    /// The original vector is left untouched.
    fn amend_position(&self, x: &DVector<f64>) -> DVector<f64> {
        let mut amended = x.clone_owned();

        for &i in self.integer_dims() {
            if let Some(xi) = amended.get_mut(i) {
                *xi = xi.trunc();
            }
        }

        amended
    }

    /// All named parameters of the problem: the generic ones (name, counts,
    /// bounds, epsilon) merged with [`Problem::paras`].
    fn describe(&self) -> Paras {
        let mut paras = self.paras();

        paras.insert("name", Param::from(self.name()));
        paras.insert("n_dims", Param::from(self.n_dims()));
        paras.insert("n_objs", Param::from(self.n_objs()));
        paras.insert("n_eq_cons", Param::from(self.n_eq_cons()));
        paras.insert("n_ineq_cons", Param::from(self.n_ineq_cons()));
        paras.insert("bounds", Param::from(self.bounds()));
        paras.insert("epsilon", Param::from(self.epsilon()));

        if !self.integer_dims().is_empty() {
            paras.insert("integer_dims", Param::from(self.integer_dims().to_vec()));
        }

        paras
    }
}

impl<P: Problem + ?Sized> ProblemExt for P {}

/// Aggregates equality and inequality constraints into one vector.
///
/// Every equality residual `h` is relaxed to `|h| - epsilon` and placed first,
/// followed by the raw inequality residuals. A value `<= 0` means that the
/// corresponding constraint is satisfied. If a getter returns a different
/// number of values than it declares, [`Error::ConstraintCount`] is returned.
pub fn aggregate_constraints(
    eq: Option<&dyn EqualityConstraints>,
    ineq: Option<&dyn InequalityConstraints>,
    epsilon: f64,
    x: &DVector<f64>,
) -> Result<DVector<f64>, Error> {
    let n_eq = eq.map_or(0, |eq| eq.n_equalities());
    let n_ineq = ineq.map_or(0, |ineq| ineq.n_inequalities());

    let mut cons = Vec::with_capacity(n_eq + n_ineq);

    if let Some(eq) = eq {
        let hx = eq.equalities(x);
        check_count(ConstraintKind::Equality, n_eq, hx.len())?;
        cons.extend(hx.iter().map(|h| h.abs() - epsilon));
    }

    if let Some(ineq) = ineq {
        let gx = ineq.inequalities(x);
        check_count(ConstraintKind::Inequality, n_ineq, gx.len())?;
        cons.extend(gx.iter().copied());
    }

    Ok(DVector::from_vec(cons))
}

fn check_count(kind: ConstraintKind, expected: usize, actual: usize) -> Result<(), Error> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::ConstraintCount {
            kind,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    use super::*;
    use crate::testing::*;

    #[test]
    fn equality_relaxation() {
        let f = SingleEquality::new(1e-4);

        let within = f.cons(&dvector![0.00005]).unwrap();
        assert_eq!(within.len(), 1);
        assert!(within[0] <= 0.0);

        let outside = f.cons(&dvector![0.01]).unwrap();
        assert!(outside[0] > 0.0);
        assert_relative_eq!(outside[0], 0.01 - 1e-4);
    }

    #[test]
    fn equality_relaxation_is_symmetric() {
        let f = SingleEquality::new(1e-4);

        assert!(f.cons(&dvector![-0.00005]).unwrap()[0] <= 0.0);
        assert!(f.cons(&dvector![-0.01]).unwrap()[0] > 0.0);
    }

    #[test]
    fn equality_before_inequality() {
        let f = Box2d::new();
        let x = dvector![0.5, 0.25];

        let cons = f.cons(&x).unwrap();
        assert_eq!(cons.len(), f.n_cons());

        // h(x) = x0 - 2 x1 = 0
        assert_relative_eq!(cons[0], 0.0 - f.epsilon());
        // g(x) = x0 + x1 - 1
        assert_relative_eq!(cons[1], -0.25);
    }

    #[test]
    fn constraint_count_violation() {
        let f = MiscountedConstraints;

        assert!(matches!(
            f.cons(&dvector![1.0]),
            Err(Error::ConstraintCount {
                kind: ConstraintKind::Inequality,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn unconstrained_problem_has_no_constraints() {
        let f = Sphere::new(3);
        let x = dvector![1.0, 2.0, 3.0];

        assert_eq!(f.n_cons(), 0);
        assert!(f.cons(&x).unwrap().is_empty());
        assert!(f.eq_cons(&x).is_empty());
        assert!(f.ineq_cons(&x).is_empty());
    }

    #[test]
    fn check_solution_is_lenient() {
        let f = Box2d::new();

        assert!(f.check_solution(&dvector![100.0, -100.0]).is_ok());
        assert!(matches!(
            f.check_solution(&dvector![0.5]),
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert!(f.check_solution(&dvector![0.5, 0.5, 0.5]).is_err());
    }

    #[test]
    fn amend_position_copies() {
        let f = Box2d::new();
        let x = dvector![0.7, 1.9];

        assert!(f.needs_amendment(&x));

        let amended = f.amend_position(&x);
        assert_eq!(amended, dvector![0.7, 1.0]);
        assert_eq!(x, dvector![0.7, 1.9]);

        assert!(!f.needs_amendment(&amended));
    }

    #[test]
    fn amend_position_truncates_toward_zero() {
        let f = Box2d::new();
        assert_eq!(f.amend_position(&dvector![0.0, -1.5]), dvector![0.0, -1.0]);
    }

    #[test]
    fn describe() {
        let f = Box2d::new();
        let paras = f.describe();

        assert_eq!(paras["name"], Param::from("Box 2D"));
        assert_eq!(paras["n_dims"], Param::from(2usize));
        assert_eq!(paras["epsilon"], Param::from(DEFAULT_EPSILON));
        assert_eq!(
            paras["bounds"],
            Param::from(vec![(0.0, 1.0), (0.0, 2.0)])
        );
        assert_eq!(paras["integer_dims"], Param::from(vec![1usize]));
    }
}
