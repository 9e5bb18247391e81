//! Synthetic problems and utilities useful for testing evaluators, penalty
//! functions and new catalog problems.
//!
//! [`Box2d`] is recommended for first tests since it has both kinds of
//! constraints and an integer dimension. Others can be used for specific
//! conditions (e.g., a problem violating its own constraint count).
//!
//! [`check_contract`] verifies the structural properties every problem must
//! satisfy and can be used to smoke test a new implementation of
//! [`Problem`].

#![allow(unused)]

use nalgebra::{dvector, DVector};
use rand::Rng;
use thiserror::Error;

use crate::core::{
    Domain, EqualityConstraints, Error, InequalityConstraints, Param, Paras, Problem, ProblemExt,
};

/// Problem with a single equality constraint `h(x) = x0` and a configurable
/// tolerance. The objective is `x0`.
#[derive(Debug, Clone)]
pub struct SingleEquality {
    domain: Domain,
    epsilon: f64,
}

impl SingleEquality {
    /// Initializes the problem with given tolerance of the equality
    /// constraint.
    ///
    /// The tolerance is not validated here, so that invalid configurations can
    /// be tested.
    pub fn new(epsilon: f64) -> Self {
        Self {
            domain: [(-1.0, 1.0)].into_iter().collect(),
            epsilon,
        }
    }
}

impl Default for SingleEquality {
    fn default() -> Self {
        Self::new(1e-4)
    }
}

impl Problem for SingleEquality {
    fn name(&self) -> &'static str {
        "Single equality"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0]]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }
}

impl EqualityConstraints for SingleEquality {
    fn n_equalities(&self) -> usize {
        1
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0]]
    }
}

/// Two-dimensional problem with one equality constraint, one inequality
/// constraint and an integer second variable.
///
/// * objective: `x0 + x1`
/// * equality: `x0 - 2 x1 = 0`
/// * inequality: `x0 + x1 - 1 <= 0`
///
/// After amendment, `(0, 0)` is the only feasible point.
#[derive(Debug, Clone)]
pub struct Box2d {
    domain: Domain,
}

impl Box2d {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [(0.0, 1.0), (0.0, 2.0)].into_iter().collect(),
        }
    }
}

impl Default for Box2d {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for Box2d {
    fn name(&self) -> &'static str {
        "Box 2D"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0] + x[1]]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[1]
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("slope", Param::from(2.0));
        paras
    }
}

impl EqualityConstraints for Box2d {
    fn n_equalities(&self) -> usize {
        1
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0] - 2.0 * x[1]]
    }
}

impl InequalityConstraints for Box2d {
    fn n_inequalities(&self) -> usize {
        1
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0] + x[1] - 1.0]
    }
}

/// Problem that declares two inequality constraints but returns only one
/// value.
#[derive(Debug, Clone, Copy)]
pub struct MiscountedConstraints;

impl Problem for MiscountedConstraints {
    fn name(&self) -> &'static str {
        "Miscounted constraints"
    }

    fn domain(&self) -> &Domain {
        unit_domain()
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0]]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }
}

impl InequalityConstraints for MiscountedConstraints {
    fn n_inequalities(&self) -> usize {
        2
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0] - 1.0]
    }
}

/// Problem that declares two objectives but returns only one value.
#[derive(Debug, Clone, Copy)]
pub struct MiscountedObjectives;

impl Problem for MiscountedObjectives {
    fn name(&self) -> &'static str {
        "Miscounted objectives"
    }

    fn domain(&self) -> &Domain {
        unit_domain()
    }

    fn n_objs(&self) -> usize {
        2
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0]]
    }
}

fn unit_domain() -> &'static Domain {
    use std::sync::OnceLock;

    static DOMAIN: OnceLock<Domain> = OnceLock::new();
    DOMAIN.get_or_init(|| [(0.0, 2.0)].into_iter().collect())
}

/// [Sphere function](https://en.wikipedia.org/wiki/Test_functions_for_optimization)
/// without constraints.
///
/// The global minimum is in the origin.
#[derive(Debug, Clone)]
pub struct Sphere {
    domain: Domain,
}

impl Sphere {
    /// Initializes the problem with given dimension.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "n must be greater than zero");
        Self {
            domain: (0..n).map(|_| (-5.0, 5.0)).collect(),
        }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Problem for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x.norm_squared()]
    }
}

/// Violation of the structural properties of a problem found by
/// [`check_contract`].
#[derive(Debug, Error)]
pub enum ContractViolation {
    /// The problem has no objective.
    #[error("problem has no objective")]
    NoObjective,
    /// The tolerance is not positive and finite.
    #[error("invalid epsilon {0}")]
    InvalidEpsilon(f64),
    /// An integer dimension is out of the range of variables.
    #[error("integer dimension {0} out of range")]
    IntegerDimension(usize),
    /// The objectives getter returned a wrong number of values.
    #[error("{actual} objectives returned, {expected} declared")]
    ObjectiveCount {
        /// Declared number of objectives.
        expected: usize,
        /// Number of returned values.
        actual: usize,
    },
    /// The aggregated constraints have a wrong length.
    #[error("{actual} constraint values returned, {expected} declared")]
    ConstraintCount {
        /// Declared number of constraints.
        expected: usize,
        /// Number of returned values.
        actual: usize,
    },
    /// A sampled point is outside of the bounds.
    #[error("sampled point outside of bounds")]
    Sample,
    /// Evaluation of the problem failed.
    #[error("{0}")]
    Inner(#[from] Error),
}

/// Checks the structural properties of a problem in `n_samples` random
/// points: lengths of objectives and constraints, bounds and integer
/// dimensions.
///
/// Values of the objectives and constraints are not checked, the formulas are
/// free to produce NaN or infinity in parts of the domain.
pub fn check_contract<P, R>(
    problem: &P,
    rng: &mut R,
    n_samples: usize,
) -> Result<(), ContractViolation>
where
    P: Problem + ?Sized,
    R: Rng + ?Sized,
{
    if problem.n_objs() == 0 {
        return Err(ContractViolation::NoObjective);
    }

    let epsilon = problem.epsilon();
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(ContractViolation::InvalidEpsilon(epsilon));
    }

    if let Some(&i) = problem
        .integer_dims()
        .iter()
        .find(|&&i| i >= problem.n_dims())
    {
        return Err(ContractViolation::IntegerDimension(i));
    }

    for _ in 0..n_samples {
        let x = problem.domain().sample(rng);

        if !problem.domain().contains(&x) {
            return Err(ContractViolation::Sample);
        }

        let x = problem.amend_position(&x);
        problem.check_solution(&x)?;

        let objs = problem.objectives(&x);
        if objs.len() != problem.n_objs() {
            return Err(ContractViolation::ObjectiveCount {
                expected: problem.n_objs(),
                actual: objs.len(),
            });
        }

        let cons = problem.cons(&x)?;
        if cons.len() != problem.n_cons() {
            return Err(ContractViolation::ConstraintCount {
                expected: problem.n_cons(),
                actual: cons.len(),
            });
        }
    }

    Ok(())
}
