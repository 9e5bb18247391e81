//! Evaluation of problems by optimizers.
//!
//! An [`Evaluator`] binds a [`Problem`] to a [`Penalty`] function and counts
//! the number of function evaluations. It is the object an optimizer drives:
//! it reads the bounds to constrain its sampling and calls
//! [`evaluate`](Evaluator::evaluate) repeatedly with candidate points.
//!
//! The simplest way is to use the defaults:
//!
//! ```rust
//! use enopt::nalgebra::dvector;
//! use enopt::problems::TensionCompressionSpringDesign;
//! use enopt::Evaluator;
//!
//! let spring = TensionCompressionSpringDesign::new();
//! let evaluator = Evaluator::new(&spring).expect("valid configuration");
//!
//! let fitness = evaluator.evaluate(&dvector![0.05, 0.25, 2.0]).unwrap();
//! assert!(fitness.is_finite());
//! assert_eq!(evaluator.n_fe(), 1);
//! ```
//!
//! If you need a custom penalty or a strict check of bounds, use the builder:
//!
//! ```rust
//! use enopt::nalgebra::{dvector, DVector};
//! use enopt::problems::TensionCompressionSpringDesign;
//! use enopt::{Error, Evaluator};
//!
//! let spring = TensionCompressionSpringDesign::new();
//! let evaluator = Evaluator::builder(&spring)
//!     .with_penalty(|objs: &DVector<f64>, cons: &DVector<f64>| {
//!         objs.sum() + 1e3 * cons.iter().map(|g| g.max(0.0)).sum::<f64>()
//!     })
//!     .strict_bounds(true)
//!     .build()
//!     .expect("valid configuration");
//!
//! assert!(matches!(
//!     evaluator.evaluate(&dvector![0.01, 0.25, 2.0]),
//!     Err(Error::OutOfBounds { index: 0, .. })
//! ));
//! ```

use std::{
    borrow::Cow,
    sync::atomic::{AtomicUsize, Ordering},
};

use getset::{CopyGetters, Getters, Setters};
use log::{debug, trace};
use nalgebra::DVector;
use rand::Rng;

use crate::{
    analysis::ConstraintReport,
    core::{aggregate_constraints, Error, Paras, Penalty, Problem, ProblemExt, QuadraticPenalty},
};

/// Options for [`Evaluator`].
#[derive(Debug, Clone, Copy, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct EvaluatorOptions {
    /// Rejects points outside of the bounds with [`Error::OutOfBounds`].
    /// Metaheuristics commonly explore outside of the bounds temporarily, so
    /// only the dimension is checked by default. Default: `false`.
    strict_bounds: bool,
    /// Rejects evaluations producing NaN or infinite objective or constraint
    /// values with [`Error::InvalidValue`] instead of passing them to the
    /// penalty function. Points where a formula is singular (e.g., a division
    /// by zero), inside or outside of the bounds, are therefore rejected too.
    /// Default: `true`.
    reject_non_finite: bool,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            strict_bounds: false,
            reject_non_finite: true,
        }
    }
}

/// Builder for the [`Evaluator`].
pub struct EvaluatorBuilder<'a, P: Problem + ?Sized, F> {
    problem: &'a P,
    penalty: F,
    options: EvaluatorOptions,
}

impl<'a, P: Problem + ?Sized> EvaluatorBuilder<'a, P, QuadraticPenalty> {
    fn new(problem: &'a P) -> Self {
        Self {
            problem,
            penalty: QuadraticPenalty::default(),
            options: EvaluatorOptions::default(),
        }
    }
}

impl<'a, P: Problem + ?Sized, F: Penalty> EvaluatorBuilder<'a, P, F> {
    /// Sets the penalty function combining objectives and constraints.
    pub fn with_penalty<F2: Penalty>(self, penalty: F2) -> EvaluatorBuilder<'a, P, F2> {
        EvaluatorBuilder {
            problem: self.problem,
            penalty,
            options: self.options,
        }
    }

    /// Sets all options at once.
    pub fn with_options(mut self, options: EvaluatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Enables or disables strict check of bounds.
    pub fn strict_bounds(mut self, strict: bool) -> Self {
        self.options.set_strict_bounds(strict);
        self
    }

    /// Enables or disables rejection of non-finite values.
    pub fn reject_non_finite(mut self, reject: bool) -> Self {
        self.options.set_reject_non_finite(reject);
        self
    }

    /// Builds the [`Evaluator`], validating the configuration of the problem.
    pub fn build(self) -> Result<Evaluator<'a, P, F>, Error> {
        let Self {
            problem,
            penalty,
            options,
        } = self;

        let epsilon = problem.epsilon();
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(Error::Configuration(format!(
                "epsilon must be positive and finite, got {}",
                epsilon
            )));
        }

        if problem.n_objs() == 0 {
            return Err(Error::Configuration(
                "problem must have at least one objective".to_string(),
            ));
        }

        let n_eq_cons = problem.n_eq_cons();
        let n_ineq_cons = problem.n_ineq_cons();

        debug!(
            "evaluator for {} ({} dims, {} equality and {} inequality constraints)",
            problem.name(),
            problem.n_dims(),
            n_eq_cons,
            n_ineq_cons
        );

        Ok(Evaluator {
            problem,
            penalty,
            options,
            n_eq_cons,
            n_ineq_cons,
            n_fe: AtomicUsize::new(0),
        })
    }
}

/// Result of a single evaluation.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Evaluation {
    /// The evaluated point, after amendment of integer dimensions.
    #[getset(get = "pub")]
    x: DVector<f64>,
    /// Whether the point was amended.
    #[getset(get_copy = "pub")]
    amended: bool,
    /// Objective values.
    #[getset(get = "pub")]
    objs: DVector<f64>,
    /// Aggregated constraint values, equality-derived first.
    #[getset(get = "pub")]
    cons: DVector<f64>,
    /// Value of the penalty function.
    #[getset(get_copy = "pub")]
    fitness: f64,
    n_eq_cons: usize,
}

impl Evaluation {
    /// Decomposes the constraint values of the evaluation.
    pub fn report(&self) -> ConstraintReport<'_> {
        ConstraintReport::new(&self.cons, self.n_eq_cons)
    }

    /// Determines whether all constraints are satisfied.
    pub fn is_feasible(&self) -> bool {
        self.report().is_feasible()
    }
}

/// Evaluator of a problem.
///
/// For default settings, use [`Evaluator::new`]. For more flexibility, use
/// [`Evaluator::builder`]. See [module](self) documentation for usage.
///
/// The evaluator counts every call of [`evaluate`](Evaluator::evaluate) (and
/// its variants) in [`n_fe`](Evaluator::n_fe), including calls that fail on
/// validation. The counter is atomic, so an evaluator can be shared between
/// threads evaluating in parallel.
pub struct Evaluator<'a, P: Problem + ?Sized, F = QuadraticPenalty> {
    problem: &'a P,
    penalty: F,
    options: EvaluatorOptions,
    n_eq_cons: usize,
    n_ineq_cons: usize,
    n_fe: AtomicUsize,
}

impl<'a, P: Problem + ?Sized> Evaluator<'a, P, QuadraticPenalty> {
    /// Initializes the evaluator with the default penalty and options.
    pub fn new(problem: &'a P) -> Result<Self, Error> {
        EvaluatorBuilder::new(problem).build()
    }

    /// Returns the builder for specifying additional settings.
    pub fn builder(problem: &'a P) -> EvaluatorBuilder<'a, P, QuadraticPenalty> {
        EvaluatorBuilder::new(problem)
    }
}

impl<'a, P: Problem + ?Sized, F: Penalty> Evaluator<'a, P, F> {
    /// Gets the problem.
    pub fn problem(&self) -> &'a P {
        self.problem
    }

    /// Gets the penalty function.
    pub fn penalty(&self) -> &F {
        &self.penalty
    }

    /// Gets the options.
    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Number of function evaluations so far.
    pub fn n_fe(&self) -> usize {
        self.n_fe.load(Ordering::Relaxed)
    }

    /// Name of the problem.
    pub fn name(&self) -> &'static str {
        self.problem.name()
    }

    /// Number of decision variables.
    pub fn n_dims(&self) -> usize {
        self.problem.n_dims()
    }

    /// Number of objectives.
    pub fn n_objs(&self) -> usize {
        self.problem.n_objs()
    }

    /// Number of equality constraints.
    pub fn n_eq_cons(&self) -> usize {
        self.n_eq_cons
    }

    /// Number of inequality constraints.
    pub fn n_ineq_cons(&self) -> usize {
        self.n_ineq_cons
    }

    /// Total number of constraints.
    pub fn n_cons(&self) -> usize {
        self.n_eq_cons + self.n_ineq_cons
    }

    /// Tolerance of the equality constraints.
    pub fn epsilon(&self) -> f64 {
        self.problem.epsilon()
    }

    /// Bounds as `(lower, upper)` pairs.
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        self.problem.bounds()
    }

    /// Lower bounds.
    pub fn lb(&self) -> &'a DVector<f64> {
        self.problem.domain().lower()
    }

    /// Upper bounds.
    pub fn ub(&self) -> &'a DVector<f64> {
        self.problem.domain().upper()
    }

    /// Named parameters of the problem.
    pub fn get_paras(&self) -> Paras {
        self.problem.describe()
    }

    /// Samples a random point uniformly within the bounds.
    pub fn create_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> DVector<f64> {
        self.problem.domain().sample(rng)
    }

    /// Validates the point.
    ///
    /// The length must match the dimensionality. If strict bounds are
    /// enabled, every variable must also lie within its bounds.
    pub fn check_solution(&self, x: &DVector<f64>) -> Result<(), Error> {
        let result = if self.options.strict_bounds() {
            self.problem.domain().check(x)
        } else {
            self.problem.check_solution(x)
        };

        if let Err(error) = &result {
            debug!("rejected point for {}: {}", self.problem.name(), error);
        }

        result
    }

    /// Returns a copy of the point with integer dimensions truncated.
    pub fn amend_position(&self, x: &DVector<f64>) -> DVector<f64> {
        self.problem.amend_position(x)
    }

    /// Calculates the objective values. Neither amendment nor counting takes
    /// place.
    pub fn get_objs(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        self.problem.check_solution(x)?;
        self.objectives(x)
    }

    /// Calculates the aggregated constraint values. Neither amendment nor
    /// counting takes place.
    pub fn get_cons(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        self.problem.check_solution(x)?;
        self.cons(x)
    }

    /// Evaluates the point and returns the fitness.
    pub fn evaluate(&self, x: &DVector<f64>) -> Result<f64, Error> {
        self.evaluate_full(x).map(|evaluation| evaluation.fitness)
    }

    /// Evaluates the point given as a slice.
    pub fn evaluate_slice(&self, x: &[f64]) -> Result<f64, Error> {
        self.evaluate(&DVector::from_column_slice(x))
    }

    /// Evaluates the point and returns all computed values.
    ///
    /// The steps are: count the evaluation, validate the point, amend integer
    /// dimensions holding fractional values, compute objectives and
    /// constraints and combine them by the penalty function.
    pub fn evaluate_full(&self, x: &DVector<f64>) -> Result<Evaluation, Error> {
        self.n_fe.fetch_add(1, Ordering::Relaxed);
        self.check_solution(x)?;

        let x = self.amend(x);
        let objs = self.objectives(&x)?;
        let cons = self.cons(&x)?;

        if self.options.reject_non_finite()
            && !objs.iter().chain(cons.iter()).all(|value| value.is_finite())
        {
            debug!(
                "non-finite value for {} in {:?}: objs = {:?}, cons = {:?}",
                self.problem.name(),
                x.as_slice(),
                objs.as_slice(),
                cons.as_slice()
            );
            return Err(Error::InvalidValue);
        }

        let fitness = self.penalty.combine(&objs, &cons);
        trace!("{}: fitness = {}", self.problem.name(), fitness);

        let amended = matches!(x, Cow::Owned(_));

        Ok(Evaluation {
            x: x.into_owned(),
            amended,
            objs,
            cons,
            fitness,
            n_eq_cons: self.n_eq_cons,
        })
    }

    fn objectives(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        let objs = self.problem.objectives(x);
        let expected = self.problem.n_objs();

        if objs.len() == expected {
            Ok(objs)
        } else {
            Err(Error::ObjectiveCount {
                expected,
                actual: objs.len(),
            })
        }
    }

    fn amend<'x>(&self, x: &'x DVector<f64>) -> Cow<'x, DVector<f64>> {
        if self.problem.needs_amendment(x) {
            let amended = self.problem.amend_position(x);
            debug!(
                "amended integer dimensions {:?}: {:?} -> {:?}",
                self.problem.integer_dims(),
                x.as_slice(),
                amended.as_slice()
            );
            Cow::Owned(amended)
        } else {
            Cow::Borrowed(x)
        }
    }

    fn cons(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        aggregate_constraints(
            self.problem.equality(),
            self.problem.inequality(),
            self.problem.epsilon(),
            x,
        )
    }
}
