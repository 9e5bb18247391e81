#![allow(clippy::many_single_char_names)]
#![allow(clippy::excessive_precision)]
#![warn(missing_docs)]

//! # Enopt
//!
//! A catalog of real-world constrained engineering optimization problems
//! written entirely in Rust.
//!
//! This library provides closed-form benchmark problems drawn from industrial
//! chemical processes, process design and synthesis, and mechanical design.
//! Every problem exposes the same contract: a fixed number of decision
//! variables with bounds, an objective and any number of equality and
//! inequality constraints. An [`Evaluator`] combines the objective and the
//! constraints through a penalty function into a single scalar fitness, so
//! that any optimizer (a metaheuristic, a gradient-based method, a random
//! search) can minimize it.
//!
//! ## Problem
//!
//! Mathematically, a problem is formulated as
//!
//! ```text
//! minimize f(x)
//!
//! subject to h(x) = 0,
//!            g(x) <= 0,
//!            Li <= xi <= Ui for every i
//! ```
//!
//! For numerical evaluation, an equality constraint is relaxed to
//! `|h(x)| - epsilon <= 0` with a small problem-specific tolerance (`1e-4`
//! by default). The aggregated constraint vector then has the relaxed
//! equalities first, followed by the inequalities, and a value `> 0` always
//! means violation (see [`aggregate_constraints`]).
//!
//! Some variables encode integer or categorical choices. They are searched
//! continuously and truncated toward zero before evaluation. This is called
//! *amendment* and never modifies the point passed by the caller.
//!
//! When it comes to code, the problem is any type that implements the
//! [`Problem`] trait, optionally together with [`EqualityConstraints`] and
//! [`InequalityConstraints`].
//!
//! ```rust
//! use enopt::nalgebra::{dvector, DVector};
//! use enopt::{Domain, InequalityConstraints, Problem, ProblemExt};
//!
//! struct Disk {
//!     domain: Domain,
//! }
//!
//! impl Problem for Disk {
//!     fn name(&self) -> &'static str {
//!         "Disk"
//!     }
//!
//!     fn domain(&self) -> &Domain {
//!         &self.domain
//!     }
//!
//!     fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
//!         dvector![x[0] + x[1]]
//!     }
//!
//!     fn inequality(&self) -> Option<&dyn InequalityConstraints> {
//!         Some(self)
//!     }
//! }
//!
//! impl InequalityConstraints for Disk {
//!     fn n_inequalities(&self) -> usize {
//!         1
//!     }
//!
//!     fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
//!         dvector![x[0].powi(2) + x[1].powi(2) - 1.0]
//!     }
//! }
//!
//! let disk = Disk {
//!     domain: [(-2.0, 2.0), (-2.0, 2.0)].into_iter().collect(),
//! };
//!
//! assert_eq!(disk.n_dims(), 2);
//! assert_eq!(disk.n_cons(), 1);
//! assert_eq!(disk.cons(&dvector![0.0, 0.0]).unwrap(), dvector![-1.0]);
//! ```
//!
//! ## Catalog
//!
//! The [`problems`] module contains 23 problems. They can be constructed
//! directly or looked up in the [`catalog`] by their code (`p1` to `p23`)
//! or abbreviation.
//!
//! ```rust
//! use enopt::catalog::ProblemId;
//! use enopt::problems::PressureVesselDesign;
//! use enopt::{Problem, ProblemExt};
//!
//! let vessel = PressureVesselDesign::new();
//! assert_eq!(vessel.integer_dims(), &[0, 1]);
//!
//! let problem = "p18".parse::<ProblemId>().unwrap().build();
//! assert_eq!(problem.name(), vessel.name());
//! ```
//!
//! ## Evaluation
//!
//! The [`Evaluator`] binds a problem to a penalty function (a static
//! quadratic penalty by default, see [`QuadraticPenalty`]) and counts the
//! number of function evaluations.
//!
//! ```rust
//! use enopt::nalgebra::dvector;
//! use enopt::problems::TensionCompressionSpringDesign;
//! use enopt::Evaluator;
//!
//! let spring = TensionCompressionSpringDesign::new();
//! let evaluator = Evaluator::new(&spring).expect("valid problem");
//!
//! let evaluation = evaluator
//!     .evaluate_full(&dvector![0.0517, 0.3567, 11.289])
//!     .expect("valid point");
//!
//! println!(
//!     "fitness = {}\tfeasible = {}",
//!     evaluation.fitness(),
//!     evaluation.is_feasible()
//! );
//! assert_eq!(evaluator.n_fe(), 1);
//! ```
//!
//! ## License
//!
//! Licensed under MIT.

pub mod analysis;
pub mod catalog;
mod core;
pub mod evaluator;
pub mod problems;

pub use crate::core::*;
pub use evaluator::{Evaluation, Evaluator, EvaluatorBuilder, EvaluatorOptions};

#[cfg(feature = "testing")]
pub mod testing;

#[cfg(not(feature = "testing"))]
pub(crate) mod testing;

pub use nalgebra;
