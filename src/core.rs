//! Core abstractions and types for enopt.
//!
//! *Problem authors* implement the [`Problem`] trait and, where the problem
//! has them, the [`EqualityConstraints`] and [`InequalityConstraints`]
//! capabilities. *Optimizer authors* drive problems through an
//! [`Evaluator`](crate::Evaluator) and may use [`ProblemExt`] for the derived
//! quantities (dimensionality, bounds, aggregated constraints).

mod base;
mod domain;
mod paras;
mod penalty;

pub use base::*;
pub use domain::*;
pub use paras::*;
pub use penalty::*;
