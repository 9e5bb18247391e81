//! Various analyses of evaluated points.

use nalgebra::DVector;

/// Decomposition of an aggregated constraint vector.
///
/// The vector must follow the layout of
/// [`aggregate_constraints`](crate::aggregate_constraints): the relaxed
/// equality constraints first, then the inequality constraints. A value `> 0`
/// is a violation, NaN is considered a violation too.
///
/// ```rust
/// use enopt::analysis::ConstraintReport;
/// use enopt::nalgebra::dvector;
///
/// let cons = dvector![-1e-4, 0.5, -2.0];
/// let report = ConstraintReport::new(&cons, 1);
///
/// assert_eq!(report.equality(), &[-1e-4]);
/// assert_eq!(report.inequality(), &[0.5, -2.0]);
/// assert_eq!(report.violated(), vec![1]);
/// assert!(!report.is_feasible());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstraintReport<'a> {
    cons: &'a [f64],
    n_eq: usize,
}

impl<'a> ConstraintReport<'a> {
    /// Creates the report for constraint values with given number of
    /// equality-derived entries in the front.
    ///
    /// If `n_eq` exceeds the length of `cons`, all values are taken as
    /// equality-derived.
    pub fn new(cons: &'a DVector<f64>, n_eq: usize) -> Self {
        let cons = cons.as_slice();
        Self {
            cons,
            n_eq: n_eq.min(cons.len()),
        }
    }

    /// All constraint values.
    pub fn values(&self) -> &'a [f64] {
        self.cons
    }

    /// Values derived from equality constraints, i.e. `|h| - epsilon`.
    pub fn equality(&self) -> &'a [f64] {
        &self.cons[..self.n_eq]
    }

    /// Values of inequality constraints.
    pub fn inequality(&self) -> &'a [f64] {
        &self.cons[self.n_eq..]
    }

    /// Violation of each constraint, i.e. `max(0, g)`. NaN is kept.
    pub fn violations(&self) -> DVector<f64> {
        DVector::from_iterator(self.cons.len(), self.cons.iter().map(|&g| violation(g)))
    }

    /// Sum of violations.
    pub fn total_violation(&self) -> f64 {
        self.cons.iter().map(|&g| violation(g)).sum()
    }

    /// The largest violation, zero if no constraint is violated.
    pub fn max_violation(&self) -> f64 {
        self.cons
            .iter()
            .map(|&g| violation(g))
            .fold(0.0, |max, v| if v.is_nan() || v > max { v } else { max })
    }

    /// Indices of the violated constraints.
    pub fn violated(&self) -> Vec<usize> {
        self.cons
            .iter()
            .enumerate()
            .filter(|(_, g)| is_violated(**g))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of violated constraints.
    pub fn n_violated(&self) -> usize {
        self.cons.iter().filter(|&&g| is_violated(g)).count()
    }

    /// Determines whether all constraints are satisfied.
    pub fn is_feasible(&self) -> bool {
        self.n_violated() == 0
    }
}

fn violation(g: f64) -> f64 {
    if is_violated(g) {
        g
    } else {
        0.0
    }
}

fn is_violated(g: f64) -> bool {
    g > 0.0 || g.is_nan()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    use super::*;

    #[test]
    fn split_by_kind() {
        let cons = dvector![0.1, -0.2, 0.3, -0.4];
        let report = ConstraintReport::new(&cons, 2);

        assert_eq!(report.equality(), &[0.1, -0.2]);
        assert_eq!(report.inequality(), &[0.3, -0.4]);
        assert_eq!(report.values().len(), 4);
    }

    #[test]
    fn only_inequality() {
        let cons = dvector![-1.0, -2.0];
        let report = ConstraintReport::new(&cons, 0);

        assert!(report.equality().is_empty());
        assert_eq!(report.inequality(), &[-1.0, -2.0]);
        assert!(report.is_feasible());
    }

    #[test]
    fn too_many_equalities() {
        let cons = dvector![-1.0];
        let report = ConstraintReport::new(&cons, 3);

        assert_eq!(report.equality(), &[-1.0]);
        assert!(report.inequality().is_empty());
    }

    #[test]
    fn violations() {
        let cons = dvector![-1.0, 2.0, 0.0, 0.5];
        let report = ConstraintReport::new(&cons, 1);

        assert_eq!(report.violations(), dvector![0.0, 2.0, 0.0, 0.5]);
        assert_relative_eq!(report.total_violation(), 2.5);
        assert_eq!(report.max_violation(), 2.0);
        assert_eq!(report.violated(), vec![1, 3]);
        assert_eq!(report.n_violated(), 2);
        assert!(!report.is_feasible());
    }

    #[test]
    fn boundary_is_feasible() {
        let cons = dvector![0.0, -0.0];
        let report = ConstraintReport::new(&cons, 1);

        assert!(report.is_feasible());
        assert_eq!(report.max_violation(), 0.0);
    }

    #[test]
    fn nan_is_violation() {
        let cons = dvector![-1.0, f64::NAN];
        let report = ConstraintReport::new(&cons, 0);

        assert!(!report.is_feasible());
        assert_eq!(report.violated(), vec![1]);
        assert!(report.total_violation().is_nan());
        assert!(report.max_violation().is_nan());
    }

    #[test]
    fn empty() {
        let cons = DVector::zeros(0);
        let report = ConstraintReport::new(&cons, 0);

        assert!(report.is_feasible());
        assert_eq!(report.total_violation(), 0.0);
        assert_eq!(report.max_violation(), 0.0);
    }
}
