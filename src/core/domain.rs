//! Problem domain definition, i.e., bound constraints for variables.

use std::iter::FromIterator;

use nalgebra::DVector;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::base::Error;

/// Domain of a problem: a box given by lower and upper bound of every
/// variable.
///
/// All bounds must be finite and `lower <= upper` must hold in every
/// dimension. A degenerate range `[a, a]` fixes the variable to a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    lower: DVector<f64>,
    upper: DVector<f64>,
}

impl Domain {
    /// Creates rectangular domain with given bounds.
    ///
    /// Panics if the bounds are invalid. Use [`Domain::try_rect`] for bounds
    /// that are not known at compile time.
    pub fn rect(lower: DVector<f64>, upper: DVector<f64>) -> Self {
        match Self::try_rect(lower, upper) {
            Ok(dom) => dom,
            Err(error) => panic!("{}", error),
        }
    }

    /// Creates rectangular domain with given bounds, returning
    /// [`Error::Configuration`] if the bounds are invalid.
    pub fn try_rect(lower: DVector<f64>, upper: DVector<f64>) -> Result<Self, Error> {
        validate(&lower, &upper)?;
        Ok(Self { lower, upper })
    }

    /// Creates rectangular domain from `(lower, upper)` pairs, returning
    /// [`Error::Configuration`] if the bounds are invalid.
    pub fn try_from_bounds(bounds: &[(f64, f64)]) -> Result<Self, Error> {
        let (lower, upper): (Vec<_>, Vec<_>) = bounds.iter().copied().unzip();
        Self::try_rect(DVector::from_vec(lower), DVector::from_vec(upper))
    }

    /// Gets the dimension of the domain.
    pub fn dim(&self) -> usize {
        self.lower.nrows()
    }

    /// Gets the lower bounds.
    pub fn lower(&self) -> &DVector<f64> {
        &self.lower
    }

    /// Gets the upper bounds.
    pub fn upper(&self) -> &DVector<f64> {
        &self.upper
    }

    /// Gets the bounds as `(lower, upper)` pairs.
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        self.lower
            .iter()
            .copied()
            .zip(self.upper.iter().copied())
            .collect()
    }

    /// Determines whether given point lies in the domain.
    pub fn contains(&self, x: &DVector<f64>) -> bool {
        self.check(x).is_ok()
    }

    /// Checks that every variable of given point lies within its bounds.
    ///
    /// The first violating variable is reported as [`Error::OutOfBounds`].
    /// Points of a wrong dimension are reported as
    /// [`Error::DimensionMismatch`].
    pub fn check(&self, x: &DVector<f64>) -> Result<(), Error> {
        if x.len() != self.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: x.len(),
            });
        }

        let violation = self
            .lower
            .iter()
            .zip(self.upper.iter())
            .zip(x.iter())
            .enumerate()
            .find(|(_, ((li, ui), xi))| !(li <= xi && xi <= ui));

        match violation {
            Some((index, ((&lower, &upper), &value))) => Err(Error::OutOfBounds {
                index,
                value,
                lower,
                upper,
            }),
            None => Ok(()),
        }
    }

    /// Projects given point into the domain. Returns `true` if the point was
    /// not feasible.
    pub fn project(&self, x: &mut DVector<f64>) -> bool {
        let mut not_feasible = false;

        self.lower
            .iter()
            .zip(self.upper.iter())
            .zip(x.iter_mut())
            .for_each(|((li, ui), xi)| {
                if &*xi < li {
                    *xi = *li;
                    not_feasible = true;
                } else if &*xi > ui {
                    *xi = *ui;
                    not_feasible = true;
                }
            });

        not_feasible
    }

    /// Samples a point uniformly in the domain.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DVector<f64> {
        DVector::from_iterator(
            self.dim(),
            self.lower
                .iter()
                .copied()
                .zip(self.upper.iter().copied())
                .map(|(li, ui)| Uniform::new_inclusive(li, ui).sample(rng)),
        )
    }
}

fn validate(lower: &DVector<f64>, upper: &DVector<f64>) -> Result<(), Error> {
    if lower.len() != upper.len() {
        return Err(Error::Configuration(format!(
            "lower and upper bounds have different size ({} and {})",
            lower.len(),
            upper.len()
        )));
    }

    if lower.is_empty() {
        return Err(Error::Configuration("empty domain".to_string()));
    }

    for (i, (li, ui)) in lower.iter().zip(upper.iter()).enumerate() {
        if !li.is_finite() || !ui.is_finite() {
            return Err(Error::Configuration(format!(
                "bounds of variable {} are not finite: [{}, {}]",
                i, li, ui
            )));
        }

        if li > ui {
            return Err(Error::Configuration(format!(
                "lower bound of variable {} is greater than upper bound: [{}, {}]",
                i, li, ui
            )));
        }
    }

    Ok(())
}

impl FromIterator<(f64, f64)> for Domain {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (lower, upper): (Vec<_>, Vec<_>) = iter.into_iter().unzip();
        Self::rect(DVector::from_vec(lower), DVector::from_vec(upper))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use nalgebra::dvector;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn dom() -> Domain {
        [(0.05, 2.0), (0.25, 1.3), (2.0, 15.0)].into_iter().collect()
    }

    #[test]
    fn lower_and_upper() {
        let dom = dom();

        assert_eq!(dom.dim(), 3);
        assert_eq!(dom.lower(), &dvector![0.05, 0.25, 2.0]);
        assert_eq!(dom.upper(), &dvector![2.0, 1.3, 15.0]);
        assert_eq!(dom.bounds(), vec![(0.05, 2.0), (0.25, 1.3), (2.0, 15.0)]);
    }

    #[test]
    fn invalid_bounds() {
        assert!(matches!(
            Domain::try_from_bounds(&[(1.0, 0.0)]),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Domain::try_from_bounds(&[]),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Domain::try_from_bounds(&[(0.0, f64::INFINITY)]),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Domain::try_from_bounds(&[(f64::NAN, 1.0)]),
            Err(Error::Configuration(_))
        ));
        assert!(Domain::try_from_bounds(&[(1.0, 1.0)]).is_ok());
    }

    #[test]
    #[should_panic]
    fn rect_panics_on_invalid_bounds() {
        Domain::rect(dvector![0.0, 2.0], dvector![1.0, 1.0]);
    }

    #[test]
    fn check() {
        let dom = dom();

        assert!(dom.check(&dvector![0.05, 0.25, 2.0]).is_ok());
        assert!(dom.contains(&dvector![2.0, 1.3, 15.0]));
        assert!(matches!(
            dom.check(&dvector![0.05, 1.5, 2.0]),
            Err(Error::OutOfBounds { index: 1, .. })
        ));
        assert!(!dom.contains(&dvector![0.05, 0.25, f64::NAN]));
        assert!(matches!(
            dom.check(&dvector![0.05]),
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn project() {
        let dom = dom();

        let mut x = dvector![0.0, 1.0, 20.0];
        assert!(dom.project(&mut x));
        assert_eq!(x, dvector![0.05, 1.0, 15.0]);

        assert!(!dom.project(&mut x));
    }

    #[test]
    fn sample_in_bounds() {
        let dom = dom();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let x = dom.sample(&mut rng);
            assert_eq!(x.len(), 3);
            assert!(dom.contains(&x));
        }
    }

    #[test]
    fn sample_degenerate() {
        let dom: Domain = [(1.5, 1.5)].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(dom.sample(&mut rng), dvector![1.5]);
    }
}
