//! Named parameters of problems for diagnostic display.

use std::{collections::BTreeMap, fmt};

/// Named parameters of a problem, ordered by name.
pub type Paras = BTreeMap<&'static str, Param>;

/// Value of a named problem parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Textual value, e.g. the problem name.
    Text(String),
    /// A count, e.g. the number of constraints.
    Count(usize),
    /// A physical constant or tolerance.
    Scalar(f64),
    /// A list of indices.
    Indices(Vec<usize>),
    /// A list of constants.
    Vector(Vec<f64>),
    /// A table of constants, stored by rows.
    Matrix(Vec<Vec<f64>>),
    /// Bounds of decision variables.
    Bounds(Vec<(f64, f64)>),
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<usize> for Param {
    fn from(value: usize) -> Self {
        Param::Count(value)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Scalar(value)
    }
}

impl From<Vec<usize>> for Param {
    fn from(value: Vec<usize>) -> Self {
        Param::Indices(value)
    }
}

impl From<Vec<f64>> for Param {
    fn from(value: Vec<f64>) -> Self {
        Param::Vector(value)
    }
}

impl From<&[f64]> for Param {
    fn from(value: &[f64]) -> Self {
        Param::Vector(value.to_vec())
    }
}

impl<const N: usize> From<&[[f64; N]]> for Param {
    fn from(rows: &[[f64; N]]) -> Self {
        Param::Matrix(rows.iter().map(|row| row.to_vec()).collect())
    }
}

impl From<Vec<(f64, f64)>> for Param {
    fn from(value: Vec<(f64, f64)>) -> Self {
        Param::Bounds(value)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Text(text) => f.write_str(text),
            Param::Count(count) => write!(f, "{}", count),
            Param::Scalar(value) => write!(f, "{}", value),
            Param::Indices(indices) => write!(f, "{:?}", indices),
            Param::Vector(values) => write!(f, "{:?}", values),
            Param::Matrix(rows) => write!(f, "{:?}", rows),
            Param::Bounds(bounds) => write!(f, "{:?}", bounds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Param::from("spring").to_string(), "spring");
        assert_eq!(Param::from(3usize).to_string(), "3");
        assert_eq!(Param::from(0.5).to_string(), "0.5");
        assert_eq!(Param::from(vec![1.0, 2.5]).to_string(), "[1.0, 2.5]");
        assert_eq!(
            Param::from(&[[2.0, 3.0], [4.0, 6.0]][..]).to_string(),
            "[[2.0, 3.0], [4.0, 6.0]]"
        );
        assert_eq!(
            Param::from(vec![(0.0, 1.0)]).to_string(),
            "[(0.0, 1.0)]"
        );
    }
}
