//! Process design and synthesis problems.
//!
//! Most of these problems mix continuous variables with binary or integer
//! decisions (e.g., whether a unit exists in the flowsheet). The integer
//! variables are searched continuously and truncated before evaluation, see
//! [`Problem::integer_dims`].

use std::iter;

use nalgebra::{dvector, DVector};

use crate::core::{Domain, EqualityConstraints, InequalityConstraints, Param, Paras, Problem};

/// Process synthesis problem 01.
///
/// 2 variables (the second is binary), 2 inequality constraints.
#[derive(Debug, Clone)]
pub struct ProcessSynthesis01 {
    domain: Domain,
}

impl ProcessSynthesis01 {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [(0.0, 1.6), (0.0, 1.99)].into_iter().collect(),
        }
    }
}

impl Default for ProcessSynthesis01 {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for ProcessSynthesis01 {
    fn name(&self) -> &'static str {
        "Process synthesis 01 problem (Process design and synthesis problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![2.0 * x[0] + x[1]]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[1]
    }
}

impl InequalityConstraints for ProcessSynthesis01 {
    fn n_inequalities(&self) -> usize {
        2
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![1.25 - x[0].powi(2) - x[1], x[0] + x[1] - 1.6]
    }
}

/// Process synthesis and design problem.
///
/// 3 variables (the third is binary), 1 equality and 1 inequality constraint.
#[derive(Debug, Clone)]
pub struct ProcessSynthesisAndDesign {
    domain: Domain,
}

impl ProcessSynthesisAndDesign {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [(0.5, 1.4), (0.5, 1.4), (0.0, 1.99)].into_iter().collect(),
        }
    }
}

impl Default for ProcessSynthesisAndDesign {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for ProcessSynthesisAndDesign {
    fn name(&self) -> &'static str {
        "Process synthesis and design problem (Process design and synthesis problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![2.0 * x[0] + x[1] - x[2]]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[2]
    }
}

impl EqualityConstraints for ProcessSynthesisAndDesign {
    fn n_equalities(&self) -> usize {
        1
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0] - 2.0 * (-x[1]).exp()]
    }
}

impl InequalityConstraints for ProcessSynthesisAndDesign {
    fn n_inequalities(&self) -> usize {
        1
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![-x[0] + x[1] + x[2]]
    }
}

/// Process flow sheeting problem.
///
/// 3 variables (the third is binary), 3 inequality constraints.
#[derive(Debug, Clone)]
pub struct ProcessFlowSheeting {
    domain: Domain,
}

impl ProcessFlowSheeting {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [(-2.22554, -1.0), (0.2, 1.0), (0.0, 1.99)]
                .into_iter()
                .collect(),
        }
    }
}

impl Default for ProcessFlowSheeting {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for ProcessFlowSheeting {
    fn name(&self) -> &'static str {
        "Process flow sheeting problem (Process design and synthesis problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![5.0 * (x[0] - 0.5).powi(2) + 0.8 - 0.7 * x[2]]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[2]
    }
}

impl InequalityConstraints for ProcessFlowSheeting {
    fn n_inequalities(&self) -> usize {
        3
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            -(x[0] - 0.2).exp() - x[1],
            x[1] + 1.1 * x[2] + 1.0,
            x[0] - x[2] - 0.2
        ]
    }
}

/// Two-reactor problem.
///
/// 8 variables (the last two select the reactor), 5 equality and 4
/// inequality constraints.
#[derive(Debug, Clone)]
pub struct TwoReactor {
    domain: Domain,
}

impl TwoReactor {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: iter::repeat((0.0, 100.0))
                .take(6)
                .chain(iter::repeat((0.0, 1.99)).take(2))
                .collect(),
        }
    }
}

impl Default for TwoReactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for TwoReactor {
    fn name(&self) -> &'static str {
        "Two-reactor problem (Process design and synthesis problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![7.5 * x[6] + 5.5 * x[7] + 7.0 * x[4] + 6.0 * x[5] + 5.0 * (x[0] + x[1])]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[6, 7]
    }
}

impl EqualityConstraints for TwoReactor {
    fn n_equalities(&self) -> usize {
        5
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            x[6] + x[7] - 1.0,
            x[2] - 0.9 * (1.0 - (0.5 * x[4]).exp()) * x[0],
            x[3] - 0.8 * (1.0 - (0.4 * x[5]).exp()) * x[1],
            x[2] + x[3] - 10.0,
            x[2] * x[6] + x[3] * x[7] - 10.0
        ]
    }
}

impl InequalityConstraints for TwoReactor {
    fn n_inequalities(&self) -> usize {
        4
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            x[4] - 10.0 * x[6],
            x[5] - 10.0 * x[7],
            x[0] - 20.0 * x[6],
            x[1] - 20.0 * x[7]
        ]
    }
}

/// Process synthesis problem 02.
///
/// 7 variables (the last four are binary), 9 inequality constraints.
#[derive(Debug, Clone)]
pub struct ProcessSynthesis02 {
    domain: Domain,
}

impl ProcessSynthesis02 {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: iter::repeat((0.0, 100.0))
                .take(3)
                .chain(iter::repeat((0.0, 1.99)).take(4))
                .collect(),
        }
    }
}

impl Default for ProcessSynthesis02 {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for ProcessSynthesis02 {
    fn name(&self) -> &'static str {
        "Process synthesis 02 problem (Process design and synthesis problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            (1.0 - x[3]).powi(2) + (1.0 - x[4]).powi(2) + (1.0 - x[5]).powi(2)
                - (1.0 + x[6]).ln()
                + (1.0 - x[0]).powi(2)
                + (2.0 - x[1]).powi(2)
                + (3.0 - x[2]).powi(2)
        ]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[3, 4, 5, 6]
    }
}

impl InequalityConstraints for ProcessSynthesis02 {
    fn n_inequalities(&self) -> usize {
        9
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            x.rows(0, 5).sum() - 5.0,
            x[0].powi(2) + x[1].powi(2) + x[2].powi(2) + x[5].powi(3) - 5.5,
            x[0] + x[3] - 1.2,
            x[1] + x[4] - 1.8,
            x[2] + x[5] - 2.5,
            x[0] + x[6] - 1.2,
            x[4].powi(2) + x[1].powi(2) - 1.64,
            x[5].powi(2) + x[2].powi(2) - 4.25,
            x[4].powi(2) + x[2].powi(2) - 4.64
        ]
    }
}

/// Process design problem.
///
/// 5 variables (the last two are integer), 3 inequality constraints.
#[derive(Debug, Clone)]
pub struct ProcessDesign {
    domain: Domain,
    a: [f64; 12],
}

impl ProcessDesign {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                (27.0, 45.0),
                (27.0, 45.0),
                (27.0, 45.0),
                (78.0, 102.99),
                (33.0, 45.99),
            ]
            .into_iter()
            .collect(),
            a: [
                85.334407, 0.0056858, 0.0006262, 0.0022053, 80.51249, 0.0071317, 0.0029955,
                0.0021813, 9.300961, 0.0047026, 0.0012547, 0.0019085,
            ],
        }
    }
}

impl Default for ProcessDesign {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for ProcessDesign {
    fn name(&self) -> &'static str {
        "Process design Problem (Process design and synthesis problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            -5.357854 * x[0].powi(2) + 0.835689 * x[3] * x[2] - 37.29329 * x[3] + 40792.141
        ]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[3, 4]
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("a", Param::from(&self.a[..]));
        paras
    }
}

impl InequalityConstraints for ProcessDesign {
    fn n_inequalities(&self) -> usize {
        3
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let a = &self.a;
        dvector![
            -92.0 + a[2] * x[3] * x[1] + a[0] + a[1] * x[3] * x[2] - a[3] * x[3] * x[2],
            -110.0 + a[6] * x[3] * x[1] + a[4] + a[5] * x[4] * x[2] + a[7] * x[0].powi(2),
            a[8] + a[10] * x[3] * x[0] + a[9] * x[3] * x[2] - 25.0 + a[11] * x[0] * x[1]
        ]
    }
}

/// Multi-product batch plant.
///
/// 10 variables: the numbers of parallel units of three stages (integer),
/// their volumes, the cycle times of two products and their batch sizes.
/// 13 inequality constraints.
#[derive(Debug, Clone)]
pub struct MultiProductBatchPlant {
    domain: Domain,
    s: [[f64; 3]; 2],
    t: [[f64; 3]; 2],
    h: f64,
    alpha: f64,
    beta: f64,
    q1: f64,
    q2: f64,
}

impl MultiProductBatchPlant {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                (1.0, 3.99),
                (1.0, 3.99),
                (1.0, 3.99),
                (250.0, 2500.0),
                (250.0, 2500.0),
                (250.0, 2500.0),
                (20.0 / 3.0, 20.0),
                (16.0 / 3.0, 16.0),
                (40.0, 700.0),
                (10.0, 450.0),
            ]
            .into_iter()
            .collect(),
            s: [[2.0, 3.0, 4.0], [4.0, 6.0, 3.0]],
            t: [[8.0, 20.0, 8.0], [16.0, 4.0, 4.0]],
            h: 6000.0,
            alpha: 250.0,
            beta: 0.6,
            q1: 40000.0,
            q2: 20000.0,
        }
    }
}

impl Default for MultiProductBatchPlant {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for MultiProductBatchPlant {
    fn name(&self) -> &'static str {
        "Multi-product batch plant (Process design and synthesis problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        let (n, v) = (x.rows(0, 3), x.rows(3, 3));
        let cost: f64 = n
            .iter()
            .zip(v.iter())
            .map(|(ni, vi)| ni * vi.powf(self.beta))
            .sum();

        dvector![self.alpha * cost]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[0, 1, 2]
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("S", Param::from(&self.s[..]));
        paras.insert("t", Param::from(&self.t[..]));
        paras.insert("H", Param::from(self.h));
        paras.insert("alpha", Param::from(self.alpha));
        paras.insert("beta", Param::from(self.beta));
        paras.insert("Q1", Param::from(self.q1));
        paras.insert("Q2", Param::from(self.q2));
        paras
    }
}

impl InequalityConstraints for MultiProductBatchPlant {
    fn n_inequalities(&self) -> usize {
        13
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let (n1, n2, n3) = (x[0], x[1], x[2]);
        let (v1, v2, v3) = (x[3], x[4], x[5]);
        let (tl1, tl2) = (x[6], x[7]);
        let (b1, b2) = (x[8], x[9]);
        let (s, t) = (&self.s, &self.t);

        dvector![
            s[0][0] * b1 - v1,
            s[0][1] * b1 - v2,
            s[0][2] * b1 - v3,
            s[1][0] * b2 - v1,
            s[1][1] * b2 - v2,
            s[1][2] * b2 - v3,
            self.q1 * tl1 / b1 + self.q2 * tl2 / b2 - self.h,
            t[0][0] - n1 * tl1,
            t[0][1] - n2 * tl1,
            t[0][2] - n3 * tl1,
            t[1][0] - n1 * tl2,
            t[1][1] - n2 * tl2,
            t[1][2] - n3 * tl2
        ]
    }
}
