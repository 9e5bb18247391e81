//! Industrial chemical processes.

use std::iter;

use nalgebra::{dvector, DVector};

use crate::core::{Domain, EqualityConstraints, InequalityConstraints, Param, Paras, Problem};

/// Heat exchanger network design (case 1).
///
/// 9 variables, 8 equality constraints. A small constant is added inside the
/// logarithms to keep them defined on the boundary of the domain.
#[derive(Debug, Clone)]
pub struct HeatExchangerNetworkDesignCase1 {
    domain: Domain,
}

impl HeatExchangerNetworkDesignCase1 {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                (0.0, 10.0),
                (0.0, 200.0),
                (0.0, 100.0),
                (0.0, 200.0),
                (1000.0, 2000000.0),
                (0.0, 600.0),
                (100.0, 600.0),
                (100.0, 600.0),
                (100.0, 900.0),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl Default for HeatExchangerNetworkDesignCase1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for HeatExchangerNetworkDesignCase1 {
    fn name(&self) -> &'static str {
        "Heat Exchanger Network Design Case 1 (Industrial Chemical Processes)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![35.0 * x[0].powf(0.6) + 35.0 * x[1].powf(0.6)]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }
}

impl EqualityConstraints for HeatExchangerNetworkDesignCase1 {
    fn n_equalities(&self) -> usize {
        8
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            200.0 * x[0] * x[3] - x[2],
            200.0 * x[1] * x[5] - x[4],
            x[2] - 10000.0 * (x[6] - 100.0),
            x[4] - 10000.0 * (300.0 - x[6]),
            x[2] - 10000.0 * (600.0 - x[7]),
            x[4] - 10000.0 * (900.0 - x[8]),
            x[3] * (x[7] - 100.0 + 1e-8).ln() - x[3] * (600.0 - x[6] + 1e-8).ln() - x[7]
                + x[6]
                + 500.0,
            x[5] * (x[8] - x[6] + 1e-8).ln() - x[5] * 600f64.ln() - x[8] + x[6] + 600.0
        ]
    }
}

/// Heat exchanger network design (case 2).
///
/// 11 variables, 9 equality constraints. The cost is the sum of three
/// exchanger areas, each raised to the power of 0.6.
#[derive(Debug, Clone)]
pub struct HeatExchangerNetworkDesignCase2 {
    domain: Domain,
}

impl HeatExchangerNetworkDesignCase2 {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                (1e4, 81.9e4),
                (1e4, 113.1e4),
                (1e4, 205e4),
                (0.0, 5.074e-2),
                (0.0, 5.074e-2),
                (0.0, 5.074e-2),
                (100.0, 200.0),
                (100.0, 300.0),
                (100.0, 300.0),
                (100.0, 300.0),
                (100.0, 400.0),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl Default for HeatExchangerNetworkDesignCase2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for HeatExchangerNetworkDesignCase2 {
    fn name(&self) -> &'static str {
        "Heat Exchanger Network Design Case 2 (Industrial Chemical Processes)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            (x[0] / (120.0 * x[3])).powf(0.6)
                + (x[1] / (80.0 * x[4])).powf(0.6)
                + (x[2] / (40.0 * x[5])).powf(0.6)
        ]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }
}

impl EqualityConstraints for HeatExchangerNetworkDesignCase2 {
    fn n_equalities(&self) -> usize {
        9
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            x[0] - 1e4 * (x[6] - 100.0),
            x[1] - 1e4 * (x[7] - x[6]),
            x[2] - 1e4 * (500.0 - x[7]),
            x[0] - 1e4 * (300.0 - x[8]),
            x[1] - 1e4 * (400.0 - x[9]),
            x[2] - 1e4 * (600.0 - x[10]),
            x[3] * ((x[8] - 100.0).abs() + 1e-8).ln() - x[3] * (300.0 - x[6] + 1e-8).ln()
                - x[8]
                - x[6]
                + 400.0,
            x[4] * ((x[9] - x[6]).abs() + 1e-8).ln()
                - x[4] * ((400.0 - x[7]).abs() + 1e-8).ln()
                - x[9]
                + x[6]
                - x[7]
                + 400.0,
            x[5] * ((x[10] - x[7]).abs() + 1e-8).ln() - x[5] * 100f64.ln() - x[10]
                + x[7]
                + 100.0
        ]
    }
}

/// Haverly's pooling problem.
///
/// 9 variables, 4 equality and 2 inequality constraints. The profit is
/// maximized, so the objective is its negation.
#[derive(Debug, Clone)]
pub struct HaverlyPooling {
    domain: Domain,
}

impl HaverlyPooling {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                (0.0, 100.0),
                (0.0, 200.0),
                (0.0, 100.0),
                (0.0, 100.0),
                (0.0, 100.0),
                (0.0, 100.0),
                (0.0, 200.0),
                (0.0, 100.0),
                (0.0, 200.0),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl Default for HaverlyPooling {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for HaverlyPooling {
    fn name(&self) -> &'static str {
        "Haverly's Pooling Problem (Industrial Chemical Processes)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            -(9.0 * x[0] + 15.0 * x[1] - 6.0 * x[2] - 16.0 * x[3] - 10.0 * (x[4] + x[5]))
        ]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }
}

impl EqualityConstraints for HaverlyPooling {
    fn n_equalities(&self) -> usize {
        4
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            x[6] + x[7] - x[2] - x[3],
            x[0] - x[6] - x[4],
            x[1] - x[7] - x[5],
            x[8] * x[6] + x[8] * x[7] - 3.0 * x[2] - x[3]
        ]
    }
}

impl InequalityConstraints for HaverlyPooling {
    fn n_inequalities(&self) -> usize {
        2
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            x[8] * x[6] + 2.0 * x[4] - 2.5 * x[0],
            x[8] * x[7] + 2.0 * x[5] - 1.5 * x[1]
        ]
    }
}

/// Blending-pooling-separation problem.
///
/// 38 variables, 32 equality constraints.
#[derive(Debug, Clone)]
pub struct BlendingPoolingSeparation {
    domain: Domain,
}

impl BlendingPoolingSeparation {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                90.0, 150.0, 90.0, 150.0, 90.0, 90.0, 150.0, 90.0, 90.0, 90.0, 150.0, 150.0, 90.0,
                90.0, 150.0, 90.0, 150.0, 90.0, 150.0, 90.0, 1.0, 1.2, 1.0, 1.0, 1.0, 0.5, 1.0,
                1.0, 0.5, 0.5, 0.5, 1.2, 0.5, 1.2, 1.2, 0.5, 1.2, 1.2,
            ]
            .into_iter()
            .map(|upper| (0.0, upper))
            .collect(),
        }
    }
}

impl Default for BlendingPoolingSeparation {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for BlendingPoolingSeparation {
    fn name(&self) -> &'static str {
        "Blending-Pooling-Separation problem (Industrial Chemical Processes)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![0.9979 + 0.00432 * x[4] + 0.01517 * x[12]]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }
}

impl EqualityConstraints for BlendingPoolingSeparation {
    fn n_equalities(&self) -> usize {
        32
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let third = 1.0 / 3.0;
        let mut hx = DVector::zeros(32);

        hx[0] = x[0] + x[1] + x[2] + x[3] - 300.0;
        hx[1] = x[5] - x[6] - x[7];
        hx[2] = x[8] - x[9] - x[10] - x[11];
        hx[3] = x[13] - x[14] - x[15] - x[16];
        hx[4] = x[17] - x[18] - x[19];
        hx[5] = x[4] * x[20] - x[5] * x[21] - x[8] * x[22];
        hx[6] = x[4] * x[23] - x[5] * x[24] - x[8] * x[25];
        hx[7] = x[4] * x[26] - x[5] * x[27] - x[8] * x[28];
        hx[8] = x[12] * x[29] - x[13] * x[30] - x[17] * x[31];
        hx[9] = x[12] * x[32] - x[13] * x[33] - x[17] * x[34];
        hx[10] = x[12] * x[35] - x[13] * x[36] - x[17] * x[36];
        hx[11] = third * x[0] + x[14] * x[30] - x[4] * x[20];
        hx[12] = third * x[0] + x[14] * x[33] - x[4] * x[23];
        hx[13] = third * x[0] + x[14] * x[36] - x[4] * x[26];
        hx[14] = third * x[1] + x[9] * x[22] - x[12] * x[29];
        hx[15] = third * x[1] + x[9] * x[25] - x[12] * x[32];
        hx[16] = third * x[1] + x[9] * x[28] - x[12] * x[35];
        hx[17] = third * x[2] + x[6] * x[21] + x[10] * x[22] + x[15] * x[30] + x[18] * x[31]
            - 30.0;
        hx[18] = third * x[2] + x[6] * x[24] + x[10] * x[25] + x[15] * x[33] + x[18] * x[34]
            - 50.0;
        hx[19] = third * x[2] + x[6] * x[27] + x[10] * x[28] + x[15] * x[36] + x[18] * x[37]
            - 30.0;
        hx[20] = x[20] + x[23] + x[26] - 1.0;
        hx[21] = x[21] + x[24] + x[27] - 1.0;
        hx[22] = x[22] + x[25] + x[28] - 1.0;
        hx[23] = x[29] + x[32] + x[35] - 1.0;
        hx[24] = x[30] + x[33] + x[36] - 1.0;
        hx[25] = x[31] + x[34] + x[37] - 1.0;
        hx[26] = x[24];
        hx[27] = x[27];
        hx[28] = x[22];
        hx[29] = x[36];
        hx[30] = x[31];
        hx[31] = x[34];

        hx
    }
}

/// Propane, isobutane, n-butane nonsharp separation.
///
/// 48 variables, 38 equality constraints.
#[derive(Debug, Clone)]
pub struct PropaneIsobutaneNButaneNonsharpSeparation {
    domain: Domain,
    c: [[f64; 2]; 6],
}

impl PropaneIsobutaneNButaneNonsharpSeparation {
    /// Initializes the problem.
    pub fn new() -> Self {
        let middle = [
            (0.85, 1.0),
            (0.0, 30.0),
            (0.85, 1.0),
            (0.0, 30.0),
            (0.85, 1.0),
            (0.0, 30.0),
            (0.0, 1.0),
            (0.85, 1.0),
            (0.0, 30.0),
            (0.0, 1.0),
            (0.0, 1.0),
            (0.0, 30.0),
            (0.0, 1.0),
            (0.0, 30.0),
        ];

        let domain = iter::repeat((0.0, 150.0))
            .take(20)
            .chain(iter::repeat((0.0, 1.0)).take(3))
            .chain(middle)
            .chain(iter::repeat((0.0, 1.0)).take(11))
            .collect();

        Self {
            domain,
            c: [
                [0.23947, 0.75835],
                [-0.0139904, -0.0661588],
                [0.0093514, 0.0338147],
                [0.0077308, 0.0373349],
                [-0.0005719, 0.0016371],
                [0.0042656, 0.0288996],
            ],
        }
    }
}

impl Default for PropaneIsobutaneNButaneNonsharpSeparation {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for PropaneIsobutaneNButaneNonsharpSeparation {
    fn name(&self) -> &'static str {
        "Propane, Isobutane, n-Butane Nonsharp Separation (Industrial Chemical Processes)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        let c = &self.c;
        dvector![
            c[0][0]
                + (c[1][0] + c[2][0] * x[23] + c[3][0] * x[27] + c[4][0] * x[32] + c[5][0] * x[33])
                    * x[4]
                + c[0][1]
                + (c[1][1] + c[2][1] * x[25] + c[3][1] * x[30] + c[4][1] * x[37] + c[5][1] * x[38])
                    * x[12]
        ]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("c", Param::from(&self.c[..]));
        paras
    }
}

impl EqualityConstraints for PropaneIsobutaneNButaneNonsharpSeparation {
    fn n_equalities(&self) -> usize {
        38
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let third = 1.0 / 3.0;
        let mut hx = DVector::zeros(38);

        hx[0] = x[0] + x[1] + x[2] + x[3] - 300.0;
        hx[1] = x[5] - x[6] - x[7];
        hx[2] = x[8] - x[9] - x[10] - x[11];
        hx[3] = x[13] - x[14] - x[15] - x[16];
        hx[4] = x[17] - x[18] - x[19];
        hx[5] = x[5] * x[20] - x[23] * x[24];
        hx[6] = x[13] * x[21] - x[25] * x[26];
        hx[7] = x[8] * x[22] - x[27] * x[28];
        hx[8] = x[17] * x[29] - x[30] * x[31];
        hx[9] = x[24] - x[4] * x[32];
        hx[10] = x[28] - x[4] * x[33];
        hx[11] = x[34] - x[4] * x[35];
        hx[12] = x[36] - x[12] * x[37];
        hx[13] = x[26] - x[12] * x[38];
        hx[14] = x[31] - x[12] * x[39];
        hx[15] = x[24] - x[5] * x[20] - x[8] * x[40];
        hx[16] = x[28] - x[5] * x[41] - x[8] * x[22];
        hx[17] = x[34] - x[5] * x[42] - x[8] * x[43];
        hx[18] = x[36] - x[13] * x[44] - x[17] * x[45];
        hx[19] = x[26] - x[13] * x[21] - x[17] * x[46];
        hx[20] = x[31] - x[13] * x[47] - x[17] * x[29];
        hx[21] = third * x[0] + x[14] * x[44] - x[24];
        hx[22] = third * x[0] + x[14] * x[21] - x[28];
        hx[23] = third * x[0] + x[14] * x[47] - x[34];
        hx[24] = third * x[1] + x[9] * x[40] - x[36];
        hx[25] = third * x[1] + x[9] * x[22] - x[26];
        hx[26] = third * x[1] + x[9] * x[43] - x[31];
        hx[27] = third * x[2] + x[6] * x[20] + x[10] * x[40] + x[15] * x[44] + x[18] * x[45]
            - 30.0;
        hx[28] = third * x[2] + x[6] * x[41] + x[10] * x[22] + x[15] * x[21] + x[18] * x[46]
            - 50.0;
        hx[29] = third * x[2] + x[6] * x[42] + x[10] * x[43] + x[15] * x[47] + x[18] * x[29]
            - 30.0;
        hx[30] = x[32] + x[33] + x[35] - 1.0;
        hx[31] = x[20] + x[41] + x[42] - 1.0;
        hx[32] = x[40] + x[22] + x[43] - 1.0;
        hx[33] = x[37] + x[38] + x[39] - 1.0;
        hx[34] = x[44] + x[21] + x[47] - 1.0;
        hx[35] = x[45] + x[46] + x[29] - 1.0;
        hx[36] = x[42];
        hx[37] = x[45];

        hx
    }
}

/// Optimal operation of alkylation unit.
///
/// 7 variables, 14 inequality constraints.
#[derive(Debug, Clone)]
pub struct OptimalOperationAlkylationUnit {
    domain: Domain,
}

impl OptimalOperationAlkylationUnit {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                (1000.0, 2000.0),
                (0.0, 100.0),
                (2000.0, 4000.0),
                (0.0, 100.0),
                (0.0, 100.0),
                (0.0, 20.0),
                (0.0, 200.0),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl Default for OptimalOperationAlkylationUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for OptimalOperationAlkylationUnit {
    fn name(&self) -> &'static str {
        "Optimal Operation of Alkylation Unit (Industrial Chemical Processes)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            -1.715 * x[0] - 0.035 * x[0] * x[5] - 4.0565 * x[2] - 10.0 * x[1]
                + 0.063 * x[2] * x[4]
        ]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }
}

impl InequalityConstraints for OptimalOperationAlkylationUnit {
    fn n_inequalities(&self) -> usize {
        14
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let mut gx = DVector::zeros(14);

        gx[0] = 0.0059553571 * x[5].powi(2) * x[0] + 0.88392857 * x[2]
            - 0.1175625 * x[5] * x[0]
            - x[0];
        gx[1] = 1.1088 * x[0] + 0.1303533 * x[0] * x[5] - 0.0066033 * x[0] * x[5].powi(2) - x[2];
        gx[2] = 6.66173269 * x[5].powi(2) + 172.39878 * x[4]
            - 56.596669 * x[3]
            - 191.20592 * x[5]
            - 10000.0;
        gx[3] = 1.08702 * x[5] + 0.32175 * x[3] - 0.03762 * x[5].powi(2) - x[4] + 56.85075;
        gx[4] = 0.006198 * x[6] * x[3] * x[2] + 2462.3121 * x[1]
            - 25.125634 * x[1] * x[3]
            - x[2] * x[3];
        gx[5] = 161.18996 * x[2] * x[3] + 5000.0 * x[1] * x[3]
            - 489510.0 * x[1]
            - x[2] * x[3] * x[6];
        gx[6] = 0.33 * x[6] - x[4] + 44.333333;
        gx[7] = 0.022556 * x[4] - 0.007595 * x[6] - 1.0;
        gx[8] = 0.00061 * x[2] - 0.0005 * x[0] - 1.0;
        gx[9] = 0.819672 * x[0] - x[2] + 0.819672;
        gx[10] = 24500.0 * x[1] - 250.0 * x[1] * x[3] - x[2] * x[3];
        gx[11] = 1020.4082 * x[3] * x[1] + 1.2244898 * x[2] * x[3] - 100000.0 * x[1];
        gx[12] = 6.25 * x[0] * x[5] + 6.25 * x[0] - 7.625 * x[2] - 100000.0;
        gx[13] = 1.22 * x[2] - x[5] * x[0] - x[0] + 1.0;

        gx
    }
}

/// Reactor network design.
///
/// 6 variables, 4 equality and 1 inequality constraints. The concentration
/// of the product is maximized, so the objective is its negation.
#[derive(Debug, Clone)]
pub struct ReactorNetworkDesign {
    domain: Domain,
    k1: f64,
    k2: f64,
    k3: f64,
    k4: f64,
}

impl ReactorNetworkDesign {
    /// Initializes the problem.
    pub fn new() -> Self {
        let k1 = 0.09755988;
        let k3 = 0.0391908;

        Self {
            domain: [
                (0.0, 1.0),
                (0.0, 1.0),
                (0.0, 1.0),
                (0.0, 1.0),
                (0.00001, 16.0),
                (0.00001, 16.0),
            ]
            .into_iter()
            .collect(),
            k1,
            k2: 0.99 * k1,
            k3,
            k4: 0.9 * k3,
        }
    }
}

impl Default for ReactorNetworkDesign {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for ReactorNetworkDesign {
    fn name(&self) -> &'static str {
        "Reactor Network Design (Industrial Chemical Processes)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![-x[3]]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("k1", Param::from(self.k1));
        paras.insert("k2", Param::from(self.k2));
        paras.insert("k3", Param::from(self.k3));
        paras.insert("k4", Param::from(self.k4));
        paras
    }
}

impl EqualityConstraints for ReactorNetworkDesign {
    fn n_equalities(&self) -> usize {
        4
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            x[0] + self.k1 * x[1] * x[4] - 1.0,
            x[1] - x[0] + self.k2 * x[1] * x[5],
            x[2] + x[0] + self.k3 * x[2] * x[4] - 1.0,
            x[3] - x[2] + x[1] - x[0] + self.k4 * x[3] * x[5]
        ]
    }
}

impl InequalityConstraints for ReactorNetworkDesign {
    fn n_inequalities(&self) -> usize {
        1
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[4].sqrt() + x[5].sqrt() - 4.0]
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::ProblemExt;

    #[test]
    fn heat_exchanger_case1() {
        let f = HeatExchangerNetworkDesignCase1::new();
        assert_eq!(f.n_dims(), 9);
        assert_eq!(f.n_eq_cons(), 8);
        assert_eq!(f.n_ineq_cons(), 0);

        let x = dvector![1.0, 1.0, 50.0, 100.0, 1000.0, 300.0, 200.0, 300.0, 400.0];
        assert_relative_eq!(f.objectives(&x)[0], 70.0);

        let hx = f.eq_cons(&x);
        assert_relative_eq!(hx[0], 19950.0);
        assert_relative_eq!(hx[2], 50.0 - 1e6);
    }

    #[test]
    fn heat_exchanger_case2_cost() {
        let f = HeatExchangerNetworkDesignCase2::new();
        assert_eq!(f.n_dims(), 11);
        assert_eq!(f.n_eq_cons(), 9);

        let x = dvector![
            120.0, 80.0, 40.0, 1.0, 1.0, 1.0, 150.0, 200.0, 200.0, 200.0, 200.0
        ];
        assert_relative_eq!(f.objectives(&x)[0], 3.0);
    }

    #[test]
    fn haverly_pooling() {
        let f = HaverlyPooling::new();
        assert_eq!(f.n_cons(), 6);

        let x = dvector![0.0, 100.0, 0.0, 100.0, 0.0, 0.0, 0.0, 100.0, 1.0];
        assert_relative_eq!(f.objectives(&x)[0], -(1500.0 - 1600.0));

        let cons = f.cons(&x).unwrap();
        assert_eq!(cons.len(), 6);
        // All material balances hold.
        assert!(cons.iter().take(4).all(|&g| g <= 0.0));
        assert_relative_eq!(cons[5], 100.0 - 150.0);
    }

    #[test]
    fn blending_pooling_separation_layout() {
        let f = BlendingPoolingSeparation::new();
        assert_eq!(f.n_dims(), 38);
        assert_eq!(f.n_eq_cons(), 32);
        assert_eq!(f.ub()[21], 1.2);
        assert_eq!(f.ub()[37], 1.2);

        let x = DVector::zeros(38);
        assert_relative_eq!(f.objectives(&x)[0], 0.9979);
        assert_relative_eq!(f.eq_cons(&x)[0], -300.0);
    }

    #[test]
    fn nonsharp_separation_layout() {
        let f = PropaneIsobutaneNButaneNonsharpSeparation::new();
        assert_eq!(f.n_dims(), 48);
        assert_eq!(f.n_eq_cons(), 38);
        assert_eq!(f.bounds()[19], (0.0, 150.0));
        assert_eq!(f.bounds()[23], (0.85, 1.0));
        assert_eq!(f.bounds()[36], (0.0, 30.0));
        assert_eq!(f.bounds()[47], (0.0, 1.0));

        let x = DVector::zeros(48);
        assert_relative_eq!(f.objectives(&x)[0], 0.23947 + 0.75835);
    }

    #[test]
    fn alkylation_unit() {
        let f = OptimalOperationAlkylationUnit::new();
        assert_eq!(f.n_ineq_cons(), 14);

        let x = dvector![1000.0, 0.0, 2000.0, 0.0, 0.0, 0.0, 0.0];
        assert_relative_eq!(f.objectives(&x)[0], -1715.0 - 8113.0);

        let gx = f.ineq_cons(&x);
        assert_relative_eq!(gx[6], 44.333333);
        assert_relative_eq!(gx[13], 1.22 * 2000.0 - 999.0);
    }

    #[test]
    fn reactor_network() {
        let f = ReactorNetworkDesign::new();
        assert_eq!(f.n_eq_cons(), 4);
        assert_eq!(f.n_ineq_cons(), 1);
        assert_eq!(f.paras()["k2"], Param::from(0.99 * 0.09755988));

        let x = dvector![1.0, 0.0, 0.0, 0.5, 4.0, 4.0];
        assert_relative_eq!(f.objectives(&x)[0], -0.5);
        assert_relative_eq!(f.ineq_cons(&x)[0], 0.0);
        assert_relative_eq!(f.eq_cons(&x)[0], 0.0);
    }
}
