//! Mechanical design problems.

use std::f64::consts::{PI, SQRT_2};

use nalgebra::{dvector, DVector};

use crate::core::{Domain, EqualityConstraints, InequalityConstraints, Param, Paras, Problem};

/// Weight minimization of a speed reducer.
///
/// 7 variables, 11 inequality constraints.
#[derive(Debug, Clone)]
pub struct WeightMinimizationSpeedReducer {
    domain: Domain,
}

impl WeightMinimizationSpeedReducer {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                (2.6, 3.6),
                (0.7, 0.8),
                (17.0, 28.0),
                (7.3, 8.3),
                (7.3, 8.3),
                (2.9, 3.9),
                (5.0, 5.5),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl Default for WeightMinimizationSpeedReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for WeightMinimizationSpeedReducer {
    fn name(&self) -> &'static str {
        "Weight minimization of a speed reducer (Mechanical design problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            0.7854 * x[0] * x[1].powi(2) * (3.3333 * x[2].powi(2) + 14.9334 * x[2] - 43.0934)
                - 1.508 * x[0] * (x[5].powi(2) + x[6].powi(2))
                + 7.477 * (x[5].powi(3) + x[6].powi(3))
                + 0.7854 * (x[3] * x[5].powi(2) + x[4] * x[6].powi(2))
        ]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }
}

impl InequalityConstraints for WeightMinimizationSpeedReducer {
    fn n_inequalities(&self) -> usize {
        11
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            -x[0] * x[1].powi(2) * x[2] + 27.0,
            -x[0] * x[1].powi(2) * x[2].powi(2) + 397.5,
            -x[1] * x[5].powi(4) * x[2] * x[3].powi(-3) + 1.93,
            -x[1] * x[6].powi(4) * x[2] / x[4].powi(3) + 1.93,
            10.0 * x[5].powi(-3) * (16.91e6 + (745.0 * x[3] / (x[1] * x[2])).powi(2)).sqrt()
                - 1100.0,
            10.0 * x[6].powi(-3) * (157.5e6 + (745.0 * x[4] / (x[1] * x[2])).powi(2)).sqrt()
                - 850.0,
            x[1] * x[2] - 40.0,
            -x[0] / x[1] + 5.0,
            x[0] / x[1] - 12.0,
            1.5 * x[5] - x[3] + 1.9,
            1.1 * x[6] - x[4] + 1.9
        ]
    }
}

/// Optimal design of industrial refrigeration system.
///
/// 14 variables, 15 inequality constraints.
#[derive(Debug, Clone)]
pub struct IndustrialRefrigerationSystem {
    domain: Domain,
}

impl IndustrialRefrigerationSystem {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: (0..14).map(|_| (0.001, 5.0)).collect(),
        }
    }
}

impl Default for IndustrialRefrigerationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for IndustrialRefrigerationSystem {
    fn name(&self) -> &'static str {
        "Optimal design of industrial refrigeration system (Mechanical design problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            63098.88 * x[1] * x[3] * x[11]
                + 5441.5 * x[1].powi(2) * x[11]
                + 115055.5 * x[1].powf(1.664) * x[5]
                + 6172.27 * x[1].powi(2) * x[5]
                + 63098.88 * x[0] * x[2] * x[10]
                + 5441.5 * x[0].powi(2) * x[10]
                + 115055.5 * x[0].powf(1.664) * x[4]
                + 6172.27 * x[0].powi(2) * x[4]
                + 140.53 * x[0] * x[10]
                + 281.29 * x[2] * x[10]
                + 70.26 * x[0].powi(2)
                + 281.29 * x[0] * x[2]
                + 281.29 * x[2].powi(2)
                + 14437.0 * x[7].powf(1.8812) * x[11].powf(0.3424) * x[9] / x[13]
                    * x[0].powi(2)
                    * x[6]
                    / x[8]
                + 20470.2 * x[6].powf(2.893) * x[10].powf(0.316) * x[0].powi(2)
        ]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }
}

impl InequalityConstraints for IndustrialRefrigerationSystem {
    fn n_inequalities(&self) -> usize {
        15
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            1.524 / x[6] - 1.0,
            1.524 / x[7] - 1.0,
            0.07789 * x[0] - 2.0 / x[6] * x[8] - 1.0,
            7.05305 / x[8] * x[0].powi(2) * x[9] / x[7] / x[1] / x[13] - 1.0,
            0.0833 / x[12] * x[13] - 1.0,
            0.04771 * x[9] * x[7].powf(1.8812) * x[11].powf(0.3424) - 1.0,
            0.0488 * x[8] * x[6].powf(1.893) * x[10].powf(0.316) - 1.0,
            0.0099 * x[0] / x[2] - 1.0,
            0.0193 * x[1] / x[3] - 1.0,
            0.0298 * x[0] / x[4] - 1.0,
            47.136 * x[1].powf(0.333) / x[9] * x[11] - 1.333 * x[7] * x[12].powf(2.1195)
                + 62.08 * x[12].powf(2.1195) * x[7].powf(0.2) / (x[11] * x[9])
                - 1.0,
            0.056 * x[1] / x[5] - 1.0,
            2.0 / x[8] - 1.0,
            2.0 / x[9] - 1.0,
            x[11] / x[10] - 1.0
        ]
    }
}

/// Tension/compression spring design.
///
/// 3 variables (wire diameter, mean coil diameter and the number of active
/// coils), 4 inequality constraints.
#[derive(Debug, Clone)]
pub struct TensionCompressionSpringDesign {
    domain: Domain,
}

impl TensionCompressionSpringDesign {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [(0.05, 2.0), (0.25, 1.3), (2.0, 15.0)].into_iter().collect(),
        }
    }
}

impl Default for TensionCompressionSpringDesign {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for TensionCompressionSpringDesign {
    fn name(&self) -> &'static str {
        "Tension/compression spring design (Mechanical design problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![x[0].powi(2) * x[1] * (x[2] + 2.0)]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }
}

impl InequalityConstraints for TensionCompressionSpringDesign {
    fn n_inequalities(&self) -> usize {
        4
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![
            1.0 - (x[1].powi(3) * x[2]) / (71785.0 * x[0].powi(4)),
            (4.0 * x[1].powi(2) - x[0] * x[1])
                / (12566.0 * (x[1] * x[0].powi(3) - x[0].powi(4)))
                + 1.0 / (5108.0 * x[0].powi(2))
                - 1.0,
            1.0 - 140.45 * x[0] / (x[1].powi(2) * x[2]),
            (x[0] + x[1]) / 1.5 - 1.0
        ]
    }
}

/// Pressure vessel design.
///
/// 4 variables: the thicknesses of the shell and the head (integer multiples
/// of 0.0625 inch), the inner radius and the length of the cylindrical
/// section. 4 inequality constraints.
#[derive(Debug, Clone)]
pub struct PressureVesselDesign {
    domain: Domain,
}

impl PressureVesselDesign {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [(1.0, 99.99), (1.0, 99.99), (10.0, 200.0), (10.0, 200.0)]
                .into_iter()
                .collect(),
        }
    }
}

impl Default for PressureVesselDesign {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for PressureVesselDesign {
    fn name(&self) -> &'static str {
        "Pressure vessel design (Mechanical design problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        let z1 = 0.0625 * x[0];
        let z2 = 0.0625 * x[1];

        dvector![
            0.6224 * z1 * x[2] * x[3]
                + 1.7781 * z2 * x[2].powi(2)
                + 3.1661 * z1.powi(2) * x[3]
                + 19.84 * z1.powi(2) * x[2]
        ]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[0, 1]
    }
}

impl InequalityConstraints for PressureVesselDesign {
    fn n_inequalities(&self) -> usize {
        4
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let z1 = 0.0625 * x[0];
        let z2 = 0.0625 * x[1];

        dvector![
            0.00954 * x[2] - z2,
            0.0193 * x[2] - z1,
            x[3] - 240.0,
            1296000.0 - PI * x[2].powi(2) * x[3] - 4.0 / 3.0 * PI * x[2].powi(3)
        ]
    }
}

/// Welded beam design.
///
/// 4 variables, 5 inequality constraints on shear stress, bending stress,
/// geometry, deflection and buckling load.
#[derive(Debug, Clone)]
pub struct WeldedBeamDesign {
    domain: Domain,
    p: f64,
    l: f64,
    delta_max: f64,
    e: f64,
    g: f64,
    tau_max: f64,
    sigma_max: f64,
}

impl WeldedBeamDesign {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [(0.125, 2.0), (0.1, 10.0), (0.1, 10.0), (0.1, 2.0)]
                .into_iter()
                .collect(),
            p: 6000.0,
            l: 14.0,
            delta_max: 0.25,
            e: 30e6,
            g: 12e6,
            tau_max: 13600.0,
            sigma_max: 30000.0,
        }
    }
}

impl Default for WeldedBeamDesign {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for WeldedBeamDesign {
    fn name(&self) -> &'static str {
        "Welded beam design (Mechanical design problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![1.10471 * x[0].powi(2) * x[1] + 0.04811 * x[2] * x[3] * (14.0 + x[1])]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("P", Param::from(self.p));
        paras.insert("L", Param::from(self.l));
        paras.insert("delta_max", Param::from(self.delta_max));
        paras.insert("E", Param::from(self.e));
        paras.insert("G", Param::from(self.g));
        paras.insert("tau_max", Param::from(self.tau_max));
        paras.insert("sigma_max", Param::from(self.sigma_max));
        paras
    }
}

impl InequalityConstraints for WeldedBeamDesign {
    fn n_inequalities(&self) -> usize {
        5
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let (p, l, e) = (self.p, self.l, self.e);

        let pc = 4.013 * e * (x[2].powi(2) * x[3].powi(6) / 30.0).sqrt() / l.powi(2)
            * (1.0 - x[2] / (2.0 * l) * (e / (4.0 * self.g)).sqrt());
        let sigma = 6.0 * p * l / (x[3] * x[2].powi(2));
        let delta = 6.0 * p * l.powi(3) / (e * x[2].powi(2) * x[3]);

        let j = 2.0 * (SQRT_2 * x[0] * x[1] * (x[1].powi(2) / 4.0 + (x[0] + x[2]).powi(2) / 4.0));
        let r = (x[1].powi(2) / 4.0 + (x[0] + x[2]).powi(2) / 4.0).sqrt();
        let m = p * (l + x[1] / 2.0);

        // Primary and secondary shear stress.
        let tau1 = p / (SQRT_2 * x[0] * x[1]);
        let tau2 = m * r / j;
        let tau = (tau1.powi(2) + 2.0 * tau1 * tau2 * x[1] / (2.0 * r) + tau2.powi(2)).sqrt();

        dvector![
            tau - self.tau_max,
            sigma - self.sigma_max,
            x[0] - x[3],
            delta - self.delta_max,
            p - pc
        ]
    }
}

/// Three-bar truss design.
///
/// 2 variables (cross-section areas), 3 inequality constraints on the stress
/// in the bars.
#[derive(Debug, Clone)]
pub struct ThreeBarTrussDesign {
    domain: Domain,
    l: f64,
    p: f64,
    sigma: f64,
}

impl ThreeBarTrussDesign {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [(0.0, 1.0), (0.0, 1.0)].into_iter().collect(),
            l: 100.0,
            p: 2.0,
            sigma: 2.0,
        }
    }
}

impl Default for ThreeBarTrussDesign {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for ThreeBarTrussDesign {
    fn name(&self) -> &'static str {
        "Three-bar truss design problem (Mechanical design problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![(2.0 * SQRT_2 * x[0] + x[1]) * self.l]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("l", Param::from(self.l));
        paras.insert("P", Param::from(self.p));
        paras.insert("sigma", Param::from(self.sigma));
        paras
    }
}

impl InequalityConstraints for ThreeBarTrussDesign {
    fn n_inequalities(&self) -> usize {
        3
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let denom = SQRT_2 * x[0].powi(2) + 2.0 * x[0] * x[1];

        dvector![
            (SQRT_2 * x[0] + x[1]) / denom * self.p - self.sigma,
            x[1] / denom * self.p - self.sigma,
            1.0 / (SQRT_2 * x[1] + x[0]) * self.p - self.sigma
        ]
    }
}

/// Multiple disk clutch brake design.
///
/// 5 variables (inner and outer radius, disc thickness, actuating force and
/// the number of friction surfaces), 8 inequality constraints.
#[derive(Debug, Clone)]
pub struct MultipleDiskClutchBrakeDesign {
    domain: Domain,
    mf: f64,
    ms: f64,
    iz: f64,
    n: f64,
    t_max: f64,
    s: f64,
    delta: f64,
    v_sr_max: f64,
    rho: f64,
    p_max: f64,
    mu: f64,
    l_max: f64,
    delta_r: f64,
}

impl MultipleDiskClutchBrakeDesign {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                (60.0, 80.99),
                (90.0, 110.99),
                (1.0, 3.99),
                (0.0, 1000.99),
                (2.0, 9.99),
            ]
            .into_iter()
            .collect(),
            mf: 3.0,
            ms: 40.0,
            iz: 55.0,
            n: 250.0,
            t_max: 15.0,
            s: 1.5,
            delta: 0.5,
            v_sr_max: 10.0,
            rho: 0.0000078,
            p_max: 1.0,
            mu: 0.6,
            l_max: 30.0,
            delta_r: 20.0,
        }
    }
}

impl Default for MultipleDiskClutchBrakeDesign {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for MultipleDiskClutchBrakeDesign {
    fn name(&self) -> &'static str {
        "Multiple disk clutch brake design problem (Mechanical design problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![PI * (x[1].powi(2) - x[0].powi(2)) * x[2] * (x[4] + 1.0) * self.rho]
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("Mf", Param::from(self.mf));
        paras.insert("Ms", Param::from(self.ms));
        paras.insert("Iz", Param::from(self.iz));
        paras.insert("n", Param::from(self.n));
        paras.insert("Tmax", Param::from(self.t_max));
        paras.insert("s", Param::from(self.s));
        paras.insert("delta", Param::from(self.delta));
        paras.insert("Vsrmax", Param::from(self.v_sr_max));
        paras.insert("rho", Param::from(self.rho));
        paras.insert("pmax", Param::from(self.p_max));
        paras.insert("mu", Param::from(self.mu));
        paras.insert("Lmax", Param::from(self.l_max));
        paras.insert("delR", Param::from(self.delta_r));
        paras
    }
}

impl InequalityConstraints for MultipleDiskClutchBrakeDesign {
    fn n_inequalities(&self) -> usize {
        8
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let (ri, ro) = (x[0], x[1]);

        let r_sr = 2.0 / 3.0 * (ro.powi(3) - ri.powi(3)) / (ro.powi(2) * ri.powi(2));
        let v_sr = PI * r_sr * self.n / 30.0;
        let area = PI * (ro.powi(2) - ri.powi(2));
        let p_rz = x[3] / area;
        let w = PI * self.n / 30.0;
        let mh = 2.0 / 3.0 * self.mu * x[3] * x[4] * (ro.powi(3) - ri.powi(3))
            / (ro.powi(2) - ri.powi(2));
        let t = self.iz * w / (mh + self.mf);

        dvector![
            p_rz - self.p_max,
            p_rz * v_sr - self.p_max * self.v_sr_max,
            ri + self.delta_r - ro,
            (x[4] + 1.0) * (x[2] + self.delta) - self.l_max,
            self.s * self.ms - mh,
            -t,
            v_sr - self.v_sr_max,
            t - self.t_max
        ]
    }
}

/// Planetary gear train design optimization.
///
/// 9 integer variables: the numbers of teeth of six gears, the number of
/// planets and the indices of the modules of two gear pairs. 1 equality and
/// 10 inequality constraints.
///
/// A module index outside of the table of modules produces NaN. When the
/// angle between the planets is undefined, the corresponding constraint is
/// set to a large violation.
#[derive(Debug, Clone)]
pub struct PlanetaryGearTrainDesign {
    domain: Domain,
    modules: [f64; 6],
    d_max: f64,
    delta22: f64,
    delta33: f64,
    delta55: f64,
    delta35: f64,
    delta34: f64,
    delta56: f64,
}

/// Constraint value used when the angle between the planets is undefined.
const UNDEFINED_ANGLE_VIOLATION: f64 = 1e6;

impl PlanetaryGearTrainDesign {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [
                (17.0, 96.99),
                (14.0, 54.99),
                (14.0, 51.99),
                (17.0, 46.99),
                (14.0, 51.99),
                (48.0, 124.99),
                (3.0, 5.99),
                (0.0, 5.99),
                (0.0, 5.99),
            ]
            .into_iter()
            .collect(),
            modules: [1.75, 2.0, 2.25, 2.5, 2.75, 3.0],
            d_max: 220.0,
            delta22: 0.5,
            delta33: 0.5,
            delta55: 0.5,
            delta35: 0.5,
            delta34: 0.5,
            delta56: 0.5,
        }
    }

    fn module(&self, index: f64) -> f64 {
        if index >= 0.0 {
            self.modules
                .get(index as usize)
                .copied()
                .unwrap_or(f64::NAN)
        } else {
            f64::NAN
        }
    }
}

impl Default for PlanetaryGearTrainDesign {
    fn default() -> Self {
        Self::new()
    }
}

/// Floating point remainder with the sign of the divisor.
fn remainder(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

impl Problem for PlanetaryGearTrainDesign {
    fn name(&self) -> &'static str {
        "Planetary gear train design optimization problem (Mechanical design problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        let (n1, n2, n3, n4, n6) = (x[0], x[1], x[2], x[3], x[5]);

        let i1 = n6 / n4;
        let i2 = n6 * (n1 * n3 + n2 * n4) / (n1 * n3 * (n6 - n4));
        let i_r = -(n2 * n6 / (n1 * n3));

        dvector![(i1 - 3.11).max(i2 - 1.84).max(i_r + 3.11)]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn integer_dims(&self) -> &[usize] {
        &[0, 1, 2, 3, 4, 5, 6, 7, 8]
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("mind", Param::from(&self.modules[..]));
        paras.insert("Dmax", Param::from(self.d_max));
        paras.insert("dlt22", Param::from(self.delta22));
        paras.insert("dlt33", Param::from(self.delta33));
        paras.insert("dlt55", Param::from(self.delta55));
        paras.insert("dlt35", Param::from(self.delta35));
        paras.insert("dlt34", Param::from(self.delta34));
        paras.insert("dlt56", Param::from(self.delta56));
        paras
    }
}

impl EqualityConstraints for PlanetaryGearTrainDesign {
    fn n_equalities(&self) -> usize {
        1
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let (n4, n6, p) = (x[3], x[5], x[6]);
        dvector![remainder(n6 - n4, p)]
    }
}

impl InequalityConstraints for PlanetaryGearTrainDesign {
    fn n_inequalities(&self) -> usize {
        10
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let (n1, n2, n3, n4, n5, n6, p) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6]);
        let m1 = self.module(x[7]);
        let m2 = self.module(x[8]);
        let d_max = self.d_max;

        let beta = (((n6 - n3).powi(2) + (n4 + n5).powi(2) - (n3 + n5).powi(2))
            / (2.0 * (n6 - n3) * (n4 + n5)))
            .acos();

        let g8 = if beta.is_nan() {
            UNDEFINED_ANGLE_VIOLATION
        } else {
            (n3 + n5 + 2.0 + self.delta35).powi(2)
                - ((n6 - n3).powi(2) + (n4 + n5).powi(2)
                    - 2.0 * (n6 - n3) * (n4 + n5) * (2.0 * PI / p - beta).cos())
        };

        dvector![
            m2 * (n6 + 2.5) - d_max,
            m1 * (n1 + n2) + m1 * (n2 + 2.0) - d_max,
            m2 * (n4 + n5) + m2 * (n5 + 2.0) - d_max,
            (m1 * (n1 + n2) - m2 * (n6 - n3)).abs() - m1 - m2,
            -((n1 + n2) * (PI / p).sin() - n2 - 2.0 - self.delta22),
            -((n6 - n3) * (PI / p).sin() - n3 - 2.0 - self.delta33),
            -((n4 + n5) * (PI / p).sin() - n5 - 2.0 - self.delta55),
            g8,
            -(n6 - 2.0 * n3 - n4 - 4.0 - 2.0 * self.delta34),
            -(n6 - n4 - 2.0 * n5 - 4.0 - 2.0 * self.delta56)
        ]
    }
}

/// Step-cone pulley.
///
/// 5 variables (diameters of the four steps and the width of the belt, in
/// millimeters), 3 equality constraints on the belt length and 8 inequality
/// constraints on tension ratio and transmitted power.
#[derive(Debug, Clone)]
pub struct StepConePulley {
    domain: Domain,
    n: f64,
    speeds: [f64; 4],
    rho: f64,
    a: f64,
    mu: f64,
    s: f64,
    t: f64,
}

impl StepConePulley {
    /// Initializes the problem.
    pub fn new() -> Self {
        Self {
            domain: [(0.0, 60.0), (0.0, 60.0), (0.0, 90.0), (0.0, 90.0), (0.0, 90.0)]
                .into_iter()
                .collect(),
            n: 350.0,
            speeds: [750.0, 450.0, 250.0, 150.0],
            rho: 7200.0,
            a: 3.0,
            mu: 0.35,
            s: 1.75e6,
            t: 8e-3,
        }
    }

    fn diameters(x: &DVector<f64>) -> [f64; 4] {
        [x[0] * 1e-3, x[1] * 1e-3, x[2] * 1e-3, x[3] * 1e-3]
    }

    /// Contact angle of the belt on the step with given diameter and speed.
    fn contact_angle(&self, d: f64, speed: f64) -> f64 {
        PI - 2.0 * ((speed / self.n - 1.0) * d / (2.0 * self.a)).asin()
    }

    fn belt_length(&self, d: f64, speed: f64) -> f64 {
        let ratio = speed / self.n;
        PI * d / 2.0 * (1.0 + ratio) + (ratio - 1.0).powi(2) * d.powi(2) / (4.0 * self.a)
            + 2.0 * self.a
    }
}

impl Default for StepConePulley {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for StepConePulley {
    fn name(&self) -> &'static str {
        "Step-cone pulley problem (Mechanical design problems)"
    }

    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn objectives(&self, x: &DVector<f64>) -> DVector<f64> {
        let w = x[4] * 1e-3;
        let area: f64 = Self::diameters(x)
            .iter()
            .zip(self.speeds.iter())
            .map(|(d, speed)| d.powi(2) * (1.0 + (speed / self.n).powi(2)))
            .sum();

        dvector![self.rho * w * PI / 4.0 * area]
    }

    fn equality(&self) -> Option<&dyn EqualityConstraints> {
        Some(self)
    }

    fn inequality(&self) -> Option<&dyn InequalityConstraints> {
        Some(self)
    }

    fn paras(&self) -> Paras {
        let mut paras = Paras::new();
        paras.insert("N", Param::from(self.n));
        paras.insert("speeds", Param::from(&self.speeds[..]));
        paras.insert("rho", Param::from(self.rho));
        paras.insert("a", Param::from(self.a));
        paras.insert("mu", Param::from(self.mu));
        paras.insert("s", Param::from(self.s));
        paras.insert("t", Param::from(self.t));
        paras
    }
}

impl EqualityConstraints for StepConePulley {
    fn n_equalities(&self) -> usize {
        3
    }

    fn equalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let d = Self::diameters(x);
        let c = [0, 1, 2, 3].map(|i| self.belt_length(d[i], self.speeds[i]));

        dvector![c[0] - c[1], c[0] - c[2], c[0] - c[3]]
    }
}

impl InequalityConstraints for StepConePulley {
    fn n_inequalities(&self) -> usize {
        8
    }

    fn inequalities(&self, x: &DVector<f64>) -> DVector<f64> {
        let d = Self::diameters(x);
        let w = x[4] * 1e-3;
        let min_power = 0.75 * 745.6998;

        let angles = [0, 1, 2, 3].map(|i| self.contact_angle(d[i], self.speeds[i]));
        let ratios = angles.map(|theta| (self.mu * theta).exp());
        let powers = [0, 1, 2, 3].map(|i| {
            self.s * self.t * w * (1.0 - (-self.mu * angles[i]).exp()) * PI * d[i] * self.speeds[i]
                / 60.0
        });

        DVector::from_iterator(
            8,
            ratios
                .iter()
                .map(|r| 2.0 - r)
                .chain(powers.iter().map(|p| min_power - p)),
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::ProblemExt;

    #[test]
    fn speed_reducer() {
        let f = WeightMinimizationSpeedReducer::new();
        assert_eq!(f.n_dims(), 7);
        assert_eq!(f.n_ineq_cons(), 11);

        let x = dvector![3.5, 0.7, 17.0, 7.3, 7.715319, 3.350214, 5.286654];
        assert_relative_eq!(f.objectives(&x)[0], 2994.3408, epsilon = 1e-3);
        assert_relative_eq!(f.ineq_cons(&x)[6], 0.7 * 17.0 - 40.0);
    }

    #[test]
    fn refrigeration_system() {
        let f = IndustrialRefrigerationSystem::new();
        assert_eq!(f.n_dims(), 14);
        assert_eq!(f.n_ineq_cons(), 15);

        let x = DVector::from_element(14, 1.0);
        let gx = f.ineq_cons(&x);
        assert_relative_eq!(gx[0], 0.524, epsilon = 1e-12);
        assert_relative_eq!(gx[12], 1.0);
        assert_relative_eq!(gx[14], 0.0);
    }

    #[test]
    fn spring() {
        let f = TensionCompressionSpringDesign::new();
        assert_eq!(f.bounds(), vec![(0.05, 2.0), (0.25, 1.3), (2.0, 15.0)]);

        let x = dvector![0.05, 0.25, 2.0];
        assert_relative_eq!(f.objectives(&x)[0], 0.0025, epsilon = 1e-12);

        let gx = f.ineq_cons(&x);
        assert_eq!(gx.len(), 4);
        assert!(gx.iter().all(|g| g.is_finite()));
        assert_relative_eq!(gx[3], 0.3 / 1.5 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn pressure_vessel() {
        let f = PressureVesselDesign::new();
        assert_eq!(f.integer_dims(), &[0, 1]);

        let x = f.amend_position(&dvector![16.7, 8.2, 40.0, 200.0]);
        assert_eq!(x, dvector![16.0, 8.0, 40.0, 200.0]);

        let gx = f.ineq_cons(&x);
        assert_relative_eq!(gx[0], 0.00954 * 40.0 - 0.5);
        assert_relative_eq!(gx[1], 0.0193 * 40.0 - 1.0);
        assert_relative_eq!(gx[2], -40.0);
    }

    #[test]
    fn welded_beam() {
        let f = WeldedBeamDesign::new();
        assert_eq!(f.n_ineq_cons(), 5);

        let x = dvector![0.20573, 3.47049, 9.03662, 0.20573];
        assert_relative_eq!(f.objectives(&x)[0], 1.72485, epsilon = 1e-4);

        let gx = f.ineq_cons(&x);
        assert_relative_eq!(gx[2], 0.0);
        assert!(gx[1] <= 1e-1);
    }

    #[test]
    fn three_bar_truss_constraints() {
        let f = ThreeBarTrussDesign::new();
        let x = dvector![0.5, 0.5];

        let denom = SQRT_2 * 0.25 + 0.5;
        assert_relative_eq!(f.objectives(&x)[0], (SQRT_2 + 0.5) * 100.0);
        assert_relative_eq!(
            f.ineq_cons(&x),
            dvector![
                (SQRT_2 * 0.5 + 0.5) / denom * 2.0 - 2.0,
                0.5 / denom * 2.0 - 2.0,
                1.0 / (SQRT_2 * 0.5 + 0.5) * 2.0 - 2.0
            ]
        );
    }

    #[test]
    fn clutch_brake() {
        let f = MultipleDiskClutchBrakeDesign::new();
        assert_eq!(f.n_ineq_cons(), 8);

        let x = dvector![70.0, 90.0, 1.0, 600.0, 2.0];
        assert_relative_eq!(
            f.objectives(&x)[0],
            PI * (8100.0 - 4900.0) * 3.0 * 0.0000078
        );

        let gx = f.ineq_cons(&x);
        assert_relative_eq!(gx[2], 0.0);
        assert_relative_eq!(gx[3], 3.0 * 1.5 - 30.0);
        assert_relative_eq!(gx[5], -(gx[7] + 15.0), epsilon = 1e-12);
    }

    #[test]
    fn remainder_has_sign_of_divisor() {
        assert_eq!(remainder(7.0, 3.0), 1.0);
        assert_eq!(remainder(-7.0, 3.0), 2.0);
        assert_eq!(remainder(7.0, -3.0), -2.0);
        assert_eq!(remainder(6.0, 3.0), 0.0);
    }

    #[test]
    fn planetary_gear_train() {
        let f = PlanetaryGearTrainDesign::new();
        assert_eq!(f.n_dims(), 9);
        assert_eq!(f.n_eq_cons(), 1);
        assert_eq!(f.n_ineq_cons(), 10);

        let x = f.amend_position(&dvector![
            40.5, 21.2, 14.9, 19.0, 16.4, 69.8, 3.5, 1.2, 0.7
        ]);
        assert_eq!(
            x,
            dvector![40.0, 21.0, 14.0, 19.0, 16.0, 69.0, 3.0, 1.0, 0.0]
        );

        // 69 - 19 = 50 = 16 * 3 + 2
        assert_relative_eq!(f.eq_cons(&x)[0], 2.0);

        let gx = f.ineq_cons(&x);
        assert_eq!(gx.len(), 10);
        // m2 = 1.75
        assert_relative_eq!(gx[0], 1.75 * 71.5 - 220.0);
        // m1 = 2
        assert_relative_eq!(gx[1], 2.0 * 61.0 + 2.0 * 23.0 - 220.0);
        assert_relative_eq!(gx[8], -(69.0 - 28.0 - 19.0 - 4.0 - 1.0));
    }

    #[test]
    fn planetary_gear_train_invalid_module() {
        let f = PlanetaryGearTrainDesign::new();
        let x = dvector![40.0, 21.0, 14.0, 19.0, 16.0, 69.0, 3.0, 7.0, -1.0];

        let gx = f.ineq_cons(&x);
        assert!(gx[0].is_nan());
        assert!(gx[1].is_nan());
    }

    #[test]
    fn planetary_gear_train_undefined_angle() {
        let f = PlanetaryGearTrainDesign::new();
        // n6 = n3 makes the angle undefined.
        let x = dvector![40.0, 21.0, 50.0, 19.0, 16.0, 50.0, 3.0, 1.0, 0.0];

        assert_eq!(f.ineq_cons(&x)[7], UNDEFINED_ANGLE_VIOLATION);
    }

    #[test]
    fn step_cone_pulley_flat_equalities() {
        let f = StepConePulley::new();
        assert_eq!(f.n_eq_cons(), 3);
        assert_eq!(f.n_ineq_cons(), 8);

        let x = dvector![40.0, 55.0, 73.0, 88.0, 85.0];
        let hx = f.eq_cons(&x);
        assert_eq!(hx.len(), 3);

        let cons = f.cons(&x).unwrap();
        assert_eq!(cons.len(), 11);
    }

    #[test]
    fn step_cone_pulley_equal_lengths() {
        let f = StepConePulley::new();
        // All steps of zero diameter have the same belt length 2a.
        let x = dvector![0.0, 0.0, 0.0, 0.0, 50.0];

        assert_relative_eq!(f.eq_cons(&x), dvector![0.0, 0.0, 0.0]);
        assert_relative_eq!(f.objectives(&x)[0], 0.0);

        let gx = f.ineq_cons(&x);
        // Contact angle is pi, no power is transmitted.
        assert_relative_eq!(gx[0], 2.0 - (0.35 * PI).exp());
        assert_relative_eq!(gx[4], 0.75 * 745.6998);
    }
}
