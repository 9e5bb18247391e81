//! Registry of all problems in the catalog.
//!
//! Every problem has a numeric code (`p1` to `p23`) and an abbreviation
//! derived from its name (e.g., `CCSDP` for the tension/compression spring
//! design problem). Both can be used to look the problem up.
//!
//! ```rust
//! use enopt::catalog::{Category, ProblemId};
//! use enopt::ProblemExt;
//!
//! let id: ProblemId = "ccsdp".parse().unwrap();
//! assert_eq!(id, ProblemId::TensionCompressionSpringDesign);
//! assert_eq!(id.code(), "p17");
//! assert_eq!(id.category(), Category::Mechanical);
//!
//! let problem = id.build();
//! assert_eq!(problem.n_dims(), 3);
//! assert_eq!(problem.n_ineq_cons(), 4);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::core::{Error, Problem};
use crate::problems::*;

/// Field of engineering a problem comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Industrial chemical processes.
    Chemical,
    /// Process design and synthesis.
    Synthesis,
    /// Mechanical design.
    Mechanical,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Chemical => "Industrial Chemical Processes",
            Category::Synthesis => "Process design and synthesis problems",
            Category::Mechanical => "Mechanical design problems",
        };

        f.write_str(name)
    }
}

/// Identifier of a problem in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProblemId {
    /// [`HeatExchangerNetworkDesignCase1`]
    HeatExchangerNetworkDesignCase1,
    /// [`HeatExchangerNetworkDesignCase2`]
    HeatExchangerNetworkDesignCase2,
    /// [`HaverlyPooling`]
    HaverlyPooling,
    /// [`BlendingPoolingSeparation`]
    BlendingPoolingSeparation,
    /// [`PropaneIsobutaneNButaneNonsharpSeparation`]
    PropaneIsobutaneNButaneNonsharpSeparation,
    /// [`OptimalOperationAlkylationUnit`]
    OptimalOperationAlkylationUnit,
    /// [`ReactorNetworkDesign`]
    ReactorNetworkDesign,
    /// [`ProcessSynthesis01`]
    ProcessSynthesis01,
    /// [`ProcessSynthesisAndDesign`]
    ProcessSynthesisAndDesign,
    /// [`ProcessFlowSheeting`]
    ProcessFlowSheeting,
    /// [`TwoReactor`]
    TwoReactor,
    /// [`ProcessSynthesis02`]
    ProcessSynthesis02,
    /// [`ProcessDesign`]
    ProcessDesign,
    /// [`MultiProductBatchPlant`]
    MultiProductBatchPlant,
    /// [`WeightMinimizationSpeedReducer`]
    WeightMinimizationSpeedReducer,
    /// [`IndustrialRefrigerationSystem`]
    IndustrialRefrigerationSystem,
    /// [`TensionCompressionSpringDesign`]
    TensionCompressionSpringDesign,
    /// [`PressureVesselDesign`]
    PressureVesselDesign,
    /// [`WeldedBeamDesign`]
    WeldedBeamDesign,
    /// [`ThreeBarTrussDesign`]
    ThreeBarTrussDesign,
    /// [`MultipleDiskClutchBrakeDesign`]
    MultipleDiskClutchBrakeDesign,
    /// [`PlanetaryGearTrainDesign`]
    PlanetaryGearTrainDesign,
    /// [`StepConePulley`]
    StepConePulley,
}

impl ProblemId {
    /// All problems in the catalog, ordered by their code.
    pub const ALL: [ProblemId; 23] = [
        ProblemId::HeatExchangerNetworkDesignCase1,
        ProblemId::HeatExchangerNetworkDesignCase2,
        ProblemId::HaverlyPooling,
        ProblemId::BlendingPoolingSeparation,
        ProblemId::PropaneIsobutaneNButaneNonsharpSeparation,
        ProblemId::OptimalOperationAlkylationUnit,
        ProblemId::ReactorNetworkDesign,
        ProblemId::ProcessSynthesis01,
        ProblemId::ProcessSynthesisAndDesign,
        ProblemId::ProcessFlowSheeting,
        ProblemId::TwoReactor,
        ProblemId::ProcessSynthesis02,
        ProblemId::ProcessDesign,
        ProblemId::MultiProductBatchPlant,
        ProblemId::WeightMinimizationSpeedReducer,
        ProblemId::IndustrialRefrigerationSystem,
        ProblemId::TensionCompressionSpringDesign,
        ProblemId::PressureVesselDesign,
        ProblemId::WeldedBeamDesign,
        ProblemId::ThreeBarTrussDesign,
        ProblemId::MultipleDiskClutchBrakeDesign,
        ProblemId::PlanetaryGearTrainDesign,
        ProblemId::StepConePulley,
    ];

    /// Numeric code of the problem, `p1` to `p23`.
    pub fn code(&self) -> &'static str {
        const CODES: [&str; 23] = [
            "p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9", "p10", "p11", "p12", "p13",
            "p14", "p15", "p16", "p17", "p18", "p19", "p20", "p21", "p22", "p23",
        ];

        CODES[*self as usize]
    }

    /// Abbreviation of the problem name.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            ProblemId::HeatExchangerNetworkDesignCase1 => "HENDC1P",
            ProblemId::HeatExchangerNetworkDesignCase2 => "HENDC2P",
            ProblemId::HaverlyPooling => "HPP",
            ProblemId::BlendingPoolingSeparation => "BPSP",
            ProblemId::PropaneIsobutaneNButaneNonsharpSeparation => "PINBNSP",
            ProblemId::OptimalOperationAlkylationUnit => "OOAUP",
            ProblemId::ReactorNetworkDesign => "RNDP",
            ProblemId::ProcessSynthesis01 => "PS01P",
            ProblemId::ProcessSynthesisAndDesign => "PSADP",
            ProblemId::ProcessFlowSheeting => "PFSP",
            ProblemId::TwoReactor => "TRP",
            ProblemId::ProcessSynthesis02 => "PS02P",
            ProblemId::ProcessDesign => "PDP",
            ProblemId::MultiProductBatchPlant => "MPBP",
            ProblemId::WeightMinimizationSpeedReducer => "WMSRP",
            ProblemId::IndustrialRefrigerationSystem => "ODIRSP",
            ProblemId::TensionCompressionSpringDesign => "CCSDP",
            ProblemId::PressureVesselDesign => "PVDP",
            ProblemId::WeldedBeamDesign => "WBDP",
            ProblemId::ThreeBarTrussDesign => "TBTDP",
            ProblemId::MultipleDiskClutchBrakeDesign => "MDCBDP",
            ProblemId::PlanetaryGearTrainDesign => "PGTDOP",
            ProblemId::StepConePulley => "SCPP",
        }
    }

    /// Field of engineering of the problem.
    pub fn category(&self) -> Category {
        match *self as usize {
            0..=6 => Category::Chemical,
            7..=13 => Category::Synthesis,
            _ => Category::Mechanical,
        }
    }

    /// Creates the problem with its default constants.
    pub fn build(&self) -> Box<dyn Problem + Send + Sync> {
        match self {
            ProblemId::HeatExchangerNetworkDesignCase1 => {
                Box::new(HeatExchangerNetworkDesignCase1::new())
            }
            ProblemId::HeatExchangerNetworkDesignCase2 => {
                Box::new(HeatExchangerNetworkDesignCase2::new())
            }
            ProblemId::HaverlyPooling => Box::new(HaverlyPooling::new()),
            ProblemId::BlendingPoolingSeparation => Box::new(BlendingPoolingSeparation::new()),
            ProblemId::PropaneIsobutaneNButaneNonsharpSeparation => {
                Box::new(PropaneIsobutaneNButaneNonsharpSeparation::new())
            }
            ProblemId::OptimalOperationAlkylationUnit => {
                Box::new(OptimalOperationAlkylationUnit::new())
            }
            ProblemId::ReactorNetworkDesign => Box::new(ReactorNetworkDesign::new()),
            ProblemId::ProcessSynthesis01 => Box::new(ProcessSynthesis01::new()),
            ProblemId::ProcessSynthesisAndDesign => Box::new(ProcessSynthesisAndDesign::new()),
            ProblemId::ProcessFlowSheeting => Box::new(ProcessFlowSheeting::new()),
            ProblemId::TwoReactor => Box::new(TwoReactor::new()),
            ProblemId::ProcessSynthesis02 => Box::new(ProcessSynthesis02::new()),
            ProblemId::ProcessDesign => Box::new(ProcessDesign::new()),
            ProblemId::MultiProductBatchPlant => Box::new(MultiProductBatchPlant::new()),
            ProblemId::WeightMinimizationSpeedReducer => {
                Box::new(WeightMinimizationSpeedReducer::new())
            }
            ProblemId::IndustrialRefrigerationSystem => {
                Box::new(IndustrialRefrigerationSystem::new())
            }
            ProblemId::TensionCompressionSpringDesign => {
                Box::new(TensionCompressionSpringDesign::new())
            }
            ProblemId::PressureVesselDesign => Box::new(PressureVesselDesign::new()),
            ProblemId::WeldedBeamDesign => Box::new(WeldedBeamDesign::new()),
            ProblemId::ThreeBarTrussDesign => Box::new(ThreeBarTrussDesign::new()),
            ProblemId::MultipleDiskClutchBrakeDesign => {
                Box::new(MultipleDiskClutchBrakeDesign::new())
            }
            ProblemId::PlanetaryGearTrainDesign => Box::new(PlanetaryGearTrainDesign::new()),
            ProblemId::StepConePulley => Box::new(StepConePulley::new()),
        }
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for ProblemId {
    type Err = Error;

    /// Parses the numeric code or the abbreviation, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        ProblemId::ALL
            .iter()
            .copied()
            .find(|id| {
                id.code().eq_ignore_ascii_case(name) || id.abbreviation().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| Error::UnknownProblem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::core::{Param, ProblemExt};
    use crate::evaluator::Evaluator;
    use crate::testing::check_contract;

    #[test]
    fn codes_are_ordered() {
        for (i, id) in ProblemId::ALL.iter().enumerate() {
            assert_eq!(id.code(), format!("p{}", i + 1));
        }
    }

    #[test]
    fn parse_code_and_abbreviation() {
        assert_eq!("p1".parse::<ProblemId>().unwrap(), ProblemId::ALL[0]);
        assert_eq!(
            "P23".parse::<ProblemId>().unwrap(),
            ProblemId::StepConePulley
        );
        assert_eq!(
            "wbdp".parse::<ProblemId>().unwrap(),
            ProblemId::WeldedBeamDesign
        );
        assert_eq!(
            " HENDC2P ".parse::<ProblemId>().unwrap(),
            ProblemId::HeatExchangerNetworkDesignCase2
        );

        for id in ProblemId::ALL {
            assert_eq!(id.to_string().parse::<ProblemId>().unwrap(), id);
            assert_eq!(id.code().parse::<ProblemId>().unwrap(), id);
        }
    }

    #[test]
    fn parse_unknown() {
        for name in ["p0", "p24", "", "spring"] {
            match name.parse::<ProblemId>() {
                Err(Error::UnknownProblem(unknown)) => assert_eq!(unknown, name),
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn abbreviations_are_unique() {
        let mut abbreviations = ProblemId::ALL
            .iter()
            .map(|id| id.abbreviation())
            .collect::<Vec<_>>();
        abbreviations.sort_unstable();
        abbreviations.dedup();

        assert_eq!(abbreviations.len(), ProblemId::ALL.len());
    }

    #[test]
    fn categories() {
        let count = |category: Category| {
            ProblemId::ALL
                .iter()
                .filter(|id| id.category() == category)
                .count()
        };

        assert_eq!(count(Category::Chemical), 7);
        assert_eq!(count(Category::Synthesis), 7);
        assert_eq!(count(Category::Mechanical), 9);

        for id in ProblemId::ALL {
            let problem = id.build();
            assert!(
                problem.name().ends_with(&format!("({})", id.category())),
                "{}: {}",
                id,
                problem.name()
            );
        }
    }

    #[test]
    fn all_problems_satisfy_contract() {
        let mut rng = StdRng::seed_from_u64(3);

        for id in ProblemId::ALL {
            let problem = id.build();

            if let Err(error) = check_contract(problem.as_ref(), &mut rng, 50) {
                panic!("{} violates the contract: {}", id, error);
            }
        }
    }

    #[test]
    fn all_problems_have_valid_bounds() {
        for id in ProblemId::ALL {
            let problem = id.build();
            let bounds = problem.bounds();

            assert_eq!(bounds.len(), problem.n_dims(), "{}", id);
            assert_eq!(problem.lb().len(), problem.n_dims(), "{}", id);
            assert_eq!(problem.ub().len(), problem.n_dims(), "{}", id);
            assert!(bounds.iter().all(|(l, u)| l <= u), "{}", id);
            assert_eq!(problem.n_objs(), 1, "{}", id);
        }
    }

    #[test]
    fn all_problems_evaluate() {
        let mut rng = StdRng::seed_from_u64(11);

        for id in ProblemId::ALL {
            let problem = id.build();
            let evaluator = Evaluator::builder(problem.as_ref())
                .reject_non_finite(false)
                .build()
                .unwrap();

            let x = evaluator.create_solution(&mut rng);
            let evaluation = evaluator.evaluate_full(&x).unwrap();

            assert_eq!(evaluation.cons().len(), problem.n_cons(), "{}", id);
            assert_eq!(evaluation.objs().len(), 1, "{}", id);
            assert!(!problem.needs_amendment(evaluation.x()), "{}", id);
            assert_eq!(evaluator.n_fe(), 1);
        }
    }

    #[test]
    fn all_problems_describe_themselves() {
        for id in ProblemId::ALL {
            let problem = id.build();
            let paras = problem.describe();

            assert_eq!(paras.get("name"), Some(&Param::from(problem.name())));
            assert_eq!(
                paras.get("n_dims"),
                Some(&Param::from(problem.n_dims()))
            );
            assert!(paras.contains_key("bounds"));
            assert!(paras.contains_key("epsilon"));
        }
    }
}
