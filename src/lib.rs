#![forbid(unsafe_code)]

//! Monthly household carbon footprint engine: emission factors, per-activity
//! breakdown, benchmark tiers, real-world equivalences and a what-if savings
//! simulator. Everything here is pure; adapters live in `cli` and the binary.

pub mod benchmark;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod equivalence;
pub mod error;
pub mod factors;
pub mod input;
pub mod report;
pub mod simulator;

pub use benchmark::{
    classify, BenchmarkClassifier, BenchmarkComparison, BenchmarkTier, ThresholdBenchmark,
    GLOBAL_TARGET_2030, INDONESIA_AVERAGE,
};
pub use calculator::{CategoryShares, EmissionBreakdown, FootprintCalculator};
pub use config::EngineConfig;
pub use equivalence::{equivalents, offset_cost, Equivalences};
pub use error::FootprintError;
pub use factors::{Category, EmissionFactor, EmissionFactorTable};
pub use input::{ActivityInput, CarFuelType};
pub use report::FootprintReport;
pub use simulator::{simulate, simulate_with, ReductionRates, SimulationResult, SimulationToggles};
