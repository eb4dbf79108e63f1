use std::fmt;

use serde::Serialize;

use crate::benchmark::{BenchmarkClassifier, BenchmarkComparison, BenchmarkTier};
use crate::calculator::{CategoryShares, EmissionBreakdown, FootprintCalculator};
use crate::config::EngineConfig;
use crate::equivalence::{equivalents, offset_cost, Equivalences};
use crate::error::FootprintError;
use crate::input::{ActivityInput, AdvisoryViolation};
use crate::simulator::{simulate_with, SimulationResult, SimulationToggles};

/// Every engine output for one household, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintReport {
    pub input: ActivityInput,
    pub breakdown: EmissionBreakdown,
    pub shares: CategoryShares,
    pub tier: BenchmarkTier,
    pub comparison: BenchmarkComparison,
    pub equivalences: Equivalences,
    pub offset_cost: f64,
    pub currency: String,
    pub toggles: SimulationToggles,
    pub simulation: SimulationResult,
    pub advisories: Vec<AdvisoryViolation>,
}

impl FootprintReport {
    /// Compute, classify, compare, convert and simulate in one pass.
    /// Fails only when `input` is invalid.
    pub fn build<B: BenchmarkClassifier>(
        calculator: &FootprintCalculator<'_>,
        classifier: &B,
        input: &ActivityInput,
        toggles: &SimulationToggles,
        config: &EngineConfig,
    ) -> Result<Self, FootprintError> {
        let breakdown = calculator.compute(input)?;
        let equivalences = equivalents(breakdown.total);

        Ok(FootprintReport {
            input: input.clone(),
            shares: breakdown.shares(),
            tier: classifier.classify(breakdown.total),
            comparison: BenchmarkComparison::for_total(breakdown.total),
            offset_cost: offset_cost(equivalences.trees_per_year, config.offset_price_per_tree),
            currency: config.currency.clone(),
            toggles: *toggles,
            simulation: simulate_with(&breakdown, toggles, &config.reduction_rates),
            advisories: input.advisory_violations(),
            breakdown,
            equivalences,
        })
    }
}

impl fmt::Display for FootprintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.breakdown;
        writeln!(f, "Level: {}", self.tier.label())?;
        writeln!(f, "  {}", self.tier.advice())?;
        writeln!(f, "Total emissions: {:.1} kgCO2e/month", b.total)?;
        writeln!(f)?;

        writeln!(f, "Sources:")?;
        let shares = [
            self.shares.electricity,
            self.shares.lpg,
            self.shares.motor,
            self.shares.car,
            self.shares.waste,
        ];
        for ((name, value), share) in b.lines().iter().zip(shares) {
            writeln!(f, "  {:<12} {:>9.1} kg  {:>5.1}%", name, value, share * 100.0)?;
        }
        writeln!(f)?;

        let c = &self.comparison;
        writeln!(f, "Benchmark:")?;
        writeln!(f, "  global target 2030   {:>7.0} kg", c.global_target_2030)?;
        writeln!(f, "  Indonesia average    {:>7.0} kg", c.indonesia_average)?;
        writeln!(
            f,
            "  you                  {:>7.0} kg ({} national average)",
            c.user,
            if c.above_national_average {
                "above"
            } else {
                "at or below"
            }
        )?;
        writeln!(f)?;

        // Display truncates counts to whole numbers.
        let e = &self.equivalences;
        writeln!(f, "Equivalent to:")?;
        writeln!(f, "  {} km driven by car", e.car_km as u64)?;
        writeln!(f, "  {} trees planted per year", e.trees_per_year as u64)?;
        writeln!(f, "  {} smartphone charges", e.phone_charges as u64)?;
        writeln!(f, "  {:.2} m2 of polar ice melted", e.ice_melted_m2)?;
        writeln!(f)?;

        writeln!(
            f,
            "Offset cost: {} {} / year",
            self.currency, self.offset_cost as u64
        )?;

        if self.simulation.is_saving() {
            writeln!(
                f,
                "Simulated new total: {:.1} kgCO2e (-{:.1} kg)",
                self.simulation.adjusted_total, self.simulation.reduction_amount
            )?;
        }

        for v in &self.advisories {
            writeln!(
                f,
                "note: {} = {} is above the usual range (max {})",
                v.field, v.value, v.advisory_max
            )?;
        }
        Ok(())
    }
}
