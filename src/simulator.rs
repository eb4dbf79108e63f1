use serde::{Deserialize, Serialize};

use crate::calculator::EmissionBreakdown;

/// Which what-if interventions are switched on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationToggles {
    pub reduce_electricity_20pct: bool,
    pub reduce_transport_30pct: bool,
    pub sort_waste_50pct: bool,
}

/// Fractions removed by each intervention.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionRates {
    pub electricity: f64,
    pub transport: f64,
    pub waste: f64,
}

impl Default for ReductionRates {
    fn default() -> Self {
        ReductionRates {
            electricity: 0.20,
            transport: 0.30,
            waste: 0.50,
        }
    }
}

/// Emissions removed by the toggled interventions and what remains.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub reduction_amount: f64,
    pub adjusted_total: f64,
}

impl SimulationResult {
    /// False when no toggle removed anything.
    pub fn is_saving(&self) -> bool {
        self.reduction_amount > 0.0
    }
}

/// Apply the standard 20 / 30 / 50 percent interventions.
pub fn simulate(breakdown: &EmissionBreakdown, toggles: &SimulationToggles) -> SimulationResult {
    simulate_with(breakdown, toggles, &ReductionRates::default())
}

/// Each toggle reads the pre-reduction lines; effects add, never compound.
/// `adjusted_total` is not clamped at zero.
pub fn simulate_with(
    breakdown: &EmissionBreakdown,
    toggles: &SimulationToggles,
    rates: &ReductionRates,
) -> SimulationResult {
    let mut reduction = 0.0;
    if toggles.reduce_electricity_20pct {
        reduction += breakdown.electricity * rates.electricity;
    }
    if toggles.reduce_transport_30pct {
        reduction += breakdown.transport() * rates.transport;
    }
    if toggles.sort_waste_50pct {
        reduction += breakdown.waste * rates.waste;
    }

    SimulationResult {
        reduction_amount: reduction,
        adjusted_total: breakdown.total - reduction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown() -> EmissionBreakdown {
        EmissionBreakdown::from_lines(130.5, 36.0, 69.9, 0.0, 14.0)
    }

    #[test]
    fn test_simulation_example() {
        let toggles = SimulationToggles {
            reduce_electricity_20pct: true,
            reduce_transport_30pct: false,
            sort_waste_50pct: true,
        };
        let r = simulate(&breakdown(), &toggles);
        assert!((r.reduction_amount - 33.1).abs() < 1e-9);
        assert!((r.adjusted_total - 217.3).abs() < 1e-9);
        assert!(r.is_saving());
    }

    #[test]
    fn test_no_toggles_changes_nothing() {
        let b = breakdown();
        let r = simulate(&b, &SimulationToggles::default());
        assert_eq!(r.reduction_amount, 0.0);
        assert_eq!(r.adjusted_total, b.total);
        assert!(!r.is_saving());
    }

    #[test]
    fn test_toggles_are_additive() {
        let b = EmissionBreakdown::from_lines(100.0, 10.0, 50.0, 150.0, 40.0);
        let each = [
            SimulationToggles {
                reduce_electricity_20pct: true,
                ..Default::default()
            },
            SimulationToggles {
                reduce_transport_30pct: true,
                ..Default::default()
            },
            SimulationToggles {
                sort_waste_50pct: true,
                ..Default::default()
            },
        ];
        let separate: f64 = each.iter().map(|t| simulate(&b, t).reduction_amount).sum();
        let all = simulate(
            &b,
            &SimulationToggles {
                reduce_electricity_20pct: true,
                reduce_transport_30pct: true,
                sort_waste_50pct: true,
            },
        );
        assert!((all.reduction_amount - separate).abs() < 1e-9);
        // 20 + 60 + 20
        assert!((all.reduction_amount - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_rates_are_not_clamped() {
        let b = EmissionBreakdown::from_lines(100.0, 0.0, 0.0, 0.0, 0.0);
        let rates = ReductionRates {
            electricity: 1.5,
            ..ReductionRates::default()
        };
        let toggles = SimulationToggles {
            reduce_electricity_20pct: true,
            ..Default::default()
        };
        let r = simulate_with(&b, &toggles, &rates);
        assert!((r.adjusted_total + 50.0).abs() < 1e-9);
    }
}
