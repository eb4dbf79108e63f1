use serde::{Deserialize, Serialize};

/// Paris-compatible 2030 target, ~2 t/year, in kg CO2e per month.
pub const GLOBAL_TARGET_2030: f64 = 167.0;
/// Indonesian per-capita average, ~2.3 t/year, in kg CO2e per month.
pub const INDONESIA_AVERAGE: f64 = 191.0;

/// Qualitative tier of a monthly total.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkTier {
    EcoWarrior,
    PlanetFriend,
    CarbonGiant,
}

impl BenchmarkTier {
    /// Display name of the tier.
    pub fn label(self) -> &'static str {
        match self {
            BenchmarkTier::EcoWarrior => "Eco Warrior",
            BenchmarkTier::PlanetFriend => "Planet Friend",
            BenchmarkTier::CarbonGiant => "Carbon Giant",
        }
    }

    /// One-line encouragement shown under the tier name.
    pub fn advice(self) -> &'static str {
        match self {
            BenchmarkTier::EcoWarrior => "Your lifestyle is very low-carbon. Keep it up!",
            BenchmarkTier::PlanetFriend => {
                "Fairly good, but there is still room to save energy."
            }
            BenchmarkTier::CarbonGiant => {
                "Your footprint is above average. Start cutting it down step by step."
            }
        }
    }
}

/// Tier classification of a monthly total.
pub trait BenchmarkClassifier {
    /// Tier for a monthly total in kg CO2e.
    fn classify(&self, total: f64) -> BenchmarkTier;
}

/// Half-open bands: `[0, planet_friend_from)`, `[planet_friend_from, carbon_giant_from)`,
/// `[carbon_giant_from, inf)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBenchmark {
    pub planet_friend_from: f64,
    pub carbon_giant_from: f64,
}

impl Default for ThresholdBenchmark {
    fn default() -> Self {
        ThresholdBenchmark {
            planet_friend_from: 150.0,
            carbon_giant_from: 350.0,
        }
    }
}

impl BenchmarkClassifier for ThresholdBenchmark {
    fn classify(&self, total: f64) -> BenchmarkTier {
        if total < self.planet_friend_from {
            BenchmarkTier::EcoWarrior
        } else if total < self.carbon_giant_from {
            BenchmarkTier::PlanetFriend
        } else {
            BenchmarkTier::CarbonGiant
        }
    }
}

/// Classify against the standard 150 / 350 kg thresholds.
pub fn classify(total: f64) -> BenchmarkTier {
    ThresholdBenchmark::default().classify(total)
}

/// A total placed next to the two reference figures.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub user: f64,
    pub global_target_2030: f64,
    pub indonesia_average: f64,
    pub above_national_average: bool,
}

impl BenchmarkComparison {
    /// Place `total` against the 2030 target and the national average.
    pub fn for_total(total: f64) -> Self {
        BenchmarkComparison {
            user: total,
            global_target_2030: GLOBAL_TARGET_2030,
            indonesia_average: INDONESIA_AVERAGE,
            above_national_average: total > INDONESIA_AVERAGE,
        }
    }
}
