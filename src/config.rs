use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::equivalence::OFFSET_PRICE_PER_TREE;
use crate::error::FootprintError;
use crate::simulator::ReductionRates;

/// Presentation-side parameters. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub offset_price_per_tree: f64,
    pub currency: String,
    pub reduction_rates: ReductionRates,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            offset_price_per_tree: OFFSET_PRICE_PER_TREE,
            currency: "Rp".to_string(),
            reduction_rates: ReductionRates::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document; absent fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, FootprintError> {
        let cfg: EngineConfig =
            serde_json::from_str(raw).map_err(|e| FootprintError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON config file from disk.
    pub fn load(path: &Path) -> Result<Self, FootprintError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| FootprintError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<(), FootprintError> {
        let numbers = [
            ("offset_price_per_tree", self.offset_price_per_tree),
            ("reduction_rates.electricity", self.reduction_rates.electricity),
            ("reduction_rates.transport", self.reduction_rates.transport),
            ("reduction_rates.waste", self.reduction_rates.waste),
        ];
        for (name, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
