use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FootprintError;

/// The five emission factor categories. Closed set; lookups are exhaustive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electricity,
    Gasoline,
    Diesel,
    Lpg,
    Waste,
}

impl Category {
    /// Fixed category order used for listings and summation.
    pub const ALL: [Category; 5] = [
        Category::Electricity,
        Category::Gasoline,
        Category::Diesel,
        Category::Lpg,
        Category::Waste,
    ];

    fn index(self) -> usize {
        match self {
            Category::Electricity => 0,
            Category::Gasoline => 1,
            Category::Diesel => 2,
            Category::Lpg => 3,
            Category::Waste => 4,
        }
    }

    /// Lowercase key, matching the serde name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::Gasoline => "gasoline",
            Category::Diesel => "diesel",
            Category::Lpg => "lpg",
            Category::Waste => "waste",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses free-form category keys, including the Indonesian labels used on
/// household utility data ("listrik", "bensin", "solar", "sampah").
impl FromStr for Category {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electricity" | "listrik" => Ok(Category::Electricity),
            "gasoline" | "petrol" | "bensin" => Ok(Category::Gasoline),
            "diesel" | "solar" => Ok(Category::Diesel),
            "lpg" => Ok(Category::Lpg),
            "waste" | "sampah" => Ok(Category::Waste),
            _ => Err(FootprintError::UnknownCategory(s.to_string())),
        }
    }
}

/// One row of reference data: multiplier, unit and where the number comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionFactor {
    pub category: Category,
    pub value_per_unit: f64,
    pub unit: &'static str,
    pub source_label: &'static str,
    pub description: &'static str,
}

/// Immutable factor table, indexed by `Category`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactorTable {
    factors: [EmissionFactor; 5],
}

static STANDARD_TABLE: EmissionFactorTable = EmissionFactorTable {
    factors: [
        EmissionFactor {
            category: Category::Electricity,
            value_per_unit: 0.87,
            unit: "kgCO2/kWh",
            source_label: "Kementerian ESDM (Grid Jamali)",
            description: "Grid electricity, coal-dominated Java-Bali grid.",
        },
        EmissionFactor {
            category: Category::Gasoline,
            value_per_unit: 2.33,
            unit: "kgCO2/L",
            source_label: "IPCC Guidelines 2006",
            description: "Gasoline combustion (Pertalite/Pertamax).",
        },
        EmissionFactor {
            category: Category::Diesel,
            value_per_unit: 2.68,
            unit: "kgCO2/L",
            source_label: "IPCC Guidelines 2006",
            description: "Diesel (solar) combustion.",
        },
        EmissionFactor {
            category: Category::Lpg,
            value_per_unit: 3.00,
            unit: "kgCO2/kg",
            source_label: "IPCC (Stationary Combustion)",
            description: "LPG burned for cooking.",
        },
        EmissionFactor {
            category: Category::Waste,
            value_per_unit: 0.70,
            unit: "kgCO2e/kg",
            source_label: "KLHK & World Bank (Estimasi)",
            description: "Methane from organic waste sent to landfill.",
        },
    ],
};

impl EmissionFactorTable {
    /// Process-wide table with the regional constants.
    pub fn standard() -> &'static EmissionFactorTable {
        &STANDARD_TABLE
    }

    /// Reference row for a category. Infallible over the closed set.
    pub fn factor_for(&self, category: Category) -> &EmissionFactor {
        &self.factors[category.index()]
    }

    /// Lookup by free-form key; the only place `UnknownCategory` can occur.
    pub fn factor_for_key(&self, key: &str) -> Result<&EmissionFactor, FootprintError> {
        let category: Category = key.parse()?;
        Ok(self.factor_for(category))
    }

    /// Multiplier for a category.
    pub fn value(&self, category: Category) -> f64 {
        self.factor_for(category).value_per_unit
    }

    /// Factors in fixed category order.
    pub fn iter(&self) -> impl Iterator<Item = &EmissionFactor> {
        self.factors.iter()
    }
}
