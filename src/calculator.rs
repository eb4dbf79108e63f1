use serde::{Deserialize, Serialize};

use crate::error::FootprintError;
use crate::factors::{Category, EmissionFactorTable};
use crate::input::{ActivityInput, CarFuelType};

/// Per-activity emissions in kg CO2e for one month.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub electricity: f64,
    pub lpg: f64,
    pub motor: f64,
    pub car: f64,
    pub waste: f64,
    pub total: f64,
}

/// Fraction of `total` contributed by each activity line.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShares {
    pub electricity: f64,
    pub lpg: f64,
    pub motor: f64,
    pub car: f64,
    pub waste: f64,
}

impl EmissionBreakdown {
    /// Sums the five lines in fixed order: electricity, lpg, motor, car, waste.
    pub fn from_lines(electricity: f64, lpg: f64, motor: f64, car: f64, waste: f64) -> Self {
        let total = electricity + lpg + motor + car + waste;
        EmissionBreakdown {
            electricity,
            lpg,
            motor,
            car,
            waste,
            total,
        }
    }

    /// Labelled activity lines, for listing and charting.
    pub fn lines(&self) -> [(&'static str, f64); 5] {
        [
            ("electricity", self.electricity),
            ("lpg", self.lpg),
            ("motor", self.motor),
            ("car", self.car),
            ("waste", self.waste),
        ]
    }

    /// Combined motorcycle and car emissions.
    pub fn transport(&self) -> f64 {
        self.motor + self.car
    }

    /// All zeros when nothing was emitted.
    pub fn shares(&self) -> CategoryShares {
        if self.total <= 0.0 {
            return CategoryShares {
                electricity: 0.0,
                lpg: 0.0,
                motor: 0.0,
                car: 0.0,
                waste: 0.0,
            };
        }
        CategoryShares {
            electricity: self.electricity / self.total,
            lpg: self.lpg / self.total,
            motor: self.motor / self.total,
            car: self.car / self.total,
            waste: self.waste / self.total,
        }
    }
}

/// Turns activity quantities into an emission breakdown using an injected factor table.
#[derive(Debug, Copy, Clone)]
pub struct FootprintCalculator<'a> {
    table: &'a EmissionFactorTable,
}

impl Default for FootprintCalculator<'static> {
    fn default() -> Self {
        FootprintCalculator::new(EmissionFactorTable::standard())
    }
}

impl<'a> FootprintCalculator<'a> {
    /// Calculator reading multipliers from `table`.
    pub fn new(table: &'a EmissionFactorTable) -> Self {
        FootprintCalculator { table }
    }

    /// Deterministic and side-effect free. Negative or non-finite quantities
    /// yield `InvalidInput`; out-of-range but valid values are accepted.
    pub fn compute(&self, input: &ActivityInput) -> Result<EmissionBreakdown, FootprintError> {
        input.validate()?;

        let car_category = match input.car_fuel_type {
            CarFuelType::Gasoline => Category::Gasoline,
            CarFuelType::Diesel => Category::Diesel,
        };

        Ok(EmissionBreakdown::from_lines(
            input.electricity_kwh * self.table.value(Category::Electricity),
            input.lpg_kg * self.table.value(Category::Lpg),
            input.motor_fuel_liters * self.table.value(Category::Gasoline),
            input.car_fuel_liters * self.table.value(car_category),
            input.waste_kg * self.table.value(Category::Waste),
        ))
    }
}
