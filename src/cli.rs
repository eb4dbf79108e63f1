use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::{ActivityInput, CarFuelType};
use crate::simulator::SimulationToggles;

/// Command-line arguments of `carbon-footprint`.
#[derive(Parser, Debug)]
#[command(
    name = "carbon-footprint",
    version,
    about = "Household monthly carbon footprint calculator"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "JSON file with offset price, currency and reduction rates")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full report for one household.
    Report {
        #[command(flatten)]
        activity: ActivityArgs,
        #[command(flatten)]
        toggles: ToggleArgs,
    },
    /// Total and tier for every household row in a CSV file.
    Batch { path: PathBuf },
    /// List the emission factors and their sources.
    Factors,
}

/// Monthly quantities; omitted flags take the default household values.
#[derive(Args, Debug, Default)]
pub struct ActivityArgs {
    #[arg(long, allow_negative_numbers = true, help = "Electricity use (kWh)")]
    pub electricity_kwh: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "LPG burned (kg)")]
    pub lpg_kg: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Motorcycle gasoline (L)")]
    pub motor_fuel_liters: Option<f64>,
    #[arg(long, allow_negative_numbers = true, help = "Car fuel (L)")]
    pub car_fuel_liters: Option<f64>,
    #[arg(long, help = "Car fuel type: gasoline or diesel")]
    pub car_fuel: Option<CarFuelType>,
    #[arg(long, allow_negative_numbers = true, help = "Waste sent to landfill (kg)")]
    pub waste_kg: Option<f64>,
}

impl ActivityArgs {
    /// Activity input with unset flags filled from the defaults.
    pub fn to_input(&self) -> ActivityInput {
        let d = ActivityInput::default();
        ActivityInput {
            electricity_kwh: self.electricity_kwh.unwrap_or(d.electricity_kwh),
            lpg_kg: self.lpg_kg.unwrap_or(d.lpg_kg),
            motor_fuel_liters: self.motor_fuel_liters.unwrap_or(d.motor_fuel_liters),
            car_fuel_liters: self.car_fuel_liters.unwrap_or(d.car_fuel_liters),
            car_fuel_type: self.car_fuel.unwrap_or(d.car_fuel_type),
            waste_kg: self.waste_kg.unwrap_or(d.waste_kg),
        }
    }
}

/// What-if interventions for the savings simulation.
#[derive(Args, Debug, Default)]
pub struct ToggleArgs {
    #[arg(long, help = "Simulate saving 20% of electricity")]
    pub reduce_electricity: bool,
    #[arg(long, help = "Simulate driving 30% less")]
    pub reduce_transport: bool,
    #[arg(long, help = "Simulate sorting waste (50% less to landfill)")]
    pub sort_waste: bool,
}

impl ToggleArgs {
    /// Simulation toggles from the flags.
    pub fn to_toggles(&self) -> SimulationToggles {
        SimulationToggles {
            reduce_electricity_20pct: self.reduce_electricity,
            reduce_transport_30pct: self.reduce_transport,
            sort_waste_50pct: self.sort_waste,
        }
    }
}
