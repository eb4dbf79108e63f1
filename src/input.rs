use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_quantity, FootprintError};

/// Fuel burned by the household car. Motor fuel is always gasoline-class.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarFuelType {
    #[default]
    Gasoline,
    Diesel,
}

impl CarFuelType {
    /// Lowercase name used in CSV rows and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            CarFuelType::Gasoline => "gasoline",
            CarFuelType::Diesel => "diesel",
        }
    }
}

impl fmt::Display for CarFuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarFuelType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gasoline" | "petrol" | "bensin" => Ok(CarFuelType::Gasoline),
            "diesel" | "solar" => Ok(CarFuelType::Diesel),
            _ => Err(FootprintError::UnknownFuelType(s.to_string())),
        }
    }
}

/// Advisory upper bounds of the input widgets. Not enforced by the engine.
pub const ELECTRICITY_KWH_MAX: f64 = 1000.0;
pub const LPG_KG_MAX: f64 = 60.0;
pub const MOTOR_FUEL_LITERS_MAX: f64 = 200.0;
pub const CAR_FUEL_LITERS_MAX: f64 = 400.0;
pub const WASTE_KG_MAX: f64 = 100.0;

/// Monthly household activity quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityInput {
    pub electricity_kwh: f64,
    pub lpg_kg: f64,
    pub motor_fuel_liters: f64,
    pub car_fuel_liters: f64,
    #[serde(default)]
    pub car_fuel_type: CarFuelType,
    pub waste_kg: f64,
}

/// Initial slider state of the dashboard.
impl Default for ActivityInput {
    fn default() -> Self {
        ActivityInput {
            electricity_kwh: 150.0,
            lpg_kg: 12.0,
            motor_fuel_liters: 30.0,
            car_fuel_liters: 0.0,
            car_fuel_type: CarFuelType::Gasoline,
            waste_kg: 20.0,
        }
    }
}

/// A quantity above its documented widget range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryViolation {
    pub field: &'static str,
    pub value: f64,
    pub advisory_max: f64,
}

impl ActivityInput {
    fn quantities(&self) -> [(&'static str, f64, f64); 5] {
        [
            ("electricity_kwh", self.electricity_kwh, ELECTRICITY_KWH_MAX),
            ("lpg_kg", self.lpg_kg, LPG_KG_MAX),
            ("motor_fuel_liters", self.motor_fuel_liters, MOTOR_FUEL_LITERS_MAX),
            ("car_fuel_liters", self.car_fuel_liters, CAR_FUEL_LITERS_MAX),
            ("waste_kg", self.waste_kg, WASTE_KG_MAX),
        ]
    }

    /// Fails on the first negative or non-finite quantity.
    pub fn validate(&self) -> Result<(), FootprintError> {
        for (field, value, _) in self.quantities() {
            ensure_quantity(field, value)?;
        }
        Ok(())
    }

    /// Fields above their advisory range. Values here are still valid input.
    pub fn advisory_violations(&self) -> Vec<AdvisoryViolation> {
        self.quantities()
            .into_iter()
            .filter(|(_, value, max)| value > max)
            .map(|(field, value, advisory_max)| AdvisoryViolation {
                field,
                value,
                advisory_max,
            })
            .collect()
    }
}

/// Number of columns in a batch activity row.
pub const ROW_COLUMNS: usize = 7;

/// Parse `id,electricity_kwh,lpg_kg,motor_fuel_liters,car_fuel_liters,car_fuel,waste_kg`.
/// Fields may not contain embedded commas.
pub fn parse_activity_row(line: &str) -> Result<(String, ActivityInput), FootprintError> {
    let parts: Vec<&str> = line.split(',').map(|s| s.trim()).collect();
    if parts.len() != ROW_COLUMNS {
        return Err(FootprintError::MalformedRow(format!(
            "expected {ROW_COLUMNS} columns, found {}",
            parts.len()
        )));
    }
    if parts[0].is_empty() {
        return Err(FootprintError::MalformedRow("empty household id".into()));
    }

    let number = |field: &'static str, raw: &str| -> Result<f64, FootprintError> {
        raw.parse::<f64>()
            .map_err(|_| FootprintError::MalformedRow(format!("{field}: not a number: {raw:?}")))
    };

    let input = ActivityInput {
        electricity_kwh: number("electricity_kwh", parts[1])?,
        lpg_kg: number("lpg_kg", parts[2])?,
        motor_fuel_liters: number("motor_fuel_liters", parts[3])?,
        car_fuel_liters: number("car_fuel_liters", parts[4])?,
        car_fuel_type: parts[5].parse()?,
        waste_kg: number("waste_kg", parts[6])?,
    };
    input.validate()?;
    Ok((parts[0].to_string(), input))
}

/// Column names of the optional header row.
pub const HEADER_COLUMNS: [&str; ROW_COLUMNS] = [
    "id",
    "electricity_kwh",
    "lpg_kg",
    "motor_fuel_liters",
    "car_fuel_liters",
    "car_fuel",
    "waste_kg",
];

/// True only for the exact header row; a household may be named `id`.
pub fn is_header_row(line: &str) -> bool {
    line.split(',').map(|s| s.trim()).eq(HEADER_COLUMNS)
}

/// True for blank lines, `#` comments and the header row.
pub fn is_skippable_row(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with('#') || is_header_row(t)
}

/// Decode one raw line, dropping a trailing `\r`.
pub fn decode_row(bytes: Vec<u8>) -> Result<String, FootprintError> {
    let mut line = String::from_utf8(bytes)
        .map_err(|e| FootprintError::MalformedRow(format!("not valid UTF-8: {e}")))?;
    if line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dashboard_initial_state() {
        let d = ActivityInput::default();
        assert_eq!(d.electricity_kwh, 150.0);
        assert_eq!(d.lpg_kg, 12.0);
        assert_eq!(d.motor_fuel_liters, 30.0);
        assert_eq!(d.car_fuel_liters, 0.0);
        assert_eq!(d.car_fuel_type, CarFuelType::Gasoline);
        assert_eq!(d.waste_kg, 20.0);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let mut input = ActivityInput::default();
        input.waste_kg = -1.0;
        assert_eq!(
            input.validate(),
            Err(FootprintError::InvalidInput {
                field: "waste_kg",
                value: -1.0
            })
        );
        input.waste_kg = 1.0;
        input.electricity_kwh = f64::NAN;
        assert!(matches!(
            input.validate(),
            Err(FootprintError::InvalidInput {
                field: "electricity_kwh",
                ..
            })
        ));
    }

    #[test]
    fn test_advisory_ranges_do_not_fail() {
        let input = ActivityInput {
            electricity_kwh: 2500.0,
            car_fuel_liters: 401.0,
            ..ActivityInput::default()
        };
        assert!(input.validate().is_ok());
        let fields: Vec<&str> = input
            .advisory_violations()
            .iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec!["electricity_kwh", "car_fuel_liters"]);
        assert!(ActivityInput::default().advisory_violations().is_empty());
    }

    #[test]
    fn test_fuel_type_parsing() {
        assert_eq!("Solar".parse::<CarFuelType>().unwrap(), CarFuelType::Diesel);
        assert_eq!("bensin".parse::<CarFuelType>().unwrap(), CarFuelType::Gasoline);
        assert!(matches!(
            "kerosene".parse::<CarFuelType>(),
            Err(FootprintError::UnknownFuelType(_))
        ));
    }

    #[test]
    fn test_parse_activity_row() {
        let (id, input) = parse_activity_row("hh-01, 150, 12, 30, 100, diesel, 20").unwrap();
        assert_eq!(id, "hh-01");
        assert_eq!(input.car_fuel_liters, 100.0);
        assert_eq!(input.car_fuel_type, CarFuelType::Diesel);

        assert!(matches!(
            parse_activity_row("hh-02,150,12,30"),
            Err(FootprintError::MalformedRow(_))
        ));
        assert!(matches!(
            parse_activity_row("hh-03,abc,12,30,0,gasoline,20"),
            Err(FootprintError::MalformedRow(_))
        ));
        assert!(matches!(
            parse_activity_row("hh-04,150,-12,30,0,gasoline,20"),
            Err(FootprintError::InvalidInput { field: "lpg_kg", .. })
        ));
    }

    #[test]
    fn test_skippable_rows() {
        assert!(is_skippable_row(""));
        assert!(is_skippable_row("# comment"));
        assert!(is_skippable_row(
            "id, electricity_kwh, lpg_kg, motor_fuel_liters, car_fuel_liters, car_fuel, waste_kg"
        ));
        assert!(!is_skippable_row("hh-01,1,1,1,1,gasoline,1"));
    }

    #[test]
    fn test_household_named_id_is_data() {
        let line = "id,150,12,30,0,gasoline,20";
        assert!(!is_header_row(line));
        assert!(!is_skippable_row(line));
        let (id, input) = parse_activity_row(line).unwrap();
        assert_eq!(id, "id");
        assert_eq!(input, ActivityInput::default());
    }

    #[test]
    fn test_decode_row() {
        assert_eq!(decode_row(b"hh-01,1\r".to_vec()).unwrap(), "hh-01,1");
        assert!(matches!(
            decode_row(b"hh-02,\xff\xfe,1".to_vec()),
            Err(FootprintError::MalformedRow(_))
        ));
    }

    #[test]
    fn test_unknown_fuel_names_the_field() {
        let err = parse_activity_row("hh-05,150,12,30,0,kerosene,20").unwrap_err();
        assert_eq!(err, FootprintError::UnknownFuelType("kerosene".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown car fuel type: kerosene (expected gasoline or diesel)"
        );
    }
}
