use serde::{Deserialize, Serialize};

/// kg CO2 per km driven by an average car.
pub const CAR_KG_PER_KM: f64 = 0.2;
/// kg CO2 absorbed by one tree per year.
pub const TREE_KG_PER_YEAR: f64 = 20.0;
/// kg CO2 per smartphone charge (EPA estimate).
pub const PHONE_CHARGE_KG: f64 = 0.008;
/// m2 of polar ice lost per kg CO2.
pub const ICE_M2_PER_KG: f64 = 0.03;
/// Default donation per planted tree, in rupiah.
pub const OFFSET_PRICE_PER_TREE: f64 = 25_000.0;

/// Real-world comparisons for a monthly total. Full precision; truncation is
/// left to whoever displays them.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equivalences {
    pub car_km: f64,
    pub trees_per_year: f64,
    pub phone_charges: f64,
    pub ice_melted_m2: f64,
}

/// Linear conversions of a monthly total into everyday comparisons.
pub fn equivalents(total: f64) -> Equivalences {
    Equivalences {
        car_km: total / CAR_KG_PER_KM,
        trees_per_year: (total * 12.0) / TREE_KG_PER_YEAR,
        phone_charges: total / PHONE_CHARGE_KG,
        ice_melted_m2: total * ICE_M2_PER_KG,
    }
}

/// Yearly cost of planting enough trees to absorb the annual footprint.
pub fn offset_cost(trees_per_year: f64, price_per_tree: f64) -> f64 {
    trees_per_year * price_per_tree
}
