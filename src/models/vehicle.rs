use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VehicleOption {
    pub id: String,
    pub name: String,
    pub daily_rate: f64,
    /// Kilometers per liter
    pub fuel_consumption: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_passengers: Option<u32>,
}

/// A vehicle picked from the rate table, or one described by the operator.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleChoice {
    Table {
        id: String,
    },
    Custom {
        name: String,
        daily_rate: f64,
        fuel_consumption: f64,
    },
}
