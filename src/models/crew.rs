use serde::{Deserialize, Serialize};

/// Reference rate for a crew role.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CrewRole {
    pub id: String,
    pub name: String,
    pub daily_rate: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CrewMember {
    pub role: String,
    pub daily_rate: f64,
    #[serde(default)]
    pub accommodation_rate: f64,
    #[serde(default)]
    pub meal_allowance: f64,
}

impl CrewMember {
    /// Everything one crew member costs for a single day.
    pub fn daily_total(&self) -> f64 {
        self.daily_rate + self.accommodation_rate + self.meal_allowance
    }
}
