use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub base_multiplier: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MealBasis {
    pub id: String,
    pub name: String,
    /// Applied as `1 + cost_multiplier` on the room-adjusted rate
    pub cost_multiplier: f64,
}
