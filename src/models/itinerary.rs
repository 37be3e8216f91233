use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured activity categories attached to an itinerary day.
///
/// Days that carry no tags are classified from their free-text activity
/// labels instead (see `services::classifier`).
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTag {
    Safari,
    Hiking,
    Trekking,
    Park,
    OffRoad,
    Private,
    Guide,
    Transfer,
    Flight,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationTier {
    Standard,
    Luxury,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DayMeals {
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DayFees {
    /// Replaces the policy park fee (per person) for this day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub park_fee: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryDay {
    /// 1-based, contiguous
    pub day: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub accommodation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation_tier: Option<AccommodationTier>,
    #[serde(default)]
    pub meals: DayMeals,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<ActivityTag>,
    #[serde(default)]
    pub custom_fees: DayFees,
}

impl ItineraryDay {
    pub fn has_accommodation(&self) -> bool {
        !self.accommodation.trim().is_empty() || self.accommodation_tier.is_some()
    }
}
