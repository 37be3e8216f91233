use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    accommodation::{MealBasis, RoomType},
    crew::CrewMember,
    itinerary::ItineraryDay,
    profit::ExpenseCategory,
    trip::{GroupKind, MarkupPercentages, TripParameters},
    vehicle::{VehicleChoice, VehicleOption},
};

fn default_room_type() -> String {
    "double".to_string()
}

fn default_meal_basis() -> String {
    "room-only".to_string()
}

fn default_currency_rate() -> f64 {
    1.0
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AccommodationSelection {
    /// Base nightly cost per person
    pub average_cost: f64,
    #[serde(default = "default_room_type")]
    pub room_type: String,
    #[serde(default = "default_meal_basis")]
    pub meal_basis: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ActivitySelection {
    pub average_cost: f64,
    pub included: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MealSelection {
    pub prepared_cost: f64,
    pub included: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PrePostSelection {
    pub accommodation_cost: f64,
    pub nights: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ParkFeeSelection {
    /// Entry fee per person, per park day
    pub per_person_daily: f64,
    pub park_days: u32,
}

/// Everything the quote builder collects for a parameter-driven estimate.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TourEstimateRequest {
    pub trip: TripParameters,
    pub vehicle: VehicleChoice,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    pub accommodation: AccommodationSelection,
    #[serde(default)]
    pub activities: ActivitySelection,
    #[serde(default)]
    pub meals: MealSelection,
    #[serde(default)]
    pub pre_post: PrePostSelection,
    #[serde(default)]
    pub park_fees: ParkFeeSelection,
    #[serde(default)]
    pub markups: MarkupPercentages,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CostBreakdown {
    pub vehicle: f64,
    pub fuel: f64,
    /// Nightly rate after room type and meal basis adjustments
    pub adjusted_nightly_accommodation: f64,
    pub accommodation: f64,
    pub crew: f64,
    pub activities: f64,
    pub meals: f64,
    pub park_fees: f64,
    /// Priced separately, not part of the tour total
    pub pre_post: f64,
}

impl CostBreakdown {
    pub fn scaled(&self, rate: f64) -> Self {
        Self {
            vehicle: self.vehicle * rate,
            fuel: self.fuel * rate,
            adjusted_nightly_accommodation: self.adjusted_nightly_accommodation * rate,
            accommodation: self.accommodation * rate,
            crew: self.crew * rate,
            activities: self.activities * rate,
            meals: self.meals * rate,
            park_fees: self.park_fees * rate,
            pre_post: self.pre_post * rate,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CostSummary {
    pub fixed_costs: f64,
    pub variable_cost_per_person: f64,
    pub total_tour_cost: f64,
    pub cost_per_person: f64,
    pub daily_cost_per_person: f64,
}

impl CostSummary {
    pub fn scaled(&self, rate: f64) -> Self {
        Self {
            fixed_costs: self.fixed_costs * rate,
            variable_cost_per_person: self.variable_cost_per_person * rate,
            total_tour_cost: self.total_tour_cost * rate,
            cost_per_person: self.cost_per_person * rate,
            daily_cost_per_person: self.daily_cost_per_person * rate,
        }
    }
}

/// Per-person cost at one hypothetical group size.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct GroupSizeCost {
    pub pax: u32,
    pub total_cost: f64,
    pub daily_cost: f64,
}

impl GroupSizeCost {
    pub fn scaled(&self, rate: f64) -> Self {
        Self {
            pax: self.pax,
            total_cost: self.total_cost * rate,
            daily_cost: self.daily_cost * rate,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TourEstimate {
    pub vehicle: VehicleOption,
    pub room_type: RoomType,
    pub meal_basis: MealBasis,
    pub group_kind: GroupKind,
    pub currency_rate: f64,
    pub breakdown: CostBreakdown,
    pub summary: CostSummary,
    pub group_sizes: Vec<GroupSizeCost>,
    pub group_size_summary: Vec<GroupSizeCost>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GroupSizeRequest {
    pub min_pax: u32,
    pub max_pax: u32,
    pub current_pax: u32,
    pub fixed_costs: f64,
    /// Per-person variable cost at `current_pax`
    pub variable_costs: f64,
    pub duration: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GroupSizeAnalysis {
    pub costs: Vec<GroupSizeCost>,
    pub summary: Vec<GroupSizeCost>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryEstimateRequest {
    pub itinerary: Vec<ItineraryDay>,
    pub pax: u32,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(default)]
    pub park_fee_markup: f64,
    #[serde(default = "default_currency_rate")]
    pub currency_rate: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayCostTotal {
    pub day: u32,
    pub date: NaiveDate,
    pub total: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryCostEstimate {
    pub categories: Vec<ExpenseCategory>,
    pub per_day: Vec<DayCostTotal>,
    pub total: f64,
}

impl ItineraryCostEstimate {
    pub fn scaled(&self, rate: f64) -> Self {
        Self {
            categories: self.categories.iter().map(|c| c.scaled(rate)).collect(),
            per_day: self
                .per_day
                .iter()
                .map(|d| DayCostTotal {
                    total: d.total * rate,
                    ..d.clone()
                })
                .collect(),
            total: self.total * rate,
        }
    }
}
