use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{crew::CrewMember, itinerary::ItineraryDay};

fn default_currency_rate() -> f64 {
    1.0
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExpenseCategory {
    pub name: String,
    pub total: f64,
}

impl ExpenseCategory {
    pub fn new(name: impl Into<String>, total: f64) -> Self {
        Self {
            name: name.into(),
            total,
        }
    }

    pub fn scaled(&self, rate: f64) -> Self {
        Self::new(self.name.clone(), self.total * rate)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayCostBreakdown {
    pub date: NaiveDate,
    pub revenue: f64,
    pub expense: f64,
    pub profit: f64,
}

impl DayCostBreakdown {
    pub fn new(date: NaiveDate, revenue: f64, expense: f64) -> Self {
        Self {
            date,
            revenue,
            expense,
            profit: revenue - expense,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProfitReviewSummary {
    pub categories: Vec<ExpenseCategory>,
    pub total_revenue: f64,
    pub total_expense: f64,
    pub total_profit: f64,
    pub per_day: Vec<DayCostBreakdown>,
    pub min_profit_per_day: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_fuel_in: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_fuel_out: Option<f64>,
}

/// Profit review over a date range at a flat per-person rate.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BaselineReviewInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Per person, per day
    pub base_rate: f64,
    pub passenger_count: u32,
    #[serde(default)]
    pub daily_fuel_in: Option<f64>,
    #[serde(default)]
    pub daily_fuel_out: Option<f64>,
}

/// Profit review driven by a day-by-day itinerary.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryReviewInput {
    pub itinerary: Vec<ItineraryDay>,
    /// Per person, per day
    pub base_rate: f64,
    pub pax: u32,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(default)]
    pub park_fee_markup: f64,
    #[serde(default = "default_currency_rate")]
    pub currency_rate: f64,
    #[serde(default)]
    pub daily_fuel_in: Option<f64>,
    #[serde(default)]
    pub daily_fuel_out: Option<f64>,
}

/// The caller picks the computation path explicitly; the two are not
/// expected to agree numerically.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProfitReviewRequest {
    Baseline(BaselineReviewInput),
    Itinerary(ItineraryReviewInput),
}
