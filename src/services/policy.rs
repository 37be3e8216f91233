//! Pricing policy: every business-rule constant the engine uses.
//!
//! Defaults reproduce the operator's current rate card. A full policy can be
//! supplied as JSON through `PRICING_POLICY_PATH`, and a handful of numbers
//! can be overridden individually from the environment.

use std::{collections::HashMap, env, fs, path::Path};

use log::info;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::ConfigError, models::itinerary::ActivityTag};

pub const POLICY_PATH_VAR: &str = "PRICING_POLICY_PATH";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetCategory {
    pub name: String,
    pub total: f64,
}

/// Rates for the date-range profit review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BaselineProfitRates {
    /// Expense of day 0
    pub daily_expense: f64,
    /// Growth per day index, 0.02 = 2%
    pub daily_escalation: f64,
    pub categories: Vec<PresetCategory>,
}

impl Default for BaselineProfitRates {
    fn default() -> Self {
        let preset = |name: &str, total: f64| PresetCategory {
            name: name.to_string(),
            total,
        };
        Self {
            daily_expense: 1500.0,
            daily_escalation: 0.02,
            categories: vec![
                preset("Truck Fixed", 4500.0),
                preset("Truck Variable", 1800.0),
                preset("Accommodation", 6200.0),
                preset("Food", 2400.0),
                preset("Park Fees", 1600.0),
                preset("Crew", 2100.0),
                preset("Fuel", 1200.0),
                preset("Other Services", 900.0),
            ],
        }
    }
}

/// Per-person, per-day figures for the itinerary profit ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ItineraryProfitRates {
    pub base_expense: f64,
    pub standard_accommodation: f64,
    pub luxury_accommodation: f64,
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub safari: f64,
    pub guide: f64,
    pub private_revenue_multiplier: f64,
}

impl Default for ItineraryProfitRates {
    fn default() -> Self {
        Self {
            base_expense: 100.0,
            standard_accommodation: 50.0,
            luxury_accommodation: 150.0,
            breakfast: 10.0,
            lunch: 15.0,
            dinner: 20.0,
            safari: 100.0,
            guide: 50.0,
            private_revenue_multiplier: 1.5,
        }
    }
}

/// Rates for the eight itinerary cost categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ItineraryCostRates {
    /// Truck hire per day
    pub truck_daily_rate: f64,
    pub off_road_multiplier: f64,
    /// Per person, per night
    pub accommodation_base: f64,
    pub luxury_multiplier: f64,
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    /// Per person
    pub transfer_fee: f64,
    /// Per person
    pub flight_fee: f64,
    /// Per person, per day
    pub park_fee: f64,
    /// Added to every day when any day is guided
    pub guide_daily_cost: f64,
    pub inflation_percent: f64,
}

impl Default for ItineraryCostRates {
    fn default() -> Self {
        Self {
            truck_daily_rate: 250.0,
            off_road_multiplier: 1.3,
            accommodation_base: 80.0,
            luxury_multiplier: 2.5,
            breakfast: 10.0,
            lunch: 15.0,
            dinner: 20.0,
            transfer_fee: 45.0,
            flight_fee: 300.0,
            park_fee: 60.0,
            guide_daily_cost: 100.0,
            inflation_percent: 3.0,
        }
    }
}

/// Free-text keywords used when a day carries no structured tags.
///
/// A policy file only needs to list the tags it changes; every other tag
/// keeps its default keywords.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeywordTable {
    #[serde(deserialize_with = "merge_activity_keywords")]
    pub activities: HashMap<ActivityTag, Vec<String>>,
    pub luxury_accommodation: Vec<String>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let words = |list: &[&str]| list.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        let activities = HashMap::from([
            (ActivityTag::Safari, words(&["safari"])),
            (ActivityTag::Hiking, words(&["hiking"])),
            (ActivityTag::Trekking, words(&["trekking"])),
            (ActivityTag::Park, words(&["park", "reserve"])),
            (ActivityTag::OffRoad, words(&["off-road", "off road"])),
            (ActivityTag::Private, words(&["private"])),
            (ActivityTag::Guide, words(&["guide"])),
            (ActivityTag::Transfer, words(&["transfer", "airport"])),
            (ActivityTag::Flight, words(&["flight"])),
        ]);

        Self {
            activities,
            luxury_accommodation: words(&["luxury", "premium"]),
        }
    }
}

fn merge_activity_keywords<'de, D>(deserializer: D) -> Result<HashMap<ActivityTag, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<ActivityTag, Vec<String>>::deserialize(deserializer)?;
    let mut activities = KeywordTable::default().activities;
    activities.extend(overrides);
    Ok(activities)
}

/// Upper bounds on request sizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RequestLimits {
    /// Longest trip, itinerary or review date range, in days
    pub max_trip_days: u32,
    /// Widest `max_pax - min_pax` range for a group-size sweep
    pub max_pax_span: u32,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_trip_days: 365,
            max_pax_span: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingPolicy {
    /// Groups smaller than this are priced as FIT
    pub fit_threshold: u32,
    pub baseline: BaselineProfitRates,
    pub itinerary_profit: ItineraryProfitRates,
    pub itinerary_costs: ItineraryCostRates,
    pub keywords: KeywordTable,
    pub limits: RequestLimits,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            fit_threshold: 8,
            baseline: BaselineProfitRates::default(),
            itinerary_profit: ItineraryProfitRates::default(),
            itinerary_costs: ItineraryCostRates::default(),
            keywords: KeywordTable::default(),
            limits: RequestLimits::default(),
        }
    }
}

fn env_override<T: std::str::FromStr>(name: &str, current: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(current)
}

impl PricingPolicy {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Apply the individual numeric overrides on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        self.fit_threshold = env_override("PRICING_FIT_THRESHOLD", self.fit_threshold);
        self.baseline.daily_expense =
            env_override("PRICING_BASELINE_DAILY_EXPENSE", self.baseline.daily_expense);
        self.baseline.daily_escalation =
            env_override("PRICING_BASELINE_ESCALATION", self.baseline.daily_escalation);
        self.itinerary_costs.inflation_percent = env_override(
            "PRICING_INFLATION_PERCENT",
            self.itinerary_costs.inflation_percent,
        );
        self.itinerary_costs.park_fee =
            env_override("PRICING_PARK_FEE", self.itinerary_costs.park_fee);
        self.limits.max_trip_days =
            env_override("PRICING_MAX_TRIP_DAYS", self.limits.max_trip_days);
        self.limits.max_pax_span = env_override("PRICING_MAX_PAX_SPAN", self.limits.max_pax_span);
        self
    }

    /// Policy file if `PRICING_POLICY_PATH` is set, defaults otherwise, then
    /// the numeric env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let policy = match env::var(POLICY_PATH_VAR) {
            Ok(path) => {
                info!("Loading pricing policy from {}", path);
                Self::from_file(path)?
            }
            Err(_) => Self::default(),
        };
        Ok(policy.with_env_overrides())
    }
}
