use serde::{Deserialize, Serialize};

fn default_currency_rate() -> f64 {
    1.0
}

/// Core trip inputs shared by every quote calculation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TripParameters {
    /// Trip length in days
    pub duration: u32,
    /// Total driving distance in km
    pub distance: f64,
    pub current_pax: u32,
    pub min_pax: u32,
    pub max_pax: u32,
    /// Currency per liter
    pub fuel_price: f64,
    #[serde(default = "default_currency_rate")]
    pub currency_rate: f64,
}

impl TripParameters {
    /// Groups below `fit_threshold` passengers are booked as FIT.
    pub fn group_kind(&self, fit_threshold: u32) -> GroupKind {
        if self.current_pax < fit_threshold {
            GroupKind::Fit
        } else {
            GroupKind::Group
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Fit,
    Group,
}

/// Percent added on top of each category's supplier cost.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MarkupPercentages {
    pub vehicle: f64,
    pub accommodation: f64,
    pub activities: f64,
    pub meals: f64,
    pub pre_post: f64,
    pub park_fees: f64,
}
