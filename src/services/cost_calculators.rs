//! Per-category cost formulas for the parameter-driven quote.
//!
//! Every function here is a pure function of its arguments. Inputs are
//! expected to have passed `services::validation` first; out-of-range
//! values are not rejected here.

use crate::models::{
    accommodation::{MealBasis, RoomType},
    crew::CrewMember,
    vehicle::VehicleOption,
};

/// `base * (1 + markup / 100)`
pub fn apply_markup(base: f64, markup_percent: f64) -> f64 {
    base * (1.0 + markup_percent / 100.0)
}

pub fn calculate_vehicle_cost(vehicle: &VehicleOption, duration: u32, markup_percent: f64) -> f64 {
    apply_markup(vehicle.daily_rate * f64::from(duration), markup_percent)
}

/// Liters needed for `distance` at the vehicle's km/l, times the fuel price.
pub fn calculate_fuel_cost(vehicle: &VehicleOption, distance: f64, fuel_price: f64) -> f64 {
    if distance == 0.0 {
        return 0.0;
    }
    (distance / vehicle.fuel_consumption) * fuel_price
}

pub fn calculate_accommodation_cost(
    average_cost: f64,
    duration: u32,
    pax: u32,
    markup_percent: f64,
) -> f64 {
    apply_markup(
        average_cost * f64::from(duration) * f64::from(pax),
        markup_percent,
    )
}

/// Nightly rate after the room-type multiplier, then the meal-basis
/// multiplier on the room-adjusted rate.
pub fn calculate_adjusted_accommodation_cost(
    average_cost: f64,
    room_type: &RoomType,
    meal_basis: &MealBasis,
) -> f64 {
    let room_adjusted = average_cost * room_type.base_multiplier;
    room_adjusted * (1.0 + meal_basis.cost_multiplier)
}

pub fn calculate_crew_cost(crew: &[CrewMember], duration: u32) -> f64 {
    crew.iter()
        .map(|member| member.daily_total() * f64::from(duration))
        .sum()
}

pub fn calculate_activity_cost(
    average_cost: f64,
    included_activities: u32,
    pax: u32,
    markup_percent: f64,
) -> f64 {
    apply_markup(
        average_cost * f64::from(included_activities) * f64::from(pax),
        markup_percent,
    )
}

pub fn calculate_meal_cost(
    prepared_meals_cost: f64,
    included_meals: u32,
    pax: u32,
    markup_percent: f64,
) -> f64 {
    apply_markup(
        prepared_meals_cost * f64::from(included_meals) * f64::from(pax),
        markup_percent,
    )
}

pub fn calculate_pre_post_tour_cost(
    accommodation_cost: f64,
    nights: u32,
    markup_percent: f64,
) -> f64 {
    apply_markup(accommodation_cost * f64::from(nights), markup_percent)
}

/// Per-person daily park fee over the park days, for every passenger.
pub fn calculate_park_fee_cost(
    fee_per_person: f64,
    park_days: u32,
    pax: u32,
    markup_percent: f64,
) -> f64 {
    apply_markup(
        fee_per_person * f64::from(park_days) * f64::from(pax),
        markup_percent,
    )
}
