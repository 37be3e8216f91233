//! Boundary checks run on every request before the calculators see it.

use chrono::NaiveDate;

use crate::{
    error::ValidationError,
    models::{
        crew::CrewMember,
        estimate::{GroupSizeRequest, ItineraryEstimateRequest, TourEstimateRequest},
        itinerary::ItineraryDay,
        profit::{BaselineReviewInput, ItineraryReviewInput, ProfitReviewRequest},
        trip::{MarkupPercentages, TripParameters},
        vehicle::VehicleOption,
    },
    services::policy::RequestLimits,
};

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    // also rejects NaN
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NegativeValue {
            field: field.to_string(),
        })
    }
}

fn positive_pax(field: &'static str, pax: u32) -> Result<(), ValidationError> {
    if pax == 0 {
        return Err(ValidationError::InvalidPax { field });
    }
    Ok(())
}

fn currency_rate(rate: f64) -> Result<(), ValidationError> {
    if rate > 0.0 && rate.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidCurrencyRate)
    }
}

fn trip_length(days: i64, limits: &RequestLimits) -> Result<(), ValidationError> {
    if days > i64::from(limits.max_trip_days) {
        return Err(ValidationError::TripTooLong {
            days,
            max: limits.max_trip_days,
        });
    }
    Ok(())
}

fn pax_range(min: u32, current: u32, max: u32, limits: &RequestLimits) -> Result<(), ValidationError> {
    positive_pax("min_pax", min)?;
    if min >= max {
        return Err(ValidationError::InvalidPaxRange { min, max });
    }
    let span = max - min;
    if span > limits.max_pax_span {
        return Err(ValidationError::PaxSpanTooLarge {
            span,
            max: limits.max_pax_span,
        });
    }
    if current < min || current > max {
        return Err(ValidationError::PaxOutOfRange { current, min, max });
    }
    Ok(())
}

pub fn validate_trip(trip: &TripParameters, limits: &RequestLimits) -> Result<(), ValidationError> {
    if trip.duration == 0 {
        return Err(ValidationError::InvalidDuration);
    }
    trip_length(i64::from(trip.duration), limits)?;
    positive_pax("current_pax", trip.current_pax)?;
    pax_range(trip.min_pax, trip.current_pax, trip.max_pax, limits)?;
    non_negative("distance", trip.distance)?;
    if !(trip.fuel_price > 0.0 && trip.fuel_price.is_finite()) {
        return Err(ValidationError::InvalidFuelPrice);
    }
    currency_rate(trip.currency_rate)
}

pub fn validate_vehicle(vehicle: &VehicleOption) -> Result<(), ValidationError> {
    non_negative("vehicle.daily_rate", vehicle.daily_rate)?;
    if !(vehicle.fuel_consumption > 0.0 && vehicle.fuel_consumption.is_finite()) {
        return Err(ValidationError::InvalidFuelConsumption);
    }
    Ok(())
}

pub fn validate_crew(crew: &[CrewMember]) -> Result<(), ValidationError> {
    for member in crew {
        non_negative("crew.daily_rate", member.daily_rate)?;
        non_negative("crew.accommodation_rate", member.accommodation_rate)?;
        non_negative("crew.meal_allowance", member.meal_allowance)?;
    }
    Ok(())
}

pub fn validate_markups(markups: &MarkupPercentages) -> Result<(), ValidationError> {
    non_negative("markups.vehicle", markups.vehicle)?;
    non_negative("markups.accommodation", markups.accommodation)?;
    non_negative("markups.activities", markups.activities)?;
    non_negative("markups.meals", markups.meals)?;
    non_negative("markups.pre_post", markups.pre_post)?;
    non_negative("markups.park_fees", markups.park_fees)
}

/// Checks the trip-level inputs. The vehicle is checked after resolution,
/// see [`validate_vehicle`].
pub fn validate_estimate_request(
    request: &TourEstimateRequest,
    limits: &RequestLimits,
) -> Result<(), ValidationError> {
    validate_trip(&request.trip, limits)?;
    validate_crew(&request.crew)?;
    validate_markups(&request.markups)?;
    non_negative("accommodation.average_cost", request.accommodation.average_cost)?;
    non_negative("activities.average_cost", request.activities.average_cost)?;
    non_negative("meals.prepared_cost", request.meals.prepared_cost)?;
    non_negative("pre_post.accommodation_cost", request.pre_post.accommodation_cost)?;
    non_negative("park_fees.per_person_daily", request.park_fees.per_person_daily)
}

pub fn validate_group_size_request(
    request: &GroupSizeRequest,
    limits: &RequestLimits,
) -> Result<(), ValidationError> {
    if request.duration == 0 {
        return Err(ValidationError::InvalidDuration);
    }
    trip_length(i64::from(request.duration), limits)?;
    pax_range(request.min_pax, request.current_pax, request.max_pax, limits)?;
    non_negative("fixed_costs", request.fixed_costs)?;
    non_negative("variable_costs", request.variable_costs)
}

/// Days must be numbered 1..=N with no gaps, each dated after the one before.
pub fn validate_itinerary(days: &[ItineraryDay], limits: &RequestLimits) -> Result<(), ValidationError> {
    if days.is_empty() {
        return Err(ValidationError::EmptyItinerary);
    }
    trip_length(days.len() as i64, limits)?;
    let mut previous: Option<NaiveDate> = None;
    for (expected, day) in (1u32..).zip(days) {
        if day.day != expected {
            return Err(ValidationError::NonContiguousItinerary {
                expected,
                found: day.day,
            });
        }
        if previous.is_some_and(|date| day.date <= date) {
            return Err(ValidationError::DatesOutOfOrder {
                day: day.day,
                date: day.date,
            });
        }
        previous = Some(day.date);
        if let Some(fee) = day.custom_fees.park_fee {
            non_negative("custom_fees.park_fee", fee)?;
        }
    }
    Ok(())
}

pub fn validate_itinerary_estimate(
    request: &ItineraryEstimateRequest,
    limits: &RequestLimits,
) -> Result<(), ValidationError> {
    validate_itinerary(&request.itinerary, limits)?;
    positive_pax("pax", request.pax)?;
    validate_crew(&request.crew)?;
    non_negative("park_fee_markup", request.park_fee_markup)?;
    currency_rate(request.currency_rate)
}

fn validate_baseline_review(
    input: &BaselineReviewInput,
    limits: &RequestLimits,
) -> Result<(), ValidationError> {
    if input.end_date < input.start_date {
        return Err(ValidationError::InvalidDateRange {
            start: input.start_date,
            end: input.end_date,
        });
    }
    trip_length((input.end_date - input.start_date).num_days() + 1, limits)?;
    positive_pax("passenger_count", input.passenger_count)?;
    non_negative("base_rate", input.base_rate)
}

fn validate_itinerary_review(
    input: &ItineraryReviewInput,
    limits: &RequestLimits,
) -> Result<(), ValidationError> {
    validate_itinerary(&input.itinerary, limits)?;
    positive_pax("pax", input.pax)?;
    non_negative("base_rate", input.base_rate)?;
    validate_crew(&input.crew)?;
    non_negative("park_fee_markup", input.park_fee_markup)?;
    currency_rate(input.currency_rate)
}

pub fn validate_profit_request(
    request: &ProfitReviewRequest,
    limits: &RequestLimits,
) -> Result<(), ValidationError> {
    match request {
        ProfitReviewRequest::Baseline(input) => validate_baseline_review(input, limits),
        ProfitReviewRequest::Itinerary(input) => validate_itinerary_review(input, limits),
    }
}
