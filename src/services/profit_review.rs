//! Revenue, expense and profit review for a quoted tour.
//!
//! Two independent strategies, picked by the caller:
//!
//! - **Baseline**: flat per-person revenue against an escalating daily
//!   expense over a date range, with preset category totals.
//! - **Itinerary**: a per-day ledger from the itinerary profit rates, with
//!   categories priced by [`ItineraryCostCalculator`]. Total expense is the
//!   category sum; the ledger drives per-day profit.
//!
//! The strategies are not expected to agree numerically.

use chrono::NaiveDate;
use log::debug;

use crate::{
    models::{
        itinerary::{ActivityTag, ItineraryDay},
        profit::{
            BaselineReviewInput, DayCostBreakdown, ExpenseCategory, ItineraryReviewInput,
            ProfitReviewRequest, ProfitReviewSummary,
        },
    },
    services::{
        classifier::DayClassifier,
        itinerary_costs::{ItineraryCostCalculator, ItineraryCostInput},
        policy::{BaselineProfitRates, ItineraryProfitRates, PricingPolicy},
    },
};

fn min_profit(per_day: &[DayCostBreakdown]) -> f64 {
    per_day
        .iter()
        .map(|d| d.profit)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

fn trip_dates(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}

pub fn baseline_review(input: &BaselineReviewInput, rates: &BaselineProfitRates) -> ProfitReviewSummary {
    let daily_revenue = input.base_rate * f64::from(input.passenger_count);

    let per_day: Vec<DayCostBreakdown> = trip_dates(input.start_date, input.end_date)
        .enumerate()
        .map(|(index, date)| {
            let expense = rates.daily_expense * (1.0 + index as f64 * rates.daily_escalation);
            DayCostBreakdown::new(date, daily_revenue, expense)
        })
        .collect();

    let total_revenue: f64 = per_day.iter().map(|d| d.revenue).sum();
    let total_expense: f64 = per_day.iter().map(|d| d.expense).sum();

    ProfitReviewSummary {
        categories: rates
            .categories
            .iter()
            .map(|preset| ExpenseCategory::new(preset.name.clone(), preset.total))
            .collect(),
        total_revenue,
        total_expense,
        total_profit: total_revenue - total_expense,
        min_profit_per_day: min_profit(&per_day),
        per_day,
        daily_fuel_in: input.daily_fuel_in,
        daily_fuel_out: input.daily_fuel_out,
    }
}

/// One ledger line: (revenue, expense) for a single itinerary day.
pub fn itinerary_day_ledger(
    day: &ItineraryDay,
    base_rate: f64,
    pax: u32,
    classifier: &DayClassifier,
    rates: &ItineraryProfitRates,
) -> (f64, f64) {
    let pax = f64::from(pax);

    let mut revenue = base_rate * pax;
    if classifier.has_tag(day, ActivityTag::Private) {
        revenue *= rates.private_revenue_multiplier;
    }

    let accommodation = if classifier.is_luxury(day) {
        rates.luxury_accommodation
    } else {
        rates.standard_accommodation
    };

    let mut meals = 0.0;
    if day.meals.breakfast {
        meals += rates.breakfast;
    }
    if day.meals.lunch {
        meals += rates.lunch;
    }
    if day.meals.dinner {
        meals += rates.dinner;
    }

    let mut activities = 0.0;
    if classifier.has_tag(day, ActivityTag::Safari) {
        activities += rates.safari;
    }
    if classifier.has_tag(day, ActivityTag::Guide) {
        activities += rates.guide;
    }

    let expense = (rates.base_expense + accommodation + meals + activities) * pax;
    (revenue, expense)
}

pub fn itinerary_review(
    input: &ItineraryReviewInput,
    classifier: &DayClassifier,
    policy: &PricingPolicy,
) -> ProfitReviewSummary {
    let rate = input.currency_rate;

    let per_day: Vec<DayCostBreakdown> = input
        .itinerary
        .iter()
        .map(|day| {
            let (revenue, expense) = itinerary_day_ledger(
                day,
                input.base_rate,
                input.pax,
                classifier,
                &policy.itinerary_profit,
            );
            DayCostBreakdown::new(day.date, revenue * rate, expense * rate)
        })
        .collect();

    let costs = ItineraryCostCalculator::new(classifier, &policy.itinerary_costs)
        .estimate(&ItineraryCostInput {
            days: &input.itinerary,
            pax: input.pax,
            crew: &input.crew,
            park_fee_markup: input.park_fee_markup,
        })
        .scaled(rate);

    let total_revenue: f64 = per_day.iter().map(|d| d.revenue).sum();
    let total_expense: f64 = costs.categories.iter().map(|c| c.total).sum();

    ProfitReviewSummary {
        categories: costs.categories,
        total_revenue,
        total_expense,
        total_profit: total_revenue - total_expense,
        min_profit_per_day: min_profit(&per_day),
        per_day,
        daily_fuel_in: input.daily_fuel_in.map(|fuel| fuel * rate),
        daily_fuel_out: input.daily_fuel_out.map(|fuel| fuel * rate),
    }
}

pub fn compute_profit_review(
    request: &ProfitReviewRequest,
    classifier: &DayClassifier,
    policy: &PricingPolicy,
) -> ProfitReviewSummary {
    let summary = match request {
        ProfitReviewRequest::Baseline(input) => baseline_review(input, &policy.baseline),
        ProfitReviewRequest::Itinerary(input) => itinerary_review(input, classifier, policy),
    };
    debug!(
        "Profit review over {} days: revenue {:.2}, expense {:.2}",
        summary.per_day.len(),
        summary.total_revenue,
        summary.total_expense
    );
    summary
}
