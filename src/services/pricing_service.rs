use log::{debug, warn};

use crate::{
    error::{ConfigError, ValidationError},
    models::{
        estimate::{
            CostBreakdown, GroupSizeAnalysis, GroupSizeRequest, ItineraryCostEstimate,
            ItineraryEstimateRequest, TourEstimate, TourEstimateRequest,
        },
        profit::{ProfitReviewRequest, ProfitReviewSummary},
    },
    services::{
        aggregation::summarize_costs,
        classifier::DayClassifier,
        cost_calculators::{
            calculate_accommodation_cost, calculate_activity_cost,
            calculate_adjusted_accommodation_cost, calculate_crew_cost, calculate_fuel_cost,
            calculate_meal_cost, calculate_park_fee_cost, calculate_pre_post_tour_cost,
            calculate_vehicle_cost,
        },
        group_size::{calculate_costs_by_group_size, summarize_group_sizes},
        itinerary_costs::{ItineraryCostCalculator, ItineraryCostInput},
        policy::PricingPolicy,
        profit_review::compute_profit_review,
        rate_tables::{find_meal_basis, find_room_type, normalize_crew, resolve_vehicle},
        validation::{
            validate_estimate_request, validate_group_size_request, validate_itinerary_estimate,
            validate_profit_request, validate_vehicle,
        },
    },
};

/// Validates requests at the boundary and runs them through the engine with
/// one loaded pricing policy.
#[derive(Debug, Clone)]
pub struct PricingService {
    policy: PricingPolicy,
    classifier: DayClassifier,
}

impl PricingService {
    pub fn new(policy: PricingPolicy) -> Result<Self, ConfigError> {
        let classifier = DayClassifier::new(&policy.keywords)?;
        Ok(Self { policy, classifier })
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Full parameter-driven quote: category costs, headline figures and the
    /// group-size sweep, converted with the trip's currency rate.
    pub fn estimate_tour(&self, request: &TourEstimateRequest) -> Result<TourEstimate, ValidationError> {
        validate_estimate_request(request, &self.policy.limits)?;
        let vehicle = resolve_vehicle(&request.vehicle);
        validate_vehicle(&vehicle)?;

        let trip = &request.trip;
        if let Some(seats) = vehicle.max_passengers {
            if trip.current_pax > seats {
                warn!(
                    "{} seats {} passengers but the group has {}",
                    vehicle.name, seats, trip.current_pax
                );
            }
        }

        let room_type = find_room_type(&request.accommodation.room_type);
        let meal_basis = find_meal_basis(&request.accommodation.meal_basis);
        let crew = normalize_crew(&request.crew);
        let markups = &request.markups;

        let nightly = calculate_adjusted_accommodation_cost(
            request.accommodation.average_cost,
            &room_type,
            &meal_basis,
        );
        let breakdown = CostBreakdown {
            vehicle: calculate_vehicle_cost(&vehicle, trip.duration, markups.vehicle),
            fuel: calculate_fuel_cost(&vehicle, trip.distance, trip.fuel_price),
            adjusted_nightly_accommodation: nightly,
            accommodation: calculate_accommodation_cost(
                nightly,
                trip.duration,
                trip.current_pax,
                markups.accommodation,
            ),
            crew: calculate_crew_cost(&crew, trip.duration),
            activities: calculate_activity_cost(
                request.activities.average_cost,
                request.activities.included,
                trip.current_pax,
                markups.activities,
            ),
            meals: calculate_meal_cost(
                request.meals.prepared_cost,
                request.meals.included,
                trip.current_pax,
                markups.meals,
            ),
            park_fees: calculate_park_fee_cost(
                request.park_fees.per_person_daily,
                request.park_fees.park_days,
                trip.current_pax,
                markups.park_fees,
            ),
            pre_post: calculate_pre_post_tour_cost(
                request.pre_post.accommodation_cost,
                request.pre_post.nights,
                markups.pre_post,
            ),
        };

        let summary = summarize_costs(&breakdown, trip.current_pax, trip.duration);
        let group_sizes = calculate_costs_by_group_size(
            trip.min_pax,
            trip.max_pax,
            trip.current_pax,
            summary.fixed_costs,
            summary.variable_cost_per_person,
            trip.duration,
        );
        let group_size_summary = summarize_group_sizes(&group_sizes, trip.min_pax, trip.max_pax);
        debug!(
            "Estimated {} day tour for {} pax: {:.2}",
            trip.duration, trip.current_pax, summary.total_tour_cost
        );

        let rate = trip.currency_rate;
        Ok(TourEstimate {
            vehicle,
            room_type,
            meal_basis,
            group_kind: trip.group_kind(self.policy.fit_threshold),
            currency_rate: rate,
            breakdown: breakdown.scaled(rate),
            summary: summary.scaled(rate),
            group_sizes: group_sizes.iter().map(|c| c.scaled(rate)).collect(),
            group_size_summary: group_size_summary.iter().map(|c| c.scaled(rate)).collect(),
        })
    }

    pub fn group_sizes(&self, request: &GroupSizeRequest) -> Result<GroupSizeAnalysis, ValidationError> {
        validate_group_size_request(request, &self.policy.limits)?;
        let costs = calculate_costs_by_group_size(
            request.min_pax,
            request.max_pax,
            request.current_pax,
            request.fixed_costs,
            request.variable_costs,
            request.duration,
        );
        let summary = summarize_group_sizes(&costs, request.min_pax, request.max_pax);
        Ok(GroupSizeAnalysis { costs, summary })
    }

    pub fn estimate_itinerary(
        &self,
        request: &ItineraryEstimateRequest,
    ) -> Result<ItineraryCostEstimate, ValidationError> {
        validate_itinerary_estimate(request, &self.policy.limits)?;
        let crew = normalize_crew(&request.crew);
        let estimate = ItineraryCostCalculator::new(&self.classifier, &self.policy.itinerary_costs)
            .estimate(&ItineraryCostInput {
                days: &request.itinerary,
                pax: request.pax,
                crew: &crew,
                park_fee_markup: request.park_fee_markup,
            });
        Ok(estimate.scaled(request.currency_rate))
    }

    pub fn profit_review(&self, request: &ProfitReviewRequest) -> Result<ProfitReviewSummary, ValidationError> {
        validate_profit_request(request, &self.policy.limits)?;
        Ok(compute_profit_review(request, &self.classifier, &self.policy))
    }
}
