use crate::models::estimate::{CostBreakdown, CostSummary};

/// Rolls category totals up into the quote headline figures.
///
/// `current_pax` and `duration` must be positive; the caller validates them.
pub fn summarize_costs(breakdown: &CostBreakdown, current_pax: u32, duration: u32) -> CostSummary {
    let pax = f64::from(current_pax);
    let days = f64::from(duration);

    let fixed_costs = breakdown.vehicle + breakdown.fuel + breakdown.crew;
    let variable_costs =
        breakdown.accommodation + breakdown.activities + breakdown.meals + breakdown.park_fees;
    let total_tour_cost = fixed_costs + variable_costs;
    let cost_per_person = total_tour_cost / pax;

    CostSummary {
        fixed_costs,
        variable_cost_per_person: variable_costs / pax,
        total_tour_cost,
        cost_per_person,
        daily_cost_per_person: cost_per_person / days,
    }
}
