//! Economies-of-scale sweep across hypothetical group sizes.
//!
//! Only fixed costs are spread over the hypothetical pax; the per-person
//! variable cost stays at the value computed for the actual group.

use log::debug;

use crate::models::estimate::GroupSizeCost;

const SUMMARY_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

pub fn calculate_costs_by_group_size(
    min_pax: u32,
    max_pax: u32,
    current_pax: u32,
    fixed_costs: f64,
    variable_costs: f64,
    duration: u32,
) -> Vec<GroupSizeCost> {
    debug!(
        "Group size sweep {}..={} around {} pax (fixed {:.2}, variable {:.2})",
        min_pax, max_pax, current_pax, fixed_costs, variable_costs
    );

    (min_pax..=max_pax)
        .map(|pax| {
            let total_cost = fixed_costs / f64::from(pax) + variable_costs;
            GroupSizeCost {
                pax,
                total_cost,
                daily_cost: total_cost / f64::from(duration),
            }
        })
        .collect()
}

/// Group sizes at 0/25/50/75/100% of the range, rounded. Collisions are kept.
pub fn summary_group_sizes(min_pax: u32, max_pax: u32) -> Vec<u32> {
    let span = f64::from(max_pax.saturating_sub(min_pax));
    SUMMARY_FRACTIONS
        .iter()
        .map(|fraction| min_pax + (span * fraction).round() as u32)
        .collect()
}

/// Picks the summary rows out of a full sweep.
pub fn summarize_group_sizes(costs: &[GroupSizeCost], min_pax: u32, max_pax: u32) -> Vec<GroupSizeCost> {
    summary_group_sizes(min_pax, max_pax)
        .into_iter()
        .filter_map(|pax| costs.iter().find(|c| c.pax == pax).copied())
        .collect()
}
