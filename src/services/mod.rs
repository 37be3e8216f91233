pub mod aggregation;
pub mod classifier;
pub mod cost_calculators;
pub mod group_size;
pub mod itinerary_costs;
pub mod policy;
pub mod pricing_service;
pub mod profit_review;
pub mod rate_tables;
pub mod validation;
