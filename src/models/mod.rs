pub mod accommodation;
pub mod crew;
pub mod estimate;
pub mod itinerary;
pub mod profit;
pub mod trip;
pub mod vehicle;
