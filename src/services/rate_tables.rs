//! Static reference tables for vehicles, crew roles, room types and meal bases.
//!
//! Lookups never fail: an unknown id resolves to the documented default for
//! its table and is logged.

use log::warn;

use crate::models::{
    accommodation::{MealBasis, RoomType},
    crew::{CrewMember, CrewRole},
    vehicle::{VehicleChoice, VehicleOption},
};

pub const DEFAULT_ROOM_TYPE: &str = "double";
pub const DEFAULT_MEAL_BASIS: &str = "room-only";
pub const CUSTOM_VEHICLE_ID: &str = "custom";

struct VehicleRate {
    id: &'static str,
    name: &'static str,
    daily_rate: f64,
    fuel_consumption: f64,
    max_passengers: u32,
}

const VEHICLES: &[VehicleRate] = &[
    VehicleRate {
        id: "land-cruiser",
        name: "Toyota Land Cruiser",
        daily_rate: 250.0,
        fuel_consumption: 5.0,
        max_passengers: 7,
    },
    VehicleRate {
        id: "safari-van",
        name: "Safari Van",
        daily_rate: 180.0,
        fuel_consumption: 8.0,
        max_passengers: 9,
    },
    VehicleRate {
        id: "minibus",
        name: "Minibus",
        daily_rate: 220.0,
        fuel_consumption: 6.0,
        max_passengers: 14,
    },
    VehicleRate {
        id: "overland-truck",
        name: "Overland Truck",
        daily_rate: 400.0,
        fuel_consumption: 3.5,
        max_passengers: 24,
    },
];

const CREW_ROLES: &[(&str, &str, f64)] = &[
    ("driver", "Driver", 120.0),
    ("guide", "Guide", 150.0),
    ("cook", "Cook", 90.0),
    ("assistant", "Camp Assistant", 70.0),
];

const ROOM_TYPES: &[(&str, &str, f64)] = &[
    ("single", "Single", 1.5),
    ("double", "Double", 1.0),
    ("twin", "Twin", 1.0),
    ("triple", "Triple", 0.9),
    ("family", "Family", 0.85),
];

const MEAL_BASES: &[(&str, &str, f64)] = &[
    ("room-only", "Room Only", 0.0),
    ("bed-breakfast", "Bed & Breakfast", 0.15),
    ("half-board", "Half Board", 0.3),
    ("full-board", "Full Board", 0.45),
    ("all-inclusive", "All Inclusive", 0.6),
];

impl VehicleRate {
    fn to_option(&self) -> VehicleOption {
        VehicleOption {
            id: self.id.to_string(),
            name: self.name.to_string(),
            daily_rate: self.daily_rate,
            fuel_consumption: self.fuel_consumption,
            max_passengers: Some(self.max_passengers),
        }
    }
}

pub fn vehicles() -> Vec<VehicleOption> {
    VEHICLES.iter().map(VehicleRate::to_option).collect()
}

pub fn crew_roles() -> Vec<CrewRole> {
    CREW_ROLES
        .iter()
        .map(|(id, name, daily_rate)| CrewRole {
            id: id.to_string(),
            name: name.to_string(),
            daily_rate: *daily_rate,
        })
        .collect()
}

pub fn room_types() -> Vec<RoomType> {
    ROOM_TYPES
        .iter()
        .map(|(id, name, base_multiplier)| RoomType {
            id: id.to_string(),
            name: name.to_string(),
            base_multiplier: *base_multiplier,
        })
        .collect()
}

pub fn meal_bases() -> Vec<MealBasis> {
    MEAL_BASES
        .iter()
        .map(|(id, name, cost_multiplier)| MealBasis {
            id: id.to_string(),
            name: name.to_string(),
            cost_multiplier: *cost_multiplier,
        })
        .collect()
}

/// Unknown ids fall back to the first vehicle in the table.
pub fn find_vehicle(id: &str) -> VehicleOption {
    match VEHICLES.iter().find(|v| v.id == id) {
        Some(vehicle) => vehicle.to_option(),
        None => {
            warn!("Unknown vehicle id '{}', using '{}'", id, VEHICLES[0].id);
            VEHICLES[0].to_option()
        }
    }
}

pub fn resolve_vehicle(choice: &VehicleChoice) -> VehicleOption {
    match choice {
        VehicleChoice::Table { id } => find_vehicle(id),
        VehicleChoice::Custom {
            name,
            daily_rate,
            fuel_consumption,
        } => VehicleOption {
            id: CUSTOM_VEHICLE_ID.to_string(),
            name: name.clone(),
            daily_rate: *daily_rate,
            fuel_consumption: *fuel_consumption,
            max_passengers: None,
        },
    }
}

/// Unknown ids fall back to the first role (driver).
pub fn find_crew_role(id: &str) -> CrewRole {
    let roles = crew_roles();
    match roles.iter().position(|r| r.id == id) {
        Some(index) => roles[index].clone(),
        None => {
            warn!("Unknown crew role '{}', using '{}'", id, roles[0].id);
            roles[0].clone()
        }
    }
}

/// Canonicalises each member's role against the role table.
pub fn normalize_crew(crew: &[CrewMember]) -> Vec<CrewMember> {
    crew.iter()
        .map(|member| CrewMember {
            role: find_crew_role(&member.role).id,
            ..member.clone()
        })
        .collect()
}

/// Unknown ids fall back to a double room.
pub fn find_room_type(id: &str) -> RoomType {
    let rooms = room_types();
    let lookup = |key: &str| rooms.iter().find(|r| r.id == key).cloned();
    lookup(id).unwrap_or_else(|| {
        warn!("Unknown room type '{}', using '{}'", id, DEFAULT_ROOM_TYPE);
        lookup(DEFAULT_ROOM_TYPE).unwrap_or_else(|| rooms[0].clone())
    })
}

/// Unknown ids fall back to room only.
pub fn find_meal_basis(id: &str) -> MealBasis {
    let bases = meal_bases();
    let lookup = |key: &str| bases.iter().find(|m| m.id == key).cloned();
    lookup(id).unwrap_or_else(|| {
        warn!("Unknown meal basis '{}', using '{}'", id, DEFAULT_MEAL_BASIS);
        lookup(DEFAULT_MEAL_BASIS).unwrap_or_else(|| bases[0].clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_use_fallbacks() {
        assert_eq!(find_vehicle("hovercraft").id, "land-cruiser");
        assert_eq!(find_room_type("penthouse").id, "double");
        assert_eq!(find_meal_basis("buffet").id, "room-only");
        assert_eq!(find_crew_role("pilot").id, "driver");
    }

    #[test]
    fn test_known_ids_resolve() {
        let truck = find_vehicle("overland-truck");
        assert_eq!(truck.daily_rate, 400.0);
        assert_eq!(truck.max_passengers, Some(24));
        assert_eq!(find_room_type("single").base_multiplier, 1.5);
        assert_eq!(find_meal_basis("half-board").cost_multiplier, 0.3);
        assert_eq!(find_crew_role("guide").daily_rate, 150.0);
    }

    #[test]
    fn test_default_adjustments_are_identity() {
        assert_eq!(find_room_type(DEFAULT_ROOM_TYPE).base_multiplier, 1.0);
        assert_eq!(find_meal_basis(DEFAULT_MEAL_BASIS).cost_multiplier, 0.0);
    }

    #[test]
    fn test_custom_vehicle_overrides_table() {
        let choice = VehicleChoice::Custom {
            name: "Borrowed 4x4".to_string(),
            daily_rate: 95.0,
            fuel_consumption: 7.5,
        };
        let vehicle = resolve_vehicle(&choice);
        assert_eq!(vehicle.id, CUSTOM_VEHICLE_ID);
        assert_eq!(vehicle.daily_rate, 95.0);
        assert_eq!(vehicle.fuel_consumption, 7.5);
        assert_eq!(vehicle.max_passengers, None);
    }

    #[test]
    fn test_normalize_crew_keeps_rates() {
        let crew = vec![
            CrewMember {
                role: "cook".to_string(),
                daily_rate: 90.0,
                accommodation_rate: 40.0,
                meal_allowance: 20.0,
            },
            CrewMember {
                role: "tracker".to_string(),
                daily_rate: 80.0,
                accommodation_rate: 0.0,
                meal_allowance: 10.0,
            },
        ];
        let normalized = normalize_crew(&crew);
        assert_eq!(normalized[0].role, "cook");
        assert_eq!(normalized[0].daily_rate, 90.0);
        assert_eq!(normalized[1].role, "driver");
        assert_eq!(normalized[1].daily_rate, 80.0);
    }
}
