use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::{
    models::{
        accommodation::{MealBasis, RoomType},
        crew::CrewRole,
        vehicle::VehicleOption,
    },
    services::rate_tables,
};

#[derive(Serialize)]
struct ReferenceTables {
    vehicles: Vec<VehicleOption>,
    crew_roles: Vec<CrewRole>,
    room_types: Vec<RoomType>,
    meal_bases: Vec<MealBasis>,
}

/*
    /api/reference
*/
pub async fn get_reference() -> impl Responder {
    HttpResponse::Ok().json(ReferenceTables {
        vehicles: rate_tables::vehicles(),
        crew_roles: rate_tables::crew_roles(),
        room_types: rate_tables::room_types(),
        meal_bases: rate_tables::meal_bases(),
    })
}
