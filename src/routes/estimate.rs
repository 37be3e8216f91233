use actix_web::{web, HttpResponse};

use crate::{
    error::ApiError,
    models::estimate::{GroupSizeRequest, ItineraryEstimateRequest, TourEstimateRequest},
    services::pricing_service::PricingService,
};

/*
    /api/estimates
*/
pub async fn estimate_tour(
    service: web::Data<PricingService>,
    input: web::Json<TourEstimateRequest>,
) -> Result<HttpResponse, ApiError> {
    let estimate = service.estimate_tour(&input)?;
    Ok(HttpResponse::Ok().json(estimate))
}

/*
    /api/estimates/group-sizes
*/
pub async fn group_sizes(
    service: web::Data<PricingService>,
    input: web::Json<GroupSizeRequest>,
) -> Result<HttpResponse, ApiError> {
    let analysis = service.group_sizes(&input)?;
    Ok(HttpResponse::Ok().json(analysis))
}

/*
    /api/estimates/itinerary
*/
pub async fn estimate_itinerary(
    service: web::Data<PricingService>,
    input: web::Json<ItineraryEstimateRequest>,
) -> Result<HttpResponse, ApiError> {
    let estimate = service.estimate_itinerary(&input)?;
    Ok(HttpResponse::Ok().json(estimate))
}
