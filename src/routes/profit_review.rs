use actix_web::{web, HttpResponse};

use crate::{
    error::ApiError, models::profit::ProfitReviewRequest,
    services::pricing_service::PricingService,
};

/*
    /api/profit-review
*/
pub async fn review(
    service: web::Data<PricingService>,
    input: web::Json<ProfitReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    let summary = service.profit_review(&input)?;
    Ok(HttpResponse::Ok().json(summary))
}
