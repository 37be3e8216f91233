use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

pub mod estimate;
pub mod health;
pub mod profit_review;
pub mod reference;

/// Mounts every route; the caller provides `web::Data<PricingService>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = json!({ "error": err.to_string() });
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });

    cfg.app_data(json_config)
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/reference", web::get().to(reference::get_reference))
                .service(
                    web::scope("/estimates")
                        .route("", web::post().to(estimate::estimate_tour))
                        .route("/group-sizes", web::post().to(estimate::group_sizes))
                        .route("/itinerary", web::post().to(estimate::estimate_itinerary)),
                )
                .route("/profit-review", web::post().to(profit_review::review)),
        );
}
