use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;

/// Rejections raised at the request boundary, before any calculator runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("duration must be at least 1 day")]
    InvalidDuration,
    #[error("{field} must be at least 1")]
    InvalidPax { field: &'static str },
    #[error("min_pax ({min}) must be less than max_pax ({max})")]
    InvalidPaxRange { min: u32, max: u32 },
    #[error("current_pax ({current}) must be within [{min}, {max}]")]
    PaxOutOfRange { current: u32, min: u32, max: u32 },
    #[error("fuel consumption must be greater than zero")]
    InvalidFuelConsumption,
    #[error("fuel price must be greater than zero")]
    InvalidFuelPrice,
    #[error("currency rate must be greater than zero")]
    InvalidCurrencyRate,
    #[error("{field} must be a non-negative number")]
    NegativeValue { field: String },
    #[error("end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("itinerary must contain at least one day")]
    EmptyItinerary,
    #[error("itinerary day {found} is out of sequence, expected day {expected}")]
    NonContiguousItinerary { expected: u32, found: u32 },
    #[error("itinerary day {day} on {date} does not come after the previous day")]
    DatesOutOfOrder { day: u32, date: NaiveDate },
    #[error("trip of {days} days exceeds the limit of {max} days")]
    TripTooLong { days: i64, max: u32 },
    #[error("group size range of {span} pax exceeds the limit of {max}")]
    PaxSpanTooLarge { span: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read pricing policy: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse pricing policy: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid keyword in pricing policy: {0}")]
    Keyword(#[from] regex::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
