//! HTTP request handlers for the Trennungsgeld API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::Calculator;
use crate::config::{ConfigLoader, RateSchedule};
use crate::error::{EngineError, EngineResult};
use crate::report::format_breakdown;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_calculation(correlation_id, &request, state.config()) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                rates_effective_date = %response.rates_effective_date,
                total_allowance = %response.result.total_allowance,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Picks the schedule for the request: the one effective on the requested
/// date, or the newest one.
fn select_schedule<'a>(
    request: &CalculationRequest,
    config: &'a ConfigLoader,
) -> EngineResult<&'a RateSchedule> {
    match request.effective_date {
        Some(date) => config.rates_for(date),
        None => config.latest().ok_or_else(|| EngineError::ConfigNotFound {
            path: "no rate schedule loaded".to_string(),
        }),
    }
}

fn perform_calculation(
    calculation_id: Uuid,
    request: &CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<CalculationResponse> {
    let schedule = select_schedule(request, config)?;
    let calculator = Calculator::new(schedule.allowances, schedule.travel);

    let result = calculator.calculate(&request.meal_allowance, &request.travel_costs)?;
    let report = format_breakdown(&result);

    Ok(CalculationResponse {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rates_effective_date: schedule.effective_date,
        result,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::builtin())
    }

    async fn post_json(body: String) -> axum::response::Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = r#"{
            "meal_allowance": { "full_days": 2, "arrival_departure_days": 1 },
            "travel_costs": { "initial_trip_distance_km": 100 }
        }"#;

        let response = post_json(body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.result.total_allowance, Decimal::from_str("90").unwrap());
        assert_eq!(result.report[0], "Berechnungsübersicht:");
        assert_eq!(
            result.rates_effective_date,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post_json("{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_wrong_field_type_returns_validation_error() {
        let response = post_json(r#"{ "meal_allowance": { "full_days": "many" } }"#.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_domain_validation_failure_returns_400() {
        let response =
            post_json(r#"{ "travel_costs": { "weekly_home_trips": -1 } }"#.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("home trips must be non-negative"));
        assert_eq!(
            error.details.as_deref(),
            Some("Field 'weekly_home_trips' failed validation")
        );
    }

    #[tokio::test]
    async fn test_oversized_amount_returns_400() {
        let body = r#"{
            "travel_costs": {
                "commuting_days": 2,
                "commuting_distance_km": "79228162514264337593543950335"
            }
        }"#;

        let response = post_json(body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("amount out of range"));
    }

    #[tokio::test]
    async fn test_date_before_schedules_returns_rates_not_found() {
        let response = post_json(r#"{ "effective_date": "2019-12-31" }"#.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "RATES_NOT_FOUND");
    }
}
