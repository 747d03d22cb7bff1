//! HTTP request handlers for the Salary Breakup API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_breakup;

use super::request::BreakupRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/templates", get(list_templates_handler))
        .route("/templates/:name", get(get_template_handler))
        .route("/breakup", post(breakup_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET /templates.
async fn list_templates_handler(State(state): State<AppState>) -> impl IntoResponse {
    json_response(
        StatusCode::OK,
        serde_json::json!({ "templates": state.config().template_names() }),
    )
}

/// Handler for GET /templates/:name.
async fn get_template_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.config().get_template(&name) {
        Ok(template) => json_response(StatusCode::OK, template),
        Err(err) => {
            warn!(template = %name, "Template not found");
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Handler for POST /breakup.
///
/// Accepts a template name and a gross amount and returns the breakup.
async fn breakup_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakupRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakup request");

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
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let gross = match request.gross() {
        Ok(gross) => gross,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error.message,
                "Invalid gross amount"
            );
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let config = state.config();
    let template = match config.get_template(&request.template) {
        Ok(template) => template,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                template = %request.template,
                "Template not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return json_response(api_error.status, api_error.error);
        }
    };

    let start_time = Instant::now();
    let breakup = calculate_breakup(template, Some(gross), config.statutory());
    info!(
        correlation_id = %correlation_id,
        template = %template.name,
        gross_monthly = %breakup.gross_monthly,
        net_pay = %breakup.summary.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Breakup completed successfully"
    );

    json_response(StatusCode::OK, breakup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::SalaryBreakup;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn post_breakup(body: String) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/breakup")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let request = BreakupRequest::monthly("Template 1", dec("20000"));
        let response = post_breakup(serde_json::to_string(&request).unwrap()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: SalaryBreakup = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.template_name, "Template 1");
        assert_eq!(result.summary.net_pay, dec("17550"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post_breakup("{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_template_field_returns_validation_error() {
        let response = post_breakup(r#"{"gross_monthly": "20000"}"#.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_template_returns_404() {
        let request = BreakupRequest::monthly("Template 9", dec("20000"));
        let response = post_breakup(serde_json::to_string(&request).unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_templates() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .uri("/templates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["templates"], serde_json::json!(["Template 1", "Template 2"]));
    }
}
