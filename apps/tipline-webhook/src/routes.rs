use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;
use tipline_domain::Reply;
use tipline_service::{
	Error as ServiceError, FanoutReport, NewTipEvent, ResetReport, WebhookRequest, WebhookResponse,
};

pub const APOLOGY_SPEECH: &str = "Sorry, something went wrong on my end. Please try again later.";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/webhook", post(webhook))
		.route("/v1/tips/created", post(tip_created))
		.with_state(state)
}

pub fn admin_router(state: AppState) -> Router {
	Router::new().route("/v1/admin/reset", post(reset)).with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn webhook(
	State(state): State<AppState>,
	Json(payload): Json<WebhookRequest>,
) -> Json<WebhookResponse> {
	let user_flags = payload.user_flags;

	match state.service.handle(payload).await {
		Ok(response) => Json(response),
		Err(err) => {
			tracing::error!(error = %err, "Webhook activation failed.");

			// The platform must always hear something; degrade to an apology
			// instead of a 5xx it cannot speak.
			Json(WebhookResponse { reply: Reply::close(APOLOGY_SPEECH), user_flags })
		},
	}
}

async fn tip_created(
	State(state): State<AppState>,
	Json(event): Json<NewTipEvent>,
) -> Result<Json<FanoutReport>, ApiError> {
	let report = state.service.notify_new_tip(&event).await?;

	Ok(Json(report))
}

async fn reset(State(state): State<AppState>) -> Result<Json<ResetReport>, ApiError> {
	let report = state.service.reset_tips().await?;

	Ok(Json(report))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let (status, error_code) = match &err {
			ServiceError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "invalid_request"),
			ServiceError::Provider { .. } => (StatusCode::BAD_GATEWAY, "provider_unavailable"),
			ServiceError::SeedList { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "seed_list"),
			ServiceError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "storage"),
		};

		Self { status, error_code: error_code.to_string(), message: err.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
