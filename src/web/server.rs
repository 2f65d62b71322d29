// © 2025 the Moonlight project developers
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::signature::verify_signature;
use super::state::AppState;
use crate::discord::utils::responses::{INTERNAL_ERROR, message_response};
use crate::discord::{InteractionOutcome, route_interaction};
use axum::{Json, Router};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use miette::IntoDiagnostic;
use serde_json::json;
use tokio::net::TcpListener;
use twilight_model::application::interaction::Interaction;

const COMMUNITY_REDIRECT_URL: &str = "https://moonlight-stream.org/discord";
const BAD_SIGNATURE: &str = "Bad Request Signature";

pub fn build_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(community_redirect).post(handle_interaction).fallback(not_found))
		.fallback(not_found)
		.with_state(state)
}

pub async fn run_server(state: AppState) -> miette::Result<()> {
	let bind_addr = state.config.web.bind_addr.clone();
	let app = build_router(state);

	tracing::info!("Listening on http://{}", &bind_addr);
	let listener = TcpListener::bind(&bind_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

async fn community_redirect() -> impl IntoResponse {
	(StatusCode::FOUND, [(header::LOCATION, COMMUNITY_REDIRECT_URL)])
}

async fn not_found() -> impl IntoResponse {
	(StatusCode::NOT_FOUND, "Not Found")
}

async fn handle_interaction(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
	let signature = headers.get("X-Signature-Ed25519").and_then(|value| value.to_str().ok());
	let timestamp = headers.get("X-Signature-Timestamp").and_then(|value| value.to_str().ok());
	let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
		return (StatusCode::UNAUTHORIZED, BAD_SIGNATURE).into_response();
	};
	if !verify_signature(&state.public_key, signature, timestamp, &body) {
		return (StatusCode::UNAUTHORIZED, BAD_SIGNATURE).into_response();
	}

	let Ok(interaction) = serde_json::from_slice::<Interaction>(&body) else {
		tracing::warn!("Received a signed interaction that could not be parsed");
		return (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid Interaction"}))).into_response();
	};

	let outcome = match route_interaction(&state.context, &interaction).await {
		Ok(outcome) => outcome,
		Err(error) => {
			tracing::error!(source = ?error, "An error occurred handling an interaction");
			InteractionOutcome::Response(message_response(INTERNAL_ERROR))
		}
	};
	match outcome {
		InteractionOutcome::Response(response) => Json(response).into_response(),
		InteractionOutcome::UnknownCommand => {
			(StatusCode::BAD_REQUEST, Json(json!({"error": "Unknown Command"}))).into_response()
		}
		InteractionOutcome::UnknownInteractionType => {
			(StatusCode::BAD_REQUEST, Json(json!({"error": "Unknown Interaction Type"}))).into_response()
		}
	}
}
