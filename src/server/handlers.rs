//! HTTP request handlers
//!
//! One generic read handler and one generic write handler, each bound to a
//! [`PowerSetting`] when the routes are built.

use crate::{
    error::ApiError,
    server::app::AppState,
    store::{ConfigStore, PowerSetting},
    types::{ValueRequest, ValueResponse},
};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get, post},
};

/// Routes for `GET /get/peakshaving/<setting>`
///
/// Any method other than GET is rejected. HEAD gets an explicit handler,
/// otherwise axum would answer it from the GET route.
pub fn read_setting(setting: PowerSetting) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move {
        read_value(&state.store, setting).await
    })
    .head(reject_method)
    .fallback(reject_method)
}

/// Routes for `POST /set/peakshaving/<setting>`
///
/// The body size is not capped.
pub fn write_setting(setting: PowerSetting) -> MethodRouter<AppState> {
    post(
        move |State(state): State<AppState>, body: Result<Bytes, BytesRejection>| async move {
            let body = buffered_body(setting, body)?;
            write_value(&state.store, setting, &body).await
        },
    )
    .fallback(reject_method)
    .layer(DefaultBodyLimit::disable())
}

/// Turn a failed body read into a logged 400
pub fn buffered_body(
    setting: PowerSetting,
    body: Result<Bytes, BytesRejection>,
) -> Result<Bytes, ApiError> {
    body.map_err(|e| {
        tracing::warn!("Unable to read body for {}: {}", setting, e);
        ApiError::malformed_body(e.to_string())
    })
}

/// Current value of `setting` as `{"value": <float>}`
pub async fn read_value(store: &ConfigStore, setting: PowerSetting) -> Result<Response, ApiError> {
    let value = store.get(setting).await;
    tracing::debug!("{} is {} {}", setting.label(), value, setting.unit());

    let body = ValueResponse::new(value).to_json().map_err(|reason| {
        tracing::error!("Error encoding {} response: {}", setting, reason);
        ApiError::encode_failure(reason)
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Decode `{"value": <float>}` from `body` and store it
///
/// The store is left untouched when the body does not decode.
pub async fn write_value(
    store: &ConfigStore,
    setting: PowerSetting,
    body: &[u8],
) -> Result<StatusCode, ApiError> {
    let request = ValueRequest::from_body(body).map_err(|e| {
        tracing::warn!("Invalid body for {}: {}", setting, e);
        ApiError::malformed_body(e.to_string())
    })?;

    store.set(setting, request.value).await;
    tracing::info!(
        "{} set to: {} {}",
        setting.label(),
        request.value,
        setting.unit()
    );

    Ok(StatusCode::OK)
}

/// Fallback for methods an endpoint does not serve
pub async fn reject_method(method: Method) -> ApiError {
    tracing::warn!("Invalid request method: {}", method);
    ApiError::method_not_allowed(method)
}
