pub mod candidates;
pub mod index;
pub mod register;
pub mod remove;

use axum::{
  body::Body,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};

pub(super) const CONTENT_TYPE_JSON: &str = "application/json";

/// `301 Moved Permanently` to `location`.
pub(super) fn moved_permanently(location: &'static str) -> Response {
  (
    StatusCode::MOVED_PERMANENTLY,
    [(header::LOCATION, HeaderValue::from_static(location))],
  )
    .into_response()
}

pub(super) fn json_response(body: Vec<u8>) -> Response {
  (
    StatusCode::OK,
    [(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON))],
    Body::from(body),
  )
    .into_response()
}
