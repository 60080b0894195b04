//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::policy::Operation;

#[derive(Debug, Error)]
pub enum Error {
  /// Identity resolution yielded no email and the server is configured to
  /// reject such callers.
  #[error("caller identity could not be resolved")]
  Unresolved,
  #[error("render error: {0}")]
  Render(String),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unresolved => {
        (StatusCode::UNAUTHORIZED, "Unresolved identity").into_response()
      }
      Error::Render(msg) => {
        tracing::error!(
          operation = Operation::Render.name(),
          error = %msg,
          "failed to render page"
        );
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
          .into_response()
      }
    }
  }
}
