//! JSON endpoints under `/tas/devs/tas/candidates`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/tas/devs/tas/candidates` | Array of every record, see [`ListMode`] |
//! | `GET`  | `/tas/devs/tas/candidates/byID/{candidate}` | Caller's own stored record; empty body if absent |

use axum::{
  extract::{Path, State},
  response::Response,
};
use tas_core::{CandidateStore, listing};

use crate::{
  AppState,
  caller::Caller,
  config::ListMode,
  handlers::json_response,
  policy::{Operation, absorb},
};

/// `GET /tas/devs/tas/candidates`
pub async fn list<S>(State(state): State<AppState<S>>) -> Response
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  let entries = absorb(Operation::ListJson, "*", state.store.list_raw().await)
    .unwrap_or_default();

  let body = match state.config.list_mode {
    ListMode::Raw => listing::join_raw(entries.iter().map(|e| &e.value)),
    ListMode::Reencode => {
      match absorb(Operation::ListJson, "*", listing::reencode(&entries)) {
        Some(out) => {
          for key in &out.skipped {
            tracing::warn!(key = %key, "dropping undecodable candidate from list");
          }
          out.body
        }
        None => listing::join_raw(std::iter::empty::<&[u8]>()),
      }
    }
  };

  json_response(body)
}

/// `GET /tas/devs/tas/candidates/byID/{candidate}`
///
/// The path segment is accepted but the record returned is always the
/// caller's own.
pub async fn by_id<S>(
  State(state): State<AppState<S>>,
  Path(candidate): Path<String>,
  caller: Caller,
) -> Response
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  if candidate != caller.email {
    tracing::debug!(
      path = %candidate,
      email = %caller.email,
      "path candidate ignored; returning caller's own record"
    );
  }

  let raw = absorb(
    Operation::FetchById,
    &caller.email,
    state.store.get_raw(&caller.email).await,
  )
  .flatten()
  .unwrap_or_default();

  json_response(raw)
}
