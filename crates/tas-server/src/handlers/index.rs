//! `GET /`: the candidate list page.

use axum::{
  extract::State,
  response::{Html, IntoResponse, Response},
};
use tas_core::{CandidateStore, listing};

use crate::{
  AppState,
  error::Error,
  html,
  policy::{Operation, absorb},
};

pub async fn handler<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  let entries = absorb(Operation::ListPage, "*", state.store.list_raw().await)
    .unwrap_or_default();

  let decoded = listing::decode_lenient(&entries);
  for key in &decoded.skipped {
    tracing::warn!(key = %key, "skipping undecodable candidate on index page");
  }

  let page = html::index_page(&decoded.candidates)?;
  Ok(Html(page).into_response())
}
