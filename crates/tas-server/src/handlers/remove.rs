//! `GET /remove/{candidate}`: delete the caller's own record.
//!
//! The path segment is accepted but does not select the record: the target
//! is always the email resolved from the caller's headers.

use axum::{
  extract::{Path, State},
  response::Response,
};
use tas_core::CandidateStore;

use crate::{
  AppState,
  caller::Caller,
  handlers::moved_permanently,
  policy::{Operation, absorb},
};

pub async fn handler<S>(
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
      "path candidate ignored; removing caller's own record"
    );
  }

  let removed = absorb(
    Operation::Remove,
    &caller.email,
    state.store.delete(&caller.email).await,
  );
  if removed.is_some() {
    tracing::info!(email = %caller.email, tenant = %caller.tenant, "candidate removed");
  }

  moved_permanently("/")
}
