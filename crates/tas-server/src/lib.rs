//! HTTP layer for the TAS candidate service.
//!
//! Exposes an axum [`Router`] backed by any [`CandidateStore`]. Callers are
//! identified per request through the tenant service; see [`caller`].

pub mod caller;
pub mod config;
pub mod error;
pub mod handlers;
pub mod html;
pub mod policy;

pub use config::{ListMode, ServerConfig, TazzyEnv};
pub use error::Error;

use std::sync::Arc;

use axum::{Router, routing::get};
use tas_core::CandidateStore;
use tas_identity::IdentityResolver;
use tower_http::{services::ServeDir, trace::TraceLayer};

use handlers::{candidates, index, register, remove};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: CandidateStore> {
  pub store:    Arc<S>,
  pub identity: Arc<IdentityResolver>,
  pub config:   Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the service router. Paths not matched below are served from
/// `config.static_dir`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  let static_files = ServeDir::new(&state.config.static_dir);

  Router::new()
    .route("/",                                          get(index::handler::<S>))
    .route("/candidate/register",                        get(register::show::<S>).post(register::update::<S>))
    .route("/candidate/update",                          get(register::show::<S>).post(register::update::<S>))
    .route("/remove/{candidate}",                        get(remove::handler::<S>))
    .route("/tas/devs/tas/candidates",                   get(candidates::list::<S>))
    .route("/tas/devs/tas/candidates/byID/{candidate}",  get(candidates::by_id::<S>))
    .fallback_service(static_files)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
