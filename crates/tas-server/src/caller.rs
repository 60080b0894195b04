//! Caller identity extractor.
//!
//! Identity-bearing routes take a [`Caller`]: the `tazzy-tenant` and
//! `tazzy-saml` headers are traded for an email through the tenant service.
//! Missing headers are passed through as empty strings; the tenant service
//! decides what that means.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use tas_core::CandidateStore;
use tas_identity::{SAML_HEADER, TENANT_HEADER};

use crate::{AppState, error::Error, policy::Operation};

/// The resolved caller of one request.
#[derive(Debug, Clone)]
pub struct Caller {
  /// Value of the `tazzy-tenant` header.
  pub tenant: String,
  /// Email from the assertion, or `""` when resolution failed.
  pub email:  String,
}

fn header_str(headers: &HeaderMap, name: &str) -> String {
  headers
    .get(name)
    .and_then(|v| v.to_str().ok())
    .unwrap_or_default()
    .to_owned()
}

impl<S> FromRequestParts<AppState<S>> for Caller
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let tenant        = header_str(&parts.headers, TENANT_HEADER);
    let assertion_key = header_str(&parts.headers, SAML_HEADER);
    let email         = state.identity.resolve_email(&tenant, &assertion_key).await;

    if email.is_empty() && state.config.reject_unresolved {
      tracing::info!(
        operation = Operation::ResolveCaller.name(),
        tenant = %tenant,
        "rejecting caller with unresolved identity"
      );
      return Err(Error::Unresolved);
    }

    Ok(Caller { tenant, email })
  }
}
