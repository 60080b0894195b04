//! HTTP client for the tenant service's assertion lookup.

use std::time::Duration;

use reqwest::Client;

use crate::{Attributes, Error, Result, SECRET_HEADER, TENANT_HEADER};

/// Connection settings for the tenant service.
#[derive(Debug, Clone, Default)]
pub struct IdentityConfig {
  /// Base URL of the tenant service, e.g. `https://tazzy.example.com`.
  pub base_url:  String,
  /// Shared secret sent as `tazzy-secret` on every call.
  pub secret:    String,
  /// This service's own tenant short code, sent as `tazzy-tenant`.
  pub shortcode: String,
  /// Per-request timeout. `None` waits for the upstream indefinitely.
  pub timeout:   Option<Duration>,
}

/// Resolves assertion keys into caller identities.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct IdentityResolver {
  client: Client,
  config: IdentityConfig,
}

impl IdentityResolver {
  pub fn new(config: IdentityConfig) -> Result<Self> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(Error::Client)?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &IdentityConfig { &self.config }

  /// `{base}/core/tenants/{tenant}/saml/assertions/byKey/{key}/json`
  pub fn assertion_url(&self, tenant: &str, assertion_key: &str) -> String {
    format!(
      "{}/core/tenants/{tenant}/saml/assertions/byKey/{assertion_key}/json",
      self.config.base_url.trim_end_matches('/'),
    )
  }

  /// Fetch the attribute bag for `assertion_key` issued by `tenant`.
  ///
  /// The outbound `tazzy-tenant` header carries this service's short code,
  /// not `tenant`.
  pub async fn resolve(
    &self,
    tenant: &str,
    assertion_key: &str,
  ) -> Result<Attributes> {
    let url = self.assertion_url(tenant, assertion_key);

    let resp = self
      .client
      .get(&url)
      .header(SECRET_HEADER, &self.config.secret)
      .header(TENANT_HEADER, &self.config.shortcode)
      .send()
      .await
      .map_err(Error::Request)?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status(status));
    }

    let body = resp.bytes().await.map_err(Error::Request)?;
    Ok(serde_json::from_slice(&body)?)
  }

  /// Resolve the caller's email, or `""` if resolution fails for any reason.
  pub async fn resolve_email(&self, tenant: &str, assertion_key: &str) -> String {
    match self.resolve(tenant, assertion_key).await {
      Ok(attrs) => {
        tracing::debug!(tenant, email = %attrs.email, "resolved identity");
        attrs.email
      }
      Err(e) => {
        tracing::warn!(tenant, error = %e, "identity resolution failed");
        String::new()
      }
    }
  }
}
