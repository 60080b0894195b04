//! Identity resolution against the Tazzy tenant service.
//!
//! A caller proves who they are with an opaque SAML assertion key issued by
//! the tenant service. [`IdentityResolver`] trades that key for the attribute
//! bag of the assertion and, in the common case, just the email address.
//!
//! Resolution is best effort. [`IdentityResolver::resolve_email`] never fails:
//! transport errors, timeouts, non-2xx responses and undecodable bodies are
//! logged and collapse to an empty email.

pub mod attributes;
pub mod error;
pub mod resolver;

pub use attributes::Attributes;
pub use error::{Error, Result};
pub use resolver::{IdentityConfig, IdentityResolver};

/// Header carrying the shared secret on outbound calls.
pub const SECRET_HEADER: &str = "tazzy-secret";
/// Header carrying a tenant short code, inbound and outbound.
pub const TENANT_HEADER: &str = "tazzy-tenant";
/// Inbound header carrying the caller's assertion key.
pub const SAML_HEADER: &str = "tazzy-saml";
