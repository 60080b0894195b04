//! The attribute bag attached to a SAML assertion.

use serde::{Deserialize, Serialize};

/// Attributes returned by the tenant service for one assertion key.
///
/// Every field is optional on the wire and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
  #[serde(rename = "entityID", default)]
  pub entity_id:   String,
  #[serde(rename = "nameID", default)]
  pub name_id:     String,
  #[serde(rename = "tas.personal.email", default)]
  pub email:       String,
  #[serde(rename = "tas.personal.familyName", default)]
  pub family_name: String,
  #[serde(rename = "tas.personal.givenName", default)]
  pub given_name:  String,
  #[serde(rename = "tas.personal.image", default)]
  pub image:       String,
  #[serde(rename = "tas.roles", default)]
  pub roles:       Vec<String>,
}
