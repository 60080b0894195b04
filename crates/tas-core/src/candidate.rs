//! Candidate: one person's submitted profile.
//!
//! Records are stored as compact JSON under their own email address. The
//! encoded form uses the key spellings `firstname`, `lastname` and `Email`;
//! decoding also accepts the camel-case and capitalised spellings that older
//! clients send, and treats missing fields as empty.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
  #[serde(
    rename = "firstname",
    alias = "firstName",
    alias = "FirstName",
    default
  )]
  pub first_name: String,
  #[serde(
    rename = "lastname",
    alias = "lastName",
    alias = "LastName",
    default
  )]
  pub last_name:  String,
  #[serde(rename = "Email", alias = "email", default)]
  pub email:      String,
}

impl Candidate {
  pub fn new(
    email: impl Into<String>,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
  ) -> Self {
    Self {
      first_name: first_name.into(),
      last_name:  last_name.into(),
      email:      email.into(),
    }
  }

  /// Encode to the stored JSON representation.
  pub fn encode(&self) -> Result<Vec<u8>> { Ok(serde_json::to_vec(self)?) }

  /// Decode the bytes stored under `key`.
  pub fn decode(key: &str, bytes: &[u8]) -> Result<Self> {
    serde_json::from_slice(bytes).map_err(|source| Error::Decode {
      key: key.to_owned(),
      source,
    })
  }

  /// Full display name, `"First Last"`, trimmed when either half is empty.
  pub fn display_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
      .trim()
      .to_owned()
  }
}
