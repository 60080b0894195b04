//! Server configuration.
//!
//! [`ServerConfig`] is layered from built-in defaults, an optional TOML file
//! and `TAS_`-prefixed environment variables. The tenant service settings in
//! [`TazzyEnv`] come from the un-prefixed variables the hosting platform
//! injects (`IO_TAZZY_URL`, `IO_TAZZY_SECRET`, `APP_SHORTCODE`).

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use config::{ConfigError, Environment};
use serde::Deserialize;
use tas_identity::IdentityConfig;

/// How `GET /tas/devs/tas/candidates` serialises the store.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
  /// Stored JSON values joined verbatim.
  #[default]
  Raw,
  /// Values decoded and re-encoded; undecodable ones are dropped.
  Reencode,
}

/// Runtime server configuration.
#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
  pub host:              String,
  pub port:              u16,
  pub store_path:        PathBuf,
  pub static_dir:        PathBuf,
  #[serde(default)]
  pub list_mode:         ListMode,
  /// Reject identity-bearing requests whose caller resolves to no email
  /// instead of reading and writing the record stored under `""`.
  #[serde(default)]
  pub reject_unresolved: bool,
}

impl ServerConfig {
  /// Load from `file` (if it exists) and the `TAS_*` environment.
  pub fn load(file: &Path) -> Result<Self, ConfigError> {
    Self::load_with(file, Environment::with_prefix("TAS").try_parsing(true))
  }

  pub fn load_with(file: &Path, env: Environment) -> Result<Self, ConfigError> {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8080_i64)?
      .set_default("store_path", "/db/tas-candidate.db")?
      .set_default("static_dir", "./static")?
      .set_default("list_mode", "raw")?
      .set_default("reject_unresolved", false)?
      .add_source(config::File::from(file).required(false))
      .add_source(env)
      .build()?
      .try_deserialize()
  }
}

/// Tenant service settings injected by the hosting platform.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct TazzyEnv {
  #[serde(default)]
  pub io_tazzy_url:          String,
  #[serde(default)]
  pub io_tazzy_secret:       String,
  #[serde(default)]
  pub app_shortcode:         String,
  #[serde(default)]
  pub io_tazzy_timeout_secs: Option<u64>,
}

impl TazzyEnv {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_with(Environment::default())
  }

  pub fn load_with(env: Environment) -> Result<Self, ConfigError> {
    config::Config::builder()
      .add_source(env)
      .build()?
      .try_deserialize()
  }

  pub fn identity_config(&self) -> IdentityConfig {
    IdentityConfig {
      base_url:  self.io_tazzy_url.clone(),
      secret:    self.io_tazzy_secret.clone(),
      shortcode: self.app_shortcode.clone(),
      timeout:   self.io_tazzy_timeout_secs.map(Duration::from_secs),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn env(prefix: Option<&str>, vars: &[(&str, &str)]) -> Environment {
    let map: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
      .collect();
    let env = match prefix {
      Some(p) => Environment::with_prefix(p).try_parsing(true),
      None => Environment::default(),
    };
    env.source(Some(map))
  }

  #[test]
  fn defaults_apply_without_file_or_env() {
    let dir = tempfile::tempdir().unwrap();
    let cfg =
      ServerConfig::load_with(&dir.path().join("missing.toml"), env(Some("TAS"), &[]))
        .unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store_path, PathBuf::from("/db/tas-candidate.db"));
    assert_eq!(cfg.static_dir, PathBuf::from("./static"));
    assert_eq!(cfg.list_mode, ListMode::Raw);
    assert!(!cfg.reject_unresolved);
  }

  #[test]
  fn file_then_env_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    std::fs::write(
      &file,
      "port = 9000\nstore_path = \"/tmp/c.db\"\nlist_mode = \"reencode\"\n",
    )
    .unwrap();

    let cfg = ServerConfig::load_with(
      &file,
      env(Some("TAS"), &[("TAS_PORT", "9100"), ("TAS_REJECT_UNRESOLVED", "true")]),
    )
    .unwrap();
    assert_eq!(cfg.port, 9100);
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/c.db"));
    assert_eq!(cfg.list_mode, ListMode::Reencode);
    assert!(cfg.reject_unresolved);
  }

  #[test]
  fn tazzy_env_reads_platform_variables() {
    let tazzy = TazzyEnv::load_with(env(None, &[
      ("IO_TAZZY_URL", "https://tazzy.example.com"),
      ("IO_TAZZY_SECRET", "12345"),
      ("APP_SHORTCODE", "tas"),
      ("IO_TAZZY_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();

    let id = tazzy.identity_config();
    assert_eq!(id.base_url, "https://tazzy.example.com");
    assert_eq!(id.secret, "12345");
    assert_eq!(id.shortcode, "tas");
    assert_eq!(id.timeout, Some(Duration::from_secs(7)));
  }

  #[test]
  fn tazzy_env_missing_variables_are_empty() {
    let tazzy = TazzyEnv::load_with(env(None, &[])).unwrap();
    assert!(tazzy.io_tazzy_url.is_empty());
    assert!(tazzy.identity_config().timeout.is_none());
  }
}
