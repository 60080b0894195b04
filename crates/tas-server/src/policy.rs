//! Failure policy for backend calls made while serving a request.
//!
//! Almost every failure is absorbed: it is logged and the handler carries on
//! with an empty value, so callers see the usual 200/301. The table lives in
//! [`Operation::policy`]; only the operations listed as
//! [`Policy::LogAndContinue`] may go through [`absorb`].
//!
//! | Operation | On failure |
//! |-----------|------------|
//! | [`Operation::ReadForForm`]   | empty form |
//! | [`Operation::WriteFromForm`] | redirect anyway |
//! | [`Operation::Remove`]        | redirect anyway |
//! | [`Operation::FetchById`]     | empty body |
//! | [`Operation::ListJson`]      | `[]` |
//! | [`Operation::ListPage`]      | empty page |
//! | [`Operation::ParseForm`]     | empty 200, nothing written |
//! | [`Operation::Render`]        | 500 |
//! | [`Operation::ResolveCaller`] | 401, only with `reject_unresolved` |

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
  LogAndContinue,
  Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  ReadForForm,
  WriteFromForm,
  Remove,
  FetchById,
  ListJson,
  ListPage,
  ParseForm,
  Render,
  ResolveCaller,
}

impl Operation {
  pub const fn policy(self) -> Policy {
    match self {
      Operation::ReadForForm
      | Operation::WriteFromForm
      | Operation::Remove
      | Operation::FetchById
      | Operation::ListJson
      | Operation::ListPage
      | Operation::ParseForm => Policy::LogAndContinue,
      Operation::Render | Operation::ResolveCaller => Policy::Fail,
    }
  }

  pub const fn name(self) -> &'static str {
    match self {
      Operation::ReadForForm => "read_for_form",
      Operation::WriteFromForm => "write_from_form",
      Operation::Remove => "remove",
      Operation::FetchById => "fetch_by_id",
      Operation::ListJson => "list_json",
      Operation::ListPage => "list_page",
      Operation::ParseForm => "parse_form",
      Operation::Render => "render",
      Operation::ResolveCaller => "resolve_caller",
    }
  }
}

/// Log a failed `result` for `op` and keep going with `None`.
pub fn absorb<T, E: Display>(
  op: Operation,
  key: &str,
  result: Result<T, E>,
) -> Option<T> {
  debug_assert_eq!(
    op.policy(),
    Policy::LogAndContinue,
    "{} failures must not be absorbed",
    op.name()
  );
  match result {
    Ok(value) => Some(value),
    Err(e) => {
      tracing::warn!(operation = op.name(), key, error = %e, "absorbed failure");
      None
    }
  }
}
