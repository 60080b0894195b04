//! `/candidate/register` and `/candidate/update`.
//!
//! GET renders the caller's profile form; POST writes `FirstName`/`LastName`
//! under the caller's resolved email and redirects back to the form.

use axum::{
  extract::{RawQuery, State},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use tas_core::{Candidate, CandidateStore};

use crate::{
  AppState,
  caller::Caller,
  error::Error,
  handlers::moved_permanently,
  html,
  policy::{Operation, absorb},
};

/// Fields posted by the profile form. Missing fields are empty.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
  pub first_name: String,
  pub last_name:  String,
}

impl ProfileForm {
  /// Collect the form from urlencoded pairs. Body pairs come before query
  /// pairs and the first value of a repeated field wins.
  pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
    let mut first_name = None;
    let mut last_name = None;
    for (name, value) in pairs {
      match name.as_str() {
        "FirstName" => {
          first_name.get_or_insert(value);
        }
        "LastName" => {
          last_name.get_or_insert(value);
        }
        _ => {}
      }
    }
    Self {
      first_name: first_name.unwrap_or_default(),
      last_name:  last_name.unwrap_or_default(),
    }
  }

  /// Parse a urlencoded body merged with the request's query string.
  pub fn parse(
    body: &[u8],
    query: Option<&str>,
  ) -> Result<Self, serde_urlencoded::de::Error> {
    let mut pairs = serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)?;
    if let Some(query) = query {
      pairs.extend(serde_urlencoded::from_str::<Vec<(String, String)>>(query)?);
    }
    Ok(Self::from_pairs(pairs))
  }
}

/// `GET`: the caller's form, pre-filled with their stored record if any.
pub async fn show<S>(
  State(state): State<AppState<S>>,
  caller: Caller,
) -> Result<Response, Error>
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  let stored = absorb(
    Operation::ReadForForm,
    &caller.email,
    state.store.get(&caller.email).await,
  )
  .flatten();

  let candidate = stored.unwrap_or_else(|| Candidate::new(&caller.email, "", ""));
  let page = html::candidate_form(&candidate)?;
  Ok(Html(page).into_response())
}

/// `POST`: overwrite the caller's record and redirect to the form.
pub async fn update<S>(
  State(state): State<AppState<S>>,
  caller: Caller,
  RawQuery(query): RawQuery,
  body: Bytes,
) -> Response
where
  S: CandidateStore + Clone + Send + Sync + 'static,
{
  let parsed = ProfileForm::parse(&body, query.as_deref());
  let Some(form) = absorb(Operation::ParseForm, &caller.email, parsed) else {
    return StatusCode::OK.into_response();
  };

  let written = absorb(
    Operation::WriteFromForm,
    &caller.email,
    state
      .store
      .put(&caller.email, &form.first_name, &form.last_name)
      .await,
  );
  if written.is_some() {
    tracing::info!(email = %caller.email, tenant = %caller.tenant, "candidate updated");
  }

  moved_permanently("/candidate/update")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
  }

  #[test]
  fn first_value_of_repeated_field_wins() {
    let form = ProfileForm::from_pairs(pairs(&[
      ("FirstName", "Ann"),
      ("FirstName", "Annie"),
      ("LastName", "Lee"),
    ]));
    assert_eq!(form.first_name, "Ann");
    assert_eq!(form.last_name, "Lee");
  }

  #[test]
  fn body_fields_take_precedence_over_query() {
    let form = ProfileForm::parse(b"FirstName=Body", Some("FirstName=Query&LastName=Q")).unwrap();
    assert_eq!(form, ProfileForm {
      first_name: "Body".to_owned(),
      last_name:  "Q".to_owned(),
    });
  }

  #[test]
  fn unknown_and_missing_fields() {
    let form = ProfileForm::parse(b"Nickname=x", None).unwrap();
    assert_eq!(form, ProfileForm::default());
  }

  #[test]
  fn percent_escapes_are_decoded() {
    let form = ProfileForm::parse(b"FirstName=Ann+Marie&LastName=L%C3%A9e", None).unwrap();
    assert_eq!(form.first_name, "Ann Marie");
    assert_eq!(form.last_name, "Lée");
  }
}
