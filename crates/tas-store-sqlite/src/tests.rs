//! Integration tests for `SqliteStore` against an in-memory database.

use tas_core::{Candidate, CandidateStore, listing};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Get / put ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn put_then_get_returns_written_record() {
  let s = store().await;

  let written = s.put("a@x.com", "Ann", "Lee").await.unwrap();
  assert_eq!(written, Candidate::new("a@x.com", "Ann", "Lee"));

  let fetched = s.get("a@x.com").await.unwrap();
  assert_eq!(fetched, Some(written));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get("nobody@x.com").await.unwrap().is_none());
  assert!(s.get_raw("nobody@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn second_put_overwrites_first() {
  let s = store().await;
  s.put("a@x.com", "Ann", "Lee").await.unwrap();
  s.put("a@x.com", "Anne", "Leigh").await.unwrap();

  let fetched = s.get("a@x.com").await.unwrap().unwrap();
  assert_eq!(fetched.first_name, "Anne");
  assert_eq!(fetched.last_name, "Leigh");
  assert_eq!(s.list().await.unwrap().len(), 1, "no duplicate rows");
}

#[tokio::test]
async fn get_raw_returns_stored_json() {
  let s = store().await;
  s.put("a@x.com", "Ann", "Lee").await.unwrap();

  let raw = s.get_raw("a@x.com").await.unwrap().unwrap();
  assert_eq!(
    raw,
    br#"{"firstname":"Ann","lastname":"Lee","Email":"a@x.com"}"#
  );
}

#[tokio::test]
async fn empty_email_is_a_valid_key() {
  let s = store().await;
  s.put("", "Anon", "Ymous").await.unwrap();
  let fetched = s.get("").await.unwrap().unwrap();
  assert_eq!(fetched.first_name, "Anon");
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record() {
  let s = store().await;
  s.put("a@x.com", "Ann", "Lee").await.unwrap();
  s.delete("a@x.com").await.unwrap();
  assert!(s.get("a@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_absent_key_is_not_an_error() {
  let s = store().await;
  s.delete("a@x.com").await.unwrap();
  s.delete("a@x.com").await.unwrap();
  assert!(s.get("a@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_leaves_other_keys_alone() {
  let s = store().await;
  s.put("a@x.com", "Ann", "Lee").await.unwrap();
  s.put("b@y.com", "Bo", "Ng").await.unwrap();
  s.delete("a@x.com").await.unwrap();

  let all = s.list().await.unwrap();
  assert_eq!(all, vec![Candidate::new("b@y.com", "Bo", "Ng")]);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store() {
  let s = store().await;
  assert!(s.list().await.unwrap().is_empty());

  let raw = s.list_raw().await.unwrap();
  assert_eq!(listing::join_raw(raw.iter().map(|e| &e.value)), b"[]");
}

#[tokio::test]
async fn list_returns_records_in_ascending_key_order() {
  let s = store().await;
  // Inserted out of order on purpose.
  s.put("b@y.com", "Bo", "Ng").await.unwrap();
  s.put("a@x.com", "Ann", "Lee").await.unwrap();

  let all = s.list().await.unwrap();
  assert_eq!(
    all,
    vec![
      Candidate::new("a@x.com", "Ann", "Lee"),
      Candidate::new("b@y.com", "Bo", "Ng"),
    ]
  );
}

#[tokio::test]
async fn list_returns_n_records_for_n_distinct_keys() {
  let s = store().await;
  for i in 0..25 {
    s.put(&format!("user{i:02}@x.com"), "First", &format!("Last{i}"))
      .await
      .unwrap();
  }

  let all = s.list().await.unwrap();
  assert_eq!(all.len(), 25);
  assert!(all.windows(2).all(|w| w[0].email < w[1].email));
  assert_eq!(all[7].last_name, "Last7");
}

#[tokio::test]
async fn list_raw_joined_matches_original_byte_format() {
  let s = store().await;
  s.put("a@x.com", "Ann", "Lee").await.unwrap();
  s.put("b@y.com", "Bo", "Ng").await.unwrap();

  let raw = s.list_raw().await.unwrap();
  let body = listing::join_raw(raw.iter().map(|e| &e.value));
  assert_eq!(
    std::str::from_utf8(&body).unwrap(),
    concat!(
      "[",
      r#"{"firstname":"Ann","lastname":"Lee","Email":"a@x.com"}"#,
      ",",
      r#"{"firstname":"Bo","lastname":"Ng","Email":"b@y.com"}"#,
      "]",
    )
  );
}

// ─── Malformed values ────────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_value_surfaces_as_decode_error() {
  let s = store().await;
  s.put_raw("bad@x.com", b"{not json".to_vec()).await.unwrap();

  let err = s.get("bad@x.com").await.unwrap_err();
  assert!(err.is_decode(), "expected decode error, got {err:?}");

  let err = s.list().await.unwrap_err();
  assert!(err.is_decode(), "expected decode error, got {err:?}");
}

#[tokio::test]
async fn malformed_value_does_not_hide_siblings_when_reencoded() {
  let s = store().await;
  s.put("a@x.com", "Ann", "Lee").await.unwrap();
  s.put_raw("bad@x.com", b"{not json".to_vec()).await.unwrap();
  s.put("c@z.com", "Cy", "Oh").await.unwrap();

  let raw = s.list_raw().await.unwrap();
  assert_eq!(raw.len(), 3);
  assert_eq!(raw[1].value, b"{not json");

  let out = listing::reencode(&raw).unwrap();
  assert_eq!(out.skipped, vec!["bad@x.com".to_string()]);
  let parsed: Vec<Candidate> = serde_json::from_slice(&out.body).unwrap();
  assert_eq!(parsed.len(), 2);
  assert_eq!(parsed[1].email, "c@z.com");
}

// ─── Persistence ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn records_survive_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("candidates.db");

  let s = SqliteStore::open(&path).await.unwrap();
  s.put("a@x.com", "Ann", "Lee").await.unwrap();
  s.close().await.unwrap();

  let s = SqliteStore::open(&path).await.unwrap();
  let fetched = s.get("a@x.com").await.unwrap();
  assert_eq!(fetched, Some(Candidate::new("a@x.com", "Ann", "Lee")));
}
