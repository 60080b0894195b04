//! Serialising the whole store into a JSON array.
//!
//! [`join_raw`] reproduces the byte-level behaviour clients already depend
//! on: stored values are written between `[` and `]` separated by commas and
//! are never inspected, so a malformed value makes the whole array invalid.
//! [`reencode`] is the safer alternative: it decodes every entry, drops the
//! ones that fail and re-encodes the rest.

use crate::{Candidate, Entry, Result};

/// `[` + comma-joined values + `]`. An empty input yields `[]`.
pub fn join_raw<I, V>(values: I) -> Vec<u8>
where
  I: IntoIterator<Item = V>,
  V: AsRef<[u8]>,
{
  let mut out = Vec::with_capacity(2);
  out.push(b'[');
  for (i, value) in values.into_iter().enumerate() {
    if i > 0 {
      out.push(b',');
    }
    out.extend_from_slice(value.as_ref());
  }
  out.push(b']');
  out
}

/// Entries split into decodable candidates and the keys that failed.
#[derive(Debug, Default)]
pub struct Decoded {
  pub candidates: Vec<Candidate>,
  pub skipped:    Vec<String>,
}

/// Decode each entry independently; failures are collected, not fatal.
pub fn decode_lenient(entries: &[Entry]) -> Decoded {
  let mut decoded = Decoded::default();
  for entry in entries {
    match Candidate::decode(&entry.key, &entry.value) {
      Ok(c) => decoded.candidates.push(c),
      Err(_) => decoded.skipped.push(entry.key.clone()),
    }
  }
  decoded
}

/// A re-encoded JSON array plus the keys left out of it.
#[derive(Debug)]
pub struct Reencoded {
  pub body:    Vec<u8>,
  pub skipped: Vec<String>,
}

/// Decode every entry and re-encode the decodable ones as a JSON array.
pub fn reencode(entries: &[Entry]) -> Result<Reencoded> {
  let Decoded { candidates, skipped } = decode_lenient(entries);
  let body = serde_json::to_vec(&candidates)?;
  Ok(Reencoded { body, skipped })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(key: &str, value: &[u8]) -> Entry {
    Entry { key: key.to_owned(), value: value.to_vec() }
  }

  #[test]
  fn join_raw_empty_is_two_bytes() {
    let empty: Vec<Vec<u8>> = Vec::new();
    assert_eq!(join_raw(empty), b"[]");
  }

  #[test]
  fn join_raw_single_value_has_no_comma() {
    assert_eq!(join_raw([b"{\"a\":1}".as_slice()]), b"[{\"a\":1}]");
  }

  #[test]
  fn join_raw_passes_malformed_bytes_through() {
    let out = join_raw([b"{}".as_slice(), b"garbage".as_slice(), b"{}".as_slice()]);
    assert_eq!(out, b"[{},garbage,{}]");
  }

  #[test]
  fn reencode_skips_malformed_and_keeps_siblings() {
    let a = Candidate::new("a@x.com", "Ann", "Lee");
    let b = Candidate::new("b@y.com", "Bo", "Ng");
    let entries = vec![
      entry("a@x.com", &a.encode().unwrap()),
      entry("broken", b"{oops"),
      entry("b@y.com", &b.encode().unwrap()),
    ];

    let out = reencode(&entries).unwrap();
    assert_eq!(out.skipped, vec!["broken".to_string()]);

    let parsed: Vec<Candidate> = serde_json::from_slice(&out.body).unwrap();
    assert_eq!(parsed, vec![a, b]);
  }

  #[test]
  fn reencode_empty_is_two_bytes() {
    let out = reencode(&[]).unwrap();
    assert_eq!(out.body, b"[]");
    assert!(out.skipped.is_empty());
  }

  #[test]
  fn decode_lenient_preserves_order() {
    let entries = vec![
      entry("a", br#"{"firstname":"A"}"#),
      entry("b", br#"{"firstname":"B"}"#),
    ];
    let d = decode_lenient(&entries);
    let names: Vec<_> = d.candidates.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert!(d.skipped.is_empty());
  }
}
