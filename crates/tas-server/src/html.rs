//! HTML page generation.
//!
//! Pages are small enough to build directly with `quick-xml`'s writer API,
//! which escapes text and attribute values for us.

use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};
use tas_core::Candidate;

use crate::error::Error;

// ─── Pages ───────────────────────────────────────────────────────────────────

/// The candidate list served at `/`.
pub fn index_page(candidates: &[Candidate]) -> Result<String, Error> {
  let mut page = Page::new("Candidates")?;

  page.start("p", &[])?;
  page.link("/candidate/register", "Register or update your profile")?;
  page.end("p")?;

  if candidates.is_empty() {
    page.text_elem("p", "No candidates yet.")?;
    return page.finish();
  }

  page.start("table", &[])?;
  page.start("thead", &[])?;
  page.start("tr", &[])?;
  for heading in ["First name", "Last name", "Email", ""] {
    page.text_elem("th", heading)?;
  }
  page.end("tr")?;
  page.end("thead")?;

  page.start("tbody", &[])?;
  for c in candidates {
    page.start("tr", &[])?;
    page.text_elem("td", &c.first_name)?;
    page.text_elem("td", &c.last_name)?;
    page.text_elem("td", &c.email)?;
    page.start("td", &[])?;
    page.link(&format!("/remove/{}", urlencoding::encode(&c.email)), "Remove")?;
    page.end("td")?;
    page.end("tr")?;
  }
  page.end("tbody")?;
  page.end("table")?;

  page.finish()
}

/// The registration form served at `/candidate/register`, pre-filled with
/// `candidate`.
pub fn candidate_form(candidate: &Candidate) -> Result<String, Error> {
  let mut page = Page::new("Candidate profile")?;

  page.start("form", &[("method", "post"), ("action", "/candidate/update")])?;

  page.start("p", &[])?;
  page.text("Email: ")?;
  page.text_elem("strong", &candidate.email)?;
  page.end("p")?;

  for (name, label, value) in [
    ("FirstName", "First name", candidate.first_name.as_str()),
    ("LastName", "Last name", candidate.last_name.as_str()),
  ] {
    page.start("p", &[])?;
    page.start("label", &[("for", name)])?;
    page.text(label)?;
    page.end("label")?;
    page.empty("input", &[
      ("type", "text"),
      ("id", name),
      ("name", name),
      ("value", value),
    ])?;
    page.end("p")?;
  }

  page.empty("input", &[("type", "submit"), ("value", "Save")])?;
  page.end("form")?;

  page.start("p", &[])?;
  page.link("/", "All candidates")?;
  page.end("p")?;

  page.finish()
}

// ─── Writer helpers ──────────────────────────────────────────────────────────

struct Page {
  writer: Writer<Vec<u8>>,
}

impl Page {
  /// Open `<html>`, write the head and the `<h1>`, leave `<body>` open.
  fn new(title: &str) -> Result<Self, Error> {
    let mut page = Self { writer: Writer::new(Vec::new()) };
    page.event(Event::DocType(BytesText::from_escaped("html")))?;
    page.start("html", &[("lang", "en")])?;
    page.start("head", &[])?;
    page.empty("meta", &[("charset", "utf-8")])?;
    page.text_elem("title", title)?;
    page.end("head")?;
    page.start("body", &[])?;
    page.text_elem("h1", title)?;
    Ok(page)
  }

  fn event(&mut self, event: Event<'_>) -> Result<(), Error> {
    self
      .writer
      .write_event(event)
      .map_err(|e| Error::Render(e.to_string()))
  }

  fn start(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<(), Error> {
    let elem = BytesStart::new(tag).with_attributes(attrs.iter().copied());
    self.event(Event::Start(elem))
  }

  fn empty(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<(), Error> {
    let elem = BytesStart::new(tag).with_attributes(attrs.iter().copied());
    self.event(Event::Empty(elem))
  }

  fn end(&mut self, tag: &str) -> Result<(), Error> {
    self.event(Event::End(BytesEnd::new(tag)))
  }

  fn text(&mut self, text: &str) -> Result<(), Error> {
    self.event(Event::Text(BytesText::new(text)))
  }

  fn text_elem(&mut self, tag: &str, text: &str) -> Result<(), Error> {
    self.start(tag, &[])?;
    self.text(text)?;
    self.end(tag)
  }

  fn link(&mut self, href: &str, text: &str) -> Result<(), Error> {
    self.start("a", &[("href", href)])?;
    self.text(text)?;
    self.end("a")
  }

  fn finish(mut self) -> Result<String, Error> {
    self.end("body")?;
    self.end("html")?;
    String::from_utf8(self.writer.into_inner())
      .map_err(|e| Error::Render(e.to_string()))
  }
}
