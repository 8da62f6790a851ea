//! Tests for the Template type

use std::io;

use cotemplate::{Template, TemplateError};

use crate::common::{FailingReader, FailingWriter, InterruptedReader, ingest, load_fixture};

const GUIDELINES: &str = r#"Capitalized, short (50 chars or less) summary

More detailed explanatory text, if necessary.  Wrap it to about 72
characters or so.  In some contexts, the first line is treated as the
subject of an email and the rest of the text as the body.  The blank
line separating the summary from the body is critical (unless you omit
the body entirely); tools like rebase can get confused if you run the
two together.

Write your commit message in the imperative: "Fix bug" and not "Fixed bug"
or "Fixes bug."  This convention matches up with commit messages generated
by commands like git merge and git revert.

Further paragraphs come after blank lines.

- Bullet points are okay, too

- Typically a hyphen or asterisk is used for the bullet, followed by a
  single space, with blank lines in between, but conventions vary here

- Use a hanging indent"#;

// =============================================================================
// Ingestion
// =============================================================================

#[test]
fn read_from_consumes_whole_stream() {
    let mut template = Template::new();
    let read = template.read_from(&mut GUIDELINES.as_bytes()).unwrap();

    assert_eq!(read, GUIDELINES.len());
    assert_eq!(template.content(), GUIDELINES.as_bytes());
}

#[test]
fn read_from_replaces_previous_content() {
    let mut template = ingest("first template\nCo-Authored-By: Alice <alice@example.com>");
    let read = template.read_from(&mut "second".as_bytes()).unwrap();

    assert_eq!(read, 6);
    assert_eq!(template.content(), b"second");
    assert_eq!(template.co_author(), None);
}

#[test]
fn read_from_keeps_invalid_utf8() {
    let bytes = [0xff, b'\n', 0xfe, b'x'];
    let mut template = Template::new();
    let read = template.read_from(&mut &bytes[..]).unwrap();

    assert_eq!(read, 4);
    assert_eq!(template.content(), &bytes);
}

#[test]
fn read_from_retries_interrupted_reads() {
    let text = b"Add secret message\n\nCo-Authored-By: Alice <alice@example.com>";
    let mut template = Template::new();
    let read = template.read_from(&mut InterruptedReader::new(text)).unwrap();

    assert_eq!(read, text.len());
    assert_eq!(template.content(), text);
    assert_eq!(template.co_author().as_deref(), Some("Alice <alice@example.com>"));
}

#[test]
fn read_from_reports_read_failure() {
    let mut template = Template::new();
    let err = template
        .read_from(&mut FailingReader::new(b"partial"))
        .unwrap_err();

    assert!(matches!(err, TemplateError::Read(_)));
    assert_eq!(err.io_error().kind(), io::ErrorKind::BrokenPipe);
    assert!(err.to_string().starts_with("failed to read template"));
}

// =============================================================================
// Emission
// =============================================================================

#[test]
fn write_to_copies_content_verbatim() {
    let template = ingest("lala");
    let mut out = Vec::new();
    let written = template.write_to(&mut out).unwrap();

    assert_eq!(written, 4);
    assert_eq!(out, b"lala");
}

#[test]
fn write_to_preserves_line_endings_and_trailing_whitespace() {
    let text = "summary  \r\n\r\nbody\t\n\n";
    let template = ingest(text);
    let mut out = Vec::new();

    assert_eq!(template.write_to(&mut out).unwrap(), text.len());
    assert_eq!(out, text.as_bytes());
}

#[test]
fn write_to_reports_write_failure() {
    let template = ingest("lala");
    let err = template.write_to(&mut FailingWriter).unwrap_err();

    assert!(matches!(err, TemplateError::Write(_)));
    assert_eq!(err.io_error().kind(), io::ErrorKind::PermissionDenied);
}

// =============================================================================
// Empty template
// =============================================================================

#[test]
fn len_tracks_ingested_bytes() {
    let template = ingest("lala\n");
    assert_eq!(template.len(), 5);
    assert!(!template.is_empty());
}

#[test]
fn new_template_is_empty() {
    let template = Template::new();
    assert!(template.is_empty());
    assert_eq!(template.len(), 0);
    assert_eq!(template, Template::default());
}

#[test]
fn empty_template_has_no_co_author() {
    assert_eq!(Template::new().co_author(), None);
}

#[test]
fn empty_template_writes_nothing() {
    let mut out = Vec::new();
    assert_eq!(Template::new().write_to(&mut out).unwrap(), 0);
    assert!(out.is_empty());
}

// =============================================================================
// Co-author extraction
// =============================================================================

#[test]
fn co_author_present() {
    let template = ingest("Add secret message\n\n  Co-Authored-By: Alice <alice@example.com>");
    assert_eq!(template.co_author().as_deref(), Some("Alice <alice@example.com>"));
}

#[test]
fn co_author_absent() {
    let template = ingest("Add secret message");
    assert_eq!(template.co_author(), None);
}

#[test]
fn co_author_fixtures() {
    let cases = [
        ("simple.txt", Some("Alice <alice@example.com>")),
        ("none.txt", None),
        // only one co-author is supported
        ("double.txt", Some("Alice <alice@example.com>")),
        ("lowercase.txt", None),
        ("crlf.txt", Some("Carol <carol@example.com>")),
    ];

    for (name, expected) in cases {
        let template = load_fixture(name);
        assert_eq!(template.co_author().as_deref(), expected, "fixture {name}");
    }
}

#[test]
fn co_author_is_case_sensitive() {
    let template = ingest("co-authored-by: Bob <bob@example.com>");
    assert_eq!(template.co_author(), None);

    let template = ingest("Co-authored-by: Bob <bob@example.com>");
    assert_eq!(template.co_author(), None);
}

#[test]
fn co_author_requires_key_at_line_start() {
    let template = ingest("Thanks to Co-Authored-By: Bob <bob@example.com>");
    assert_eq!(template.co_author(), None);
}

#[test]
fn co_author_skips_bare_key_and_uses_next_trailer() {
    let template = ingest("Co-Authored-By:\nCo-Authored-By:Eve\nCo-Authored-By: Dave <dave@example.com>\n");
    assert_eq!(template.co_author().as_deref(), Some("Dave <dave@example.com>"));
}

#[test]
fn co_author_does_not_join_lines() {
    let template = ingest("Co-Authored-By:\nAlice <alice@example.com>");
    assert_eq!(template.co_author(), None);
}

#[test]
fn co_author_is_not_validated() {
    let template = ingest("Co-Authored-By:   just a name   ");
    assert_eq!(template.co_author().as_deref(), Some("just a name"));
}

#[test]
fn co_author_does_not_modify_content() {
    let text = "x\n  Co-Authored-By: Alice <alice@example.com>  \n";
    let template = Template::from(text);
    let _ = template.co_author();
    assert_eq!(template.content(), text.as_bytes());
}

#[test]
fn co_author_decodes_invalid_utf8_lossily() {
    let bytes = b"Co-Authored-By: Jos\xe9 <j@x>";
    let template = Template::from(bytes.to_vec());

    assert_eq!(template.co_author().as_deref(), Some("Jos\u{fffd} <j@x>"));
    assert_eq!(template.content(), bytes);
}

#[test]
fn co_author_bytes_keep_invalid_utf8() {
    let template = Template::from(b"Summary\n\n  Co-Authored-By: Jos\xe9 <j@x>  \n".to_vec());
    assert_eq!(template.co_author_bytes(), Some(&b"Jos\xe9 <j@x>"[..]));
}

#[test]
fn co_author_bytes_absent() {
    assert_eq!(ingest("Add secret message").co_author_bytes(), None);
    assert_eq!(Template::new().co_author_bytes(), None);
}

#[test]
fn only_cr_and_lf_end_a_line() {
    let template = ingest("Co-Authored-By: Alice\u{2028}Co-Authored-By: Bob");
    assert_eq!(
        template.co_author().as_deref(),
        Some("Alice\u{2028}Co-Authored-By: Bob")
    );

    let template = ingest("Co-Authored-By: Alice\rCo-Authored-By: Bob");
    assert_eq!(template.co_author().as_deref(), Some("Alice"));
}
