//! Reader/writer matrix: token peeking, string selection, path reporting,
//! malformed input and writer output for the text implementations.

use json_enum_stream::{
    JsonError, JsonReader, JsonTextReader, JsonTextWriter, JsonWriter, StringOptions, Token,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Peeking
// ---------------------------------------------------------------------------

#[test]
fn peek_reports_every_token_kind() {
    let mut reader =
        JsonTextReader::new(br#"[ "s", 1.5, -2, true, false, null, {"k": []} ]"#);
    assert_eq!(reader.peek().unwrap(), Token::BeginArray);
    reader.begin_array().unwrap();
    assert_eq!(reader.peek().unwrap(), Token::String);
    assert_eq!(reader.next_string().unwrap(), "s");
    assert_eq!(reader.peek().unwrap(), Token::Number);
    assert_eq!(reader.next_number().unwrap(), 1.5);
    assert_eq!(reader.next_number().unwrap(), -2.0);
    assert_eq!(reader.peek().unwrap(), Token::Boolean);
    assert!(reader.next_bool().unwrap());
    assert!(!reader.next_bool().unwrap());
    assert_eq!(reader.peek().unwrap(), Token::Null);
    reader.next_null().unwrap();
    assert_eq!(reader.peek().unwrap(), Token::BeginObject);
    reader.begin_object().unwrap();
    assert_eq!(reader.peek().unwrap(), Token::Name);
    assert_eq!(reader.next_name().unwrap(), "k");
    reader.begin_array().unwrap();
    assert_eq!(reader.peek().unwrap(), Token::EndArray);
    reader.end_array().unwrap();
    assert_eq!(reader.peek().unwrap(), Token::EndObject);
    reader.end_object().unwrap();
    assert_eq!(reader.peek().unwrap(), Token::EndArray);
    reader.end_array().unwrap();
    assert_eq!(reader.peek().unwrap(), Token::EndDocument);
}

#[test]
fn peek_is_string_does_not_consume() {
    let mut reader = JsonTextReader::new(br#""x""#);
    assert!(reader.peek_is_string().unwrap());
    assert!(reader.peek_is_string().unwrap());
    assert_eq!(reader.next_string().unwrap(), "x");
    assert!(!reader.peek_is_string().unwrap());
}

#[test]
fn has_next_walks_array_elements() {
    let mut reader = JsonTextReader::new(br#"["a", "b", "c"]"#);
    reader.begin_array().unwrap();
    let mut seen = Vec::new();
    while reader.has_next().unwrap() {
        seen.push(reader.next_string().unwrap());
    }
    reader.end_array().unwrap();
    assert_eq!(seen, vec!["a", "b", "c"]);
}

// ---------------------------------------------------------------------------
// String selection
// ---------------------------------------------------------------------------

#[test]
fn select_string_matrix() {
    let options = StringOptions::of(["ROCK", "PAPER", "scr"]);
    let cases: &[(&str, Option<usize>)] = &[
        (r#""ROCK""#, Some(0)),
        (r#""PAPER""#, Some(1)),
        (r#""scr""#, Some(2)),
        (r#""rock""#, None),
        (r#""SCISSORS""#, None),
        (r#""""#, None),
        (r#""ROCK""#, Some(0)),
        ("null", None),
        ("7", None),
    ];
    for (json, expected) in cases {
        let mut reader = JsonTextReader::new(json.as_bytes());
        assert_eq!(
            reader.select_string(&options).unwrap(),
            *expected,
            "input {json}"
        );
        if expected.is_some() {
            reader.finish().unwrap();
        } else {
            assert_ne!(reader.peek().unwrap(), Token::EndDocument, "input {json}");
        }
    }
}

#[test]
fn next_string_accepts_number_literals() {
    let mut reader = JsonTextReader::new(b"[12, -0.5e3]");
    reader.begin_array().unwrap();
    assert_eq!(reader.next_string().unwrap(), "12");
    assert_eq!(reader.next_string().unwrap(), "-0.5e3");
    reader.end_array().unwrap();
}

#[test]
fn next_string_rejects_structures() {
    let mut reader = JsonTextReader::new(b"{}");
    let err = reader.next_string().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected a string but was BEGIN_OBJECT at path $"
    );
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

#[test]
fn path_points_at_current_element() {
    let mut reader = JsonTextReader::new(br#"{"game": {"hands": ["ROCK", "SPOCK"]}}"#);
    reader.begin_object().unwrap();
    reader.next_name().unwrap();
    reader.begin_object().unwrap();
    reader.next_name().unwrap();
    reader.begin_array().unwrap();
    reader.next_string().unwrap();
    assert_eq!(reader.path(), "$.game.hands[1]");
}

#[test]
fn skip_value_skips_nested_structures() {
    let mut reader = JsonTextReader::new(br#"{"skip": {"a": [1, {"b": null}], "c": "d"}, "keep": "x"}"#);
    reader.begin_object().unwrap();
    assert_eq!(reader.next_name().unwrap(), "skip");
    reader.skip_value().unwrap();
    assert_eq!(reader.next_name().unwrap(), "keep");
    assert_eq!(reader.next_string().unwrap(), "x");
    reader.end_object().unwrap();
    reader.finish().unwrap();
}

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[test]
fn malformed_input_matrix() {
    let cases: &[&str] = &["", "[", "[1,]", "{\"a\" 1}", "{1: 2}", "\"open", "?", "[1 2]"];
    for json in cases {
        let mut reader = JsonTextReader::new(json.as_bytes());
        assert!(reader.skip_value().is_err(), "input {json:?}");
    }
}

#[test]
fn trailing_data_is_rejected() {
    let mut reader = JsonTextReader::new(br#""a" "b""#);
    reader.next_string().unwrap();
    assert!(matches!(reader.finish(), Err(JsonError::Syntax { .. })));
}

#[test]
fn unconsumed_document_is_rejected() {
    let mut reader = JsonTextReader::new(b"[1]");
    reader.begin_array().unwrap();
    assert!(matches!(reader.finish(), Err(JsonError::IllegalState(_))));
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

#[test]
fn writer_output_is_readable() {
    let mut writer = JsonTextWriter::new();
    writer.begin_object().unwrap();
    writer.name("hands").unwrap();
    writer.begin_array().unwrap();
    writer.string_value("ROCK").unwrap();
    writer.null_value().unwrap();
    writer.end_array().unwrap();
    writer.end_object().unwrap();
    let text = writer.finish().unwrap();
    assert_eq!(text, r#"{"hands":["ROCK",null]}"#);

    let mut reader = JsonTextReader::new(text.as_bytes());
    reader.skip_value().unwrap();
    reader.finish().unwrap();
}

proptest! {
    #[test]
    fn written_strings_are_selected_back(s in ".*") {
        let mut writer = JsonTextWriter::new();
        writer.string_value(&s).unwrap();
        let text = writer.finish().unwrap();

        let options = StringOptions::of(["", s.as_str()]);
        let expected = options.find(&s);
        let mut reader = JsonTextReader::new(text.as_bytes());
        prop_assert_eq!(reader.select_string(&options).unwrap(), expected);
        reader.finish().unwrap();
    }

    #[test]
    fn written_strings_read_back(s in ".*") {
        let mut writer = JsonTextWriter::new();
        writer.string_value(&s).unwrap();
        let text = writer.finish().unwrap();
        let mut reader = JsonTextReader::new(text.as_bytes());
        prop_assert_eq!(reader.next_string().unwrap(), s);
    }
}
