//! Tests for syntax errors: which error kind is produced, the message, and
//! the reported location.
//!
//! Parsing is fail-fast, so each input yields exactly one error.

use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseErrorKind;
use crate::GraphQLStringParsingError;
use crate::tests::utils::parse_err;

// =============================================================================
// Top-level definitions
// =============================================================================

/// An unknown top-level keyword names the offending word and `fragment`.
#[test]
fn unknown_top_level_keyword() {
    let error = parse_err("bogus { a }");

    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedToken {
            expected: vec!["fragment".to_string()],
            found: "bogus".to_string(),
        },
    );
    assert_eq!(error.message(), "unexpected `bogus`, expecting `fragment`");
    assert_eq!(
        error.to_string(),
        "<input>:1:1: error: unexpected `bogus`, expecting `fragment`",
    );
    assert!(error.notes().iter().any(|note| note.kind == GraphQLErrorNoteKind::Help));
}

/// Keywords are case-sensitive.
#[test]
fn capitalized_keyword_is_unknown() {
    let error = parse_err("Query { a }");
    assert!(matches!(
        error.kind(),
        GraphQLParseErrorKind::UnexpectedToken { found, .. } if found == "Query"
    ));
}

#[test]
fn stray_closing_brace_at_top_level() {
    let error = parse_err("{ a } }");
    assert_eq!(error.message(), "unexpected `}`, expecting `fragment`");
    assert_eq!(error.span().start_inclusive.col_utf8(), 6);
}

#[test]
fn operation_keyword_without_selection_set() {
    let error = parse_err("query");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnexpectedEof {
            expected: vec!["{".to_string()],
        },
    );
    assert_eq!(error.message(), "unexpected end of input, expecting `{`");
}

#[test]
fn fragment_missing_on_keyword() {
    let error = parse_err("fragment F User { a }");
    assert_eq!(error.message(), "unexpected `User`, expecting `on`");
}

#[test]
fn fragment_missing_type_condition() {
    let error = parse_err("fragment F on { a }");
    assert_eq!(error.message(), "unexpected `{`, expecting `name`");
}

// =============================================================================
// Unclosed delimiters
// =============================================================================

/// A missing `}` reports end of input, the missing `}`, and where the `{`
/// was opened.
#[test]
fn unclosed_selection_set() {
    let error = parse_err("query {");

    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnclosedDelimiter {
            delimiter: "{".to_string(),
        },
    );
    assert!(error.message().contains("end of input"));
    assert!(error.message().contains('}'));

    let note = &error.notes()[0];
    assert_eq!(note.message, "opening `{` of selection set here");
    assert_eq!(note.span.as_ref().unwrap().start_inclusive.col_utf8(), 6);
}

/// The end-of-input location is the end of the last real token, not the end
/// of trailing whitespace.
#[test]
fn unclosed_nested_selection_set_location() {
    let error = parse_err("{\n  user {\n    name\n\n");

    assert!(matches!(
        error.kind(),
        GraphQLParseErrorKind::UnclosedDelimiter { delimiter } if delimiter == "{"
    ));
    assert_eq!(error.span().start_inclusive.line(), 2);
    assert_eq!(error.span().start_inclusive.col_utf8(), 8);

    let opener = error.notes()[0].span.as_ref().unwrap();
    assert_eq!(opener.start_inclusive.line(), 1);
}

#[test]
fn unclosed_argument_list() {
    let error = parse_err("{ f(a: 1");
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::UnclosedDelimiter {
            delimiter: "(".to_string(),
        },
    );
    assert_eq!(error.notes()[0].message, "opening `(` of field arguments here");
}

#[test]
fn unclosed_directive_argument_list() {
    let error = parse_err("{ f @d(a: 1,");
    assert!(matches!(error.kind(), GraphQLParseErrorKind::UnclosedDelimiter { .. }));
    assert_eq!(error.notes()[0].message, "opening `(` of directive arguments here");
}

#[test]
fn unclosed_variable_definitions() {
    let error = parse_err("query Q($a: Int");
    assert!(matches!(
        error.kind(),
        GraphQLParseErrorKind::UnclosedDelimiter { delimiter } if delimiter == "("
    ));
}

// =============================================================================
// Punctuation
// =============================================================================

#[test]
fn variable_definition_missing_colon() {
    let error = parse_err("query Q($a Int) { x }");
    assert_eq!(error.message(), "unexpected `Int`, expecting `:`");
    assert_eq!(error.to_string(), "<input>:1:12: error: unexpected `Int`, expecting `:`");
}

/// Variable definitions are not comma-separated.
#[test]
fn comma_between_variable_definitions_is_rejected() {
    let error = parse_err("query Q($a: Int, $b: Int) { x }");
    assert_eq!(error.message(), "unexpected `,`, expecting `$`");
}

#[test]
fn missing_comma_between_arguments() {
    let error = parse_err("{ f(a: 1 b: 2) }");
    assert_eq!(error.message(), "unexpected `b`, expecting `,`");
}

#[test]
fn trailing_comma_in_arguments() {
    let error = parse_err("{ f(a: 1,) }");
    assert_eq!(error.message(), "unexpected `)`, expecting `name`");
}

#[test]
fn fragment_spread_needs_three_dots() {
    let error = parse_err("{ ..Foo }");
    assert_eq!(error.message(), "unexpected `Foo`, expecting `.`");
}

#[test]
fn directive_requires_name() {
    let error = parse_err("{ a @ }");
    assert_eq!(error.message(), "unexpected `}`, expecting `name`");
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn punctuator_is_not_a_value() {
    let error = parse_err("{ a(b: }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidValue);
    assert_eq!(error.message(), "invalid value `}`");
}

#[test]
fn value_at_end_of_input() {
    let error = parse_err("{ a(b:");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::InvalidValue);
}

#[test]
fn variable_value_requires_name() {
    let error = parse_err("{ a(b: $1) }");
    assert_eq!(error.message(), "unexpected `1`, expecting `name`");
}

#[test]
fn invalid_string_escape() {
    let error = parse_err(r#"{ a(s: "\q") }"#);
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::InvalidString(
            GraphQLStringParsingError::InvalidEscapeSequence("\\q".to_string()),
        ),
    );
}

// =============================================================================
// Lexer errors
// =============================================================================

/// Lexer errors keep the lexer's own message instead of "unexpected ...".
#[test]
fn invalid_character_in_selection_set() {
    let error = parse_err("{ a ~ }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(error.message(), "unexpected character `~`");
    assert_eq!(error.span().start_inclusive.col_utf8(), 4);
}

/// The lexer's notes (here: where the string started) carry over.
#[test]
fn unterminated_string() {
    let error = parse_err("{ a(s: \"abc) }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(error.message(), "unterminated string literal");
    assert_eq!(error.notes().len(), 2);
    assert_eq!(error.notes()[0].message, "string started here");
    assert_eq!(error.notes()[1].kind, GraphQLErrorNoteKind::Help);
}

#[test]
fn invalid_character_at_top_level() {
    let error = parse_err("%");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::LexerError);
    assert!(error.notes().is_empty());
}

#[test]
fn lone_minus_sign() {
    let error = parse_err("{ f(a: -) }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(error.message(), "unexpected `-`");
}

#[test]
fn leading_zero_number() {
    let error = parse_err("{ f(a: 007) }");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::LexerError);
    assert!(error.message().contains("leading zeros"));
}
