//! Tests for the source spans recorded on AST nodes.

use crate::ast::AstNode;
use crate::tests::utils::parse_ok;

const SOURCE: &str = "\
query Hero($id: ID!) {
  hero(id: $id) @include(if: true) {
    name
    ...Details @skip(if: false)
  }
}

fragment Details on Hero { height }
";

fn source_of(node: &impl AstNode) -> String {
    let mut sink = String::new();
    node.append_source(&mut sink, Some(SOURCE));
    sink
}

#[test]
fn operation_span_covers_whole_definition() {
    let document = parse_ok(SOURCE);
    let hero = document.operation("Hero").unwrap();

    let text = source_of(hero);
    assert!(text.starts_with("query Hero($id: ID!) {"));
    assert!(text.ends_with("  }\n}"));
    assert_eq!(hero.span.start_inclusive.line(), 0);
    assert_eq!(hero.span.end_exclusive.line(), 5);
}

#[test]
fn node_spans_slice_back_to_source() {
    let document = parse_ok(SOURCE);
    let hero = document.operation("Hero").unwrap();

    assert_eq!(source_of(hero.variable("id").unwrap()), "$id: ID!");

    let field = hero.selection_set.selections[0].as_field().unwrap();
    assert_eq!(
        source_of(field),
        "hero(id: $id) @include(if: true) {\n    name\n    ...Details @skip(if: false)\n  }",
    );
    assert_eq!(source_of(&field.directives["include"]), "@include(if: true)");

    let nested = field.selection_set.as_ref().unwrap();
    assert_eq!(source_of(&nested.selections[0]), "name");
    assert_eq!(source_of(&nested.selections[1]), "...Details @skip(if: false)");
}

#[test]
fn fragment_span_and_position() {
    let document = parse_ok(SOURCE);
    let fragment = document.fragment("Details").unwrap();

    assert_eq!(source_of(fragment), "fragment Details on Hero { height }");
    assert_eq!(fragment.span.start_inclusive.line(), 7);
    assert_eq!(fragment.span.start_inclusive.col_utf8(), 0);
}

/// An anonymous operation's span is its selection set's span.
#[test]
fn anonymous_operation_span() {
    let source = "  { a }  ";
    let document = parse_ok(source);
    let operation = document.anonymous_operation().unwrap();
    assert_eq!(operation.span().source_slice(source), Some("{ a }"));
    assert_eq!(operation.span, operation.selection_set.span);
}

/// `append_source` appends nothing without the matching source text.
#[test]
fn append_source_without_source() {
    let document = parse_ok("{ a }");
    let operation = document.anonymous_operation().unwrap();

    let mut sink = String::from("kept");
    operation.append_source(&mut sink, None);
    operation.append_source(&mut sink, Some(""));
    assert_eq!(sink, "kept");
}

/// Columns count characters; UTF-16 columns count code units.
#[test]
fn non_ascii_columns() {
    let source = "{ a(s: \"\u{1F600}\") b }";
    let document = parse_ok(source);
    let selection_set = &document.anonymous_operation().unwrap().selection_set;
    let b = &selection_set.selections[1];

    assert_eq!(b.span().start_inclusive.col_utf8(), 12);
    assert_eq!(b.span().start_inclusive.col_utf16(), Some(13));
    assert_eq!(b.span().start_inclusive.byte_offset(), 15);
}

/// `\r\n` is a single line break.
#[test]
fn crlf_line_endings() {
    let source = "{\r\n  a\r\n  b\r\n}";
    let document = parse_ok(source);
    let selection_set = &document.anonymous_operation().unwrap().selection_set;
    let b = &selection_set.selections[1];

    assert_eq!(b.span().start_inclusive.line(), 2);
    assert_eq!(b.span().start_inclusive.col_utf8(), 2);
}
