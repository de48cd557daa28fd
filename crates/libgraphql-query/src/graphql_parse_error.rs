use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// The syntax error returned by [`parse`](crate::parse).
///
/// Parsing is fail-fast: the first error aborts the whole parse and is the
/// only error reported. Its `Display` form always includes the location:
///
/// ```text
/// <input>:1:1: error: unexpected `bogus`, expecting `fragment`
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    message: String,

    /// The offending token, or a zero-width span at the end of the last
    /// consumed token for end-of-input errors.
    span: GraphQLSourceSpan,

    kind: GraphQLParseErrorKind,

    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a parse error from a lexer error token, keeping the lexer's
    /// message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: GraphQLSourceSpan) {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Formats this error as a single line:
    /// `<file>:<line>:<col>: error: <message>` (1-based line and column).
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.span.display_location(), self.message)
    }

    /// Formats this error as a multi-line diagnostic.
    ///
    /// ```text
    /// error: unexpected `}`, expecting `name`
    ///   --> <input>:1:11
    ///    |
    ///  1 | query { a(}
    ///    |           ^
    ///    = note: opening `(` here
    ///  1 | query { a(}
    ///    |          -
    /// ```
    ///
    /// Pass the parsed `source` to get snippets; with `None` only the header,
    /// location and note messages are rendered.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = format!(
            "error: {}\n  --> {}\n",
            self.message,
            self.span.display_location(),
        );

        if let Some(src) = source {
            let underline_len = if self.span.start_inclusive.line()
                == self.span.end_exclusive.line()
            {
                self.span
                    .end_exclusive
                    .col_utf8()
                    .saturating_sub(self.span.start_inclusive.col_utf8())
                    .max(1)
            } else {
                1
            };
            if let Some(snippet) = render_snippet(src, &self.span, '^', underline_len) {
                output.push_str("   |\n");
                output.push_str(&snippet);
            }
        }

        for note in &self.notes {
            output.push_str(&format!("   = {}: {}\n", note.kind.label(), note.message));
            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = render_snippet(src, note_span, '-', 1)
            {
                output.push_str(&snippet);
            }
        }

        output
    }
}

/// Renders the source line containing `span` with a marker underneath it.
fn render_snippet(
    source: &str,
    span: &GraphQLSourceSpan,
    marker: char,
    marker_len: usize,
) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source.lines().nth(line_num)?;
    let display_line_num = line_num + 1;
    let width = display_line_num.to_string().len().max(2);
    let padding = span.start_inclusive.col_utf8();
    let markers: String = std::iter::repeat_n(marker, marker_len).collect();

    Some(format!(
        "{display_line_num:>width$} | {line_content}\n\
         {:>width$} | {:>padding$}{markers}\n",
        "",
        "",
    ))
}
