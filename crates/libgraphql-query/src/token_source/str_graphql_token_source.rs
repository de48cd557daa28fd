//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Names, numbers and strings borrow directly from the source text
//! (`Cow::Borrowed`), so lexing allocates only for trivia and errors.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_query::token::GraphQLTokenKind;
//! use libgraphql_query::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::name_borrowed("name"),
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use std::borrow::Cow;
use std::path::PathBuf;

/// A token source over a `&str`.
///
/// See module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,

    /// Character (not byte) column.
    curr_col_utf8: usize,

    curr_col_utf16: usize,

    /// `\r\n` counts as a single line break.
    last_char_was_cr: bool,

    pending_trivia: GraphQLTriviaTokenVec<'src>,

    /// Set once the `Eof` token has been emitted.
    finished: bool,

    file_path: Option<PathBuf>,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
            file_path: None,
        }
    }

    /// Creates a new token source whose spans all carry `path`.
    pub fn with_file_path(source: &'src str, path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(path.into()),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character, keeping line and column tracking current.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' | '\r' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
                self.last_char_was_cr = ch == '\r';
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes characters while `pred` holds.
    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        match &self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.clone()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    /// Creates a token carrying all trivia accumulated since the last token.
    fn make_token(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span: self.make_span(start),
        }
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}'));

            let start = self.curr_position();
            let Some(ch) = self.peek_char() else {
                return self.make_token(GraphQLTokenKind::Eof, start);
            };

            if ch == '#' {
                self.lex_comment(start);
                continue;
            }

            if let Some(kind) = GraphQLTokenKind::from_punctuator_char(ch) {
                self.consume();
                return self.make_token(kind, start);
            }

            return match ch {
                '"' => self.lex_string(start),
                c if is_name_start(c) => self.lex_name(start),
                c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
                _ => self.lex_invalid_character(start),
            };
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Lexes a `#` comment into pending trivia.
    fn lex_comment(&mut self, start: SourcePosition) {
        self.consume();
        let content_start = self.curr_byte_offset;
        let rest = self.remaining().as_bytes();
        let content_len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        let content_end = content_start + content_len;

        // Comments never contain line breaks, so columns advance per char.
        let content = &self.source[content_start..content_end];
        self.curr_col_utf8 += content.chars().count();
        self.curr_col_utf16 += content.encode_utf16().count();
        self.curr_byte_offset = content_end;
        self.last_char_was_cr = false;

        let span = self.make_span(start);
        self.pending_trivia.push(GraphQLTriviaToken::Comment {
            value: Cow::Borrowed(content),
            span,
        });
    }

    // =========================================================================
    // Names
    // =========================================================================

    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume_while(is_name_continue);
        let name = &self.source[name_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::name_borrowed(name), start)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal:
    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "invalid number: leading zeros are not allowed",
                    );
                }
            },
            Some(c) if c.is_ascii_digit() => {
                self.consume_while(|c| c.is_ascii_digit());
            },
            _ => {
                let kind = GraphQLTokenKind::error("unexpected `-`", smallvec![]);
                return self.make_token(kind, start);
            },
        }

        // A `.` only starts a fraction when a digit follows; otherwise it is a
        // `Dot` punctuator (e.g. the start of a fragment spread).
        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|c| c.is_ascii_digit())
        {
            is_float = true;
            self.consume();
            self.consume_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "invalid number: exponent must have at least one digit",
                );
            }
            self.consume_while(|c| c.is_ascii_digit());
        }

        let text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(text)
        } else {
            GraphQLTokenKind::int_value_borrowed(text)
        };
        self.make_token(kind, start)
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
    ) -> GraphQLToken<'src> {
        self.consume_while(|c| c.is_ascii_digit() || matches!(c, 'e' | 'E' | '+' | '-'));
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        let kind = GraphQLTokenKind::error(
            format!("{message}: `{invalid_text}`"),
            smallvec![],
        );
        self.make_token(kind, start)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a single-line `"..."` string. Escapes are validated later, by
    /// [`GraphQLTokenKind::parse_string_value`].
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        self.consume();

        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    let opening_quote = self.make_span_at(start.clone());
                    let kind = GraphQLTokenKind::error(
                        "unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "string started here",
                                opening_quote,
                            ),
                            GraphQLErrorNote::help("add a closing `\"`"),
                        ],
                    );
                    return self.make_token(kind, start);
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some_and(|c| c != '\n' && c != '\r') {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::string_value_borrowed(text), start)
    }

    /// A one-character span starting at `start`.
    fn make_span_at(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = SourcePosition::new(
            start.line(),
            start.col_utf8() + 1,
            start.col_utf16().map(|c| c + 1),
            start.byte_offset() + 1,
        );
        GraphQLSourceSpan {
            start_inclusive: start,
            end_exclusive: end,
            file_path: self.file_path.clone(),
        }
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let description = match self.consume() {
            Some(ch) => describe_char(ch),
            None => "end of input".to_string(),
        };
        let kind = GraphQLTokenKind::error(
            format!("unexpected character {description}"),
            smallvec![],
        );
        self.make_token(kind, start)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters are shown in backticks; invisible ones also get their
/// code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}
