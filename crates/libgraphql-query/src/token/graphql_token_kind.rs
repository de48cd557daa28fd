use crate::GraphQLErrorNotes;
use crate::GraphQLStringParsingError;
use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

/// The kind of a query-language token.
///
/// Punctuators are single characters: unlike full GraphQL there is no `...`
/// token (a fragment spread is three [`Dot`](GraphQLTokenKind::Dot)s) and
/// commas are real tokens rather than ignored trivia.
///
/// Literal kinds store only the raw source text. The `'src` lifetime lets
/// [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource)
/// borrow that text straight from the input.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `.`
    Dot,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// An identifier: `/[_A-Za-z][_0-9A-Za-z]*/`.
    Name(Cow<'src, str>),

    /// Raw text of an integer literal, including an optional leading `-`.
    IntValue(Cow<'src, str>),

    /// Raw text of a float literal, including an optional leading `-`.
    FloatValue(Cow<'src, str>),

    /// Raw text of a quoted string literal, quotes included.
    ///
    /// Use [`parse_string_value()`](Self::parse_string_value) for the decoded
    /// content.
    StringValue(Cow<'src, str>),

    /// End of input.
    Eof,

    /// A lexer error. The parser turns this into a
    /// [`GraphQLParseErrorKind::LexerError`](crate::GraphQLParseErrorKind::LexerError).
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    /// Create a `Name` token borrowing from the source text.
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `Name` token from an owned `String`.
    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::IntValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn float_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::FloatValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::StringValue(Cow::Borrowed(s))
    }

    /// Create a `StringValue` token from an owned `String` (quotes included).
    #[inline]
    pub fn string_value_owned(s: String) -> Self {
        GraphQLTokenKind::StringValue(Cow::Owned(s))
    }

    /// Create an `Error` token.
    #[inline]
    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the punctuator this token represents, if it is one.
    pub fn as_punctuator_char(&self) -> Option<char> {
        match self {
            GraphQLTokenKind::At => Some('@'),
            GraphQLTokenKind::Bang => Some('!'),
            GraphQLTokenKind::Colon => Some(':'),
            GraphQLTokenKind::Comma => Some(','),
            GraphQLTokenKind::CurlyBraceClose => Some('}'),
            GraphQLTokenKind::CurlyBraceOpen => Some('{'),
            GraphQLTokenKind::Dollar => Some('$'),
            GraphQLTokenKind::Dot => Some('.'),
            GraphQLTokenKind::ParenClose => Some(')'),
            GraphQLTokenKind::ParenOpen => Some('('),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns the punctuator token kind for `ch`, if `ch` is one.
    pub fn from_punctuator_char(ch: char) -> Option<GraphQLTokenKind<'static>> {
        Some(match ch {
            '@' => GraphQLTokenKind::At,
            '!' => GraphQLTokenKind::Bang,
            ':' => GraphQLTokenKind::Colon,
            ',' => GraphQLTokenKind::Comma,
            '}' => GraphQLTokenKind::CurlyBraceClose,
            '{' => GraphQLTokenKind::CurlyBraceOpen,
            '$' => GraphQLTokenKind::Dollar,
            '.' => GraphQLTokenKind::Dot,
            ')' => GraphQLTokenKind::ParenClose,
            '(' => GraphQLTokenKind::ParenOpen,
            _ => return None,
        })
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_char().is_some()
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// Returns `true` if `self` and `other` are the same variant, ignoring
    /// any payload.
    pub fn same_variant(&self, other: &GraphQLTokenKind<'_>) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Returns the text used for this token in error messages.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::FloatValue(s)
            | GraphQLTokenKind::StringValue(s) => Cow::Borrowed(s.as_ref()),
            GraphQLTokenKind::Eof => Cow::Borrowed("end of input"),
            GraphQLTokenKind::Error { message, .. } => {
                Cow::Owned(format!("tokenization error: {message}"))
            },
            punctuator => match punctuator.as_punctuator_char() {
                Some(ch) => Cow::Owned(ch.to_string()),
                None => unreachable!("every other variant is a punctuator"),
            },
        }
    }

    /// Decode a `StringValue`'s raw text into its unescaped content.
    ///
    /// Supported escapes: `\n`, `\r`, `\t`, `\\`, `\"`, `\/`, `\b`, `\f`,
    /// `\uXXXX` and `\u{X...}`.
    ///
    /// Returns `None` if this is not a `StringValue`.
    pub fn parse_string_value(&self) -> Option<Result<String, GraphQLStringParsingError>> {
        match self {
            GraphQLTokenKind::StringValue(raw) => Some(decode_quoted_string(raw)),
            _ => None,
        }
    }
}

fn decode_quoted_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(decode_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }
    Ok(result)
}

/// Decodes the part of a unicode escape that follows `\u`.
fn decode_unicode_escape(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<char, GraphQLStringParsingError> {
    let braced = chars.peek() == Some(&'{');
    let mut hex = String::with_capacity(4);
    if braced {
        chars.next();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}{c}"),
                    ));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}"),
                    ));
                },
            }
        }
    } else {
        for _ in 0..4 {
            match chars.next() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{hex}{c}"),
                    ));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                        format!("\\u{hex}"),
                    ));
                },
            }
        }
    }

    let as_written = if braced {
        format!("\\u{{{hex}}}")
    } else {
        format!("\\u{hex}")
    };
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(GraphQLStringParsingError::InvalidUnicodeEscape(as_written))
}
