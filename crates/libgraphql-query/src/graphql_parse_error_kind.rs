use crate::GraphQLStringParsingError;

/// Why a [`GraphQLParseError`](crate::GraphQLParseError) was raised.
///
/// Every variant is a flavor of the same thing (a syntax error that aborted
/// the parse); the kind exists so tools can branch without parsing the
/// message. The `#[error(...)]` strings are terse; the full human-readable
/// text lives in `GraphQLParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// ```text
    /// bogus { a }
    /// ^^^^^ unexpected `bogus`, expecting `fragment`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The input ended in the middle of a construct.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The input ended before a `{` or `(` was closed. The location of the
    /// opening delimiter is attached as a note.
    ///
    /// ```text
    /// query { a
    ///       - opening `{` here
    /// ```
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// The token source produced an error token (e.g. an unterminated string
    /// or a stray character). The lexer's message and notes are preserved on
    /// the parent error.
    #[error("lexer error")]
    LexerError,

    /// A value position held something that cannot start a value.
    #[error("invalid value")]
    InvalidValue,

    /// A string literal's escapes could not be decoded.
    #[error("invalid string literal")]
    InvalidString(GraphQLStringParsingError),

    /// Selection sets nested deeper than the configured limit.
    #[error("maximum nesting depth of {max_depth} exceeded")]
    MaxDepthExceeded {
        max_depth: usize,
    },

    /// The document has more tokens than the configured limit.
    #[error("maximum token count of {max_tokens} exceeded")]
    TooManyTokens {
        max_tokens: usize,
    },
}
