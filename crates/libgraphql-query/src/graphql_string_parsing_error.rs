/// Error returned when decoding the contents of a string literal fails.
///
/// Produced by [`GraphQLTokenKind::parse_string_value`](crate::token::GraphQLTokenKind::parse_string_value).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// An unknown escape sequence was encountered (e.g. `\q`).
    #[error("invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// The literal is missing its closing quote.
    #[error("unterminated string: missing closing quote")]
    UnterminatedString,

    /// A malformed `\u` escape (e.g. `\u12G4` or `\u{110000}`).
    #[error("invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}
