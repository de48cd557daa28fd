/// A position within the source text, with dual column tracking.
///
/// Token sources compute these values as they scan; the parser and AST only
/// ever copy them around.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: character count within the current line
/// - `col_utf16`: UTF-16 code unit offset within the current line, when the
///   token source can provide it
/// - `byte_offset`: byte offset within the whole document
///
/// For ASCII text both columns are equal. Characters outside the Basic
/// Multilingual Plane (e.g. emoji) advance `col_utf8` by 1 and `col_utf16` by 2.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: Option<usize>,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition. All arguments are 0-based.
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the very first character of a document.
    pub fn start_of_input() -> Self {
        Self::new(0, 0, Some(0), 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if the token source tracked it.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
