use crate::SourcePosition;
use std::path::PathBuf;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
///
/// Optionally includes a file path for the referenced source text (see
/// [`GraphQLParserConfig::with_file_path`](crate::GraphQLParserConfig::with_file_path)).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    pub file_path: Option<PathBuf>,
}

impl GraphQLSourceSpan {
    /// Creates a span without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates a span with file path information.
    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// Creates a zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition, file_path: Option<PathBuf>) -> Self {
        Self {
            start_inclusive: pos.clone(),
            end_exclusive: pos,
            file_path,
        }
    }

    /// Returns the slice of `source` covered by this span, or `None` if the
    /// byte offsets do not fall on valid boundaries of `source`.
    pub fn source_slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(
            self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset(),
        )
    }

    /// Human-readable `file:line:col` (1-based) for diagnostics.
    pub fn display_location(&self) -> String {
        let file_name = self
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        format!(
            "{file_name}:{}:{}",
            self.start_inclusive.line() + 1,
            self.start_inclusive.col_utf8() + 1,
        )
    }
}
