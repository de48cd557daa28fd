use std::path::PathBuf;

/// Settings for a single [`GraphQLParser`](crate::GraphQLParser) run.
///
/// Deserializable so tools can keep parser limits alongside their own
/// configuration; missing fields fall back to [`Default`].
///
/// ```
/// use libgraphql_query::GraphQLParserConfig;
///
/// let config = GraphQLParserConfig::default()
///     .with_max_recursion_depth(16)
///     .with_max_tokens(10_000);
/// assert!(libgraphql_query::parse_with_config("{ a }", &config).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GraphQLParserConfig {
    /// Maximum nesting of selection sets.
    ///
    /// Guards the recursive descent against stack exhaustion on adversarial
    /// input like `{a{a{a{...`.
    pub max_recursion_depth: usize,

    /// Maximum number of tokens consumed before giving up, or `None` for no
    /// limit.
    pub max_tokens: Option<usize>,

    /// File path recorded in every span (and therefore in error messages).
    pub file_path: Option<PathBuf>,
}

impl GraphQLParserConfig {
    /// 64 levels is far beyond any realistic query while staying safe in
    /// debug builds with large stack frames.
    pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 64;

    pub fn with_max_recursion_depth(mut self, max_recursion_depth: usize) -> Self {
        self.max_recursion_depth = max_recursion_depth;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}

impl Default for GraphQLParserConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: Self::DEFAULT_MAX_RECURSION_DEPTH,
            max_tokens: None,
            file_path: None,
        }
    }
}
