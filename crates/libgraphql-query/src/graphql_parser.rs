//! Recursive descent parser for query documents.
//!
//! [`GraphQLParser`] works over any token source implementing
//! [`GraphQLTokenSource`] and builds an [`ast::Document`] of operations and
//! fragments.
//!
//! # Architecture
//!
//! Each grammar rule has a `parse_*` method returning
//! `Result<AstNode, GraphQLParseError>`. Productions are chosen with one token
//! of lookahead and never backtrack. The first error is propagated with `?`
//! all the way out of [`GraphQLParser::parse_document`]; there is no local
//! recovery and no partial document.

use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParserConfig;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;
use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use indexmap::IndexMap;

type ParseResult<T> = Result<T, GraphQLParseError>;

/// What the next top-level token says about the following definition.
enum DefinitionStart {
    AnonymousQuery,
    Operation(ast::OperationKind),
    Fragment,
    Invalid,
}

/// A recursive descent parser for query documents.
///
/// Generic over the token source so pre-lexed or synthesized token streams
/// can be parsed as well as `&str` input.
///
/// # Usage
///
/// ```
/// use libgraphql_query::GraphQLParser;
/// use libgraphql_query::ast::OperationKind;
///
/// let parser = GraphQLParser::new("query Hero { hero { name } }");
/// let document = parser.parse_document().unwrap();
///
/// let hero = document.operation("Hero").unwrap();
/// assert_eq!(hero.kind, OperationKind::Query);
/// assert_eq!(hero.selection_set.len(), 1);
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    config: GraphQLParserConfig,

    /// Current selection set nesting, checked against
    /// `config.max_recursion_depth`.
    recursion_depth: usize,

    /// End of the most recently consumed token. End-of-input errors and node
    /// spans end here.
    last_end_position: Option<SourcePosition>,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a parser over a string-like source with the default
    /// configuration.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::with_config(source, GraphQLParserConfig::default())
    }

    /// Creates a parser over a string-like source.
    pub fn with_config<S: AsRef<str> + ?Sized>(
        source: &'src S,
        config: GraphQLParserConfig,
    ) -> Self {
        let token_source = match &config.file_path {
            Some(path) => StrGraphQLTokenSource::with_file_path(source.as_ref(), path.clone()),
            None => StrGraphQLTokenSource::new(source.as_ref()),
        };
        Self::from_token_source(token_source, config)
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Creates a parser over an arbitrary token source.
    ///
    /// `config.file_path` only affects spans this parser synthesizes
    /// (end-of-input errors); token spans come from the token source as-is.
    pub fn from_token_source(token_source: TTokenSource, config: GraphQLParserConfig) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            config,
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    /// Parses the whole input into a [`ast::Document`].
    ///
    /// Consumes the parser: every token is read before returning, and the
    /// first syntax error aborts the parse.
    pub fn parse_document(mut self) -> ParseResult<ast::Document> {
        log::debug!("parsing query document");
        match self.parse_document_impl() {
            Ok(document) => {
                log::debug!(
                    "parsed query document: {} operation(s), {} fragment(s)",
                    document.operations.len(),
                    document.fragments.len(),
                );
                Ok(document)
            },
            Err(error) => {
                log::debug!("query document failed to parse: {error}");
                Err(error)
            },
        }
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Consumes the next token, enforcing `config.max_tokens`.
    fn consume_token(&mut self) -> ParseResult<GraphQLToken<'src>> {
        let Some(token) = self.token_stream.consume() else {
            return Err(GraphQLParseError::new(
                "unexpected end of input",
                self.eof_span(),
                GraphQLParseErrorKind::UnexpectedEof { expected: vec![] },
            ));
        };
        if let Some(max_tokens) = self.config.max_tokens
            && self.token_stream.consumed_count() > max_tokens
        {
            return Err(GraphQLParseError::new(
                format!("document exceeds the maximum of {max_tokens} tokens"),
                token.span,
                GraphQLParseErrorKind::TooManyTokens { max_tokens },
            ));
        }
        self.last_end_position = Some(token.span.end_exclusive.clone());
        Ok(token)
    }

    /// Checks if the next token is the same kind as `kind`, ignoring payload.
    fn peek_is(&mut self, kind: &GraphQLTokenKind) -> bool {
        self.token_stream
            .peek_kind()
            .is_some_and(|next| next.same_variant(kind))
    }

    fn peek_is_name(&mut self) -> bool {
        matches!(self.token_stream.peek_kind(), Some(GraphQLTokenKind::Name(_)))
    }

    /// Consumes a token of the given kind (a single punctuator, in practice).
    fn expect(&mut self, expected: &GraphQLTokenKind) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_is(expected) {
            self.consume_token()
        } else {
            Err(self.unexpected(&[&Self::describe_expected(expected)]))
        }
    }

    /// Consumes an identifier and returns its text and span.
    fn expect_name(&mut self) -> ParseResult<(String, GraphQLSourceSpan)> {
        if !self.peek_is_name() {
            return Err(self.unexpected(&["name"]));
        }
        let token = self.consume_token()?;
        match token.kind {
            GraphQLTokenKind::Name(name) => Ok((name.into_owned(), token.span)),
            _ => unreachable!("peek_is_name() confirmed a name token"),
        }
    }

    /// Consumes an identifier whose text is exactly `keyword`.
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<GraphQLSourceSpan> {
        let matches = matches!(
            self.token_stream.peek_kind(),
            Some(GraphQLTokenKind::Name(name)) if name == keyword,
        );
        if !matches {
            return Err(self.unexpected(&[keyword]));
        }
        Ok(self.consume_token()?.span)
    }

    /// Consumes a quoted string and returns its decoded content.
    fn expect_string(&mut self) -> ParseResult<(String, GraphQLSourceSpan)> {
        if !self.peek_is(&GraphQLTokenKind::StringValue("".into())) {
            return Err(self.unexpected(&["string"]));
        }
        let token = self.consume_token()?;
        match token.kind.parse_string_value() {
            Some(Ok(value)) => Ok((value, token.span)),
            Some(Err(error)) => Err(GraphQLParseError::new(
                format!("invalid string literal: {error}"),
                token.span,
                GraphQLParseErrorKind::InvalidString(error),
            )),
            None => unreachable!("peek_is() confirmed a string token"),
        }
    }

    /// Builds the error for a next token that matches none of `expected`.
    ///
    /// Lexer error tokens are reported as-is rather than as "unexpected".
    fn unexpected(&mut self, expected: &[&str]) -> GraphQLParseError {
        let expected_list = expected
            .iter()
            .map(|e| format!("`{e}`"))
            .collect::<Vec<_>>()
            .join(" or ");
        let expected_owned: Vec<String> = expected.iter().map(|e| e.to_string()).collect();

        match self.token_stream.peek() {
            None
            | Some(GraphQLToken {
                kind: GraphQLTokenKind::Eof,
                ..
            }) => GraphQLParseError::new(
                format!("unexpected end of input, expecting {expected_list}"),
                self.eof_span(),
                GraphQLParseErrorKind::UnexpectedEof {
                    expected: expected_owned,
                },
            ),
            Some(GraphQLToken {
                kind: GraphQLTokenKind::Error { message, error_notes },
                span,
                ..
            }) => GraphQLParseError::from_lexer_error(
                message.clone(),
                span.clone(),
                error_notes.clone(),
            ),
            Some(token) => {
                let found = token.kind.display_text().into_owned();
                GraphQLParseError::new(
                    format!("unexpected `{found}`, expecting {expected_list}"),
                    token.span.clone(),
                    GraphQLParseErrorKind::UnexpectedToken {
                        expected: expected_owned,
                        found,
                    },
                )
            },
        }
    }

    /// Builds the error for input that ends inside an open `{` or `(`.
    fn unclosed_delimiter(
        &self,
        open: char,
        close: char,
        open_span: GraphQLSourceSpan,
        context: &str,
    ) -> GraphQLParseError {
        let mut error = GraphQLParseError::new(
            format!("unexpected end of input, expecting `{close}` to close `{open}`"),
            self.eof_span(),
            GraphQLParseErrorKind::UnclosedDelimiter {
                delimiter: open.to_string(),
            },
        );
        error.add_note_with_span(format!("opening `{open}` of {context} here"), open_span);
        error
    }

    fn describe_expected(kind: &GraphQLTokenKind) -> String {
        match kind {
            GraphQLTokenKind::Name(_) => "name".to_string(),
            GraphQLTokenKind::IntValue(_) => "integer".to_string(),
            GraphQLTokenKind::FloatValue(_) => "float".to_string(),
            GraphQLTokenKind::StringValue(_) => "string".to_string(),
            other => other.display_text().into_owned(),
        }
    }

    /// A zero-width span at the end of the last consumed token.
    fn eof_span(&self) -> GraphQLSourceSpan {
        let pos = self
            .last_end_position
            .clone()
            .unwrap_or_else(SourcePosition::start_of_input);
        GraphQLSourceSpan::empty_at(pos, self.config.file_path.clone())
    }

    /// A span from the start of `start` to the end of the last consumed token.
    fn make_span(&self, start: GraphQLSourceSpan) -> GraphQLSourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start.end_exclusive.clone());
        GraphQLSourceSpan {
            start_inclusive: start.start_inclusive,
            end_exclusive: end,
            file_path: start.file_path,
        }
    }

    fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= self.config.max_recursion_depth {
            let max_depth = self.config.max_recursion_depth;
            let span = self
                .token_stream
                .peek()
                .map(|token| token.span.clone())
                .unwrap_or_else(|| self.eof_span());
            return Err(GraphQLParseError::new(
                format!("maximum nesting depth of {max_depth} exceeded"),
                span,
                GraphQLParseErrorKind::MaxDepthExceeded { max_depth },
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    // =========================================================================
    // Document-level parsing
    // =========================================================================

    fn parse_document_impl(&mut self) -> ParseResult<ast::Document> {
        let mut document = ast::Document::default();

        while !self.token_stream.is_at_end() {
            match self.peek_definition_start() {
                DefinitionStart::AnonymousQuery => {
                    let selection_set = self.parse_selection_set()?;
                    log::trace!("parsed anonymous query");
                    document.insert_operation(ast::Operation {
                        kind: ast::OperationKind::Query,
                        name: None,
                        variables: IndexMap::new(),
                        span: selection_set.span.clone(),
                        selection_set,
                    });
                },
                DefinitionStart::Operation(kind) => {
                    let operation = self.parse_operation(kind)?;
                    log::trace!("parsed {kind} `{}`", operation.map_key());
                    document.insert_operation(operation);
                },
                DefinitionStart::Fragment => {
                    let fragment = self.parse_fragment()?;
                    log::trace!("parsed fragment `{}`", fragment.name);
                    document.insert_fragment(fragment);
                },
                DefinitionStart::Invalid => {
                    let mut error = self.unexpected(&["fragment"]);
                    if !matches!(error.kind(), GraphQLParseErrorKind::LexerError) {
                        error.add_help(
                            "a definition starts with `query`, `mutation`, `fragment`, or `{`",
                        );
                    }
                    return Err(error);
                },
            }
        }

        Ok(document)
    }

    fn peek_definition_start(&mut self) -> DefinitionStart {
        match self.token_stream.peek_kind() {
            Some(GraphQLTokenKind::CurlyBraceOpen) => DefinitionStart::AnonymousQuery,
            Some(GraphQLTokenKind::Name(name)) => {
                match ast::OperationKind::from_keyword(name) {
                    Some(kind) => DefinitionStart::Operation(kind),
                    None if name == "fragment" => DefinitionStart::Fragment,
                    None => DefinitionStart::Invalid,
                }
            },
            _ => DefinitionStart::Invalid,
        }
    }

    /// Parses `query|mutation Name? VariableDefinitions? SelectionSet`.
    fn parse_operation(&mut self, kind: ast::OperationKind) -> ParseResult<ast::Operation> {
        let start = self.expect_keyword(kind.keyword())?;

        let name = if self.peek_is_name() {
            Some(self.expect_name()?.0)
        } else {
            None
        };

        let variables = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            IndexMap::new()
        };

        let selection_set = self.parse_selection_set()?;

        Ok(ast::Operation {
            kind,
            name,
            variables,
            selection_set,
            span: self.make_span(start),
        })
    }

    /// Parses `( VariableDefinition* )`. Definitions are not comma-separated.
    fn parse_variable_definitions(
        &mut self,
    ) -> ParseResult<IndexMap<String, ast::VariableDefinition>> {
        let open_token = self.expect(&GraphQLTokenKind::ParenOpen)?;
        let mut variables = IndexMap::new();

        loop {
            if self.peek_is(&GraphQLTokenKind::ParenClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                return Err(self.unclosed_delimiter(
                    '(',
                    ')',
                    open_token.span,
                    "variable definitions",
                ));
            }
            let variable = self.parse_variable_definition()?;
            variables.insert(variable.name.clone(), variable);
        }

        self.expect(&GraphQLTokenKind::ParenClose)?;
        Ok(variables)
    }

    /// Parses `$name: Type !?`.
    fn parse_variable_definition(&mut self) -> ParseResult<ast::VariableDefinition> {
        let start = self.expect(&GraphQLTokenKind::Dollar)?.span;
        let (name, _) = self.expect_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let (type_name, _) = self.expect_name()?;

        let non_null = self.peek_is(&GraphQLTokenKind::Bang);
        if non_null {
            self.consume_token()?;
        }

        Ok(ast::VariableDefinition {
            name,
            type_name,
            non_null,
            span: self.make_span(start),
        })
    }

    /// Parses `fragment Name on Type SelectionSet`.
    fn parse_fragment(&mut self) -> ParseResult<ast::Fragment> {
        let start = self.expect_keyword("fragment")?;
        let (name, _) = self.expect_name()?;
        self.expect_keyword("on")?;
        let (type_condition, _) = self.expect_name()?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::Fragment {
            name,
            type_condition,
            selection_set,
            span: self.make_span(start),
        })
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// Parses `{ Selection* }`.
    fn parse_selection_set(&mut self) -> ParseResult<ast::SelectionSet> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.recursion_depth -= 1;
        result
    }

    fn parse_selection_set_impl(&mut self) -> ParseResult<ast::SelectionSet> {
        let open_token = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let mut selections = Vec::new();

        loop {
            if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
                break;
            }
            if self.token_stream.is_at_end() {
                return Err(self.unclosed_delimiter(
                    '{',
                    '}',
                    open_token.span,
                    "selection set",
                ));
            }
            selections.push(self.parse_selection()?);
        }

        self.expect(&GraphQLTokenKind::CurlyBraceClose)?;
        Ok(ast::SelectionSet {
            selections,
            span: self.make_span(open_token.span),
        })
    }

    fn parse_selection(&mut self) -> ParseResult<ast::Selection> {
        if self.peek_is(&GraphQLTokenKind::Dot) {
            self.parse_fragment_spread().map(ast::Selection::FragmentSpread)
        } else {
            self.parse_field().map(ast::Selection::Field)
        }
    }

    /// Parses `alias: name (Arguments)? Directives SelectionSet?`.
    fn parse_field(&mut self) -> ParseResult<ast::Field> {
        let (alias, start) = self.expect_name()?;

        let name = if self.peek_is(&GraphQLTokenKind::Colon) {
            self.consume_token()?;
            self.expect_name()?.0
        } else {
            alias.clone()
        };

        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            Some(self.parse_arguments("field arguments")?)
        } else {
            None
        };

        let directives = self.parse_directives()?;

        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.make_span(start),
        })
    }

    /// Parses `. . . Name Directives`. Each dot is its own token, so
    /// whitespace between them is allowed.
    fn parse_fragment_spread(&mut self) -> ParseResult<ast::FragmentSpread> {
        let start = self.expect(&GraphQLTokenKind::Dot)?.span;
        self.expect(&GraphQLTokenKind::Dot)?;
        self.expect(&GraphQLTokenKind::Dot)?;
        let (name, _) = self.expect_name()?;
        let directives = self.parse_directives()?;

        Ok(ast::FragmentSpread {
            name,
            directives,
            span: self.make_span(start),
        })
    }

    // =========================================================================
    // Directives and arguments
    // =========================================================================

    /// Parses zero or more `@directive`s. A repeated name replaces the
    /// earlier directive.
    fn parse_directives(&mut self) -> ParseResult<ast::Directives> {
        let mut directives = ast::Directives::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            let directive = self.parse_directive()?;
            directives.insert(directive.name.clone(), directive);
        }
        Ok(directives)
    }

    /// Parses `@name (Arguments)?`.
    fn parse_directive(&mut self) -> ParseResult<ast::Directive> {
        let start = self.expect(&GraphQLTokenKind::At)?.span;
        let (name, _) = self.expect_name()?;
        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            Some(self.parse_arguments("directive arguments")?)
        } else {
            None
        };

        Ok(ast::Directive {
            name,
            arguments,
            span: self.make_span(start),
        })
    }

    /// Parses `( (name: Value (, name: Value)*)? )`. A repeated name keeps
    /// the last value.
    fn parse_arguments(&mut self, context: &str) -> ParseResult<ast::Arguments> {
        let open_token = self.expect(&GraphQLTokenKind::ParenOpen)?;
        let mut arguments = ast::Arguments::new();

        if !self.peek_is(&GraphQLTokenKind::ParenClose) {
            loop {
                if self.token_stream.is_at_end() {
                    return Err(self.unclosed_delimiter('(', ')', open_token.span, context));
                }
                let (name, _) = self.expect_name()?;
                self.expect(&GraphQLTokenKind::Colon)?;
                let value = self.parse_value()?;
                arguments.insert(name, value);

                if self.peek_is(&GraphQLTokenKind::ParenClose) {
                    break;
                }
                if self.token_stream.is_at_end() {
                    return Err(self.unclosed_delimiter('(', ')', open_token.span, context));
                }
                self.expect(&GraphQLTokenKind::Comma)?;
            }
        }

        self.expect(&GraphQLTokenKind::ParenClose)?;
        Ok(arguments)
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self) -> ParseResult<ast::Value> {
        match self.token_stream.peek_kind().cloned() {
            Some(GraphQLTokenKind::Dollar) => {
                self.consume_token()?;
                let (name, _) = self.expect_name()?;
                Ok(ast::Value::Variable(ast::Variable { name }))
            },
            Some(GraphQLTokenKind::StringValue(_)) => {
                let (value, _) = self.expect_string()?;
                Ok(ast::Value::Literal(ast::Literal::new(ast::LiteralKind::String, value)))
            },
            Some(GraphQLTokenKind::Name(_)) => {
                let (name, _) = self.expect_name()?;
                Ok(ast::Value::Literal(ast::Literal::from_name(name)))
            },
            Some(GraphQLTokenKind::IntValue(raw)) => {
                self.consume_token()?;
                Ok(ast::Value::Literal(ast::Literal::new(ast::LiteralKind::Int, raw)))
            },
            Some(GraphQLTokenKind::FloatValue(raw)) => {
                self.consume_token()?;
                Ok(ast::Value::Literal(ast::Literal::new(ast::LiteralKind::Float, raw)))
            },
            Some(GraphQLTokenKind::Error { .. }) => Err(self.unexpected(&["value"])),
            Some(GraphQLTokenKind::Eof) | None => Err(GraphQLParseError::new(
                "invalid value: unexpected end of input",
                self.eof_span(),
                GraphQLParseErrorKind::InvalidValue,
            )),
            Some(other) => {
                let span = self
                    .token_stream
                    .peek()
                    .map(|token| token.span.clone())
                    .unwrap_or_else(|| self.eof_span());
                let mut error = GraphQLParseError::new(
                    format!("invalid value `{}`", other.display_text()),
                    span,
                    GraphQLParseErrorKind::InvalidValue,
                );
                error.add_help("a value is a `$variable`, a string, a number, or a name");
                Err(error)
            },
        }
    }
}
