//! Bounded-lookahead buffer over a [`GraphQLTokenSource`].

use std::collections::VecDeque;

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// Wraps any [`GraphQLTokenSource`] with peek/consume and a small lookahead
/// buffer.
///
/// The parser itself only ever needs one token of lookahead, but
/// [`peek_nth`](Self::peek_nth) is available to tooling built on the stream.
///
/// Tokens are buffered in a [`VecDeque`]: the source is pulled lazily at the
/// back and `consume()` pops from the front.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<GraphQLToken<'src>>,
    consumed_count: usize,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            consumed_count: 0,
        }
    }

    /// Advance to the next token and return it.
    ///
    /// Returns `None` if the stream is exhausted.
    pub fn consume(&mut self) -> Option<GraphQLToken<'src>> {
        self.ensure_buffer_has(1);
        let token = self.buffer.pop_front();
        if token.is_some() {
            self.consumed_count += 1;
        }
        token
    }

    /// Number of tokens handed out by [`consume`](Self::consume) so far.
    pub fn consumed_count(&self) -> usize {
        self.consumed_count
    }

    /// Number of tokens pulled from the source but not yet consumed.
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn ensure_buffer_has(&mut self, count: usize) {
        while self.buffer.len() < count {
            match self.token_source.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
    }

    /// Returns `true` if the source is exhausted or the next token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        self.peek()
            .is_none_or(|token| matches!(token.kind, GraphQLTokenKind::Eof))
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<&GraphQLToken<'src>> {
        self.peek_nth(0)
    }

    /// Peek at the kind of the next token without consuming it.
    #[inline]
    pub fn peek_kind(&mut self) -> Option<&GraphQLTokenKind<'src>> {
        self.peek().map(|token| &token.kind)
    }

    /// Peek at the nth unconsumed token (`peek_nth(0)` is `peek()`).
    pub fn peek_nth(&mut self, n: usize) -> Option<&GraphQLToken<'src>> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n)
    }
}
