//! Bounded lookahead buffer over any [`XidlTokenSource`].

use std::collections::VecDeque;

use crate::token::XidlToken;
use crate::token::XidlTokenKind;
use crate::token_source::XidlTokenSource;

/// Streaming cursor over the tokens of some [`XidlTokenSource`] with a
/// bounded lookahead buffer.
///
/// Tokens are pulled from the source lazily. Unconsumed tokens sit in a
/// [`VecDeque`]; `consume()` pops from the front in O(1). The parser never
/// looks further ahead than `peek_nth(1)`, so the buffer stays at two
/// tokens or fewer.
///
/// Trivia is already attached to tokens by the lexer, so the parser only
/// ever calls `peek()` and `consume()`.
pub struct XidlTokenStream<'src, TTokenSource: XidlTokenSource<'src>> {
    token_source: TTokenSource,
    buffer: VecDeque<XidlToken<'src>>,
}

impl<'src, TTokenSource: XidlTokenSource<'src>> XidlTokenStream<'src, TTokenSource> {
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
        }
    }

    /// Advance to the next token and return it as an owned value.
    ///
    /// Returns `None` if the stream is exhausted.
    pub fn consume(&mut self) -> Option<XidlToken<'src>> {
        self.ensure_buffer_has(1);
        self.buffer.pop_front()
    }

    /// Returns the number of tokens currently buffered (unconsumed).
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

    /// Returns `true` if there are no more tokens to consume, or if the next
    /// token is `Eof`.
    pub fn is_at_end(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(token) => matches!(token.kind, XidlTokenKind::Eof),
        }
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<&XidlToken<'src>> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed from the next unconsumed
    /// token). Returns `None` if the stream ends before position n.
    pub fn peek_nth(&mut self, n: usize) -> Option<&XidlToken<'src>> {
        self.ensure_buffer_has(n + 1);
        self.buffer.get(n)
    }
}
