//! Buffered lookahead over [`GraphQLLexer`].

use crate::GraphQLLexer;
use crate::GraphQLSyntaxError;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::collections::VecDeque;

/// A token stream with bounded lookahead over a [`GraphQLLexer`].
///
/// Tokens are buffered in a [`VecDeque`] ring buffer: unconsumed tokens
/// accumulate at the back, `consume()` pops from the front. `Comment`
/// tokens are inspected and dropped while filling the buffer, so the
/// parser only ever sees significant tokens.
///
/// The lexer yields `Eof` tokens indefinitely at end of input, so any
/// lookahead depth can be satisfied. A lexical error surfaces from
/// whichever `peek`/`consume` call first reaches the bad input and is
/// terminal: the parser propagates it and the parse aborts.
pub struct GraphQLTokenStream {
    lexer: GraphQLLexer,
    /// Ring buffer of unconsumed significant tokens.
    buffer: VecDeque<GraphQLToken>,
}

impl GraphQLTokenStream {
    pub fn new(lexer: GraphQLLexer) -> Self {
        Self {
            lexer,
            buffer: VecDeque::new(),
        }
    }

    /// Advance past the next token and return it.
    pub fn consume(&mut self) -> Result<GraphQLToken, GraphQLSyntaxError> {
        self.ensure_buffer_has(1)?;
        // ensure_buffer_has(1) always leaves at least one token (the
        // lexer never runs dry before Eof).
        Ok(self.buffer.pop_front().unwrap_or_else(|| {
            unreachable!("token buffer empty after fill")
        }))
    }

    /// Peek at the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Result<&GraphQLToken, GraphQLSyntaxError> {
        self.peek_nth(0)
    }

    /// Peek at the nth token ahead (0-indexed; `peek_nth(0)` is
    /// `peek()`).
    pub fn peek_nth(&mut self, n: usize) -> Result<&GraphQLToken, GraphQLSyntaxError> {
        self.ensure_buffer_has(n + 1)?;
        Ok(&self.buffer[n])
    }

    /// Fill the buffer with at least `count` significant tokens,
    /// discarding comments.
    fn ensure_buffer_has(&mut self, count: usize) -> Result<(), GraphQLSyntaxError> {
        while self.buffer.len() < count {
            let token = self.lexer.next_token()?;
            if token.kind != GraphQLTokenKind::Comment {
                self.buffer.push_back(token);
            }
        }
        Ok(())
    }
}
