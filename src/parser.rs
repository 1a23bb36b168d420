//! Cursor over the token vector.
//!
//! The stream owns the tokens and a single index into them; nothing else is
//! mutated while the emitter walks the input. Each primitive either advances
//! past the current token or reports an error anchored at it.

use crate::error::{CompileError, CompileResult};
use crate::tokenizer::{Token, TokenKind, token_text};

pub struct TokenStream<'a> {
  tokens: Vec<Token>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  /// Take ownership of the tokens; `pos` starts at the first one.
  pub fn new(tokens: Vec<Token>, source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  pub fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  /// Byte offset of the current token, or the end of input once exhausted.
  fn loc(&self) -> usize {
    self.peek().map_or(self.source.len(), |token| token.loc)
  }

  fn is_punct(&self, op: char) -> bool {
    matches!(
      self.peek(),
      Some(token) if token.kind == TokenKind::Punctuator
        && token.len == op.len_utf8()
        && token_text(token, self.source).starts_with(op)
    )
  }

  /// Consume the current token if it is the punctuator `op`.
  pub fn consume(&mut self, op: char) -> bool {
    if self.is_punct(op) {
      self.pos += 1;
      return true;
    }
    false
  }

  pub fn expect(&mut self, op: char) -> CompileResult<()> {
    if self.consume(op) {
      Ok(())
    } else {
      Err(CompileError::syntax(
        self.source,
        self.loc(),
        format!("expected '{op}'"),
      ))
    }
  }

  /// Take the value of the current token if it is a number.
  pub fn expect_number(&mut self) -> CompileResult<i64> {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Num
      && let Some(value) = token.value
    {
      self.pos += 1;
      return Ok(value);
    }

    Err(CompileError::syntax(
      self.source,
      self.loc(),
      "expected a number",
    ))
  }

  pub fn at_eof(&self) -> bool {
    matches!(self.peek().map(|token| token.kind), Some(TokenKind::Eof) | None)
  }
}
