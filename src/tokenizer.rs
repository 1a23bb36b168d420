//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! The tokenizer only knows three things: whitespace is skipped, `+` and `-`
//! are punctuators, and a run of digits is a number. Anything else stops the
//! scan with an error at the offending byte.

use tracing::{debug, trace};

use crate::error::{CompileError, CompileResult};

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Punctuator,
  Num,
  Eof,
}

/// Lexical information needed by the emitter. `loc` is a byte offset into
/// the source and is only used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub value: Option<i64>,
  pub loc: usize,
  pub len: usize,
}

impl Token {
  pub fn new(kind: TokenKind, loc: usize, len: usize, value: Option<i64>) -> Self {
    Self {
      kind,
      value,
      loc,
      len,
    }
  }
}

/// Lex the input into a flat vector of tokens terminated by a single `Eof`.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
  let mut tokens = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];
    if is_space(c) {
      i += 1;
      continue;
    }

    if c == b'+' || c == b'-' {
      trace!(target: "pmcc::tokenizer", loc = i, op = %(c as char), "punctuator");
      tokens.push(Token::new(TokenKind::Punctuator, i, 1, None));
      i += 1;
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
      }
      let value = input[start..i]
        .parse::<i64>()
        .map_err(|_| CompileError::lex(input, start, "number out of range"))?;
      trace!(target: "pmcc::tokenizer", loc = start, value, "number");
      tokens.push(Token::new(TokenKind::Num, start, i - start, Some(value)));
      continue;
    }

    return Err(CompileError::lex(input, i, "invalid token"));
  }

  tokens.push(Token::new(TokenKind::Eof, input.len(), 0, None));
  debug!(target: "pmcc::tokenizer", count = tokens.len(), "tokenized input");
  Ok(tokens)
}

/// The C `isspace` set, which unlike `u8::is_ascii_whitespace` includes
/// vertical tab.
fn is_space(c: u8) -> bool {
  matches!(c, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Return the slice from the source that produced this token.
pub fn token_text<'a>(token: &Token, source: &'a str) -> &'a str {
  &source[token.loc..token.loc + token.len]
}
