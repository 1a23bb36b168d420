//! Diagnostics shared by the tokenizer and the emitter.
//!
//! Every error carries the input line and the byte offset it refers to, and
//! renders chibicc-style: the line, then a caret under the offending column.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  Lex,
  Syntax,
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum CompileError {
  #[snafu(display("{}\n{}^ {message}", source_line, marker(source_line, *loc)))]
  Lex {
    source_line: String,
    loc: usize,
    message: String,
  },
  #[snafu(display("{}\n{}^ {message}", source_line, marker(source_line, *loc)))]
  Syntax {
    source_line: String,
    loc: usize,
    message: String,
  },
}

impl CompileError {
  /// A character the tokenizer cannot classify, at byte offset `loc`.
  pub fn lex(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    LexSnafu {
      source_line: expr,
      loc: loc.min(expr.len()),
      message,
    }
    .build()
  }

  /// A token that does not fit `NUMBER (('+' | '-') NUMBER)*`.
  pub fn syntax(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    SyntaxSnafu {
      source_line: expr,
      loc: loc.min(expr.len()),
      message,
    }
    .build()
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Lex { .. } => ErrorKind::Lex,
      Self::Syntax { .. } => ErrorKind::Syntax,
    }
  }

  /// Byte offset into the input line.
  pub fn loc(&self) -> usize {
    match self {
      Self::Lex { loc, .. } | Self::Syntax { loc, .. } => *loc,
    }
  }

  pub fn message(&self) -> &str {
    match self {
      Self::Lex { message, .. } | Self::Syntax { message, .. } => message,
    }
  }
}

/// Spaces up to the character column of `loc`.
fn marker(expr: &str, loc: usize) -> String {
  let safe_loc = loc.min(expr.len());
  let column = expr
    .get(..safe_loc)
    .map_or(safe_loc, |prefix| prefix.chars().count());
  " ".repeat(column)
}
