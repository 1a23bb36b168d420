//! Crate root: wires together the compilation pipeline.
//!
//! - `tokenizer` performs lexical analysis and produces a flat token stream.
//! - `parser` owns the cursor over that stream.
//! - `codegen` drives the cursor and emits x86-64 Intel-syntax assembly.
//! - `error` centralises the caret diagnostics shared by the other modules.
//! - `config` and `logging` set up `tracing` for the binary.

pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod tokenizer;

mod codegen;

pub use error::{CompileError, CompileResult, ErrorKind};

/// Compile an expression such as `5+20-4` into assembly for `main`.
///
/// Nothing is returned unless the whole input was accepted.
pub fn generate_assembly(expr: &str) -> CompileResult<String> {
  let tokens = tokenizer::tokenize(expr)?;
  let mut stream = parser::TokenStream::new(tokens, expr);
  codegen::generate(&mut stream)
}
