//! Code generation: walk the token stream once and emit Intel-syntax x86-64.
//!
//! There is no AST. The first number is loaded into `rax` and every
//! following `+ N` / `- N` pair becomes one `add` or `sub` on it, so the
//! arithmetic itself only happens when the assembled program runs.

use tracing::trace;

use crate::error::CompileResult;
use crate::parser::TokenStream;

/// Emit a complete `main` computing the expression into `rax`.
pub fn generate(stream: &mut TokenStream) -> CompileResult<String> {
  let mut asm = String::new();
  asm.push_str(".intel_syntax noprefix\n");
  asm.push_str(".globl main\n");
  asm.push_str("main:\n");

  let first = stream.expect_number()?;
  emit(&mut asm, "mov", first);

  while !stream.at_eof() {
    if stream.consume('+') {
      let value = stream.expect_number()?;
      emit(&mut asm, "add", value);
      continue;
    }

    stream.expect('-')?;
    let value = stream.expect_number()?;
    emit(&mut asm, "sub", value);
  }

  asm.push_str("  ret\n");
  Ok(asm)
}

/// `add`/`sub` only take a sign-extended 32-bit immediate; wider operands
/// are staged in `rdi`. `mov rax` accepts a full 64-bit immediate.
fn emit(asm: &mut String, mnemonic: &str, value: i64) {
  trace!(target: "pmcc::codegen", mnemonic, value, "emit");
  if mnemonic == "mov" || i32::try_from(value).is_ok() {
    asm.push_str(&format!("  {mnemonic} rax, {value}\n"));
  } else {
    asm.push_str(&format!("  mov rdi, {value}\n"));
    asm.push_str(&format!("  {mnemonic} rax, rdi\n"));
  }
}
