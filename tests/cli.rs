use std::process::{Command, Output};

fn pmcc(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_pmcc"))
    .args(args)
    .env_remove("PMCC_LOG")
    .output()
    .expect("failed to run pmcc")
}

#[test]
fn compiles_expression_to_stdout() {
  let out = pmcc(&["5+20-4"]);
  assert!(out.status.success());
  assert_eq!(
    String::from_utf8(out.stdout).unwrap(),
    ".intel_syntax noprefix\n.globl main\nmain:\n  mov rax, 5\n  add rax, 20\n  sub rax, 4\n  ret\n"
  );
  assert!(out.stderr.is_empty());
}

#[test]
fn missing_argument_is_usage_error() {
  let out = pmcc(&[]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  assert!(String::from_utf8_lossy(&out.stderr).contains("usage:"));
}

#[test]
fn extra_argument_is_usage_error() {
  let out = pmcc(&["1", "2"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  assert!(String::from_utf8_lossy(&out.stderr).contains("usage:"));
}

#[test]
fn lexical_error_shows_caret() {
  let out = pmcc(&["1+2x"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  assert_eq!(
    String::from_utf8(out.stderr).unwrap(),
    "1+2x\n   ^ invalid token\n"
  );
}

#[test]
fn syntax_error_shows_caret() {
  let out = pmcc(&["1++2"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  assert_eq!(
    String::from_utf8(out.stderr).unwrap(),
    "1++2\n  ^ expected a number\n"
  );
}

#[test]
fn empty_expression_is_syntax_error() {
  let out = pmcc(&[""]);
  assert_eq!(out.status.code(), Some(1));
  assert_eq!(
    String::from_utf8(out.stderr).unwrap(),
    "\n^ expected a number\n"
  );
}

#[test]
fn leading_minus_reaches_the_compiler() {
  let out = pmcc(&["-3"]);
  assert_eq!(out.status.code(), Some(1));
  assert_eq!(
    String::from_utf8(out.stderr).unwrap(),
    "-3\n^ expected a number\n"
  );
}

#[test]
fn separator_counts_as_an_argument() {
  let out = pmcc(&["--", "5"]);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  assert!(String::from_utf8_lossy(&out.stderr).contains("usage:"));
}

#[test]
fn flags_are_compiled_as_expressions() {
  for (flag, caret) in [("--help", "  ^"), ("--version", "  ^"), ("-h", " ^"), ("-V", " ^")] {
    let out = pmcc(&[flag]);
    assert_eq!(out.status.code(), Some(1), "{flag}");
    assert!(out.stdout.is_empty(), "{flag}");
    assert_eq!(
      String::from_utf8(out.stderr).unwrap(),
      format!("{flag}\n{caret} invalid token\n"),
      "{flag}"
    );
  }
}

#[test]
fn lone_separator_is_compiled() {
  let out = pmcc(&["--"]);
  assert_eq!(out.status.code(), Some(1));
  assert_eq!(
    String::from_utf8(out.stderr).unwrap(),
    "--\n^ expected a number\n"
  );
}

#[test]
fn wide_operand_assembles_through_rdi() {
  let out = pmcc(&["1+3000000000"]);
  assert!(out.status.success());
  let asm = String::from_utf8(out.stdout).unwrap();
  assert!(asm.contains("  mov rdi, 3000000000\n  add rax, rdi\n"));
  assert!(!asm.contains("add rax, 3000000000"));
}
