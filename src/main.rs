use std::env;
use std::ffi::OsString;
use std::process;

use clap::Parser as _;
use tracing::debug;

use pmcc::config::LogConfig;
use pmcc::{generate_assembly, logging};

#[derive(Debug, clap::Parser)]
#[command(
  about = "Compiles a `+`/`-` integer expression into x86-64 assembly.",
  disable_help_flag = true,
  disable_version_flag = true
)]
struct Cli {
  #[arg(help = "Expression to compile, e.g. '5+20-4'")]
  expr: String,
}

/// Exactly one raw argument is accepted, whatever it looks like. It is
/// handed to clap after `--` so flags such as `--help` stay expressions.
fn parse_args(args: Vec<OsString>) -> Option<Cli> {
  let [program, expr] = <[OsString; 2]>::try_from(args).ok()?;
  Cli::try_parse_from([program, OsString::from("--"), expr])
    .map_err(|err| {
      debug!(target: "pmcc", %err, "rejected arguments");
    })
    .ok()
}

fn main() {
  logging::init(&LogConfig::from_env());

  let Some(cli) = parse_args(env::args_os().collect()) else {
    let program = env::args_os()
      .next()
      .map_or_else(|| "pmcc".to_string(), |p| p.to_string_lossy().into_owned());
    eprintln!("usage: {program} <expr>");
    process::exit(1);
  };

  debug!(target: "pmcc", expr = %cli.expr, "compiling");
  match generate_assembly(&cli.expr) {
    Ok(asm) => print!("{asm}"),
    Err(err) => {
      debug!(target: "pmcc", kind = ?err.kind(), loc = err.loc(), "compilation failed");
      eprintln!("{err}");
      process::exit(1);
    }
  }
}
