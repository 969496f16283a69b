use std::{path::PathBuf, sync::LazyLock};

use anyhow::Result;
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

#[derive(Parser)]
#[command(name = "xtask", about = "bitcrc project automation")]
#[command(styles = clap_cargo::style::CLAP_STYLING)]
#[clap(disable_version_flag = true, bin_name = "cargo xtask")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Format code
  Fmt {
    /// Check formatting without making changes
    #[arg(long)]
    check: bool,
  },
  /// Lint code and check formatting
  Lint {
    /// Fix lint issues automatically
    #[arg(long)]
    fix: bool,
  },
  /// Run tests with and without `std`
  Test,
  /// Print the reference vectors
  Demo,
  /// Run throughput benchmarks
  Bench {
    /// Only run benchmarks matching this filter
    filter: Option<String>,
  },
}

/// Project root directory.
static ROOT: LazyLock<PathBuf> = LazyLock::new(|| {
  std::path::Path::new(env!("CARGO_MANIFEST_DIR")).ancestors().nth(1).unwrap().to_path_buf()
});

fn main() -> Result<()> {
  let cli = Cli::parse();

  let sh = Shell::new()?;
  sh.change_dir(ROOT.as_path());

  match cli.command {
    Command::Fmt { check } => fmt(&sh, check),
    Command::Lint { fix } => lint(&sh, fix),
    Command::Test => test(&sh),
    Command::Demo => demo(&sh),
    Command::Bench { filter } => bench(&sh, filter.as_deref()),
  }
}

fn fmt(sh: &Shell, check: bool) -> Result<()> {
  let args =
    std::iter::once("--all").chain(check.then_some(["--", "--check"]).into_iter().flatten());
  cmd!(sh, "cargo +nightly fmt {args...}").run()?;
  Ok(())
}

fn lint(sh: &Shell, fix: bool) -> Result<()> {
  let args =
    if fix { ["--fix", "--allow-dirty", "--allow-staged"] } else { ["--", "-D", "warnings"] };
  cmd!(sh, "cargo clippy --tests --all-features {args...}").run()?;
  cmd!(sh, "cargo clippy -p bitcrc --no-default-features {args...}").run()?;
  fmt(sh, !fix)
}

fn test(sh: &Shell) -> Result<()> {
  cmd!(sh, "cargo test --workspace").run()?;
  // The `no_std` build has no `io::Write`; its unit tests still link `std`.
  cmd!(sh, "cargo test -p bitcrc --no-default-features --lib --tests").run()?;
  Ok(())
}

fn demo(sh: &Shell) -> Result<()> {
  cmd!(sh, "cargo run -p bitcrc --example demo").run()?;
  Ok(())
}

fn bench(sh: &Shell, filter: Option<&str>) -> Result<()> {
  let filter = filter.into_iter();
  cmd!(sh, "cargo bench -p bitcrc --bench throughput -- {filter...}").run()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_subcommands() {
    let cli = Cli::try_parse_from(["xtask", "bench", "chunked"]).unwrap();
    assert!(matches!(&cli.command, Command::Bench { filter: Some(f) } if f == "chunked"));
    let cli = Cli::try_parse_from(["xtask", "fmt", "--check"]).unwrap();
    assert!(matches!(cli.command, Command::Fmt { check: true }));
  }

  #[test]
  fn root_is_workspace() {
    assert!(ROOT.join("Cargo.toml").is_file());
    assert!(ROOT.join("bitcrc").is_dir());
  }

  #[test]
  fn shell_enters_root() {
    let sh = Shell::new().unwrap();
    sh.change_dir(ROOT.as_path());
    assert_eq!(sh.current_dir(), *ROOT);
  }
}
