//! platgen CLI — generate platform lookup tables from `platgen.toml`.

mod commands;
mod config;
mod writer;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::PlatgenConfig;

#[derive(Parser)]
#[command(name = "platgen", version, about = "Deterministic platform table generator")]
struct Cli {
    /// Path to platgen.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log progress to stderr (overridden by PLATGEN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every configured output and write changed files
    Generate {
        /// Rewrite files even when their content is unchanged
        #[arg(long)]
        force: bool,
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Print one generated file to stdout
    Render {
        /// Target kind (tool-defaults, command-tool-defaults, full-support, reduced-support)
        target: String,
    },
    /// Resolve a tool default or support flag for a platform key
    Lookup {
        /// Tool name (cc, cxx, ld, asm) or "support"
        subject: String,
        /// Platform key, e.g. linux/amd64 or linux/amd64/gccgo
        key: String,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// List target kinds
    Targets,
    /// Write a starter platgen.toml
    Init {
        /// Directory to create it in (default: current directory)
        dir: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env("PLATGEN_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Generate {
            force,
            dry_run,
            format,
        } => {
            let (config, base_dir) = load_config(&cwd, cli.config.as_deref())?;
            commands::generate::run(&config, &base_dir, force, dry_run, format.as_deref())
        }

        Commands::Render { target } => {
            let (config, _) = load_config(&cwd, cli.config.as_deref())?;
            commands::render::run(&config, &target)
        }

        Commands::Lookup {
            subject,
            key,
            format,
        } => {
            let (config, _) = load_config(&cwd, cli.config.as_deref())?;
            commands::lookup::run(&config, &subject, &key, format.as_deref())
        }

        Commands::Targets => commands::targets::list(),

        Commands::Init { dir } => commands::init::run(&dir.unwrap_or(cwd)),
    }
}

/// Load the config from `explicit` or by searching upward from `cwd`.
///
/// Returns the config and the directory output paths are relative to.
fn load_config(cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<(PlatgenConfig, PathBuf)> {
    if let Some(path) = explicit {
        let config = PlatgenConfig::load(path)?;
        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => cwd.to_path_buf(),
        };
        return Ok((config, base_dir));
    }
    match PlatgenConfig::find_and_load(cwd)? {
        Some((config, dir)) => Ok((config, dir)),
        None => anyhow::bail!("no {} found (run `platgen init` first)", config::CONFIG_FILE),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Full workflow: init → generate → generate again → lookup.
    #[test]
    fn init_generate_lookup_workflow() {
        let dir = tempfile::tempdir().unwrap();
        commands::init::run(dir.path()).unwrap();

        let (config, base_dir) = load_config(dir.path(), None).unwrap();
        assert_eq!(base_dir, dir.path());
        commands::generate::run(&config, &base_dir, false, false, None).unwrap();

        let zdefaultcc = dir.path().join("src/cmd/go/internal/cfg/zdefaultcc.go");
        let first = std::fs::read_to_string(&zdefaultcc).unwrap();
        assert!(first.contains("func DefaultCC(goos, goarch string) string {\n"));
        assert!(first.contains("\tcase \"darwin/arm64\":\n\t\treturn \"clang\"\n"));

        commands::generate::run(&config, &base_dir, false, false, None).unwrap();
        assert_eq!(std::fs::read_to_string(&zdefaultcc).unwrap(), first);

        let answer = commands::lookup::resolve(&config, "cc", "darwin/arm64").unwrap();
        assert_eq!(answer.value, "clang");
    }

    #[test]
    fn explicit_config_path_sets_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("conf");
        commands::init::run(&nested).unwrap();

        let (_, base_dir) =
            load_config(dir.path(), Some(&nested.join(config::CONFIG_FILE))).unwrap();
        assert_eq!(base_dir, nested);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path(), Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("nope.toml"));
    }
}
