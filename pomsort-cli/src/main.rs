mod config;
mod render;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use fs_err as fs;
use pomsort_core::{
    is_project_manifest, run_check, run_fix, CheckSettings, FileBuffer, FixSettings, ToolError,
};
use pomsort_domain::SortKeys;
use pomsort_types::report::ToolInfo;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "pomsort",
    version,
    about = "Checks and sorts the <dependencies> list of Maven manifests."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report whether the dependency list is sorted (read-only).
    Check(CheckArgs),
    /// Sort the dependency list in place (default: dry-run with a diff).
    Fix(FixArgs),
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Path to the manifest (pom.xml).
    manifest: Utf8PathBuf,

    /// Output format (text, json).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Check the file even if it is not named pom.xml.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[derive(Debug, Parser)]
struct FixArgs {
    /// Path to the manifest (pom.xml).
    manifest: Utf8PathBuf,

    /// Write changes to disk. If omitted, prints the diff and exits.
    #[arg(long, default_value_t = false)]
    write: bool,

    /// Fix the file even if it is not named pom.xml.
    #[arg(long, default_value_t = false)]
    force: bool,

    /// Keep a copy of the original manifest next to it.
    #[arg(long, default_value_t = false)]
    backup: bool,

    /// Suffix for the backup copy.
    #[arg(long)]
    backup_suffix: Option<String>,

    /// Disable the sha256 staleness precondition (not recommended).
    #[arg(long, default_value_t = false)]
    no_clean_hashes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Fix(args) => cmd_fix(args),
    }
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "pomsort".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

fn ensure_manifest(path: &Utf8Path, force: bool) -> anyhow::Result<()> {
    if force || is_project_manifest(path) {
        return Ok(());
    }
    anyhow::bail!(
        "{} is not a recognized project manifest (pass --force to check it anyway)",
        path
    );
}

fn config_dir(manifest: &Utf8Path) -> Utf8PathBuf {
    manifest
        .parent()
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|| Utf8PathBuf::from("."))
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    ensure_manifest(&args.manifest, args.force)?;

    let file_config = config::load_or_default(&config_dir(&args.manifest))
        .context("load pomsort.toml config")?;
    let format = args.format.unwrap_or(match file_config.check.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    });

    let text = fs::read_to_string(&args.manifest)
        .with_context(|| format!("read {}", args.manifest))?;

    let outcome = run_check(&text, &CheckSettings { keys: SortKeys::default() }, tool_info());
    debug!(status = ?outcome.report.verdict.status, "check finished");

    match format {
        OutputFormat::Text => print!("{}", render::render_report(&outcome.report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&outcome.report).context("serialize report")?
        ),
    }

    Ok(if outcome.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn cmd_fix(args: FixArgs) -> anyhow::Result<ExitCode> {
    ensure_manifest(&args.manifest, args.force)?;

    let file_config = config::load_or_default(&config_dir(&args.manifest))
        .context("load pomsort.toml config")?;

    let settings = FixSettings {
        dry_run: !args.write,
        require_clean_hashes: !args.no_clean_hashes && file_config.fix.require_clean_hashes,
        keys: SortKeys::default(),
    };

    let backup = args.backup || file_config.fix.backup;
    let backup_suffix = args
        .backup_suffix
        .unwrap_or(file_config.fix.backup_suffix);
    if args.write && backup {
        let backup_path = Utf8PathBuf::from(format!("{}{}", args.manifest, backup_suffix));
        fs::copy(&args.manifest, &backup_path)
            .with_context(|| format!("back up {} to {}", args.manifest, backup_path))?;
        debug!(path = %backup_path, "wrote backup copy");
    }

    let mut buffer = FileBuffer::new(args.manifest.clone());
    match run_fix(&mut buffer, &settings) {
        Ok(outcome) => {
            print!("{}", render::render_fix(&outcome, args.write));
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ ToolError::Block(_)) => {
            error!("{}", e);
            Ok(ExitCode::from(2))
        }
        Err(ToolError::Internal(e)) => Err(e),
    }
}
