use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::Write;

use pkgstub_cli::args::CliArgs;
use pkgstub_cli::config::FileConfig;
use pkgstub_cli::scheduler::{self, RunConfig};
use pkgstub_cli::sink::FsSink;
use pkgstub_cli::tracing_config;
use pkgstub_emitter::{PackageNamespaces, export_package};
use pkgstub_symbols::Snapshot;

fn main() -> Result<()> {
    // Installed only when PKGSTUB_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let run = FileConfig::discover(args.config.as_deref(), &cwd)
        .and_then(|file| file.resolve(args.overrides()))
        .context("invalid configuration")?;

    let snapshot = Snapshot::load(&args.snapshot)
        .with_context(|| format!("failed to load snapshot {}", args.snapshot.display()))?;

    match args.package.as_deref() {
        Some(name) => print_package(&snapshot, &run, name),
        None => write_all(&snapshot, &run),
    }
}

/// Render one package and print its stub text to stdout.
fn print_package(snapshot: &Snapshot, run: &RunConfig, name: &str) -> Result<()> {
    let id = snapshot
        .packages
        .find_by_name(name)
        .ok_or_else(|| anyhow!("no package named `{name}` in snapshot"))?;
    let package = snapshot
        .packages
        .get(id)
        .ok_or_else(|| anyhow!("package `{name}` is not registered"))?;
    let namespaces = PackageNamespaces::build(&snapshot.table, &snapshot.packages)?;

    let bundle = export_package(&snapshot.table, package, &namespaces, &run.export);
    let mut stdout = std::io::stdout().lock();
    for artifact in bundle.export.iter().chain(&bundle.test_export) {
        stdout
            .write_all(artifact.text.as_bytes())
            .context("failed to write to stdout")?;
    }
    Ok(())
}

fn write_all(snapshot: &Snapshot, run: &RunConfig) -> Result<()> {
    let sink = FsSink::create(&run.output_dir)
        .with_context(|| format!("failed to prepare {}", run.output_dir.display()))?;
    let summary = scheduler::run(&snapshot.table, &snapshot.packages, run, &sink)
        .context("stub generation failed")?;
    tracing::info!(
        packages = summary.packages,
        artifacts = summary.artifacts,
        output_dir = %run.output_dir.display(),
        "wrote stubs"
    );
    Ok(())
}
