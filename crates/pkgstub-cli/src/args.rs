use clap::Parser;
use std::path::PathBuf;

use crate::config::FileConfig;

/// CLI arguments for the pkgstub binary.
#[derive(Parser, Debug)]
#[command(
    name = "pkgstub",
    version,
    about = "Generate interface stubs for every package of a frozen symbol table"
)]
pub struct CliArgs {
    /// Symbol table snapshot (JSON) to read.
    #[arg(short = 's', long)]
    pub snapshot: PathBuf,

    /// Directory the artifacts are written to.
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Number of worker threads (default: available cores).
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// Base class of flat-file records, e.g. `Opus::Flatfiles::Record`.
    #[arg(long = "record-base")]
    pub record_base: Option<String>,

    /// Path to a pkgstub.json config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Render only this package (e.g. `Project::Foo`) and print its stub.
    #[arg(short = 'p', long)]
    pub package: Option<String>,
}

impl CliArgs {
    /// The settings given on the command line, in config-file shape.
    pub fn overrides(&self) -> FileConfig {
        FileConfig {
            output_dir: self.output_dir.clone(),
            workers: self.workers,
            record_base: self.record_base.clone(),
            header: None,
        }
    }
}
