//! Package scheduler: renders every package of the registry on a fixed
//! worker pool.
//!
//! The namespace set is built once and shared read-only. Package ids are
//! queued up front; each pool thread loops popping one id at a time and runs
//! a fresh exporter for it, so emission state never crosses threads. A panic
//! inside one package (an internal-consistency violation) propagates out of
//! the pool and aborts the run.

use crate::queue::WorkQueue;
use crate::sink::{ArtifactSink, SinkError};
use pkgstub_emitter::{ExportOptions, NamespaceError, PackageNamespaces, export_package};
use pkgstub_symbols::{PackageId, PackageRegistry, SymbolTable};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tracing::{Level, debug, error, info, span};

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Namespaces(#[from] NamespaceError),

    #[error("failed to start worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("{} artifact(s) could not be written; first: {}", .0.len(), first_error(.0))]
    Sink(Vec<SinkError>),
}

fn first_error(errors: &[SinkError]) -> String {
    errors
        .first()
        .map(|err| err.to_string())
        .unwrap_or_default()
}

/// Settings of one scheduler run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    /// `None` uses every available core.
    pub workers: Option<usize>,
    pub export: ExportOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            output_dir: PathBuf::from("."),
            workers: None,
            export: ExportOptions::default(),
        }
    }
}

impl RunConfig {
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get).max(1)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub packages: usize,
    pub artifacts: usize,
}

/// Render every package of `packages` and hand the artifacts to `sink`.
pub fn run(
    table: &SymbolTable,
    packages: &PackageRegistry,
    config: &RunConfig,
    sink: &dyn ArtifactSink,
) -> Result<RunSummary, ScheduleError> {
    let workers = config.worker_count();
    let _span = span!(
        Level::INFO,
        "schedule",
        packages = packages.len(),
        workers
    )
    .entered();

    let namespaces = PackageNamespaces::build(table, packages)?;
    let queue: WorkQueue<PackageId> = packages.ids().collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("pkgstub-worker-{index}"))
        .build()?;

    let processed = AtomicUsize::new(0);
    let written = AtomicUsize::new(0);
    let failures = Mutex::new(Vec::new());

    pool.broadcast(|ctx| {
        while let Some(&id) = queue.try_pop() {
            let Some(package) = packages.get(id) else {
                continue;
            };
            debug!(worker = ctx.index(), package = %package.full_name(), "picked package");

            let bundle = export_package(table, package, &namespaces, &config.export);
            processed.fetch_add(1, Ordering::Relaxed);

            let files = match bundle.files() {
                Ok(files) => files,
                Err(source) => {
                    record_failure(
                        &failures,
                        SinkError::Manifest {
                            package: package.full_name(),
                            source,
                        },
                    );
                    continue;
                }
            };
            for (name, contents) in files {
                match sink.write(&name, &contents) {
                    Ok(()) => {
                        written.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(err) => record_failure(&failures, err),
                }
            }
        }
    });

    let failures = failures
        .into_inner()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if !failures.is_empty() {
        return Err(ScheduleError::Sink(failures));
    }

    let summary = RunSummary {
        packages: processed.into_inner(),
        artifacts: written.into_inner(),
    };
    info!(
        packages = summary.packages,
        artifacts = summary.artifacts,
        "run complete"
    );
    Ok(summary)
}

fn record_failure(failures: &Mutex<Vec<SinkError>>, err: SinkError) {
    error!(error = %err, "artifact write failed");
    failures
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push(err);
}
