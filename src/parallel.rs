// src/parallel.rs
// PARALLEL BATCH LOADING
// Runs one independent load cycle per input file using Rayon.
// Each cycle builds and owns its own index/tree pair on a single worker thread;
// nothing is shared between cycles, so no structure ever sees two writers.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::debug;

use crate::analysis::{Analysis, IndexConfig};
use crate::error::Result;
use crate::source;

pub struct BatchProcessor;

/// Outcome of one file's load cycle.
pub struct BatchResult {
    pub path: PathBuf,
    pub analysis: Result<Analysis>,
}

impl BatchProcessor {
    /// Loads every path in parallel. Results come back in input order;
    /// a failing file does not abort the others.
    pub fn load_files(paths: &[PathBuf], config: &IndexConfig, fasta: bool) -> Vec<BatchResult> {
        paths.par_iter()
        .map(|path| {
            debug!(path = %path.display(), "starting load cycle");
            let analysis = source::read_source(path, fasta)
            .and_then(|raw| Analysis::load(&raw, config));
            BatchResult { path: path.clone(), analysis }
        })
        .collect()
    }
}
