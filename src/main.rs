// src/main.rs
// TRIPLEX: Nucleotide Triplet Indexer
// Entry point for the Command Line Interface.
// Handles file input, logging setup, and printing reports for one load cycle per file.

mod cli;

use triplex::amino::StandardCode;
use triplex::parallel::BatchProcessor;
use triplex::source;
use triplex::{Analysis, IndexConfig, Reporter, Triplet};
use crate::cli::{Cli, Commands};

use clap::Parser;
use std::path::Path;
use anyhow::{Result, Context};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // LOGGING: RUST_LOG wins, otherwise warn (debug with --verbose)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .init();

    // CONCURRENCY CONFIGURATION (only batch summaries fan out)
    rayon::ThreadPoolBuilder::new()
    .num_threads(cli.jobs)
    .build_global()
    .map_err(|e| anyhow::anyhow!("Failed to configure thread pool: {}", e))?;

    let config = IndexConfig {
        table_size: cli.table_size,
        table_padding: cli.padding,
    };

    match &cli.command {
        Commands::List { input } => {
            let analysis = load(input, &config, cli.fasta)?;
            print!("{}", Reporter::frequency_listing(analysis.index(), analysis.tree()));
        }

        Commands::Triplets { input } => {
            let analysis = load(input, &config, cli.fasta)?;
            print!("{}", Reporter::triplet_listing(analysis.index()));
        }

        Commands::Extremes { input } => {
            let analysis = load(input, &config, cli.fasta)?;
            print!("{}", Reporter::extremes(analysis.tree()));
        }

        Commands::Collisions { input } => {
            let analysis = load(input, &config, cli.fasta)?;
            print!("{}", Reporter::collision_diagnostics(analysis.index()));
        }

        Commands::Search { input, triplet } => {
            let target = Triplet::parse(triplet).context("Search pattern rejected")?;
            let analysis = load(input, &config, cli.fasta)?;
            println!("{}", Reporter::search_report(analysis.index(), &target));
        }

        Commands::Aminoacids { input } => {
            let analysis = load(input, &config, cli.fasta)?;
            print!("{}", Reporter::amino_acid_report(analysis.index(), &StandardCode));
        }

        Commands::Summary { inputs } => {
            let num_threads = rayon::current_num_threads();
            println!("[*] Loading {} file(s) on {} thread(s)...", inputs.len(), num_threads);

            let mut failures = 0;
            for result in BatchProcessor::load_files(inputs, &config, cli.fasta) {
                println!("--------------------------------------------------");
                println!("    File: {}", result.path.display());
                match result.analysis {
                    Ok(analysis) => print!("{}", Reporter::summary(&analysis)),
                    Err(e) => {
                        failures += 1;
                        println!("[!] {}", e);
                    }
                }
            }
            println!("--------------------------------------------------");

            if failures > 0 {
                anyhow::bail!("[✘] {} of {} file(s) could not be analyzed.", failures, inputs.len());
            }
        }
    }
    Ok(())
}

/// Reads one file and runs its load cycle, printing the same status lines for every command.
fn load(path: &Path, config: &IndexConfig, fasta: bool) -> Result<Analysis> {
    println!("[*] Reading sequence from {}...", path.display());
    let raw = source::read_source(path, fasta)
    .with_context(|| format!("Failed to open input: {}", path.display()))?;

    let analysis = Analysis::load(&raw, config).context("Failed to build triplet index")?;

    if analysis.is_empty() {
        println!("[!] No triplets found: the cleaned sequence has fewer than 3 nucleotides.");
    } else {
        println!(
            "[✔] Processed {} nucleotides -> {} triplets ({} distinct, table size {}).",
            analysis.cleaned_len(),
            analysis.window_count(),
            analysis.index().len(),
            analysis.index().table_size()
        );
    }
    println!();
    Ok(analysis)
}
