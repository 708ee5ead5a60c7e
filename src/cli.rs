// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use triplex::DEFAULT_TABLE_PADDING;

#[derive(Parser)]
#[command(name = "triplex", version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(help_template = "\
{before-help}{name} v{version}
{about-with-newline}
{usage-heading}
{usage}

{all-args}{after-help}
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fixed number of hash buckets.
    ///
    /// When omitted the table holds (cleaned length / 3) + PADDING buckets.
    /// The table is never resized after construction.
    #[arg(long, global = true, value_name = "N")]
    pub table_size: Option<usize>,

    /// Extra buckets added to the derived table size
    #[arg(long, global = true, default_value_t = DEFAULT_TABLE_PADDING, value_name = "PADDING")]
    pub padding: usize,

    /// Treat input as FASTA: drop '>' header and ';' comment lines before cleaning
    #[arg(long, global = true)]
    pub fasta: bool,

    /// Set the number of threads for batch loading.
    ///
    /// - 0: Auto-detect (Use all available cores).
    /// - 1: Sequential (Single-threaded, good for debugging).
    /// - >1: Force specific thread count.
    #[arg(short = 'j', long, global = true, default_value_t = 0, value_name = "THREADS")]
    pub jobs: usize,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every triplet with its frequency and positions, most frequent first.
    #[command(visible_alias = "ls")]
    List {
        /// Sequence text file (plain or .zst)
        #[arg(value_name = "SEQ_FILE")]
        input: PathBuf,
    },

    /// List the distinct triplets in alphabetical order.
    Triplets {
        /// Sequence text file (plain or .zst)
        #[arg(value_name = "SEQ_FILE")]
        input: PathBuf,
    },

    /// Show the most and least frequent triplets.
    Extremes {
        /// Sequence text file (plain or .zst)
        #[arg(value_name = "SEQ_FILE")]
        input: PathBuf,
    },

    /// Report hash buckets that hold more than one triplet.
    Collisions {
        /// Sequence text file (plain or .zst)
        #[arg(value_name = "SEQ_FILE")]
        input: PathBuf,
    },

    /// Look up one triplet's frequency and positions.
    #[command(visible_alias = "find")]
    Search {
        /// Sequence text file (plain or .zst)
        #[arg(value_name = "SEQ_FILE")]
        input: PathBuf,

        /// Triplet to look up (case-insensitive, e.g. ATG)
        #[arg(value_name = "TRIPLET")]
        triplet: String,
    },

    /// Group triplets by the amino acid they encode.
    #[command(visible_alias = "aa")]
    Aminoacids {
        /// Sequence text file (plain or .zst)
        #[arg(value_name = "SEQ_FILE")]
        input: PathBuf,
    },

    /// Summarize one or more files; each file is loaded independently in parallel.
    Summary {
        /// Sequence text files (plain or .zst)
        #[arg(value_name = "SEQ_FILE", required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,
    },
}
