// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriplexError {
    #[error("Invalid hash table size: {0} (must be greater than zero)")]
    InvalidTableSize(usize),
    #[error("Hash table size overflows: {windows} triplets + {padding} padding buckets")]
    TableSizeOverflow { windows: usize, padding: usize },
    #[error("Hash table size {0} cannot be allocated")]
    TableTooLarge(usize),
    #[error("Invalid triplet: {0:?} (expected exactly 3 symbols from A, C, G, T)")]
    InvalidTriplet(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TriplexError>;
