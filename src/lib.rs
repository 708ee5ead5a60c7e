// src/lib.rs
pub mod error;
pub mod sequence;
pub mod positions;
pub mod index;
pub mod tree;
pub mod amino;
pub mod report;
pub mod analysis;
pub mod parallel;
pub mod source;

pub use analysis::{Analysis, IndexConfig};
pub use error::{Result, TriplexError};
pub use index::{IndexEntry, TripletIndex};
pub use report::{Report, Reporter};
pub use sequence::{SequenceNormalizer, Triplet};
pub use tree::FrequencyTree;

/// Symbols per triplet. Fixed; other window lengths are not supported.
pub const TRIPLET_LEN: usize = 3;

/// Slots added on top of the expected triplet count when sizing the hash table.
pub const DEFAULT_TABLE_PADDING: usize = 100;

/// Starting capacity of every position list before the first doubling.
pub const POSITION_LIST_INITIAL_CAPACITY: usize = 5;
