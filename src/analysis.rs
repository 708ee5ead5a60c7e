// src/analysis.rs
// LOAD CYCLE
// Owns the (index, tree) pair built from one input sequence and runs the phases in order:
//   1. normalize  2. bulk-insert into the index  3. bulk-load the tree  4. queries
// A new input means a new Analysis; nothing is patched in place.

use tracing::{debug, info};

use crate::error::{Result, TriplexError};
use crate::index::TripletIndex;
use crate::sequence::{Composition, SequenceNormalizer};
use crate::tree::FrequencyTree;
use crate::DEFAULT_TABLE_PADDING;

#[derive(Debug, Clone, Copy)]
pub struct IndexConfig {
    /// Explicit bucket count. When unset it is derived from the sequence length.
    pub table_size: Option<usize>,
    /// Extra buckets on top of the expected triplet count.
    pub table_padding: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { table_size: None, table_padding: DEFAULT_TABLE_PADDING }
    }
}

impl IndexConfig {
    /// Bucket count for a cleaned sequence of `cleaned_len` symbols.
    pub fn resolve_table_size(&self, cleaned_len: usize) -> Result<usize> {
        if let Some(size) = self.table_size {
            return Ok(size);
        }
        let windows = SequenceNormalizer::window_count(cleaned_len);
        windows
        .checked_add(self.table_padding)
        .ok_or(TriplexError::TableSizeOverflow { windows, padding: self.table_padding })
    }
}

pub struct Analysis {
    index: TripletIndex,
    tree: FrequencyTree,
    cleaned_len: usize,
    window_count: usize,
    composition: Composition,
}

impl Analysis {
    /// Runs a full load cycle over raw text.
    ///
    /// Fails only on a configuration error (zero, overflowing or unallocatable
    /// table size). Input too short to hold a triplet yields an empty, queryable
    /// analysis.
    pub fn load(raw: &str, config: &IndexConfig) -> Result<Self> {
        let cleaned = SequenceNormalizer::clean(raw);
        debug!(raw_len = raw.len(), cleaned_len = cleaned.len(), "sequence normalized");

        let table_size = config.resolve_table_size(cleaned.len())?;
        let mut index = TripletIndex::new(table_size)?;

        let mut window_count = 0;
        for (triplet, position) in SequenceNormalizer::segment(&cleaned) {
            index.insert(triplet, position);
            window_count += 1;
        }
        debug!(table_size, windows = window_count, distinct = index.len(), "index populated");

        let tree = FrequencyTree::from_index(&index);

        // The tree's extremal walks and a flat scan of the index must agree on frequency
        let walked = tree.most_frequent().zip(tree.least_frequent());
        let scanned = index.scan_extremes();
        debug!(?walked, ?scanned, "extremes cross-checked");
        debug_assert_eq!(
            walked.map(|((_, most), (_, least))| (most, least)),
            scanned.map(|((_, most), (_, least))| (most, least)),
        );
        info!(
            distinct = index.len(),
            collisions = index.total_collisions(),
            tree_height = tree.height(),
            "load cycle complete"
        );

        Ok(Self {
            composition: SequenceNormalizer::composition(&cleaned),
            cleaned_len: cleaned.len(),
            window_count,
            index,
            tree,
        })
    }

    pub fn index(&self) -> &TripletIndex {
        &self.index
    }

    pub fn tree(&self) -> &FrequencyTree {
        &self.tree
    }

    pub fn cleaned_len(&self) -> usize {
        self.cleaned_len
    }

    /// Triplet windows inserted (sum of all frequencies).
    pub fn window_count(&self) -> usize {
        self.window_count
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// True when the cleaned sequence held fewer than 3 symbols.
    pub fn is_empty(&self) -> bool {
        self.window_count == 0
    }
}
