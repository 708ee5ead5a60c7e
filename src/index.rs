// src/index.rs
// TRIPLET INDEX
// Fixed-size hash table with separate chaining.
//
// Layout: every entry lives in one arena (`entries`); each bucket stores the arena id
// of its chain head and each entry stores the id of its successor. Entries are
// created on first sight of a triplet and never removed, so ids stay stable.
// The table is never resized: callers pick `table_size` up front.

use crate::error::{Result, TriplexError};
use crate::positions::PositionList;
use crate::sequence::Triplet;

/// Occurrence record for one distinct triplet.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    triplet: Triplet,
    frequency: usize,
    positions: PositionList,
    next: Option<usize>,
}

impl IndexEntry {
    fn new(triplet: Triplet, position: usize) -> Self {
        Self {
            triplet,
            frequency: 1,
            positions: PositionList::with_first(position),
            next: None,
        }
    }

    fn record(&mut self, position: usize) {
        self.positions.push(position);
        self.frequency += 1;
    }

    pub fn triplet(&self) -> Triplet {
        self.triplet
    }

    /// Always equal to `positions().len()`.
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn positions(&self) -> &PositionList {
        &self.positions
    }
}

/// Walks one bucket's chain, head first.
pub struct ChainIter<'a> {
    entries: &'a [IndexEntry],
    cursor: Option<usize>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a IndexEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entries = self.entries;
        let entry = &entries[self.cursor?];
        self.cursor = entry.next;
        Some(entry)
    }
}

pub struct TripletIndex {
    heads: Vec<Option<usize>>,
    entries: Vec<IndexEntry>,
    total_occurrences: usize,
}

impl TripletIndex {
    /// Fails fast on a zero-sized table (there is no way to insert into one) and
    /// on a bucket array the allocator refuses.
    pub fn new(table_size: usize) -> Result<Self> {
        if table_size == 0 {
            return Err(TriplexError::InvalidTableSize(table_size));
        }
        let mut heads = Vec::new();
        heads
        .try_reserve_exact(table_size)
        .map_err(|_| TriplexError::TableTooLarge(table_size))?;
        heads.resize(table_size, None);

        Ok(Self {
            heads,
            entries: Vec::new(),
            total_occurrences: 0,
        })
    }

    pub fn table_size(&self) -> usize {
        self.heads.len()
    }

    /// Polynomial base-31 hash over the character codes, left to right, seeded at 0.
    /// Accumulates with 32-bit signed wraparound and clears the sign at the end.
    pub fn raw_hash(triplet: &Triplet) -> u32 {
        let mut acc: i32 = 0;
        for &code in triplet.codes() {
            acc = acc.wrapping_mul(31).wrapping_add(code as i32);
        }
        acc.unsigned_abs()
    }

    /// Bucket index in `[0, table_size)`.
    pub fn bucket_of(&self, triplet: &Triplet) -> usize {
        (Self::raw_hash(triplet) as usize) % self.heads.len()
    }

    /// Records one occurrence of `triplet` at `position`.
    ///
    /// A triplet seen for the first time is linked at the tail of its bucket's
    /// chain, so chains keep first-seen order. Repeat occurrences append the
    /// position and bump the frequency.
    pub fn insert(&mut self, triplet: Triplet, position: usize) {
        let bucket = self.bucket_of(&triplet);
        self.total_occurrences += 1;

        let mut cursor = self.heads[bucket];
        let mut tail = None;
        while let Some(id) = cursor {
            let entry = &mut self.entries[id];
            if entry.triplet == triplet {
                entry.record(position);
                return;
            }
            tail = Some(id);
            cursor = entry.next;
        }

        let id = self.entries.len();
        self.entries.push(IndexEntry::new(triplet, position));
        match tail {
            Some(last) => self.entries[last].next = Some(id),
            None => self.heads[bucket] = Some(id),
        }
    }

    /// Average O(1); worst case is the length of the bucket's chain.
    pub fn lookup(&self, triplet: &Triplet) -> Option<&IndexEntry> {
        self.chain(self.bucket_of(triplet)).find(|e| e.triplet == *triplet)
    }

    pub fn chain(&self, bucket: usize) -> ChainIter<'_> {
        ChainIter {
            entries: &self.entries,
            cursor: self.heads.get(bucket).copied().flatten(),
        }
    }

    pub fn chain_len(&self, bucket: usize) -> usize {
        self.chain(bucket).count()
    }

    /// Every entry in increasing bucket order, chain order within a bucket.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> + '_ {
        (0..self.heads.len()).flat_map(move |bucket| self.chain(bucket))
    }

    /// Raw listing in bucket/chain order. This is the order the frequency tree is loaded in.
    pub fn distinct_triplets(&self) -> Vec<Triplet> {
        self.entries().map(|e| e.triplet).collect()
    }

    /// Same set as `distinct_triplets`, sorted for display.
    pub fn sorted_triplets(&self) -> Vec<Triplet> {
        let mut triplets = self.distinct_triplets();
        triplets.sort_unstable();
        triplets
    }

    /// `(bucket, chain_len - 1)` for every bucket holding more than one entry.
    pub fn collision_report(&self) -> Vec<(usize, usize)> {
        (0..self.heads.len())
        .filter_map(|bucket| {
            let len = self.chain_len(bucket);
            if len > 1 { Some((bucket, len - 1)) } else { None }
        })
        .collect()
    }

    pub fn total_collisions(&self) -> usize {
        self.collision_report().iter().map(|&(_, n)| n).sum()
    }

    /// Colliding buckets together with the triplets chained in them.
    pub fn collision_chains(&self) -> Vec<(usize, Vec<Triplet>)> {
        (0..self.heads.len())
        .filter_map(|bucket| {
            let triplets: Vec<Triplet> = self.chain(bucket).map(|e| e.triplet).collect();
            if triplets.len() > 1 { Some((bucket, triplets)) } else { None }
        })
        .collect()
    }

    /// Linear O(n) scan for `(most, least)` frequent entries.
    /// Ties resolve to whichever entry is met first in bucket order.
    pub fn scan_extremes(&self) -> Option<((Triplet, usize), (Triplet, usize))> {
        let mut iter = self.entries();
        let first = iter.next()?;
        let mut most = (first.triplet, first.frequency);
        let mut least = most;

        for entry in iter {
            if entry.frequency > most.1 {
                most = (entry.triplet, entry.frequency);
            }
            if entry.frequency < least.1 {
                least = (entry.triplet, entry.frequency);
            }
        }
        Some((most, least))
    }

    /// Distinct triplets stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all frequencies, i.e. number of `insert` calls.
    pub fn total_occurrences(&self) -> usize {
        self.total_occurrences
    }
}
