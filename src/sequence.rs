// src/sequence.rs
// SEQUENCE NORMALIZER
// Reduces raw text to the nucleotide alphabet and cuts it into triplets.
// Everything downstream (index, tree, reports) only ever sees values produced here.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TriplexError};
use crate::TRIPLET_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A, C, G, T,
}

impl Base {
    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A', Base::C => 'C', Base::G => 'G', Base::T => 'T',
        }
    }

    /// Case-insensitive. Anything outside {A,C,G,T} is rejected.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Base::A), 'C' | 'c' => Some(Base::C),
            'G' | 'g' => Some(Base::G), 'T' | 't' => Some(Base::T),
            _ => None,
        }
    }

    pub fn from_byte(b: u8) -> Option<Self> {
        Self::from_char(b as char)
    }
}

/// A 3-symbol window over {A,C,G,T}, always stored uppercase.
///
/// Ordering is lexicographic on the symbols, which is what the frequency tree
/// uses to break ties between equal frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triplet([u8; TRIPLET_LEN]);

impl Triplet {
    /// Builds a triplet from exactly three nucleotide bytes (any case).
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != TRIPLET_LEN {
            return None;
        }
        let mut out = [0u8; TRIPLET_LEN];
        for (slot, &b) in out.iter_mut().zip(bytes) {
            *slot = Base::from_byte(b)?.to_char() as u8;
        }
        Some(Triplet(out))
    }

    /// Validating constructor for text coming from outside the pipeline (CLI, tests).
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes()).ok_or_else(|| TriplexError::InvalidTriplet(s.to_string()))
    }

    /// Character codes, left to right. Input to the bucket hash.
    pub fn codes(&self) -> &[u8; TRIPLET_LEN] {
        &self.0
    }

    /// RNA codon for this triplet (T read as U).
    pub fn to_rna(&self) -> String {
        self.0.iter().map(|&b| if b == b'T' { 'U' } else { b as char }).collect()
    }
}

impl FromStr for Triplet {
    type Err = TriplexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Base counts of a cleaned sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Composition {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub gc_content: f64,
}

pub struct SequenceNormalizer;

impl SequenceNormalizer {
    /// Keeps only A/C/G/T (any case), uppercased, in their original order.
    /// Whitespace, digits, punctuation and header text are dropped silently.
    pub fn clean(raw: &str) -> String {
        // Optimization: cleaned text is never longer than the input
        let mut cleaned = String::with_capacity(raw.len());
        cleaned.extend(raw.chars().filter_map(Base::from_char).map(Base::to_char));
        cleaned
    }

    pub fn is_valid_triplet(s: &str) -> bool {
        s.len() == TRIPLET_LEN && s.chars().all(|c| Base::from_char(c).is_some())
    }

    /// Non-overlapping windows `[i, i+3)` for `i = 0, 3, 6, ...` paired with `i`.
    /// A trailing remainder of 1 or 2 symbols produces no window.
    pub fn segment(cleaned: &str) -> impl Iterator<Item = (Triplet, usize)> + '_ {
        cleaned
        .as_bytes()
        .chunks_exact(TRIPLET_LEN)
        .enumerate()
        .filter_map(|(i, window)| Triplet::from_bytes(window).map(|t| (t, i * TRIPLET_LEN)))
    }

    /// Number of windows `segment` yields for a cleaned sequence of this length.
    pub fn window_count(cleaned_len: usize) -> usize {
        cleaned_len / TRIPLET_LEN
    }

    /// Counts bases and GC percentage. Empty input reports 0% GC.
    pub fn composition(cleaned: &str) -> Composition {
        let mut counts = Composition::default();
        for &base in cleaned.as_bytes() {
            match base {
                b'A' => counts.a += 1, b'C' => counts.c += 1,
                b'G' => counts.g += 1, b'T' => counts.t += 1,
                _ => {}
            }
        }

        let total = counts.a + counts.c + counts.g + counts.t;
        if total > 0 {
            counts.gc_content = ((counts.c + counts.g) as f64 / total as f64) * 100.0;
        }
        counts
    }
}
