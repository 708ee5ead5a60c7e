// src/amino.rs
// AMINO ACID CLASSIFICATION
// Static lookup from a DNA triplet to the residue its RNA codon encodes
// (standard genetic code, T read as U). Only the grouping report uses it.

use crate::sequence::Triplet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AminoAcid {
    Residue {
        name: &'static str,
        abbrev3: &'static str,
        abbrev1: char,
    },
    /// Termination codon, named after its classic nickname.
    Stop(&'static str),
    Unknown,
}

impl AminoAcid {
    pub fn name(&self) -> &'static str {
        match self {
            AminoAcid::Residue { name, .. } => *name,
            AminoAcid::Stop(name) => *name,
            AminoAcid::Unknown => "Desconocido",
        }
    }

    pub fn abbrev3(&self) -> &'static str {
        match self {
            AminoAcid::Residue { abbrev3, .. } => *abbrev3,
            AminoAcid::Stop(_) => "---",
            AminoAcid::Unknown => "???",
        }
    }

    pub fn abbrev1(&self) -> char {
        match self {
            AminoAcid::Residue { abbrev1, .. } => *abbrev1,
            AminoAcid::Stop(_) => '-',
            AminoAcid::Unknown => '?',
        }
    }
}

/// Seam for whatever codon table the caller wants to group by.
pub trait AminoAcidLookup {
    fn classify(&self, triplet: &Triplet) -> AminoAcid;
}

/// The standard genetic code.
pub struct StandardCode;

// One residue letter per codon, codons ordered TTT, TTC, TTA, TTG, TCT, ... (T, C, A, G)
const STANDARD_TABLE: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

fn base_index(code: u8) -> usize {
    match code {
        b'T' => 0, b'C' => 1, b'A' => 2, b'G' => 3,
        _ => unreachable!("triplets only hold A/C/G/T"),
    }
}

fn residue(letter: u8) -> AminoAcid {
    let (name, abbrev3) = match letter {
        b'F' => ("Fenilalanina", "Phe"),
        b'L' => ("Leucina", "Leu"),
        b'S' => ("Serina", "Ser"),
        b'Y' => ("Tirosina", "Tyr"),
        b'C' => ("Cisteína", "Cys"),
        b'W' => ("Triptófano", "Trp"),
        b'P' => ("Prolina", "Pro"),
        b'H' => ("Histidina", "His"),
        b'Q' => ("Glutamina", "Gln"),
        b'R' => ("Arginina", "Arg"),
        b'I' => ("Isoleucina", "Ile"),
        b'M' => ("Metionina (Inicio)", "Met"),
        b'T' => ("Treonina", "Thr"),
        b'N' => ("Asparagina", "Asn"),
        b'K' => ("Lisina", "Lys"),
        b'V' => ("Valina", "Val"),
        b'A' => ("Alanina", "Ala"),
        b'D' => ("Ácido Aspártico", "Asp"),
        b'E' => ("Ácido Glutámico", "Glu"),
        b'G' => ("Glicina", "Gly"),
        _ => return AminoAcid::Unknown,
    };
    AminoAcid::Residue { name, abbrev3, abbrev1: letter as char }
}

impl AminoAcidLookup for StandardCode {
    fn classify(&self, triplet: &Triplet) -> AminoAcid {
        let [b1, b2, b3] = *triplet.codes();
        let slot = base_index(b1) * 16 + base_index(b2) * 4 + base_index(b3);

        match STANDARD_TABLE[slot] {
            b'*' => match triplet.codes() {
                b"TAA" => AminoAcid::Stop("STOP (Ocre)"),
                b"TAG" => AminoAcid::Stop("STOP (Ámbar)"),
                _ => AminoAcid::Stop("STOP (Ópalo)"),
            },
            letter => residue(letter),
        }
    }
}
