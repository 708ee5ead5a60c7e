// src/report.rs
// REPORTING LAYER
// Pure text rendering over an index/tree pair. Nothing here mutates either structure.
//
// Line grammar:
//   listings:  <TRIPLET>: <frequency> veces [<pos1>, <pos2>, ...]
//   extremes:  <TRIPLET> (Frecuencia: <n>)

use std::collections::BTreeMap;
use std::fmt;

use crate::amino::{AminoAcid, AminoAcidLookup};
use crate::analysis::Analysis;
use crate::index::{IndexEntry, TripletIndex};
use crate::sequence::Triplet;
use crate::tree::FrequencyTree;

pub const NO_TRIPLETS: &str = "No se encontraron tripletes.";
pub const NO_DATA: &str = "No hay datos.";
pub const NO_COLLISIONS: &str = "No se encontraron colisiones en la tabla hash.";

/// A titled block of report lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub lines: Vec<String>,
}

impl Report {
    fn new(title: &str, lines: Vec<String>) -> Self {
        Self { title: title.to_string(), lines }
    }

    /// Falls back to a single explanatory line when there is nothing to list.
    fn or_message(title: &str, lines: Vec<String>, message: &str) -> Self {
        if lines.is_empty() {
            Self::new(title, vec![message.to_string()])
        } else {
            Self::new(title, lines)
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub struct Reporter;

impl Reporter {
    pub fn listing_line(entry: &IndexEntry) -> String {
        format!("{}: {} veces {}", entry.triplet(), entry.frequency(), entry.positions())
    }

    pub fn extreme_line(triplet: Triplet, frequency: usize) -> String {
        format!("{} (Frecuencia: {})", triplet, frequency)
    }

    /// Every triplet, highest frequency first. Order comes from the tree;
    /// positions are recovered from the index.
    pub fn frequency_listing(index: &TripletIndex, tree: &FrequencyTree) -> Report {
        let lines = tree
        .descending()
        .into_iter()
        .filter_map(|(triplet, _)| index.lookup(&triplet))
        .map(Self::listing_line)
        .collect();
        Report::or_message("Lista de Patrones (mayor a menor frecuencia)", lines, NO_TRIPLETS)
    }

    /// `(most, least)` frequent lines; both read `NO_DATA` on an empty tree.
    pub fn extremes_report(tree: &FrequencyTree) -> (String, String) {
        let render = |hit: Option<(Triplet, usize)>| {
            hit.map(|(t, f)| Self::extreme_line(t, f)).unwrap_or_else(|| NO_DATA.to_string())
        };
        (render(tree.most_frequent()), render(tree.least_frequent()))
    }

    pub fn extremes(tree: &FrequencyTree) -> Report {
        let (most, least) = Self::extremes_report(tree);
        Report::new("Análisis de Frecuencia", vec![
            format!("Patrón MÁS frecuente: {}", most),
            format!("Patrón MENOS frecuente: {}", least),
        ])
    }

    /// One line per colliding bucket naming the chained triplets, then the total.
    pub fn collision_diagnostics(index: &TripletIndex) -> Report {
        let title = "Reporte de Colisiones";
        let chains = index.collision_chains();
        if chains.is_empty() {
            return Report::new(title, vec![NO_COLLISIONS.to_string()]);
        }

        let mut lines: Vec<String> = chains
        .iter()
        .map(|(bucket, triplets)| {
            let members: Vec<String> = triplets.iter().map(|t| t.to_string()).collect();
            format!("Casilla {}: {} colisiones -> {}", bucket, triplets.len() - 1, members.join(", "))
        })
        .collect();
        lines.push(String::new());
        lines.push(format!("Total colisiones: {}", index.total_collisions()));
        Report::new(title, lines)
    }

    /// Distinct triplets in lexicographic order, one per line.
    pub fn triplet_listing(index: &TripletIndex) -> Report {
        let lines = index.sorted_triplets().iter().map(|t| t.to_string()).collect();
        Report::or_message("Tripletes Distintos", lines, NO_TRIPLETS)
    }

    pub fn search_report(index: &TripletIndex, triplet: &Triplet) -> String {
        match index.lookup(triplet) {
            Some(entry) => Self::listing_line(entry),
            None => format!("{}: no encontrado", triplet),
        }
    }

    /// Triplets grouped by encoded amino acid. Groups are sorted by name,
    /// members by descending frequency (ties by triplet).
    pub fn amino_acid_report(index: &TripletIndex, lookup: &impl AminoAcidLookup) -> Report {
        let mut groups: BTreeMap<&'static str, (AminoAcid, Vec<&IndexEntry>)> = BTreeMap::new();
        for entry in index.entries() {
            let amino = lookup.classify(&entry.triplet());
            groups.entry(amino.name()).or_insert_with(|| (amino, Vec::new())).1.push(entry);
        }

        let mut lines = Vec::new();
        for (name, (amino, mut members)) in groups {
            members.sort_by(|a, b| {
                b.frequency().cmp(&a.frequency()).then_with(|| a.triplet().cmp(&b.triplet()))
            });

            lines.push(format!("--- {} ({} / {}) ---", name, amino.abbrev3(), amino.abbrev1()));
            lines.extend(members.into_iter().map(|e| {
                format!("  {} (ARN: {})", Self::listing_line(e), e.triplet().to_rna())
            }));
            lines.push(String::new());
        }
        Report::or_message("Reporte por Aminoácidos", lines, NO_TRIPLETS)
    }

    pub fn summary(analysis: &Analysis) -> Report {
        let index = analysis.index();
        let comp = analysis.composition();
        Report::new("Resumen", vec![
            format!("Nucleótidos procesados: {}", analysis.cleaned_len()),
            format!("Tripletes encontrados: {}", analysis.window_count()),
            format!("Tripletes distintos: {}", index.len()),
            format!("Tamaño de tabla: {}", index.table_size()),
            format!("Colisiones totales: {}", index.total_collisions()),
            format!("Altura del árbol: {}", analysis.tree().height()),
            format!("Contenido GC: {:.1}% (A={} C={} G={} T={})", comp.gc_content, comp.a, comp.c, comp.g, comp.t),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amino::StandardCode;
    use crate::analysis::IndexConfig;

    fn t(s: &str) -> Triplet {
        Triplet::parse(s).unwrap()
    }

    fn load(raw: &str, table_size: Option<usize>) -> Analysis {
        let config = IndexConfig { table_size, ..IndexConfig::default() };
        Analysis::load(raw, &config).unwrap()
    }

    #[test]
    fn test_frequency_listing_descending_with_positions() {
        let a = load("ATGCCCATGTAAATG", None);
        let report = Reporter::frequency_listing(a.index(), a.tree());
        assert_eq!(report.lines, vec![
            "ATG: 3 veces [0, 6, 12]",
            "TAA: 1 veces [9]",
            "CCC: 1 veces [3]",
        ]);
    }

    #[test]
    fn test_listing_empty_input() {
        let a = load("xx", None);
        let report = Reporter::frequency_listing(a.index(), a.tree());
        assert_eq!(report.lines, vec![NO_TRIPLETS]);
    }

    #[test]
    fn test_extremes_report() {
        let a = load("ATGATGATG", None);
        assert_eq!(
            Reporter::extremes_report(a.tree()),
            ("ATG (Frecuencia: 3)".to_string(), "ATG (Frecuencia: 3)".to_string())
        );

        let empty = load("", None);
        assert_eq!(
            Reporter::extremes_report(empty.tree()),
            (NO_DATA.to_string(), NO_DATA.to_string())
        );
    }

    #[test]
    fn test_collision_diagnostics() {
        let clean = load("ATGATG", None);
        assert_eq!(Reporter::collision_diagnostics(clean.index()).lines, vec![NO_COLLISIONS]);

        let crowded = load("AAACCCAAAGGG", Some(1));
        let report = Reporter::collision_diagnostics(crowded.index());
        assert_eq!(report.lines, vec![
            "Casilla 0: 2 colisiones -> AAA, CCC, GGG".to_string(),
            String::new(),
            "Total colisiones: 2".to_string(),
        ]);
    }

    #[test]
    fn test_triplet_listing_is_sorted() {
        let a = load("TTTGGGAAATTT", Some(1));
        assert_eq!(Reporter::triplet_listing(a.index()).lines, vec!["AAA", "GGG", "TTT"]);

        let empty = load("AC", None);
        assert_eq!(Reporter::triplet_listing(empty.index()).lines, vec![NO_TRIPLETS]);
    }

    #[test]
    fn test_search_report() {
        let a = load("ATGCCCATG", None);
        assert_eq!(Reporter::search_report(a.index(), &t("ATG")), "ATG: 2 veces [0, 6]");
        assert_eq!(Reporter::search_report(a.index(), &t("GGG")), "GGG: no encontrado");
    }

    #[test]
    fn test_amino_acid_grouping() {
        // TTT/TTC -> Phe, ATG -> Met, TAA -> stop
        let a = load("TTTTTCTTCATGTAA", None);
        let report = Reporter::amino_acid_report(a.index(), &StandardCode);
        assert_eq!(report.lines, vec![
            "--- Fenilalanina (Phe / F) ---",
            "  TTC: 2 veces [3, 6] (ARN: UUC)",
            "  TTT: 1 veces [0] (ARN: UUU)",
            "",
            "--- Metionina (Inicio) (Met / M) ---",
            "  ATG: 1 veces [9] (ARN: AUG)",
            "",
            "--- STOP (Ocre) (--- / -) ---",
            "  TAA: 1 veces [12] (ARN: UAA)",
            "",
        ]);
    }

    #[test]
    fn test_summary_and_display() {
        let a = load("GGGCCC", Some(10));
        let report = Reporter::summary(&a);
        assert!(report.lines.contains(&"Tripletes distintos: 2".to_string()));
        assert!(report.lines.contains(&"Tamaño de tabla: 10".to_string()));
        assert!(report.lines.iter().any(|l| l.starts_with("Contenido GC: 100.0%")));

        let rendered = report.to_string();
        assert!(rendered.starts_with("=== Resumen ===\n\n"));
    }
}
