//! Integration tests for the load cycle
//!
//! These tests drive the public API end to end: raw text in, index/tree queries
//! and rendered reports out.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use triplex::amino::StandardCode;
use triplex::report::{NO_COLLISIONS, NO_DATA, NO_TRIPLETS};
use triplex::{Analysis, FrequencyTree, IndexConfig, Reporter, SequenceNormalizer, Triplet, TripletIndex};

fn random_sequence(rng: &mut StdRng, len: usize) -> String {
    let bases = ['A', 'C', 'G', 'T'];
    (0..len).map(|_| bases[rng.gen_range(0..4)]).collect()
}

#[test]
fn test_scenario_atg_repeat() {
    let raw = "at-g\nATG 123 atg";
    assert_eq!(SequenceNormalizer::clean(raw), "ATGATGATG");

    let analysis = Analysis::load(raw, &IndexConfig::default()).unwrap();
    let atg = Triplet::parse("ATG").unwrap();
    let entry = analysis.index().lookup(&atg).unwrap();

    assert_eq!(entry.frequency(), 3);
    assert_eq!(entry.positions().as_slice(), &[0, 3, 6]);
    assert_eq!(analysis.tree().most_frequent(), Some((atg, 3)));
    assert!(analysis.index().collision_report().is_empty());
    assert_eq!(analysis.index().total_collisions(), 0);

    let listing = Reporter::frequency_listing(analysis.index(), analysis.tree());
    assert_eq!(listing.lines, vec!["ATG: 3 veces [0, 3, 6]"]);
}

#[test]
fn test_empty_cycle_produces_empty_reports() {
    let analysis = Analysis::load("12\n", &IndexConfig::default()).unwrap();

    assert!(analysis.is_empty());
    assert_eq!(analysis.tree().most_frequent(), None);
    assert_eq!(Reporter::frequency_listing(analysis.index(), analysis.tree()).lines, vec![NO_TRIPLETS]);
    assert_eq!(Reporter::extremes_report(analysis.tree()).0, NO_DATA);
    assert_eq!(Reporter::collision_diagnostics(analysis.index()).lines, vec![NO_COLLISIONS]);
    assert_eq!(Reporter::amino_acid_report(analysis.index(), &StandardCode).lines, vec![NO_TRIPLETS]);
}

#[test]
fn test_frequencies_match_positions_on_random_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let seq = random_sequence(&mut rng, 3_000);
    let analysis = Analysis::load(&seq, &IndexConfig::default()).unwrap();
    let index = analysis.index();

    let mut total = 0;
    for entry in index.entries() {
        assert_eq!(entry.frequency(), entry.positions().len());
        for &pos in entry.positions().iter() {
            assert_eq!(pos % 3, 0);
            assert_eq!(&seq[pos..pos + 3], entry.triplet().to_string());
        }
        total += entry.frequency();
    }
    assert_eq!(total, 1_000);
    assert_eq!(index.total_occurrences(), 1_000);
}

#[test]
fn test_insertion_order_does_not_change_counts() {
    let mut rng = StdRng::seed_from_u64(42);
    let seq = random_sequence(&mut rng, 900);
    let mut pairs: Vec<(Triplet, usize)> = SequenceNormalizer::segment(&seq).collect();

    let mut forward = TripletIndex::new(13).unwrap();
    for &(t, p) in &pairs {
        forward.insert(t, p);
    }

    pairs.shuffle(&mut rng);
    let mut shuffled = TripletIndex::new(13).unwrap();
    for &(t, p) in &pairs {
        shuffled.insert(t, p);
    }

    assert_eq!(forward.sorted_triplets(), shuffled.sorted_triplets());
    for triplet in forward.sorted_triplets() {
        let a = forward.lookup(&triplet).unwrap();
        let b = shuffled.lookup(&triplet).unwrap();
        assert_eq!(a.frequency(), b.frequency());

        let mut pa = a.positions().as_slice().to_vec();
        let mut pb = b.positions().as_slice().to_vec();
        pa.sort_unstable();
        pb.sort_unstable();
        assert_eq!(pa, pb);
    }
}

#[test]
fn test_total_collisions_matches_chain_lengths() {
    let mut rng = StdRng::seed_from_u64(3);
    let seq = random_sequence(&mut rng, 600);

    for size in [1, 5, 16, 64, 300] {
        let config = IndexConfig { table_size: Some(size), ..IndexConfig::default() };
        let analysis = Analysis::load(&seq, &config).unwrap();
        let index = analysis.index();

        let expected: usize = (0..size)
        .map(|b| index.chain_len(b))
        .filter(|&len| len > 0)
        .map(|len| len - 1)
        .sum();
        assert_eq!(index.total_collisions(), expected);
        assert!(index.collision_report().iter().all(|&(b, _)| index.chain_len(b) > 1));
    }
}

#[test]
fn test_tree_agrees_with_index() {
    let mut rng = StdRng::seed_from_u64(11);
    let seq = random_sequence(&mut rng, 6_000);
    let analysis = Analysis::load(&seq, &IndexConfig::default()).unwrap();
    let tree = analysis.tree();

    let order = tree.in_order();
    assert_eq!(order.len(), analysis.index().len());
    assert!(order.windows(2).all(|w| (w[0].1, w[0].0) <= (w[1].1, w[1].0)));
    assert_eq!(tree.least_frequent(), order.first().copied());
    assert_eq!(tree.most_frequent(), order.last().copied());

    // The linear scan may pick a different triplet on ties, but never a different frequency
    let ((_, most_f), (_, least_f)) = analysis.index().scan_extremes().unwrap();
    assert_eq!(tree.most_frequent().map(|(_, f)| f), Some(most_f));
    assert_eq!(tree.least_frequent().map(|(_, f)| f), Some(least_f));
}

#[test]
fn test_shuffled_tree_loads_give_same_traversal() {
    let mut rng = StdRng::seed_from_u64(99);
    let seq = random_sequence(&mut rng, 1_500);
    let analysis = Analysis::load(&seq, &IndexConfig::default()).unwrap();

    let mut entries: Vec<(Triplet, usize)> = analysis
    .index()
    .entries()
    .map(|e| (e.triplet(), e.frequency()))
    .collect();
    entries.shuffle(&mut rng);

    let mut reloaded = FrequencyTree::new();
    for (t, f) in entries {
        reloaded.insert(t, f);
    }
    assert_eq!(reloaded.in_order(), analysis.tree().in_order());
}
