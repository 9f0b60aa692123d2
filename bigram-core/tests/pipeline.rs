use std::io::Write;

use bigram_core::io::{build_output_path, read_file};
use bigram_core::model::bigram_stats::BigramStats;
use bigram_core::model::bigram_table::BigramTable;
use bigram_core::model::heatmap_config::HeatmapConfig;
use bigram_core::model::vocabulary::{BOUNDARY, BOUNDARY_INDEX, Vocabulary};

const NAMES: &str = "emma\nolivia\nava\nisabella\nsophia\ncharlotte\nmia\namelia\nharper\nevelyn\n";

fn corpus_file() -> tempfile::NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
	file.write_all(NAMES.as_bytes()).unwrap();
	file
}

#[test]
fn load_count_render_and_normalize() {
	let file = corpus_file();
	let words = read_file(file.path()).unwrap();
	assert_eq!(words.len(), 10);

	let stats = BigramStats::new(file.path()).unwrap();
	let table = stats.table();
	let vocab = stats.vocabulary();

	// full alphabet of the sample plus the boundary
	let distinct: std::collections::BTreeSet<char> = NAMES.chars().filter(|c| *c != '\n').collect();
	assert_eq!(vocab.size(), distinct.len() + 1);
	assert_eq!(vocab.char_at(BOUNDARY_INDEX), Some(BOUNDARY));

	let expected_total: u64 = words.iter().map(|w| w.chars().count() as u64 + 1).sum();
	assert_eq!(table.total(), expected_total);

	// every word starts once and ends once
	let starts: u32 = table.row(BOUNDARY_INDEX).unwrap().iter().sum();
	let ends: u32 = (0..table.size()).map(|row| table.get(row, BOUNDARY_INDEX).unwrap()).sum();
	assert_eq!(starts, 10);
	assert_eq!(ends, 10);

	let e = vocab.index_of('e').unwrap();
	assert_eq!(table.get(BOUNDARY_INDEX, e), Some(2));

	let probabilities = table.start_probabilities().unwrap();
	let sum: f32 = probabilities.iter().sum();
	assert!((sum - 1.0).abs() < 1e-6);
	assert!((probabilities[e] - 0.2).abs() < 1e-6);

	let output = build_output_path(file.path(), "svg").unwrap();
	stats.render(&output, &HeatmapConfig::default()).unwrap();
	let svg = std::fs::read_to_string(&output).unwrap();
	assert_eq!(svg.matches("</text>").count(), 2 * table.size() * table.size());
	std::fs::remove_file(output).unwrap();
}

#[test]
fn parallel_and_sequential_counts_agree_on_a_file() {
	let file = corpus_file();
	let words = read_file(file.path()).unwrap();
	let vocab = Vocabulary::from_words(&words);

	let sequential = BigramTable::count(&words, &vocab).unwrap();
	let stats = BigramStats::new(file.path()).unwrap();
	assert_eq!(&sequential, stats.table());
}

#[test]
fn missing_corpus_is_fatal() {
	let dir = tempfile::tempdir().unwrap();
	let err = BigramStats::new(dir.path().join("names.txt")).unwrap_err();
	assert!(err.downcast_ref::<std::io::Error>().is_some());
}
