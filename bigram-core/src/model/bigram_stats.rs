use std::error::Error;
use std::path::Path;

use log::info;

use crate::io::read_file;
use super::bigram_table::BigramTable;
use super::heatmap;
use super::heatmap_config::HeatmapConfig;
use super::vocabulary::Vocabulary;

/// Bigram statistics of a whole corpus.
///
/// Bundles the vocabulary built from the corpus with the table counted
/// against it, so both always agree on indices.
///
/// # Invariants
/// - `table.size() == vocab.size()`
/// - Neither is mutated after construction
#[derive(Clone, Debug)]
pub struct BigramStats {
	vocab: Vocabulary,
	table: BigramTable,
	/// Number of words counted.
	words: usize,
}

impl BigramStats {
	/// Reads `filepath` (one word per line) and counts its bigrams.
	///
	/// - Builds the vocabulary from the full corpus first.
	/// - Counts on several threads (see [`BigramTable::count_parallel`]).
	///
	/// # Errors
	/// Returns an error if the file does not exist or cannot be read.
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self, Box<dyn Error>> {
		let words = read_file(&filepath)?;
		info!("Loaded {} words from {}", words.len(), filepath.as_ref().display());

		let vocab = Vocabulary::from_words(&words);
		let table = BigramTable::count_parallel(&words, &vocab)?;
		info!("Counted {} bigrams over {} characters", table.total(), vocab.size());

		Ok(Self { vocab, table, words: words.len() })
	}

	/// Counts the bigrams of words already in memory, on the calling thread.
	///
	/// # Errors
	/// Never fails in practice: the vocabulary is built from the same words.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, String> {
		let vocab = Vocabulary::from_words(words);
		let table = BigramTable::count(words, &vocab)?;
		Ok(Self { vocab, table, words: words.len() })
	}

	/// Returns the vocabulary.
	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocab
	}

	/// Returns the count table.
	pub fn table(&self) -> &BigramTable {
		&self.table
	}

	/// Returns the number of words counted.
	pub fn word_count(&self) -> usize {
		self.words
	}

	/// Starting character distribution, paired with each character.
	///
	/// # Errors
	/// Returns an error if the corpus is empty.
	pub fn start_distribution(&self) -> Result<Vec<(char, f32)>, String> {
		let probabilities = self.table.start_probabilities()?;
		Ok(self.vocab.chars().iter().copied().zip(probabilities).collect())
	}

	/// Renders the heatmap into `path` (SVG).
	///
	/// # Errors
	/// Returns an error if the file cannot be written.
	pub fn render<P: AsRef<Path>>(&self, path: P, config: &HeatmapConfig) -> Result<(), Box<dyn Error>> {
		heatmap::render_to_file(&self.table, &self.vocab, path, config)
	}
}
