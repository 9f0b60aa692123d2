use std::sync::mpsc;
use std::thread;

use log::debug;

use super::probability;
use super::vocabulary::{BOUNDARY_INDEX, Vocabulary};

/// Square table of bigram counts.
///
/// Cell `[row][col]` holds how many times the character at index `col`
/// immediately follows the character at index `row`. Every word is wrapped
/// with the boundary symbol, so row 0 counts how words start and column 0
/// counts how they end.
///
/// # Responsibilities
/// - Accumulate transitions word by word
/// - Merge partial tables (parallel counting)
/// - Expose rows as probability distributions
///
/// # Invariants
/// - `counts.len() == size * size`, stored row-major
/// - `size` equals the size of the vocabulary used to count
#[derive(Clone, Debug, PartialEq)]
pub struct BigramTable {
	/// Number of rows (and columns), boundary included.
	size: usize,
	/// Row-major counts.
	counts: Vec<u32>,
}

impl BigramTable {
	/// Creates a zeroed `size × size` table.
	pub fn new(size: usize) -> Self {
		Self { size, counts: vec![0; size * size] }
	}

	/// Counts every bigram of `words`, one word after the other.
	///
	/// # Errors
	/// Returns an error if a word holds a character unknown to `vocab`.
	pub fn count<S: AsRef<str>>(words: &[S], vocab: &Vocabulary) -> Result<Self, String> {
		let mut table = Self::new(vocab.size());
		for word in words {
			table.add_word(word.as_ref(), vocab)?;
		}
		Ok(table)
	}

	/// Same result as [`BigramTable::count`], computed on several threads.
	///
	/// # Behavior
	/// - Splits the words into chunks (based on CPU cores * factor).
	/// - Spawns threads to count each chunk into a partial table.
	/// - Merges all partial tables sequentially.
	/// - Fails if a thread died before sending its partial table.
	///
	/// # Notes
	/// - Uses MPSC channels to collect partial results from threads.
	/// - `expect()` on send is safe, the receiver lives until every sender is dropped.
	pub fn count_parallel(words: &[String], vocab: &Vocabulary) -> Result<Self, String> {
		if words.is_empty() {
			return Ok(Self::new(vocab.size()));
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = words.len().div_ceil(chunks);
		debug!("Counting {} words in chunks of {} ({} cpus)", words.len(), chunk_size, cpus);

		let (tx, rx) = mpsc::channel();
		let mut spawned = 0;
		for chunk in words.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<String> = chunk.to_vec();
			let vocab = vocab.clone();

			thread::spawn(move || {
				let partial_table = Self::count(&chunk, &vocab);
				tx.send(partial_table).expect("Failed to send from thread");
			});
			spawned += 1;
		}
		drop(tx);

		Self::merge_partials(vocab.size(), rx.iter(), spawned)
	}

	/// Merges `expected` partial tables of `size` rows into a new one.
	///
	/// # Errors
	/// Returns the first partial error, or an error if fewer or more than
	/// `expected` partial tables were received.
	fn merge_partials<I>(size: usize, partials: I, expected: usize) -> Result<Self, String>
	where
		I: IntoIterator<Item = Result<Self, String>>,
	{
		let mut final_table = Self::new(size);
		let mut received = 0;
		for partial_table in partials {
			final_table.merge(&partial_table?)?;
			received += 1;
		}

		if received != expected {
			return Err(format!("Received {} partial tables out of {}", received, expected));
		}
		Ok(final_table)
	}

	/// Adds the bigrams of a single word.
	///
	/// The word is read as `[boundary, c0, .., ck, boundary]` and every
	/// consecutive pair is incremented. An empty word counts once as
	/// boundary → boundary.
	///
	/// # Errors
	/// Returns an error if a character is unknown to `vocab`. The table is
	/// left untouched in that case.
	pub fn add_word(&mut self, word: &str, vocab: &Vocabulary) -> Result<(), String> {
		if vocab.size() != self.size {
			return Err("Vocabulary size mismatch".to_owned());
		}

		let mut indices = Vec::with_capacity(word.len() + 2);
		indices.push(BOUNDARY_INDEX);
		for c in word.chars() {
			let index = vocab
				.index_of(c)
				.ok_or_else(|| format!("Character {:?} is not in the vocabulary", c))?;
			indices.push(index);
		}
		indices.push(BOUNDARY_INDEX);

		for pair in indices.windows(2) {
			self.counts[pair[0] * self.size + pair[1]] += 1;
		}
		Ok(())
	}

	/// Merges another table into this one by summing every cell.
	///
	/// # Errors
	/// Returns an error if the table sizes do not match.
	pub fn merge(&mut self, other: &Self) -> Result<(), String> {
		if self.size != other.size {
			return Err("Table size mismatch".to_owned());
		}

		for (count, other_count) in self.counts.iter_mut().zip(&other.counts) {
			*count += *other_count;
		}

		Ok(())
	}

	/// Number of rows (and columns).
	pub fn size(&self) -> usize {
		self.size
	}

	/// Count of the bigram `(row, col)`, `None` when out of range.
	pub fn get(&self, row: usize, col: usize) -> Option<u32> {
		if row >= self.size || col >= self.size {
			return None;
		}
		Some(self.counts[row * self.size + col])
	}

	/// Every count following the character at index `row`.
	pub fn row(&self, row: usize) -> Option<&[u32]> {
		if row >= self.size {
			return None;
		}
		Some(&self.counts[row * self.size..(row + 1) * self.size])
	}

	/// Sum of every cell.
	pub fn total(&self) -> u64 {
		self.counts.iter().map(|count| *count as u64).sum()
	}

	/// Highest count of the table (0 for an empty one).
	pub fn max(&self) -> u32 {
		self.counts.iter().copied().max().unwrap_or(0)
	}

	/// Lowest count of the table (0 for an empty one).
	pub fn min(&self) -> u32 {
		self.counts.iter().copied().min().unwrap_or(0)
	}

	/// Distribution of the character following the one at index `row`.
	///
	/// # Errors
	/// Returns an error if `row` is out of range or if the row is empty.
	pub fn row_probabilities(&self, row: usize) -> Result<Vec<f32>, String> {
		let counts = self.row(row).ok_or_else(|| format!("Row {} out of range", row))?;
		probability::normalize(counts)
	}

	/// Distribution of the first character of a word (row 0).
	///
	/// # Errors
	/// Returns an error if no word was counted.
	pub fn start_probabilities(&self) -> Result<Vec<f32>, String> {
		self.row_probabilities(BOUNDARY_INDEX)
	}
}
