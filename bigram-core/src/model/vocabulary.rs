use std::collections::{BTreeSet, HashMap};

/// Sentinel marking the start and the end of every word.
pub const BOUNDARY: char = '.';

/// Index reserved for [`BOUNDARY`].
pub const BOUNDARY_INDEX: usize = 0;

/// Bijective mapping between the characters of a corpus and table indices.
///
/// Index 0 is always the boundary symbol. The corpus characters follow in
/// code point order, starting at 1.
///
/// # Invariants
/// - `itos[stoi[c]] == c` for every known character
/// - `stoi[itos[i]] == i` for every index
/// - Built once from the full corpus, never mutated afterwards
#[derive(Clone, Debug, PartialEq)]
pub struct Vocabulary {
	/// Index → character. `itos[0]` is the boundary.
	itos: Vec<char>,
	/// Character → index.
	stoi: HashMap<char, usize>,
}

impl Vocabulary {
	/// Builds the vocabulary from every character found in `words`.
	///
	/// # Notes
	/// - Order of `words` does not matter, indices follow code point order.
	/// - A boundary character found inside a word is folded into index 0,
	///   it never gets an index of its own.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
		let alphabet: BTreeSet<char> = words
			.iter()
			.flat_map(|word| word.as_ref().chars())
			.filter(|c| *c != BOUNDARY)
			.collect();

		let mut itos = Vec::with_capacity(alphabet.len() + 1);
		itos.push(BOUNDARY);
		itos.extend(alphabet);

		let stoi = itos.iter().enumerate().map(|(i, c)| (*c, i)).collect();

		Self { itos, stoi }
	}

	/// Number of indices, boundary included (N + 1).
	pub fn size(&self) -> usize {
		self.itos.len()
	}

	/// Returns the index of `c`, or `None` if it never appeared in the corpus.
	pub fn index_of(&self, c: char) -> Option<usize> {
		self.stoi.get(&c).copied()
	}

	/// Returns the character stored at `index`.
	pub fn char_at(&self, index: usize) -> Option<char> {
		self.itos.get(index).copied()
	}

	/// All characters in index order, boundary first.
	pub fn chars(&self) -> &[char] {
		&self.itos
	}

	/// Two-character label of the bigram `(row, col)`, e.g. `".e"` or `"em"`.
	pub fn label(&self, row: usize, col: usize) -> Option<String> {
		Some([self.char_at(row)?, self.char_at(col)?].iter().collect())
	}
}
