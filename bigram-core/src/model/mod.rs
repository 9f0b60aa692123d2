//! Top-level module for the bigram statistics.
//!
//! This module provides:
//! - The character vocabulary (`Vocabulary`)
//! - The bigram count table (`BigramTable`)
//! - Row normalization into probabilities (`probability`)
//! - The annotated heatmap renderer (`heatmap`, `HeatmapConfig`)
//! - A high-level entry point over a corpus file (`BigramStats`)

/// High-level interface: load a corpus, count it, render it.
pub mod bigram_stats;

/// Square table of bigram counts, with sequential and parallel counting.
pub mod bigram_table;

/// SVG heatmap of a bigram table, one annotated cell per bigram.
pub mod heatmap;

/// Rendering parameters of the heatmap.
pub mod heatmap_config;

/// Normalization of a count row into a probability distribution.
pub mod probability;

/// Bijective mapping between corpus characters and table indices.
///
/// Index 0 is reserved for the word boundary.
pub mod vocabulary;
