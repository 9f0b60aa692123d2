//! Character bigram statistics over a word list.
//!
//! This crate provides:
//! - A character vocabulary with a reserved word-boundary symbol
//! - A bigram count table (sequential or multithreaded counting)
//! - Row normalization into probability distributions
//! - An annotated SVG heatmap of the table

/// Vocabulary, count table, probabilities and heatmap rendering.
pub mod model;

/// I/O utilities (file loading, path helpers).
pub mod io;
