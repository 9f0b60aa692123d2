use std::error::Error;
use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::bigram_table::BigramTable;
use super::heatmap_config::HeatmapConfig;
use super::vocabulary::Vocabulary;

/// Renders the table as an SVG file.
///
/// Every cell is filled according to its count and annotated with the
/// bigram label (above the centre) and the count (below the centre).
///
/// # Errors
/// - The table and the vocabulary do not have the same size.
/// - The image would be too large (see [`HeatmapConfig::dimension`]).
/// - The file cannot be written.
pub fn render_to_file<P: AsRef<Path>>(
	table: &BigramTable,
	vocab: &Vocabulary,
	path: P,
	config: &HeatmapConfig,
) -> Result<(), Box<dyn Error>> {
	check_sizes(table, vocab)?;

	let dimension = config.dimension(table.size())?;
	let root = SVGBackend::new(path.as_ref(), (dimension, dimension)).into_drawing_area();
	draw(&root, table, vocab, config)?;

	info!("Heatmap ({}x{} cells) written to {}", table.size(), table.size(), path.as_ref().display());
	Ok(())
}

/// Renders the table as an SVG document kept in memory.
///
/// # Errors
/// Same as [`render_to_file`], minus the I/O.
pub fn render_to_string(
	table: &BigramTable,
	vocab: &Vocabulary,
	config: &HeatmapConfig,
) -> Result<String, Box<dyn Error>> {
	check_sizes(table, vocab)?;

	let dimension = config.dimension(table.size())?;
	let mut svg = String::new();
	{
		// The backend borrows `svg` until it is dropped
		let root = SVGBackend::with_string(&mut svg, (dimension, dimension)).into_drawing_area();
		draw(&root, table, vocab, config)?;
	}
	Ok(svg)
}

fn check_sizes(table: &BigramTable, vocab: &Vocabulary) -> Result<(), String> {
	if table.size() != vocab.size() {
		return Err(format!(
			"Table size ({}) does not match vocabulary size ({})",
			table.size(),
			vocab.size()
		));
	}
	Ok(())
}

/// Draws every cell on `area`, row `i` from the top, column `j` from the left.
fn draw<DB: DrawingBackend>(
	area: &DrawingArea<DB, Shift>,
	table: &BigramTable,
	vocab: &Vocabulary,
	config: &HeatmapConfig,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
	area.fill(&WHITE)?;

	let cell = config.cell_size() as i32;
	let (min, max) = (table.min(), table.max());

	let font = ("sans-serif", config.font_size()).into_font();
	let label_style = font
		.color(&config.label_color)
		.pos(Pos::new(HPos::Center, VPos::Bottom));
	let count_style = label_style.pos(Pos::new(HPos::Center, VPos::Top));

	for row in 0..table.size() {
		for col in 0..table.size() {
			let count = table.get(row, col).unwrap_or(0);
			let (x, y) = (col as i32 * cell, row as i32 * cell);

			let color = config.color_for(count, min, max);
			area.draw(&Rectangle::new([(x, y), (x + cell, y + cell)], color.filled()))?;

			let center = (x + cell / 2, y + cell / 2);
			if let Some(label) = vocab.label(row, col) {
				area.draw(&Text::new(label, center, label_style.clone()))?;
			}
			area.draw(&Text::new(count.to_string(), center, count_style.clone()))?;
		}
	}

	area.present()
}
