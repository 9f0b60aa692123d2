use plotters::style::RGBColor;

/// Rendering parameters of the bigram heatmap.
///
/// # Responsibilities
/// - Track cell geometry (`cell_size`, `font_size`)
/// - Track colours (label colour, low / high end of the colour ramp)
/// - Map a count to its cell colour
///
/// # Invariants
/// - `cell_size` and `font_size` are always strictly positive
#[derive(Clone, Debug)]
pub struct HeatmapConfig {
	/// Width and height of a single cell, in pixels.
	cell_size: u32,

	/// Font size of the bigram label and of the count, as given to plotters.
	/// The SVG backend writes it scaled down (`font-size = size / 1.24`),
	/// so it is not a CSS pixel size.
	font_size: f64,

	/// Colour of both annotations.
	pub label_color: RGBColor,

	/// Colour of the lowest count of the table.
	pub low_color: RGBColor,

	/// Colour of the highest count of the table.
	pub high_color: RGBColor,
}

impl HeatmapConfig {
	/// Largest accepted cell size, in pixels.
	pub const MAX_CELL_SIZE: u32 = 4096;

	/// Returns the default configuration.
	///
	/// - 48px cells, font size 11
	/// - grey annotations
	/// - white to dark blue ramp
	pub fn default() -> Self {
		Self {
			cell_size: 48,
			font_size: 11.0,
			label_color: RGBColor(128, 128, 128),
			low_color: RGBColor(247, 251, 255),
			high_color: RGBColor(8, 48, 107),
		}
	}

	/// Returns the cell size in pixels.
	pub fn cell_size(&self) -> u32 {
		self.cell_size
	}

	/// Returns the plotters font size.
	pub fn font_size(&self) -> f64 {
		self.font_size
	}

	/// Sets the cell size.
	///
	/// # Errors
	/// Returns an error if `cell_size` is 0 or above [`Self::MAX_CELL_SIZE`].
	pub fn set_cell_size(&mut self, cell_size: u32) -> Result<(), String> {
		if cell_size == 0 || cell_size > Self::MAX_CELL_SIZE {
			return Err(format!("Cell size must be between 1 and {}", Self::MAX_CELL_SIZE));
		}
		self.cell_size = cell_size;
		Ok(())
	}

	/// Sets the font size.
	///
	/// # Errors
	/// Returns an error if `font_size` is not a strictly positive number.
	pub fn set_font_size(&mut self, font_size: f64) -> Result<(), String> {
		if !(font_size > 0.0) || !font_size.is_finite() {
			return Err("Font size must be greater than 0".to_owned());
		}
		self.font_size = font_size;
		Ok(())
	}

	/// Side of the square image for a table of `size` rows, in pixels.
	///
	/// # Errors
	/// Returns an error if the side does not fit in drawing coordinates (`i32`).
	pub fn dimension(&self, size: usize) -> Result<u32, String> {
		u32::try_from(size)
			.ok()
			.and_then(|size| size.checked_mul(self.cell_size))
			.filter(|dimension| *dimension <= i32::MAX as u32)
			.ok_or_else(|| format!("Heatmap of {} cells of {}px is too large", size, self.cell_size))
	}

	/// Colour of a cell holding `count`, with `min` / `max` the table bounds.
	///
	/// Linear interpolation between `low_color` and `high_color`.
	/// A flat table (`min == max`) is drawn with `low_color` only.
	pub fn color_for(&self, count: u32, min: u32, max: u32) -> RGBColor {
		if max <= min {
			return self.low_color;
		}
		let t = (count.clamp(min, max) - min) as f64 / (max - min) as f64;
		let lerp = |low: u8, high: u8| (low as f64 + (high as f64 - low as f64) * t).round() as u8;

		RGBColor(
			lerp(self.low_color.0, self.high_color.0),
			lerp(self.low_color.1, self.high_color.1),
			lerp(self.low_color.2, self.high_color.2),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ramp_end_points() {
		let config = HeatmapConfig::default();
		assert_eq!(config.color_for(0, 0, 10), config.low_color);
		assert_eq!(config.color_for(10, 0, 10), config.high_color);
	}

	#[test]
	fn ramp_middle() {
		let mut config = HeatmapConfig::default();
		config.low_color = RGBColor(0, 0, 0);
		config.high_color = RGBColor(200, 100, 50);
		assert_eq!(config.color_for(5, 0, 10), RGBColor(100, 50, 25));
	}

	#[test]
	fn flat_table_uses_low_color() {
		let config = HeatmapConfig::default();
		assert_eq!(config.color_for(3, 3, 3), config.low_color);
	}

	#[test]
	fn dimension_overflow() {
		let mut config = HeatmapConfig::default();
		config.set_cell_size(HeatmapConfig::MAX_CELL_SIZE).unwrap();
		assert_eq!(config.dimension(1000), Ok(4_096_000));
		// fits in u32, not in i32
		assert!(config.dimension(600_000).is_err());
		assert!(config.dimension(1_000_000).is_err());
		assert!(config.dimension(usize::MAX).is_err());
	}

	#[test]
	fn invalid_sizes_are_rejected() {
		let mut config = HeatmapConfig::default();
		assert!(config.set_cell_size(0).is_err());
		assert!(config.set_font_size(0.0).is_err());
		assert!(config.set_font_size(f64::NAN).is_err());
		assert!(config.set_cell_size(u32::MAX / 2).is_err());
		assert!(config.set_cell_size(HeatmapConfig::MAX_CELL_SIZE + 1).is_err());
		assert_eq!(config.cell_size(), 48);

		config.set_cell_size(10).unwrap();
		config.set_font_size(6.5).unwrap();
		assert_eq!(config.dimension(27), Ok(270));
		assert_eq!(config.font_size(), 6.5);
	}
}
