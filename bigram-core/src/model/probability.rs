/// Normalizes a row of counts into a probability distribution.
///
/// Each count is converted to `f32` and divided by the row sum, so the
/// result sums to 1.0 (up to rounding).
///
/// # Errors
/// Returns an error if the row sums to zero: there is nothing to normalize
/// and dividing would only produce NaN.
pub fn normalize(counts: &[u32]) -> Result<Vec<f32>, String> {
	let sum: f32 = counts.iter().map(|count| *count as f32).sum();
	if sum <= 0.0 {
		return Err("Row sum is zero".to_owned());
	}
	Ok(counts.iter().map(|count| *count as f32 / sum).collect())
}
