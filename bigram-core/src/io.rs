use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::io;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`; a lone `\r` is not a line break and stays in the line
/// - Keeps the line order, empty lines included
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/names.txt` + `"svg"` → `data/names.svg`
pub fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn read_file_strips_line_terminators() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "emma\r\nolivia\nava\n").unwrap();

		let lines = read_file(file.path()).unwrap();
		assert_eq!(lines, vec!["emma", "olivia", "ava"]);
	}

	#[test]
	fn read_file_keeps_empty_lines() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "a\n\nb").unwrap();

		assert_eq!(read_file(file.path()).unwrap(), vec!["a", "", "b"]);
	}

	#[test]
	fn read_file_lone_carriage_return_is_kept() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "a\rb\nc").unwrap();

		assert_eq!(read_file(file.path()).unwrap(), vec!["a\rb", "c"]);
	}

	#[test]
	fn read_file_missing_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_file(dir.path().join("missing.txt")).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}

	#[test]
	fn build_output_path_swaps_extension() {
		let output = build_output_path("data/names.txt", "svg").unwrap();
		assert_eq!(output, PathBuf::from("data/names.svg"));
	}

	#[test]
	fn build_output_path_without_filename() {
		assert!(build_output_path("..", "svg").is_err());
	}
}
