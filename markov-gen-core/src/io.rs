use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a whole text file into memory.
///
/// - The content is returned untouched (no line splitting, no trimming)
/// - Fails on missing files and invalid UTF-8
pub(crate) fn read_training_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::env;
	use std::fs;

	#[test]
	fn test_read_training_text() {
		let path = env::temp_dir().join(format!("markov-gen-io-{}.txt", std::process::id()));
		fs::write(&path, "  one two\nthree  ").unwrap();
		let text = read_training_text(&path).unwrap();
		fs::remove_file(&path).unwrap();
		assert_eq!(text, "  one two\nthree  ");
	}

	#[test]
	fn test_read_missing_file() {
		let err = read_training_text("./missing/training.txt").unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}
}
