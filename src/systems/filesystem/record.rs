use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Label used for files without an extension.
pub const NO_EXTENSION: &str = "FILE";

/// A file whose name matched the active query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
	/// Base name of the file.
	pub name: String,
	/// Path as enumerated below the scanned root.
	pub full_path: PathBuf,
	/// Uppercased extension, or [`NO_EXTENSION`].
	pub extension: String,
	pub size_bytes: u64,
	pub modified: SystemTime,
}

impl MatchRecord {
	/// Stat `path` and build a record for it.
	///
	/// Returns `None` when the metadata can no longer be read, which happens
	/// when the file disappears or gets locked after it was enumerated, and
	/// when `path` is a link that resolves to a directory.
	pub(crate) fn stat(name: String, path: &Path) -> Option<Self> {
		let metadata = fs::metadata(path).ok()?;
		if metadata.is_dir() {
			return None;
		}
		let modified = metadata.modified().ok()?;
		Some(Self {
			extension: extension_label(&name),
			name,
			full_path: path.to_path_buf(),
			size_bytes: metadata.len(),
			modified,
		})
	}
}

/// Derive the display extension for a base name.
///
/// Leading dots belong to the stem, so `.bashrc` has no extension, and a
/// trailing dot leaves an empty suffix which also counts as none.
pub fn extension_label(name: &str) -> String {
	let stem_start = name.len() - name.trim_start_matches('.').len();
	match name[stem_start..].rsplit_once('.') {
		Some((_, ext)) if !ext.is_empty() => ext.to_uppercase(),
		_ => NO_EXTENSION.to_string(),
	}
}
