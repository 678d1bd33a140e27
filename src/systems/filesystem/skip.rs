use std::path::Path;

/// Case-insensitive path fragments that prune whole subtrees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
	fragments: Vec<String>,
}

impl SkipSet {
	/// Build a skip set, dropping blank entries and duplicates.
	pub fn new<I, S>(fragments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut cleaned: Vec<String> = Vec::new();
		for fragment in fragments {
			let fragment = fragment.as_ref().trim().to_lowercase();
			if fragment.is_empty() || cleaned.contains(&fragment) {
				continue;
			}
			cleaned.push(fragment);
		}
		Self { fragments: cleaned }
	}

	pub fn is_empty(&self) -> bool {
		self.fragments.is_empty()
	}

	pub fn fragments(&self) -> &[String] {
		&self.fragments
	}

	/// Whether the directory at `path` should be pruned.
	///
	/// The lowercased path is tested as enumerated, so a fragment ending in a
	/// separator prunes what lies below a directory but not the directory.
	pub fn prunes(&self, path: &Path) -> bool {
		if self.fragments.is_empty() {
			return false;
		}

		let haystack = path.to_string_lossy().to_lowercase();
		self.fragments
			.iter()
			.any(|fragment| haystack.contains(fragment.as_str()))
	}
}

/// OS-managed directories excluded from a search unless disabled.
///
/// On unix the entries end in a separator: files directly inside `/proc`
/// and `/sys` are still inspected, every directory below them is pruned,
/// and `/procedures` is left alone.
pub fn default_skip_fragments() -> Vec<String> {
	if cfg!(windows) {
		["\\Windows", "\\Program Files", "\\ProgramData", "\\AppData"]
			.iter()
			.map(|fragment| fragment.to_string())
			.collect()
	} else {
		vec!["/proc/".to_string(), "/sys/".to_string()]
	}
}

#[cfg(test)]
mod tests {
	use std::path::{MAIN_SEPARATOR, PathBuf};

	use super::*;

	#[test]
	fn fragments_are_normalized() {
		let skip = SkipSet::new([" /Data/Skip ", "", "/data/skip", "   "]);
		assert_eq!(skip.fragments(), ["/data/skip"]);
	}

	fn absolute(parts: &[&str]) -> PathBuf {
		let mut joined = String::new();
		for part in parts {
			joined.push(MAIN_SEPARATOR);
			joined.push_str(part);
		}
		PathBuf::from(joined)
	}

	#[test]
	fn matching_is_case_insensitive_substring() {
		let root = absolute(&["Data", "SKIP"]);
		let nested = root.join("inner");
		let sibling = absolute(&["data", "skipped-not"]);
		let other = absolute(&["data", "keep"]);

		let skip = SkipSet::new([root.to_string_lossy().to_lowercase()]);

		assert!(skip.prunes(&root));
		assert!(skip.prunes(&nested));
		// Plain substring semantics: a longer sibling name also matches.
		assert!(skip.prunes(&sibling));
		assert!(!skip.prunes(&other));
	}

	#[test]
	fn separator_terminated_fragment_spares_the_directory_itself() {
		let fragment = format!("{MAIN_SEPARATOR}proc{MAIN_SEPARATOR}");
		let skip = SkipSet::new([fragment]);

		assert!(!skip.prunes(&absolute(&["proc"])));
		assert!(skip.prunes(&absolute(&["proc", "1"])));
		assert!(!skip.prunes(&absolute(&["home", "procedures"])));
	}

	#[test]
	fn empty_set_prunes_nothing() {
		assert!(!SkipSet::default().prunes(Path::new("/anything")));
	}

	#[test]
	fn defaults_are_not_empty() {
		assert!(!SkipSet::new(default_skip_fragments()).is_empty());
	}
}
