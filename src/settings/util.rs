use std::path::{Path, PathBuf};

/// Anchor relative roots at `cwd`.
pub(super) fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
	if path.is_relative() {
		cwd.join(path)
	} else {
		path
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn relative_roots_are_anchored() {
		let cwd = std::env::temp_dir();
		assert_eq!(absolutize(PathBuf::from("data"), &cwd), cwd.join("data"));
		assert_eq!(absolutize(cwd.clone(), Path::new("/elsewhere")), cwd);
	}
}
