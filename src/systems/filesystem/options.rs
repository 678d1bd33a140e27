/// Configuration options for a filesystem scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
	/// Follow symbolic links to directories during traversal.
	pub follow_symlinks: bool,
	/// Maximum directory traversal depth below each root.
	pub max_depth: Option<usize>,
	/// Stay on the filesystem each root lives on.
	pub same_file_system: bool,
	/// Scan every root on its own thread instead of one after another.
	pub parallel_roots: bool,
}

impl ScanOptions {
	/// Options suited to scanning every mounted volume, where nested mount
	/// points are roots of their own and must not be walked twice.
	#[must_use]
	pub fn for_volumes(mut self) -> Self {
		self.same_file_system = true;
		self
	}
}
