use std::path::{Path, PathBuf};

use livefind::{ScanOptions, SkipSet, default_skip_fragments, mounted_volumes};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::util::absolutize;

/// `[search]` options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) roots: Option<Vec<PathBuf>>,
	pub(super) all_volumes: Option<bool>,
	pub(super) skip: Option<Vec<String>>,
	pub(super) default_skips: Option<bool>,
	pub(super) follow_symlinks: Option<bool>,
	pub(super) max_depth: Option<usize>,
	pub(super) same_file_system: Option<bool>,
	pub(super) parallel_roots: Option<bool>,
	pub(super) query: Option<String>,
}

pub(super) struct ResolvedSearch {
	pub(super) roots: Vec<PathBuf>,
	pub(super) all_volumes: bool,
	pub(super) skip: SkipSet,
	pub(super) options: ScanOptions,
	pub(super) query: String,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if !cli.roots.is_empty() {
			self.roots = Some(cli.roots.clone());
			self.all_volumes = Some(false);
		}
		if cli.all_volumes {
			self.all_volumes = Some(true);
		}
		if let Some(value) = &cli.skip {
			self.skip = Some(value.clone());
		}
		if cli.no_default_skips {
			self.default_skips = Some(false);
		}
		if let Some(value) = cli.follow_symlinks {
			self.follow_symlinks = Some(value);
		}
		if let Some(value) = cli.max_depth {
			self.max_depth = Some(value);
		}
		if let Some(value) = cli.same_file_system {
			self.same_file_system = Some(value);
		}
		if let Some(value) = cli.parallel_roots {
			self.parallel_roots = Some(value);
		}
		if let Some(value) = cli.query.clone() {
			self.query = Some(value);
		}
	}

	pub(super) fn resolve(self, cwd: &Path) -> ResolvedSearch {
		let all_volumes = self.all_volumes.unwrap_or(false);

		let roots = if all_volumes {
			mounted_volumes()
				.into_iter()
				.map(|volume| volume.root)
				.collect()
		} else {
			let roots: Vec<PathBuf> = self
				.roots
				.unwrap_or_default()
				.into_iter()
				.map(|root| absolutize(root, cwd))
				.collect();
			if roots.is_empty() {
				vec![cwd.to_path_buf()]
			} else {
				roots
			}
		};

		let mut skip = if self.default_skips.unwrap_or(true) {
			default_skip_fragments()
		} else {
			Vec::new()
		};
		skip.extend(self.skip.unwrap_or_default());

		let mut options = ScanOptions {
			follow_symlinks: self.follow_symlinks.unwrap_or(false),
			max_depth: self.max_depth,
			same_file_system: self.same_file_system.unwrap_or(false),
			parallel_roots: self.parallel_roots.unwrap_or(false),
		};
		if all_volumes {
			options = options.for_volumes();
		}

		ResolvedSearch {
			roots,
			all_volumes,
			skip: SkipSet::new(skip),
			options,
			query: self.query.unwrap_or_default(),
		}
	}
}
