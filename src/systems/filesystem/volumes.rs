//! Enumerate the mounted volumes a whole-machine search should cover.

use std::path::PathBuf;

/// A mounted volume and a human readable label for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
	pub root: PathBuf,
	pub label: String,
}

/// List the mounted volumes on this machine.
///
/// Never fails: platforms without a usable mount table fall back to the
/// filesystem root.
pub fn mounted_volumes() -> Vec<Volume> {
	let volumes = platform::list();
	if volumes.is_empty() {
		return vec![fallback_root()];
	}
	volumes
}

fn fallback_root() -> Volume {
	let root = if cfg!(windows) { "C:\\" } else { "/" };
	Volume {
		root: PathBuf::from(root),
		label: "Local Disk".to_string(),
	}
}

#[cfg(windows)]
mod platform {
	use std::path::PathBuf;

	use super::Volume;

	pub(super) fn list() -> Vec<Volume> {
		(b'A'..=b'Z')
			.map(char::from)
			.filter_map(|letter| {
				let root = PathBuf::from(format!("{letter}:\\"));
				root.is_dir().then(|| Volume {
					root,
					label: format!("Local Disk ({letter}:)"),
				})
			})
			.collect()
	}
}

#[cfg(target_os = "linux")]
mod platform {
	use std::fs;
	use std::path::PathBuf;

	use tracing::debug;

	use super::Volume;

	const MOUNTS: &str = "/proc/self/mounts";

	pub(super) fn list() -> Vec<Volume> {
		match fs::read_to_string(MOUNTS) {
			Ok(table) => super::parse_mount_table(&table),
			Err(err) => {
				debug!(error = %err, "mount table unavailable");
				vec![Volume {
					root: PathBuf::from("/"),
					label: "/".to_string(),
				}]
			}
		}
	}
}

#[cfg(all(unix, not(target_os = "linux")))]
mod platform {
	use std::fs;
	use std::path::{Path, PathBuf};

	use super::Volume;

	pub(super) fn list() -> Vec<Volume> {
		let mut volumes = vec![Volume {
			root: PathBuf::from("/"),
			label: "/".to_string(),
		}];

		let Ok(entries) = fs::read_dir(Path::new("/Volumes")) else {
			return volumes;
		};
		for entry in entries.flatten() {
			let path = entry.path();
			// The boot volume shows up here as a link back to `/`.
			if path.canonicalize().is_ok_and(|target| target == Path::new("/")) {
				continue;
			}
			if path.is_dir() {
				volumes.push(Volume {
					label: entry.file_name().to_string_lossy().into_owned(),
					root: path,
				});
			}
		}
		volumes
	}
}

#[cfg(not(any(windows, unix)))]
mod platform {
	use super::Volume;

	pub(super) fn list() -> Vec<Volume> {
		Vec::new()
	}
}

/// Parse a `/proc/mounts` style table into block-backed volumes.
///
/// `/` is always present and first. Pseudo filesystems, whose source is not
/// a device path, are dropped.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_mount_table(table: &str) -> Vec<Volume> {
	let mut volumes = vec![Volume {
		root: PathBuf::from("/"),
		label: "/".to_string(),
	}];

	for line in table.lines() {
		let mut fields = line.split_whitespace();
		let (Some(device), Some(mount_point)) = (fields.next(), fields.next()) else {
			continue;
		};
		if !device.starts_with('/') {
			continue;
		}

		let mount_point = unescape_mount_field(mount_point);
		if let Some(existing) = volumes
			.iter_mut()
			.find(|volume| volume.root.as_os_str() == mount_point.as_str())
		{
			if mount_point == "/" {
				existing.label = format!("{device} (/)");
			}
			continue;
		}

		volumes.push(Volume {
			label: format!("{device} ({mount_point})"),
			root: PathBuf::from(mount_point),
		});
	}

	volumes
}

/// Decode the octal escapes (`\040` for a space) used in mount tables.
fn unescape_mount_field(field: &str) -> String {
	let bytes = field.as_bytes();
	let mut out = Vec::with_capacity(bytes.len());
	let mut index = 0;
	while index < bytes.len() {
		if bytes[index] == b'\\'
			&& let Some(value) = bytes.get(index + 1..index + 4).and_then(octal_byte)
		{
			out.push(value);
			index += 4;
			continue;
		}
		out.push(bytes[index]);
		index += 1;
	}
	String::from_utf8_lossy(&out).into_owned()
}

fn octal_byte(digits: &[u8]) -> Option<u8> {
	digits.iter().try_fold(0u8, |acc, digit| {
		if !(b'0'..=b'7').contains(digit) {
			return None;
		}
		acc.checked_mul(8)?.checked_add(digit - b'0')
	})
}
