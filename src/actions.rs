//! File actions a front-end can apply to a reported match.
//!
//! These run directly against the operating system and are independent of
//! any search in progress. A file that was matched and then removed is a
//! benign race: the record still describes what was observed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::info;

/// Failures reported by [`ShellActions`] implementations.
#[derive(Debug, Error)]
pub enum ActionError {
	#[error("failed to {op} {}: {source}", path.display())]
	Io {
		op: &'static str,
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{0} is not supported on this platform")]
	Unsupported(&'static str),

	#[error("invalid file name '{0}'")]
	InvalidName(String),
}

impl ActionError {
	fn io<'a>(op: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> Self + 'a {
		move |source| Self::Io {
			op,
			path: path.to_path_buf(),
			source,
		}
	}
}

/// Operations offered on a matched file.
pub trait ShellActions {
	/// Copy `path` into `dest_dir`, returning the new path.
	fn copy_to(&self, path: &Path, dest_dir: &Path) -> Result<PathBuf, ActionError>;

	/// Move `path` into `dest_dir`, returning the new path.
	fn move_to(&self, path: &Path, dest_dir: &Path) -> Result<PathBuf, ActionError>;

	/// Rename `path` in place. `new_name` must be a bare file name.
	fn rename(&self, path: &Path, new_name: &str) -> Result<PathBuf, ActionError>;

	fn delete(&self, path: &Path) -> Result<(), ActionError>;

	/// Create a link to `path` next to it, returning the link path.
	fn create_link(&self, path: &Path) -> Result<PathBuf, ActionError>;

	fn reveal_in_file_manager(&self, path: &Path) -> Result<(), ActionError>;

	fn open_with_default(&self, path: &Path) -> Result<(), ActionError>;

	fn show_native_properties(&self, path: &Path) -> Result<(), ActionError>;
}

/// [`ShellActions`] backed by `std::fs` and the platform opener.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl ShellActions for SystemShell {
	fn copy_to(&self, path: &Path, dest_dir: &Path) -> Result<PathBuf, ActionError> {
		let target = target_in(path, dest_dir)?;
		fs::copy(path, &target).map_err(ActionError::io("copy", path))?;
		info!(from = %path.display(), to = %target.display(), "copied file");
		Ok(target)
	}

	fn move_to(&self, path: &Path, dest_dir: &Path) -> Result<PathBuf, ActionError> {
		let target = target_in(path, dest_dir)?;
		if fs::rename(path, &target).is_err() {
			// Crossing devices: fall back to copy and remove.
			fs::copy(path, &target).map_err(ActionError::io("move", path))?;
			fs::remove_file(path).map_err(ActionError::io("remove", path))?;
		}
		info!(from = %path.display(), to = %target.display(), "moved file");
		Ok(target)
	}

	fn rename(&self, path: &Path, new_name: &str) -> Result<PathBuf, ActionError> {
		let trimmed = new_name.trim();
		if !is_bare_name(trimmed) {
			return Err(ActionError::InvalidName(new_name.to_string()));
		}
		let target = path.with_file_name(trimmed);
		fs::rename(path, &target).map_err(ActionError::io("rename", path))?;
		info!(from = %path.display(), to = %target.display(), "renamed file");
		Ok(target)
	}

	fn delete(&self, path: &Path) -> Result<(), ActionError> {
		fs::remove_file(path).map_err(ActionError::io("delete", path))?;
		info!(path = %path.display(), "deleted file");
		Ok(())
	}

	fn create_link(&self, path: &Path) -> Result<PathBuf, ActionError> {
		let name = file_name(path)?;
		let link = path.with_file_name(format!("{name} - Shortcut"));
		symlink(path, &link).map_err(ActionError::io("link", &link))?;
		Ok(link)
	}

	fn reveal_in_file_manager(&self, path: &Path) -> Result<(), ActionError> {
		if cfg!(windows) {
			let mut select = std::ffi::OsString::from("/select,");
			select.push(path.as_os_str());
			return spawn(Command::new("explorer").arg(select), path);
		}
		if cfg!(target_os = "macos") {
			return spawn(Command::new("open").arg("-R").arg(path), path);
		}
		let parent = path.parent().unwrap_or(path);
		spawn(Command::new("xdg-open").arg(parent), path)
	}

	fn open_with_default(&self, path: &Path) -> Result<(), ActionError> {
		if cfg!(windows) {
			return spawn(Command::new("cmd").args(["/C", "start", ""]).arg(path), path);
		}
		if cfg!(target_os = "macos") {
			return spawn(Command::new("open").arg(path), path);
		}
		spawn(Command::new("xdg-open").arg(path), path)
	}

	fn show_native_properties(&self, path: &Path) -> Result<(), ActionError> {
		if cfg!(windows) {
			let literal = path.to_string_lossy().replace('\'', "''");
			let script = format!(
				"$f = Get-Item -LiteralPath '{literal}'; \
				 (New-Object -ComObject Shell.Application).Namespace($f.DirectoryName).ParseName($f.Name).InvokeVerb('properties'); \
				 Start-Sleep -Seconds 5"
			);
			return spawn(
				Command::new("powershell").args(["-NoProfile", "-Command", &script]),
				path,
			);
		}
		Err(ActionError::Unsupported("showing file properties"))
	}
}

fn file_name(path: &Path) -> Result<String, ActionError> {
	path.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.ok_or_else(|| ActionError::InvalidName(path.display().to_string()))
}

fn target_in(path: &Path, dest_dir: &Path) -> Result<PathBuf, ActionError> {
	let name = path
		.file_name()
		.ok_or_else(|| ActionError::InvalidName(path.display().to_string()))?;
	Ok(dest_dir.join(name))
}

fn is_bare_name(name: &str) -> bool {
	!name.is_empty()
		&& name != "."
		&& name != ".."
		&& !name.contains(['/', '\\'])
}

fn spawn(command: &mut Command, path: &Path) -> Result<(), ActionError> {
	command
		.spawn()
		.map(drop)
		.map_err(ActionError::io("launch a handler for", path))
}

#[cfg(unix)]
fn symlink(original: &Path, link: &Path) -> io::Result<()> {
	std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink(original: &Path, link: &Path) -> io::Result<()> {
	std::os::windows::fs::symlink_file(original, link)
}

#[cfg(not(any(unix, windows)))]
fn symlink(_original: &Path, _link: &Path) -> io::Result<()> {
	Err(io::Error::new(
		io::ErrorKind::Unsupported,
		"symbolic links are not available",
	))
}
