use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::lib::util::error::InitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateFile {
	/// Path relative to the project root, `/`-separated.
	pub path: &'static str,
	pub contents: &'static str,
}

// Generated by build.rs from every file under templates/default.
const DEFAULT_FILES: &[TemplateFile] = include!(concat!(env!("OUT_DIR"), "/templates.rs"));

/// The starter files written into every new project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateSet {
	files: &'static [TemplateFile],
}

impl Default for TemplateSet {
	fn default() -> Self {
		TemplateSet {
			files: DEFAULT_FILES,
		}
	}
}

impl TemplateSet {
	#[cfg(test)]
	pub fn files(&self) -> &'static [TemplateFile] {
		self.files
	}

	/// Writes every file below `destination`, merging into directories that
	/// already exist and overwriting files. A file standing where a directory
	/// is needed, or the other way round, is an error.
	pub fn copy_into(
		&self,
		destination: &Path,
	) -> Result<Vec<PathBuf>, InitError> {
		self.write_files(destination)
			.map_err(|source| InitError::TemplateCopyFailed {
				destination: destination.to_path_buf(),
				source,
			})
	}

	fn write_files(
		&self,
		destination: &Path,
	) -> io::Result<Vec<PathBuf>> {
		fs::create_dir_all(destination)?;

		let mut written = Vec::with_capacity(self.files.len());
		for file in self.files {
			let target = file
				.path
				.split('/')
				.fold(destination.to_path_buf(), |path, part| path.join(part));

			if let Some(parent) = target.parent() {
				ensure_directory(destination, parent)?;
			}
			if target.is_dir() {
				return Err(io::Error::new(
					io::ErrorKind::AlreadyExists,
					format!("{} is a directory", target.display()),
				));
			}

			fs::write(&target, file.contents)?;
			tracing::debug!("wrote {}", target.display());
			written.push(target);
		}

		Ok(written)
	}
}

/// Creates `dir` and its missing ancestors below `root`, refusing to descend
/// through anything that is not a directory.
fn ensure_directory(
	root: &Path,
	dir: &Path,
) -> io::Result<()> {
	let relative = dir.strip_prefix(root).unwrap_or(dir);
	let mut current = root.to_path_buf();

	for component in relative.components() {
		current.push(component);
		match fs::metadata(&current) {
			Ok(meta) if meta.is_dir() => {}
			Ok(_) => {
				return Err(io::Error::new(
					io::ErrorKind::AlreadyExists,
					format!("{} exists and is not a directory", current.display()),
				))
			}
			Err(err) if err.kind() == io::ErrorKind::NotFound => fs::create_dir(&current)?,
			Err(err) => return Err(err),
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeMap;
	use tempfile::TempDir;
	use walkdir::WalkDir;

	fn relative(
		root: &Path,
		path: &Path,
	) -> anyhow::Result<String> {
		Ok(path
			.strip_prefix(root)?
			.components()
			.map(|component| component.as_os_str().to_string_lossy().into_owned())
			.collect::<Vec<_>>()
			.join("/"))
	}

	fn snapshot(root: &Path) -> anyhow::Result<BTreeMap<String, String>> {
		let mut files = BTreeMap::new();
		for entry in WalkDir::new(root) {
			let entry = entry?;
			if entry.file_type().is_file() {
				files.insert(
					relative(root, entry.path())?,
					fs::read_to_string(entry.path())?,
				);
			}
		}
		Ok(files)
	}

	#[test]
	fn default_set_has_the_hello_world_flow() {
		let paths: Vec<&str> = TemplateSet::default()
			.files()
			.iter()
			.map(|file| file.path)
			.collect();

		assert_eq!(paths, ["src/flows/hello_world.py", "src/tasks/hello.py"]);
		assert!(TemplateSet::default().files()[0].contents.contains("@flow"));
	}

	#[test]
	fn default_set_matches_the_template_tree() -> anyhow::Result<()> {
		let root = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/default"));
		let embedded: BTreeMap<String, String> = TemplateSet::default()
			.files()
			.iter()
			.map(|file| (file.path.to_string(), file.contents.to_string()))
			.collect();

		assert_eq!(snapshot(root)?, embedded);
		Ok(())
	}

	#[test]
	fn copy_into_fresh_directory() -> anyhow::Result<()> {
		let temp = TempDir::new()?;
		let template = TemplateSet::default();
		let written = template.copy_into(temp.path())?;

		assert_eq!(written.len(), template.files().len());
		assert!(temp.path().join("src/flows/hello_world.py").is_file());
		assert!(temp.path().join("src/tasks/hello.py").is_file());
		Ok(())
	}

	#[test]
	fn copy_merges_into_existing_empty_directories() -> anyhow::Result<()> {
		let fresh = TempDir::new()?;
		TemplateSet::default().copy_into(fresh.path())?;

		let existing = TempDir::new()?;
		fs::create_dir_all(existing.path().join("src/flows"))?;
		fs::create_dir_all(existing.path().join("src/tasks"))?;
		TemplateSet::default().copy_into(existing.path())?;

		assert_eq!(snapshot(fresh.path())?, snapshot(existing.path())?);
		Ok(())
	}

	#[test]
	fn copy_keeps_unrelated_files_and_overwrites_templates() -> anyhow::Result<()> {
		let temp = TempDir::new()?;
		fs::create_dir_all(temp.path().join("src/tasks"))?;
		fs::write(temp.path().join("src/__init__.py"), "")?;
		fs::write(temp.path().join("src/tasks/hello.py"), "stale")?;

		TemplateSet::default().copy_into(temp.path())?;

		assert!(temp.path().join("src/__init__.py").is_file());
		assert_ne!(fs::read_to_string(temp.path().join("src/tasks/hello.py"))?, "stale");
		Ok(())
	}

	#[test]
	fn file_in_place_of_directory_fails() -> anyhow::Result<()> {
		let temp = TempDir::new()?;
		fs::write(temp.path().join("src"), "not a directory")?;

		let result = TemplateSet::default().copy_into(temp.path());

		assert!(matches!(result, Err(InitError::TemplateCopyFailed { .. })));
		Ok(())
	}

	#[test]
	fn directory_in_place_of_file_fails() -> anyhow::Result<()> {
		let temp = TempDir::new()?;
		fs::create_dir_all(temp.path().join("src/flows/hello_world.py"))?;

		let result = TemplateSet::default().copy_into(temp.path());

		assert!(matches!(result, Err(InitError::TemplateCopyFailed { .. })));
		Ok(())
	}
}
