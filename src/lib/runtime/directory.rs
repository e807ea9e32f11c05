use std::env;
use std::path::{Path, PathBuf};

use crate::lib::util::error::InitError;

/// Holds the process in `target` until dropped, then returns to `previous`.
#[must_use = "the previous working directory is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct DirectoryContext {
	previous: PathBuf,
	target: PathBuf,
}

impl DirectoryContext {
	pub fn enter<P: AsRef<Path>>(target: P) -> Result<Self, InitError> {
		let target = target.as_ref().to_path_buf();
		let previous = env::current_dir().map_err(|source| {
			InitError::DirectoryAccess {
				path: PathBuf::from("."),
				source,
			}
		})?;

		env::set_current_dir(&target).map_err(|source| {
			InitError::DirectoryAccess {
				path: target.clone(),
				source,
			}
		})?;
		tracing::debug!(
			"entered {} (from {})",
			target.display(),
			previous.display()
		);

		Ok(DirectoryContext { previous, target })
	}

	#[cfg(test)]
	pub fn previous(&self) -> &Path {
		&self.previous
	}

	pub fn target(&self) -> &Path {
		&self.target
	}
}

impl Drop for DirectoryContext {
	fn drop(&mut self) {
		if let Err(err) = env::set_current_dir(&self.previous) {
			tracing::warn!(
				"could not return to {}: {}",
				self.previous.display(),
				err
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lib::util::cwd_lock;
	use std::{fs, panic};
	use tempfile::TempDir;

	#[test]
	fn restores_previous_directory() -> anyhow::Result<()> {
		let _lock = cwd_lock();
		let temp = TempDir::new()?;
		let before = env::current_dir()?;

		{
			let context = DirectoryContext::enter(temp.path())?;
			assert_eq!(context.previous(), before.as_path());
			assert_eq!(
				dunce::canonicalize(env::current_dir()?)?,
				dunce::canonicalize(temp.path())?
			);
		}

		assert_eq!(env::current_dir()?, before);
		Ok(())
	}

	#[test]
	fn restores_when_wrapped_work_fails() -> anyhow::Result<()> {
		let _lock = cwd_lock();
		let temp = TempDir::new()?;
		let before = env::current_dir()?;

		let result: anyhow::Result<()> = (|| {
			let _context = DirectoryContext::enter(temp.path())?;
			fs::read_to_string("does-not-exist.toml")?;
			Ok(())
		})();

		assert!(result.is_err());
		assert_eq!(env::current_dir()?, before);
		Ok(())
	}

	#[test]
	fn restores_on_panic() -> anyhow::Result<()> {
		let _lock = cwd_lock();
		let temp = TempDir::new()?;
		let before = env::current_dir()?;
		let target = temp.path().to_path_buf();

		let result = panic::catch_unwind(move || {
			let _context = DirectoryContext::enter(&target);
			panic!("boom");
		});

		assert!(result.is_err());
		assert_eq!(env::current_dir()?, before);
		Ok(())
	}

	#[test]
	fn missing_target_leaves_directory_alone() -> anyhow::Result<()> {
		let _lock = cwd_lock();
		let temp = TempDir::new()?;
		let before = env::current_dir()?;
		let missing = temp.path().join("nope");

		match DirectoryContext::enter(&missing) {
			Err(InitError::DirectoryAccess { path, .. }) => assert_eq!(path, missing),
			other => panic!("expected DirectoryAccess, got {:?}", other),
		}

		assert_eq!(env::current_dir()?, before);
		Ok(())
	}
}
