use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
	#[error("Package manager '{program}' not found!")]
	PackageManagerNotFound {
		program: String,
		#[source]
		source: which::Error,
	},

	#[error("Failed to create project '{name}': `{command}` {reason}")]
	ScaffoldFailed {
		name: String,
		command: String,
		reason: String,
	},

	#[error("Could not enter directory {}!", .path.display())]
	DirectoryAccess {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Failed to copy template files into {}!", .destination.display())]
	TemplateCopyFailed {
		destination: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("Failed to install {dependency}! Tried: {}", .attempts.join(", "))]
	DependencyInstallFailed {
		dependency: String,
		attempts: Vec<String>,
	},

	#[error("Failed to update {}! {reason}", .path.display())]
	ManifestWriteFailed { path: PathBuf, reason: String },
}
