use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use toml::{Table, Value};

use crate::lib::util::error::InitError;

pub const MANIFEST_FILE: &str = "pyproject.toml";

/// The `[tool.<name>]` settings pointing the orchestration runtime at a
/// project-local home.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
	pub home: String,
	pub profiles_path: String,
}

impl ToolSettings {
	pub fn for_tool(tool: &str) -> Self {
		let home = format!("./.{}", tool);
		ToolSettings {
			profiles_path: format!("{}/profiles.toml", home),
			home,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Manifest {
	document: Table,
}

impl FromStr for Manifest {
	type Err = toml::de::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Manifest {
			document: Table::from_str(s)?,
		})
	}
}

impl Manifest {
	pub fn read(path: &Path) -> Result<Self, InitError> {
		let text = fs::read_to_string(path).map_err(|err| failed(path, err))?;
		Manifest::from_str(&text).map_err(|err| failed(path, err))
	}

	pub fn write(
		&self,
		path: &Path,
	) -> Result<(), InitError> {
		let text = toml::to_string(&self.document).map_err(|err| failed(path, err))?;
		fs::write(path, text).map_err(|err| failed(path, err))
	}

	#[cfg(test)]
	pub fn document(&self) -> &Table {
		&self.document
	}

	/// Returns the manifest with `tool.<tool>` replaced by `settings`. Other
	/// tables under `tool` are kept. A non-table `tool` key is replaced.
	pub fn with_tool_settings(
		self,
		tool: &str,
		settings: &ToolSettings,
	) -> Result<Self, toml::ser::Error> {
		let mut document = self.document;
		let mut tools = match document.remove("tool") {
			Some(Value::Table(tools)) => tools,
			_ => Table::new(),
		};
		tools.insert(tool.to_string(), Value::try_from(settings)?);
		document.insert("tool".to_string(), Value::Table(tools));

		Ok(Manifest { document })
	}

	#[cfg(test)]
	pub fn tool_settings(
		&self,
		tool: &str,
	) -> Option<ToolSettings> {
		self.document
			.get("tool")?
			.get(tool)?
			.clone()
			.try_into()
			.ok()
	}
}

/// Reads the manifest at `path`, points `tool.<tool>` at the project-local
/// home and writes it back.
pub fn patch_manifest(
	path: &Path,
	tool: &str,
) -> Result<ToolSettings, InitError> {
	let settings = ToolSettings::for_tool(tool);
	Manifest::read(path)?
		.with_tool_settings(tool, &settings)
		.map_err(|err| failed(path, err))?
		.write(path)?;
	tracing::debug!("set [tool.{}] in {}", tool, path.display());

	Ok(settings)
}

fn failed(
	path: &Path,
	reason: impl ToString,
) -> InitError {
	InitError::ManifestWriteFailed {
		path: PathBuf::from(path),
		reason: reason.to_string(),
	}
}
