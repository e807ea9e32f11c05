use std::path::PathBuf;
use std::process::Command;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::lib::runtime::env_override::EnvOverride;
use crate::lib::runtime::system::System;
use crate::lib::util::describe_command;
use crate::lib::util::error::InitError;

/// Forces uv to seed pip and friends into the virtual environment it creates.
pub const SEED_ENV_VAR: &str = "UV_VENV_SEED";

/// One way of running `add`, tried in the order given by [`InstallStrategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum InstallMode {
	Primary,
	Offline,
}

impl InstallMode {
	pub fn args(&self) -> &'static [&'static str] {
		match self {
			InstallMode::Primary => &["--no-active"],
			InstallMode::Offline => &["--offline", "--no-cache", "--frozen"],
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallStrategy {
	modes: Vec<InstallMode>,
}

impl InstallStrategy {
	pub fn new(modes: Vec<InstallMode>) -> Self {
		InstallStrategy { modes }
	}

	pub fn offline_only() -> Self {
		InstallStrategy::new(vec![InstallMode::Offline])
	}

	pub fn modes(&self) -> &[InstallMode] {
		&self.modes
	}
}

impl Default for InstallStrategy {
	/// Network install first, then the offline cache.
	fn default() -> Self {
		InstallStrategy::new(InstallMode::iter().collect())
	}
}

#[derive(Clone)]
pub struct PackageManager {
	program: PathBuf,
	system: System,
}

impl PackageManager {
	pub fn new(
		program: PathBuf,
		system: System,
	) -> Self {
		PackageManager { program, system }
	}

	/// Looks `program` up on `PATH`, so later calls work from any directory.
	pub fn locate(
		program: &str,
		system: System,
	) -> Result<Self, InitError> {
		let resolved = which::which(program).map_err(|source| {
			InitError::PackageManagerNotFound {
				program: program.to_string(),
				source,
			}
		})?;
		tracing::debug!("using package manager at {}", resolved.display());

		Ok(PackageManager::new(resolved, system))
	}

	pub fn init_command(
		&self,
		name: &str,
	) -> Command {
		let mut cmd = Command::new(&self.program);
		cmd.arg("init")
			.arg(name)
			.args(["--lib", "--no-workspace", "--quiet", "--no-readme"]);
		cmd
	}

	pub fn add_command(
		&self,
		dependency: &str,
		mode: InstallMode,
	) -> Command {
		let mut cmd = Command::new(&self.program);
		cmd.arg("add").arg(dependency).args(mode.args());
		cmd
	}

	/// Creates a library project called `name` in the current directory.
	pub fn init_project(
		&self,
		name: &str,
	) -> Result<(), InitError> {
		let mut cmd = self.init_command(name);
		let line = describe_command(&cmd);

		let result = EnvOverride::new()
			.set(SEED_ENV_VAR, "True")
			.scope(|| self.system.execute(&mut cmd));

		let reason = match result {
			Ok(status) if status.success() => return Ok(()),
			Ok(status) => format!("exited with {}", status),
			Err(err) => format!("could not be started: {}", err),
		};

		Err(InitError::ScaffoldFailed {
			name: name.to_string(),
			command: line,
			reason,
		})
	}

	/// Adds `dependency` to the project in the current directory, trying each
	/// mode of `strategy` until one succeeds.
	pub fn add_dependency(
		&self,
		dependency: &str,
		strategy: &InstallStrategy,
	) -> Result<InstallMode, InitError> {
		let mut attempts: Vec<String> = Vec::new();

		for mode in strategy.modes() {
			let mut cmd = self.add_command(dependency, *mode);
			match self.system.execute_captured(&mut cmd) {
				Ok(output) if output.status.success() => {
					tracing::debug!("installed {} ({} mode)", dependency, mode);
					return Ok(*mode);
				}
				Ok(output) => {
					tracing::info!(
						"{} install of {} failed with {}",
						mode,
						dependency,
						output.status
					);
				}
				Err(err) => {
					tracing::info!(
						"{} install of {} could not be started: {}",
						mode,
						dependency,
						err
					);
				}
			}
			attempts.push(mode.to_string());
		}

		Err(InitError::DependencyInstallFailed {
			dependency: dependency.to_string(),
			attempts,
		})
	}
}
