use std::env;
use std::path::{Path, PathBuf};

use crate::lib::data::config::InitConfig;
use crate::lib::data::manifest::{patch_manifest, MANIFEST_FILE};
use crate::lib::runtime::directory::DirectoryContext;
use crate::lib::runtime::package_manager::{InstallMode, PackageManager};
use crate::lib::runtime::system::System;
use crate::lib::ui::format::{Info, Warn};
use crate::lib::ui::UI;
use crate::lib::util::error::InitError;

/// Creates a project, fills it with the template set, installs the
/// orchestration runtime and points its settings at the project.
pub struct Init {
	config: InitConfig,
	ui: UI,
	system: System,
}

impl Init {
	pub fn new(
		config: InitConfig,
		ui: UI,
	) -> Self {
		Init {
			config,
			system: System::new(ui.clone()),
			ui,
		}
	}

	/// Runs every step for a project called `name` below the current
	/// directory and returns the project path. The working directory is the
	/// same before and after, whatever the outcome. Nothing is rolled back.
	pub fn run(
		&self,
		name: &str,
	) -> Result<PathBuf, InitError> {
		let manager =
			PackageManager::locate(&self.config.package_manager, self.system.clone())?;

		tracing::info!("creating project {}", name);
		manager.init_project(name)?;

		let parent = env::current_dir().map_err(|source| InitError::DirectoryAccess {
			path: PathBuf::from("."),
			source,
		})?;
		let context = DirectoryContext::enter(parent.join(name))?;
		let project_directory = dunce::canonicalize(context.target())
			.unwrap_or_else(|_| context.target().to_path_buf());

		self.populate(&project_directory, &manager)?;

		Ok(project_directory)
	}

	fn populate(
		&self,
		project_directory: &Path,
		manager: &PackageManager,
	) -> Result<(), InitError> {
		let written = self.config.template.copy_into(project_directory)?;
		self.ui.println(
			format!("Copied {} template files", written.len()),
			Info::default(),
		);

		let dependency = &self.config.dependency;
		let spinner = self.ui.create_spinner(format!("Installing {}...", dependency));
		let installed = manager.add_dependency(dependency, &self.config.install_strategy);
		spinner.finish_and_clear();

		if installed? != InstallMode::Primary {
			self.ui.println(
				format!("Installed {} from the local cache", dependency),
				Warn::default(),
			);
		}

		patch_manifest(Path::new(MANIFEST_FILE), &self.config.tool_name)?;
		Ok(())
	}
}
