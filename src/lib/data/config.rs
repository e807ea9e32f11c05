use crate::lib::cli::init_args::InitArgs;
use crate::lib::data::template::TemplateSet;
use crate::lib::runtime::package_manager::InstallStrategy;

pub const DEFAULT_PACKAGE_MANAGER: &str = "uv";
pub const DEFAULT_DEPENDENCY: &str = "prefect";
pub const DEFAULT_TOOL_NAME: &str = "prefect";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitConfig {
	/// Program name or path, resolved against `PATH` before the first call.
	pub package_manager: String,
	pub dependency: String,
	/// Name of the `[tool.<name>]` table written into the manifest.
	pub tool_name: String,
	pub install_strategy: InstallStrategy,
	pub template: TemplateSet,
}

impl Default for InitConfig {
	fn default() -> Self {
		InitConfig {
			package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
			dependency: DEFAULT_DEPENDENCY.to_string(),
			tool_name: DEFAULT_TOOL_NAME.to_string(),
			install_strategy: InstallStrategy::default(),
			template: TemplateSet::default(),
		}
	}
}

impl From<&InitArgs> for InitConfig {
	fn from(args: &InitArgs) -> Self {
		InitConfig {
			package_manager: args.package_manager.clone(),
			install_strategy: match args.offline {
				true => InstallStrategy::offline_only(),
				false => InstallStrategy::default(),
			},
			..InitConfig::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lib::runtime::package_manager::InstallMode;

	fn args(offline: bool) -> InitArgs {
		InitArgs {
			name: "demo".to_string(),
			package_manager: "/usr/local/bin/uv".to_string(),
			offline,
			quiet: false,
		}
	}

	#[test]
	fn defaults_target_prefect_with_uv() {
		let config = InitConfig::default();

		assert_eq!(config.package_manager, "uv");
		assert_eq!(config.dependency, "prefect");
		assert_eq!(config.tool_name, "prefect");
		assert_eq!(
			config.install_strategy.modes(),
			[InstallMode::Primary, InstallMode::Offline]
		);
	}

	#[test]
	fn offline_flag_skips_network_install() {
		let config = InitConfig::from(&args(true));

		assert_eq!(config.package_manager, "/usr/local/bin/uv");
		assert_eq!(config.install_strategy.modes(), [InstallMode::Offline]);
		assert_eq!(config.dependency, DEFAULT_DEPENDENCY);
	}

	#[test]
	fn online_by_default() {
		assert_eq!(
			InitConfig::from(&args(false)).install_strategy,
			InstallStrategy::default()
		);
	}
}
