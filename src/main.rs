use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::lib::cli::sub_commands::SubCommands;
use crate::lib::cli::Cli;
use crate::lib::data::config::InitConfig;
use crate::lib::init::Init;
use crate::lib::ui::format::{self, Format};
use crate::lib::ui::UI;

mod lib;

/// Diagnostics go to stderr, filtered by `PREFECT_SCAFFOLD_LOG` (e.g. `debug`).
fn init_tracing() {
	let filter = EnvFilter::try_from_env("PREFECT_SCAFFOLD_LOG")
		.unwrap_or_else(|_| EnvFilter::new("warn"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
	match cli.command {
		SubCommands::Init(args) => {
			let ui = UI::new(args.quiet);
			let config = InitConfig::from(&args);

			let project = Init::new(config, ui.clone()).run(&args.name)?;
			ui.println(
				format!("Created {} at {}", args.name, project.display()),
				format::Ok::default(),
			);
		}
	}

	Ok(())
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing();

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{}", format::Error::default().format(format!("{:#}", err)));
			ExitCode::FAILURE
		}
	}
}
