use crate::lib::ui::format::{Info, Warn};
use crate::lib::ui::UI;
use crate::lib::util::describe_command;
use std::io;
use std::process::{Command, ExitStatus, Output};

#[derive(Clone)]
pub struct System {
	ui: UI,
}

impl System {
	pub fn new(ui: UI) -> System {
		System { ui }
	}

	/// Runs `cmd` with inherited stdio and blocks until it exits.
	pub fn execute(
		&self,
		cmd: &mut Command,
	) -> io::Result<ExitStatus> {
		let line = describe_command(cmd);
		tracing::debug!("running `{}`", line);

		let status = cmd.status()?;
		self.report(&line, status);
		Ok(status)
	}

	/// Runs `cmd` with stdout and stderr captured. Stderr of a failed run is
	/// echoed through the UI.
	pub fn execute_captured(
		&self,
		cmd: &mut Command,
	) -> io::Result<Output> {
		let line = describe_command(cmd);
		tracing::debug!("running `{}` (captured)", line);

		let output = cmd.output()?;
		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr);
			if !stderr.trim().is_empty() {
				self.ui.println(stderr.trim_end(), Info::default());
			}
		}
		self.report(&line, output.status);
		Ok(output)
	}

	fn report(
		&self,
		line: &str,
		status: ExitStatus,
	) {
		if status.success() {
			tracing::debug!("`{}` exited with {}", line, status);
		} else {
			tracing::debug!("`{}` failed with {}", line, status);
			self.ui.println(
				format!("`{}` exited with {}", line, status),
				Warn::default(),
			);
		}
	}
}
