pub mod format;

use crate::lib::ui::format::Format;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::borrow::Cow;
use std::time::Duration;

#[derive(Clone)]
pub struct UI {
	bar_manager: MultiProgress,
	quiet: bool,
}

impl UI {
	pub fn new(quiet: bool) -> UI {
		UI {
			bar_manager: MultiProgress::with_draw_target(match quiet {
				true => ProgressDrawTarget::hidden(),
				false => ProgressDrawTarget::stderr(),
			}),
			quiet,
		}
	}

	/// Starts a ticking spinner. Call `finish_and_clear` on it when done.
	pub fn create_spinner(
		&self,
		message: impl Into<Cow<'static, str>>,
	) -> ProgressBar {
		let spinner = self.bar_manager.add(
			ProgressBar::new_spinner()
				.with_style(
					ProgressStyle::with_template("{spinner:.green.bold} {msg}")
						.unwrap_or_else(|_| ProgressStyle::default_spinner()),
				)
				.with_message(message),
		);
		spinner.enable_steady_tick(Duration::from_millis(80));
		spinner
	}

	pub fn println<I: AsRef<str>>(
		&self,
		msg: I,
		formatter: impl Format,
	) {
		if self.quiet {
			return;
		}
		let line = formatter.format(msg);
		// indicatif drops lines when stderr is not a terminal.
		if self.bar_manager.is_hidden() {
			eprintln!("{}", line);
		} else {
			let _ = self.bar_manager.println(line);
		}
	}
}
