use console::style;

pub trait Format {
	fn format<I: AsRef<str>>(
		&self,
		input: I,
	) -> String;
}

#[derive(Default)]
pub struct Info {}

impl Format for Info {
	fn format<I: AsRef<str>>(
		&self,
		input: I,
	) -> String {
		format!("{} {}", style("info:").cyan().bold().bright(), input.as_ref())
	}
}

#[derive(Default)]
pub struct Warn {}

impl Format for Warn {
	fn format<I: AsRef<str>>(
		&self,
		input: I,
	) -> String {
		format!("{} {}", style("warning:").yellow().bold().bright(), input.as_ref())
	}
}

#[derive(Default)]
pub struct Ok {}

impl Format for Ok {
	fn format<I: AsRef<str>>(
		&self,
		input: I,
	) -> String {
		format!("{} {}", style("success:").green().bold().bright(), input.as_ref())
	}
}

#[derive(Default)]
pub struct Error {}

impl Format for Error {
	fn format<I: AsRef<str>>(
		&self,
		input: I,
	) -> String {
		format!("{} {}", style("error:").red().bold().bright(), input.as_ref())
	}
}
