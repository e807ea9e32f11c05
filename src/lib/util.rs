use std::ffi::OsStr;
use std::process::Command;

pub mod error;

/// Renders a command the way it would be typed into a shell.
pub fn describe_command(cmd: &Command) -> String {
	std::iter::once(cmd.get_program())
		.chain(cmd.get_args())
		.map(OsStr::to_string_lossy)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Tests that move the process working directory or spawn the fake package
/// manager take this lock first.
#[cfg(test)]
pub fn cwd_lock() -> std::sync::MutexGuard<'static, ()> {
	use std::sync::Mutex;

	static LOCK: Mutex<()> = Mutex::new(());
	LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
