use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::ffi::OsString;

/// A set of environment changes applied for the lifetime of an [`EnvGuard`].
///
/// Removals win over updates for the same key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvOverride {
	updates: BTreeMap<String, String>,
	removals: BTreeSet<String>,
}

impl EnvOverride {
	pub fn new() -> Self {
		EnvOverride::default()
	}

	pub fn set(
		mut self,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		self.updates.insert(key.into(), value.into());
		self
	}

	pub fn remove(
		mut self,
		key: impl Into<String>,
	) -> Self {
		self.removals.insert(key.into());
		self
	}

	/// Applies the changes to the process environment. Everything is put back
	/// when the returned guard is dropped.
	pub fn apply(&self) -> EnvGuard {
		let stomped: BTreeSet<&String> =
			self.updates.keys().chain(self.removals.iter()).collect();

		let restore: Vec<(String, OsString)> = stomped
			.into_iter()
			.filter_map(|key| env::var_os(key).map(|value| (key.clone(), value)))
			.collect();

		let remove_after: Vec<String> = self
			.updates
			.keys()
			.filter(|key| env::var_os(key).is_none())
			.cloned()
			.collect();

		for (key, value) in &self.updates {
			tracing::debug!("setting {}={} for scope", key, value);
			env::set_var(key, value);
		}
		for key in &self.removals {
			tracing::debug!("unsetting {} for scope", key);
			env::remove_var(key);
		}

		EnvGuard {
			restore,
			remove_after,
		}
	}

	/// Runs `f` with the overrides in place.
	pub fn scope<T>(
		&self,
		f: impl FnOnce() -> T,
	) -> T {
		let _guard = self.apply();
		f()
	}
}

/// Restores the environment captured by [`EnvOverride::apply`] on drop.
#[must_use = "the environment is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct EnvGuard {
	restore: Vec<(String, OsString)>,
	remove_after: Vec<String>,
}

impl Drop for EnvGuard {
	fn drop(&mut self) {
		for (key, value) in &self.restore {
			env::set_var(key, value);
		}
		for key in &self.remove_after {
			env::remove_var(key);
		}
	}
}
