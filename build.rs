use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const TEMPLATE_ROOT: &str = "templates/default";

fn main()
{
	println!(
		"cargo:rustc-env=TARGET={}",
		env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
	);

	let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
	let root = manifest_dir.join(TEMPLATE_ROOT);
	println!("cargo:rerun-if-changed={}", TEMPLATE_ROOT);

	let mut table = String::from("&[\n");
	for entry in WalkDir::new(&root).sort_by_file_name() {
		let entry = entry.unwrap();
		if !entry.file_type().is_file() {
			continue;
		}
		println!("cargo:rerun-if-changed={}", entry.path().display());

		table.push_str(&format!(
			"\tTemplateFile {{ path: {:?}, contents: include_str!({:?}) }},\n",
			relative_path(&root, entry.path()),
			entry.path().display().to_string(),
		));
	}
	table.push(']');

	let out = PathBuf::from(env::var("OUT_DIR").unwrap()).join("templates.rs");
	fs::write(out, table).unwrap();
}

/// `/`-separated path of `path` below `root`, the form `TemplateFile` stores.
fn relative_path(
	root: &Path,
	path: &Path,
) -> String
{
	path.strip_prefix(root)
		.unwrap()
		.components()
		.map(|component| component.as_os_str().to_string_lossy().into_owned())
		.collect::<Vec<_>>()
		.join("/")
}
