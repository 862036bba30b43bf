#[macro_use]
extern crate log;

mod manifest;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use manifest::Dependency;
use std::path::PathBuf;
use std::process::Command;

const DEFAULT_BUILD_COMMAND: [&str; 5] = ["wasm-pack", "build", "./wasm", "--target", "web"];

#[derive(Parser)]
#[command(name = "wasm-pkg-patch")]
#[command(about = "Build the wasm package, then add dependencies to the package.json it generates")]
struct Args {
	/// Generated manifest to patch
	#[arg(long, default_value = "pkg/package.json")]
	manifest: PathBuf,

	/// Dependency to add, as NAME=VERSION
	#[arg(long = "dependency", required = true)]
	dependencies: Vec<Dependency>,

	/// Patch the manifest without running the build first
	#[arg(long)]
	skip_build: bool,

	/// Build command and its arguments (defaults to `wasm-pack build ./wasm --target web`)
	#[arg(last = true)]
	build_command: Vec<String>,
}

impl Args {
	fn build_command(&self) -> Vec<String> {
		if self.build_command.is_empty() {
			DEFAULT_BUILD_COMMAND.iter().map(|arg| arg.to_string()).collect()
		} else {
			self.build_command.clone()
		}
	}
}

fn run_build(command: &[String]) -> Result<()> {
	let (program, args) = command.split_first().ok_or_else(|| anyhow!("The build command is empty"))?;
	info!("Running {}", command.join(" "));

	let status = Command::new(program).args(args).status().with_context(|| format!("Failed to run {program}"))?;
	if !status.success() {
		return Err(anyhow!("{} exited with {status}", command.join(" ")));
	}
	Ok(())
}

fn main() -> Result<()> {
	env_logger::builder().filter_level(log::LevelFilter::Info).parse_default_env().init();
	let args = Args::parse();

	if !args.skip_build {
		run_build(&args.build_command())?;
	}

	manifest::patch_manifest(&args.manifest, &args.dependencies)?;
	Ok(())
}
