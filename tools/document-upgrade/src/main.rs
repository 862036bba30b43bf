use anyhow::{Context, Result, anyhow};
use clap::Parser;
use fern::colors::{Color, ColoredLevelConfig};
use std::path::PathBuf;

/// Documents upgraded when no paths are given, relative to the repository root.
const DEFAULT_MIGRATIONS: [(&str, &str); 2] = [
	("demo-artwork/just-a-potted-cactus.graphite", "demo-artwork/migrated_just_a_potted_cactus.graphite"),
	("demo-artwork/valley-of-spires.graphite", "demo-artwork/migrated_valley_of_spires.graphite"),
];

#[derive(Parser)]
#[command(name = "document-upgrade")]
#[command(about = "Upgrade documents saved with the legacy layer tree into the node graph document format")]
struct Args {
	/// Legacy document to read, paired in order with an --output (defaults to the bundled demo artwork)
	#[arg(short, long)]
	input: Vec<PathBuf>,

	/// Path the upgraded document is written to, paired in order with an --input
	#[arg(short, long)]
	output: Vec<PathBuf>,

	/// Log more detail (-v for info, -vv for debug, -vvv for trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

impl Args {
	fn migrations(&self) -> Result<Vec<(PathBuf, PathBuf)>> {
		if self.input.len() != self.output.len() {
			return Err(anyhow!("Got {} inputs but {} outputs, each --input needs a matching --output", self.input.len(), self.output.len()));
		}

		if self.input.is_empty() {
			return Ok(DEFAULT_MIGRATIONS.iter().map(|(input, output)| (PathBuf::from(input), PathBuf::from(output))).collect());
		}

		Ok(self.input.iter().cloned().zip(self.output.iter().cloned()).collect())
	}

	fn level(&self) -> log::LevelFilter {
		match self.verbose {
			0 => log::LevelFilter::Warn,
			1 => log::LevelFilter::Info,
			2 => log::LevelFilter::Debug,
			_ => log::LevelFilter::Trace,
		}
	}
}

fn setup_logging(level: log::LevelFilter) -> Result<()> {
	let colors = ColoredLevelConfig::new().debug(Color::Magenta).info(Color::Green).error(Color::Red);

	fern::Dispatch::new()
		.chain(std::io::stdout())
		.level(level)
		.format(move |out, message, record| {
			out.finish(format_args!(
				"[{}]{} {}",
				// Only the level is colored
				colors.color(record.level()),
				chrono::Utc::now().format("[%Y-%m-%d %H:%M:%S]"),
				message
			))
		})
		.apply()
		.context("Failed to set up logging")
}

fn main() -> Result<()> {
	let args = Args::parse();
	setup_logging(args.level())?;

	for (input, output) in args.migrations()? {
		document_upgrade::migrate_file(&input, &output).with_context(|| format!("Failed to upgrade {:?}", input))?;
	}

	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn pairs_inputs_with_outputs() {
		let args = Args::parse_from(["document-upgrade", "-i", "a.graphite", "-o", "b.graphite", "--input", "c.graphite", "--output", "d.graphite"]);
		let migrations = args.migrations().unwrap();

		assert_eq!(migrations, vec![(PathBuf::from("a.graphite"), PathBuf::from("b.graphite")), (PathBuf::from("c.graphite"), PathBuf::from("d.graphite"))]);
	}

	#[test]
	fn defaults_to_demo_artwork() {
		let args = Args::parse_from(["document-upgrade"]);
		let migrations = args.migrations().unwrap();

		assert_eq!(migrations.len(), 2);
		assert_eq!(migrations[0].1, PathBuf::from("demo-artwork/migrated_just_a_potted_cactus.graphite"));
		assert_eq!(args.level(), log::LevelFilter::Warn);
	}

	#[test]
	fn unpaired_paths_are_rejected() {
		let args = Args::parse_from(["document-upgrade", "-i", "a.graphite", "-vv"]);
		assert!(args.migrations().is_err());
		assert_eq!(args.level(), log::LevelFilter::Debug);
	}
}
