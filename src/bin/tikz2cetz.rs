//! tikz2cetz CLI - Translate TikZ node/edge diagrams into Typst CeTZ

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use log::{debug, error, LevelFilter};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use std::{process, str::FromStr};
#[cfg(feature = "cli")]
use tikz2cetz::{
    convert_tikz_to_cetz_with_options, tikz2cetz_with_options, CetzOptions, ConversionResult,
};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "tikz2cetz")]
#[command(version)]
#[command(about = "Translate TikZ node/edge diagrams into Typst CeTZ", long_about = None)]
struct Cli {
    /// Input TikZ file
    input: PathBuf,

    /// Output file path (defaults to the input path with a .typ extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the CeTZ document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Support file imported by the generated document
    #[arg(long, default_value = tikz2cetz::core::options::DEFAULT_STYLE_FILE)]
    style_file: String,

    /// Reject blank lines instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(cli:?; "Parsed arguments");

    if let Err(err) = run(&cli) {
        error!("{}", err);
        process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> ConversionResult<()> {
    let mut options = CetzOptions::new().with_style_file(cli.style_file.as_str());
    if cli.strict {
        options = options.strict();
    }

    if cli.stdout {
        let input = std::fs::read_to_string(&cli.input)?;
        print!("{}", convert_tikz_to_cetz_with_options(&input, &options)?);
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    tikz2cetz_with_options(&cli.input, &output, &options)?;
    eprintln!("✓ CeTZ output written to: {}", output.display());
    Ok(())
}

#[cfg(feature = "cli")]
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("typ")
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tikz2cetz --features cli");
    eprintln!("  tikz2cetz [OPTIONS] <INPUT>");
}
