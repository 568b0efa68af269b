use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tonepunker::{config::ProcessConfig, run, transform::filters::Filter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tonepunker")]
#[command(author, version, about = "Apply color filters to images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output, repeat for more
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new image with a filter applied (sepia|grayscale|invert)
    Filter(FilterArgs),
}

#[derive(Args)]
struct FilterArgs {
    /// Image to read, the result is written next to it
    image_path: PathBuf,

    /// The type of filter to apply (sepia|grayscale|invert)
    #[arg(short = 't', long = "type", value_parser = ["sepia", "grayscale", "invert"])]
    filter: Option<String>,

    /// The format in which to convert the output file to (jpeg|jpg|png)
    #[arg(short, long)]
    format: Option<String>,

    /// JSON processing config, flags take precedence over its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of worker threads (0 = auto)
    #[arg(short = 'j', long)]
    threads: Option<usize>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn filter(args: FilterArgs) -> Result<()> {
    let base = args
        .config
        .as_ref()
        .map(|path| {
            ProcessConfig::read_config(path)
                .with_context(|| format!("error reading config '{}'", path.display()))
        })
        .transpose()?;
    let filter = args
        .filter
        .as_deref()
        .map(str::parse::<Filter>)
        .transpose()?;
    let config = ProcessConfig::with_overrides(base, filter, args.format, args.threads)?;

    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
            .context("failed to configure thread pool")?;
    }

    let output = run(&config, &args.image_path).with_context(|| {
        format!(
            "failed to apply '{}' filter to '{}'",
            config.filter,
            args.image_path.display()
        )
    })?;

    println!(
        "Successfully applied '{}' filter. New image saved as '{}'.",
        config.filter,
        output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Filter(args) => filter(args),
    }
}
