use anyhow::Context;
use clap::Parser;
use jtl::{Result, input, logging, spec};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jtl")]
#[command(about = "Transform JSON with a declarative YAML spec", long_about = None)]
struct Cli {
    /// YAML spec stream; each `---` document is one top-level spec.
    #[arg(long, env = "JTL_SPEC")]
    spec: PathBuf,

    /// JSON input file. Reads stdin when omitted.
    #[arg(long, env = "JTL_SOURCE")]
    source: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,

    /// More logging on stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(logging::level_for(cli.verbose, cli.quiet))?;

    // 1) Load specs (fatal on any decode error).
    let root = spec::load_file(&cli.spec)?;
    tracing::info!(spec = %cli.spec.display(), specs = root.children.len(), "loaded specs");

    // 2) Load input.
    match &cli.source {
        Some(path) => tracing::info!(source = %path.display(), "reading input"),
        None => tracing::info!("reading input from stdin"),
    }
    let input = input::read_input(cli.source.as_deref())?;

    // 3) Transform.
    let output = root.process(&input);

    // 4) Emit.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &output)?;
    } else {
        serde_json::to_writer(&mut out, &output)?;
    }
    writeln!(out).context("write output")?;

    Ok(())
}
