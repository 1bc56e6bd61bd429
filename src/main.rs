use clap::{Parser, ValueEnum};
use slidefit::{Canvas, Deck, PipelineBuilder, PipelineError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

// Many small short-lived allocations per slide; mimalloc keeps them cheap.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Aspect {
    #[value(name = "16:9")]
    Widescreen,
    #[value(name = "4:3")]
    Standard,
}

/// Computes slide layouts for a deck and reports which slides overflow.
#[derive(Debug, Parser)]
#[command(name = "slidefit", version)]
struct Args {
    /// Deck JSON: {"slides": [...]} or a bare array of slides.
    deck: PathBuf,

    /// Layout configuration JSON; missing keys keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas preset, applied after --config.
    #[arg(long, value_enum)]
    aspect: Option<Aspect>,

    /// Number of layout workers (defaults to the CPU count).
    #[arg(short, long)]
    workers: Option<usize>,

    /// Lay slides out one by one on the main thread.
    #[arg(long, conflicts_with = "workers")]
    sequential: bool,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<ExitCode, PipelineError> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = PipelineBuilder::new();
    if let Some(path) = &args.config {
        builder = builder.with_config_file(path)?;
    }
    match args.aspect {
        Some(Aspect::Widescreen) => builder = builder.with_canvas(Canvas::widescreen()),
        Some(Aspect::Standard) => builder = builder.with_canvas(Canvas::standard()),
        None => {}
    }
    if args.sequential {
        builder = builder.sequential();
    } else if let Some(workers) = args.workers {
        builder = builder.with_worker_count(workers);
    }
    let pipeline = builder.build()?;

    log::info!("Loading deck from {}", args.deck.display());
    let deck = Deck::from_file(&args.deck)?;
    let report = pipeline.layout_deck(&deck);

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);
    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &report)?;
    } else {
        serde_json::to_writer(&mut writer, &report)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    if report.has_invalid_slides() {
        log::error!("{} slide(s) were rejected as invalid input.", report.summary.invalid);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
