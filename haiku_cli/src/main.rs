// Random haiku generator, CLI entry point.
//
// Loads a word list and template file (or the built-in ones), builds the
// syllable index once, seeds one RNG, and then either prints a fixed number
// of haiku or runs the interactive screen from `render.rs`.
//
// Usage:
//   haiku [OPTIONS]
//     --words <PATH>       Word list, one word per line (default: built-in)
//     --templates <PATH>   Templates, one per line (default: built-in)
//     --config <PATH>      Composer config JSON (default: built-in defaults)
//     --seed <N>           RNG seed (default: clock)
//     -n, --count <N>      Print N haiku and exit instead of going interactive
//     -v, --verbose        More logging on stderr (-vv for debug)

mod render;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use haiku_lang::{
    ComposerConfig, HaikuGenerator, SyllableIndex, default_templates, default_words,
    load_templates, load_words,
};
use haiku_prng::{HaikuRng, RandomSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "haiku", version)]
#[command(about = "Generate random 5-7-5 haiku from a word list and templates")]
struct Cli {
    /// Word list, one word per line
    #[arg(long)]
    words: Option<PathBuf>,

    /// Template file, one `line|line|line` template per line
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Composer configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random generator (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Print this many haiku and exit
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let words = match &cli.words {
        Some(path) => load_words(path).context("loading word list")?,
        None => default_words(),
    };
    let templates = match &cli.templates {
        Some(path) => {
            load_templates(path, config.strict_markers).context("loading templates")?
        }
        None => default_templates(),
    };

    let seed = cli.seed.unwrap_or_else(clock_seed);
    let index = SyllableIndex::build(words);
    let mut generator = HaikuGenerator::new(index, templates, config, HaikuRng::new(seed))?;
    info!(
        seed,
        words = generator.index().len(),
        templates = generator.templates().len(),
        "starting haiku generator"
    );

    match cli.count {
        Some(count) => print_batch(&mut generator, count)?,
        None => render::interactive(&mut generator).context("terminal error")?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG wins when set; otherwise only our crates log, at `level`.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("haiku_lang={level},haiku={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries the haiku
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ComposerConfig> {
    let Some(path) = path else {
        return Ok(ComposerConfig::default());
    };
    ComposerConfig::load(path).with_context(|| format!("loading config {}", path.display()))
}

/// Seed from the wall clock when none was given.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn print_batch<R: RandomSource>(generator: &mut HaikuGenerator<R>, count: usize) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..count {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", generator.next_haiku())?;
    }
    out.flush()?;
    Ok(())
}
