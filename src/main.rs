//! Facetr CLI application entry point
//!
//! A thin view layer over the filtering engine: it loads a dataset and a
//! taxonomy, turns flags into a selection, and prints the ordered result with
//! its count.
//!
//! # Usage
//!
//! ```bash
//! # Everything, sorted by name
//! facetr --dataset spells.json --taxonomy taxonomy.toml
//!
//! # Free-text search narrowed by tag and category
//! facetr query fire -t burn -c control --sort category
//!
//! # Taxonomy overview with per-tag counts
//! facetr tags
//!
//! # Verbose logging (or set RUST_LOG)
//! facetr -vv query ward
//! ```
//!
//! # Configuration
//!
//! Default dataset and taxonomy paths plus session defaults live in the
//! user's config directory (`~/.config/facetr/config.toml` on Linux).

use facetr::{
    FacetrError, Taxonomy,
    browse::query_with_limit,
    cli::{Cli, Commands, QueryArgs},
    config::FacetrConfig,
    dataset, output,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type Result<T> = std::result::Result<T, FacetrError>;

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,facetr=debug",
        2 => "debug,facetr=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_query(
    args: &QueryArgs,
    entries: &[facetr::Entry],
    taxonomy: &Taxonomy,
    config: &FacetrConfig,
    quiet: bool,
) -> Result<()> {
    let state = args.to_selection(config);
    let result = query_with_limit(entries, taxonomy, &state, config.max_query_chars);

    if args.json {
        println!("{}", output::entries_json(&result.entries)?);
        return Ok(());
    }

    for entry in &result.entries {
        println!("{}", output::entry_line(*entry, taxonomy, quiet));
    }
    if !quiet {
        eprintln!("{}", output::result_count(result.count));
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = FacetrConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    let taxonomy_path = config.taxonomy_path(cli.taxonomy.as_deref())?;
    let taxonomy = Taxonomy::load(&taxonomy_path)?;

    let dataset_path = config.dataset_path(cli.dataset.as_deref())?;
    let entries = dataset::load(&dataset_path, &taxonomy)?;

    match cli.get_command() {
        Commands::Query(args) => run_query(&args, &entries, &taxonomy, &config, quiet),
        Commands::Tags => {
            for line in output::tag_listing(&taxonomy.tag_counts(&entries), quiet) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
