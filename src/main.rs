//! Command-line set solver.
//!
//! Loads a deck (or generates one from a dimension schema, or falls back to
//! the standard 4x3 deck), then prints every valid set as a tuple of card
//! ids. File formats are the JSON record shapes described in `setfinder::io`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use setfinder::deck::DimensionSchema;
use setfinder::engine::DeckEngine;
use setfinder::io;

/// Find all valid sets in a deck of attribute-tagged cards.
#[derive(Debug, Parser)]
#[command(name = "setfinder", version, about)]
struct Args {
    /// Dimension JSON file with possible attributes and values.
    #[arg(long)]
    dims: Option<PathBuf>,

    /// Deck JSON file with cards to play. Takes precedence over --dims.
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Number of cards required for a set.
    #[arg(long, default_value_t = 3)]
    choose: usize,

    /// Write the loaded or generated deck to this JSON file.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// The standard Set deck: four attributes, three values each, 81 cards.
fn standard_schema() -> DimensionSchema {
    DimensionSchema::new()
        .with_dimension("color", ["red", "green", "purple"])
        .with_dimension("shape", ["oval", "squiggle", "diamond"])
        .with_dimension("number", [1i64, 2, 3])
        .with_dimension("shading", ["solid", "striped", "open"])
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = DeckEngine::new();

    if let Some(path) = &args.deck {
        engine.load_deck(io::read_deck(path)?)?;
        info!(deck = %path.display(), cards = engine.cards().len(), "loaded deck");
    } else if let Some(path) = &args.dims {
        engine.generate_deck(io::read_schema(path)?);
        info!(dims = %path.display(), cards = engine.cards().len(), "generated deck");
    } else {
        engine.generate_deck(standard_schema());
        info!(cards = engine.cards().len(), "generated standard deck");
    }

    if let Some(path) = &args.out {
        io::write_deck(path, engine.deck())?;
        info!(out = %path.display(), "wrote deck");
    }

    let sets = engine.possible_sets(args.choose);
    info!(sets = sets.len(), choose = args.choose, "enumeration finished");

    for set in &sets {
        let ids: Vec<String> = set.iter().map(|id| id.raw().to_string()).collect();
        println!("({})", ids.join(", "));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
