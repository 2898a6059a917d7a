use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use markov_gen_core::{MarkovModel, Unit};

/// Generate random text from a training text with an order-k Markov chain.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Training text file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Inline training text
    #[arg(short, long)]
    text: Option<String>,

    /// Unit of the chain
    #[arg(short, long, value_enum, default_value_t = Granularity::Char)]
    granularity: Granularity,

    /// Number of units forming a context key
    #[arg(short, long, default_value_t = 4)]
    context: usize,

    /// Number of units to generate
    #[arg(short, long, default_value_t = 200)]
    length: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of texts to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Granularity {
    Char,
    Word,
}

/// Trains a model of unit `U` according to `args` and prints `args.count` texts.
fn run<U: Unit>(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut model: MarkovModel<U> = MarkovModel::new(args.context)?;

    // Seeding is optional, without it every run differs
    if let Some(seed) = args.seed {
        model.set_random(seed);
    }

    match (&args.file, &args.text) {
        (Some(path), _) => model.set_training_file(path)?,
        (None, Some(text)) => model.set_training(text),
        (None, None) => return Err("Either --file or --text must be given".into()),
    }
    info!(
        "Model trained: {} units, context length {}",
        model.training_corpus().map(<[U]>::len).unwrap_or(0),
        model.context_length()
    );

    for i in 0..args.count {
        println!("Generated text {}: {}", i + 1, model.get_random_text(args.length)?);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    match args.granularity {
        Granularity::Char => run::<char>(&args),
        Granularity::Word => run::<String>(&args),
    }
}
