use std::path::PathBuf;

use clap::Parser;

use trunfo::{compare, demo_pair, load_pair, logging, Attribute, MatchReport};

/// Super Trunfo city card comparator.
#[derive(Parser, Debug)]
#[command(name = "trunfo", version, about)]
struct Cli {
    /// Attribute to compare: population, area, gdp, population-density,
    /// gdp-per-capita, or the numeric selector 1-5.
    #[arg(long, short, default_value = "population")]
    attribute: String,

    /// JSON file with exactly two card records. Defaults to the built-in
    /// Sao Paulo / Rio de Janeiro pair.
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Skip the per-card detail blocks, print only the comparison.
    #[arg(long, short)]
    quiet: bool,

    /// Enable debug logging.
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> trunfo::Result<()> {
    // Invalid selectors are fatal before anything is compared or printed.
    let attribute: Attribute = cli.attribute.parse()?;
    tracing::debug!(%attribute, "selected attribute");

    let (first, second) = match &cli.cards {
        Some(path) => load_pair(path)?,
        None => demo_pair(),
    };

    println!("--- Super Trunfo: Card Comparison ---\n");

    if !cli.quiet {
        println!("Card 1:\n{first}");
        println!("Card 2:\n{second}");
    }

    let comparison = compare(&first, &second, attribute);
    tracing::debug!(outcome = ?comparison.outcome, "round decided");

    let first_label = first.label();
    let second_label = second.label();
    print!("{}", MatchReport::new(&comparison, &first_label, &second_label));

    Ok(())
}
