// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the sum-product puzzle search.
//!
//! Thin wrapper around the library: parse and validate the configuration,
//! describe the problem, run the enumeration, print the answers.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sum_product_search::config::RunConfig;
use sum_product_search::engine::{Quantifier, RoundRule};
use sum_product_search::pairs::{Bounds, Pair};
use sum_product_search::search::compute_answers;
use sum_product_search::state::Counters;
use sum_product_search::trace::WriterSink;
use sum_product_search::SearchContext;

#[derive(Debug, Parser)]
#[command(
    name = "sumproduct",
    version,
    about = "Search for integer pairs solving the sum-and-product epistemic puzzle"
)]
struct Cli {
    /// Smallest admissible value of x (y must exceed x)
    #[arg(long, default_value_t = 2)]
    min_value: u64,

    /// Largest admissible value of x + y
    #[arg(long, default_value_t = 100)]
    max_sum: u64,

    /// Number of statements required to hold (the puzzle variant, 1-4)
    #[arg(long, default_value_t = 4)]
    chain_length: usize,

    /// Verbosity: 0 default, 1 silent, 2 summary, 3-9 detailed trace
    #[arg(long, default_value_t = 0)]
    verbosity: u8,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let config = RunConfig {
        min_value: cli.min_value,
        max_sum: cli.max_sum,
        chain_length: cli.chain_length,
        verbosity: cli.verbosity,
    };

    let plan = match config.validate() {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("configuration error: {}", err);
            std::process::exit(2);
        }
    };

    println!("######### Starting sum-product search #########");
    print_description(&config, &plan.chain);
    print_parameters(&plan.bounds);

    let sink = WriterSink::stdout(plan.verbosity);
    let mut ctx = SearchContext::with_sink(plan.bounds, Box::new(sink));
    let answers = compute_answers(&mut ctx, &plan.chain);

    print_answers(&answers);
    info!(
        pairs_tested = ctx.statistics.get(Counters::PairsTested),
        product_scans = ctx.statistics.get(Counters::ProductScans),
        sum_scans = ctx.statistics.get(Counters::SumScans),
        answers = answers.len(),
        "run complete"
    );
    println!("######### Finished sum-product search #########");
}

fn print_description(config: &RunConfig, chain: &[RoundRule]) {
    println!("----- Description -----");
    println!(
        "Checks every pair of (not equal) numbers, which are at least min_value ({0}) \
         and whose sum is not greater than max_sum ({1}).",
        config.min_value, config.max_sum
    );
    println!(
        "Checks those pairs for the truth of {} statement{}:",
        chain.len(),
        if chain.len() == 1 { "" } else { "s" }
    );
    for (index, rule) in chain.iter().enumerate() {
        println!("{}", statement_line(index, rule));
    }
    println!("Visit https://en.wikipedia.org/wiki/Sum_and_Product_Puzzle for details");
    println!();
}

/// One line of the problem description, phrased the way the puzzle is told.
fn statement_line(index: usize, rule: &RoundRule) -> String {
    let priors = match index {
        0 => String::new(),
        1 => "knows statement #1 and ".to_string(),
        n => format!("knows statements #1-{} and ", n),
    };
    let verb = match rule.quantifier {
        Quantifier::Ambiguity => "does not know",
        Quantifier::Resolution => "DOES know",
    };
    format!(
        " {}: Someone who {}knows the {} {} what the numbers are.",
        index + 1,
        priors,
        rule.partition.label(),
        verb
    )
}

fn print_parameters(bounds: &Bounds) {
    println!("----- Parameters -----");
    println!("Y > X >= {}", bounds.min_value);
    println!("X + Y <= {}", bounds.max_sum);
    println!();
}

fn print_answers(answers: &[Pair]) {
    println!("Answers:");
    for answer in answers {
        println!("  {}", answer);
    }
    println!("  {} possible answers", answers.len());
}
