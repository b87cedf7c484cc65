use std::env;
use std::error::Error;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use decomposer::config::{
    validate_rates, DEFAULT_DECIMAL_PLACES, DEFAULT_END_RATE, DEFAULT_INCREMENT_RATE, DEFAULT_START_RATE,
};
use decomposer::decompose::DecompositionEngine;
use decomposer::pricing::PricingModel;
use decomposer::print;
use decomposer::rounding::Precision;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// observed price to decompose
    price: f64,

    /// decimal places the price is rounded to
    #[clap(short = 'd', long, default_value_t = DEFAULT_DECIMAL_PLACES)]
    decimal_places: u32,

    /// lowest candidate rate, in percent
    #[clap(short = 's', long, default_value_t = DEFAULT_START_RATE, allow_negative_numbers = true)]
    start_rate: f64,

    /// highest candidate rate, in percent
    #[clap(short = 'e', long, default_value_t = DEFAULT_END_RATE, allow_negative_numbers = true)]
    end_rate: f64,

    /// step between candidate rates, in hundredths of a percent
    #[clap(short = 'i', long, default_value_t = DEFAULT_INCREMENT_RATE * 100)]
    increment: u32,

    /// pricing model: markup or margin
    #[clap(short = 'm', long, default_value_t = PricingModel::Markup)]
    model: PricingModel,

    /// only list the rates that fail to reproduce the price
    #[clap(short = 'f', long)]
    failing: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.price.is_finite() {
            bail!("price must be a finite number");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let range = validate_rates(args.start_rate, args.end_rate, args.increment, args.model)?;
    let engine = DecompositionEngine::new(args.model, Precision::from(args.decimal_places));
    let decompositions: Vec<_> = engine
        .run(args.price, range.iter())
        .filter(|decomposition| !args.failing || !decomposition.reproduces_input())
        .collect();
    let reproduced = decompositions
        .iter()
        .filter(|decomposition| decomposition.reproduces_input())
        .count();

    let table = print::tabulate(&decompositions, args.decimal_places as usize);
    info!(
        "{} {} at {range}:\n{}",
        args.model,
        args.price,
        Console::default().render(&table)
    );
    info!("{reproduced} of {} rate(s) reproduce {}", range.len(), args.price);
    Ok(())
}
