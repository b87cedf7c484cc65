use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use decomposer::config::{
    Settings, DEFAULT_DECIMAL_PLACES, DEFAULT_END_RATE, DEFAULT_INCREMENT_RATE, DEFAULT_START_RATE,
};
use decomposer::pricing::PricingModel;
use decomposer::session::Session;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV file to source the prices from
    price_file: PathBuf,

    /// zero-based column holding the price
    column: usize,

    /// decimal places the prices are rounded to
    #[clap(short = 'd', long, default_value_t = DEFAULT_DECIMAL_PLACES)]
    decimal_places: u32,

    /// lowest candidate rate, in percent
    #[clap(short = 's', long, default_value_t = DEFAULT_START_RATE, allow_negative_numbers = true)]
    start_rate: f64,

    /// highest candidate rate, in percent
    #[clap(short = 'e', long, default_value_t = DEFAULT_END_RATE, allow_negative_numbers = true)]
    end_rate: f64,

    /// step between candidate rates, in hundredths of a percent
    #[clap(short = 'i', long, default_value_t = DEFAULT_INCREMENT_RATE)]
    increment: u32,

    /// pricing model: markup or margin
    #[clap(short = 'm', long, default_value_t = PricingModel::Markup)]
    model: PricingModel,

    /// where to write every decomposition as CSV
    #[clap(long)]
    dump: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !self.price_file.is_file() {
            bail!("price file {} does not exist", self.price_file.display());
        }
        Ok(())
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            decimal_places: args.decimal_places,
            start_rate: args.start_rate,
            end_rate: args.end_rate,
            increment_rate: args.increment,
            model: args.model,
            dump_path: args.dump,
            ..Settings::new(args.price_file, args.column)
        }
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
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!("args: {args:?}");
    let settings = Settings::from(args.clone());
    let session = Session::new(&settings)?;
    args.validate()?;

    session.run(|json| println!("{json}"))?;
    Ok(())
}
