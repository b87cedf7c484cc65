//! Infers the markup or margin rates a retailer could have used, given only the prices they display.
//! Each candidate rate is tested against every observed price by reversing the price to a base,
//! rounding the base down and up, and rebuilding the price; rates that cannot reproduce a price are
//! eliminated.

pub mod config;
pub mod csv;
pub mod decompose;
pub mod feed;
pub mod pricing;
pub mod print;
pub mod rate;
pub mod rounding;
pub mod session;
pub mod survival;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
