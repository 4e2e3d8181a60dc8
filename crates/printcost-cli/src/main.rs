//! Printcost - cost estimation and quoting for a 3D printing craft shop
//!
//! A CLI tool that prices printed pieces from explicit parameters or from
//! the measured volume of an STL model.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
