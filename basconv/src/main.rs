//! Basis-set conversion command-line interface
//!
//! Reads a Gaussian94 basis set from a file or from the Basis Set Exchange and
//! writes it out in the requested program formats.

use color_eyre::eyre::Result;

mod app;
mod config;
mod io;

use app::ConvertApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    ConvertApplication::from_cli()?.run()
}
