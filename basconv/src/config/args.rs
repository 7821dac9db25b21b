//! Command-line argument parsing for basis-set conversion

use clap::Parser;

/// Convert Gaussian94 basis sets into other program formats
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to an optional YAML job file
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Gaussian94 file to convert
    #[arg(short, long, conflicts_with = "basis")]
    pub input: Option<String>,

    /// Basis set name to download from the Basis Set Exchange
    #[arg(short, long)]
    pub basis: Option<String>,

    /// Restrict the basis set to these elements (symbols, names or numbers)
    #[arg(short, long, num_args = 1..)]
    pub elements: Option<Vec<String>>,

    /// Output formats (gaussian94, cfour, nwchem, orca, qchem, turbomole, pyscf, json)
    #[arg(short, long = "format", num_args = 1..)]
    pub formats: Option<Vec<String>>,

    /// Directory the converted files are written to
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Basis set name used for file names and format headers
    #[arg(long)]
    pub name: Option<String>,

    /// Basis set description used by formats with a header
    #[arg(long)]
    pub description: Option<String>,

    /// Replace files that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Override the Basis Set Exchange base url
    #[arg(long)]
    pub base_url: Option<String>,

    /// Write the log to this file instead of stdout
    #[arg(short = 'o', long)]
    pub log_file: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
