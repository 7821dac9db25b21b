//! Input/Output operations for basis-set conversion
//!
//! This module handles logging setup, reading or downloading Gaussian94 text,
//! and writing converted files.

mod basis_loader;
mod output;

pub use basis_loader::{exchange_url, fetch_basis, read_basis_file};
pub use output::{normalise_name, setup_output, write_converted, WriteOutcome};
