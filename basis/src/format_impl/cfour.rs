//! CFOUR GENBAS entries.
//!
//! Unlike the other writers this one re-tabulates the data: shells are
//! grouped by angular momentum, the exponents of a group are merged into one
//! descending list without duplicates, and every shell becomes a column of
//! coefficients over that list. A shell that does not use an exponent gets a
//! zero in that row. Exponents are merged only when bit-identical.

use super::{check_contractions, warn_ecp_ignored};
use crate::basis::DumpOptions;
use crate::cgto::{AtomBasis, BasisSetDocument, Contraction};
use crate::element::ElementTable;
use crate::error::{Dumped, Result, Warning};
use itertools::Itertools;

/// Shells of one angular momentum laid out on a shared exponent axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AmBlock {
    pub angular_momentum: u32,
    pub n_contractions: usize,
    /// Unique exponents, largest first
    pub exponents: Vec<f64>,
    /// `coefficients[row][column]`: row per exponent, column per shell
    pub coefficients: Vec<Vec<f64>>,
}

/// Group and re-tabulate the shells of one atom.
pub fn tabulate(atom: &AtomBasis) -> Vec<AmBlock> {
    let ams: Vec<u32> = atom
        .functions
        .iter()
        .map(|f| f.angular_momentum)
        .sorted()
        .dedup()
        .collect();

    ams.into_iter()
        .map(|am| {
            let shells: Vec<&Contraction> = atom
                .functions
                .iter()
                .filter(|f| f.angular_momentum == am)
                .collect();

            let exponents: Vec<f64> = shells
                .iter()
                .flat_map(|f| f.exponents.iter().copied())
                .sorted_by(|a, b| b.total_cmp(a))
                .dedup()
                .collect();

            let coefficients = exponents
                .iter()
                .map(|&exp| {
                    shells
                        .iter()
                        .map(|f| {
                            f.exponents
                                .iter()
                                .position(|&e| e == exp)
                                .map(|i| f.coefficients[i])
                                .unwrap_or(0.0)
                        })
                        .collect()
                })
                .collect();

            AmBlock {
                angular_momentum: am,
                n_contractions: shells.len(),
                exponents,
                coefficients,
            }
        })
        .collect()
}

pub fn dumps(doc: &BasisSetDocument, table: &ElementTable, options: &DumpOptions) -> Result<Dumped> {
    check_contractions(doc)?;
    let name = options.name_or_default().to_uppercase();
    let description = options.description_or_default();

    let mut lines: Vec<String> = Vec::new();
    for atom in &doc.atoms {
        let symbol = table.symbol(atom.atomic_number)?.to_uppercase();
        let blocks = tabulate(atom);

        lines.push(format!("{}:{}", symbol, name));
        lines.push(description.clone());
        lines.push(String::new());

        lines.push(format!("{:3}", blocks.len()));
        lines.push(blocks.iter().map(|b| format!("{:5}", b.angular_momentum)).join(""));
        lines.push(blocks.iter().map(|b| format!("{:5}", b.n_contractions)).join(""));
        lines.push(blocks.iter().map(|b| format!("{:5}", b.exponents.len())).join(""));

        for block in &blocks {
            lines.push(String::new());
            for chunk in &block.exponents.iter().chunks(5) {
                lines.push(chunk.map(|exp| format!("{:14.7}", exp)).join(""));
            }
            for row in &block.coefficients {
                lines.push(row.iter().map(|c| format!("{:10.7} ", c)).join(""));
            }
        }

        lines.push(String::new());
    }
    lines.push(String::new());

    let mut dumped = Dumped::new(lines.join("\n"));
    dumped.warn(Warning::Experimental {
        format: "cfour".to_string(),
    });
    warn_ecp_ignored(&mut dumped, "cfour", doc);
    Ok(dumped)
}
