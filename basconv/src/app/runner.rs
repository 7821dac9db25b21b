use crate::io::{write_converted, WriteOutcome};
use ::basis::{BasisFormat, BasisSetDocument, DumpOptions, ElementTable};
use color_eyre::eyre::{eyre, Result};
use std::path::Path;
use tracing::{error, info};

/// Counts of what a conversion run did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: Vec<BasisFormat>,
    pub warnings: usize,
}

impl ConversionSummary {
    /// Turn any failed format into an error for the process exit status.
    pub fn into_result(self) -> Result<Self> {
        if self.failed.is_empty() {
            return Ok(self);
        }
        let keys: Vec<&str> = self.failed.iter().map(BasisFormat::key).collect();
        Err(eyre!(
            "Conversion failed for {} format(s): {}",
            keys.len(),
            keys.join(", ")
        ))
    }
}

/// Dump the document in every requested format and write one file per format.
///
/// A failing format is logged and does not stop the remaining ones.
pub fn convert_all(
    doc: &BasisSetDocument,
    table: &ElementTable,
    formats: &[BasisFormat],
    options: &DumpOptions,
    destination: &Path,
    overwrite: bool,
) -> ConversionSummary {
    let name = options.name.as_deref().unwrap_or("basis");
    let mut summary = ConversionSummary::default();

    for format in formats {
        info!("Converting to {}", format);
        let dumped = match format.dumps(doc, table, options) {
            Ok(dumped) => dumped,
            Err(e) => {
                error!("Could not convert to {}: {}", format, e);
                summary.failed.push(*format);
                continue;
            }
        };
        summary.warnings += dumped.warnings.len();

        match write_converted(destination, name, format.extension(), &dumped.text, overwrite) {
            Ok(WriteOutcome::Written(_)) => summary.written += 1,
            Ok(WriteOutcome::Skipped(_)) => summary.skipped += 1,
            Err(e) => {
                error!("Could not write {} output: {:#}", format, e);
                summary.failed.push(*format);
            }
        }
    }

    summary
}
