use ::basis::{BasisFormat, BasisSetDocument, ElementTable};
use color_eyre::eyre::{Result, WrapErr};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::io::{fetch_basis, read_basis_file};

/// Source of a basis-set document.
pub trait BasisLoader {
    /// Human readable origin, used in log messages.
    fn describe(&self) -> String;

    fn load(&self, table: &ElementTable) -> Result<BasisSetDocument>;
}

/// Reads a local Gaussian94 file, or a JSON dump when the extension says so.
pub struct FileLoader {
    pub path: PathBuf,
}

impl BasisLoader for FileLoader {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self, table: &ElementTable) -> Result<BasisSetDocument> {
        let text = read_basis_file(&self.path)?;
        let format = match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => BasisFormat::Json,
            _ => BasisFormat::Gaussian94,
        };
        format
            .loads(&text, table)
            .wrap_err_with(|| format!("Failed to parse {}", self.path.display()))
    }
}

/// Downloads Gaussian94 text from the Basis Set Exchange REST API.
pub struct ExchangeLoader {
    pub base_url: String,
    pub name: String,
    pub symbols: Vec<String>,
    pub timeout: Duration,
}

impl BasisLoader for ExchangeLoader {
    fn describe(&self) -> String {
        format!("basis set {} from {}", self.name, self.base_url)
    }

    fn load(&self, table: &ElementTable) -> Result<BasisSetDocument> {
        let text = fetch_basis(&self.base_url, &self.name, &self.symbols, self.timeout)?;
        BasisFormat::Gaussian94
            .loads(&text, table)
            .wrap_err_with(|| format!("Failed to parse basis set {} as downloaded", self.name))
    }
}

/// Turn user supplied element keys (symbols, names or numbers) into atomic
/// numbers, keeping the given order.
pub fn resolve_elements(table: &ElementTable, keys: &[String]) -> Result<Vec<u32>> {
    keys.iter()
        .map(|key| {
            table
                .find(key)
                .map(|e| e.atomic_number)
                .wrap_err_with(|| format!("Unknown element '{}'", key))
        })
        .collect()
}

/// Load a document and cut it down to the requested elements.
pub fn load_document(
    loader: &dyn BasisLoader,
    table: &ElementTable,
    requested: &[u32],
) -> Result<BasisSetDocument> {
    info!("Loading {}", loader.describe());
    let doc = loader.load(table)?;
    if requested.is_empty() {
        return Ok(doc);
    }

    for z in requested {
        if doc.get(*z).is_none() {
            let symbol = table
                .by_atomic_number(*z)
                .map(|e| e.symbol.clone())
                .unwrap_or_else(|_| z.to_string());
            warn!("Basis set has no functions for element {}", symbol);
        }
    }
    Ok(doc.restrict_to(requested))
}
