//! Format-name dispatch.
//!
//! The command-line layer picks a dumper by key ("orca", "nwchem", ...). Each
//! key maps to one [`BasisFormat`] variant, which knows its file extension and
//! which module does the work.

use crate::cgto::BasisSetDocument;
use crate::element::ElementTable;
use crate::error::{BasisError, Dumped, Result};
use crate::format_impl::{cfour, gaussian94, nwchem, orca, qchem, turbomole};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasisFormat {
    Gaussian94,
    Cfour,
    NWChem,
    Orca,
    QChem,
    Turbomole,
    Pyscf,
    Json,
}

/// Metadata embedded by formats that carry a basis-set header.
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl DumpOptions {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: None,
        }
    }

    pub(crate) fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(env!("CARGO_PKG_NAME"))
    }

    pub(crate) fn description_or_default(&self) -> String {
        self.description.clone().unwrap_or_else(|| {
            format!(
                "Created by {} version {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )
        })
    }
}

impl BasisFormat {
    pub const ALL: [BasisFormat; 8] = [
        BasisFormat::Gaussian94,
        BasisFormat::Cfour,
        BasisFormat::NWChem,
        BasisFormat::Orca,
        BasisFormat::QChem,
        BasisFormat::Turbomole,
        BasisFormat::Pyscf,
        BasisFormat::Json,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BasisFormat::Gaussian94 => "gaussian94",
            BasisFormat::Cfour => "cfour",
            BasisFormat::NWChem => "nwchem",
            BasisFormat::Orca => "orca",
            BasisFormat::QChem => "qchem",
            BasisFormat::Turbomole => "turbomole",
            BasisFormat::Pyscf => "pyscf",
            BasisFormat::Json => "json",
        }
    }

    /// Default file extension for files in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            BasisFormat::Gaussian94 => "g94",
            BasisFormat::Cfour => "GENBAS",
            BasisFormat::NWChem => "nw",
            BasisFormat::Orca => "orca",
            BasisFormat::QChem => "bas",
            BasisFormat::Turbomole => "turbomole",
            BasisFormat::Pyscf => "py.nw",
            BasisFormat::Json => "json",
        }
    }

    pub fn dumps(
        &self,
        doc: &BasisSetDocument,
        table: &ElementTable,
        options: &DumpOptions,
    ) -> Result<Dumped> {
        match self {
            BasisFormat::Gaussian94 => gaussian94::dumps(doc, table),
            BasisFormat::Cfour => cfour::dumps(doc, table, options),
            BasisFormat::NWChem => nwchem::dumps(doc, table),
            BasisFormat::Orca => orca::dumps(doc),
            BasisFormat::QChem => qchem::dumps(doc, table),
            BasisFormat::Turbomole => turbomole::dumps(doc, table, options),
            // PySCF reads NWChem input verbatim
            BasisFormat::Pyscf => nwchem::dumps(doc, table),
            BasisFormat::Json => {
                doc.validate()?;
                let mut text = doc.to_json()?;
                text.push('\n');
                Ok(Dumped::new(text))
            }
        }
    }

    /// Read a document back. Only Gaussian94 and JSON have readers.
    pub fn loads(&self, text: &str, table: &ElementTable) -> Result<BasisSetDocument> {
        match self {
            BasisFormat::Gaussian94 => gaussian94::parse(text, table),
            BasisFormat::Json => BasisSetDocument::from_json(text),
            other => Err(BasisError::ReadUnsupported(other.key().to_string())),
        }
    }
}

impl fmt::Display for BasisFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BasisFormat {
    type Err = BasisError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        BasisFormat::ALL
            .iter()
            .copied()
            .find(|f| f.key() == key)
            .ok_or_else(|| BasisError::UnknownFormat(s.to_string()))
    }
}
