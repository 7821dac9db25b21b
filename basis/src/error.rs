//! Error and warning types shared by all parsers and dumpers.
//!
//! Hard failures travel through [`BasisError`]. Conditions that do not stop a
//! dump (ECP data silently dropped, experimental output) are collected as
//! [`Warning`]s next to the produced text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BasisError {
    /// Malformed input text, with the offending line (1-based, counted in
    /// the parsed string) or ECP record.
    #[error("format error at {location}: {message}")]
    Format { location: Location, message: String },

    /// A caller-built document violates a data model invariant.
    #[error("invalid basis for atomic number {atomic_number}, shell {shell}: {message}")]
    Precondition {
        atomic_number: u32,
        shell: usize,
        message: String,
    },

    #[error("unknown element: {0}")]
    UnknownElement(String),

    #[error("unknown basis format '{0}'")]
    UnknownFormat(String),

    #[error("reading the {0} format is not supported")]
    ReadUnsupported(String),

    #[error("duplicate atomic number {0} in element table")]
    DuplicateElement(u32),

    #[error("json error: {0}")]
    Json(String),
}

/// Where in the input a [`BasisError::Format`] was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Line(usize),
    EcpRecord { record: usize, line: usize },
    Document,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Line(line) => write!(f, "line {}", line),
            Location::EcpRecord { record, line } => {
                write!(f, "ECP record {} (line {})", record, line)
            }
            Location::Document => write!(f, "document"),
        }
    }
}

impl BasisError {
    pub(crate) fn format_at(line: usize, message: impl Into<String>) -> Self {
        BasisError::Format {
            location: Location::Line(line),
            message: message.into(),
        }
    }

    pub(crate) fn format_in_ecp(record: usize, line: usize, message: impl Into<String>) -> Self {
        BasisError::Format {
            location: Location::EcpRecord { record, line },
            message: message.into(),
        }
    }

    pub(crate) fn format_document(message: impl Into<String>) -> Self {
        BasisError::Format {
            location: Location::Document,
            message: message.into(),
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, BasisError::Format { .. })
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, BasisError::Precondition { .. })
    }
}

impl From<serde_json::Error> for BasisError {
    fn from(e: serde_json::Error) -> Self {
        BasisError::Json(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BasisError>;

/// Non-fatal condition raised while dumping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warning {
    /// The target format cannot carry ECP data; these atoms lost theirs.
    EcpIgnored {
        format: String,
        atomic_numbers: Vec<u32>,
    },
    /// Output for this format has not been validated against the program.
    Experimental { format: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::EcpIgnored {
                format,
                atomic_numbers,
            } => write!(
                f,
                "{} output ignores ECP definitions (atomic numbers {:?})",
                format, atomic_numbers
            ),
            Warning::Experimental { format } => {
                write!(f, "dumping basis sets in {} format is experimental", format)
            }
        }
    }
}

/// Text produced by a dumper together with its warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Dumped {
    pub text: String,
    pub warnings: Vec<Warning>,
}

impl Dumped {
    pub(crate) fn new(text: String) -> Self {
        Self {
            text,
            warnings: Vec::new(),
        }
    }

    /// Record a warning and log it straight away.
    pub(crate) fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }
}
