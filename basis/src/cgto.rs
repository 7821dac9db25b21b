/* Contracted gaussian type orbital (CGTO) data model.

   Every parser produces and every dumper consumes these types. They are plain
   values: a parse hands the caller a fresh document, a dump only borrows one.
*/

use std::fs::File;
use std::io::{Read, Write};
use serde::{Deserialize, Serialize};
use crate::error::{BasisError, Result};

/// One shell: primitives sharing an angular momentum, with their weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contraction {
    pub angular_momentum: u32, // 0 = s, 1 = p, ...
    pub exponents: Vec<f64>,
    pub coefficients: Vec<f64>,
}

impl Contraction {
    pub fn new(angular_momentum: u32, exponents: Vec<f64>, coefficients: Vec<f64>) -> Self {
        Self {
            angular_momentum,
            exponents,
            coefficients,
        }
    }

    pub fn n_primitives(&self) -> usize {
        self.exponents.len()
    }

    /// Iterate over (exponent, coefficient) pairs in stored order.
    pub fn primitives(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.exponents
            .iter()
            .copied()
            .zip(self.coefficients.iter().copied())
    }
}

/// Radial part of an ECP for one angular momentum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcpRadialPart {
    pub title: String,
    pub powers: Vec<i32>,
    pub exponents: Vec<f64>,
    pub coefficients: Vec<f64>,
}

/// Effective core potential attached to one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ecp {
    pub name: String,
    pub max_angular_momentum: u32,
    pub n_core_electrons: u32,
    // indexed by angular momentum 0..=max_angular_momentum
    pub radial_parts: Vec<EcpRadialPart>,
}

/// Basis definition of one element within one basis set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomBasis {
    pub atomic_number: u32,
    pub functions: Vec<Contraction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecp: Option<Ecp>,
}

impl AtomBasis {
    pub fn new(atomic_number: u32) -> Self {
        Self {
            atomic_number,
            functions: Vec::new(),
            ecp: None,
        }
    }

    /// Check the length invariants of every shell and of the ECP.
    pub fn validate(&self) -> Result<()> {
        self.validate_functions()?;
        self.validate_ecp()
    }

    /// Every shell needs as many coefficients as exponents.
    pub fn validate_functions(&self) -> Result<()> {
        for (shell, fun) in self.functions.iter().enumerate() {
            if fun.coefficients.len() != fun.exponents.len() {
                return Err(BasisError::Precondition {
                    atomic_number: self.atomic_number,
                    shell,
                    message: format!(
                        "{} coefficients but {} exponents; lengths need to agree",
                        fun.coefficients.len(),
                        fun.exponents.len()
                    ),
                });
            }
        }
        Ok(())
    }

    fn validate_ecp(&self) -> Result<()> {
        if let Some(ecp) = &self.ecp {
            if ecp.radial_parts.len() != ecp.max_angular_momentum as usize + 1 {
                return Err(BasisError::Precondition {
                    atomic_number: self.atomic_number,
                    shell: ecp.radial_parts.len(),
                    message: format!(
                        "ECP {} declares max angular momentum {} but has {} radial parts",
                        ecp.name,
                        ecp.max_angular_momentum,
                        ecp.radial_parts.len()
                    ),
                });
            }
            for (shell, part) in ecp.radial_parts.iter().enumerate() {
                let n = part.powers.len();
                if part.exponents.len() != n || part.coefficients.len() != n {
                    return Err(BasisError::Precondition {
                        atomic_number: self.atomic_number,
                        shell,
                        message: format!("ECP radial part '{}' has ragged columns", part.title),
                    });
                }
            }
        }
        Ok(())
    }

    /// Shell summary like "3s2p1d", ordered by angular momentum.
    pub fn shell_summary(&self) -> String {
        use itertools::Itertools;
        self.functions
            .iter()
            .map(|f| f.angular_momentum)
            .sorted()
            .dedup_with_count()
            .map(|(count, am)| {
                let letter = crate::helper::am_letter(am).unwrap_or('?');
                format!("{}{}", count, letter.to_ascii_lowercase())
            })
            .collect()
    }
}

/// One basis set applied to a list of elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasisSetDocument {
    pub atoms: Vec<AtomBasis>,
}

impl BasisSetDocument {
    pub fn new(atoms: Vec<AtomBasis>) -> Self {
        Self { atoms }
    }

    pub fn atomic_numbers(&self) -> Vec<u32> {
        self.atoms.iter().map(|a| a.atomic_number).collect()
    }

    pub fn get(&self, atomic_number: u32) -> Option<&AtomBasis> {
        self.atoms.iter().find(|a| a.atomic_number == atomic_number)
    }

    pub fn has_ecp(&self) -> bool {
        self.atoms.iter().any(|a| a.ecp.is_some())
    }

    /// Atomic numbers of the atoms carrying an ECP, in document order.
    pub fn ecp_atomic_numbers(&self) -> Vec<u32> {
        self.atoms
            .iter()
            .filter(|a| a.ecp.is_some())
            .map(|a| a.atomic_number)
            .collect()
    }

    /// Keep only the listed elements, preserving document order.
    pub fn restrict_to(&self, atomic_numbers: &[u32]) -> Self {
        Self {
            atoms: self
                .atoms
                .iter()
                .filter(|a| atomic_numbers.contains(&a.atomic_number))
                .cloned()
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.atoms.iter().try_for_each(AtomBasis::validate)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    // Save to file in json format
    pub fn save_to_file(&self, filename: &str) -> std::io::Result<()> {
        let serialized = self
            .to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = File::create(filename)?;
        file.write_all(serialized.as_bytes())
    }

    // Load from file in json format
    pub fn load_from_file(filename: &str) -> std::io::Result<Self> {
        let mut file = File::open(filename)?;
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;

        Self::from_json(&buffer)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
