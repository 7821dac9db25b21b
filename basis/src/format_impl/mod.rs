//! Readers and writers for the supported program formats.
//!
//! Gaussian94 is the only text format with a reader. The other modules are
//! pure formatting transforms over [`BasisSetDocument`].

pub mod cfour;
mod ecp;
pub mod gaussian94;
pub mod nwchem;
pub mod orca;
pub mod qchem;
pub mod turbomole;

#[cfg(test)]
mod tests;

use crate::cgto::{AtomBasis, BasisSetDocument};
use crate::error::{BasisError, Dumped, Result, Warning};
use crate::helper::am_letter;

/// Reject documents whose shells have mismatched column lengths.
pub(crate) fn check_contractions(doc: &BasisSetDocument) -> Result<()> {
    doc.atoms.iter().try_for_each(AtomBasis::validate_functions)
}

/// Shell letter for a contraction, or a precondition error past 'O'.
pub(crate) fn shell_letter(atom: &AtomBasis, shell: usize) -> Result<char> {
    let am = atom.functions[shell].angular_momentum;
    am_letter(am).ok_or_else(|| BasisError::Precondition {
        atomic_number: atom.atomic_number,
        shell,
        message: format!("angular momentum {} has no shell letter", am),
    })
}

/// Note that ECP data is dropped by a format that cannot express it.
pub(crate) fn warn_ecp_ignored(dumped: &mut Dumped, format: &str, doc: &BasisSetDocument) {
    let atomic_numbers = doc.ecp_atomic_numbers();
    if !atomic_numbers.is_empty() {
        dumped.warn(Warning::EcpIgnored {
            format: format.to_string(),
            atomic_numbers,
        });
    }
}
