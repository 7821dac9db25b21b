//! Orca `%basis` block with one `NewGTO` section per element.
//!
//! Orca addresses elements by atomic number, so no element table is needed.
//! Primitives inside a shell are numbered from 1.

use super::{check_contractions, shell_letter, warn_ecp_ignored};
use crate::cgto::BasisSetDocument;
use crate::error::{Dumped, Result};
use crate::helper::format_general;

pub fn dumps(doc: &BasisSetDocument) -> Result<Dumped> {
    check_contractions(doc)?;

    let mut lines = vec!["%basis".to_string()];
    for atom in &doc.atoms {
        lines.push(format!("NewGTO {}", atom.atomic_number));
        for (shell, fun) in atom.functions.iter().enumerate() {
            lines.push(format!(" {}    {}", shell_letter(atom, shell)?, fun.n_primitives()));
            for (i, (exp, coeff)) in fun.primitives().enumerate() {
                lines.push(format!(
                    " {:2} {:15.7}    {}",
                    i + 1,
                    exp,
                    format_general(coeff, 11, 9)
                ));
            }
        }
        lines.push("end".to_string());
    }
    lines.push("end".to_string());

    let mut dumped = Dumped::new(lines.join("\n"));
    warn_ecp_ignored(&mut dumped, "orca", doc);
    Ok(dumped)
}
