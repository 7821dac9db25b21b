//! Q-Chem `$basis` section. Element blocks are separated by `****`.

use super::{check_contractions, shell_letter, warn_ecp_ignored};
use crate::cgto::BasisSetDocument;
use crate::element::ElementTable;
use crate::error::{Dumped, Result};
use crate::helper::format_general;

pub fn dumps(doc: &BasisSetDocument, table: &ElementTable) -> Result<Dumped> {
    check_contractions(doc)?;

    let mut lines = vec!["$basis".to_string()];
    for (i, atom) in doc.atoms.iter().enumerate() {
        if i > 0 {
            lines.push("****".to_string());
        }
        lines.push(format!("{:>2}  0", table.symbol(atom.atomic_number)?));
        for (shell, fun) in atom.functions.iter().enumerate() {
            lines.push(format!("{}{:4}  1.00", shell_letter(atom, shell)?, fun.n_primitives()));
            for (exp, coeff) in fun.primitives() {
                lines.push(format!("{:16.7} {}", exp, format_general(coeff, 16, 8)));
            }
        }
    }
    lines.push("$end".to_string());

    let mut dumped = Dumped::new(lines.join("\n"));
    warn_ecp_ignored(&mut dumped, "qchem", doc);
    Ok(dumped)
}
