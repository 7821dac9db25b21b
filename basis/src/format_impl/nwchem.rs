//! NWChem `basis ... end` block. Also read by PySCF's `gto.parse`.

use super::{check_contractions, shell_letter, warn_ecp_ignored};
use crate::cgto::BasisSetDocument;
use crate::element::ElementTable;
use crate::error::{Dumped, Result};
use crate::helper::format_general;

pub fn dumps(doc: &BasisSetDocument, table: &ElementTable) -> Result<Dumped> {
    check_contractions(doc)?;

    let mut lines = vec!["basis".to_string()];
    for atom in &doc.atoms {
        let elem = table.by_atomic_number(atom.atomic_number)?;
        lines.push(format!("# {}", elem.name));

        for (shell, fun) in atom.functions.iter().enumerate() {
            lines.push(format!("  {}  {}", elem.symbol, shell_letter(atom, shell)?));
            for (exp, coeff) in fun.primitives() {
                lines.push(format!("    {:15.7}    {}", exp, format_general(coeff, 11, 9)));
            }
        }
    }
    lines.push("end".to_string());
    lines.push(String::new());

    let mut dumped = Dumped::new(lines.join("\n"));
    warn_ecp_ignored(&mut dumped, "nwchem", doc);
    Ok(dumped)
}
