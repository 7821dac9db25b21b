//! Turbomole `$basis` data group.

use super::{check_contractions, shell_letter, warn_ecp_ignored};
use crate::basis::DumpOptions;
use crate::cgto::BasisSetDocument;
use crate::element::ElementTable;
use crate::error::{Dumped, Result, Warning};
use crate::helper::format_general;

pub fn dumps(doc: &BasisSetDocument, table: &ElementTable, options: &DumpOptions) -> Result<Dumped> {
    check_contractions(doc)?;
    let name = options.name_or_default();

    let mut lines = vec!["$basis".to_string()];
    for atom in &doc.atoms {
        lines.push("*".to_string());
        lines.push(format!(
            "{} {}",
            table.symbol(atom.atomic_number)?.to_lowercase(),
            name
        ));
        lines.push("*".to_string());
        for (shell, fun) in atom.functions.iter().enumerate() {
            let am = shell_letter(atom, shell)?.to_ascii_lowercase();
            lines.push(format!("  {:3}  {}", fun.n_primitives(), am));
            for (exp, coeff) in fun.primitives() {
                lines.push(format!("     {:15.7}    {}", exp, format_general(coeff, 11, 8)));
            }
        }
    }
    lines.push("*".to_string());
    lines.push("$end".to_string());

    let mut dumped = Dumped::new(lines.join("\n"));
    dumped.warn(Warning::Experimental {
        format: "turbomole".to_string(),
    });
    warn_ecp_ignored(&mut dumped, "turbomole", doc);
    Ok(dumped)
}
