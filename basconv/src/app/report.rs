use ::basis::{BasisSetDocument, ElementTable};
use tracing::info;

/// One line per element: symbol, shell count, shell letters and ECP.
pub fn summary_lines(doc: &BasisSetDocument, table: &ElementTable) -> Vec<String> {
    doc.atoms
        .iter()
        .map(|atom| {
            let symbol = table
                .by_atomic_number(atom.atomic_number)
                .map(|e| e.symbol.as_str())
                .unwrap_or("?");
            let mut line = format!(
                "{:<3} {:>3} shells  [{}]",
                symbol,
                atom.functions.len(),
                atom.shell_summary()
            );
            if let Some(ecp) = &atom.ecp {
                line.push_str(&format!(
                    "  ECP {} ({} core electrons)",
                    ecp.name, ecp.n_core_electrons
                ));
            }
            line
        })
        .collect()
}

pub fn report_summary(name: &str, doc: &BasisSetDocument, table: &ElementTable) {
    info!("Basis set {} covers {} elements:", name, doc.atoms.len());
    for line in summary_lines(doc, table) {
        info!("  {}", line);
    }
}
