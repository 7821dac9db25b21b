//! Gaussian94 basis-set format.
//!
//! ```text
//! ****
//! H     0
//! S    3   1.00
//!       3.42525091             0.15432897
//!       0.62391373             0.53532814
//!       0.16885540             0.44463454
//! ****
//! ```
//!
//! Element blocks are separated by `****` lines. Every shell header names the
//! angular momentum and the number of primitive lines that follow; `SP`
//! shells carry an s and a p coefficient column over a shared exponent
//! column. Numbers may use Fortran `D` exponents and lines starting with `!`
//! are comments. An ECP section may follow the last `****`.

use super::ecp::{self, EcpRecord};
use super::{check_contractions, shell_letter, warn_ecp_ignored};
use crate::cgto::{AtomBasis, BasisSetDocument, Contraction};
use crate::element::ElementTable;
use crate::error::{BasisError, Dumped, Result};
use crate::helper::{am_from_letter, format_general, parse_fortran_float, strip_comments};
use tracing::debug;

const MARKER: &str = "****";

/// A comment-stripped, non-empty input line with its 1-based line number.
pub(crate) type Line<'a> = (usize, &'a str);

/// Parse a Gaussian94 document, including a trailing ECP section.
pub fn parse(text: &str, table: &ElementTable) -> Result<BasisSetDocument> {
    parse_with(text, table, true)
}

/// Parse a Gaussian94 document without ECP support: anything after the
/// final `****` is an error.
pub fn parse_cgto(text: &str, table: &ElementTable) -> Result<BasisSetDocument> {
    parse_with(text, table, false)
}

fn parse_with(text: &str, table: &ElementTable, allow_ecp: bool) -> Result<BasisSetDocument> {
    let lines: Vec<Line> = strip_comments(text)
        .into_iter()
        .filter(|(_, l)| !l.is_empty())
        .collect();

    let markers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, (_, l))| *l == MARKER)
        .map(|(i, _)| i)
        .collect();

    let (first, last) = match (markers.first(), markers.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => {
            return Err(BasisError::format_document(
                "at least one '****' sequence in the input is expected",
            ))
        }
    };

    if let Some(&(line_no, _)) = lines[..first].first() {
        return Err(BasisError::format_at(
            line_no,
            "found content before the initial '****' sequence",
        ));
    }

    let mut atoms = Vec::with_capacity(markers.len().saturating_sub(1));
    for pair in markers.windows(2) {
        let block = &lines[pair[0] + 1..pair[1]];
        if block.is_empty() {
            return Err(BasisError::format_at(
                lines[pair[1]].0,
                "empty element block between two '****' sequences",
            ));
        }
        atoms.push(parse_element_block(block, table)?);
    }

    let trailing = &lines[last + 1..];
    if trailing.is_empty() {
        return Ok(BasisSetDocument::new(atoms));
    }

    if allow_ecp && ecp::looks_like_ecp(trailing, table, &atoms) {
        let records = ecp::parse_ecp_section(trailing, table)?;
        merge_ecp(&mut atoms, records)?;
        return Ok(BasisSetDocument::new(atoms));
    }

    Err(BasisError::format_at(
        trailing[0].0,
        "unrecognized trailing content after the final '****' sequence",
    ))
}

fn parse_element_block(block: &[Line], table: &ElementTable) -> Result<AtomBasis> {
    let (line_no, header) = block[0];
    let symbol = header.split_whitespace().next().unwrap_or_default();
    let element = table.by_symbol(symbol).map_err(|_| {
        BasisError::format_at(
            line_no,
            format!("element block starting with invalid element symbol '{}'", symbol),
        )
    })?;

    let mut atom = AtomBasis::new(element.atomic_number);
    let mut idx = 1;
    while idx < block.len() {
        let (line_no, line) = block[idx];
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(BasisError::format_at(
                line_no,
                format!("expected shell header '<AM> <n_contr> <scale>', found '{}'", line),
            ));
        }

        let n_contr: usize = tokens[1].parse().map_err(|_| {
            BasisError::format_at(
                line_no,
                format!(
                    "expected number of primitives after the AM letter to be an integer, not '{}'",
                    tokens[1]
                ),
            )
        })?;
        if n_contr == 0 {
            return Err(BasisError::format_at(line_no, "shell with zero primitives"));
        }

        let remaining = block.len() - idx - 1;
        if n_contr > remaining {
            return Err(BasisError::format_at(
                line_no,
                format!(
                    "shell announces {} primitives but only {} lines remain in the block",
                    n_contr, remaining
                ),
            ));
        }
        let data = &block[idx + 1..idx + 1 + n_contr];

        if tokens[0].eq_ignore_ascii_case("sp") {
            let columns = parse_columns(data, 3)?;
            let exponents: Vec<f64> = columns.iter().map(|row| row[0]).collect();
            atom.functions.push(Contraction::new(
                0,
                exponents.clone(),
                columns.iter().map(|row| row[1]).collect(),
            ));
            atom.functions.push(Contraction::new(
                1,
                exponents,
                columns.iter().map(|row| row[2]).collect(),
            ));
        } else {
            let am = am_from_letter(tokens[0]).ok_or_else(|| {
                BasisError::format_at(
                    line_no,
                    format!("invalid angular momentum string '{}'", tokens[0]),
                )
            })?;
            let columns = parse_columns(data, 2)?;
            atom.functions.push(Contraction::new(
                am,
                columns.iter().map(|row| row[0]).collect(),
                columns.iter().map(|row| row[1]).collect(),
            ));
        }
        idx += n_contr + 1;
    }

    debug!(
        "parsed element block for Z={} with {} shells",
        atom.atomic_number,
        atom.functions.len()
    );
    Ok(atom)
}

/// Parse `n_cols` Fortran floats from every data line.
fn parse_columns(data: &[Line], n_cols: usize) -> Result<Vec<Vec<f64>>> {
    data.iter()
        .map(|&(line_no, line)| -> Result<Vec<f64>> {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != n_cols {
                return Err(BasisError::format_at(
                    line_no,
                    format!(
                        "expected exactly {} columns in contraction block, culprit line is '{}'",
                        n_cols, line
                    ),
                ));
            }
            fields
                .iter()
                .map(|f| {
                    parse_fortran_float(f).ok_or_else(|| {
                        BasisError::format_at(
                            line_no,
                            format!("could not convert '{}' to float, culprit line is '{}'", f, line),
                        )
                    })
                })
                .collect()
        })
        .collect()
}

/// Attach parsed ECP records to their atoms. Elements without a cGTO block
/// become new entries after all cGTO elements.
fn merge_ecp(atoms: &mut Vec<AtomBasis>, records: Vec<EcpRecord>) -> Result<()> {
    for rec in records {
        match atoms.iter_mut().find(|a| a.atomic_number == rec.atomic_number) {
            Some(atom) if atom.ecp.is_some() => {
                return Err(BasisError::format_in_ecp(
                    rec.index,
                    rec.line,
                    format!("second ECP definition for atomic number {}", rec.atomic_number),
                ));
            }
            Some(atom) => atom.ecp = Some(rec.ecp),
            None => {
                debug!("ECP for Z={} has no matching cGTO block", rec.atomic_number);
                let mut atom = AtomBasis::new(rec.atomic_number);
                atom.ecp = Some(rec.ecp);
                atoms.push(atom);
            }
        }
    }
    Ok(())
}

/// Write a document in Gaussian94 format. ECP data is not written.
pub fn dumps(doc: &BasisSetDocument, table: &ElementTable) -> Result<Dumped> {
    check_contractions(doc)?;

    let mut lines: Vec<String> = Vec::new();
    for atom in &doc.atoms {
        lines.push(MARKER.to_string());
        lines.push(format!("{}     0", table.symbol(atom.atomic_number)?.to_uppercase()));

        for (shell, fun) in atom.functions.iter().enumerate() {
            let am = shell_letter(atom, shell)?;
            lines.push(format!("{}   {}   1.00", am, fun.n_primitives()));
            for (exp, coeff) in fun.primitives() {
                lines.push(format!("{:15.7}    {}", exp, format_general(coeff, 11, 8)));
            }
        }
    }
    lines.push(MARKER.to_string());
    lines.push(String::new());

    let mut dumped = Dumped::new(lines.join("\n"));
    warn_ecp_ignored(&mut dumped, "gaussian94", doc);
    Ok(dumped)
}
