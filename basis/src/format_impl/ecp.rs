// ECP section of a Gaussian94 file.
//
// The section follows the last '****' and holds one record per element:
//
//   HF     0
//   HF-ECP     3     60
//   f potential
//     1
//   2      1.0000000              0.0000000
//   s-f potential
//     ...
//
// i.e. element line, '<name> <max_am> <n_core_electrons>', then for every
// angular momentum up to max_am a title, a component count and that many
// '<power> <exponent> <coefficient>' lines.

use super::gaussian94::Line;
use crate::cgto::{AtomBasis, Ecp, EcpRadialPart};
use crate::element::ElementTable;
use crate::error::{BasisError, Result};
use crate::helper::parse_fortran_float;
use tracing::debug;

pub(crate) struct EcpRecord {
    /// 1-based position of the record in the section
    pub index: usize,
    pub line: usize,
    pub atomic_number: u32,
    pub ecp: Ecp,
}

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Decide whether trailing content is an ECP section.
///
/// The first record must start with '<symbol> 0', have a three-field header,
/// a three-field first component line, and name an element that already has
/// a cGTO block.
pub(crate) fn looks_like_ecp(lines: &[Line], table: &ElementTable, atoms: &[AtomBasis]) -> bool {
    if lines.len() < 5 {
        return false;
    }
    let first = tokens(lines[0].1);
    if first.len() != 2 || first[1] != "0" {
        return false;
    }
    if tokens(lines[1].1).len() != 3 || tokens(lines[4].1).len() != 3 {
        return false;
    }
    table
        .by_symbol(first[0])
        .map(|e| atoms.iter().any(|a| a.atomic_number == e.atomic_number))
        .unwrap_or(false)
}

struct Cursor<'a, 'b> {
    lines: &'b [Line<'a>],
    pos: usize,
    record: usize,
}

impl<'a, 'b> Cursor<'a, 'b> {
    fn done(&self) -> bool {
        self.pos >= self.lines.len()
    }

    fn next(&mut self, expected: &str) -> Result<Line<'a>> {
        match self.lines.get(self.pos) {
            Some(&line) => {
                self.pos += 1;
                Ok(line)
            }
            None => {
                let last = self.lines.last().map(|l| l.0).unwrap_or(0);
                Err(self.error(last, format!("premature end of input, expected {}", expected)))
            }
        }
    }

    fn error(&self, line: usize, message: impl Into<String>) -> BasisError {
        BasisError::format_in_ecp(self.record, line, message)
    }

    fn integer<T: std::str::FromStr>(&self, line: Line, token: &str, what: &str) -> Result<T> {
        token.parse::<T>().map_err(|_| {
            self.error(
                line.0,
                format!("expected {} to be an integer, culprit line is '{}'", what, line.1),
            )
        })
    }

    fn float(&self, line: Line, token: &str) -> Result<f64> {
        parse_fortran_float(token).ok_or_else(|| {
            self.error(
                line.0,
                format!("could not convert '{}' to float, culprit line is '{}'", token, line.1),
            )
        })
    }
}

pub(crate) fn parse_ecp_section(lines: &[Line], table: &ElementTable) -> Result<Vec<EcpRecord>> {
    let mut cursor = Cursor {
        lines,
        pos: 0,
        record: 0,
    };
    let mut records = Vec::new();
    while !cursor.done() {
        cursor.record += 1;
        records.push(parse_record(&mut cursor, table)?);
    }
    Ok(records)
}

fn parse_record(cursor: &mut Cursor, table: &ElementTable) -> Result<EcpRecord> {
    let head = cursor.next("element line '<symbol> 0'")?;
    let fields = tokens(head.1);
    if fields.len() != 2 || fields[1] != "0" {
        return Err(cursor.error(
            head.0,
            format!("expected element line '<symbol> 0', found '{}'", head.1),
        ));
    }
    let atomic_number = table
        .by_symbol(fields[0])
        .map_err(|_| cursor.error(head.0, format!("invalid element symbol '{}'", fields[0])))?
        .atomic_number;

    let info = cursor.next("ECP header '<name> <max_am> <n_electrons>'")?;
    let fields = tokens(info.1);
    if fields.len() != 3 {
        return Err(cursor.error(
            info.0,
            format!("expected ECP header '<name> <max_am> <n_electrons>', found '{}'", info.1),
        ));
    }
    let name = fields[0].to_string();
    let max_angular_momentum: u32 = cursor.integer(info, fields[1], "maximal angular momentum")?;
    let n_core_electrons: u32 = cursor.integer(info, fields[2], "number of core electrons")?;

    // counts come from the text, so nothing is pre-sized from them
    let mut radial_parts = Vec::new();
    for am in 0..=max_angular_momentum {
        let title = cursor.next(&format!("title line for angular momentum {}", am))?;
        let count = cursor.next("number of ECP components")?;
        let fields = tokens(count.1);
        if fields.len() != 1 {
            return Err(cursor.error(
                count.0,
                format!("expected a single component count, found '{}'", count.1),
            ));
        }
        let n_components: usize = cursor.integer(count, fields[0], "number of components")?;

        let mut part = EcpRadialPart {
            title: title.1.to_string(),
            powers: Vec::new(),
            exponents: Vec::new(),
            coefficients: Vec::new(),
        };
        for _ in 0..n_components {
            let line = cursor.next("ECP component '<power> <exponent> <coefficient>'")?;
            let fields = tokens(line.1);
            if fields.len() != 3 {
                return Err(cursor.error(
                    line.0,
                    format!("expected exactly three columns in ECP block, culprit line is '{}'", line.1),
                ));
            }
            part.powers.push(cursor.integer(line, fields[0], "power")?);
            part.exponents.push(cursor.float(line, fields[1])?);
            part.coefficients.push(cursor.float(line, fields[2])?);
        }
        radial_parts.push(part);
    }

    debug!("parsed ECP {} for Z={}", name, atomic_number);
    Ok(EcpRecord {
        index: cursor.record,
        line: head.0,
        atomic_number,
        ecp: Ecp {
            name,
            max_angular_momentum,
            n_core_electrons,
            radial_parts,
        },
    })
}
