//! Element symbol/number lookup.
//!
//! The table is plain data passed into every parser and dumper, so callers can
//! swap in a source-specific table. Index 0 is always the dummy atom "X".

use crate::error::{BasisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
}

/// IUPAC symbols and names, indexed by atomic number.
const IUPAC: [(&str, &str); 119] = [
    ("X", "dummy"), ("H", "hydrogen"), ("He", "helium"),
    ("Li", "lithium"), ("Be", "beryllium"), ("B", "boron"),
    ("C", "carbon"), ("N", "nitrogen"), ("O", "oxygen"),
    ("F", "fluorine"), ("Ne", "neon"), ("Na", "sodium"),
    ("Mg", "magnesium"), ("Al", "aluminium"), ("Si", "silicon"),
    ("P", "phosphorus"), ("S", "sulphur"), ("Cl", "chlorine"),
    ("Ar", "argon"), ("K", "potassium"), ("Ca", "calcium"),
    ("Sc", "scandium"), ("Ti", "titanium"), ("V", "vanadium"),
    ("Cr", "chromium"), ("Mn", "manganese"), ("Fe", "iron"),
    ("Co", "cobalt"), ("Ni", "nickel"), ("Cu", "copper"),
    ("Zn", "zinc"), ("Ga", "gallium"), ("Ge", "germanium"),
    ("As", "arsenic"), ("Se", "selenium"), ("Br", "bromine"),
    ("Kr", "krypton"), ("Rb", "rubidium"), ("Sr", "strontium"),
    ("Y", "yttrium"), ("Zr", "zirconium"), ("Nb", "niobium"),
    ("Mo", "molybdenum"), ("Tc", "technetium"), ("Ru", "ruthenium"),
    ("Rh", "rhodium"), ("Pd", "palladium"), ("Ag", "silver"),
    ("Cd", "cadmium"), ("In", "indium"), ("Sn", "tin"),
    ("Sb", "antimony"), ("Te", "tellurium"), ("I", "iodine"),
    ("Xe", "xenon"), ("Cs", "caesium"), ("Ba", "barium"),
    ("La", "lanthanum"), ("Ce", "cerium"), ("Pr", "praseodymium"),
    ("Nd", "neodymium"), ("Pm", "promethium"), ("Sm", "samarium"),
    ("Eu", "europium"), ("Gd", "gadolinium"), ("Tb", "terbium"),
    ("Dy", "dysprosium"), ("Ho", "holmium"), ("Er", "erbium"),
    ("Tm", "thulium"), ("Yb", "ytterbium"), ("Lu", "lutetium"),
    ("Hf", "hafnium"), ("Ta", "tantalum"), ("W", "tungsten"),
    ("Re", "rhenium"), ("Os", "osmium"), ("Ir", "iridium"),
    ("Pt", "platinum"), ("Au", "gold"), ("Hg", "mercury"),
    ("Tl", "thallium"), ("Pb", "lead"), ("Bi", "bismuth"),
    ("Po", "polonium"), ("At", "astatine"), ("Rn", "radon"),
    ("Fr", "francium"), ("Ra", "radium"), ("Ac", "actinium"),
    ("Th", "thorium"), ("Pa", "protactinium"), ("U", "uranium"),
    ("Np", "neptunium"), ("Pu", "plutonium"), ("Am", "americium"),
    ("Cm", "curium"), ("Bk", "berkelium"), ("Cf", "californium"),
    ("Es", "einsteinium"), ("Fm", "fermium"), ("Md", "mendelevium"),
    ("No", "nobelium"), ("Lr", "lawrencium"), ("Rf", "rutherfordium"),
    ("Db", "dubnium"), ("Sg", "seaborgium"), ("Bh", "bohrium"),
    ("Hs", "hassium"), ("Mt", "meitnerium"), ("Ds", "darmstadtium"),
    ("Rg", "roentgenium"), ("Cn", "copernicium"), ("Nh", "nihonium"),
    ("Fl", "flerovium"), ("Mc", "moscovium"), ("Lv", "livermorium"),
    ("Ts", "tennessine"), ("Og", "oganesson"),
];

#[derive(Debug, Clone)]
pub struct ElementTable {
    elements: Vec<Element>,
    by_number: HashMap<u32, usize>,
}

impl ElementTable {
    /// Build a table from arbitrary records. Atomic numbers must be unique.
    pub fn new(elements: Vec<Element>) -> Result<Self> {
        let mut by_number = HashMap::with_capacity(elements.len());
        for (idx, elem) in elements.iter().enumerate() {
            if by_number.insert(elem.atomic_number, idx).is_some() {
                return Err(BasisError::DuplicateElement(elem.atomic_number));
            }
        }
        Ok(Self {
            elements,
            by_number,
        })
    }

    /// The IUPAC list, with the dummy "X" at atomic number 0.
    pub fn iupac() -> Self {
        let elements = IUPAC
            .iter()
            .enumerate()
            .map(|(z, (symbol, name))| Element {
                atomic_number: z as u32,
                symbol: symbol.to_string(),
                name: name.to_string(),
            })
            .collect::<Vec<_>>();
        let by_number = (0..elements.len()).map(|z| (z as u32, z)).collect();
        Self {
            elements,
            by_number,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn by_atomic_number(&self, atomic_number: u32) -> Result<&Element> {
        self.by_number
            .get(&atomic_number)
            .map(|&idx| &self.elements[idx])
            .ok_or_else(|| BasisError::UnknownElement(format!("atomic number {}", atomic_number)))
    }

    /// Case-insensitive symbol lookup.
    pub fn by_symbol(&self, symbol: &str) -> Result<&Element> {
        self.elements
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| BasisError::UnknownElement(format!("symbol {}", symbol)))
    }

    /// Case-insensitive name lookup.
    pub fn by_name(&self, name: &str) -> Result<&Element> {
        self.elements
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| BasisError::UnknownElement(format!("name {}", name)))
    }

    /// Resolve a number, a symbol or a name.
    ///
    /// Strings of up to three characters are symbols, except "tin" which is
    /// the only element name that short.
    pub fn find(&self, key: &str) -> Result<&Element> {
        let key = key.trim();
        if let Ok(z) = key.parse::<u32>() {
            return self.by_atomic_number(z);
        }
        if key.len() > 3 || key.eq_ignore_ascii_case("tin") {
            self.by_name(key)
        } else {
            self.by_symbol(key)
        }
    }

    pub(crate) fn symbol(&self, atomic_number: u32) -> Result<&str> {
        Ok(self.by_atomic_number(atomic_number)?.symbol.as_str())
    }
}

impl Default for ElementTable {
    fn default() -> Self {
        Self::iupac()
    }
}
