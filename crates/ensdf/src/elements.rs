//! Element symbol lookup
//!
//! A single read-only table mapping element symbols to atomic numbers,
//! shared by every parse. ENSDF identifies nuclides by mass number and
//! element symbol only, so the atomic number has to be resolved here;
//! exotic notations that do not resolve stay unresolved rather than
//! failing the dataset.

/// Element symbols indexed by atomic number, starting from the neutron at Z=0
pub static SYMBOLS: [&str; 119] = [
    "Nn", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg",
    "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn",
    "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb",
    "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm",
    "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta",
    "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At",
    "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt",
    "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Atomic number for an element symbol, matched case-insensitively
///
/// `None` for anything outside the table, e.g. placeholder symbols used for
/// unassigned or exotic nuclides.
///
/// ```rust
/// # use enstools_ensdf::elements::atomic_number;
/// assert_eq!(atomic_number("Ni"), Some(28));
/// assert_eq!(atomic_number("NI"), Some(28));
/// assert_eq!(atomic_number("Xx"), None);
/// ```
pub fn atomic_number(symbol: &str) -> Option<u32> {
    SYMBOLS
        .iter()
        .position(|s| s.eq_ignore_ascii_case(symbol))
        .map(|z| z as u32)
}
