//! Decoders for ENSDF field values
//!
//! Pure functions converting field text into typed values, following the
//! field formats of Chapter V of the ENSDF manual. A value that fails to
//! decode is reported as a warning and treated as absent; decoding never
//! raises an error.

use log::warn;
use serde::{Deserialize, Serialize};

/// Planck's constant (eV s), linking energy-equivalent widths to lifetimes
pub const PLANCK_EV_S: f64 = 4.13566766e-15;

/// Half-life field content marking a stable nuclide
pub const STABLE: &str = "STABLE";

/// Seconds multiplier for a half-life unit code
///
/// The energy-linked codes (`EV`, `KEV`, `MEV`) return the numerator of the
/// `h / E` linewidth relation rather than a multiplier.
fn unit_factor(unit: &str) -> Option<f64> {
    match unit {
        "Y" => Some(365.0 * 24.0 * 3600.0),
        "D" => Some(24.0 * 3600.0),
        "H" => Some(3600.0),
        "M" => Some(60.0),
        "S" => Some(1.0),
        "MS" => Some(1e-3),
        "US" => Some(1e-6),
        "NS" => Some(1e-9),
        "PS" => Some(1e-12),
        "FS" => Some(1e-15),
        "AS" => Some(1e-18),
        "EV" => Some(PLANCK_EV_S),
        "KEV" => Some(PLANCK_EV_S / 1e3),
        "MEV" => Some(PLANCK_EV_S / 1e6),
        _ => None,
    }
}

/// Convert a half-life field to seconds
///
/// Follows section V.14 of the ENSDF manual. The `stability` token takes
/// precedence: a stable nuclide has an infinite half-life regardless of the
/// other inputs. An empty value with an empty unit means the field is
/// absent. For the energy-linked units the value is an energy-equivalent
/// linewidth and the result is `h / E`; for time units it is
/// `multiplier * value`.
///
/// ```rust
/// # use enstools_ensdf::convert_time;
/// assert_eq!(convert_time("STABLE", "", ""), Some(f64::INFINITY));
/// assert_eq!(convert_time("", "", ""), None);
/// assert_eq!(convert_time("", "2", "Y"), Some(2.0 * 365.0 * 24.0 * 3600.0));
/// ```
pub fn convert_time(stability: &str, value: &str, unit: &str) -> Option<f64> {
    if stability.trim() == STABLE {
        return Some(f64::INFINITY);
    }
    if value.is_empty() && unit.is_empty() {
        return None;
    }
    if unit.is_empty() {
        // not foreseen by the manual, but such fields exist
        warn!("Missing units in field of type T");
        return None;
    }
    let factor = match unit_factor(unit) {
        Some(factor) => factor,
        None => {
            warn!("Unknown half-life unit \"{unit}\"");
            return None;
        }
    };
    let number = match value.parse::<f64>() {
        Ok(number) => number,
        Err(_) => {
            warn!("Unreadable half-life value \"{value}\"");
            return None;
        }
    };
    if unit.ends_with("EV") {
        Some(factor / number)
    } else {
        Some(factor * number)
    }
}

/// A decoded energy field value
///
/// Level energies are usually plain numbers, but the literature sometimes
/// reports only a qualitative ordering through placeholder letters ("X",
/// "X+Y", "SN+500"). Placeholders must never collide with measured values
/// as equal floats, so they are carried in a separate variant: `value`
/// holds the numeric part of the sum and `offset` the signed placeholder
/// magnitude, encoded as the summed character codes of the placeholder
/// token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Energy {
    /// Plain numeric energy
    Numeric(f64),
    /// Energy involving an unresolved placeholder
    Symbolic {
        /// Numeric part of the sum
        value: f64,
        /// Signed magnitude of the placeholder encoding
        offset: f64,
    },
}

impl Energy {
    /// Numeric part of the energy, symbolic or not
    pub fn value(&self) -> f64 {
        match self {
            Self::Numeric(value) => *value,
            Self::Symbolic { value, .. } => *value,
        }
    }

    /// Whether the energy involves an unresolved placeholder
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Self::Symbolic { .. })
    }
}

/// Convert up to two energy tokens into their summed value
///
/// Follows section V.18 of the ENSDF manual: a level energy plus an
/// optional offset term such as "+X". Absent tokens contribute zero.
///
/// ```rust
/// # use enstools_ensdf::{convert_energy, Energy};
/// assert_eq!(convert_energy(None, None), Energy::Numeric(0.0));
/// assert_eq!(convert_energy(Some("12.5"), None), Energy::Numeric(12.5));
///
/// // an unresolved level spacing stays type-distinguishable
/// let spacing = convert_energy(Some("662.1"), Some("+X"));
/// assert_eq!(spacing, Energy::Symbolic { value: 662.1, offset: 88.0 });
/// ```
pub fn convert_energy(e1: Option<&str>, e2: Option<&str>) -> Energy {
    let (v1, s1) = energy_term(e1);
    let (v2, s2) = energy_term(e2);
    let (value, offset) = (v1 + v2, s1 + s2);
    if offset == 0.0 {
        Energy::Numeric(value)
    } else {
        Energy::Symbolic { value, offset }
    }
}

/// Numeric and symbolic contributions of a single energy token
///
/// Scientific notation keeps `E` out of the placeholder alphabet, so
/// "2.3E+3" is numeric while "X+Y" is symbolic. The placeholder magnitude
/// sums the character codes of every non-sign character and is negated
/// when a minus sign is present.
fn energy_term(token: Option<&str>) -> (f64, f64) {
    let token = match token {
        Some(token) => token.trim(),
        None => return (0.0, 0.0),
    };
    if token.is_empty() {
        return (0.0, 0.0);
    }
    if token.chars().any(|c| c.is_ascii_uppercase() && c != 'E') {
        let magnitude: f64 = token
            .chars()
            .filter(|c| !matches!(c, '+' | '-'))
            .map(|c| c as u32 as f64)
            .sum();
        let sign = if token.contains('-') { -1.0 } else { 1.0 };
        (0.0, sign * magnitude)
    } else {
        match token.parse::<f64>() {
            Ok(number) => (number, 0.0),
            Err(_) => {
                warn!("Unreadable energy value \"{token}\"");
                (0.0, 0.0)
            }
        }
    }
}


#[cfg(test)]
mod energy_tests {
    use super::*;

    #[test]
    fn absent_tokens_contribute_zero() {
        assert_eq!(convert_energy(None, None), Energy::Numeric(0.0));
        assert_eq!(convert_energy(Some("  "), None), Energy::Numeric(0.0));
        assert_eq!(convert_energy(Some("12.5"), None), Energy::Numeric(12.5));
        assert_eq!(convert_energy(None, Some("12.5")), Energy::Numeric(12.5));
    }

    #[test]
    fn numeric_tokens_sum() {
        assert_eq!(convert_energy(Some("100.0"), Some("25.5")), Energy::Numeric(125.5));
        assert_eq!(convert_energy(Some("2.3E+3"), None), Energy::Numeric(2300.0));
    }

    #[test]
    fn placeholders_encode_by_character_code() {
        // X = 88, Y = 89
        assert_eq!(
            convert_energy(Some("X"), None),
            Energy::Symbolic { value: 0.0, offset: 88.0 }
        );
        assert_eq!(
            convert_energy(Some("X+Y"), None),
            Energy::Symbolic { value: 0.0, offset: 177.0 }
        );
        assert_eq!(
            convert_energy(Some("-X"), None),
            Energy::Symbolic { value: 0.0, offset: -88.0 }
        );
    }

    #[test]
    fn numeric_and_placeholder_terms_coexist() {
        assert_eq!(
            convert_energy(Some("662.1"), Some("+X")),
            Energy::Symbolic { value: 662.1, offset: 88.0 }
        );
        assert!(convert_energy(Some("662.1"), Some("+X")).is_symbolic());
        assert_eq!(convert_energy(Some("662.1"), Some("+X")).value(), 662.1);
    }
}
