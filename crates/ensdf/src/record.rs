//! Record classification and the logical record group

use log::warn;
use serde::{Deserialize, Serialize};

use crate::convert::{self, Energy, STABLE};
use crate::line::Line;
use crate::parsers;
use crate::schema;

/// The closed set of ENSDF record types
///
/// A record type is determined solely from characters at fixed positions
/// within a single line, with no lookahead. The character at column 8 is the
/// primary discriminator; COMMENT and IDENTIFICATION records are defined by
/// the *absence* of a discriminator, so classification is a flat priority
/// list rather than a lookup table.
///
/// ```rust
/// # use enstools_ensdf::RecordType;
/// // The ENSDF manual names are used for display
/// assert_eq!(RecordType::EcBetaPlus.to_string(), "EC / BETA PLUS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// Opens every dataset, carries the DSID identification string
    Identification,
    /// Evaluation history
    History,
    /// Mass-difference and separation energies
    QValue,
    /// Cross reference to related datasets
    CrossReference,
    /// Intensity normalisation factors
    Normalization,
    /// Production normalisation (`PN`)
    ProductionNormalization,
    /// A level of the nuclide
    Level,
    /// A beta-minus branch
    BetaMinus,
    /// An electron-capture / beta-plus branch
    EcBetaPlus,
    /// An alpha branch
    Alpha,
    /// A delayed-particle branch
    DelayedParticle,
    /// A gamma transition
    Gamma,
    /// The decaying parent of a decay dataset
    Parent,
    /// A bibliography entry
    Reference,
    /// Free-text comment
    Comment,
    /// The blank sentinel terminating a dataset
    End,
    /// Matched none of the classification rules
    Unknown,
}

impl RecordType {
    /// Classify one normalised line into a record type
    ///
    /// Total over all lines: anything matching none of the rules is
    /// [RecordType::Unknown], never an error. The caller decides whether to
    /// report it.
    ///
    /// Ordered, first match wins:
    /// 1. discriminator character at column 8, with `N` split into
    ///    NORMALIZATION and PRODUCTION NORMALIZATION on columns 6-7
    /// 2. comment character at column 7
    /// 3. the blank sentinel
    /// 4. identification, columns 7-9 all blank
    pub fn classify(line: &Line) -> Self {
        match line.column(8) {
            'H' => Self::History,
            'Q' => Self::QValue,
            'X' => Self::CrossReference,
            'P' => Self::Parent,
            'N' => {
                if line.columns(6, 7) == "PN" {
                    Self::ProductionNormalization
                } else {
                    Self::Normalization
                }
            }
            'L' => Self::Level,
            'B' => Self::BetaMinus,
            'E' => Self::EcBetaPlus,
            'A' => Self::Alpha,
            'D' => Self::DelayedParticle,
            'G' => Self::Gamma,
            'R' => Self::Reference,
            _ => {
                if matches!(line.column(7), 'c' | 'd' | 't' | 'C' | 'D' | 'T') {
                    Self::Comment
                } else if line.is_blank() {
                    Self::End
                } else if line.columns(7, 9) == "   " {
                    Self::Identification
                } else {
                    Self::Unknown
                }
            }
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::Identification => "IDENTIFICATION",
            Self::History => "HISTORY",
            Self::QValue => "Q-VALUE",
            Self::CrossReference => "CROSS-REFERENCE",
            Self::Normalization => "NORMALIZATION",
            Self::ProductionNormalization => "PRODUCTION NORMALIZATION",
            Self::Level => "LEVEL",
            Self::BetaMinus => "BETA MINUS",
            Self::EcBetaPlus => "EC / BETA PLUS",
            Self::Alpha => "ALPHA",
            Self::DelayedParticle => "DELAYED PARTICLE",
            Self::Gamma => "GAMMA",
            Self::Parent => "PARENT",
            Self::Reference => "REFERENCE",
            Self::Comment => "COMMENT",
            Self::End => "END",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// One logical record, possibly merged from several physical lines
///
/// Continuation lines carry an incrementing marker in column 6 and extend
/// the record opened by the line above them. The group preserves every
/// physical line in file order; named fields are sliced from the *first*
/// line through the column ranges registered for the record type in
/// [schema].
///
/// All lines of a group share the first line's mass-number prefix, and a
/// group is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordGroup {
    record_type: RecordType,
    lines: Vec<Line>,
}

impl RecordGroup {
    pub(crate) fn new(record_type: RecordType, lines: Vec<Line>) -> Self {
        debug_assert!(!lines.is_empty());
        Self { record_type, lines }
    }

    /// Type tag of the record
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// All physical lines composing the record, in file order
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The line that opened the record
    pub fn first_line(&self) -> &Line {
        &self.lines[0]
    }

    /// Named field registered for this record type in the column schema
    ///
    /// Slices the raw text of the first line on demand. The slice is
    /// returned untrimmed to preserve column alignment; `None` when the
    /// schema has no field of this name for the record type.
    pub fn field(&self, name: &str) -> Option<&str> {
        schema::record_fields(self.record_type)
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| self.first_line().columns(spec.start, spec.end))
    }

    /// Decoded half-life of the `T` field in seconds
    ///
    /// Stable nuclides decode to positive infinity. `None` when the record
    /// type carries no `T` field, the field is empty, or the value fails to
    /// decode (reported as a warning, never an error).
    pub fn half_life(&self) -> Option<f64> {
        let field = self.field("T")?.trim();
        if field == STABLE {
            return convert::convert_time(field, "", "");
        }
        if field.is_empty() {
            return None;
        }
        match parsers::time_field(field) {
            Ok((_, (value, unit))) => convert::convert_time("", value, unit),
            Err(_) => {
                warn!("Unreadable half-life field \"{field}\"");
                None
            }
        }
    }

    /// Decoded energy of the `E` field
    ///
    /// Symbolic placeholder energies ("X", "SN+500") decode to
    /// [Energy::Symbolic] and stay distinguishable from measured values.
    /// `None` when the record type carries no `E` field or it is empty.
    pub fn energy(&self) -> Option<Energy> {
        let field = self.field("E")?.trim();
        if field.is_empty() {
            return None;
        }
        Some(convert::convert_energy(Some(field), None))
    }
}

#[cfg(test)]
mod classifier_tests {
    use super::*;

    fn line(prefix: &str) -> Line {
        Line::normalise(1, prefix).unwrap()
    }

    #[test]
    fn column_8_discriminators() {
        assert_eq!(RecordType::classify(&line(" 58NI  H ")), RecordType::History);
        assert_eq!(RecordType::classify(&line(" 58NI  Q ")), RecordType::QValue);
        assert_eq!(
            RecordType::classify(&line(" 58NI  X ")),
            RecordType::CrossReference
        );
        assert_eq!(RecordType::classify(&line(" 58CU  P ")), RecordType::Parent);
        assert_eq!(RecordType::classify(&line(" 58NI  L ")), RecordType::Level);
        assert_eq!(
            RecordType::classify(&line(" 58CO  B ")),
            RecordType::BetaMinus
        );
        assert_eq!(
            RecordType::classify(&line(" 58NI  E ")),
            RecordType::EcBetaPlus
        );
        assert_eq!(RecordType::classify(&line("212PO  A ")), RecordType::Alpha);
        assert_eq!(
            RecordType::classify(&line(" 17N   D ")),
            RecordType::DelayedParticle
        );
        assert_eq!(RecordType::classify(&line(" 58NI  G ")), RecordType::Gamma);
        assert_eq!(
            RecordType::classify(&line(" 58    R ")),
            RecordType::Reference
        );
    }

    #[test]
    fn normalization_splits_on_pn() {
        assert_eq!(
            RecordType::classify(&line(" 58NI  N ")),
            RecordType::Normalization
        );
        assert_eq!(
            RecordType::classify(&line(" 58NIPNN ")),
            RecordType::ProductionNormalization
        );
    }

    #[test]
    fn comments_by_column_7() {
        for flag in ['c', 'd', 't', 'C', 'D', 'T'] {
            let text = format!(" 58NI {flag}  general comment text");
            assert_eq!(RecordType::classify(&line(&text)), RecordType::Comment);
        }
        // a record-type comment keeps the column 8 discriminator and wins
        assert_eq!(RecordType::classify(&line(" 58NI cL ")), RecordType::Level);
    }

    #[test]
    fn sentinel_and_identification() {
        assert_eq!(RecordType::classify(&line("")), RecordType::End);
        assert_eq!(
            RecordType::classify(&line(" 58NI    ADOPTED LEVELS")),
            RecordType::Identification
        );
    }

    #[test]
    fn unrecognised_lines_are_unknown() {
        assert_eq!(RecordType::classify(&line(" 58NI ZZZ")), RecordType::Unknown);
        assert_eq!(RecordType::classify(&line("garbage line")), RecordType::Unknown);
    }
}

#[cfg(test)]
mod field_tests {
    use super::*;

    fn group(prefix: &str) -> RecordGroup {
        let line = Line::normalise(1, prefix).unwrap();
        let record_type = RecordType::classify(&line);
        RecordGroup::new(record_type, vec![line])
    }

    #[test]
    fn fields_slice_the_first_line() {
        let ident = group(" 58NI    ADOPTED LEVELS, GAMMAS");
        assert_eq!(
            ident.field("DSID").map(str::trim),
            Some("ADOPTED LEVELS, GAMMAS")
        );
        assert_eq!(ident.field("NUCID"), Some(" 58NI"));
        // no T field is registered for identification records
        assert_eq!(ident.field("T"), None);
    }

    #[test]
    fn half_life_decodes_on_demand() {
        let mut text = format!("{: <80}", " 58NI  L 0.0");
        text.replace_range(39..45, "2.0 US");
        let level = group(&text);
        assert_eq!(level.half_life(), Some(2.0e-6));

        let mut text = format!("{: <80}", " 58NI  L 0.0");
        text.replace_range(39..45, "STABLE");
        let level = group(&text);
        assert_eq!(level.half_life(), Some(f64::INFINITY));

        // empty field is absent, not an error
        assert_eq!(group(" 58NI  L 0.0").half_life(), None);
    }

    #[test]
    fn energy_decodes_on_demand() {
        let level = group(" 58NI  L 1454.28");
        assert_eq!(level.energy(), Some(Energy::Numeric(1454.28)));

        let level = group(" 58NI  L X");
        assert_eq!(
            level.energy(),
            Some(Energy::Symbolic {
                value: 0.0,
                offset: 88.0
            })
        );
    }
}
