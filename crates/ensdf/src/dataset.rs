//! Dataset structures and semantic classification

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::record::{RecordGroup, RecordType};
use enstools_utils::{f, OptionExt, StringExt};

/// Semantic classification of a dataset
///
/// Derived exclusively from pattern-matching the DSID field of the
/// identification record. Identifications matching none of the known
/// patterns are [DatasetType::Unknown] rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetType {
    /// Bibliography for a mass chain
    References,
    /// General comments on a mass chain or nuclide
    Comments,
    /// Adopted level (and gamma) properties of a nuclide
    AdoptedLevels,
    /// A single decay branch feeding the nuclide
    Decays,
    /// A single reaction populating the nuclide
    Reactions,
    /// Identification matched no known pattern
    Unknown,
}

impl std::fmt::Display for DatasetType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::References => "REFERENCES",
            Self::Comments => "COMMENTS",
            Self::AdoptedLevels => "ADOPTED LEVELS",
            Self::Decays => "DECAY",
            Self::Reactions => "REACTIONS",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// Decay-mode tokens expected in decay dataset identifications
pub const DECAY_MODES: &[&str] = &[
    "A", "B-", "B+", "EC", "EC+B+", "IT", "SF", "N", "P", "2B-", "2EC", "B-N",
    "B-2N", "B+P", "ECP", "B-A", "ECA", "14C",
];

/// Captured sub-fields of a decay dataset identification
///
/// A DSID such as `58NI EC DECAY (2.0 D)` names the decaying parent, the
/// decay mode, and an optional parent half-life. The symbol is kept as
/// written in the identification string; the half-life stays in its literal
/// form and decodes on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecayInfo {
    /// Mass number of the decaying parent
    pub parent_mass: u32,
    /// Element symbol of the parent, as written
    pub parent_symbol: String,
    /// Excitation-energy marker for decays from an isomeric state
    pub excitation: Option<u32>,
    /// Decay mode token, e.g. `B-`, `EC`, `IT`
    pub mode: String,
    /// Parent half-life literal, e.g. `2.0`
    pub half_life: Option<String>,
    /// Unit code of the half-life literal, e.g. `D`
    pub unit: Option<String>,
}

impl DecayInfo {
    /// Whether the decay mode is one of the expected tokens
    pub fn is_known_mode(&self) -> bool {
        DECAY_MODES.contains(&self.mode.as_str())
    }

    /// Captured parent half-life decoded to seconds
    pub fn half_life_seconds(&self) -> Option<f64> {
        convert::convert_time(
            "",
            self.half_life.as_deref().unwrap_or(""),
            self.unit.as_deref().unwrap_or(""),
        )
    }

    /// Display name of the parent nuclide, e.g. `Ni58`
    pub fn parent_name(&self) -> String {
        f!("{}{}", self.parent_symbol.capitalise(), self.parent_mass)
    }
}

/// One dataset block of an ENSDF file
///
/// A contiguous run of records terminated by the blank sentinel, describing
/// one mass number or one specific nuclide. The first record group is the
/// identification record by format convention, and every record group is
/// owned exclusively by its dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub(crate) mass_number: u32,
    pub(crate) element_symbol: String,
    pub(crate) atomic_number: Option<u32>,
    pub(crate) dataset_type: DatasetType,
    pub(crate) decay_info: Option<DecayInfo>,
    pub(crate) record_groups: Vec<RecordGroup>,
}

impl Dataset {
    /// Mass number of the subject nuclide or mass chain
    pub fn mass_number(&self) -> u32 {
        self.mass_number
    }

    /// Element symbol in display form, empty for mass-chain datasets
    pub fn element_symbol(&self) -> &str {
        &self.element_symbol
    }

    /// Atomic number resolved from the element symbol
    ///
    /// `None` for unrecognised symbols, e.g. exotic or unassigned nuclides.
    pub fn atomic_number(&self) -> Option<u32> {
        self.atomic_number
    }

    /// Semantic type of the dataset
    pub fn dataset_type(&self) -> DatasetType {
        self.dataset_type
    }

    /// Captured decay identification sub-fields, for decay datasets
    pub fn decay_info(&self) -> Option<&DecayInfo> {
        self.decay_info.as_ref()
    }

    /// Ordered record groups of the dataset
    pub fn record_groups(&self) -> &[RecordGroup] {
        &self.record_groups
    }

    /// The identification record opening the dataset
    pub fn identification(&self) -> &RecordGroup {
        &self.record_groups[0]
    }

    /// Trimmed DSID field of the identification record
    pub fn dsid(&self) -> &str {
        self.identification().field("DSID").unwrap_or("").trim()
    }

    /// Record groups of a particular type, in dataset order
    pub fn records_of(&self, record_type: RecordType) -> impl Iterator<Item = &RecordGroup> {
        self.record_groups
            .iter()
            .filter(move |group| group.record_type() == record_type)
    }

    /// Composite `A*100 + Z` nuclide identifier used by inventory tooling
    ///
    /// `None` when the element symbol does not resolve to an atomic number.
    pub fn nuclide_id(&self) -> Option<u32> {
        self.atomic_number.map(|z| self.mass_number * 100 + z)
    }

    /// Display name of the subject, e.g. `Ni58`, or the bare mass number
    /// for mass-chain datasets
    pub fn name(&self) -> String {
        f!("{}{}", self.element_symbol, self.mass_number)
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} (z {}, {} records)",
            self.name(),
            self.dataset_type,
            self.atomic_number.display(),
            self.record_groups.len()
        )
    }
}
