//! Structural parser for the ENSDF fixed-column format
//!
//! ENSDF files carry evaluated nuclear structure data as fixed-length
//! 80-character records with no delimiters or length prefixes. Structure is
//! inferred purely from fixed character positions: a discriminator character
//! classifies each record, an incrementing marker in column 6 merges
//! continuation lines, and the blank sentinel record separates datasets.
//!
//! ## Implementation
//!
//! Parsing one source produces an [EnsdfFile]: an ordered list of
//! [Dataset]s, each an ordered list of [RecordGroup]s exposing named fields
//! at the column ranges registered in [schema]. Field values decode lazily
//! through the converters in this crate, since most callers only ever need
//! a handful of fields.
//!
//! Lines that defeat classification are tagged [RecordType::Unknown] and
//! recorded as diagnostics; a parse only fails outright when the content
//! cannot be split into a single dataset block or a line cannot be aligned
//! to the fixed record width.
//!
//! For example:
//!
//! ```rust
//! use enstools_ensdf::{DatasetType, EnsdfFile, RecordType};
//!
//! // A minimal adopted-levels dataset (80-character records)
//! let mut content = String::new();
//! for record in [
//!     " 58NI    ADOPTED LEVELS, GAMMAS",
//!     " 58NI  L 0.0         0+",
//!     " 58NI  G 1454.28",
//!     "",
//! ] {
//!     content.push_str(&format!("{record: <80}\n"));
//! }
//!
//! let file = EnsdfFile::from_content(&content).unwrap();
//! let dataset = &file.datasets[0];
//!
//! assert_eq!(dataset.dataset_type(), DatasetType::AdoptedLevels);
//! assert_eq!(dataset.mass_number(), 58);
//! assert_eq!(dataset.atomic_number(), Some(28));
//! assert_eq!(dataset.record_groups()[1].record_type(), RecordType::Level);
//! ```

// Modules
mod convert;
mod dataset;
mod ensdf;
mod error;
mod line;
mod parsers;
mod reader;
mod record;

pub mod elements;
pub mod schema;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use ensdf::EnsdfFile;

#[doc(inline)]
pub use dataset::{Dataset, DatasetType, DecayInfo, DECAY_MODES};

#[doc(inline)]
pub use record::{RecordGroup, RecordType};

#[doc(inline)]
pub use line::{Line, RECORD_WIDTH};

#[doc(inline)]
pub use convert::{convert_energy, convert_time, Energy, PLANCK_EV_S, STABLE};

#[doc(inline)]
pub use error::{Diagnostic, DiagnosticKind, Error};
