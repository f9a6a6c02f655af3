//! Column schema for the standard one-card record formats
//!
//! Field positions follow Chapter III of the ENSDF manual: every record type
//! exposes named fields at fixed, 1-based inclusive column ranges. The
//! tables are process-wide constants, safe to share across any number of
//! concurrent parses.
//!
//! Extraction is driven by the schema rather than hard-wired into the record
//! types: [RecordGroup::field](crate::RecordGroup::field) looks the name up
//! here and slices the record's first line on demand.

use crate::record::RecordType;

/// A named field at a fixed 1-based inclusive column range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name from the ENSDF manual
    pub name: &'static str,
    /// First column of the field
    pub start: usize,
    /// Last column of the field
    pub end: usize,
}

const fn field(name: &'static str, start: usize, end: usize) -> FieldSpec {
    FieldSpec { name, start, end }
}

static IDENTIFICATION: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("DSID", 10, 39),
    field("DSREF", 40, 65),
    field("PUB", 66, 74),
    field("DATE", 75, 80),
];

static HISTORY: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("History", 10, 80),
];

static Q_VALUE: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("Q_", 10, 19),
    field("DQ_", 20, 21),
    field("SN", 22, 29),
    field("DSN", 30, 31),
    field("SP", 32, 39),
    field("DSP", 40, 41),
    field("QA", 42, 49),
    field("DQA", 50, 55),
    field("QREF", 56, 80),
];

static CROSS_REFERENCE: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("DSSYM", 9, 9),
    field("DSID", 10, 39),
];

static COMMENT: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("RTYPE", 8, 8),
    field("PSYM", 9, 9),
    field("CTEXT", 10, 80),
];

static PARENT: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("E", 10, 19),
    field("DE", 20, 21),
    field("J", 22, 39),
    field("T", 40, 49),
    field("DT", 50, 55),
    field("QP", 65, 74),
    field("DQP", 75, 76),
    field("ION", 77, 80),
];

static NORMALIZATION: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("NR", 10, 19),
    field("DNR", 20, 21),
    field("NT", 22, 29),
    field("DNT", 30, 31),
    field("BR", 32, 39),
    field("DBR", 40, 41),
    field("NB", 42, 49),
    field("DNB", 50, 55),
    field("NP", 56, 62),
    field("DNP", 63, 64),
];

static PRODUCTION_NORMALIZATION: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("NRxBR", 10, 19),
    field("UNC1", 20, 21),
    field("NTxBR", 22, 29),
    field("UNC2", 30, 31),
    field("NBxBR", 42, 49),
    field("UNC3", 50, 55),
    field("NP", 56, 62),
    field("UNC4", 63, 64),
    field("COM", 77, 77),
];

static LEVEL: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("E", 10, 19),
    field("DE", 20, 21),
    field("J", 22, 39),
    field("T", 40, 49),
    field("DT", 50, 55),
    field("L", 56, 64),
    field("S", 65, 74),
    field("DS", 75, 76),
    field("C", 77, 77),
    field("MS", 78, 79),
];

static BETA_MINUS: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("E", 10, 19),
    field("DE", 20, 21),
    field("IB", 22, 29),
    field("DIB", 30, 31),
    field("LOGFT", 42, 49),
    field("DFT", 50, 55),
    field("C", 77, 77),
    field("UN", 78, 79),
    field("Q", 80, 80),
];

static EC_BETA_PLUS: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("E", 10, 19),
    field("DE", 20, 21),
    field("IB", 22, 29),
    field("DIB", 30, 31),
    field("IE", 32, 39),
    field("DIE", 40, 41),
    field("LOGFT", 42, 49),
    field("DFT", 50, 55),
    field("TI", 65, 74),
    field("DTI", 75, 76),
    field("C", 77, 77),
    field("UN", 78, 79),
    field("Q", 80, 80),
];

static ALPHA: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("E", 10, 19),
    field("DE", 20, 21),
    field("IA", 22, 29),
    field("DIA", 30, 31),
    field("HF", 32, 39),
    field("DHF", 40, 41),
    field("C", 77, 77),
    field("Q", 80, 80),
];

static DELAYED_PARTICLE: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("E", 10, 19),
    field("DE", 20, 21),
    field("IP", 22, 29),
    field("DIP", 30, 31),
    field("EI", 32, 39),
    field("T", 40, 49),
    field("DT", 50, 55),
    field("L", 56, 64),
    field("C", 77, 77),
    field("COIN", 78, 78),
    field("Q", 80, 80),
];

static GAMMA: &[FieldSpec] = &[
    field("NUCID", 1, 5),
    field("Additional", 6, 6),
    field("RID", 7, 8),
    field("E", 10, 19),
    field("DE", 20, 21),
    field("RI", 22, 29),
    field("DRI", 30, 31),
    field("M", 32, 41),
    field("MR", 42, 49),
    field("DMR", 50, 55),
    field("CC", 56, 62),
    field("DCC", 63, 64),
    field("TI", 65, 74),
    field("DTI", 75, 76),
    field("C", 77, 77),
    field("COIN", 78, 78),
    field("Q", 80, 80),
];

static REFERENCE: &[FieldSpec] = &[
    field("MASS_NUMBER", 1, 3),
    field("Additional", 6, 6),
    field("RID", 7, 8),
];

static END: &[FieldSpec] = &[field("BLANK", 1, 80)];

/// Field table registered for a record type
///
/// Record types without a registered layout (UNKNOWN) expose no fields.
///
/// ```rust
/// # use enstools_ensdf::{schema::record_fields, RecordType};
/// let dsid = record_fields(RecordType::Identification)
///     .iter()
///     .find(|field| field.name == "DSID")
///     .unwrap();
/// assert_eq!((dsid.start, dsid.end), (10, 39));
/// ```
pub fn record_fields(record_type: RecordType) -> &'static [FieldSpec] {
    match record_type {
        RecordType::Identification => IDENTIFICATION,
        RecordType::History => HISTORY,
        RecordType::QValue => Q_VALUE,
        RecordType::CrossReference => CROSS_REFERENCE,
        RecordType::Comment => COMMENT,
        RecordType::Parent => PARENT,
        RecordType::Normalization => NORMALIZATION,
        RecordType::ProductionNormalization => PRODUCTION_NORMALIZATION,
        RecordType::Level => LEVEL,
        RecordType::BetaMinus => BETA_MINUS,
        RecordType::EcBetaPlus => EC_BETA_PLUS,
        RecordType::Alpha => ALPHA,
        RecordType::DelayedParticle => DELAYED_PARTICLE,
        RecordType::Gamma => GAMMA,
        RecordType::Reference => REFERENCE,
        RecordType::End => END,
        RecordType::Unknown => &[],
    }
}
