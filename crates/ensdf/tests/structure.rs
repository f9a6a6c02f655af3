//! Integration tests for the structural parser

use enstools_ensdf::{DatasetType, DiagnosticKind, Energy, EnsdfFile, Error, RecordType};
use rstest::{fixture, rstest};

/// Pad one record prefix out to the fixed 80-character width
fn record(prefix: &str) -> String {
    format!("{prefix: <80}")
}

/// Overwrite a field at a 1-based column position
fn place(record: &mut String, column: usize, text: &str) {
    record.replace_range(column - 1..column - 1 + text.len(), text);
}

/// Join records plus the terminating blank sentinel into file content
fn block<S: AsRef<str>>(records: &[S]) -> String {
    let mut content: String = records.iter().map(|r| record(r.as_ref()) + "\n").collect();
    content.push_str(&record(""));
    content.push('\n');
    content
}

const ADOPTED: [&str; 4] = [
    " 58NI    ADOPTED LEVELS, GAMMAS",
    " 58NI  L 0.0         0+",
    " 58NI2 L %EC=100",
    " 58NI  G 1454.28",
];

fn decay_records() -> Vec<String> {
    let mut parent = record(" 58NI  P 0.0");
    place(&mut parent, 40, "2.0 D");
    vec![
        record(" 58CO    58NI EC DECAY (2.0 D)"),
        parent,
        record(" 58CO  N 1.0"),
        record(" 58CO  L 0.0"),
        record(" 58CO  E 231.2"),
    ]
}

#[fixture]
fn nickel() -> EnsdfFile {
    let content = block(&ADOPTED) + &block(&decay_records());
    EnsdfFile::from_content(&content).unwrap()
}

#[rstest]
fn datasets_are_segmented_in_order(nickel: EnsdfFile) {
    assert_eq!(nickel.datasets.len(), 2);
    assert!(nickel.diagnostics.is_empty());

    let adopted = &nickel.datasets[0];
    assert_eq!(adopted.dataset_type(), DatasetType::AdoptedLevels);
    assert_eq!(adopted.mass_number(), 58);
    assert_eq!(adopted.element_symbol(), "Ni");
    assert_eq!(adopted.atomic_number(), Some(28));
    assert_eq!(adopted.nuclide_id(), Some(5828));
    assert_eq!(adopted.dsid(), "ADOPTED LEVELS, GAMMAS");

    let decay = &nickel.datasets[1];
    assert_eq!(decay.dataset_type(), DatasetType::Decays);
    assert_eq!(decay.element_symbol(), "Co");
    assert_eq!(decay.atomic_number(), Some(27));
    assert_eq!(decay.nuclide_id(), Some(5827));
    assert_eq!(decay.name(), "Co58");
}

#[rstest]
fn continuation_lines_merge_into_one_group(nickel: EnsdfFile) {
    let adopted = &nickel.datasets[0];
    let types: Vec<RecordType> = adopted
        .record_groups()
        .iter()
        .map(|group| group.record_type())
        .collect();
    assert_eq!(
        types,
        vec![
            RecordType::Identification,
            RecordType::Level,
            RecordType::Gamma
        ]
    );
    assert_eq!(adopted.record_groups()[1].lines().len(), 2);
    assert_eq!(adopted.records_of(RecordType::Level).count(), 1);
}

#[rstest]
fn segmentation_round_trips(nickel: EnsdfFile) {
    let adopted = &nickel.datasets[0];
    let mut reconstructed: String = adopted
        .record_groups()
        .iter()
        .flat_map(|group| group.lines())
        .map(|line| line.text().to_string() + "\n")
        .collect();
    reconstructed.push_str(&record(""));
    reconstructed.push('\n');
    assert_eq!(reconstructed, block(&ADOPTED));
}

#[rstest]
fn decay_identification_captures(nickel: EnsdfFile) {
    let decay = &nickel.datasets[1];
    let info = decay.decay_info().unwrap();
    assert_eq!(info.parent_mass, 58);
    assert_eq!(info.parent_symbol, "NI");
    assert_eq!(info.excitation, None);
    assert_eq!(info.mode, "EC");
    assert_eq!(info.half_life.as_deref(), Some("2.0"));
    assert_eq!(info.unit.as_deref(), Some("D"));
    assert_eq!(info.half_life_seconds(), Some(172800.0));
    assert_eq!(info.parent_name(), "Ni58");
    assert!(info.is_known_mode());
}

#[rstest]
fn fields_decode_lazily(nickel: EnsdfFile) {
    let decay = &nickel.datasets[1];
    let parent = decay.records_of(RecordType::Parent).next().unwrap();
    assert_eq!(parent.half_life(), Some(172800.0));
    assert_eq!(parent.energy(), Some(Energy::Numeric(0.0)));

    let gamma = nickel.datasets[0]
        .records_of(RecordType::Gamma)
        .next()
        .unwrap();
    assert_eq!(gamma.energy(), Some(Energy::Numeric(1454.28)));
    // no T field is registered for gamma records
    assert_eq!(gamma.half_life(), None);
}

#[rstest]
fn same_type_without_increasing_marker_starts_a_new_group() {
    let content = block(&[
        " 58NI    ADOPTED LEVELS",
        " 58NI  L 0.0",
        " 58NI  L 100.0",
        " 58NI2 L continuation",
        " 58NI2 L repeated marker",
    ]);
    let file = EnsdfFile::from_content(&content).unwrap();
    let groups = file.datasets[0].record_groups();
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[1].lines().len(), 1);
    assert_eq!(groups[2].lines().len(), 2);
    assert_eq!(groups[3].lines().len(), 1);
}

#[rstest]
fn comment_interruption_truncates_the_run() {
    let content = block(&[
        " 58NI    ADOPTED LEVELS",
        " 58NI  L 0.0",
        " 58NI c a comment between continuations",
        " 58NI2 L stranded continuation",
    ]);
    let file = EnsdfFile::from_content(&content).unwrap();
    let types: Vec<RecordType> = file.datasets[0]
        .record_groups()
        .iter()
        .map(|group| group.record_type())
        .collect();
    assert_eq!(
        types,
        vec![
            RecordType::Identification,
            RecordType::Level,
            RecordType::Comment,
            RecordType::Level
        ]
    );
}

#[rstest]
fn continuations_never_cross_a_mass_prefix() {
    let content = block(&[
        " 58NI    ADOPTED LEVELS",
        " 58NI  L 0.0",
        " 59NI2 L different nuclide context",
    ]);
    let file = EnsdfFile::from_content(&content).unwrap();
    assert_eq!(file.datasets[0].record_groups().len(), 3);
}

#[rstest]
fn unclassifiable_lines_are_reported_not_fatal() {
    let content = block(&[
        " 58NI    ADOPTED LEVELS",
        " 58NI ZZZ",
        " 58NI  L 0.0",
    ]);
    let file = EnsdfFile::from_content(&content).unwrap();
    assert_eq!(file.datasets.len(), 1);
    assert_eq!(file.diagnostics.len(), 1);

    let diagnostic = &file.diagnostics[0];
    assert_eq!(diagnostic.line, 2);
    assert_eq!(diagnostic.kind, DiagnosticKind::UnclassifiedRecord);
    assert!(diagnostic.text.starts_with(" 58NI ZZZ"));

    // the unknown group still holds its line in the structural tree
    assert_eq!(
        file.datasets[0].record_groups()[1].record_type(),
        RecordType::Unknown
    );
}

#[rstest]
fn unmatched_dsid_is_unknown_with_zero_errors() {
    let content = block(&[" 58NI    SOME UNRECOGNISED STUDY"]);
    let file = EnsdfFile::from_content(&content).unwrap();
    assert_eq!(file.datasets[0].dataset_type(), DatasetType::Unknown);
    assert_eq!(file.diagnostics.len(), 1);
    assert_eq!(file.diagnostics[0].kind, DiagnosticKind::UnknownDatasetType);
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
fn unsegmentable_content_is_a_format_error(#[case] content: &str) {
    assert!(matches!(
        EnsdfFile::from_content(content),
        Err(Error::EmptyFile)
    ));
}

#[rstest]
fn unalignable_lines_fail_only_this_parse() {
    let overflow = "X".repeat(100);
    assert!(matches!(
        EnsdfFile::from_content(&overflow),
        Err(Error::Overflow {
            number: 1,
            length: 100
        })
    ));
    assert!(matches!(
        EnsdfFile::from_content(" 58NI é\n"),
        Err(Error::Encoding { number: 1 })
    ));
}

#[rstest]
fn dataset_finders(nickel: EnsdfFile) {
    assert_eq!(nickel.datasets_of(DatasetType::Decays).count(), 1);
    assert_eq!(nickel.datasets_of(DatasetType::References).count(), 0);
    assert!(nickel.adopted_levels(58, "ni").is_some());
    assert!(nickel.adopted_levels(59, "ni").is_none());
    assert!(nickel.adopted_levels(58, "co").is_none());
}
