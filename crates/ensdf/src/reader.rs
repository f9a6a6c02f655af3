//! Internal reader turning raw source content into datasets

// crate modules
use crate::dataset::{Dataset, DatasetType};
use crate::elements;
use crate::ensdf::EnsdfFile;
use crate::error::{Diagnostic, DiagnosticKind, Error, Result};
use crate::line::Line;
use crate::parsers;
use crate::record::{RecordGroup, RecordType};

// other libraries
use enstools_utils::StringExt;
use log::{trace, warn};

/// Internal parser state for one source
///
/// Collects the diagnostics raised along the way; everything else is a
/// single forward pass over the lines.
pub(crate) struct Reader {
    diagnostics: Vec<Diagnostic>,
}

// ! Internal API
impl Reader {
    pub(crate) fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Parse full source content into an [EnsdfFile]
    ///
    /// Splits on the blank sentinel, discarding the empty trailing block
    /// left by the end of the file. Normalisation failures are fatal for
    /// this source only; classification failures are recorded and parsing
    /// continues.
    pub(crate) fn parse(mut self, content: &str) -> Result<EnsdfFile> {
        let mut datasets = Vec::new();
        let mut block: Vec<Line> = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = Line::normalise(index + 1, raw)?;
            if line.is_blank() {
                if !block.is_empty() {
                    datasets.push(self.build_dataset(std::mem::take(&mut block)));
                }
            } else {
                block.push(line);
            }
        }
        // a final block without its terminating sentinel still counts
        if !block.is_empty() {
            datasets.push(self.build_dataset(block));
        }

        if datasets.is_empty() {
            return Err(Error::EmptyFile);
        }

        Ok(EnsdfFile {
            datasets,
            diagnostics: self.diagnostics,
        })
    }

    /// Build one dataset from a block of lines
    fn build_dataset(&mut self, block: Vec<Line>) -> Dataset {
        let first = block[0].clone();
        trace!("dataset block opening at line {}", first.number());

        let mass_number = match first.columns(1, 3).trim().parse::<u32>() {
            Ok(mass) => mass,
            Err(_) => {
                self.flag(&first, DiagnosticKind::BadMassNumber);
                0
            }
        };
        let element_symbol = first.columns(4, 5).trim().capitalise();
        let atomic_number = elements::atomic_number(&element_symbol);

        let record_groups = self.build_groups(block);

        let dsid = record_groups[0].field("DSID").unwrap_or("");
        let (dataset_type, decay_info) = parsers::dataset_type(dsid);
        if dataset_type == DatasetType::Unknown {
            self.flag(&first, DiagnosticKind::UnknownDatasetType);
        }

        Dataset {
            mass_number,
            element_symbol,
            atomic_number,
            dataset_type,
            decay_info,
            record_groups,
        }
    }

    /// Merge a block of lines into its ordered record groups
    ///
    /// A line continues the open group when it has the same record type, a
    /// strictly greater continuation marker in column 6 than the line above
    /// it, and the same mass-number prefix as the group's opening line. A
    /// repeated or non-increasing marker means a distinct record of the same
    /// type, not a continuation.
    ///
    /// A comment interleaved between continuation lines closes the run and
    /// the remaining continuation lines open a new group. The format allows
    /// this interleaving, so the truncation is kept rather than re-merged
    /// across the comment.
    fn build_groups(&mut self, lines: Vec<Line>) -> Vec<RecordGroup> {
        let mut groups = Vec::new();
        let mut lines = lines.into_iter();

        // every dataset opens with the identification record
        let mut current_type = RecordType::Identification;
        let mut current = vec![lines.next().expect("dataset blocks are never empty")];

        for line in lines {
            let record_type = RecordType::classify(&line);
            if record_type == RecordType::Unknown {
                self.flag(&line, DiagnosticKind::UnclassifiedRecord);
            }

            let previous = current.last().expect("open group is never empty");
            let continuation = record_type == current_type
                && line.column(6) > previous.column(6)
                && line.columns(1, 3) == current[0].columns(1, 3);

            if continuation {
                current.push(line);
            } else {
                groups.push(RecordGroup::new(current_type, std::mem::take(&mut current)));
                current_type = record_type;
                current.push(line);
            }
        }
        groups.push(RecordGroup::new(current_type, current));

        groups
    }

    /// Record a recoverable parsing event
    fn flag(&mut self, line: &Line, kind: DiagnosticKind) {
        warn!("{kind} at line {}\n......{}", line.number(), line.text());
        self.diagnostics.push(Diagnostic {
            line: line.number(),
            text: line.text().to_string(),
            kind,
        });
    }
}
