// Crate types
use crate::dataset::{Dataset, DatasetType};
use crate::error::{Diagnostic, Result};
use crate::reader::Reader;

// Other libraries
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Data structure to store parsed ENSDF file content
///
/// This [EnsdfFile] is the primary data structure containing the parsed
/// file data and the root owner of every dataset and record group.
///
/// An ENSDF file is a sequence of datasets separated by blank sentinel
/// records, each covering one mass number or one specific nuclide:
///
/// | Dataset type                           | Content                          |
/// | -------------------------------------- | -------------------------------- |
/// | [References](DatasetType::References)  | mass-chain bibliography          |
/// | [Comments](DatasetType::Comments)      | general comments                 |
/// | [AdoptedLevels](DatasetType::AdoptedLevels) | adopted level/gamma properties |
/// | [Decays](DatasetType::Decays)          | a single decay branch            |
/// | [Reactions](DatasetType::Reactions)    | a single populating reaction     |
///
/// Lines that defeat classification are recorded in `diagnostics` with an
/// UNKNOWN tag left in the structural tree; they never abort the parse.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EnsdfFile {
    /// Ordered datasets, in file order
    pub datasets: Vec<Dataset>,
    /// Recoverable events recorded during the parse
    pub diagnostics: Vec<Diagnostic>,
}

impl EnsdfFile {
    /// Read an ENSDF file
    ///
    /// Parses the file at `path` into the [EnsdfFile] data structure for
    /// post-processing.
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    ///
    /// Example
    /// ```rust, no_run
    /// # use enstools_ensdf::EnsdfFile;
    /// // Read every dataset in a mass-chain file
    /// let file: EnsdfFile = EnsdfFile::from_file("path/to/ensdf.058").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {:?}", path.as_ref());
        let content = std::fs::read_to_string(path)?;
        Self::from_content(&content)
    }

    /// Parse ENSDF content already held in memory
    pub fn from_content(content: &str) -> Result<Self> {
        Reader::new().parse(content)
    }

    /// Datasets of a particular type, in file order
    ///
    /// For example:
    ///
    /// ```rust, no_run
    /// # use enstools_ensdf::{DatasetType, EnsdfFile};
    /// # let file = EnsdfFile::from_file("path/to/ensdf.058").unwrap();
    /// for decay in file.datasets_of(DatasetType::Decays) {
    ///     println!("{decay}");
    /// }
    /// ```
    pub fn datasets_of(&self, dataset_type: DatasetType) -> impl Iterator<Item = &Dataset> {
        self.datasets
            .iter()
            .filter(move |dataset| dataset.dataset_type() == dataset_type)
    }

    /// Find the adopted levels dataset for a specific nuclide
    ///
    /// If the dataset exists it is returned as `Some(&Dataset)`, otherwise
    /// `None`. The symbol is matched case-insensitively.
    pub fn adopted_levels(&self, mass_number: u32, element_symbol: &str) -> Option<&Dataset> {
        self.datasets_of(DatasetType::AdoptedLevels).find(|dataset| {
            dataset.mass_number() == mass_number
                && dataset.element_symbol().eq_ignore_ascii_case(element_symbol)
        })
    }
}
