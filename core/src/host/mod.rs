//! Host collaborators
//!
//! The QA run consumes three narrow interfaces: [`DataAccess`] for the
//! study being analysed, [`InputPreparer`] for turning files into a header
//! plus pixel data, and [`ResultSink`] for reporting. Filesystem-backed
//! implementations live next to the traits; tests substitute fakes.

mod config;
mod directory;
mod prepare;
mod results;

pub use config::{ActionConfig, ModuleConfig};
pub use directory::StudyDirectory;
pub use prepare::{DicomInputPreparer, PreparedInput};
pub use results::{JsonResults, ResultEntry};

use crate::error::Result;
use crate::types::{FilterSpec, SeriesFileList};
use chrono::NaiveDateTime;
use dicom_object::InMemDicomObject;
use std::path::{Path, PathBuf};

/// Read access to the study under test
pub trait DataAccess {
    /// Headers of all instances, grouped per series
    fn all_series(&self) -> Result<Vec<Vec<InMemDicomObject>>>;

    /// Headers of every instance matching `filters`, in series order
    fn instances_by_tags(&self, filters: &FilterSpec) -> Result<Vec<InMemDicomObject>>;

    /// File paths of all instances, grouped per series
    fn series_filelist(&self) -> &SeriesFileList;

    /// Header of a single file, without pixel data
    fn read_header(&self, path: &Path) -> Result<InMemDicomObject>;
}

/// Loads a header and pixel data for a list of files
pub trait InputPreparer {
    fn prepare_input(&self, files: &[PathBuf], headers_only: bool) -> Result<PreparedInput>;
}

/// Collects reported values and persists them
pub trait ResultSink {
    fn add_date_time(&mut self, name: &str, value: NaiveDateTime);

    fn add_object(&mut self, name: &str, path: &Path);

    fn write(&self) -> Result<()>;
}
