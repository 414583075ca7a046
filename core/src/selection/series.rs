use crate::error::Result;
use crate::extraction::read_header;
use crate::types::{FilterSpec, SeriesFileList};
use dicom_object::InMemDicomObject;
use std::path::Path;

use super::predicate::matches_filters;

/// Keeps only the files whose header satisfies `filters`
///
/// Headers are read from disk without pixel data. See
/// [`apply_filters_with`] for the full contract.
pub fn apply_filters(series_filelist: &SeriesFileList, filters: &FilterSpec) -> Result<SeriesFileList> {
    apply_filters_with(series_filelist, filters, read_header)
}

/// Keeps only the files whose header satisfies `filters`
///
/// `load_header` provides the data set of one file. The result has the
/// shape of the input: series order and file order within each series are
/// preserved, and series left without files are dropped. The input is not
/// modified.
///
/// # Errors
///
/// Propagates the first error returned by `load_header`.
pub fn apply_filters_with<F>(
    series_filelist: &SeriesFileList,
    filters: &FilterSpec,
    mut load_header: F,
) -> Result<SeriesFileList>
where
    F: FnMut(&Path) -> Result<InMemDicomObject>,
{
    let mut filtered = Vec::new();
    for instance_filelist in series_filelist {
        let mut kept = Vec::new();
        for path in instance_filelist {
            if matches_filters(&load_header(path)?, filters) {
                kept.push(path.clone());
            }
        }
        if !kept.is_empty() {
            filtered.push(kept);
        }
    }
    Ok(filtered)
}
