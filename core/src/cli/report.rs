use crate::extraction::tags::{get_string_value, SERIES_DESCRIPTION};
use dicom_object::InMemDicomObject;
use std::fmt;

/// Text listing of the series found in a study
pub struct SeriesReport<'a> {
    series: &'a [Vec<InMemDicomObject>],
}

impl<'a> SeriesReport<'a> {
    /// Creates a new series report
    pub fn new(series: &'a [Vec<InMemDicomObject>]) -> Self {
        Self { series }
    }
}

impl<'a> fmt::Display for SeriesReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The following series are found:")?;
        for instances in self.series {
            let description = instances
                .first()
                .and_then(|first| get_string_value(first, SERIES_DESCRIPTION))
                .unwrap_or_else(|| "unknown".to_string());
            writeln!(f, "{} with {} instances", description, instances.len())?;
        }
        Ok(())
    }
}
