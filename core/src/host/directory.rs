use crate::error::{Result, SpurNoiseError};
use crate::extraction::tags::{
    get_int_value, get_string_value, INSTANCE_NUMBER, SERIES_INSTANCE_UID, SERIES_NUMBER,
};
use crate::extraction::{is_candidate_file, read_header};
use crate::selection::matches_filters;
use crate::types::{FilterSpec, SeriesFileList};
use dicom_object::InMemDicomObject;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::DataAccess;

struct Instance {
    path: PathBuf,
    header: InMemDicomObject,
    number: Option<i32>,
}

struct SeriesGroup {
    uid: String,
    number: Option<i32>,
    instances: Vec<Instance>,
}

/// A study read from a directory tree of DICOM files
///
/// Instances are grouped by SeriesInstanceUID. Series are ordered by
/// SeriesNumber then UID, instances by InstanceNumber then path; missing
/// numbers sort last.
pub struct StudyDirectory {
    series: Vec<Vec<InMemDicomObject>>,
    filelist: SeriesFileList,
}

impl StudyDirectory {
    /// Scans `dir` recursively
    ///
    /// Files that are not DICOM or cannot be read are skipped with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be listed or holds no readable DICOM.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut files = Vec::new();
        collect_files(dir, &mut files)?;
        files.sort();

        let mut groups: BTreeMap<String, SeriesGroup> = BTreeMap::new();
        for path in files {
            let header = match read_header(&path) {
                Ok(header) => header,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            debug!("Read header: {}", path.display());

            let uid = get_string_value(&header, SERIES_INSTANCE_UID)
                .filter(|uid| !uid.is_empty())
                .unwrap_or_else(|| path.display().to_string());
            let group = groups.entry(uid.clone()).or_insert_with(|| SeriesGroup {
                uid,
                number: get_int_value(&header, SERIES_NUMBER),
                instances: Vec::new(),
            });
            group.instances.push(Instance {
                number: get_int_value(&header, INSTANCE_NUMBER),
                path,
                header,
            });
        }

        if groups.is_empty() {
            return Err(SpurNoiseError::DicomError(format!(
                "no DICOM files found in {}",
                dir.display()
            )));
        }

        let mut groups: Vec<SeriesGroup> = groups.into_values().collect();
        groups.sort_by(|a, b| {
            sort_key(a.number)
                .cmp(&sort_key(b.number))
                .then_with(|| a.uid.cmp(&b.uid))
        });

        let mut series = Vec::with_capacity(groups.len());
        let mut filelist = Vec::with_capacity(groups.len());
        for mut group in groups {
            group.instances.sort_by(|a, b| {
                sort_key(a.number)
                    .cmp(&sort_key(b.number))
                    .then_with(|| a.path.cmp(&b.path))
            });
            let (paths, headers): (Vec<PathBuf>, Vec<InMemDicomObject>) = group
                .instances
                .into_iter()
                .map(|instance| (instance.path, instance.header))
                .unzip();
            filelist.push(paths);
            series.push(headers);
        }

        Ok(Self { series, filelist })
    }
}

fn sort_key(number: Option<i32>) -> i64 {
    number.map(i64::from).unwrap_or(i64::MAX)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else if path.is_file() && is_candidate_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

impl DataAccess for StudyDirectory {
    fn all_series(&self) -> Result<Vec<Vec<InMemDicomObject>>> {
        Ok(self.series.clone())
    }

    fn instances_by_tags(&self, filters: &FilterSpec) -> Result<Vec<InMemDicomObject>> {
        Ok(self
            .series
            .iter()
            .flatten()
            .filter(|header| matches_filters(header, filters))
            .cloned()
            .collect())
    }

    fn series_filelist(&self) -> &SeriesFileList {
        &self.filelist
    }

    fn read_header(&self, path: &Path) -> Result<InMemDicomObject> {
        read_header(path)
    }
}
