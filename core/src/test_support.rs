//! On-disk DICOM fixtures for unit tests

use crate::extraction::tags::{
    ACQUISITION_DATE, ACQUISITION_TIME, COLUMNS, INSTANCE_NUMBER, PATIENT_NAME, PIXEL_DATA, ROWS,
    SERIES_DESCRIPTION, SERIES_INSTANCE_UID, SERIES_NUMBER, SOP_CLASS_UID, SOP_INSTANCE_UID,
    STUDY_DATE, STUDY_TIME,
};
use crate::error::{Result, SpurNoiseError};
use crate::host::{DataAccess, InputPreparer, PreparedInput, ResultSink};
use crate::selection::matches_filters;
use crate::types::{DicomMode, FilterSpec, PixelFrame, SeriesFileList};
use chrono::NaiveDateTime;
use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";

const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
const BITS_STORED: Tag = Tag(0x0028, 0x0101);
const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);

/// Attributes of a synthetic MR instance
pub struct InstanceSpec {
    pub series_uid: String,
    pub series_number: i32,
    pub instance_number: i32,
    pub description: String,
    pub study_date: String,
    pub pixels: Option<(u16, u16, Vec<u8>)>,
}

impl InstanceSpec {
    pub fn new(
        series_uid: &str,
        series_number: i32,
        instance_number: i32,
        description: &str,
    ) -> Self {
        Self {
            series_uid: series_uid.to_string(),
            series_number,
            instance_number,
            description: description.to_string(),
            study_date: "20230414".to_string(),
            pixels: None,
        }
    }

    pub fn with_study_date(mut self, study_date: &str) -> Self {
        self.study_date = study_date.to_string();
        self
    }

    /// 8-bit MONOCHROME2 pixel data, row-major
    pub fn with_pixels(mut self, rows: u16, columns: u16, samples: Vec<u8>) -> Self {
        self.pixels = Some((rows, columns, samples));
        self
    }

    pub fn to_dataset(&self) -> InMemDicomObject {
        let sop_uid = format!("{}.{}", self.series_uid, self.instance_number);
        let mut dcm = InMemDicomObject::from_element_iter([
            DataElement::new(SOP_CLASS_UID, VR::UI, PrimitiveValue::from(MR_IMAGE_STORAGE)),
            DataElement::new(SOP_INSTANCE_UID, VR::UI, PrimitiveValue::from(sop_uid)),
            DataElement::new(STUDY_DATE, VR::DA, PrimitiveValue::from(self.study_date.as_str())),
            DataElement::new(STUDY_TIME, VR::TM, PrimitiveValue::from("081106")),
            DataElement::new(ACQUISITION_DATE, VR::DA, PrimitiveValue::from("20230414")),
            DataElement::new(ACQUISITION_TIME, VR::TM, PrimitiveValue::from("081530")),
            DataElement::new(
                SERIES_DESCRIPTION,
                VR::LO,
                PrimitiveValue::from(self.description.as_str()),
            ),
            DataElement::new(PATIENT_NAME, VR::PN, PrimitiveValue::from("QA^SpurNoise")),
            DataElement::new(
                SERIES_INSTANCE_UID,
                VR::UI,
                PrimitiveValue::from(self.series_uid.as_str()),
            ),
            DataElement::new(
                SERIES_NUMBER,
                VR::IS,
                PrimitiveValue::from(self.series_number.to_string()),
            ),
            DataElement::new(
                INSTANCE_NUMBER,
                VR::IS,
                PrimitiveValue::from(self.instance_number.to_string()),
            ),
        ]);

        if let Some((rows, columns, samples)) = &self.pixels {
            dcm.put(DataElement::new(
                SAMPLES_PER_PIXEL,
                VR::US,
                PrimitiveValue::from(1_u16),
            ));
            dcm.put(DataElement::new(
                PHOTOMETRIC_INTERPRETATION,
                VR::CS,
                PrimitiveValue::from("MONOCHROME2"),
            ));
            dcm.put(DataElement::new(ROWS, VR::US, PrimitiveValue::from(*rows)));
            dcm.put(DataElement::new(COLUMNS, VR::US, PrimitiveValue::from(*columns)));
            dcm.put(DataElement::new(BITS_ALLOCATED, VR::US, PrimitiveValue::from(8_u16)));
            dcm.put(DataElement::new(BITS_STORED, VR::US, PrimitiveValue::from(8_u16)));
            dcm.put(DataElement::new(HIGH_BIT, VR::US, PrimitiveValue::from(7_u16)));
            dcm.put(DataElement::new(
                PIXEL_REPRESENTATION,
                VR::US,
                PrimitiveValue::from(0_u16),
            ));
            dcm.put(DataElement::new(
                PIXEL_DATA,
                VR::OB,
                PrimitiveValue::from(samples.clone()),
            ));
        }
        dcm
    }
}

/// Writes `spec` as an explicit VR little endian Part 10 file
pub fn write_instance(path: &Path, spec: &InstanceSpec) {
    let sop_uid = format!("{}.{}", spec.series_uid, spec.instance_number);
    let file_obj = spec
        .to_dataset()
        .with_meta(
            FileMetaTableBuilder::new()
                .media_storage_sop_class_uid(MR_IMAGE_STORAGE)
                .media_storage_sop_instance_uid(sop_uid)
                .transfer_syntax(EXPLICIT_VR_LE),
        )
        .unwrap();
    file_obj.write_to_file(path).unwrap();
}

/// In-memory study: per-series headers keyed by invented paths
pub struct FakeData {
    pub filelist: SeriesFileList,
    pub headers: HashMap<PathBuf, InMemDicomObject>,
}

impl FakeData {
    /// Builds a study from `(series description, instance count)` pairs
    ///
    /// Instance files are named `<series index>/<instance index>`. Each
    /// series carries its own study date, 2023-04-14 plus the series index.
    pub fn new(series: &[(&str, usize)]) -> Self {
        let mut filelist = Vec::new();
        let mut headers = HashMap::new();
        for (series_idx, (description, count)) in series.iter().enumerate() {
            let uid = format!("1.2.826.0.1.{}", series_idx + 1);
            let mut paths = Vec::new();
            for instance in 0..*count {
                let path = PathBuf::from(format!("{}/{}", series_idx, instance));
                let spec = InstanceSpec::new(
                    &uid,
                    series_idx as i32 + 1,
                    instance as i32 + 1,
                    description,
                )
                .with_study_date(&format!("202304{:02}", 14 + series_idx));
                headers.insert(path.clone(), spec.to_dataset());
                paths.push(path);
            }
            filelist.push(paths);
        }
        Self { filelist, headers }
    }
}

impl DataAccess for FakeData {
    fn all_series(&self) -> Result<Vec<Vec<InMemDicomObject>>> {
        Ok(self
            .filelist
            .iter()
            .map(|series| series.iter().map(|p| self.headers[p].clone()).collect())
            .collect())
    }

    fn instances_by_tags(&self, filters: &FilterSpec) -> Result<Vec<InMemDicomObject>> {
        Ok(self
            .filelist
            .iter()
            .flatten()
            .map(|p| &self.headers[p])
            .filter(|h| matches_filters(h, filters))
            .cloned()
            .collect())
    }

    fn series_filelist(&self) -> &SeriesFileList {
        &self.filelist
    }

    fn read_header(&self, path: &Path) -> Result<InMemDicomObject> {
        self.headers
            .get(path)
            .cloned()
            .ok_or_else(|| SpurNoiseError::DicomError(path.display().to_string()))
    }
}

/// Serves headers from a [`FakeData`] and a flat frame whose value is the
/// series index plus one
pub struct FakePreparer<'a> {
    pub data: &'a FakeData,
    pub prepared: RefCell<Vec<Vec<PathBuf>>>,
}

impl<'a> FakePreparer<'a> {
    pub fn new(data: &'a FakeData) -> Self {
        Self {
            data,
            prepared: RefCell::new(Vec::new()),
        }
    }
}

impl InputPreparer for FakePreparer<'_> {
    fn prepare_input(&self, files: &[PathBuf], headers_only: bool) -> Result<PreparedInput> {
        self.prepared.borrow_mut().push(files.to_vec());
        let first = &files[0];
        let series_idx: f32 = first
            .to_string_lossy()
            .split('/')
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0);
        let frames = if headers_only {
            Vec::new()
        } else {
            vec![PixelFrame::new(4, 4, vec![series_idx + 1.0; 16])]
        };
        Ok(PreparedInput {
            header: self.data.read_header(first)?,
            frames,
            mode: DicomMode::TwoD,
        })
    }
}

/// Records reported values in memory
#[derive(Default)]
pub struct FakeResults {
    pub datetimes: Vec<(String, NaiveDateTime)>,
    pub objects: Vec<(String, PathBuf)>,
    pub written: Cell<bool>,
}

impl ResultSink for FakeResults {
    fn add_date_time(&mut self, name: &str, value: NaiveDateTime) {
        self.datetimes.push((name.to_string(), value));
    }

    fn add_object(&mut self, name: &str, path: &Path) {
        self.objects.push((name.to_string(), path.to_path_buf()));
    }

    fn write(&self) -> Result<()> {
        self.written.set(true);
        Ok(())
    }
}
