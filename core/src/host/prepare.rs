use crate::error::{Result, SpurNoiseError};
use crate::extraction::{decode_first_frame, decode_frames, read_full, read_header};
use crate::types::{DicomMode, PixelFrame};
use dicom_object::InMemDicomObject;
use log::debug;
use std::path::PathBuf;

use super::InputPreparer;

/// Header and pixel data of one series
#[derive(Debug, Clone)]
pub struct PreparedInput {
    /// Header of the first file
    pub header: InMemDicomObject,
    /// Decoded frames, empty when only headers were requested
    pub frames: Vec<PixelFrame>,
    pub mode: DicomMode,
}

/// Reads files from disk and decodes their pixel data
///
/// - one file holding one frame: `2D`
/// - one file holding several frames: `Enhanced`
/// - several files: `3D`, one slice per file in the given order
#[derive(Debug, Clone, Copy, Default)]
pub struct DicomInputPreparer;

impl InputPreparer for DicomInputPreparer {
    fn prepare_input(&self, files: &[PathBuf], headers_only: bool) -> Result<PreparedInput> {
        let first = files.first().ok_or_else(|| {
            SpurNoiseError::NoMatchingSeries("no files to prepare".to_string())
        })?;

        if headers_only {
            let mode = if files.len() > 1 {
                DicomMode::ThreeD
            } else {
                DicomMode::TwoD
            };
            return Ok(PreparedInput {
                header: read_header(first)?,
                frames: Vec::new(),
                mode,
            });
        }

        if files.len() == 1 {
            let obj = read_full(first)?;
            let frames = decode_frames(&obj)?;
            let mode = if frames.len() > 1 {
                DicomMode::Enhanced
            } else {
                DicomMode::TwoD
            };
            debug!(
                "Prepared {} ({} frame(s), {})",
                first.display(),
                frames.len(),
                mode
            );
            return Ok(PreparedInput {
                header: obj.into_inner(),
                frames,
                mode,
            });
        }

        let first_obj = read_full(first)?;
        let mut frames = Vec::with_capacity(files.len());
        frames.push(decode_first_frame(&first_obj)?);
        for path in &files[1..] {
            frames.push(decode_first_frame(&read_full(path)?)?);
        }
        debug!("Prepared {} slices starting at {}", frames.len(), first.display());

        Ok(PreparedInput {
            header: first_obj.into_inner(),
            frames,
            mode: DicomMode::ThreeD,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::tags::{get_string_value, SERIES_DESCRIPTION};
    use crate::test_support::{write_instance, InstanceSpec};
    use tempfile::TempDir;

    #[test]
    fn test_prepare_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.dcm");
        write_instance(
            &path,
            &InstanceSpec::new("1.2.3.1", 1, 1, "SPUR_A").with_pixels(2, 2, vec![0, 10, 20, 30]),
        );

        let input = DicomInputPreparer.prepare_input(&[path], false).unwrap();

        assert_eq!(input.mode, DicomMode::TwoD);
        assert_eq!(input.frames.len(), 1);
        assert_eq!(input.frames[0].rows, 2);
        assert_eq!(input.frames[0].columns, 2);
        assert_eq!(input.frames[0].samples, vec![0.0, 10.0, 20.0, 30.0]);
        assert_eq!(
            get_string_value(&input.header, SERIES_DESCRIPTION),
            Some("SPUR_A".to_string())
        );
    }

    #[test]
    fn test_prepare_stack() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("1.dcm");
        let second = temp_dir.path().join("2.dcm");
        write_instance(
            &first,
            &InstanceSpec::new("1.2.3.1", 1, 1, "SPUR_A").with_pixels(2, 2, vec![1, 1, 1, 1]),
        );
        write_instance(
            &second,
            &InstanceSpec::new("1.2.3.1", 1, 2, "SPUR_A").with_pixels(2, 2, vec![2, 2, 2, 2]),
        );

        let input = DicomInputPreparer
            .prepare_input(&[first, second], false)
            .unwrap();

        assert_eq!(input.mode, DicomMode::ThreeD);
        assert_eq!(input.frames.len(), 2);
        assert_eq!(input.frames[1].samples, vec![2.0; 4]);
    }

    #[test]
    fn test_prepare_headers_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.dcm");
        write_instance(&path, &InstanceSpec::new("1.2.3.1", 1, 1, "SPUR_A"));

        let input = DicomInputPreparer.prepare_input(&[path], true).unwrap();

        assert!(input.frames.is_empty());
        assert_eq!(input.mode, DicomMode::TwoD);
    }

    #[test]
    fn test_prepare_nothing() {
        assert!(matches!(
            DicomInputPreparer.prepare_input(&[], false),
            Err(SpurNoiseError::NoMatchingSeries(_))
        ));
    }
}
