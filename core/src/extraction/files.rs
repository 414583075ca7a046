use crate::error::Result;
use dicom_object::{open_file, DefaultDicomObject, InMemDicomObject, OpenFileOptions};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::tags::PIXEL_DATA;

/// Reads the header of a DICOM file, stopping before the pixel data
pub fn read_header(path: &Path) -> Result<InMemDicomObject> {
    let obj = OpenFileOptions::new()
        .read_until(PIXEL_DATA)
        .open_file(path)?;
    Ok(obj.into_inner())
}

/// Reads a complete DICOM file, pixel data included
pub fn read_full(path: &Path) -> Result<DefaultDicomObject> {
    Ok(open_file(path)?)
}

/// Checks if a file has a DICOM header
///
/// DICOM files typically have:
/// - 128-byte preamble
/// - 4-byte "DICM" magic string at offset 128
pub fn is_dicom_file(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 132];
    match file.read_exact(&mut buffer) {
        Ok(()) => &buffer[128..132] == b"DICM",
        Err(_) => false,
    }
}

/// Whether a path looks like it should hold DICOM data
///
/// `.dcm`/`.dicom` extensions are trusted; extension-less files are
/// sniffed for the magic bytes.
pub fn is_candidate_file(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => ext.eq_ignore_ascii_case("dcm") || ext.eq_ignore_ascii_case("dicom"),
        None => is_dicom_file(path),
    }
}
