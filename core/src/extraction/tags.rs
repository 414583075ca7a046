use crate::types::TagSelector;
use dicom_core::header::Header;
use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Study/Series Identification Tags
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);

// Date/Time Tags
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);

// Description Tags
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);

// Patient Tags
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);

// MR Acquisition Tags
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);

// Image Pixel Tags
pub const ROWS: Tag = Tag(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Helper to get integer value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to i32
pub fn get_int_value(dcm: &InMemDicomObject, tag: Tag) -> Option<i32> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<i32>().ok())
}

/// Resolves a [`TagSelector`] against a data set and renders the value
///
/// Returns `None` when the selector names an attribute that is absent, or a
/// keyword the dictionary does not know. This never fails: lookup errors
/// are folded into `None`.
///
/// Multi-valued attributes come back backslash-separated, the way they are
/// encoded. Sequences render as a short item count.
pub fn resolve_value(dcm: &InMemDicomObject, selector: &TagSelector) -> Option<String> {
    let tag = match selector {
        TagSelector::NamedField(name) => dcm.element_by_name(name).ok()?.tag(),
        other => other.as_tag()?,
    };
    render_element(dcm, tag)
}

fn render_element(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    let elem = dcm.element(tag).ok()?;
    if let Some(items) = elem.items() {
        return Some(format!("<Sequence of {} item(s)>", items.len()));
    }
    elem.to_str().ok().map(|s| s.trim().to_string())
}
