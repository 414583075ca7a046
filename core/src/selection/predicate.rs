use crate::extraction::tags::resolve_value;
use crate::types::FilterSpec;
use dicom_object::InMemDicomObject;

/// Returns `true` if the data set carries every value of `filters`
///
/// Values are compared as strings, exactly and case-sensitively. An
/// attribute that cannot be resolved compares as [`NOT_FOUND`], so a
/// `null` filter value selects data sets lacking the attribute. An empty
/// spec accepts every data set.
pub fn matches_filters(dcm: &InMemDicomObject, filters: &FilterSpec) -> bool {
    filters.iter().all(|(selector, expected)| {
        resolve_value(dcm, selector).as_deref().unwrap_or(NOT_FOUND) == expected
    })
}

/// String form of an unresolvable attribute
pub const NOT_FOUND: &str = "None";
