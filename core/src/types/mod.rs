//! Core type definitions
//!
//! - [`TagSelector`]: the accepted ways of naming a DICOM attribute
//! - [`FilterSpec`]: attribute values a data set must carry
//! - [`SeriesFileList`]: per-series instance file lists
//! - [`PixelFrame`] / [`DicomMode`]: decoded pixel data

mod filter;
mod frame;
mod selector;
mod series;

pub use filter::FilterSpec;
pub use frame::{DicomMode, PixelFrame};
pub use selector::TagSelector;
pub use series::{InstanceFileList, SeriesFileList};
