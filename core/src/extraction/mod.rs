pub mod datetime;
pub mod files;
pub mod pixels;
pub mod tags;

pub use datetime::extract_acquisition_datetime;
pub use files::{is_candidate_file, is_dicom_file, read_full, read_header};
pub use pixels::{decode_first_frame, decode_frames};
pub use tags::*;
