use std::path::PathBuf;

/// File paths of the instances of one series, in acquisition order
pub type InstanceFileList = Vec<PathBuf>;

/// Per-series file lists of a study; outer order is series order
pub type SeriesFileList = Vec<InstanceFileList>;
