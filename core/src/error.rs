use thiserror::Error;

/// Result type for spurnoise operations
pub type Result<T> = std::result::Result<T, SpurNoiseError>;

/// Error types for spurnoise operations
#[derive(Error, Debug)]
pub enum SpurNoiseError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Pixel data could not be decoded
    #[error("Pixel data error: {0}")]
    PixelData(String),

    /// Tag required by a host routine is not present
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// Invalid tag value
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// Malformed module configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filtering left nothing to work with
    #[error("No matching series: {0}")]
    NoMatchingSeries(String),

    /// Figure layout or rendering problem
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for SpurNoiseError {
    fn from(e: dicom_object::ReadError) -> Self {
        SpurNoiseError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for SpurNoiseError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        SpurNoiseError::InvalidValue(format!("{}", e))
    }
}

impl From<dicom_pixeldata::Error> for SpurNoiseError {
    fn from(e: dicom_pixeldata::Error) -> Self {
        SpurNoiseError::PixelData(format!("{}", e))
    }
}
