use crate::error::{Result, SpurNoiseError};
use crate::types::PixelFrame;
use dicom_object::DefaultDicomObject;
use dicom_pixeldata::PixelDecoder;

/// Decodes every frame of a grayscale image into `f32` samples
///
/// Rescale slope/intercept are applied by the decoder.
pub fn decode_frames(obj: &DefaultDicomObject) -> Result<Vec<PixelFrame>> {
    let decoded = obj.decode_pixel_data()?;
    if decoded.samples_per_pixel() != 1 {
        return Err(SpurNoiseError::PixelData(format!(
            "expected grayscale pixel data, got {} samples per pixel",
            decoded.samples_per_pixel()
        )));
    }

    let rows = decoded.rows();
    let columns = decoded.columns();
    (0..decoded.number_of_frames())
        .map(|idx| {
            let samples = decoded.to_vec_frame::<f32>(idx)?;
            Ok(PixelFrame::new(rows, columns, samples))
        })
        .collect()
}

/// Decodes the first frame only
pub fn decode_first_frame(obj: &DefaultDicomObject) -> Result<PixelFrame> {
    decode_frames(obj)?
        .into_iter()
        .next()
        .ok_or_else(|| SpurNoiseError::PixelData("pixel data holds no frames".to_string()))
}
