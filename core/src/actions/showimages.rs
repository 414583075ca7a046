use crate::error::{Result, SpurNoiseError};
use crate::extraction::tags::{
    get_string_value, PATIENT_NAME, SERIES_DESCRIPTION, STUDY_DATE, STUDY_TIME,
};
use crate::figure::SpurNoiseFigure;
use crate::host::ActionConfig;
use crate::selection::apply_filters_with;
use crate::types::{FilterSpec, PixelFrame};
use dicom_object::InMemDicomObject;
use log::{debug, info};

use super::ActionContext;

/// File name of the comparison figure
pub const FIGURE_FILENAME: &str = "SpurNoise.png";

/// Result name of the comparison figure
pub const FIGURE_KEY: &str = "SpurNoise_figure";

/// Builds the figure title from a header
pub fn figure_title(header: &InMemDicomObject) -> String {
    let field = |tag| get_string_value(header, tag).unwrap_or_default();
    format!(
        "Spurious Noise Test: {} {} {}",
        field(PATIENT_NAME),
        field(STUDY_DATE),
        field(STUDY_TIME)
    )
}

/// Renders one panel per frequency-offset filter
///
/// Each entry of `filters` selects the scan for one frequency offset; the
/// first matching series is loaded. `params.number_of_scans` sets the panel
/// count (scanners differ in how many offsets they acquire).
pub(super) fn run(action: &ActionConfig, ctx: &mut ActionContext<'_>) -> Result<()> {
    let number_of_scans = action.positive_param("number_of_scans")?;
    let data = ctx.data;

    let mut images: Vec<PixelFrame> = Vec::new();
    let mut headers: Vec<InMemDicomObject> = Vec::new();
    for (f0, filter) in &action.filters {
        let filters = FilterSpec::from_json_value(filter)?;
        let matching =
            apply_filters_with(data.series_filelist(), &filters, |path| data.read_header(path))?;
        let series = matching.first().ok_or_else(|| {
            SpurNoiseError::NoMatchingSeries(format!("no series matches filter `{}`", f0))
        })?;

        let input = ctx.preparer.prepare_input(series, false)?;
        let frame = input.frames.into_iter().next().ok_or_else(|| {
            SpurNoiseError::PixelData(format!("series for `{}` has no pixel data", f0))
        })?;
        debug!("{}: {} ({}), mean {}", f0, series[0].display(), input.mode, frame.mean());

        images.push(frame);
        headers.push(input.header);
    }

    let figure = assemble_figure(images, &headers, number_of_scans)?;
    let path = ctx.output_dir.join(FIGURE_FILENAME);
    figure.save(&path)?;
    info!("Saved figure to {}", path.display());
    ctx.results.add_object(FIGURE_KEY, &path);
    Ok(())
}

/// Lays out loaded frames with their headers, in filter order
///
/// The figure title comes from the last header; each panel is titled with
/// its series description.
fn assemble_figure(
    images: Vec<PixelFrame>,
    headers: &[InMemDicomObject],
    number_of_scans: usize,
) -> Result<SpurNoiseFigure> {
    let last = headers
        .last()
        .ok_or_else(|| SpurNoiseError::Config("showimages defines no filters".to_string()))?;
    let mut figure = SpurNoiseFigure::new(figure_title(last), number_of_scans);
    for (frame, header) in images.into_iter().zip(headers) {
        let title = get_string_value(header, SERIES_DESCRIPTION).unwrap_or_default();
        figure.add_panel(title, frame);
    }
    Ok(figure)
}
