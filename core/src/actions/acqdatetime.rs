use crate::error::{Result, SpurNoiseError};
use crate::extraction::extract_acquisition_datetime;
use crate::host::ActionConfig;
use crate::types::FilterSpec;
use log::info;

use super::ActionContext;

/// Result name of the acquisition date and time
pub const ACQUISITION_DATETIME_KEY: &str = "AcquisitionDateTime";

/// Reports the acquisition datetime of the first instance matching
/// `filters.datetime_filter`
pub(super) fn run(action: &ActionConfig, ctx: &mut ActionContext<'_>) -> Result<()> {
    let filters = FilterSpec::from_json_value(action.filter("datetime_filter")?)?;
    let instances = ctx.data.instances_by_tags(&filters)?;
    let first = instances.first().ok_or_else(|| {
        SpurNoiseError::NoMatchingSeries("no instance matches datetime_filter".to_string())
    })?;

    let dt = extract_acquisition_datetime(first)?;
    info!("Acquisition datetime: {}", dt);
    ctx.results.add_date_time(ACQUISITION_DATETIME_KEY, dt);
    Ok(())
}
