use crate::error::{Result, SpurNoiseError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;

use super::tags::{
    get_string_value, ACQUISITION_DATE, ACQUISITION_DATE_TIME, ACQUISITION_TIME, CONTENT_DATE,
    CONTENT_TIME, SERIES_DATE, SERIES_TIME, STUDY_DATE, STUDY_TIME,
};

/// Date/time tag pairs consulted after AcquisitionDateTime, most specific first
const DATE_TIME_PAIRS: [(Tag, Tag); 4] = [
    (ACQUISITION_DATE, ACQUISITION_TIME),
    (CONTENT_DATE, CONTENT_TIME),
    (SERIES_DATE, SERIES_TIME),
    (STUDY_DATE, STUDY_TIME),
];

/// Extracts the acquisition date and time of an instance
///
/// # Algorithm
///
/// 1. Use AcquisitionDateTime (DT) when present
/// 2. Fall back to the first date/time pair that carries a date:
///    Acquisition, Content, Series, Study
/// 3. A date without a time means midnight
///
/// # Errors
///
/// `TagNotFound` when no date is available, `InvalidValue` when the value
/// present cannot be parsed.
pub fn extract_acquisition_datetime(dcm: &InMemDicomObject) -> Result<NaiveDateTime> {
    if let Some(dt) = get_string_value(dcm, ACQUISITION_DATE_TIME).filter(|s| !s.is_empty()) {
        return parse_dicom_datetime(&dt);
    }

    for (date_tag, time_tag) in DATE_TIME_PAIRS {
        let Some(date) = get_string_value(dcm, date_tag).filter(|s| !s.is_empty()) else {
            continue;
        };
        let date = parse_dicom_date(&date)?;
        let time = match get_string_value(dcm, time_tag).filter(|s| !s.is_empty()) {
            Some(time) => parse_dicom_time(&time)?,
            None => NaiveTime::MIN,
        };
        return Ok(date.and_time(time));
    }

    Err(SpurNoiseError::TagNotFound(
        "no acquisition, content, series or study date".to_string(),
    ))
}

/// Parses a DA value (`YYYYMMDD`)
pub fn parse_dicom_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y%m%d")
        .map_err(|e| SpurNoiseError::InvalidValue(format!("date `{}`: {}", value, e)))
}

/// Parses a TM value (`HH[MM[SS[.FFFFFF]]]`)
pub fn parse_dicom_time(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    let invalid = || SpurNoiseError::InvalidValue(format!("time `{}`", value));

    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (value, ""),
    };
    if whole.len() < 2 || whole.len() > 6 || whole.len() % 2 != 0 {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let field = |start: usize| -> u32 {
        whole
            .get(start..start + 2)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    };
    let micros = if fraction.is_empty() {
        0
    } else {
        let digits = &fraction[..fraction.len().min(6)];
        let scale = 10u32.pow(6 - digits.len() as u32);
        digits.parse::<u32>().map_err(|_| invalid())? * scale
    };

    NaiveTime::from_hms_micro_opt(field(0), field(2), field(4), micros).ok_or_else(invalid)
}

/// Parses a DT value (`YYYYMMDD[HH[MM[SS[.F]]]][&ZZXX]`), ignoring any offset
pub fn parse_dicom_datetime(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    let local = value
        .find(|c: char| c == '+' || c == '-')
        .map(|idx| &value[..idx])
        .unwrap_or(value);
    let invalid = || SpurNoiseError::InvalidValue(format!("datetime `{}`", value));
    let date = local.get(..8).ok_or_else(invalid)?;
    let time = local.get(8..).ok_or_else(invalid)?;
    let date = parse_dicom_date(date)?;
    let time = if time.is_empty() {
        NaiveTime::MIN
    } else {
        parse_dicom_time(time)?
    };
    Ok(date.and_time(time))
}
