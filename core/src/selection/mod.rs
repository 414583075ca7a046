//! Data set filtering
//!
//! A [`FilterSpec`](crate::types::FilterSpec) is checked against single
//! data sets by [`matches_filters`] and applied to a whole study's
//! per-series file lists by [`apply_filters`].

mod predicate;
mod series;

pub use predicate::{matches_filters, NOT_FOUND};
pub use series::{apply_filters, apply_filters_with};
