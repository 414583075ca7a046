pub mod actions;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod figure;
pub mod host;
pub mod selection;
pub mod types;

#[cfg(test)]
mod test_support;

pub use actions::{run, ActionContext, ActionKind};
pub use cli::report::SeriesReport;
pub use error::{Result, SpurNoiseError};
pub use extraction::tags::resolve_value;
pub use selection::{apply_filters, matches_filters};
pub use types::*;
