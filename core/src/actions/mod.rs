//! Configured QA actions
//!
//! The configuration names actions; each recognised name maps to an
//! [`ActionKind`] and from there to its handler. Names without a handler
//! are skipped so one configuration document can serve several modules.

mod acqdatetime;
mod showimages;

pub use acqdatetime::ACQUISITION_DATETIME_KEY;
pub use showimages::{figure_title, FIGURE_FILENAME, FIGURE_KEY};

use crate::cli::report::SeriesReport;
use crate::error::Result;
use crate::host::{ActionConfig, DataAccess, InputPreparer, ModuleConfig, ResultSink};
use log::{debug, info};
use std::fmt;
use std::path::Path;

/// Collaborators available to an action
pub struct ActionContext<'a> {
    pub data: &'a dyn DataAccess,
    pub preparer: &'a dyn InputPreparer,
    pub results: &'a mut dyn ResultSink,
    /// Directory that receives generated files
    pub output_dir: &'a Path,
}

/// Signature shared by all action handlers
pub type ActionHandler = fn(&ActionConfig, &mut ActionContext<'_>) -> Result<()>;

/// Actions this module implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Report the acquisition date and time
    AcqDateTime,
    /// Render the frequency-offset comparison figure
    ShowImages,
}

const ACTION_NAMES: [(&str, ActionKind); 2] = [
    ("acqdatetime", ActionKind::AcqDateTime),
    ("showimages", ActionKind::ShowImages),
];

impl ActionKind {
    /// Looks up an action by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        ACTION_NAMES
            .iter()
            .find(|(table_name, _)| *table_name == name)
            .map(|(_, kind)| *kind)
    }

    /// Configuration name of this action
    pub fn name(&self) -> &'static str {
        ACTION_NAMES
            .iter()
            .find(|(_, kind)| kind == self)
            .map_or("unknown", |(name, _)| *name)
    }

    pub fn handler(&self) -> ActionHandler {
        match self {
            ActionKind::AcqDateTime => acqdatetime::run,
            ActionKind::ShowImages => showimages::run,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Runs every configured action, then writes the results
///
/// Actions run in document order. The first failing action aborts the run
/// and nothing is written.
pub fn run(config: &ModuleConfig, ctx: &mut ActionContext<'_>) -> Result<()> {
    let series = ctx.data.all_series()?;
    for line in SeriesReport::new(&series).to_string().lines() {
        info!("{}", line);
    }

    for (name, value) in &config.actions {
        let Some(kind) = ActionKind::from_name(name) else {
            debug!("Skipping unrecognized action `{}`", name);
            continue;
        };
        info!("Running action `{}`", kind);
        let action = ActionConfig::from_value(name, value)?;
        (kind.handler())(&action, ctx)?;
    }

    ctx.results.write()
}
