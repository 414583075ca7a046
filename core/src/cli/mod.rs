pub mod report;

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for spurnoise
///
/// The `-r/-c/-d` triple follows the QA host's module calling convention.
#[derive(Parser, Debug)]
#[command(name = "spurnoise")]
#[command(about = "MRI spurious noise QA: compare frequency-offset scans in one figure")]
#[command(version)]
pub struct Cli {
    /// Results file to write
    #[arg(short, long, value_name = "FILE")]
    pub results: PathBuf,

    /// Module configuration (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Study directory holding the DICOM files
    #[arg(short, long, value_name = "DIR")]
    pub data: PathBuf,

    /// Directory receiving the figure
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub outdir: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
