use clap::Parser;
use log::{error, info};
use spurnoise_core::cli::Cli;
use spurnoise_core::host::{DicomInputPreparer, JsonResults, ModuleConfig, StudyDirectory};
use spurnoise_core::{ActionContext, Result};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    info!("Reading configuration: {}", cli.config.display());
    let config = ModuleConfig::from_file(&cli.config)?;

    info!("Processing directory: {}", cli.data.display());
    let study = StudyDirectory::scan(&cli.data)?;

    let mut results = JsonResults::new(&cli.results);
    let mut ctx = ActionContext {
        data: &study,
        preparer: &DicomInputPreparer,
        results: &mut results,
        output_dir: &cli.outdir,
    };
    spurnoise_core::run(&config, &mut ctx)
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}
