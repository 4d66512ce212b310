mod args;
mod progress;
mod summary;

use args::Args;
use clap::Parser;
use dataset::{import_from_path, ImportError, Imported};
use log::LevelFilter;
use progress::ImportProgressBar;
use rayon::prelude::*;
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use summary::Summary;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let config = args.config()?;

    if args.list_options {
        for line in config.describe() {
            println!("{}", line);
        }
        return Ok(());
    }

    config.validate()?;
    log::info!("Importing {} files", args.files.len());

    let progress = ImportProgressBar::new(&args.files);

    // Files are independent, each import is a single-threaded pipeline
    let results: Vec<(PathBuf, Result<Imported, ImportError>)> = args
        .files
        .par_iter()
        .map(|path| {
            let result = import_from_path(path, &config);
            progress.file_done(path);
            (path.clone(), result)
        })
        .collect();

    progress.finish();

    let mut failures = 0;
    for (path, result) in &results {
        match result {
            Ok(imported) => Summary::new(imported).log(path),
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} files failed to import", failures, results.len()).into());
    }

    log::info!("Done!");
    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(log_file)?)?;
    } else {
        let level = if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        SimpleLogger::init(level, Config::default())?;
    }

    Ok(args)
}
