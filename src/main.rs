use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;
use quadrat::{parse_mode, BatchProcessor, Cli, Config, ThumbnailError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let mode = match parse_mode(&cli.mode) {
        Ok(mode) => mode,
        Err(_) => {
            println!("Ungültiger --mode. Erlaubt: fit | cover");
            std::process::exit(2);
        }
    };

    let config = Config {
        input_dir: cli.input,
        output_dir: cli.output,
        mode,
    };

    let report = match BatchProcessor::new(config).run() {
        Ok(report) => report,
        Err(ThumbnailError::InvalidInputDir(dir)) => {
            println!("Eingabeordner nicht gefunden: {}", dir.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Per-file failures are already reported inline and never change the
    // exit status.
    log::debug!(
        "Batch finished: {} files, {} thumbnails, {} failures",
        report.processed,
        report.thumbnails,
        report.failures.len()
    );
}
