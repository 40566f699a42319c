//! Application startup: argument parsing, logging, pipeline execution

use crate::app::cli::Args;
use crate::core::logging::init_logging;
use crate::pipeline::api::{run, PipelineReport};
use clap::Parser;
use std::io::IsTerminal;
use std::process;

pub fn startup() {
    let args = Args::parse();
    let use_color = (args.color || std::io::stdout().is_terminal()) && !args.no_color;

    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        use_color,
    ) {
        eprintln!("wordtally: failed to initialise logging: {e}");
        process::exit(1);
    }

    log::info!(
        "wordtally {} starting ({} {})",
        env!("CARGO_PKG_VERSION"),
        crate::GIT_HASH,
        crate::BUILD_TIME
    );
    log::info!(
        "{} input files, {} counter lanes",
        args.files.len(),
        args.counters
    );

    match run(&args.files, args.counters) {
        Ok(report) => render_report(&report, &args.format, use_color),
        Err(e) => {
            log::error!("pipeline failed: {e}");
            eprintln!("wordtally: {e}");
            process::exit(1);
        }
    }
}

fn render_report(report: &PipelineReport, format: &str, use_color: bool) {
    match format {
        "json" => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("wordtally: failed to serialise report: {e}");
                process::exit(1);
            }
        },
        _ => {
            use colored::Colorize;

            let distinct = report.distinct_words.to_string();
            let distinct = if use_color {
                distinct.green().bold().to_string()
            } else {
                distinct
            };
            println!(
                "{} distinct words ({} words across {} files)",
                distinct, report.words, report.files
            );
        }
    }
}
