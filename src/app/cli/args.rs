//! Command-line arguments for the wordtally binary

use clap::Parser;
use std::path::PathBuf;

// Global arguments structure with all command-line options.
#[derive(Parser, Debug, Clone)]
#[command(name = "wordtally")]
#[command(about = "Count distinct words across files with a partitioned pipeline")]
#[command(version)]
pub struct Args {
    /// Input files to read
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Number of counter lanes (one worker thread per lane)
    #[arg(
        short = 'n',
        long = "counters",
        value_name = "COUNT",
        default_value_t = 4,
        value_parser = parse_lane_count
    )]
    pub counters: usize,

    /// Force colored output
    #[arg(long = "color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Report output format
    #[arg(short = 'F', long = "format", value_name = "FORMAT", value_parser = ["text", "json"], default_value = "text")]
    pub format: String,
}

fn parse_lane_count(raw: &str) -> Result<usize, String> {
    let count: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if count == 0 {
        return Err("at least one counter lane is required".to_string());
    }
    Ok(count)
}
