use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "[place, select]")]
    pub job: JobVariant,
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub output: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum JobVariant {
    /// Nest parts on a single sheet, avoiding its existing cut areas
    Place,
    /// Rank candidate sheets by nesting on each and keep the best
    Select,
}
