// src/config.rs
use std::path::PathBuf;

use crate::cli::{Args, OutputFormat};

/// Top-level configuration derived from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    pub syntax: Option<String>,
    pub settings_path: Option<PathBuf>,
    pub ignore_numbers: bool,
    pub output: Option<PathBuf>,
    pub watch: bool,
    pub paths: Vec<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            format: args.format,
            syntax: args.syntax,
            settings_path: args.settings,
            ignore_numbers: args.ignore_numbers,
            output: args.output,
            watch: args.watch,
            paths: args.paths,
        }
    }
}
