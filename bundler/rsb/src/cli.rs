//! Command line interface declarations for rsb

use std::path::PathBuf;

use clap::Parser;

/// Bundle a multi-file Rust source tree into a single file
#[derive(Debug, Parser)]
#[command(version=None)]
pub struct Cli {
    /// See what version of rsb you are using
    #[arg(short, long)]
    pub version: bool,

    /// The root file to expand
    #[clap(default_value = "main.rs")]
    pub path: PathBuf,

    /// The path of the file to write the bundle to
    /// If not provided, the bundle will be written to stdout
    #[arg(short, long)]
    #[clap(default_value = "-")]
    pub out_file: PathBuf,

    /// Do not append the generation timestamp comment
    #[arg(long)]
    pub no_timestamp: bool,
}
