pub mod convert;
pub mod formats;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "firefly-prep",
    about = "Convert WeChat Pay and Alipay bill exports into Firefly III import CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a bill export into the 12-column Firefly III import CSV.
    Convert {
        /// Path to the bill export (WeChat Pay XLSX or Alipay CSV)
        file: String,
        /// Output path (default: <input-stem>_clean.csv beside the input)
        output: Option<String>,
        /// Format key (e.g. alipay); detected from the file when omitted
        #[arg(long)]
        format: Option<String>,
    },
    /// List the supported bill formats.
    Formats,
}
