use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(name = "bolyai", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Folder the documents are stored in [default: ./downloads]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only fetch the named era (repeatable)
    #[arg(long = "era", value_name = "NAME")]
    pub eras: Vec<String>,

    /// Print every `url -> path` pair and exit without touching the network
    #[arg(long)]
    pub list: bool,
}
