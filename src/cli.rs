use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "content-import")]
#[command(about = "Imports content product abstract lists from staged CSV data")]
pub struct Cli {
    /// Path to the staged import CSV (defaults to the module's configured
    /// data/import location)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Module root used to resolve the default import file location
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub module_root: PathBuf,

    /// Path to the prepared localized items CSV (defaults next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file declaring the locale map, in import order
    #[arg(long, value_name = "FILE")]
    pub locales: Option<PathBuf>,

    /// CSV listing the known product abstract identifiers; when omitted,
    /// identifier lists are not checked for existence
    #[arg(long, value_name = "FILE")]
    pub products: Option<PathBuf>,

    /// Show detailed processing statistics
    #[arg(long)]
    pub stats: bool,
}
