//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::plist::Format;

/// regions - Build and inspect region catalogs for simulation input decks
#[derive(Parser, Debug)]
#[command(name = "regions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Serialization format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Xml,
    Toml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xml => Format::Xml,
            FormatArg::Toml => Format::Toml,
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a box region to a catalog file
    #[command(
        name = "add",
        long_about = "Add a box region to a catalog file.\n\n\
            Loads the catalog if the file exists, otherwise starts an empty one. \
            The region is stored under its label with a nested 'box' list holding \
            the 'lo' and 'hi' corners. Adding an existing label replaces its box.",
        after_help = "\
EXAMPLES:
    # Add a slab to a new catalog
    regions add --file regions.xml --label 'Rwia region' --lo 0,0,0 --hi 103.2,0,6

    # Reject mismatched or inverted corners
    regions add --file regions.xml --label bad --lo 1,0 --hi 0,0 --strict

    # Corners starting with a minus sign
    regions add --file regions.xml --label deep --lo=-5,0,-20 --hi 5,0,0"
    )]
    Add {
        /// Catalog file (.xml or .toml)
        #[arg(long, short)]
        file: PathBuf,

        /// Region label
        #[arg(long, short)]
        label: Option<String>,

        /// Lower corner, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        lo: Vec<f64>,

        /// Upper corner, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        hi: Vec<f64>,

        /// Check that corners match in length and are ordered per axis
        #[arg(long)]
        strict: bool,
    },

    /// List the regions in a catalog file
    #[command(name = "list")]
    List {
        /// Catalog file (.xml or .toml)
        #[arg(long, short)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print or convert a catalog file
    #[command(
        name = "export",
        after_help = "\
EXAMPLES:
    # Print as XML
    regions export --file regions.toml

    # Convert to TOML
    regions export --file regions.xml --output regions.toml"
    )]
    Export {
        /// Catalog file (.xml or .toml)
        #[arg(long, short)]
        file: PathBuf,

        /// Output format (defaults to the output extension, then config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the labels of regions containing a point
    #[command(name = "inside")]
    Inside {
        /// Catalog file (.xml or .toml)
        #[arg(long, short)]
        file: PathBuf,

        /// Point coordinates, comma separated
        #[arg(
            long,
            value_delimiter = ',',
            allow_negative_numbers = true,
            required = true
        )]
        point: Vec<f64>,
    },

    /// Print the deep vadose example catalog
    #[command(name = "demo")]
    Demo {
        /// Output format (defaults to config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Show effective configuration
    #[command(name = "config")]
    Config,

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
