use crate::core::chart::ChartKind;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for resetboard
#[derive(Parser)]
#[command(
    name = "resetboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reset Supported Programs: summarise maintenance and reset logs per vendor and program",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Only print results (no progress messages)
    #[arg(global = true, long = "quiet", short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the sheets and columns found in an upload
    Info {
        /// Uploaded file (.csv, .xlsx or .xlsm)
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// List the vendors found in an upload
    Vendors {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// List the programs of a vendor
    Programs {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Vendor (default: first vendor in alphabetical order)
        #[arg(long)]
        vendor: Option<String>,
    },

    /// Show period, KPIs and bay image for a vendor/program
    Summary {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Vendor (default: first vendor in alphabetical order)
        #[arg(long)]
        vendor: Option<String>,

        /// Program (default: the vendor's first program)
        #[arg(long)]
        program: Option<String>,

        /// Zip archive with bay images; repeat to search several in order
        #[arg(long = "zip", value_name = "ZIP")]
        zips: Vec<String>,

        /// Local image folder (overrides `images_dir` from the config)
        #[arg(long = "images-dir", value_name = "DIR")]
        images_dir: Option<String>,

        /// Also draw the monthly maintenance chart
        #[arg(long)]
        chart: bool,
    },

    /// Draw a bar chart of grouped counts
    Chart {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "month")]
        by: ChartKind,

        #[arg(long)]
        vendor: Option<String>,

        #[arg(long)]
        program: Option<String>,
    },

    /// Find the bay image of a program
    Image {
        /// Program name (matched as a case-insensitive file name prefix)
        #[arg(long)]
        program: String,

        #[arg(long = "zip", value_name = "ZIP")]
        zips: Vec<String>,

        #[arg(long = "images-dir", value_name = "DIR")]
        images_dir: Option<String>,

        /// Copy the image to this file (absolute path required)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the KPI report
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export format: csv, json, xlsx (default: from the output extension)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        out: String,

        /// Limit the report to one vendor (all vendor/program pairs otherwise)
        #[arg(long)]
        vendor: Option<String>,

        /// Program of `--vendor` (default: the vendor's first program)
        #[arg(long, requires = "vendor")]
        program: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
