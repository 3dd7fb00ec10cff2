use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "rxnprofile - renders reaction-coordinate free-energy profiles (potential energy diagrams) for the two bundled reaction mechanisms.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the potential energy diagram to an image file.
    Render(RenderArgs),
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path for the output figure. A `.svg` extension selects the SVG
    /// backend; anything else is rendered as a PNG bitmap.
    #[arg(
        short,
        long,
        default_value = "potential_energy_diagram.png",
        value_name = "PATH"
    )]
    pub output: PathBuf,

    /// Path to a figure-style configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Figure Overrides ---
    /// Override the figure width in pixels.
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Override the figure height in pixels.
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    // --- Assembly Overrides ---
    /// Override the level-marker width, in reaction-coordinate units.
    #[arg(long, value_name = "FLOAT")]
    pub marker_width: Option<f64>,

    /// Override the sample count per transition-curve half.
    #[arg(long, value_name = "INT")]
    pub samples_per_segment: Option<usize>,
}
