use clap::{Args, Parser, Subcommand};
use hydrowf::core::quantum::QuantumNumbers;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "hydrowf CLI - Evaluate closed-form hydrogen-atom wavefunctions and convert between Cartesian and spherical coordinates.",
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

    /// Set the number of threads used for grid sampling.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one orbital at a single point given in spherical coordinates.
    Eval(EvalArgs),
    /// Convert a point between Cartesian and spherical coordinates.
    Convert(ConvertArgs),
    /// List every orbital with a tabulated closed form.
    List,
    /// Evaluate one orbital over a grid of points and write the values as CSV.
    Sample(SampleArgs),
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// The orbital, as a label (e.g., '2pz') or a triple 'n,l,m' (e.g., '2,1,0').
    #[arg(required = true, value_name = "ORBITAL")]
    pub orbital: QuantumNumbers,

    /// Radial distance from the nucleus, in Bohr radii.
    #[arg(short, long, allow_negative_numbers = true, value_name = "FLOAT")]
    pub r: f64,

    /// Polar angle from the +z axis, in radians. Required unless l = 0.
    #[arg(short, long, allow_negative_numbers = true, value_name = "FLOAT")]
    pub theta: Option<f64>,

    /// Azimuthal angle in the x-y plane, in radians. Required unless l = 0.
    #[arg(short, long, allow_negative_numbers = true, value_name = "FLOAT")]
    pub phi: Option<f64>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[command(subcommand)]
    pub command: ConvertCommands,
}

/// Available coordinate conversions.
#[derive(Subcommand, Debug)]
pub enum ConvertCommands {
    /// Convert (x, y, z) to (r, theta, phi).
    ToSpherical {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
    /// Convert (r, theta, phi) to (x, y, z).
    ToCartesian {
        #[arg(allow_negative_numbers = true)]
        r: f64,
        #[arg(allow_negative_numbers = true)]
        theta: f64,
        #[arg(allow_negative_numbers = true)]
        phi: f64,
    },
}

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Path to the sampling configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the output CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Override the orbital from the config file.
    #[arg(long, value_name = "ORBITAL")]
    pub orbital: Option<QuantumNumbers>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S grid.points-per-axis=101
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
