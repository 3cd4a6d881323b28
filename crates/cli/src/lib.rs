//! txsched CLI -- parse, analyze and generate transaction schedules.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use derive_more::From;
use txsched_core::Property;

pub mod report;

#[derive(Debug, Parser)]
#[command(
    name = "txsched",
    about = "Static analysis of transaction schedules"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse schedules and print them in normalized form
    Parse(ParseArgs),
    /// Check schedules for serializability, recoverability, ACA and strictness
    Analyze(AnalyzeArgs),
    /// Generate random well-formed schedules
    Generate(GenerateArgs),
}

#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// File with one schedule per line (stdin if omitted)
    pub input: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// File with one schedule per line (stdin if omitted)
    pub input: Option<PathBuf>,
    /// Property to check; may be repeated (all properties if omitted)
    #[arg(long, short)]
    pub property: Vec<PropertyArg>,
    /// List conflicting pairs and the violation behind every failed property
    #[arg(long)]
    pub verbose: bool,
    /// Output results as JSON (one object per schedule)
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of schedules to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u64,
    /// Number of transactions per schedule
    #[arg(short = 't', long = "transactions", default_value_t = 3)]
    pub n_transaction: u64,
    /// Number of distinct resources
    #[arg(short = 'r', long = "resources", default_value_t = 1)]
    pub n_resource: u64,
    /// Seed for reproducible output (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output generated schedules as JSON (one object per line)
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PropertyArg {
    ConflictSerializable,
    Recoverable,
    Cascadeless,
    Strict,
}

impl From<PropertyArg> for Property {
    fn from(property: PropertyArg) -> Self {
        match property {
            PropertyArg::ConflictSerializable => Self::ConflictSerializable,
            PropertyArg::Recoverable => Self::Recoverable,
            PropertyArg::Cascadeless => Self::Cascadeless,
            PropertyArg::Strict => Self::Strict,
        }
    }
}

impl AnalyzeArgs {
    /// The selected properties in the order given, or every property.
    #[must_use]
    pub fn properties(&self) -> Vec<Property> {
        if self.property.is_empty() {
            Property::ALL.to_vec()
        } else {
            self.property.iter().copied().map(Property::from).collect()
        }
    }
}

/// Failures that abort a command.
#[derive(Debug, From)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for Error {}
