use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mocksmith",
    about = "Generate synthetic structured records from declarative, nested schemas",
    version,
    after_help = "Examples:\n  mocksmith generate --schema user.json --count 100 --output users.json\n  mocksmith generate --schema user.json --count 10 --pretty\n  mocksmith check --schema user.json --count 500\n  mocksmith preview --schema user.json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate records from a schema file
    Generate(GenerateArgs),

    /// Validate a schema and report its computed limit totals
    Check(CheckArgs),

    /// Generate a few records and render them as a table
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the schema JSON file
    #[arg(long)]
    pub schema: PathBuf,

    /// Number of records to generate
    /// Falls back to mocksmith.toml [generate].count, then 100
    #[arg(long)]
    pub count: Option<usize>,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Fixed random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the schema JSON file
    #[arg(long)]
    pub schema: PathBuf,

    /// Record count to check the item ceiling against
    #[arg(long, default_value = "1")]
    pub count: usize,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Path to the schema JSON file
    #[arg(long)]
    pub schema: PathBuf,

    /// Number of sample records to preview
    #[arg(long, default_value = "5")]
    pub count: usize,
}
