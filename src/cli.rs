use crate::core::{Parameter, SortField};
use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable table on stdout
    Terminal,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Mata,
    Insang,
    Lendir,
    Daging,
    Bau,
    Tekstur,
    Skor,
    Kategori,
    Timestamp,
}

impl From<SortKey> for SortField {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Mata => SortField::Parameter(Parameter::Mata),
            SortKey::Insang => SortField::Parameter(Parameter::Insang),
            SortKey::Lendir => SortField::Parameter(Parameter::Lendir),
            SortKey::Daging => SortField::Parameter(Parameter::Daging),
            SortKey::Bau => SortField::Parameter(Parameter::Bau),
            SortKey::Tekstur => SortField::Parameter(Parameter::Tekstur),
            SortKey::Skor => SortField::Skor,
            SortKey::Kategori => SortField::Kategori,
            SortKey::Timestamp => SortField::Timestamp,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mutuikan")]
#[command(about = "SNI 2729:2013 fish freshness scoring and AI analysis parsing", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score fish samples from a CSV file
    Score {
        /// CSV file of sample observations
        input: PathBuf,

        /// Output format (defaults to .mutuikan.toml, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormatArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sort samples by this field before rendering
        #[arg(long, value_enum)]
        sort: Option<SortKey>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Parse a raw AI analysis text into a structured assessment
    Parse {
        /// Text file holding the model output
        input: PathBuf,

        /// Output format (defaults to .mutuikan.toml, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormatArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
