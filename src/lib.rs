// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod parser;
pub mod scoring;
pub mod usage;

// Re-export commonly used types
pub use crate::core::{
    errors::CsvError, BestParameter, FishParameter, FishSample, FreshnessCategory, Parameter,
    ParameterKind, SortField, StatusTag,
};

pub use crate::scoring::{
    calculate_freshness, calculate_freshness_named, find_best_parameter, has_invalid_values,
    invalid_parameters, sort_samples,
};

pub use crate::io::csv::{generate_csv, parse_csv};
pub use crate::io::output::{create_writer, OutputFormat, ReportWriter, SampleReport};

pub use crate::parser::{
    assess_quality, calculate_overall_score, determine_category, generate_recommendations,
    parse_analysis_result, Confidence, EnhancedAnalysisResult, ParsedParameter, QualityAssessment,
    QualityCategory, ScoreSource,
};

pub use crate::usage::{MemoryUsageTracker, UsageTracker};
