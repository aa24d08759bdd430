//! Structured extraction from AI-generated freshness analysis text.
//!
//! The upstream model returns free-form Indonesian prose, sometimes with a
//! markdown table, sometimes not. Each of the six parameters is extracted
//! independently: a fixed-priority regex cascade first, then a keyword
//! heuristic that always yields a numeric estimate. The parser never fails
//! and never leaves a score null; noisy input degrades into lower
//! confidence, issues and warnings instead of errors.

pub mod aggregate;
pub mod fallback;
pub mod patterns;

use crate::core::Parameter;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use aggregate::{
    assess_quality, calculate_overall_score, determine_category, generate_recommendations,
};

/// Confidence tier attached to an extracted or estimated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Where a parameter's score came from.
///
/// The first five variants are the cascade strategies in priority order;
/// `KeywordFallback` marks scores estimated rather than extracted, which is
/// what the quality assessment counts against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    TableRow,
    TableRowAlt,
    InlineScoreFirst,
    InlineKeywordFirst,
    BareNumber,
    KeywordFallback,
}

/// One parameter's extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedParameter {
    pub parameter: Parameter,
    pub display_name: String,
    /// Free-text condition description as read (or estimated) from the text.
    pub condition: String,
    /// 1-9 score. Always `Some` after a full parse; the fallback estimator
    /// guarantees it.
    pub score: Option<u8>,
    pub justification: String,
    pub confidence: Confidence,
    pub is_analyzable: bool,
    pub source: ScoreSource,
}

/// Category scale used by the analysis parser.
///
/// Deliberately not the scorer's `FreshnessCategory`: the two scales evolved
/// separately in the field and are kept separate here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityCategory {
    Prima,
    Baik,
    Sedang,
    Buruk,
}

impl fmt::Display for QualityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityCategory::Prima => "Prima",
            QualityCategory::Baik => "Baik",
            QualityCategory::Sedang => "Sedang",
            QualityCategory::Buruk => "Buruk",
        };
        f.write_str(label)
    }
}

/// Soft-fail diagnostics for a parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    /// 0.6 to 1.0; a floor-clamped linear penalty over issues and warnings.
    pub confidence: f64,
}

/// The complete structured result of one analysis text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedAnalysisResult {
    pub parameters: Vec<ParsedParameter>,
    pub overall_score: f64,
    pub category: QualityCategory,
    pub quality: QualityAssessment,
    pub recommendations: Vec<String>,
    /// Analyzable parameters that received a score; 4 on a good parse.
    pub analyzable_count: usize,
}

/// Parse one raw analysis text into a structured assessment, in one shot.
pub fn parse_analysis_result(raw: &str) -> EnhancedAnalysisResult {
    let parameters: Vec<ParsedParameter> = Parameter::ALL
        .iter()
        .map(|parameter| parse_parameter(raw, *parameter))
        .collect();

    let overall_score = aggregate::calculate_overall_score(&parameters);
    let category = aggregate::determine_category(overall_score, &parameters);
    let quality = aggregate::assess_quality(&parameters, raw);
    let recommendations = aggregate::generate_recommendations(&quality, &parameters);
    let analyzable_count = parameters
        .iter()
        .filter(|p| p.is_analyzable && p.score.is_some())
        .count();

    EnhancedAnalysisResult {
        parameters,
        overall_score,
        category,
        quality,
        recommendations,
        analyzable_count,
    }
}

fn parse_parameter(raw: &str, parameter: Parameter) -> ParsedParameter {
    if let Some(extraction) = patterns::extract(raw, parameter) {
        log::debug!(
            "{}: score {} via {:?}",
            parameter.key(),
            extraction.score,
            extraction.source
        );
        return ParsedParameter {
            parameter,
            display_name: parameter.display_name().to_string(),
            condition: extraction.condition,
            score: Some(extraction.score),
            justification: extraction.justification,
            confidence: extraction.confidence,
            is_analyzable: parameter.is_analyzable(),
            source: extraction.source,
        };
    }

    let estimate = fallback::estimate(raw, parameter);
    log::debug!(
        "{}: no pattern matched, keyword fallback gave {}",
        parameter.key(),
        estimate.score
    );
    ParsedParameter {
        parameter,
        display_name: parameter.display_name().to_string(),
        condition: estimate.condition,
        score: Some(estimate.score),
        justification: estimate.justification,
        confidence: estimate.confidence,
        is_analyzable: parameter.is_analyzable(),
        source: ScoreSource::KeywordFallback,
    }
}
