//! Aggregation of per-parameter extractions into an overall assessment.

use crate::core::{Parameter, ParameterKind};
use crate::parser::{
    Confidence, ParsedParameter, QualityAssessment, QualityCategory, ScoreSource,
};

/// Assumed when nothing analyzable was extracted: "reasonably fresh" rather
/// than zero. A known business-risk tradeoff, kept as deployed.
const DEFAULT_OVERALL_SCORE: f64 = 7.0;

/// Raw text shorter than this cannot plausibly describe six parameters.
const MIN_TEXT_LEN: usize = 20;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weight of one scored parameter in the overall average. Visual parameters
/// dominate; the shape-estimated daging counts for less; bau and tekstur are
/// excluded before this is consulted.
fn weight(parameter: Parameter, confidence: Confidence) -> f64 {
    match (parameter.kind(), confidence) {
        (ParameterKind::Visual, Confidence::High) => 1.0,
        (ParameterKind::Visual, Confidence::Medium) => 0.9,
        (ParameterKind::Visual, Confidence::Low) => 0.7,
        (ParameterKind::Estimable, Confidence::High) => 0.8,
        (ParameterKind::Estimable, Confidence::Medium) => 0.6,
        (ParameterKind::Estimable, Confidence::Low) => 0.5,
        (ParameterKind::Sensory, _) => 0.0,
    }
}

/// Confidence-weighted average over analyzable parameters. Scores of exactly
/// 4 are excluded here too, consistent with the SNI scale.
pub fn calculate_overall_score(parameters: &[ParsedParameter]) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;

    for p in parameters {
        let Some(score) = p.score else { continue };
        if !p.is_analyzable || score == 4 {
            continue;
        }
        let w = weight(p.parameter, p.confidence);
        weighted_sum += w * f64::from(score);
        weight_sum += w;
    }

    if weight_sum == 0.0 {
        return DEFAULT_OVERALL_SCORE;
    }
    round1(weighted_sum / weight_sum)
}

/// Category from a simple unweighted mean over scored analyzable parameters,
/// independent of the weighted overall score. With nothing to average, the
/// given score is mapped directly.
pub fn determine_category(score: f64, parameters: &[ParsedParameter]) -> QualityCategory {
    let scored: Vec<f64> = parameters
        .iter()
        .filter(|p| p.is_analyzable)
        .filter_map(|p| p.score)
        .map(f64::from)
        .collect();

    let mean = if scored.is_empty() {
        score
    } else {
        scored.iter().sum::<f64>() / scored.len() as f64
    };

    if mean >= 8.5 {
        QualityCategory::Prima
    } else if mean >= 7.0 {
        QualityCategory::Baik
    } else if mean >= 5.0 {
        QualityCategory::Sedang
    } else {
        QualityCategory::Buruk
    }
}

/// Hard issues and soft warnings over a finished extraction, with a
/// floor-clamped linear confidence penalty.
pub fn assess_quality(parameters: &[ParsedParameter], raw_text: &str) -> QualityAssessment {
    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    if raw_text.trim().len() < MIN_TEXT_LEN {
        issues.push("Teks analisis terlalu pendek untuk dinilai".to_string());
    }

    // Estimated scores don't count as extractions; only cascade hits do.
    let extracted = parameters
        .iter()
        .filter(|p| p.is_analyzable && p.source != ScoreSource::KeywordFallback)
        .count();
    if extracted < 3 {
        issues.push(format!(
            "Hanya {extracted} dari 4 parameter visual yang terbaca dari teks analisis"
        ));
    }

    let low_confidence = parameters
        .iter()
        .filter(|p| p.confidence == Confidence::Low)
        .count();
    if low_confidence > 2 {
        warnings.push(format!(
            "{low_confidence} parameter memiliki tingkat keyakinan rendah"
        ));
    }

    let scores: Vec<u8> = parameters.iter().filter_map(|p| p.score).collect();
    if let (Some(min), Some(max)) = (scores.iter().min(), scores.iter().max()) {
        if max - min > 4 {
            warnings.push("Rentang skor antar parameter melebihi 4 poin".to_string());
        }
    }

    let confidence =
        round2((1.0 - 0.15 * issues.len() as f64 - 0.05 * warnings.len() as f64).max(0.6));

    QualityAssessment {
        is_valid: issues.is_empty(),
        issues,
        warnings,
        confidence,
    }
}

/// Actionable follow-ups for the person holding the fish.
pub fn generate_recommendations(
    assessment: &QualityAssessment,
    parameters: &[ParsedParameter],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !assessment.is_valid {
        recommendations.push(
            "Hasil ekstraksi kurang andal, lakukan verifikasi manual terhadap sampel".to_string(),
        );
    }
    if assessment.confidence < 0.8 {
        recommendations.push(
            "Gunakan foto dengan pencahayaan lebih baik dan fokus pada bagian mata serta insang"
                .to_string(),
        );
    }

    let manual: Vec<&str> = parameters
        .iter()
        .filter(|p| !p.is_analyzable)
        .map(|p| p.parameter.field_name())
        .collect();
    if !manual.is_empty() {
        recommendations.push(format!(
            "Parameter {} tidak dapat dinilai dari foto, lakukan pemeriksaan fisik langsung",
            manual.join(" dan ")
        ));
    }

    recommendations
}
