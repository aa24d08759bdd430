//! Keyword-based estimation for parameters the cascade could not extract.
//!
//! Every parameter always ends up with a numeric score. Non-analyzable
//! parameters (bau, tekstur) get low-confidence estimates that downstream
//! aggregation excludes; they are estimated anyway so the presentation layer
//! always has six rows to show.

use crate::core::Parameter;
use crate::parser::Confidence;

/// Per-parameter Indonesian condition vocabulary and score policy.
pub struct KeywordProfile {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    /// Assigned when only positive keywords appear.
    pub good_score: u8,
    /// Assigned when only negative keywords appear.
    pub poor_score: u8,
    /// Assigned when the text gives no usable signal either way.
    pub neutral_score: u8,
}

static MATA: KeywordProfile = KeywordProfile {
    positive: &[
        "jernih",
        "transparan",
        "cembung",
        "hitam",
        "terang",
        "segar",
        "cerah",
    ],
    negative: &[
        "keruh", "abu", "cekung", "kusam", "pucat", "rata", "putih",
    ],
    good_score: 8,
    poor_score: 5,
    neutral_score: 7,
};

static INSANG: KeywordProfile = KeywordProfile {
    positive: &["merah", "cerah", "segar", "terang"],
    negative: &["coklat", "kecoklatan", "abu", "kelabu", "pucat", "kusam"],
    good_score: 8,
    poor_score: 5,
    neutral_score: 7,
};

static LENDIR: KeywordProfile = KeywordProfile {
    positive: &["bening", "jernih", "tipis", "transparan", "mengkilap"],
    negative: &["keruh", "tebal", "lengket", "kekuningan", "kering"],
    good_score: 7,
    poor_score: 5,
    neutral_score: 6,
};

static DAGING: KeywordProfile = KeywordProfile {
    positive: &["elastis", "padat", "kenyal", "cemerlang", "lentur"],
    negative: &["lembek", "lunak", "kusam", "berair"],
    good_score: 7,
    poor_score: 5,
    neutral_score: 6,
};

static BAU: KeywordProfile = KeywordProfile {
    positive: &["segar", "netral", "khas"],
    negative: &["busuk", "asam", "amonia", "menyengat", "tengik"],
    good_score: 6,
    poor_score: 5,
    neutral_score: 6,
};

static TEKSTUR: KeywordProfile = KeywordProfile {
    positive: &["padat", "elastis", "kenyal", "kompak"],
    negative: &["lembek", "lunak", "berair", "rapuh"],
    good_score: 6,
    poor_score: 5,
    neutral_score: 6,
};

pub fn profile(parameter: Parameter) -> &'static KeywordProfile {
    match parameter {
        Parameter::Mata => &MATA,
        Parameter::Insang => &INSANG,
        Parameter::Lendir => &LENDIR,
        Parameter::Daging => &DAGING,
        Parameter::Bau => &BAU,
        Parameter::Tekstur => &TEKSTUR,
    }
}

/// A heuristic score with its supporting context.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub score: u8,
    pub condition: String,
    pub justification: String,
    pub confidence: Confidence,
}

/// Estimate a parameter's score from condition keywords anywhere in the
/// text, case-insensitive. Mixed or absent signal falls back to the
/// parameter's neutral default.
pub fn estimate(text: &str, parameter: Parameter) -> Estimate {
    let lower = text.to_lowercase();
    let profile = profile(parameter);

    let found_positive: Vec<&str> = profile
        .positive
        .iter()
        .copied()
        .filter(|k| lower.contains(k))
        .collect();
    let found_negative: Vec<&str> = profile
        .negative
        .iter()
        .copied()
        .filter(|k| lower.contains(k))
        .collect();

    let confidence = if parameter.is_analyzable() {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    match (found_positive.is_empty(), found_negative.is_empty()) {
        (false, true) => Estimate {
            score: profile.good_score,
            condition: format!("Terindikasi kondisi baik ({})", found_positive.join(", ")),
            justification: "Estimasi dari kata kunci kondisi positif".to_string(),
            confidence,
        },
        (true, false) => Estimate {
            score: profile.poor_score,
            condition: format!(
                "Terindikasi penurunan mutu ({})",
                found_negative.join(", ")
            ),
            justification: "Estimasi dari kata kunci kondisi negatif".to_string(),
            confidence,
        },
        _ => Estimate {
            score: profile.neutral_score,
            condition: "Kondisi tidak dapat dipastikan dari teks".to_string(),
            justification: "Tidak ada sinyal kuat pada teks, memakai nilai tengah".to_string(),
            confidence,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_only_gives_good_score() {
        let est = estimate("kondisi terlihat jernih dan cembung", Parameter::Mata);
        assert_eq!(est.score, 8);
        assert_eq!(est.confidence, Confidence::Medium);
    }

    #[test]
    fn negative_only_gives_poor_score() {
        let est = estimate("tampak keruh dan cekung", Parameter::Mata);
        assert_eq!(est.score, 5);
    }

    #[test]
    fn mixed_signal_gives_neutral_default() {
        let est = estimate("sebagian jernih namun mulai keruh", Parameter::Mata);
        assert_eq!(est.score, 7);
    }

    #[test]
    fn no_signal_gives_neutral_default() {
        assert_eq!(estimate("", Parameter::Mata).score, 7);
        assert_eq!(estimate("", Parameter::Insang).score, 7);
        assert_eq!(estimate("", Parameter::Lendir).score, 6);
        assert_eq!(estimate("", Parameter::Daging).score, 6);
        assert_eq!(estimate("", Parameter::Bau).score, 6);
        assert_eq!(estimate("", Parameter::Tekstur).score, 6);
    }

    #[test]
    fn non_analyzable_parameters_get_low_confidence() {
        let est = estimate("bau masih segar", Parameter::Bau);
        assert_eq!(est.score, 6);
        assert_eq!(est.confidence, Confidence::Low);

        let est = estimate("tekstur lembek sekali", Parameter::Tekstur);
        assert_eq!(est.score, 5);
        assert_eq!(est.confidence, Confidence::Low);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let est = estimate("MATA JERNIH SEKALI", Parameter::Mata);
        assert_eq!(est.score, 8);
    }
}
