//! The extraction cascade: five regex strategies per parameter, tried in
//! fixed priority order.
//!
//! Each strategy is an independent rule with its own confidence tier, so a
//! new AI output format means adding a rule, not touching aggregation. All
//! thirty (parameter, strategy) regexes are compiled once up front.

use crate::core::Parameter;
use crate::parser::fallback;
use crate::parser::{Confidence, ScoreSource};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Cascade order. The first strategy that matches with a valid 1-9 score
/// wins; later strategies are not tried.
pub const STRATEGIES: [ScoreSource; 5] = [
    ScoreSource::TableRow,
    ScoreSource::TableRowAlt,
    ScoreSource::InlineScoreFirst,
    ScoreSource::InlineKeywordFirst,
    ScoreSource::BareNumber,
];

/// Table matches are trusted, inline keyword matches less so, a bare number
/// near the parameter name least of all.
pub fn strategy_confidence(strategy: ScoreSource) -> Confidence {
    match strategy {
        ScoreSource::TableRow | ScoreSource::TableRowAlt => Confidence::High,
        ScoreSource::InlineScoreFirst | ScoreSource::InlineKeywordFirst => Confidence::Medium,
        ScoreSource::BareNumber => Confidence::Low,
        ScoreSource::KeywordFallback => Confidence::Low,
    }
}

/// A successful cascade hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub score: u8,
    pub condition: String,
    pub confidence: Confidence,
    pub source: ScoreSource,
    pub justification: String,
}

/// Any condition keyword known for the parameter, as a regex alternation.
fn keyword_alternation(parameter: Parameter) -> String {
    let profile = fallback::profile(parameter);
    profile
        .positive
        .iter()
        .chain(profile.negative.iter())
        .copied()
        .collect::<Vec<_>>()
        .join("|")
}

fn pattern_for(strategy: ScoreSource, parameter: Parameter) -> String {
    let name = parameter.key();
    let keywords = keyword_alternation(parameter);
    match strategy {
        // | Mata | 8 | jernih, cembung |
        ScoreSource::TableRow => format!(
            r"(?im)\|[^|\n]*\b{name}\b[^|\n]*\|\s*([1-9])\s*\|([^|\n]*)"
        ),
        // | Mata | jernih, cembung | 8 |
        ScoreSource::TableRowAlt => format!(
            r"(?im)\|[^|\n]*\b{name}\b[^|\n]*\|([^|\n]*[a-z][^|\n]*)\|\s*([1-9])\s*(?:\||$)"
        ),
        // "mata ... 8 ... jernih"
        ScoreSource::InlineScoreFirst => format!(
            r"(?i)\b{name}\b[^\n]{{0,60}}?\b([1-9])\b[^\n]{{0,80}}?\b({keywords})\b"
        ),
        // "mata ... jernih ... 8"
        ScoreSource::InlineKeywordFirst => format!(
            r"(?i)\b{name}\b[^\n]{{0,60}}?\b({keywords})\b[^\n]{{0,60}}?\b([1-9])\b"
        ),
        // First digit after the parameter name, same line.
        ScoreSource::BareNumber => format!(r"(?i)\b{name}\b[^\d\n]{{0,60}}([1-9])\b"),
        ScoreSource::KeywordFallback => unreachable!("fallback is not a cascade strategy"),
    }
}

static REGEXES: Lazy<HashMap<(Parameter, ScoreSource), Regex>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for parameter in Parameter::ALL {
        for strategy in STRATEGIES {
            let regex = Regex::new(&pattern_for(strategy, parameter))
                .expect("cascade patterns are statically known");
            map.insert((parameter, strategy), regex);
        }
    }
    map
});

/// Run the cascade for one parameter. `None` means no strategy produced a
/// valid score and the caller should fall back to keyword estimation.
pub fn extract(text: &str, parameter: Parameter) -> Option<Extraction> {
    for strategy in STRATEGIES {
        let regex = &REGEXES[&(parameter, strategy)];
        if let Some(captures) = regex.captures(text) {
            if let Some(extraction) = build_extraction(strategy, &captures) {
                return Some(extraction);
            }
        }
    }
    None
}

fn build_extraction(strategy: ScoreSource, captures: &regex::Captures<'_>) -> Option<Extraction> {
    let (score_group, condition_group) = match strategy {
        ScoreSource::TableRow => (1, Some(2)),
        ScoreSource::TableRowAlt => (2, Some(1)),
        ScoreSource::InlineScoreFirst => (1, Some(2)),
        ScoreSource::InlineKeywordFirst => (2, Some(1)),
        ScoreSource::BareNumber => (1, None),
        ScoreSource::KeywordFallback => return None,
    };

    let score: u8 = captures.get(score_group)?.as_str().parse().ok()?;
    if !(1..=9).contains(&score) {
        return None;
    }

    let condition = condition_group
        .and_then(|g| captures.get(g))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "tidak ada deskripsi kondisi".to_string());

    let justification = match strategy {
        ScoreSource::TableRow | ScoreSource::TableRowAlt => {
            "Skor diambil dari tabel hasil analisis".to_string()
        }
        ScoreSource::InlineScoreFirst | ScoreSource::InlineKeywordFirst => {
            "Skor dan deskripsi kondisi ditemukan berdekatan dalam teks".to_string()
        }
        ScoreSource::BareNumber => "Angka pertama setelah nama parameter".to_string(),
        ScoreSource::KeywordFallback => unreachable!(),
    };

    Some(Extraction {
        score,
        condition,
        confidence: strategy_confidence(strategy),
        source: strategy,
        justification,
    })
}
