//! Freshness scoring over manually observed SNI 2729:2013 parameters.
//!
//! All functions here are pure except for the id/timestamp assignment in
//! [`calculate_freshness`]; nothing touches I/O.

use crate::core::{BestParameter, FishParameter, FishSample, FreshnessCategory, Parameter, SortField};
use chrono::Utc;
use std::cmp::Ordering;
use uuid::Uuid;

/// A value contributes to a freshness average only if it is on the 1-9 scale
/// and is not the disallowed value 4.
fn is_valid_observation(value: u8) -> bool {
    (1..=9).contains(&value) && value != 4
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score a set of observations into a new sample.
///
/// Out-of-range and value-4 observations are silently excluded from the
/// average; this is the documented SNI policy, not an error. With no valid
/// observations at all the sample carries the `skor = 0` / `Invalid`
/// sentinel, which callers must check for explicitly.
pub fn calculate_freshness(params: &FishParameter) -> FishSample {
    let mut sum = 0u32;
    let mut valid_count = 0u32;

    for (_, value) in params.observations() {
        if let Some(v) = value {
            if is_valid_observation(v) {
                sum += u32::from(v);
                valid_count += 1;
            }
        }
    }

    let skor = if valid_count == 0 {
        0.0
    } else {
        round2(f64::from(sum) / f64::from(valid_count))
    };

    FishSample {
        id: Uuid::new_v4(),
        parameters: *params,
        skor,
        kategori: FreshnessCategory::from_score(skor),
        timestamp: Utc::now(),
        fish_name: None,
    }
}

/// Like [`calculate_freshness`], carrying a display label for the sample.
pub fn calculate_freshness_named(params: &FishParameter, fish_name: &str) -> FishSample {
    let mut sample = calculate_freshness(params);
    sample.fish_name = Some(fish_name.to_string());
    sample
}

/// Which sensory parameter scores highest on average across a collection.
///
/// This aggregate answers a different question than per-sample freshness, so
/// value-4 observations are included in the means here. Unset observations
/// are skipped; a parameter nobody observed is out of contention. Ties keep
/// the earlier parameter in the fixed iteration order.
pub fn find_best_parameter(samples: &[FishSample]) -> Option<BestParameter> {
    let mut best: Option<BestParameter> = None;

    for parameter in Parameter::ALL {
        let values: Vec<f64> = samples
            .iter()
            .filter_map(|s| s.parameters.get(parameter))
            .map(f64::from)
            .collect();
        if values.is_empty() {
            continue;
        }
        let mean = round2(values.iter().sum::<f64>() / values.len() as f64);
        let beats = best.map_or(true, |b| mean > b.score);
        if beats {
            best = Some(BestParameter {
                parameter,
                score: mean,
            });
        }
    }

    best
}

/// True when any parameter of the sample holds the disallowed value 4.
pub fn has_invalid_values(sample: &FishSample) -> bool {
    !invalid_parameters(sample).is_empty()
}

/// The parameters of the sample holding the disallowed value 4.
pub fn invalid_parameters(sample: &FishSample) -> Vec<Parameter> {
    sample
        .parameters
        .observations()
        .filter(|(_, value)| *value == Some(4))
        .map(|(parameter, _)| parameter)
        .collect()
}

/// Stable sort over any sample field. Ties are left in input order.
pub fn sort_samples(samples: &mut [FishSample], field: SortField, ascending: bool) {
    samples.sort_by(|a, b| {
        let ord = compare_field(a, b, field);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

fn compare_field(a: &FishSample, b: &FishSample, field: SortField) -> Ordering {
    match field {
        SortField::Parameter(p) => a.parameters.get(p).cmp(&b.parameters.get(p)),
        SortField::Skor => a.skor.partial_cmp(&b.skor).unwrap_or(Ordering::Equal),
        SortField::Kategori => a.kategori.rank().cmp(&b.kategori.rank()),
        SortField::Timestamp => a.timestamp.cmp(&b.timestamp),
        SortField::FishName => a.fish_name.cmp(&b.fish_name),
    }
}
