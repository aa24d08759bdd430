//! Domain types for SNI 2729:2013 organoleptic fish quality scoring.

pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The six sensory parameters of the SNI 2729:2013 scale.
///
/// Iteration order is fixed (Mata first) and load-bearing: tie-breaking in
/// aggregates and CSV column order both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Mata,
    Insang,
    Lendir,
    Daging,
    Bau,
    Tekstur,
}

/// How a parameter's condition can be established from a photograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// Directly visible in a photo (mata, insang, lendir).
    Visual,
    /// Estimable from overall body shape (daging).
    Estimable,
    /// Requires physical inspection (bau, tekstur).
    Sensory,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::Mata,
        Parameter::Insang,
        Parameter::Lendir,
        Parameter::Daging,
        Parameter::Bau,
        Parameter::Tekstur,
    ];

    /// Lowercase key used in parsed-analysis output and pattern matching.
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Mata => "mata",
            Parameter::Insang => "insang",
            Parameter::Lendir => "lendir",
            Parameter::Daging => "daging",
            Parameter::Bau => "bau",
            Parameter::Tekstur => "tekstur",
        }
    }

    /// Display name shown in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Parameter::Mata => "Mata (Eye)",
            Parameter::Insang => "Insang (Gill)",
            Parameter::Lendir => "Lendir (Slime)",
            Parameter::Daging => "Daging (Flesh)",
            Parameter::Bau => "Bau (Smell)",
            Parameter::Tekstur => "Tekstur (Texture)",
        }
    }

    /// Capitalized Indonesian field name, as used in CSV headers and the
    /// upstream application's payloads.
    pub fn field_name(&self) -> &'static str {
        match self {
            Parameter::Mata => "Mata",
            Parameter::Insang => "Insang",
            Parameter::Lendir => "Lendir",
            Parameter::Daging => "Daging",
            Parameter::Bau => "Bau",
            Parameter::Tekstur => "Tekstur",
        }
    }

    /// Static classification: can this parameter be assessed from a photo?
    ///
    /// This is a fixed property of the parameter, never inferred at runtime.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Parameter::Mata | Parameter::Insang | Parameter::Lendir => ParameterKind::Visual,
            Parameter::Daging => ParameterKind::Estimable,
            Parameter::Bau | Parameter::Tekstur => ParameterKind::Sensory,
        }
    }

    pub fn is_analyzable(&self) -> bool {
        self.kind() != ParameterKind::Sensory
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Parameter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mata" => Ok(Parameter::Mata),
            "insang" => Ok(Parameter::Insang),
            "lendir" => Ok(Parameter::Lendir),
            "daging" => Ok(Parameter::Daging),
            "bau" => Ok(Parameter::Bau),
            "tekstur" => Ok(Parameter::Tekstur),
            _ => Err(()),
        }
    }
}

/// One observation per sensory parameter.
///
/// `None` means "not observed yet". Observed values live on the 1-9 scale
/// where 4 is a disallowed value under SNI 2729:2013: it can be recorded,
/// but never contributes to a freshness average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishParameter {
    #[serde(rename = "Mata")]
    pub mata: Option<u8>,
    #[serde(rename = "Insang")]
    pub insang: Option<u8>,
    #[serde(rename = "Lendir")]
    pub lendir: Option<u8>,
    #[serde(rename = "Daging")]
    pub daging: Option<u8>,
    #[serde(rename = "Bau")]
    pub bau: Option<u8>,
    #[serde(rename = "Tekstur")]
    pub tekstur: Option<u8>,
}

impl FishParameter {
    pub fn get(&self, parameter: Parameter) -> Option<u8> {
        match parameter {
            Parameter::Mata => self.mata,
            Parameter::Insang => self.insang,
            Parameter::Lendir => self.lendir,
            Parameter::Daging => self.daging,
            Parameter::Bau => self.bau,
            Parameter::Tekstur => self.tekstur,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: Option<u8>) {
        match parameter {
            Parameter::Mata => self.mata = value,
            Parameter::Insang => self.insang = value,
            Parameter::Lendir => self.lendir = value,
            Parameter::Daging => self.daging = value,
            Parameter::Bau => self.bau = value,
            Parameter::Tekstur => self.tekstur = value,
        }
    }

    /// Observations in fixed parameter order.
    pub fn observations(&self) -> impl Iterator<Item = (Parameter, Option<u8>)> + '_ {
        Parameter::ALL.iter().map(move |p| (*p, self.get(*p)))
    }
}

/// Freshness category over the computed score.
///
/// The [6,8) and [4,6) bands deliberately collapse to the same label; the
/// band table is carried over from the SNI rule set as deployed, quirks
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FreshnessCategory {
    Baik,    // score in [8, 9]
    Sedang,  // score in [4, 8)
    Buruk,   // score in [1, 4)
    Invalid, // no valid observations
}

impl FreshnessCategory {
    /// Threshold lookup, exposed standalone so a category can be re-derived
    /// from an already-computed score without rebuilding a sample.
    pub fn from_score(score: f64) -> Self {
        if (8.0..=9.0).contains(&score) {
            FreshnessCategory::Baik
        } else if (6.0..8.0).contains(&score) {
            FreshnessCategory::Sedang
        } else if (4.0..6.0).contains(&score) {
            FreshnessCategory::Sedang
        } else if (1.0..4.0).contains(&score) {
            FreshnessCategory::Buruk
        } else {
            FreshnessCategory::Invalid
        }
    }

    /// Presentation status tag for badges and terminal colors.
    pub fn status(&self) -> StatusTag {
        match self {
            FreshnessCategory::Baik => StatusTag::Success,
            FreshnessCategory::Sedang => StatusTag::Warning,
            FreshnessCategory::Buruk => StatusTag::Error,
            FreshnessCategory::Invalid => StatusTag::Neutral,
        }
    }

    /// Consumption advisory for the category.
    pub fn recommendation(&self) -> &'static str {
        match self {
            FreshnessCategory::Baik => "Ikan segar dan layak dikonsumsi.",
            FreshnessCategory::Sedang => {
                "Ikan masih layak namun sebaiknya segera diolah atau dimasak."
            }
            FreshnessCategory::Buruk => "Ikan tidak layak dikonsumsi, sebaiknya ditolak.",
            FreshnessCategory::Invalid => "Data pengamatan belum lengkap, lakukan penilaian ulang.",
        }
    }

    /// Ordering rank for sorting, best first.
    pub fn rank(&self) -> u8 {
        match self {
            FreshnessCategory::Baik => 3,
            FreshnessCategory::Sedang => 2,
            FreshnessCategory::Buruk => 1,
            FreshnessCategory::Invalid => 0,
        }
    }
}

impl fmt::Display for FreshnessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FreshnessCategory::Baik => "Baik",
            FreshnessCategory::Sedang => "Sedang",
            FreshnessCategory::Buruk => "Buruk",
            FreshnessCategory::Invalid => "Invalid",
        };
        f.write_str(label)
    }
}

impl FromStr for FreshnessCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Baik" => Ok(FreshnessCategory::Baik),
            "Sedang" => Ok(FreshnessCategory::Sedang),
            "Buruk" => Ok(FreshnessCategory::Buruk),
            "Invalid" => Ok(FreshnessCategory::Invalid),
            _ => Err(()),
        }
    }
}

/// Four-way presentation status derived from a freshness category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTag {
    Success,
    Warning,
    Error,
    Neutral,
}

/// A scored observation set. Immutable once created: new observations
/// produce a new sample through `calculate_freshness`, never an in-place
/// update, so `skor` and `kategori` can never drift from the parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishSample {
    pub id: Uuid,
    #[serde(flatten)]
    pub parameters: FishParameter,
    #[serde(rename = "Skor")]
    pub skor: f64,
    #[serde(rename = "Kategori")]
    pub kategori: FreshnessCategory,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "fishName", skip_serializing_if = "Option::is_none")]
    pub fish_name: Option<String>,
}

/// Result of the per-parameter cross-sample aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestParameter {
    pub parameter: Parameter,
    pub score: f64,
}

/// Sortable fields of a `FishSample`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Parameter(Parameter),
    Skor,
    Kategori,
    Timestamp,
    FishName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_order_is_fixed() {
        let keys: Vec<&str> = Parameter::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(
            keys,
            vec!["mata", "insang", "lendir", "daging", "bau", "tekstur"]
        );
    }

    #[test]
    fn analyzability_is_static() {
        assert!(Parameter::Mata.is_analyzable());
        assert!(Parameter::Insang.is_analyzable());
        assert!(Parameter::Lendir.is_analyzable());
        assert!(Parameter::Daging.is_analyzable());
        assert!(!Parameter::Bau.is_analyzable());
        assert!(!Parameter::Tekstur.is_analyzable());
    }

    #[test]
    fn category_boundaries_both_sides() {
        assert_eq!(FreshnessCategory::from_score(9.0), FreshnessCategory::Baik);
        assert_eq!(FreshnessCategory::from_score(8.0), FreshnessCategory::Baik);
        assert_eq!(
            FreshnessCategory::from_score(7.999),
            FreshnessCategory::Sedang
        );
        assert_eq!(
            FreshnessCategory::from_score(6.0),
            FreshnessCategory::Sedang
        );
        assert_eq!(
            FreshnessCategory::from_score(4.0),
            FreshnessCategory::Sedang
        );
        assert_eq!(
            FreshnessCategory::from_score(3.999),
            FreshnessCategory::Buruk
        );
        assert_eq!(FreshnessCategory::from_score(1.0), FreshnessCategory::Buruk);
        assert_eq!(
            FreshnessCategory::from_score(0.999),
            FreshnessCategory::Invalid
        );
        assert_eq!(
            FreshnessCategory::from_score(0.0),
            FreshnessCategory::Invalid
        );
    }

    #[test]
    fn status_mapping() {
        assert_eq!(FreshnessCategory::Baik.status(), StatusTag::Success);
        assert_eq!(FreshnessCategory::Sedang.status(), StatusTag::Warning);
        assert_eq!(FreshnessCategory::Buruk.status(), StatusTag::Error);
        assert_eq!(FreshnessCategory::Invalid.status(), StatusTag::Neutral);
    }

    #[test]
    fn category_label_round_trip() {
        for cat in [
            FreshnessCategory::Baik,
            FreshnessCategory::Sedang,
            FreshnessCategory::Buruk,
            FreshnessCategory::Invalid,
        ] {
            assert_eq!(cat.to_string().parse::<FreshnessCategory>(), Ok(cat));
        }
    }
}
