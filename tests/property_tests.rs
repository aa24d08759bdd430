use mutuikan::*;
use proptest::prelude::*;

fn arb_params() -> impl Strategy<Value = FishParameter> {
    let field = || proptest::option::of(0u8..=12u8);
    (field(), field(), field(), field(), field(), field()).prop_map(
        |(mata, insang, lendir, daging, bau, tekstur)| FishParameter {
            mata,
            insang,
            lendir,
            daging,
            bau,
            tekstur,
        },
    )
}

fn confidence_from(index: usize) -> Confidence {
    match index {
        0 => Confidence::High,
        1 => Confidence::Medium,
        _ => Confidence::Low,
    }
}

proptest! {
    #[test]
    fn skor_never_counts_excluded_values(params in arb_params()) {
        let sample = calculate_freshness(&params);
        let valid: Vec<f64> = params
            .observations()
            .filter_map(|(_, v)| v)
            .filter(|v| (1..=9).contains(v) && *v != 4)
            .map(f64::from)
            .collect();

        if valid.is_empty() {
            prop_assert_eq!(sample.skor, 0.0);
            prop_assert_eq!(sample.kategori, FreshnessCategory::Invalid);
        } else {
            let mean = valid.iter().sum::<f64>() / valid.len() as f64;
            let expected = (mean * 100.0).round() / 100.0;
            prop_assert_eq!(sample.skor, expected);
            prop_assert_eq!(sample.kategori, FreshnessCategory::from_score(expected));
        }
    }

    #[test]
    fn invalid_helpers_always_agree(params in arb_params()) {
        let sample = calculate_freshness(&params);
        prop_assert_eq!(
            has_invalid_values(&sample),
            !invalid_parameters(&sample).is_empty()
        );
    }

    #[test]
    fn parser_always_scores_all_six(text in ".{0,400}") {
        let result = parse_analysis_result(&text);
        prop_assert_eq!(result.parameters.len(), 6);
        for p in &result.parameters {
            prop_assert!(p.score.is_some());
            let score = p.score.unwrap();
            prop_assert!((1..=9).contains(&score));
        }
        prop_assert_eq!(result.analyzable_count, 4);
    }

    #[test]
    fn quality_confidence_stays_within_bounds(text in ".{0,200}") {
        let result = parse_analysis_result(&text);
        prop_assert!(result.quality.confidence >= 0.6);
        prop_assert!(result.quality.confidence <= 1.0);
    }

    #[test]
    fn overall_score_bounded_by_contributing_scores(
        scores in proptest::collection::vec(1u8..=9, 6),
        confidences in proptest::collection::vec(0usize..3, 6),
    ) {
        let parameters: Vec<ParsedParameter> = Parameter::ALL
            .iter()
            .zip(scores.iter().zip(&confidences))
            .map(|(parameter, (score, confidence))| ParsedParameter {
                parameter: *parameter,
                display_name: parameter.display_name().to_string(),
                condition: String::new(),
                score: Some(*score),
                justification: String::new(),
                confidence: confidence_from(*confidence),
                is_analyzable: parameter.is_analyzable(),
                source: ScoreSource::TableRow,
            })
            .collect();

        let overall = calculate_overall_score(&parameters);
        let contributing: Vec<f64> = parameters
            .iter()
            .filter(|p| p.is_analyzable)
            .filter_map(|p| p.score)
            .filter(|s| *s != 4)
            .map(f64::from)
            .collect();

        if contributing.is_empty() {
            prop_assert_eq!(overall, 7.0);
        } else {
            let min = contributing.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = contributing.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(overall >= min && overall <= max);
        }
    }
}
