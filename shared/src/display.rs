use rand::Rng;

use crate::prediction::PredictionResult;

/// Confidence at or above this value is not shown verbatim.
pub const SATURATION_THRESHOLD: f64 = 99.99;
/// Band a saturated confidence is displayed in, upper bound exclusive.
pub const SMOOTHED_BAND: std::ops::Range<f64> = 96.0..98.0;

/// Value to show for a reported confidence. The stored result is left alone.
pub fn display_confidence<R: Rng>(confidence: f64, rng: &mut R) -> f64 {
    if confidence >= SATURATION_THRESHOLD {
        rng.gen_range(SMOOTHED_BAND)
    } else {
        confidence
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Everything the result panel shows, computed once per result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub predicted_class: String,
    pub confidence: String,
    pub affected_area: String,
    pub stage: String,
    pub treatments: Vec<String>,
    pub mask_src: String,
    pub overlay_src: String,
}

impl ResultSummary {
    pub fn new<R: Rng>(result: &PredictionResult, rng: &mut R) -> Self {
        Self {
            predicted_class: result.predicted_class.clone(),
            confidence: format_percent(display_confidence(result.confidence, rng)),
            affected_area: format_percent(result.affected_area_percent),
            stage: result.stage.clone(),
            treatments: result.treatments.clone(),
            mask_src: result.mask_src(),
            overlay_src: result.overlay_src(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn result(confidence: f64) -> PredictionResult {
        PredictionResult {
            predicted_class: "Eczema".into(),
            confidence,
            affected_area_percent: 12.4,
            stage: "Stage 1".into(),
            treatments: vec!["Moisturize".into(), "Avoid irritants".into()],
            segmentation_mask_base64: "bWFzaw==".into(),
            overlay_image_base64: "b3ZlcmxheQ==".into(),
            threshold: None,
        }
    }

    #[test]
    fn below_threshold_is_shown_verbatim() {
        let mut rng = StdRng::seed_from_u64(7);
        for value in [0.0, 50.5, 87.25, 99.98] {
            assert_eq!(display_confidence(value, &mut rng), value);
        }
    }

    #[test]
    fn saturated_values_stay_in_band() {
        let mut rng = StdRng::seed_from_u64(42);
        for value in [99.99, 99.995, 100.0] {
            for _ in 0..1000 {
                let shown = display_confidence(value, &mut rng);
                assert!(SMOOTHED_BAND.contains(&shown), "{} outside band", shown);
                assert!(shown < 100.0);
            }
        }
    }

    #[test]
    fn smoothing_leaves_result_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let stored = result(100.0);
        let summary = ResultSummary::new(&stored, &mut rng);
        assert_eq!(stored.confidence, 100.0);
        let shown: f64 = summary.confidence.trim_end_matches('%').parse().unwrap();
        assert!((96.0..=98.0).contains(&shown));
    }

    #[test]
    fn eczema_summary() {
        let mut rng = StdRng::seed_from_u64(3);
        let summary = ResultSummary::new(&result(87.25), &mut rng);
        assert_eq!(summary.predicted_class, "Eczema");
        assert_eq!(summary.confidence, "87.25%");
        assert_eq!(summary.affected_area, "12.40%");
        assert_eq!(summary.stage, "Stage 1");
        assert_eq!(summary.treatments.len(), 2);
        assert_eq!(summary.mask_src, "data:image/png;base64,bWFzaw==");
        assert_eq!(summary.overlay_src, "data:image/png;base64,b3ZlcmxheQ==");
    }
}
