//! Adaptive Text Fitter — picks the largest font size at which a single-line text
//! block does not overflow its container.
//!
//! # Algorithm
//! Start at `range.max_px`. While the natural width at the current size exceeds the
//! container width and the size is still above `range.min_px`, step down by
//! `range.step_px`. The floor is best effort: when even `min_px` overflows, `min_px`
//! is returned and the outcome is marked `overflows`.
//!
//! Size computation is pure. Applying the chosen size (and its derived line-height)
//! to a presentation target is the caller's job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::font_metrics::TextMeasurer;

/// Line-height as a multiple of the chosen font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Upper bound on `(max_px - min_px) / step_px` for a range to be walked.
pub const MAX_FIT_STEPS: f32 = 1000.0;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Candidate font sizes, walked from `max_px` down to `min_px` in `step_px` decrements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitRange {
    pub max_px: f32,
    pub min_px: f32,
    #[serde(default = "default_step_px")]
    pub step_px: f32,
}

fn default_step_px() -> f32 {
    1.0
}

impl FitRange {
    pub const fn new(max_px: f32, min_px: f32, step_px: f32) -> Self {
        Self {
            max_px,
            min_px,
            step_px,
        }
    }

    /// A range is usable when `max >= min > 0` and `step > 0`, all finite, and
    /// walking it takes at most [`MAX_FIT_STEPS`] decrements.
    pub fn is_usable(&self) -> bool {
        self.max_px.is_finite()
            && self.min_px.is_finite()
            && self.step_px.is_finite()
            && self.min_px > 0.0
            && self.max_px >= self.min_px
            && self.step_px > 0.0
            && (self.max_px - self.min_px) / self.step_px <= MAX_FIT_STEPS
    }
}

/// One fitting job: a text block, the width of its container, and its size range.
///
/// Built fresh for every layout pass and dropped once the outcome is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitTarget {
    pub text: String,
    pub container_width_px: f32,
    pub range: FitRange,
}

/// The size chosen for a target, with its derived line-height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitOutcome {
    pub font_size_px: f32,
    pub line_height_px: f32,
    /// True when the floor was reached and the text is still wider than its container.
    pub overflows: bool,
}

impl FitOutcome {
    fn at(font_size_px: f32, overflows: bool) -> Self {
        Self {
            font_size_px,
            line_height_px: line_height_for(font_size_px),
            overflows,
        }
    }

    /// Inline CSS for the presentation layer, e.g. `font-size: 26px; line-height: 31.2px`.
    pub fn css(&self) -> String {
        format!(
            "font-size: {}px; line-height: {}px",
            self.font_size_px, self.line_height_px
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Line-height that accompanies a font size.
///
/// Multiplied in f64 so the f32 result is the nearest value to the exact product
/// (22px gives 26.4, not 26.400002).
pub fn line_height_for(font_size_px: f32) -> f32 {
    (f64::from(font_size_px) * LINE_HEIGHT_RATIO) as f32
}

/// Chooses the largest size in `range` whose natural width fits `container_width_px`.
///
/// `natural_width` maps a font size to the rendered width of the text at that size.
/// Returns `None` (leave the size unchanged) when the container has no usable width
/// or the range is unusable; neither case calls `natural_width`.
///
/// The decrement is clamped at `min_px`, so the result always lies in
/// `[min_px, max_px]` even when `step_px` does not divide the range. A decrement
/// that rounds away to nothing at the current size jumps straight to `min_px`.
pub fn fit<F>(container_width_px: f32, natural_width: F, range: &FitRange) -> Option<f32>
where
    F: Fn(f32) -> f32,
{
    if !container_width_px.is_finite() || container_width_px <= 0.0 || !range.is_usable() {
        return None;
    }

    let mut size = range.max_px;
    while size > range.min_px && natural_width(size) > container_width_px {
        let next = (size - range.step_px).max(range.min_px);
        size = if next < size { next } else { range.min_px };
    }
    Some(size)
}

/// Fits a full target with an injected width measurer.
///
/// Empty or whitespace-only text is a no-op, like a missing container.
pub fn fit_target(target: &FitTarget, measurer: &dyn TextMeasurer) -> Option<FitOutcome> {
    if target.text.trim().is_empty() {
        return None;
    }

    let text = target.text.as_str();
    let width_at = |size: f32| measurer.natural_width(text, size);
    let size = fit(target.container_width_px, width_at, &target.range)?;

    let overflows = width_at(size) > target.container_width_px;
    if overflows {
        debug!(
            font_size_px = size,
            container_width_px = target.container_width_px,
            "Text still overflows at the minimum font size; accepting overflow"
        );
    }

    Some(FitOutcome::at(size, overflows))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{get_metrics, FontFamily};
    use std::cell::Cell;

    const TITLE_RANGE: FitRange = FitRange::new(40.0, 24.0, 1.0);

    /// 30 characters at 7.5 em-px each: width = 225 × size.
    fn thirty_chars(size: f32) -> f32 {
        225.0 * size
    }

    /// Measurer that charges a fixed width per character per px of font size.
    struct PerCharMeasurer(f32);

    impl TextMeasurer for PerCharMeasurer {
        fn natural_width(&self, text: &str, font_size_px: f32) -> f32 {
            text.chars().count() as f32 * self.0 * font_size_px
        }
    }

    // ── fit ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_fit_shrinks_until_text_fits() {
        // 225 × 27 = 6075 > 6000, 225 × 26 = 5850 ≤ 6000
        assert_eq!(fit(6000.0, thirty_chars, &TITLE_RANGE), Some(26.0));
    }

    #[test]
    fn test_fit_wide_container_keeps_max() {
        assert_eq!(fit(20000.0, thirty_chars, &TITLE_RANGE), Some(40.0));
    }

    #[test]
    fn test_fit_narrow_container_returns_floor() {
        // 225 × 24 = 5400 > 100 — floor reached, overflow accepted
        assert_eq!(fit(100.0, thirty_chars, &TITLE_RANGE), Some(24.0));
    }

    #[test]
    fn test_fit_exact_width_at_max_does_not_shrink() {
        assert_eq!(fit(9000.0, thirty_chars, &TITLE_RANGE), Some(40.0));
    }

    #[test]
    fn test_fit_result_always_within_range() {
        let ranges = [
            FitRange::new(40.0, 24.0, 1.0),
            FitRange::new(36.0, 18.0, 5.0),
            FitRange::new(22.0, 14.0, 3.0),
            FitRange::new(10.0, 10.0, 1.0),
        ];
        for range in &ranges {
            for width in [1.0, 50.0, 500.0, 2500.0, 5000.0, 1e6] {
                let size = fit(width, |s| 120.0 * s, range).unwrap();
                assert!(
                    size >= range.min_px && size <= range.max_px,
                    "{range:?} width {width}: size {size} escaped the range"
                );
            }
        }
    }

    #[test]
    fn test_fit_step_not_dividing_range_clamps_to_min() {
        // 40 → 35 → 30 → 25 → 24 (clamped, not 20)
        let range = FitRange::new(40.0, 24.0, 5.0);
        assert_eq!(fit(1.0, thirty_chars, &range), Some(24.0));
    }

    #[test]
    fn test_fit_is_monotonic_in_container_width() {
        let mut previous = 0.0_f32;
        let mut width = 0.0_f32;
        while width < 12000.0 {
            width += 250.0;
            let size = fit(width, thirty_chars, &TITLE_RANGE).unwrap();
            assert!(
                size >= previous,
                "size dropped from {previous} to {size} when width grew to {width}"
            );
            previous = size;
        }
    }

    #[test]
    fn test_fit_is_idempotent() {
        let first = fit(6000.0, thirty_chars, &TITLE_RANGE);
        let second = fit(6000.0, thirty_chars, &TITLE_RANGE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fit_zero_width_container_is_noop_without_measuring() {
        let calls = Cell::new(0u32);
        let measure = |s: f32| {
            calls.set(calls.get() + 1);
            thirty_chars(s)
        };
        assert_eq!(fit(0.0, measure, &TITLE_RANGE), None);
        assert_eq!(fit(-10.0, measure, &TITLE_RANGE), None);
        assert_eq!(fit(f32::NAN, measure, &TITLE_RANGE), None);
        assert_eq!(calls.get(), 0, "guard must short-circuit before measuring");
    }

    #[test]
    fn test_fit_unusable_range_is_noop() {
        let bad = [
            FitRange::new(24.0, 40.0, 1.0),
            FitRange::new(40.0, 0.0, 1.0),
            FitRange::new(40.0, 24.0, 0.0),
            FitRange::new(40.0, 24.0, -1.0),
            FitRange::new(f32::INFINITY, 24.0, 1.0),
        ];
        for range in &bad {
            assert_eq!(fit(6000.0, thirty_chars, range), None, "{range:?}");
        }
    }

    #[test]
    fn test_fit_rejects_ranges_with_too_many_steps() {
        let sub_ulp_step = FitRange::new(40.0, 24.0, 1e-7);
        let huge_max = FitRange::new(1e9, 24.0, 1.0);
        assert!(!sub_ulp_step.is_usable());
        assert!(!huge_max.is_usable());
        assert_eq!(fit(6000.0, thirty_chars, &sub_ulp_step), None);
        assert_eq!(fit(6000.0, thirty_chars, &huge_max), None);
    }

    #[test]
    fn test_fit_step_lost_to_rounding_snaps_to_min() {
        // f32 spacing at 1e7 is 1.0, so 1e7 - 0.5 rounds back to 1e7
        let range = FitRange::new(1.0e7, 1.0e7 - 100.0, 0.5);
        assert!(range.is_usable());
        assert_eq!(fit(1.0, |s| s, &range), Some(1.0e7 - 100.0));
    }

    // ── line height ──────────────────────────────────────────────────────────

    #[test]
    fn test_line_height_is_size_times_ratio() {
        for size in [14.0_f32, 18.0, 22.0, 24.0, 26.0, 36.0, 40.0] {
            let expected = size * 1.2;
            let actual = line_height_for(size);
            assert!(
                (actual - expected).abs() < 1e-4,
                "line height for {size} should be {expected}, got {actual}"
            );
        }
        assert_eq!(line_height_for(22.0).to_string(), "26.4");
    }

    #[test]
    fn test_outcome_css_formats_both_properties() {
        let outcome = FitOutcome::at(26.0, false);
        assert_eq!(outcome.css(), "font-size: 26px; line-height: 31.2px");
    }

    // ── fit_target ───────────────────────────────────────────────────────────

    #[test]
    fn test_fit_target_matches_pure_fit() {
        let target = FitTarget {
            text: "x".repeat(30),
            container_width_px: 6000.0,
            range: TITLE_RANGE,
        };
        let outcome = fit_target(&target, &PerCharMeasurer(7.5)).unwrap();
        assert_eq!(outcome.font_size_px, 26.0);
        assert_eq!(outcome.line_height_px, line_height_for(26.0));
        assert!(!outcome.overflows);
    }

    #[test]
    fn test_fit_target_reports_overflow_at_floor() {
        let target = FitTarget {
            text: "x".repeat(30),
            container_width_px: 100.0,
            range: TITLE_RANGE,
        };
        let outcome = fit_target(&target, &PerCharMeasurer(7.5)).unwrap();
        assert_eq!(outcome.font_size_px, 24.0);
        assert!(outcome.overflows);
    }

    #[test]
    fn test_fit_target_empty_text_is_noop() {
        let target = FitTarget {
            text: "   ".to_string(),
            container_width_px: 6000.0,
            range: TITLE_RANGE,
        };
        assert!(fit_target(&target, &PerCharMeasurer(7.5)).is_none());
    }

    #[test]
    fn test_fit_target_with_font_metrics_shrinks_long_college_name() {
        let metrics = get_metrics(&FontFamily::Garamond);
        let short = FitTarget {
            text: "TECH UNIVERSITY".to_string(),
            container_width_px: 956.0,
            range: TITLE_RANGE,
        };
        let long = FitTarget {
            text: "INTERNATIONAL INSTITUTE OF INFORMATION TECHNOLOGY AND MANAGEMENT STUDIES"
                .to_string(),
            ..short.clone()
        };
        let short_size = fit_target(&short, metrics).unwrap().font_size_px;
        let long_size = fit_target(&long, metrics).unwrap().font_size_px;
        assert_eq!(short_size, 40.0);
        assert!(long_size < short_size, "long name should shrink, got {long_size}");
    }

    #[test]
    fn test_fit_range_step_defaults_to_one() {
        let range: FitRange = serde_json::from_str(r#"{"max_px": 22, "min_px": 14}"#).unwrap();
        assert_eq!(range, FitRange::new(22.0, 14.0, 1.0));
    }
}
