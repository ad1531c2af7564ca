//! Hand tracking validation (camera constraints and detector thresholds).

use crate::schema::{DotfieldConfig, HAND_KEYPOINTS};

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_hand(errors: &mut Vec<String>, config: &DotfieldConfig) {
    let hand = &config.hand;
    let video = &hand.video;

    validate_range(
        errors,
        "hand.video.ideal_width",
        video.ideal_width,
        video.min_width.max(1),
        video.max_width,
    );
    validate_range(
        errors,
        "hand.video.ideal_height",
        video.ideal_height,
        video.min_height.max(1),
        video.max_height,
    );
    if hand.min_keypoints < HAND_KEYPOINTS {
        errors.push(format!(
            "hand.min_keypoints = {} must be >= {HAND_KEYPOINTS}",
            hand.min_keypoints
        ));
    }
    validate_range(
        errors,
        "hand.warmup_ms",
        hand.warmup_ms.min(u32::MAX as u64) as u32,
        0,
        10_000,
    );
    validate_range(
        errors,
        "hand.detection_interval_ms",
        hand.detection_interval_ms.min(u32::MAX as u64) as u32,
        1,
        1_000,
    );
    validate_range_f64(
        errors,
        "hand.detection_confidence",
        hand.detection_confidence,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "hand.tracking_confidence",
        hand.tracking_confidence,
        0.0,
        1.0,
    );
    validate_range(errors, "hand.max_hands", hand.max_hands, 1, 4);
}
