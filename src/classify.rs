//! Static gesture classification from a single frame's landmarks.

use crate::gesture::StaticGesture;
use crate::landmark::{HandObservation, FINGER_TIPS, THUMB_TIP};

/// Count how many fingers are held up.
///
/// The thumb counts as up when its tip is left of the joint one index
/// below it (`tip.x < joint.x`). This rule is orientation-dependent: it is
/// only correct for one hand chirality under one camera-mirroring
/// convention, a known limitation inherited from the detection rules.
/// Each other finger counts as up when its tip is above (smaller image y)
/// the joint two positions below it.
pub fn count_fingers(hand: &HandObservation) -> u8 {
    let mut count = 0;

    if hand[THUMB_TIP].x < hand[THUMB_TIP - 1].x {
        count += 1;
    }

    for tip in FINGER_TIPS {
        if hand[tip].y < hand[tip - 2].y {
            count += 1;
        }
    }

    count
}

/// Classify one hand observation into a static gesture.
///
/// Total function: every well-formed observation gets a label.
pub fn classify(hand: &HandObservation) -> StaticGesture {
    match count_fingers(hand) {
        0 => StaticGesture::ClosedFist,
        5 => StaticGesture::OpenPalm,
        n => StaticGesture::Fingers(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::fixtures;

    #[test]
    fn open_palm_when_all_conditions_hold() {
        assert_eq!(classify(&fixtures::open_palm()), StaticGesture::OpenPalm);
    }

    #[test]
    fn closed_fist_when_no_condition_holds() {
        assert_eq!(classify(&fixtures::closed_fist()), StaticGesture::ClosedFist);
    }

    #[test]
    fn counts_partial_extensions() {
        assert_eq!(classify(&fixtures::fingers_up(1)), StaticGesture::Fingers(1));
        assert_eq!(classify(&fixtures::fingers_up(2)), StaticGesture::Fingers(2));
        assert_eq!(classify(&fixtures::fingers_up(4)), StaticGesture::Fingers(4));
    }

    #[test]
    fn thumb_rule_is_x_based() {
        // Thumb up alone: tip strictly left of the joint below it.
        let mut points = fixtures::closed_fist().landmarks().to_vec();
        points[THUMB_TIP].x = 0.2;
        points[THUMB_TIP - 1].x = 0.5;
        let hand = crate::landmark::HandObservation::from_landmarks(points).unwrap();
        assert_eq!(classify(&hand), StaticGesture::Fingers(1));
    }
}
