//! Tier classification for resolved-ticket counts.
//!
//! Pure lookup logic: a count maps to exactly one tier and the threshold at
//! which the next tier begins. Counts can be any integer; negative values
//! classify as unranked rather than erroring (fixture data contains them).

use serde::Serialize;

/// Gamification tier derived solely from a resolution count.
///
/// Variant order is the tier order, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Unranked,
    Iron,
    Bronze,
    Gold,
    Diamond,
    Mistico,
    Master,
    Grandmaster,
    Legend,
    Devil,
}

/// Inclusive upper bound per tier, with the count at which the next tier
/// starts. Contiguous and strictly increasing; `Devil` has no upper bound
/// and its reported threshold saturates at the top boundary.
const TIER_BOUNDS: &[(i64, Tier, i64)] = &[
    (9, Tier::Unranked, 10),
    (14, Tier::Iron, 15),
    (34, Tier::Bronze, 35),
    (64, Tier::Gold, 65),
    (89, Tier::Diamond, 90),
    (129, Tier::Mistico, 130),
    (189, Tier::Master, 190),
    (259, Tier::Grandmaster, 260),
    (349, Tier::Legend, 350),
];

/// Reported threshold for counts past the last tier boundary.
const TOP_THRESHOLD: i64 = 350;

/// Reward videos unlocked at exact count values. Exact-match only; a count
/// inside a tier's range but off its boundary has no video.
const RANK_VIDEOS: &[(i64, &str)] = &[
    (10, "ironVid"),
    (15, "bronzeVid"),
    (35, "goldVid"),
    (70, "diamondVid"),
    (90, "misticoVid"),
    (130, "masterVid"),
    (190, "grandmasterVid"),
    (260, "legendVid"),
    (350, "devilVid"),
];

/// Map a resolution count to its tier and the next tier's threshold.
///
/// Total over all of `i64`; counts at or above 350 stay `Devil` with the
/// threshold pinned at 350.
pub fn classify(count: i64) -> (Tier, i64) {
    for &(upper, tier, next) in TIER_BOUNDS {
        if count <= upper {
            return (tier, next);
        }
    }
    (Tier::Devil, TOP_THRESHOLD)
}

/// Reward video for an exact count, if that count is a reward threshold.
pub fn video_for(count: i64) -> Option<&'static str> {
    RANK_VIDEOS
        .iter()
        .find(|(threshold, _)| *threshold == count)
        .map(|(_, video)| *video)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_single_digit_counts_are_unranked() {
        for n in [-5000, -200, -1, 0, 5, 9] {
            assert_eq!(classify(n), (Tier::Unranked, 10), "count {}", n);
        }
    }

    #[test]
    fn boundary_counts_land_in_the_higher_tier() {
        assert_eq!(classify(10), (Tier::Iron, 15));
        assert_eq!(classify(15), (Tier::Bronze, 35));
        assert_eq!(classify(35), (Tier::Gold, 65));
        assert_eq!(classify(65), (Tier::Diamond, 90));
        assert_eq!(classify(90), (Tier::Mistico, 130));
        assert_eq!(classify(130), (Tier::Master, 190));
        assert_eq!(classify(190), (Tier::Grandmaster, 260));
        assert_eq!(classify(260), (Tier::Legend, 350));
        assert_eq!(classify(350), (Tier::Devil, 350));
    }

    #[test]
    fn upper_bounds_stay_in_their_tier() {
        assert_eq!(classify(14), (Tier::Iron, 15));
        assert_eq!(classify(34), (Tier::Bronze, 35));
        assert_eq!(classify(64), (Tier::Gold, 65));
        assert_eq!(classify(89), (Tier::Diamond, 90));
        assert_eq!(classify(129), (Tier::Mistico, 130));
        assert_eq!(classify(189), (Tier::Master, 190));
        assert_eq!(classify(259), (Tier::Grandmaster, 260));
        assert_eq!(classify(349), (Tier::Legend, 350));
    }

    #[test]
    fn threshold_saturates_at_top_tier() {
        for n in [350, 351, 929_300, 1_000_000, i64::MAX] {
            assert_eq!(classify(n), (Tier::Devil, 350), "count {}", n);
        }
    }

    #[test]
    fn classification_is_monotonic() {
        let mut prev = classify(-10).0;
        for n in -10..400 {
            let (tier, _) = classify(n);
            assert!(tier >= prev, "tier regressed at count {}", n);
            prev = tier;
        }
    }

    #[test]
    fn next_threshold_never_below_count_bound() {
        for &(upper, _, next) in TIER_BOUNDS {
            assert!(next > upper);
        }
    }

    #[test]
    fn videos_match_exact_thresholds_only() {
        assert_eq!(video_for(10), Some("ironVid"));
        assert_eq!(video_for(70), Some("diamondVid"));
        assert_eq!(video_for(90), Some("misticoVid"));
        assert_eq!(video_for(350), Some("devilVid"));
        // Inside a range but off the boundary: no video.
        assert_eq!(video_for(11), None);
        assert_eq!(video_for(65), None);
        assert_eq!(video_for(349), None);
        assert_eq!(video_for(351), None);
        assert_eq!(video_for(0), None);
        assert_eq!(video_for(-5000), None);
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Unranked).unwrap(), "\"unranked\"");
        assert_eq!(serde_json::to_string(&Tier::Mistico).unwrap(), "\"mistico\"");
        assert_eq!(serde_json::to_string(&Tier::Devil).unwrap(), "\"devil\"");
    }
}
