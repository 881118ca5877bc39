use chrono::{DateTime, Duration, Utc};
use vendor_model::VendorRecord;

use crate::filter::field_contains;

/// Fallback when a record has no usable rating
pub const NEUTRAL_RATING_SCORE: f64 = 0.5;

/// Fallback when a record has no usable `updated_at`
pub const NEUTRAL_RECENCY_SCORE: f64 = 0.5;

/// Recency decays linearly to zero over this window
pub const RECENCY_WINDOW_DAYS: i64 = 180;

/// Keyword hit in the business name
pub const NAME_MATCH_WEIGHT: f64 = 0.5;

/// Keyword hit in the description
pub const DESCRIPTION_MATCH_WEIGHT: f64 = 0.3;

/// Keyword hit in the address
pub const ADDRESS_MATCH_WEIGHT: f64 = 0.2;

/// Normalized rating in [0,1].
///
/// The store holds two rating scales side by side: values in [0,1] are
/// treated as already normalized, values in (1,5] as star ratings and
/// divided by 5. A stored `1.0` is therefore ambiguous (best-on-[0,1]
/// vs worst-star-rounded) and resolves to `1.0`. Missing, non-finite,
/// negative or >5 values fall back to the neutral midpoint so they
/// neither sink nor boost the listing.
#[must_use]
pub fn rating_score(vendor: &VendorRecord) -> f64 {
    match vendor.rating_average {
        Some(r) if r.is_finite() && r >= 0.0 => {
            if r <= 1.0 {
                r
            } else if r <= 5.0 {
                r / 5.0
            } else {
                NEUTRAL_RATING_SCORE
            }
        }
        _ => NEUTRAL_RATING_SCORE,
    }
}

/// Relevance of a record to a search keyword, in [0,1].
///
/// Finer grained than the boolean filter: a name hit outweighs a
/// description hit, which outweighs an address hit. The weights sum to
/// 1.0 so a record matching in all three fields scores exactly 1.0; the
/// cap is kept as an explicit bound anyway. A blank keyword scores every
/// record 1.0 since there is nothing to be irrelevant to.
#[must_use]
pub fn keyword_score(vendor: &VendorRecord, keyword: &str) -> f64 {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return 1.0;
    }
    let mut score = 0.0;
    if field_contains(vendor.business_name.as_deref(), &needle) {
        score += NAME_MATCH_WEIGHT;
    }
    if field_contains(vendor.description.as_deref(), &needle) {
        score += DESCRIPTION_MATCH_WEIGHT;
    }
    if field_contains(vendor.address.as_deref(), &needle) {
        score += ADDRESS_MATCH_WEIGHT;
    }
    score.min(1.0)
}

/// Freshness of a record at `as_of`, in [0,1].
///
/// Missing or unparseable `updated_at` is neutral 0.5. A timestamp at or
/// after `as_of` (clock skew) is maximally fresh. Otherwise the score
/// decays linearly from 1 to 0 over [`RECENCY_WINDOW_DAYS`], clamped at
/// zero.
#[must_use]
pub fn recency_score(vendor: &VendorRecord, as_of: DateTime<Utc>) -> f64 {
    let Some(updated) = vendor.updated_at_parsed() else {
        return NEUTRAL_RECENCY_SCORE;
    };
    let age = as_of.signed_duration_since(updated);
    if age <= Duration::zero() {
        return 1.0;
    }
    let window_ms = Duration::days(RECENCY_WINDOW_DAYS).num_milliseconds() as f64;
    (1.0 - age.num_milliseconds() as f64 / window_ms).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn as_of() -> DateTime<Utc> {
        "2026-06-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn rating_missing_is_neutral() {
        assert_eq!(rating_score(&VendorRecord::new("v")), NEUTRAL_RATING_SCORE);
    }

    #[test]
    fn rating_in_unit_range_passes_through() {
        let v = VendorRecord::new("v").rating_average(0.8);
        assert_eq!(rating_score(&v), 0.8);
    }

    #[test]
    fn rating_on_star_scale_is_divided_by_five() {
        let v = VendorRecord::new("v").rating_average(4.0);
        assert_eq!(rating_score(&v), 0.8);
    }

    #[test]
    fn rating_scale_ambiguity_at_one_and_five() {
        // Current behavior: 5 stars and a normalized 1.0 both score 1.0.
        // A stored 1.0 could also mean "one star"; that reading loses.
        let five_stars = VendorRecord::new("a").rating_average(5.0);
        let normalized_one = VendorRecord::new("b").rating_average(1.0);
        assert_eq!(rating_score(&five_stars), 1.0);
        assert_eq!(rating_score(&normalized_one), 1.0);
    }

    #[test]
    fn rating_out_of_range_is_neutral() {
        assert_eq!(
            rating_score(&VendorRecord::new("v").rating_average(7.3)),
            NEUTRAL_RATING_SCORE
        );
        assert_eq!(
            rating_score(&VendorRecord::new("v").rating_average(-0.1)),
            NEUTRAL_RATING_SCORE
        );
        assert_eq!(
            rating_score(&VendorRecord::new("v").rating_average(f64::NAN)),
            NEUTRAL_RATING_SCORE
        );
    }

    #[test]
    fn keyword_blank_scores_one_for_everyone() {
        let v = VendorRecord::new("v");
        assert_eq!(keyword_score(&v, ""), 1.0);
        assert_eq!(keyword_score(&v, "   "), 1.0);
    }

    #[test]
    fn keyword_name_only_match_scores_half() {
        let v = VendorRecord::new("v").business_name("Adeola Kitchens");
        assert_eq!(keyword_score(&v, "kitchen"), NAME_MATCH_WEIGHT);
    }

    #[test]
    fn keyword_field_weights_accumulate() {
        let v = VendorRecord::new("v")
            .business_name("Lagos Catering")
            .description("catering in Lagos")
            .address("Lagos, Nigeria");
        assert_eq!(keyword_score(&v, "lagos"), 1.0);

        let desc_and_addr = VendorRecord::new("v")
            .business_name("Adeola Kitchens")
            .description("weddings in Lagos")
            .address("Lagos, Nigeria");
        let score = keyword_score(&desc_and_addr, "lagos");
        assert!((score - (DESCRIPTION_MATCH_WEIGHT + ADDRESS_MATCH_WEIGHT)).abs() < 1e-12);
    }

    #[test]
    fn keyword_no_match_scores_zero() {
        let v = VendorRecord::new("v").business_name("Stitch & Thread");
        assert_eq!(keyword_score(&v, "plumbing"), 0.0);
    }

    #[test]
    fn recency_missing_is_neutral() {
        assert_eq!(
            recency_score(&VendorRecord::new("v"), as_of()),
            NEUTRAL_RECENCY_SCORE
        );
    }

    #[test]
    fn recency_malformed_timestamp_is_neutral() {
        let v = VendorRecord::new("v").updated_at("yesterday-ish");
        assert_eq!(recency_score(&v, as_of()), NEUTRAL_RECENCY_SCORE);
    }

    #[test]
    fn recency_now_is_maximal() {
        let v = VendorRecord::new("v").updated_at("2026-06-01T00:00:00Z");
        assert_eq!(recency_score(&v, as_of()), 1.0);
    }

    #[test]
    fn recency_future_timestamp_is_maximal() {
        let v = VendorRecord::new("v").updated_at("2026-06-02T00:00:00Z");
        assert_eq!(recency_score(&v, as_of()), 1.0);
    }

    #[test]
    fn recency_at_exactly_window_edge_is_zero() {
        // 180 days before 2026-06-01 is 2025-12-03
        let v = VendorRecord::new("v").updated_at("2025-12-03T00:00:00Z");
        assert_eq!(recency_score(&v, as_of()), 0.0);
    }

    #[test]
    fn recency_beyond_window_clamps_to_zero() {
        let v = VendorRecord::new("v").updated_at("2024-01-01T00:00:00Z");
        assert_eq!(recency_score(&v, as_of()), 0.0);
    }

    #[test]
    fn recency_halfway_through_window() {
        // 90 days before as_of
        let v = VendorRecord::new("v").updated_at("2026-03-03T00:00:00Z");
        let score = recency_score(&v, as_of());
        assert!((score - 0.5).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn proptest_rating_score_in_unit_interval(r in -10.0f64..10.0) {
            let v = VendorRecord::new("v").rating_average(r);
            let s = rating_score(&v);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn proptest_keyword_score_in_unit_interval(
            name in "[a-z ]{0,12}",
            desc in "[a-z ]{0,12}",
            addr in "[a-z ]{0,12}",
            keyword in "[a-z]{0,5}",
        ) {
            let v = VendorRecord::new("v")
                .business_name(name)
                .description(desc)
                .address(addr);
            let s = keyword_score(&v, &keyword);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn proptest_recency_score_in_unit_interval(offset_days in -400i64..400) {
            let updated = as_of() + Duration::days(offset_days);
            let v = VendorRecord::new("v").updated_at(updated.to_rfc3339());
            let s = recency_score(&v, as_of());
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
