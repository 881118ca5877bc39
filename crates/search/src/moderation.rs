use serde::Serialize;
use vendor_model::VendorRecord;

/// Ratings strictly below this mark a listing as suspicious
pub const SUSPICIOUS_MAX_RATING: f64 = 2.5;

/// A suspicious rating only counts with more than this many reviews
pub const SUSPICIOUS_MIN_REVIEWS: u32 = 5;

/// Counters behind the admin dashboard's stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    /// All records in the collection, blacklisted included
    pub total: usize,
    /// Records currently blacklisted
    pub blacklisted: usize,
    /// Star rating of 4.0 or better
    pub highly_rated: usize,
    /// Star rating present and below 2.0
    pub low_rated: usize,
}

/// Candidates for blacklisting: consistently poor rating over a review
/// volume large enough to trust. Already-blacklisted records are skipped.
///
/// Input order is preserved so the moderation queue is deterministic.
#[must_use]
pub fn blacklist_suggestions(vendors: &[VendorRecord]) -> Vec<VendorRecord> {
    let flagged: Vec<VendorRecord> = vendors
        .iter()
        .filter(|v| {
            !v.blacklisted
                && v.rating.is_some_and(|r| r < SUSPICIOUS_MAX_RATING)
                && v.review_count.is_some_and(|c| c > SUSPICIOUS_MIN_REVIEWS)
        })
        .cloned()
        .collect();
    if !flagged.is_empty() {
        log::info!("moderation: {} blacklist suggestion(s)", flagged.len());
    }
    flagged
}

/// Aggregate counters over the full collection, blacklisted included
#[must_use]
pub fn directory_stats(vendors: &[VendorRecord]) -> DirectoryStats {
    DirectoryStats {
        total: vendors.len(),
        blacklisted: vendors.iter().filter(|v| v.blacklisted).count(),
        highly_rated: vendors
            .iter()
            .filter(|v| v.rating.is_some_and(|r| r >= 4.0))
            .count(),
        low_rated: vendors
            .iter()
            .filter(|v| v.rating.is_some_and(|r| r < 2.0))
            .count(),
    }
}
