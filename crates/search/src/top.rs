use std::cmp::Ordering;

use vendor_model::VendorRecord;

/// Default number of entries on the landing page's top-rated listing
pub const TOP_RATED_LIMIT: usize = 6;

/// The "Top Rated Vendors" selection.
///
/// Reads the legacy star `rating` field, drops records without a positive
/// rating, sorts descending (stable, ties keep input order) and truncates
/// to `limit`. Independent of the search pipeline: no keyword, no recency.
#[must_use]
pub fn top_rated(vendors: &[VendorRecord], limit: usize) -> Vec<VendorRecord> {
    let mut rated: Vec<VendorRecord> = vendors
        .iter()
        .filter(|v| v.rating.is_some_and(|r| r > 0.0))
        .cloned()
        .collect();
    rated.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
    });
    rated.truncate(limit);
    rated
}
