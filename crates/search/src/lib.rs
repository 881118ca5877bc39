//! # Vendor Search
//!
//! Filtering and ranking for vendor directory listings.
//!
//! The pipeline is two pure stages over an in-memory collection:
//!
//! ```text
//! Vendor collection (blacklisted records already excluded)
//!     │
//!     ├──> VendorFilter    category equality + keyword substring
//!     │
//!     └──> VendorRanker    weighted score (rating / keyword / recency),
//!                          stable sort descending
//! ```
//!
//! Both stages read the records and return new vectors; nothing is
//! mutated, nothing blocks, and malformed record data degrades to neutral
//! scores rather than erroring. The only fallible surface is
//! [`RankingWeights`] validation.
//!
//! The ranking clock is an explicit `as_of` parameter so callers can pass
//! `Utc::now()` in production and a frozen instant in tests.

mod error;
mod filter;
mod moderation;
mod rank;
mod score;
mod top;

pub use error::{Result, SearchError};
pub use filter::VendorFilter;
pub use moderation::{
    blacklist_suggestions, directory_stats, DirectoryStats, SUSPICIOUS_MAX_RATING,
    SUSPICIOUS_MIN_REVIEWS,
};
pub use rank::{RankingWeights, VendorRanker};
pub use score::{
    keyword_score, rating_score, recency_score, ADDRESS_MATCH_WEIGHT, DESCRIPTION_MATCH_WEIGHT,
    NAME_MATCH_WEIGHT, NEUTRAL_RATING_SCORE, NEUTRAL_RECENCY_SCORE, RECENCY_WINDOW_DAYS,
};
pub use top::{top_rated, TOP_RATED_LIMIT};
