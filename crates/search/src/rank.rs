use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use vendor_model::VendorRecord;

use crate::error::{Result, SearchError};
use crate::score::{keyword_score, rating_score, recency_score};

/// Weights combining the three sub-scores into one ranking score.
///
/// The defaults encode the directory's ordering policy: rating 50%,
/// keyword relevance 30%, profile recency 20%. Weights are injected
/// rather than hardcoded in the scoring path so they can be tuned from
/// configuration without touching the logic; [`RankingWeights::new`] and
/// [`RankingWeights::from_json`] enforce that each weight stays in [0,1]
/// and the sum stays at 1.0, which keeps the combined score in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingWeights {
    pub rating: f64,
    pub keyword: f64,
    pub recency: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            rating: 0.5,
            keyword: 0.3,
            recency: 0.2,
        }
    }
}

impl RankingWeights {
    const SUM_TOLERANCE: f64 = 1e-9;

    /// Validated constructor
    pub fn new(rating: f64, keyword: f64, recency: f64) -> Result<Self> {
        let weights = Self {
            rating,
            keyword,
            recency,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Parse and validate weights from a JSON object, e.g.
    /// `{"rating": 0.6, "keyword": 0.2, "recency": 0.2}`
    pub fn from_json(raw: &str) -> Result<Self> {
        let weights: Self = serde_json::from_str(raw)?;
        weights.validate()?;
        Ok(weights)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("rating", self.rating),
            ("keyword", self.keyword),
            ("recency", self.recency),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SearchError::InvalidWeights(format!(
                    "{name} weight {value} is outside [0, 1]"
                )));
            }
        }
        let sum = self.rating + self.keyword + self.recency;
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(SearchError::InvalidWeights(format!(
                "weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(())
    }
}

/// Ranking Stage: orders a vendor collection by combined score.
#[derive(Debug, Clone, Default)]
pub struct VendorRanker {
    weights: RankingWeights,
}

impl VendorRanker {
    /// Ranker with explicit weights
    #[must_use]
    pub const fn new(weights: RankingWeights) -> Self {
        Self { weights }
    }

    /// Combined score for one record in [0,1].
    ///
    /// `as_of` is the clock reading used for the recency sub-score.
    #[must_use]
    pub fn score(&self, vendor: &VendorRecord, keyword: &str, as_of: DateTime<Utc>) -> f64 {
        self.weights.rating * rating_score(vendor)
            + self.weights.keyword * keyword_score(vendor, keyword)
            + self.weights.recency * recency_score(vendor, as_of)
    }

    /// Sort a copy of `vendors` descending by combined score.
    ///
    /// The sort is stable: equal scores preserve input order, so repeated
    /// ranking of identical data never reshuffles the listing. A `None`
    /// keyword is the same as an empty one. Returns a permutation of the
    /// input; the input itself is untouched.
    #[must_use]
    pub fn rank(
        &self,
        vendors: &[VendorRecord],
        keyword: Option<&str>,
        as_of: DateTime<Utc>,
    ) -> Vec<VendorRecord> {
        let keyword = keyword.unwrap_or("");

        // Score once per record, then sort the pairs
        let mut scored: Vec<(VendorRecord, f64)> = vendors
            .iter()
            .map(|v| (v.clone(), self.score(v, keyword, as_of)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        if let Some((top, score)) = scored.first() {
            log::debug!(
                "rank: {} vendors, keyword={:?}, top={} ({:.3})",
                scored.len(),
                keyword,
                top.id,
                score
            );
        }

        scored.into_iter().map(|(v, _)| v).collect()
    }
}
