use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single vendor listing as stored in the external document store.
///
/// Field names follow the store's camelCase convention. Every descriptive
/// field is optional; consumers must degrade gracefully rather than reject
/// records with missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    /// Opaque unique identifier, assigned by the store. Immutable.
    pub id: String,

    /// Display name of the business
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,

    /// One of the fixed category labels (see [`crate::CATEGORIES`]), or absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Free-text description of the services offered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-text street address / location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Aggregated review rating. The stored scale is ambiguous: values in
    /// [0,1] may be an already-normalized score, values in (1,5] are a
    /// star rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_average: Option<f64>,

    /// Legacy star rating (0-5) still read by the top-rated listing and
    /// the moderation heuristics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Number of reviews behind `rating`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,

    /// RFC 3339 timestamp of the last profile modification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Moderation flag. Blacklisted records must be excluded before the
    /// collection reaches the filter/rank stages.
    #[serde(default)]
    pub blacklisted: bool,

    /// RFC 3339 timestamp of the blacklist decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklisted_at: Option<String>,

    /// Identifier of the moderator who blacklisted the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklisted_by: Option<String>,
}

impl VendorRecord {
    /// Create an empty record with only an id set
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            business_name: None,
            category: None,
            description: None,
            address: None,
            rating_average: None,
            rating: None,
            review_count: None,
            updated_at: None,
            blacklisted: false,
            blacklisted_at: None,
            blacklisted_by: None,
        }
    }

    /// Builder: set the business name
    #[must_use]
    pub fn business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = Some(name.into());
        self
    }

    /// Builder: set the category label
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder: set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the address
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builder: set the aggregated rating
    #[must_use]
    pub const fn rating_average(mut self, rating_average: f64) -> Self {
        self.rating_average = Some(rating_average);
        self
    }

    /// Builder: set the legacy star rating
    #[must_use]
    pub const fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Builder: set the review count
    #[must_use]
    pub const fn review_count(mut self, review_count: u32) -> Self {
        self.review_count = Some(review_count);
        self
    }

    /// Builder: set the last-modified timestamp
    #[must_use]
    pub fn updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    /// Builder: mark the record blacklisted
    #[must_use]
    pub const fn blacklisted(mut self, blacklisted: bool) -> Self {
        self.blacklisted = blacklisted;
        self
    }

    /// Parse `updated_at` defensively.
    ///
    /// Returns `None` when the field is absent or not valid RFC 3339, so
    /// malformed timestamps degrade to the same neutral treatment as
    /// missing ones.
    #[must_use]
    pub fn updated_at_parsed(&self) -> Option<DateTime<Utc>> {
        let raw = self.updated_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
