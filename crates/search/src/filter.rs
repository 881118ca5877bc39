use vendor_model::VendorRecord;

/// Filter Stage: narrows a vendor collection by category and keyword.
///
/// Category is an exact, case-sensitive equality check. Keyword is a
/// case-insensitive substring check against the business name, description
/// and address; matching any one field is enough. Both constraints combine
/// with AND. An empty category or a blank keyword means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct VendorFilter {
    category: Option<String>,
    /// Trimmed and lower-cased once at construction
    keyword: Option<String>,
}

impl VendorFilter {
    /// Build a filter from raw UI inputs.
    ///
    /// `None` and empty/whitespace-only strings are equivalent: both leave
    /// the corresponding constraint unset.
    #[must_use]
    pub fn new(category: Option<&str>, keyword: Option<&str>) -> Self {
        let category = category
            .filter(|c| !c.is_empty())
            .map(ToString::to_string);
        let keyword = keyword
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty());
        Self { category, keyword }
    }

    /// Whether both constraints are unset, making [`apply`](Self::apply)
    /// an identity copy
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none() && self.keyword.is_none()
    }

    /// The normalized keyword, if any. Shared with the ranking stage so
    /// both see the same needle.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Whether a single record passes both constraints
    #[must_use]
    pub fn matches(&self, vendor: &VendorRecord) -> bool {
        if let Some(category) = &self.category {
            if vendor.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let hit = field_contains(vendor.business_name.as_deref(), keyword)
                || field_contains(vendor.description.as_deref(), keyword)
                || field_contains(vendor.address.as_deref(), keyword);
            if !hit {
                return false;
            }
        }
        true
    }

    /// Retain the records that pass, preserving input order.
    ///
    /// Returns a new vector; the input is untouched.
    #[must_use]
    pub fn apply(&self, vendors: &[VendorRecord]) -> Vec<VendorRecord> {
        if self.is_unconstrained() {
            return vendors.to_vec();
        }
        let kept: Vec<VendorRecord> = vendors
            .iter()
            .filter(|v| self.matches(v))
            .cloned()
            .collect();
        log::debug!(
            "filter: {} of {} vendors kept (category={:?}, keyword={:?})",
            kept.len(),
            vendors.len(),
            self.category,
            self.keyword
        );
        kept
    }
}

/// Case-insensitive substring check; an absent field never matches
pub(crate) fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(needle))
}
