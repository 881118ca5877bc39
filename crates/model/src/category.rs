/// The fixed category labels offered by the directory's filter UI.
///
/// Category filtering is an exact, case-sensitive string match against
/// these labels; records may also carry no category at all.
pub const CATEGORIES: [&str; 6] = [
    "Fashion & tailoring",
    "Catering & events",
    "Repairs & maintenance",
    "Branding & design",
    "Photography & media",
    "Other",
];

/// Whether `label` is one of the fixed category labels (case-sensitive)
#[must_use]
pub fn is_known_category(label: &str) -> bool {
    CATEGORIES.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_is_exact_and_case_sensitive() {
        assert!(is_known_category("Catering & events"));
        assert!(!is_known_category("catering & events"));
        assert!(!is_known_category("Catering"));
    }
}
