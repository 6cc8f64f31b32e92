//! Keyword-lexicon relevance scoring for extracted profile text.

/// School markers.
const SCHOOL_KEYWORDS: &[&str] = &["iit", "indian institute of technology"];

/// Well-known employers.
const COMPANY_KEYWORDS: &[&str] = &[
    "google", "microsoft", "amazon", "facebook", "meta", "apple", "netflix", "adobe", "uber",
    "airbnb", "linkedin", "flipkart", "ola", "swiggy", "zomato",
];

/// Technical-role markers.
const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "cto",
    "technical",
    "data scientist",
    "ai",
    "ml",
    "product manager",
    "software",
    "architect",
];

/// Whether a profile is worth a connection request.
///
/// Case-insensitive substring match of three signal groups (school,
/// employer, technical role) against the profile text; relevant iff at
/// least two groups match.
#[must_use]
pub fn is_relevant_profile(text: &str) -> bool {
    let profile = text.to_lowercase();
    let groups = [SCHOOL_KEYWORDS, COMPANY_KEYWORDS, ROLE_KEYWORDS];
    let matched = groups
        .iter()
        .filter(|group| group.iter().any(|kw| profile.contains(kw)))
        .count();
    matched >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_and_role_is_relevant() {
        assert!(is_relevant_profile(
            "Jane Doe\nSoftware Engineer\nIIT Kharagpur"
        ));
    }

    #[test]
    fn company_and_role_is_relevant() {
        assert!(is_relevant_profile("John Smith\nData Scientist at Google"));
    }

    #[test]
    fn all_three_groups_is_relevant() {
        assert!(is_relevant_profile("ML engineer at Amazon, IIT Bombay"));
    }

    #[test]
    fn single_group_is_not_relevant() {
        assert!(!is_relevant_profile("Carol\nDeveloper"));
    }

    #[test]
    fn empty_text_is_not_relevant() {
        assert!(!is_relevant_profile(""));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_relevant_profile("SOFTWARE ARCHITECT AT MICROSOFT"));
    }
}
