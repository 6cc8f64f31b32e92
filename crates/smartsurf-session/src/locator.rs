//! Element lookup descriptions shared by every session implementation.
//!
//! A [`Locator`] is a closed description of how to find elements; a
//! [`Scope`] says where the search starts. Keeping both as plain data means
//! the core logic can be exercised against an in-memory fake session with
//! exactly the same lookup descriptions the real browser receives.

/// How to locate elements within a [`Scope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// CSS structural selector, e.g. `div.linked-area`.
    Css(String),
    /// Elements of `tag` whose attribute `attr` contains `needle`,
    /// compared ASCII case-insensitively.
    AttrContains {
        tag: String,
        attr: String,
        needle: String,
    },
    /// Elements of `tag` whose visible text contains `needle` verbatim.
    TextContains { tag: String, needle: String },
}

impl Locator {
    /// Builds a CSS structural locator.
    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    /// Builds an attribute-substring locator (ASCII case-insensitive).
    pub fn attr_contains(
        tag: impl Into<String>,
        attr: impl Into<String>,
        needle: impl Into<String>,
    ) -> Self {
        Locator::AttrContains {
            tag: tag.into(),
            attr: attr.into(),
            needle: needle.into(),
        }
    }

    /// Builds a visible-text-substring locator.
    pub fn text_contains(tag: impl Into<String>, needle: impl Into<String>) -> Self {
        Locator::TextContains {
            tag: tag.into(),
            needle: needle.into(),
        }
    }

    /// The CSS selector that yields this locator's candidate elements.
    ///
    /// For [`Locator::Css`] and [`Locator::AttrContains`] the candidates are
    /// already the final matches; [`Locator::TextContains`] candidates still
    /// need their visible text checked against the needle by the caller.
    #[must_use]
    pub fn candidate_css(&self) -> String {
        match self {
            Locator::Css(selector) => selector.clone(),
            Locator::AttrContains { tag, attr, needle } => {
                format!(r#"{tag}[{attr}*="{}" i]"#, escape_css_string(needle))
            }
            Locator::TextContains { tag, .. } => tag.clone(),
        }
    }

    /// Returns `true` when a candidate element's visible text satisfies
    /// this locator. Locators without a text condition always match.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        match self {
            Locator::TextContains { needle, .. } => text.contains(needle.as_str()),
            Locator::Css(_) | Locator::AttrContains { .. } => true,
        }
    }
}

/// Where a lookup starts from: the whole page, or the subtree under a
/// previously located handle.
#[derive(Debug, Clone, Copy)]
pub enum Scope<'a, H> {
    Page,
    Within(&'a H),
}

/// Escapes a value for embedding in a double-quoted CSS attribute selector.
fn escape_css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_locator_renders_verbatim() {
        let locator = Locator::css("div.entity-result__insights");
        assert_eq!(locator.candidate_css(), "div.entity-result__insights");
    }

    #[test]
    fn attr_locator_renders_case_insensitive_selector() {
        let locator = Locator::attr_contains("button", "aria-label", "connect");
        assert_eq!(
            locator.candidate_css(),
            r#"button[aria-label*="connect" i]"#
        );
    }

    #[test]
    fn attr_locator_escapes_quotes_in_needle() {
        let locator = Locator::attr_contains("a", "title", r#"say "hi""#);
        assert_eq!(locator.candidate_css(), r#"a[title*="say \"hi\"" i]"#);
    }

    #[test]
    fn text_locator_candidates_are_the_bare_tag() {
        let locator = Locator::text_contains("button", "Send without a note");
        assert_eq!(locator.candidate_css(), "button");
    }

    #[test]
    fn text_locator_matches_substring_only() {
        let locator = Locator::text_contains("button", "Send without a note");
        assert!(locator.matches_text("  Send without a note  "));
        assert!(!locator.matches_text("Send with a note"));
    }

    #[test]
    fn non_text_locators_match_any_text() {
        assert!(Locator::css("div").matches_text(""));
        assert!(Locator::attr_contains("a", "href", "/in/").matches_text("anything"));
    }
}
