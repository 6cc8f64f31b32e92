//! Locators for the people-search results surface.
//!
//! Selector drift on the site shows up as `InsightsNotFound` / button
//! failures in the logs; this module is the single place to adjust.

use smartsurf_session::Locator;

/// Path fragment that distinguishes profile links from other anchors.
pub(crate) const PROFILE_PATH_MARKER: &str = "/in/";

/// One rendered search-result card.
pub(crate) fn result_card() -> Locator {
    Locator::css("div.linked-area")
}

/// The insights region within a card.
pub(crate) fn insights_region() -> Locator {
    Locator::css("div.entity-result__insights")
}

/// The inline connect control within a card. The label is matched
/// case-insensitively; the site renders both "Connect" and "connect".
pub(crate) fn connect_button() -> Locator {
    Locator::attr_contains("button", "aria-label", "connect")
}

/// The confirmation control of the connect dialog. Searched across the whole
/// page: the dialog renders outside the card subtree.
pub(crate) fn send_without_note_button() -> Locator {
    Locator::text_contains("button", "Send without a note")
}

/// A card's profile anchor.
pub(crate) fn profile_anchor() -> Locator {
    Locator::attr_contains("a", "href", PROFILE_PATH_MARKER)
}
