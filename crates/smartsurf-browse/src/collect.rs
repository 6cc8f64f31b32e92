//! Search-result scanning: per-card evaluation with link-harvest fallback.

use std::collections::HashSet;

use smartsurf_session::{BrowsingSession, Scope};

use crate::connect::InlineConnect;
use crate::policy::BrowsePolicy;
use crate::selectors;

/// Terminal state of one card's processing pass.
#[derive(Debug)]
enum CardOutcome {
    /// Connection request sent inline; the card contributes no URL.
    Sent,
    /// Fell back to harvesting the card's profile link.
    Collected(String),
    /// Nothing actioned and no harvestable link on the card.
    Skipped,
}

/// Scans a search page and returns the profile URLs of cards that were not
/// actioned inline, deduplicated by exact string in first-seen order.
///
/// Zero cards on the page is a valid terminal state yielding an empty
/// sequence, not an error. Per-card failures, inline connect or link
/// harvest alike, are logged and swallowed; a single bad card never aborts the
/// scan.
pub async fn collect_search_results<S: BrowsingSession>(
    session: &S,
    policy: &BrowsePolicy,
    search_url: &str,
    attempt_inline: bool,
) -> Vec<String> {
    session.navigate(search_url).await;
    session.wait(policy.settle_delay).await;

    let cards = session
        .find_all(Scope::Page, &selectors::result_card())
        .await;
    if cards.is_empty() {
        tracing::info!(url = search_url, "no result cards on page");
        return Vec::new();
    }

    let connector = InlineConnect::new(session, policy.min_mutual_connections);
    let mut seen: HashSet<String> = HashSet::new();
    let mut profile_urls: Vec<String> = Vec::new();
    let mut sent = 0usize;

    for (index, card) in cards.iter().enumerate() {
        match process_card(session, &connector, card, index, attempt_inline).await {
            CardOutcome::Sent => sent += 1,
            CardOutcome::Collected(url) => {
                if seen.insert(url.clone()) {
                    profile_urls.push(url);
                }
            }
            CardOutcome::Skipped => {}
        }
    }

    tracing::info!(
        cards = cards.len(),
        sent,
        collected = profile_urls.len(),
        "search page scan complete"
    );
    profile_urls
}

/// Per-card state machine: try the inline flow when enabled, downgrade its
/// umbrella failure to a logged fallback, and harvest the profile link.
async fn process_card<S: BrowsingSession>(
    session: &S,
    connector: &InlineConnect<'_, S>,
    card: &S::Handle,
    index: usize,
    attempt_inline: bool,
) -> CardOutcome {
    if attempt_inline {
        match connector.evaluate_and_connect(card).await {
            Ok(()) => return CardOutcome::Sent,
            Err(err) => {
                tracing::warn!(card = index, error = %err, "falling back to link harvest");
            }
        }
    }

    match harvest_profile_link(session, card).await {
        Some(url) => CardOutcome::Collected(url),
        None => {
            tracing::debug!(card = index, "no profile link on card");
            CardOutcome::Skipped
        }
    }
}

/// Extracts the card's profile URL, or `None` when the anchor is missing or
/// carries an empty target.
async fn harvest_profile_link<S: BrowsingSession>(session: &S, card: &S::Handle) -> Option<String> {
    let anchor = session
        .find_one(Scope::Within(card), &selectors::profile_anchor())
        .await?;
    session
        .read_attribute(&anchor, "href")
        .await
        .filter(|href| !href.is_empty())
}
