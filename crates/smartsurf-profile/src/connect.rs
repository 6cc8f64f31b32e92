//! Best-effort connection request from a full profile page.
//!
//! Unlike the inline flow on the search surface, nothing here is gated or
//! classified: the caller has already decided the profile is worth
//! connecting to, so the only question is whether both clicks landed.

use std::time::Duration;

use smartsurf_session::{BrowsingSession, Locator, Scope};

/// Attempts to send a connection request on the currently open profile
/// page.
///
/// Returns `true` only when the connect control and a send confirmation
/// ("Send now", falling back to "Send") were both activated; every failure
/// path logs and returns `false`.
pub async fn send_connect<S: BrowsingSession>(session: &S) -> bool {
    let Some(connect) = session
        .find_one(Scope::Page, &Locator::text_contains("button", "Connect"))
        .await
    else {
        tracing::debug!("no connect button on profile page");
        return false;
    };

    if let Err(err) = session.activate(&connect).await {
        tracing::warn!(error = %err, "connect button could not be activated");
        return false;
    }
    session.wait(Duration::from_secs(1)).await;

    let confirmation = match session
        .find_one(Scope::Page, &Locator::text_contains("button", "Send now"))
        .await
    {
        Some(button) => button,
        None => {
            let Some(button) = session
                .find_one(Scope::Page, &Locator::text_contains("button", "Send"))
                .await
            else {
                tracing::debug!("no send confirmation rendered");
                return false;
            };
            button
        }
    };

    if let Err(err) = session.activate(&confirmation).await {
        tracing::warn!(error = %err, "send confirmation could not be activated");
        return false;
    }
    session.wait(Duration::from_secs(1)).await;
    true
}
