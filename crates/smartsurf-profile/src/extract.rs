//! Profile-page field extraction.

use std::time::Duration;

use smartsurf_session::{BrowsingSession, Locator, Scope};

/// Text fields read from a profile page. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileText {
    pub name: String,
    pub headline: String,
    pub about: String,
}

impl ProfileText {
    /// Single newline-joined string fed to the relevance scorer.
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{}\n{}\n{}", self.name, self.headline, self.about)
    }
}

/// Reads name, headline, and about text from the currently open profile
/// page, after letting it settle.
///
/// Best effort throughout: an element that is missing or unreadable leaves
/// its field empty, and the about section is only read when its toggle
/// exists and can be activated.
pub async fn extract_profile_info<S: BrowsingSession>(
    session: &S,
    settle: Duration,
) -> ProfileText {
    session.wait(settle).await;

    let name = read_first(session, &Locator::css("h1")).await;
    let headline = read_first(session, &Locator::css("div.text-body-medium")).await;
    let about = read_about(session).await;

    ProfileText {
        name,
        headline,
        about,
    }
}

async fn read_first<S: BrowsingSession>(session: &S, locator: &Locator) -> String {
    match session.find_one(Scope::Page, locator).await {
        Some(handle) => session.read_text(&handle).await,
        None => String::new(),
    }
}

async fn read_about<S: BrowsingSession>(session: &S) -> String {
    let Some(toggle) = session
        .find_one(Scope::Page, &Locator::text_contains("button", "About"))
        .await
    else {
        return String::new();
    };

    if let Err(err) = session.activate(&toggle).await {
        tracing::debug!(error = %err, "about toggle could not be activated");
        return String::new();
    }
    session.wait(Duration::from_secs(1)).await;

    read_first(session, &Locator::attr_contains("section", "id", "about")).await
}
