//! Chromium-backed session implementation over the DevTools protocol.
//!
//! Launches a headed Chromium with a persistent user-data directory so the
//! operator's interactive login survives across runs, then exposes the
//! [`BrowsingSession`] capability surface on the single active page. The
//! session is acquired once at process start and torn down exactly once via
//! [`CdpSession::shutdown`].

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Element, Page};
use futures::StreamExt;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::locator::{Locator, Scope};
use crate::session::{BrowsingSession, InteractionError};

/// Failure to bring up or drive the browser process itself. Everything past
/// launch degrades to absence or [`InteractionError`] instead.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid browser configuration: {0}")]
    Config(String),

    #[error("browser error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),
}

/// A live Chromium session driving one page.
pub struct CdpSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl CdpSession {
    /// Launches Chromium with a visible window and the given user-data
    /// directory, and opens a blank page.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the configuration is rejected or the
    /// browser process cannot be started.
    pub async fn launch(user_data_dir: impl AsRef<Path>) -> Result<Self, SessionError> {
        // Persistent profile: keeps the operator's login across runs.
        let profile_arg = format!("--user-data-dir={}", user_data_dir.as_ref().display());
        let config = BrowserConfig::builder()
            .with_head()
            .args(vec![profile_arg])
            .build()
            .map_err(SessionError::Config)?;

        let (browser, mut handler) = Browser::launch(config).await?;

        // The websocket handler must be polled for the browser to function.
        let handler_task = tokio::spawn(async move {
            while handler.next().await.is_some() {}
        });

        let page = browser.new_page("about:blank").await?;
        tracing::info!("browser session started");

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// Tears the session down: closes the browser and stops the
    /// event-handler task.
    pub async fn shutdown(mut self) {
        if let Err(err) = self.browser.close().await {
            tracing::warn!(error = %err, "browser did not close cleanly");
        }
        self.handler_task.abort();
        tracing::info!("browser session ended");
    }

    /// Runs the candidate query for `locator` within `scope`, degrading
    /// every driver error to an empty result.
    async fn candidates(&self, scope: Scope<'_, Element>, locator: &Locator) -> Vec<Element> {
        let css = locator.candidate_css();
        let found = match scope {
            Scope::Page => self.page.find_elements(css.as_str()).await,
            Scope::Within(handle) => handle.find_elements(css.as_str()).await,
        };
        match found {
            Ok(elements) => elements,
            Err(err) => {
                tracing::debug!(selector = %css, error = %err, "lookup resolved to no elements");
                Vec::new()
            }
        }
    }

    async fn element_text(&self, element: &Element) -> String {
        match element.inner_text().await {
            Ok(Some(text)) => text,
            Ok(None) => String::new(),
            Err(err) => {
                tracing::debug!(error = %err, "could not read element text");
                String::new()
            }
        }
    }

    async fn element_attribute(&self, element: &Element, name: &str) -> Option<String> {
        match element.attribute(name).await {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(attribute = name, error = %err, "could not read attribute");
                None
            }
        }
    }
}

#[async_trait]
impl BrowsingSession for CdpSession {
    type Handle = Element;

    async fn navigate(&self, url: &str) {
        if let Err(err) = self.page.goto(url).await {
            tracing::warn!(url, error = %err, "navigation did not complete cleanly");
        }
    }

    async fn find_one(&self, scope: Scope<'_, Element>, locator: &Locator) -> Option<Element> {
        let candidates = self.candidates(scope, locator).await;
        if !matches!(locator, Locator::TextContains { .. }) {
            return candidates.into_iter().next();
        }
        for element in candidates {
            if locator.matches_text(&self.element_text(&element).await) {
                return Some(element);
            }
        }
        None
    }

    async fn find_all(&self, scope: Scope<'_, Element>, locator: &Locator) -> Vec<Element> {
        let candidates = self.candidates(scope, locator).await;
        if !matches!(locator, Locator::TextContains { .. }) {
            return candidates;
        }
        let mut matched = Vec::new();
        for element in candidates {
            if locator.matches_text(&self.element_text(&element).await) {
                matched.push(element);
            }
        }
        matched
    }

    async fn activate(&self, handle: &Element) -> Result<(), InteractionError> {
        handle
            .click()
            .await
            .map(|_| ())
            .map_err(|err| InteractionError::new(err.to_string()))
    }

    async fn read_text(&self, handle: &Element) -> String {
        self.element_text(handle).await
    }

    async fn read_attribute(&self, handle: &Element, name: &str) -> Option<String> {
        self.element_attribute(handle, name).await
    }

    async fn is_enabled(&self, handle: &Element) -> bool {
        if self.element_attribute(handle, "disabled").await.is_some() {
            return false;
        }
        self.element_attribute(handle, "aria-disabled")
            .await
            .map_or(true, |value| value != "true")
    }

    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
