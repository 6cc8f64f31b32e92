//! The browsing-session capability trait.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::locator::{Locator, Scope};

/// A UI activation (click) that could not be performed: the element was not
/// interactable, was obstructed by another element, or had gone stale.
///
/// Callers cannot recover differently among those flavors, so they are
/// collapsed into one kind carrying the underlying detail for diagnostics.
#[derive(Debug, Error)]
#[error("could not activate element: {reason}")]
pub struct InteractionError {
    pub reason: String,
}

impl InteractionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Capability surface over a live browser session.
///
/// Every operation is awaited to completion before the next is issued; the
/// session is a single shared resource and callers serialize all access by
/// construction. Handles are only valid within the synchronous span between
/// their lookup and their use; re-locate rather than cache across a
/// navigation, since the page can re-render underneath.
#[async_trait]
pub trait BrowsingSession: Send + Sync {
    /// Opaque reference to one rendered element, owned by the session.
    type Handle: Send + Sync;

    /// Loads a page. Failure is not modeled: the session either succeeds or
    /// is left in a state where subsequent lookups resolve to absence.
    async fn navigate(&self, url: &str);

    /// Finds the first element matching `locator` within `scope`.
    ///
    /// Absence is a first-class result, never an error.
    async fn find_one(
        &self,
        scope: Scope<'_, Self::Handle>,
        locator: &Locator,
    ) -> Option<Self::Handle>;

    /// Finds all elements matching `locator` within `scope`, in document
    /// order. Empty on no matches.
    async fn find_all(
        &self,
        scope: Scope<'_, Self::Handle>,
        locator: &Locator,
    ) -> Vec<Self::Handle>;

    /// Performs a UI activation (click) on an element.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError`] when the element is not currently
    /// interactable, obstructed, or gone stale.
    async fn activate(&self, handle: &Self::Handle) -> Result<(), InteractionError>;

    /// Reads an element's visible text. Empty string when nothing is
    /// readable.
    async fn read_text(&self, handle: &Self::Handle) -> String;

    /// Reads an attribute value, or `None` when the attribute is absent.
    async fn read_attribute(&self, handle: &Self::Handle, name: &str) -> Option<String>;

    /// Whether the element currently accepts interaction.
    async fn is_enabled(&self, handle: &Self::Handle) -> bool;

    /// Blocking settle delay, used to let asynchronous page rendering catch
    /// up after a navigation or UI action.
    async fn wait(&self, duration: Duration);
}
