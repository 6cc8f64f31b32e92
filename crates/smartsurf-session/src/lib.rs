//! Narrow capability surface over a live browser session.
//!
//! The rest of the workspace talks to the browser exclusively through the
//! [`BrowsingSession`] trait: lookups that treat absence as a first-class
//! result, activations that fail with a single generic interaction error,
//! and blocking settle delays. [`CdpSession`] is the production
//! implementation, driving a local Chromium over the DevTools protocol.

pub mod cdp;
pub mod locator;
pub mod session;

pub use cdp::{CdpSession, SessionError};
pub use locator::{Locator, Scope};
pub use session::{BrowsingSession, InteractionError};
