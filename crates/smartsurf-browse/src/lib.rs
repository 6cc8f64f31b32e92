//! Card evaluation and inline connection requests on a people-search page.
//!
//! Scanning a search page is a per-card state machine: parse the card's
//! mutual-connection insight, gate on a threshold, attempt the two-step
//! inline connect flow, and fall back to harvesting the card's profile link
//! when anything along the way fails. Every failure is classified into a
//! distinct recoverable cause; none may abort the multi-card scan.

pub mod collect;
pub mod connect;
pub mod error;
pub mod insights;
pub mod policy;
mod selectors;

pub use collect::collect_search_results;
pub use connect::InlineConnect;
pub use error::{ActuatorError, InlineConnectCause, InlineConnectError, InsightParseError};
pub use insights::parse_mutual_count;
pub use policy::BrowsePolicy;
