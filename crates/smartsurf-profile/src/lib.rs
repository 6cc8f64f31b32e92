//! Profile-page reading and relevance scoring.
//!
//! Everything here is best effort: a profile page that fails to yield a
//! field degrades to an empty string, and a failed connection attempt is a
//! `false`, never an error; the orchestration loop moves on either way.

pub mod connect;
pub mod extract;
pub mod score;

pub use connect::send_connect;
pub use extract::{extract_profile_info, ProfileText};
pub use score::is_relevant_profile;
