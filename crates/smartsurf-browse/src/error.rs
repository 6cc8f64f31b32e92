//! Failure taxonomy for the inline connect flow.
//!
//! Every failure here is recoverable at the card level: the collector logs
//! the cause and falls back to link harvesting. There is no fatal error path
//! in this crate.

use thiserror::Error;

/// Insight text that could not be read as a mutual-connection count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightParseError {
    /// Zero or more than one maximal digit run was present. Text mixing a
    /// mutual count with another number (follower counts, dates) is rejected
    /// rather than guessed at.
    #[error("expected exactly one number in insight text, found {found}: {text:?}")]
    AmbiguousNumbers { found: usize, text: String },

    /// The single digit run does not fit the count type.
    #[error("mutual-connection count out of range in insight text: {text:?}")]
    OutOfRange { text: String },
}

/// A step of the two-step inline connect protocol that failed.
///
/// The two steps stay separately named so a caller could retry only the
/// confirmation step; the current caller folds both into one reported cause.
#[derive(Debug, Error)]
pub enum ActuatorError {
    /// The connect control was absent, disabled, or could not be activated.
    #[error("connect button {reason}")]
    ConnectButton { reason: String },

    /// The confirmation control never rendered or could not be activated.
    #[error("confirmation button {reason}")]
    PopupButton { reason: String },
}

impl ActuatorError {
    pub(crate) fn connect_button(reason: impl Into<String>) -> Self {
        ActuatorError::ConnectButton {
            reason: reason.into(),
        }
    }

    pub(crate) fn popup_button(reason: impl Into<String>) -> Self {
        ActuatorError::PopupButton {
            reason: reason.into(),
        }
    }
}

/// Why a card was not actioned inline.
#[derive(Debug, Error)]
pub enum InlineConnectCause {
    /// The card carries no insights region at all, as opposed to one whose
    /// text is unparseable.
    #[error("no insights region on card")]
    InsightsNotFound,

    #[error(transparent)]
    InsightParse(#[from] InsightParseError),

    /// The parsed count fell below the eligibility threshold.
    #[error("{found} mutual connections is below the required {required}")]
    LowMutualConnections { found: u64, required: u64 },

    /// Step 1 of the inline flow failed.
    #[error("connect button {reason}")]
    ConnectButton { reason: String },

    /// Step 2 of the inline flow failed.
    #[error("confirmation button {reason}")]
    PopupButton { reason: String },
}

impl From<ActuatorError> for InlineConnectCause {
    fn from(err: ActuatorError) -> Self {
        match err {
            ActuatorError::ConnectButton { reason } => InlineConnectCause::ConnectButton { reason },
            ActuatorError::PopupButton { reason } => InlineConnectCause::PopupButton { reason },
        }
    }
}

/// Umbrella failure for a card that could not be actioned inline.
///
/// The collector treats every cause identically (log and fall back), so the
/// gate normalizes all of them into this one kind before returning.
#[derive(Debug, Error)]
#[error("inline connect failed: {cause}")]
pub struct InlineConnectError {
    pub cause: InlineConnectCause,
}

impl From<InlineConnectCause> for InlineConnectError {
    fn from(cause: InlineConnectCause) -> Self {
        Self { cause }
    }
}
