//! Card eligibility gate and the inline connect actuator.

use smartsurf_session::{BrowsingSession, Scope};

use crate::error::{ActuatorError, InlineConnectCause, InlineConnectError};
use crate::insights::parse_mutual_count;
use crate::selectors;

/// Drives the per-card eligibility decision and the two-step inline connect
/// protocol against one browsing session.
pub struct InlineConnect<'a, S> {
    session: &'a S,
    min_mutual_connections: u64,
}

impl<'a, S: BrowsingSession> InlineConnect<'a, S> {
    pub fn new(session: &'a S, min_mutual_connections: u64) -> Self {
        Self {
            session,
            min_mutual_connections,
        }
    }

    /// Evaluates a card and sends an inline connection request when it
    /// qualifies.
    ///
    /// Checks run strictly in order (insights region present, insight text
    /// parseable, count at or above the threshold) and only then is the
    /// actuator invoked. A card failing an earlier check never reaches the
    /// later ones, regardless of its button state.
    ///
    /// # Errors
    ///
    /// Every underlying cause is normalized into the umbrella
    /// [`InlineConnectError`]; the caller logs it and falls back.
    pub async fn evaluate_and_connect(&self, card: &S::Handle) -> Result<(), InlineConnectError> {
        self.evaluate(card).await.map_err(InlineConnectError::from)
    }

    async fn evaluate(&self, card: &S::Handle) -> Result<(), InlineConnectCause> {
        let insights = self
            .session
            .find_one(Scope::Within(card), &selectors::insights_region())
            .await
            .ok_or(InlineConnectCause::InsightsNotFound)?;

        let text = self.session.read_text(&insights).await;
        let found = parse_mutual_count(&text)?;

        if found < self.min_mutual_connections {
            return Err(InlineConnectCause::LowMutualConnections {
                found,
                required: self.min_mutual_connections,
            });
        }

        self.attempt_inline_connect(card).await?;
        Ok(())
    }

    /// Runs the two-step inline connect protocol against a qualifying card:
    /// activate the card's connect control, then activate the "Send without
    /// a note" confirmation anywhere on the page.
    ///
    /// No rollback exists: when the confirmation step fails after the
    /// connect click already fired, the flow is left half-initiated on the
    /// page and only the failure is reported.
    ///
    /// # Errors
    ///
    /// [`ActuatorError::ConnectButton`] when step 1 fails (control absent,
    /// disabled, or not activatable); [`ActuatorError::PopupButton`] when
    /// the confirmation never renders or cannot be activated.
    pub async fn attempt_inline_connect(&self, card: &S::Handle) -> Result<(), ActuatorError> {
        let connect = self
            .session
            .find_one(Scope::Within(card), &selectors::connect_button())
            .await
            .ok_or_else(|| ActuatorError::connect_button("not found"))?;

        if !self.session.is_enabled(&connect).await {
            return Err(ActuatorError::connect_button("not enabled"));
        }

        self.session
            .activate(&connect)
            .await
            .map_err(|err| ActuatorError::connect_button(err.reason))?;

        let confirmation = self
            .session
            .find_one(Scope::Page, &selectors::send_without_note_button())
            .await
            .ok_or_else(|| ActuatorError::popup_button("not found"))?;

        self.session
            .activate(&confirmation)
            .await
            .map_err(|err| ActuatorError::popup_button(err.reason))?;

        Ok(())
    }
}
