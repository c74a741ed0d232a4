//! Fragment accumulation for one call flow.

use tracing::{debug, trace};

use crate::actions::{
    ActionKind, Conference, Dequeue, Dial, Enqueue, GetDigits, Play, Record, Redirect, Reject,
    Say, VoiceAction,
};
use crate::error::VoiceResult;
use crate::options::ActionOptions;

/// Chainable builder that collects rendered voice actions in call order.
///
/// Every action method validates first and only appends on success, so a
/// rejected action leaves earlier fragments untouched and the session can
/// keep being used.
///
/// ```rust
/// use africastalking_voice::{Dial, Say, VoiceError, VoiceSession};
///
/// fn main() -> Result<(), VoiceError> {
///     let mut session = VoiceSession::new("sandbox");
///     session
///         .say(Say::new("Connecting you now"))?
///         .dial(Dial::new("+254711082000").record(true))?;
///
///     let xml = session.build().unwrap_or_default();
///     assert!(xml.starts_with("<Say"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct VoiceSession {
    username: String,
    fragments: Vec<String>,
}

impl VoiceSession {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            fragments: Vec::new(),
        }
    }

    /// Account the session was created for
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Validate, render and append one action
    pub fn push(&mut self, action: impl Into<VoiceAction>) -> VoiceResult<&mut Self> {
        let action = action.into();
        if let Err(e) = action.validate() {
            debug!("Rejected {} action: {}", action.kind(), e);
            return Err(e);
        }

        let fragment = action.to_string();
        trace!("[SESSION] Appending fragment: {}", fragment);
        self.fragments
            .push(fragment);
        debug!(
            "Appended {} action ({} fragments)",
            action.kind(),
            self.fragments
                .len()
        );
        Ok(self)
    }

    /// Build the action named by `kind` from loose options and append it
    pub fn apply(&mut self, kind: ActionKind, options: &ActionOptions) -> VoiceResult<&mut Self> {
        let action = match VoiceAction::from_options(kind, options) {
            Ok(action) => action,
            Err(e) => {
                debug!("Rejected {} options: {}", kind, e);
                return Err(e);
            }
        };
        self.push(action)
    }

    pub fn say(&mut self, say: Say) -> VoiceResult<&mut Self> {
        self.push(say)
    }

    pub fn play(&mut self, play: Play) -> VoiceResult<&mut Self> {
        self.push(play)
    }

    pub fn get_digits(&mut self, get_digits: GetDigits) -> VoiceResult<&mut Self> {
        self.push(get_digits)
    }

    pub fn dial(&mut self, dial: Dial) -> VoiceResult<&mut Self> {
        self.push(dial)
    }

    pub fn record(&mut self, record: Record) -> VoiceResult<&mut Self> {
        self.push(record)
    }

    pub fn enqueue(&mut self, enqueue: Enqueue) -> VoiceResult<&mut Self> {
        self.push(enqueue)
    }

    pub fn dequeue(&mut self, dequeue: Dequeue) -> VoiceResult<&mut Self> {
        self.push(dequeue)
    }

    pub fn conference(&mut self) -> VoiceResult<&mut Self> {
        self.push(Conference)
    }

    pub fn redirect(&mut self, url: impl Into<String>) -> VoiceResult<&mut Self> {
        self.push(Redirect::new(url))
    }

    pub fn reject(&mut self) -> VoiceResult<&mut Self> {
        self.push(Reject)
    }

    /// Fragments rendered so far, in call order
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments
            .is_empty()
    }

    /// Concatenate every fragment, or `None` if nothing was appended.
    ///
    /// Does not consume or clear the buffer.
    pub fn build(&self) -> Option<String> {
        if self.fragments.is_empty() {
            return None;
        }
        Some(self.fragments.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_session_builds_nothing() {
        let session = VoiceSession::new("sandbox");
        assert!(session.build().is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn build_concatenates_in_call_order() {
        let mut session = VoiceSession::new("sandbox");
        session
            .say(Say::new("Hi"))
            .unwrap()
            .conference()
            .unwrap()
            .reject()
            .unwrap();
        assert_eq!(
            session
                .build()
                .unwrap(),
            concat!(
                r#"<Say voice="man">Hi</Say>"#,
                "<Response><Conference /></Response>",
                "<Response><Reject /></Response>"
            )
        );
    }

    #[test]
    fn build_is_idempotent() {
        let mut session = VoiceSession::new("sandbox");
        session
            .redirect("http://example.com/next")
            .unwrap();
        assert_eq!(session.build(), session.build());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn failed_action_keeps_earlier_fragments() {
        let mut session = VoiceSession::new("sandbox");
        session
            .say(Say::new("Hello"))
            .unwrap();
        assert!(session
            .play(Play::new("bad-url"))
            .is_err());
        assert_eq!(session.fragments(), &[r#"<Say voice="man">Hello</Say>"#.to_string()]);
    }

    #[test]
    fn apply_rejects_bad_numbers_without_appending() {
        let mut session = VoiceSession::new("sandbox");
        let options = json!({"phoneNumbers": "254700000000"});
        let err = session
            .apply(ActionKind::Dial, options.as_object().unwrap())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(session.build().is_none());
    }

    #[test]
    fn username_is_kept() {
        assert_eq!(VoiceSession::new("myapp").username(), "myapp");
    }
}
