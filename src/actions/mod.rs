//! Voice actions: one typed struct per XML element the call-control server
//! understands.
//!
//! Each struct renders its fragment through [`Display`](std::fmt::Display),
//! checks itself with `validate()`, and can be built from a loose
//! [`ActionOptions`] mapping with `TryFrom`.

pub mod call_control;
pub mod dial;
pub mod get_digits;
pub mod play;
pub mod queue;
pub mod record;
pub mod say;

use std::fmt;
use std::str::FromStr;

pub use call_control::{Conference, Redirect, Reject};
pub use dial::Dial;
pub use get_digits::GetDigits;
pub use play::Play;
pub use queue::{Dequeue, Enqueue};
pub use record::Record;
pub use say::Say;

use crate::error::{VoiceError, VoiceResult};
use crate::options::ActionOptions;

/// Names of the markup-producing actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Say,
    Play,
    GetDigits,
    Dial,
    Record,
    Enqueue,
    Dequeue,
    Conference,
    Redirect,
    Reject,
}

impl ActionKind {
    pub const ALL: [ActionKind; 10] = [
        ActionKind::Say,
        ActionKind::Play,
        ActionKind::GetDigits,
        ActionKind::Dial,
        ActionKind::Record,
        ActionKind::Enqueue,
        ActionKind::Dequeue,
        ActionKind::Conference,
        ActionKind::Redirect,
        ActionKind::Reject,
    ];

    /// Method name as used by the dispatcher.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Say => "say",
            ActionKind::Play => "play",
            ActionKind::GetDigits => "getDigits",
            ActionKind::Dial => "dial",
            ActionKind::Record => "record",
            ActionKind::Enqueue => "enqueue",
            ActionKind::Dequeue => "dequeue",
            ActionKind::Conference => "conference",
            ActionKind::Redirect => "redirect",
            ActionKind::Reject => "reject",
        }
    }

    /// Option key a bare scalar argument stands for.
    pub fn shorthand_key(&self) -> Option<&'static str> {
        match self {
            ActionKind::Say => Some("text"),
            ActionKind::Play | ActionKind::Redirect => Some("url"),
            ActionKind::Dial => Some("phoneNumbers"),
            ActionKind::Dequeue => Some("phoneNumber"),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .iter()
            .find(|kind| {
                kind.as_str()
                    .eq_ignore_ascii_case(s)
            })
            .copied()
            .ok_or_else(|| VoiceError::invalid_method(s))
    }
}

/// One voice action with its typed options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceAction {
    Say(Say),
    Play(Play),
    GetDigits(GetDigits),
    Dial(Dial),
    Record(Record),
    Enqueue(Enqueue),
    Dequeue(Dequeue),
    Conference(Conference),
    Redirect(Redirect),
    Reject(Reject),
}

impl VoiceAction {
    /// Convert a loose options mapping into the action named by `kind`.
    ///
    /// Required options are checked first, then numeric options. The result
    /// still has to pass [`VoiceAction::validate`].
    pub fn from_options(kind: ActionKind, options: &ActionOptions) -> VoiceResult<Self> {
        Ok(match kind {
            ActionKind::Say => VoiceAction::Say(options.try_into()?),
            ActionKind::Play => VoiceAction::Play(options.try_into()?),
            ActionKind::GetDigits => VoiceAction::GetDigits(options.try_into()?),
            ActionKind::Dial => VoiceAction::Dial(options.try_into()?),
            ActionKind::Record => VoiceAction::Record(options.try_into()?),
            ActionKind::Enqueue => VoiceAction::Enqueue(options.try_into()?),
            ActionKind::Dequeue => VoiceAction::Dequeue(options.try_into()?),
            ActionKind::Conference => VoiceAction::Conference(Conference),
            ActionKind::Redirect => VoiceAction::Redirect(options.try_into()?),
            ActionKind::Reject => VoiceAction::Reject(Reject),
        })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            VoiceAction::Say(_) => ActionKind::Say,
            VoiceAction::Play(_) => ActionKind::Play,
            VoiceAction::GetDigits(_) => ActionKind::GetDigits,
            VoiceAction::Dial(_) => ActionKind::Dial,
            VoiceAction::Record(_) => ActionKind::Record,
            VoiceAction::Enqueue(_) => ActionKind::Enqueue,
            VoiceAction::Dequeue(_) => ActionKind::Dequeue,
            VoiceAction::Conference(_) => ActionKind::Conference,
            VoiceAction::Redirect(_) => ActionKind::Redirect,
            VoiceAction::Reject(_) => ActionKind::Reject,
        }
    }

    pub fn validate(&self) -> VoiceResult<()> {
        match self {
            VoiceAction::Say(a) => a.validate(),
            VoiceAction::Play(a) => a.validate(),
            VoiceAction::GetDigits(a) => a.validate(),
            VoiceAction::Dial(a) => a.validate(),
            VoiceAction::Record(a) => a.validate(),
            VoiceAction::Enqueue(a) => a.validate(),
            VoiceAction::Dequeue(a) => a.validate(),
            VoiceAction::Redirect(a) => a.validate(),
            VoiceAction::Conference(_) | VoiceAction::Reject(_) => Ok(()),
        }
    }
}

impl fmt::Display for VoiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceAction::Say(a) => fmt::Display::fmt(a, f),
            VoiceAction::Play(a) => fmt::Display::fmt(a, f),
            VoiceAction::GetDigits(a) => fmt::Display::fmt(a, f),
            VoiceAction::Dial(a) => fmt::Display::fmt(a, f),
            VoiceAction::Record(a) => fmt::Display::fmt(a, f),
            VoiceAction::Enqueue(a) => fmt::Display::fmt(a, f),
            VoiceAction::Dequeue(a) => fmt::Display::fmt(a, f),
            VoiceAction::Conference(a) => fmt::Display::fmt(a, f),
            VoiceAction::Redirect(a) => fmt::Display::fmt(a, f),
            VoiceAction::Reject(a) => fmt::Display::fmt(a, f),
        }
    }
}

macro_rules! impl_from_action {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for VoiceAction {
                fn from(action: $variant) -> Self {
                    VoiceAction::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    Say, Play, GetDigits, Dial, Record, Enqueue, Dequeue, Conference, Redirect, Reject
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_from_str_is_case_insensitive() {
        assert_eq!(
            "Say"
                .parse::<ActionKind>()
                .unwrap(),
            ActionKind::Say
        );
        assert_eq!(
            "getdigits"
                .parse::<ActionKind>()
                .unwrap(),
            ActionKind::GetDigits
        );
        assert!("call"
            .parse::<ActionKind>()
            .is_err());
    }

    #[test]
    fn kind_display_round_trip() {
        for kind in ActionKind::ALL {
            assert_eq!(
                kind.to_string()
                    .parse::<ActionKind>()
                    .unwrap(),
                kind
            );
        }
    }

    #[test]
    fn from_options_builds_typed_action() {
        let options = json!({"text": "Hello", "voice": "woman", "playBeep": true});
        let action =
            VoiceAction::from_options(ActionKind::Say, options.as_object().unwrap()).unwrap();
        assert_eq!(action.kind(), ActionKind::Say);
        assert_eq!(
            action.to_string(),
            r#"<Say voice="woman" playBeep="1">Hello</Say>"#
        );
    }

    #[test]
    fn options_free_actions_ignore_input() {
        let options = json!({"anything": "goes"});
        let conference =
            VoiceAction::from_options(ActionKind::Conference, options.as_object().unwrap())
                .unwrap();
        assert_eq!(conference, VoiceAction::Conference(Conference));
    }
}
