//! Name-based routing between markup actions and remote operations.

use std::fmt;
use std::str::FromStr;

use crate::actions::ActionKind;
use crate::error::VoiceError;
use crate::operations::OperationKind;
use crate::transport::ApiResponse;

/// A method name resolved to one of the two families.
///
/// Markup actions are tried first, so a name can never refer to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceMethod {
    Action(ActionKind),
    Operation(OperationKind),
}

impl FromStr for VoiceMethod {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(kind) = s.parse::<ActionKind>() {
            return Ok(VoiceMethod::Action(kind));
        }
        if let Ok(kind) = s.parse::<OperationKind>() {
            return Ok(VoiceMethod::Operation(kind));
        }
        Err(VoiceError::invalid_method(s))
    }
}

impl fmt::Display for VoiceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(kind) => fmt::Display::fmt(kind, f),
            Self::Operation(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

/// What a dispatched call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// A fragment was appended; carries the session's new fragment count
    Markup { fragments: usize },
    /// The remote operation succeeded
    Response(ApiResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_resolve_first() {
        assert_eq!(
            "Dial"
                .parse::<VoiceMethod>()
                .unwrap(),
            VoiceMethod::Action(ActionKind::Dial)
        );
        assert_eq!(
            "call"
                .parse::<VoiceMethod>()
                .unwrap(),
            VoiceMethod::Operation(OperationKind::Call)
        );
    }

    #[test]
    fn unknown_method_message() {
        let err = "hangup"
            .parse::<VoiceMethod>()
            .unwrap_err();
        assert_eq!(err.to_string(), "hangup is an invalid Voice SDK Method");
    }

    #[test]
    fn no_name_is_in_both_families() {
        for action in ActionKind::ALL {
            assert!(action
                .as_str()
                .parse::<OperationKind>()
                .is_err());
        }
    }

    #[test]
    fn display_uses_method_name() {
        assert_eq!(
            VoiceMethod::Action(ActionKind::GetDigits).to_string(),
            "getDigits"
        );
        assert_eq!(
            VoiceMethod::Operation(OperationKind::FetchQueuedCalls).to_string(),
            "fetchQueuedCalls"
        );
    }
}
