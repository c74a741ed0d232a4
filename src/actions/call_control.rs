//! Actions that end or hand off the current call flow.

use std::fmt;

use crate::error::{VoiceError, VoiceResult};
use crate::markup::{wrap_response, Element};
use crate::options::{ActionOptions, OptionReader};

pub(crate) const MISSING_REDIRECT_URL: &str = "Please set a URL to redirect to";

/// Join the caller into a conference: `<Response><Conference /></Response>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conference;

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conference = Element::new("Conference")
            .self_closing()
            .build();
        f.write_str(&wrap_response(&conference))
    }
}

/// Hand control to another URL: `<Response><Redirect>url</Redirect></Response>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub url: String,
}

impl Redirect {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.url.is_empty() {
            return Err(VoiceError::validation(MISSING_REDIRECT_URL));
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for Redirect {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let url = OptionReader::new(options).required_text("url", MISSING_REDIRECT_URL)?;
        Ok(Redirect::new(url))
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redirect = Element::new("Redirect")
            .text(&self.url)
            .build();
        f.write_str(&wrap_response(&redirect))
    }
}

/// Reject an incoming call: `<Response><Reject /></Response>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reject;

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reject = Element::new("Reject")
            .self_closing()
            .build();
        f.write_str(&wrap_response(&reject))
    }
}
