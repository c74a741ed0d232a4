use std::fmt;

use crate::error::{VoiceError, VoiceResult};
use crate::markup::Element;
use crate::options::{ActionOptions, OptionReader};
use crate::validation::is_valid_url;

pub(crate) const INVALID_PLAY_URL: &str = "Play URL is not valid";

/// Play an audio file: `<Play url=".."></Play>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// Publicly reachable audio URL.
    pub url: String,
}

impl Play {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if !is_valid_url(&self.url) {
            return Err(VoiceError::validation(INVALID_PLAY_URL));
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for Play {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let url = OptionReader::new(options).required_text("url", INVALID_PLAY_URL)?;
        Ok(Play::new(url))
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            &Element::new("Play")
                .attr("url", &self.url)
                .build(),
        )
    }
}
