use std::fmt;

use crate::constants::DEFAULT_VOICE;
use crate::error::{VoiceError, VoiceResult};
use crate::markup::Element;
use crate::options::{ActionOptions, OptionReader};

pub(crate) const MISSING_TEXT: &str = "Please set text to be read out";

/// Read text out to the caller: `<Say voice=".." playBeep="1">text</Say>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Say {
    /// Text to speak.
    pub text: String,
    /// Voice name; defaults to `man`.
    pub voice: String,
    /// Play a beep before speaking.
    pub play_beep: bool,
}

impl Say {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: DEFAULT_VOICE.to_string(),
            play_beep: false,
        }
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn play_beep(mut self, play_beep: bool) -> Self {
        self.play_beep = play_beep;
        self
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.text.is_empty() {
            return Err(VoiceError::validation(MISSING_TEXT));
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for Say {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let reader = OptionReader::new(options);
        let text = reader.required_text("text", MISSING_TEXT)?;
        let mut say = Say::new(text);
        if let Some(voice) = reader.text("voice") {
            say.voice = voice;
        }
        say.play_beep = reader
            .flag("playBeep")
            .unwrap_or(false);
        Ok(say)
    }
}

impl fmt::Display for Say {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let voice = if self.voice.is_empty() {
            DEFAULT_VOICE
        } else {
            self.voice.as_str()
        };
        let xml = Element::new("Say")
            .attr("voice", voice)
            .flag("playBeep", self.play_beep)
            .text(&self.text)
            .build();
        f.write_str(&xml)
    }
}
