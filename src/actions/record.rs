use std::fmt;

use super::get_digits::{INVALID_CALLBACK_URL, INVALID_TIMEOUT};
use crate::error::{VoiceError, VoiceResult};
use crate::markup::{wrap_response, Element};
use crate::options::{ActionOptions, OptionReader};
use crate::validation::{is_numeric, is_valid_url};

pub(crate) const INVALID_MAX_LENGTH: &str = "Please set a number value for maxLength";

/// Record the caller.
///
/// With every field unset this is a *terminal* recording, rendered as
/// `<Response><Record /></Response>`. Setting any field produces a partial
/// recording `<Record ..></Record>` without a wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Key that ends the recording.
    pub finish_on_key: Option<String>,
    /// Maximum recording length, in seconds.
    pub max_length: Option<String>,
    /// Seconds of silence before the recording stops.
    pub timeout: Option<String>,
    /// Strip leading and trailing silence.
    pub trim_silence: bool,
    /// Beep before recording starts.
    pub play_beep: bool,
    /// URL that receives the recording.
    pub callback_url: Option<String>,
}

impl Record {
    /// Terminal recording of the remainder of the call
    pub fn terminal() -> Self {
        Self::default()
    }

    pub fn finish_on_key(mut self, key: impl Into<String>) -> Self {
        self.finish_on_key = Some(key.into());
        self
    }

    pub fn max_length(mut self, seconds: impl ToString) -> Self {
        self.max_length = Some(seconds.to_string());
        self
    }

    pub fn timeout(mut self, seconds: impl ToString) -> Self {
        self.timeout = Some(seconds.to_string());
        self
    }

    pub fn trim_silence(mut self, trim: bool) -> Self {
        self.trim_silence = trim;
        self
    }

    pub fn play_beep(mut self, play_beep: bool) -> Self {
        self.play_beep = play_beep;
        self
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn is_terminal(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if let Some(ref max_length) = self.max_length {
            if !is_numeric(max_length) {
                return Err(VoiceError::validation(INVALID_MAX_LENGTH));
            }
        }
        if let Some(ref timeout) = self.timeout {
            if !is_numeric(timeout) {
                return Err(VoiceError::validation(INVALID_TIMEOUT));
            }
        }
        if let Some(ref callback) = self.callback_url {
            if !is_valid_url(callback) {
                return Err(VoiceError::validation(INVALID_CALLBACK_URL));
            }
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for Record {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let reader = OptionReader::new(options);
        if reader.is_empty() {
            return Ok(Record::terminal());
        }
        Ok(Record {
            finish_on_key: reader.text("finishOnKey"),
            max_length: reader.numeric("maxLength", INVALID_MAX_LENGTH)?,
            timeout: reader.numeric("timeout", INVALID_TIMEOUT)?,
            trim_silence: reader
                .flag("trimSilence")
                .unwrap_or(false),
            play_beep: reader
                .flag("playBeep")
                .unwrap_or(false),
            callback_url: reader.text("callBackUrl"),
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_terminal() {
            let record = Element::new("Record")
                .self_closing()
                .build();
            return f.write_str(&wrap_response(&record));
        }
        let record = Element::new("Record")
            .attr_opt("finishOnKey", self.finish_on_key.as_deref())
            .attr_opt("maxLength", self.max_length.as_deref())
            .attr_opt("timeout", self.timeout.as_deref())
            .flag("trimSilence", self.trim_silence)
            .flag("playBeep", self.play_beep)
            .attr_opt("callBackUrl", self.callback_url.as_deref())
            .build();
        f.write_str(&record)
    }
}
