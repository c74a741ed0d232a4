use std::fmt;

use super::play::{Play, INVALID_PLAY_URL};
use super::say::{Say, MISSING_TEXT};
use crate::error::{VoiceError, VoiceResult};
use crate::markup::Element;
use crate::options::{ActionOptions, OptionReader};
use crate::validation::{is_numeric, is_valid_url};

pub(crate) const INVALID_NUM_DIGITS: &str = "Please set a number value for numDigits";
pub(crate) const INVALID_TIMEOUT: &str = "Please set a number value for the timeout";
pub(crate) const INVALID_CALLBACK_URL: &str = "Please set a valid callback URL";

/// Collect DTMF digits while a prompt plays.
///
/// The prompt is a nested `<Say>` built from `text`, followed by a nested
/// `<Play>` when `url` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDigits {
    /// Prompt read out while waiting for input.
    pub text: String,
    /// Audio played after the spoken prompt.
    pub url: Option<String>,
    /// Number of digits to collect.
    pub num_digits: Option<String>,
    /// Seconds to wait for input.
    pub timeout: Option<String>,
    /// Key that ends input, e.g. `#`.
    pub finish_on_key: Option<String>,
    /// URL that receives the collected digits.
    pub callback_url: Option<String>,
}

impl GetDigits {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            num_digits: None,
            timeout: None,
            finish_on_key: None,
            callback_url: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn num_digits(mut self, num_digits: impl ToString) -> Self {
        self.num_digits = Some(num_digits.to_string());
        self
    }

    pub fn timeout(mut self, seconds: impl ToString) -> Self {
        self.timeout = Some(seconds.to_string());
        self
    }

    pub fn finish_on_key(mut self, key: impl Into<String>) -> Self {
        self.finish_on_key = Some(key.into());
        self
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.text.is_empty() {
            return Err(VoiceError::validation(MISSING_TEXT));
        }
        if let Some(ref num_digits) = self.num_digits {
            if !is_numeric(num_digits) {
                return Err(VoiceError::validation(INVALID_NUM_DIGITS));
            }
        }
        if let Some(ref timeout) = self.timeout {
            if !is_numeric(timeout) {
                return Err(VoiceError::validation(INVALID_TIMEOUT));
            }
        }
        if let Some(ref url) = self.url {
            if !is_valid_url(url) {
                return Err(VoiceError::validation(INVALID_PLAY_URL));
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

impl TryFrom<&ActionOptions> for GetDigits {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let reader = OptionReader::new(options);
        let text = reader.required_text("text", MISSING_TEXT)?;
        Ok(GetDigits {
            text,
            url: reader.text("url"),
            num_digits: reader.numeric("numDigits", INVALID_NUM_DIGITS)?,
            timeout: reader.numeric("timeout", INVALID_TIMEOUT)?,
            finish_on_key: reader.text("finishOnKey"),
            callback_url: reader.text("callBackUrl"),
        })
    }
}

impl fmt::Display for GetDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut element = Element::new("GetDigits")
            .attr_opt("finishOnKey", self.finish_on_key.as_deref())
            .attr_opt("timeout", self.timeout.as_deref())
            .attr_opt("numDigits", self.num_digits.as_deref())
            .attr_opt("callBackUrl", self.callback_url.as_deref())
            .child(&Say::new(self.text.as_str()).to_string());
        if let Some(ref url) = self.url {
            element = element.child(&Play::new(url.as_str()).to_string());
        }
        f.write_str(&element.build())
    }
}
