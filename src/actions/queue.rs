//! Call queue actions.

use std::fmt;

use crate::constants::PHONE_FORMAT_HINT;
use crate::error::{VoiceError, VoiceResult};
use crate::markup::{wrap_response, Element};
use crate::options::{ActionOptions, OptionReader};
use crate::validation::{is_phone_number, is_valid_url};

pub(crate) const INVALID_HOLD_MUSIC: &str = "Please set a valid URL value for holdMusic";
pub(crate) const MISSING_DEQUEUE_NUMBER: &str = "Please enter a valid phone number";

/// Place the caller in a queue: `<Response><Enqueue ..></Enqueue></Response>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enqueue {
    /// Audio played while the caller waits.
    pub hold_music: Option<String>,
    /// Queue name.
    pub name: Option<String>,
}

impl Enqueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold_music(mut self, url: impl Into<String>) -> Self {
        self.hold_music = Some(url.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if let Some(ref music) = self.hold_music {
            if !is_valid_url(music) {
                return Err(VoiceError::validation(INVALID_HOLD_MUSIC));
            }
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for Enqueue {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let reader = OptionReader::new(options);
        Ok(Enqueue {
            hold_music: reader.text("holdMusic"),
            name: reader.text("name"),
        })
    }
}

impl fmt::Display for Enqueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enqueue = Element::new("Enqueue")
            .attr_opt("holdMusic", self.hold_music.as_deref())
            .attr_opt("name", self.name.as_deref())
            .build();
        f.write_str(&wrap_response(&enqueue))
    }
}

/// Pull the next caller out of a queue into this call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dequeue {
    /// Number the queue was attached to.
    pub phone_number: String,
    /// Queue name.
    pub name: Option<String>,
}

impl Dequeue {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            name: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.phone_number.is_empty() {
            return Err(VoiceError::validation(MISSING_DEQUEUE_NUMBER));
        }
        if !is_phone_number(&self.phone_number) {
            return Err(VoiceError::validation(format!(
                "Phone number must be in the format {}",
                PHONE_FORMAT_HINT
            )));
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for Dequeue {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let reader = OptionReader::new(options);
        let phone_number = reader.required_text("phoneNumber", MISSING_DEQUEUE_NUMBER)?;
        Ok(Dequeue {
            phone_number,
            name: reader.text("name"),
        })
    }
}

impl fmt::Display for Dequeue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dequeue = Element::new("Dequeue")
            .attr("phoneNumber", &self.phone_number)
            .attr_opt("name", self.name.as_deref())
            .build();
        f.write_str(&wrap_response(&dequeue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enqueue_bare() {
        assert_eq!(
            Enqueue::new().to_string(),
            "<Response><Enqueue></Enqueue></Response>"
        );
    }

    #[test]
    fn enqueue_with_music_and_name() {
        let enqueue = Enqueue::new()
            .hold_music("https://example.com/hold.mp3")
            .name("support");
        assert_eq!(
            enqueue.to_string(),
            r#"<Response><Enqueue holdMusic="https://example.com/hold.mp3" name="support"></Enqueue></Response>"#
        );
    }

    #[test]
    fn enqueue_bad_hold_music() {
        let options = json!({"holdMusic": "music"});
        let enqueue = Enqueue::try_from(options.as_object().unwrap()).unwrap();
        let err = enqueue
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_HOLD_MUSIC);
    }

    #[test]
    fn dequeue_renders_number_and_name() {
        let dequeue = Dequeue::new("+254700000000").name("support");
        assert_eq!(
            dequeue.to_string(),
            r#"<Response><Dequeue phoneNumber="+254700000000" name="support"></Dequeue></Response>"#
        );
    }

    #[test]
    fn dequeue_requires_number() {
        let err = Dequeue::try_from(&ActionOptions::new()).unwrap_err();
        assert_eq!(err.to_string(), MISSING_DEQUEUE_NUMBER);
    }

    #[test]
    fn dequeue_requires_plus() {
        assert!(Dequeue::new("254700000000")
            .validate()
            .is_err());
    }
}
