use std::fmt;

use crate::constants::PHONE_FORMAT_HINT;
use crate::error::{VoiceError, VoiceResult};
use crate::markup::{wrap_response, Element};
use crate::options::{ActionOptions, OptionReader};
use crate::validation::{all_phone_numbers, is_valid_url};

pub(crate) const MISSING_NUMBERS: &str = "Please specify at least one number to dial";
pub(crate) const INVALID_RING_BACK_TONE: &str = "Ringbacktone not a valid URL";
pub(crate) const INVALID_MAX_DURATION: &str = "Max duration must be an integer value";

/// Connect the caller to one or more numbers.
///
/// Renders inside its own `<Response>` wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial {
    /// Comma-separated list of numbers, each starting with `+`.
    pub phone_numbers: String,
    /// Audio played while the callee's phone rings.
    pub ring_back_tone: Option<String>,
    /// Record the bridged call.
    pub record: bool,
    /// Dial the numbers one after another instead of simultaneously.
    pub sequential: bool,
    /// Caller id presented to the callee.
    pub caller_id: Option<String>,
    /// Upper bound on the call length, in seconds.
    pub max_duration: Option<u32>,
}

impl Dial {
    pub fn new(phone_numbers: impl Into<String>) -> Self {
        Self {
            phone_numbers: phone_numbers.into(),
            ring_back_tone: None,
            record: false,
            sequential: false,
            caller_id: None,
            max_duration: None,
        }
    }

    pub fn ring_back_tone(mut self, url: impl Into<String>) -> Self {
        self.ring_back_tone = Some(url.into());
        self
    }

    pub fn record(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    pub fn sequential(mut self, sequential: bool) -> Self {
        self.sequential = sequential;
        self
    }

    pub fn caller_id(mut self, caller_id: impl Into<String>) -> Self {
        self.caller_id = Some(caller_id.into());
        self
    }

    pub fn max_duration(mut self, seconds: u32) -> Self {
        self.max_duration = Some(seconds);
        self
    }

    fn check_numbers(phone_numbers: &str) -> VoiceResult<()> {
        if phone_numbers.is_empty() {
            return Err(VoiceError::validation(MISSING_NUMBERS));
        }
        if !all_phone_numbers(phone_numbers) {
            return Err(VoiceError::validation(format!(
                "Phone number must be in the format {}",
                PHONE_FORMAT_HINT
            )));
        }
        Ok(())
    }

    pub fn validate(&self) -> VoiceResult<()> {
        Self::check_numbers(&self.phone_numbers)?;
        if let Some(ref tone) = self.ring_back_tone {
            if !is_valid_url(tone) {
                return Err(VoiceError::validation(INVALID_RING_BACK_TONE));
            }
        }
        Ok(())
    }
}

impl TryFrom<&ActionOptions> for Dial {
    type Error = VoiceError;

    fn try_from(options: &ActionOptions) -> Result<Self, Self::Error> {
        let reader = OptionReader::new(options);
        let phone_numbers = reader.required_text("phoneNumbers", MISSING_NUMBERS)?;
        Self::check_numbers(&phone_numbers)?;
        Ok(Dial {
            phone_numbers,
            ring_back_tone: reader.text("ringBackTone"),
            record: reader
                .flag("record")
                .unwrap_or(false),
            sequential: reader
                .flag("sequential")
                .unwrap_or(false),
            caller_id: reader.text("callerId"),
            max_duration: reader.integer("maxDuration", INVALID_MAX_DURATION)?,
        })
    }
}

impl fmt::Display for Dial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dial = Element::new("Dial")
            .attr("phoneNumbers", &self.phone_numbers)
            .flag("record", self.record)
            .flag("sequential", self.sequential)
            .attr_opt("callerId", self.caller_id.as_deref())
            .attr_opt("ringBackTone", self.ring_back_tone.as_deref())
            .attr_opt("maxDuration", self.max_duration)
            .build();
        f.write_str(&wrap_response(&dial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dial_with_record_only() {
        let dial = Dial::new("+254700000000,+254711111111").record(true);
        assert_eq!(
            dial.to_string(),
            r#"<Response><Dial phoneNumbers="+254700000000,+254711111111" record="1"></Dial></Response>"#
        );
    }

    #[test]
    fn dial_all_attributes_in_order() {
        let dial = Dial::new("+254700000000")
            .record(true)
            .sequential(true)
            .caller_id("+254722222222")
            .ring_back_tone("https://example.com/ring.mp3")
            .max_duration(60);
        assert_eq!(
            dial.to_string(),
            concat!(
                r#"<Response><Dial phoneNumbers="+254700000000" record="1" sequential="1" "#,
                r#"callerId="+254722222222" ringBackTone="https://example.com/ring.mp3" "#,
                r#"maxDuration="60"></Dial></Response>"#
            )
        );
    }

    #[test]
    fn dial_rejects_number_without_plus() {
        let err = Dial::new("254700000000")
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Phone number must be in the format '+2XXYYYYYYYYY'"
        );
    }

    #[test]
    fn dial_checks_each_entry() {
        assert!(Dial::new("+254700000000,254711111111")
            .validate()
            .is_err());
    }

    #[test]
    fn dial_from_options_requires_numbers() {
        let options = json!({"record": true});
        let err = Dial::try_from(options.as_object().unwrap()).unwrap_err();
        assert_eq!(err.to_string(), MISSING_NUMBERS);
    }

    #[test]
    fn dial_max_duration_must_be_integer() {
        for bad in [json!(-5), json!("long"), json!(2.5)] {
            let options = json!({"phoneNumbers": "+254700000000", "maxDuration": bad});
            let err = Dial::try_from(options.as_object().unwrap()).unwrap_err();
            assert_eq!(err.to_string(), INVALID_MAX_DURATION);
        }
    }

    #[test]
    fn dial_zero_max_duration_omitted() {
        let options = json!({"phoneNumbers": "+254700000000", "maxDuration": 0});
        let dial = Dial::try_from(options.as_object().unwrap()).unwrap();
        assert_eq!(
            dial.to_string(),
            r#"<Response><Dial phoneNumbers="+254700000000"></Dial></Response>"#
        );
    }

    #[test]
    fn dial_non_boolean_flags_fall_back() {
        let options = json!({"phoneNumbers": "+254700000000", "record": "yes", "sequential": 1});
        let dial = Dial::try_from(options.as_object().unwrap()).unwrap();
        assert!(!dial.record);
        assert!(!dial.sequential);
    }

    #[test]
    fn dial_bad_ring_back_tone() {
        let err = Dial::new("+254700000000")
            .ring_back_tone("ring.mp3")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_RING_BACK_TONE);
    }
}
